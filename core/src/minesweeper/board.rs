use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::{MineGenerator, Square, SquareKind, SquareState};
use crate::*;

/// Board dimensions and mine total.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const BEGINNER: Self = Self::new_unchecked(9, 9, 10);
    pub const INTERMEDIATE: Self = Self::new_unchecked(16, 16, 40);
    pub const EXPERT: Self = Self::new_unchecked(16, 30, 99);

    /// Cells kept mine-free around the first click.
    pub const SAFE_ZONE: CellCount = 9;

    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "beginner" => Some(Self::BEGINNER),
            "intermediate" => Some(Self::INTERMEDIATE),
            "expert" => Some(Self::EXPERT),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::EmptyBoard);
        }
        if self.mines > self.total_cells().saturating_sub(Self::SAFE_ZONE) {
            return Err(GameError::TooManyMines);
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    /// At most 255 x 255, which fits a `CellCount`.
    pub const fn total_cells(&self) -> CellCount {
        self.rows as CellCount * self.cols as CellCount
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::EXPERT
    }
}

/// Grid accessors shared by click handling, reveal propagation and win checks.
///
/// Out-of-range coordinates never panic: queries fall back to `false`,
/// [`SquareState::Hidden`] or `0`, and writes are ignored.
pub trait BoardAccess {
    fn size(&self) -> Coord2;

    fn is_mine(&self, coords: Coord2) -> bool;

    fn square_state(&self, coords: Coord2) -> SquareState;

    fn set_square_state(&mut self, coords: Coord2, state: SquareState);

    fn adjacent_mines(&self, coords: Coord2) -> u8;

    fn is_valid_cell(&self, coords: Coord2) -> bool {
        let (rows, cols) = self.size();
        coords.0 < rows && coords.1 < cols
    }

    fn neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> {
        neighbors(coords, self.size())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    grid: Array2<Square>,
    mines_placed: bool,
}

impl Board {
    pub fn new(config: BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            grid: Array2::default(config.size().to_nd_index()),
            mines_placed: false,
        })
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.is_valid_cell(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn square(&self, coords: Coord2) -> Option<&Square> {
        self.grid.get(coords.to_nd_index())
    }

    pub fn square_kind(&self, coords: Coord2) -> SquareKind {
        self.square(coords).map_or(SquareKind::Empty, |square| square.kind)
    }

    /// Clears every square and re-arms mine placement.
    pub fn reset(&mut self) {
        self.grid.fill(Square::default());
        self.mines_placed = false;
    }

    /// Places the round's mines around `first_click`, once per round.
    ///
    /// Returns `false` without touching the grid when mines are already down
    /// or `first_click` is off the board.
    pub fn place_mines<G: MineGenerator + ?Sized>(
        &mut self,
        first_click: Coord2,
        generator: &mut G,
    ) -> bool {
        if self.mines_placed || !self.is_valid_cell(first_click) {
            return false;
        }

        for coords in generator.generate(self.config, first_click) {
            if let Some(square) = self.grid.get_mut(coords.to_nd_index()) {
                square.kind = SquareKind::Mine;
            }
        }

        self.calculate_adjacent_mines();
        self.mines_placed = true;

        let placed = self.grid.iter().filter(|square| square.is_mine()).count();
        if placed != usize::from(self.config.mines) {
            log::warn!(
                "Placed mine count mismatch, actual: {}, requested: {}",
                placed,
                self.config.mines
            );
        }
        log::debug!("Placed {} mines avoiding {:?}", placed, first_click);
        true
    }

    /// Lays mines at fixed coordinates, bypassing the generator.
    ///
    /// The board's mine total becomes the number of distinct coordinates given.
    /// Like [`Board::place_mines`], returns `false` once mines are down.
    pub fn place_mines_at(&mut self, mine_coords: &[Coord2]) -> Result<bool> {
        if self.mines_placed {
            return Ok(false);
        }
        for &coords in mine_coords {
            self.validate_coords(coords)?;
        }
        for &coords in mine_coords {
            self.grid[coords.to_nd_index()].kind = SquareKind::Mine;
        }

        let placed = self.grid.iter().filter(|square| square.is_mine()).count();
        self.config.mines = CellCount::try_from(placed).unwrap_or(CellCount::MAX);
        self.calculate_adjacent_mines();
        self.mines_placed = true;
        Ok(true)
    }

    /// Recounts mine neighbors for every non-mine square and reclassifies it.
    pub fn calculate_adjacent_mines(&mut self) {
        let (rows, cols) = self.config.size();
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                if self.grid[coords.to_nd_index()].is_mine() {
                    continue;
                }
                let count = self
                    .neighbors(coords)
                    .filter(|&pos| self.grid[pos.to_nd_index()].is_mine())
                    .count();
                let count = u8::try_from(count).unwrap_or(u8::MAX);

                let square = &mut self.grid[coords.to_nd_index()];
                square.adjacent_mines = count;
                square.kind = if count > 0 {
                    SquareKind::Number
                } else {
                    SquareKind::Empty
                };
            }
        }
    }
}

impl BoardAccess for Board {
    fn size(&self) -> Coord2 {
        self.config.size()
    }

    fn is_mine(&self, coords: Coord2) -> bool {
        self.square(coords).is_some_and(Square::is_mine)
    }

    fn square_state(&self, coords: Coord2) -> SquareState {
        self.square(coords).map_or(SquareState::Hidden, |square| square.state)
    }

    fn set_square_state(&mut self, coords: Coord2, state: SquareState) {
        if let Some(square) = self.grid.get_mut(coords.to_nd_index()) {
            square.state = state;
        }
    }

    fn adjacent_mines(&self, coords: Coord2) -> u8 {
        self.square(coords).map_or(0, |square| square.adjacent_mines)
    }
}
