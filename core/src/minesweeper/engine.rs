use core::num::Saturating;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use super::*;
use crate::*;

/// Timer display tops out here.
pub const MAX_ELAPSED_SECS: u64 = 999;

/// Lifecycle of one round: waiting for the first reveal, in play, or decided.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Ready,
    Active,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Board size plus an optional fixed seed for mine placement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinesweeperConfig {
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// One Minesweeper table: board, mine generator, flag counter and clock.
#[derive(Clone, Debug)]
pub struct Minesweeper<G = RandomMineGenerator> {
    board: Board,
    generator: G,
    state: EngineState,
    flagged_count: Saturating<CellCount>,
    triggered_mine: Option<Coord2>,
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
}

impl Minesweeper {
    pub fn new(config: BoardConfig) -> Result<Self> {
        Self::with_generator(config, RandomMineGenerator::from_entropy())
    }

    pub fn with_seed(config: BoardConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomMineGenerator::new(seed))
    }

    pub fn from_config(config: &MinesweeperConfig) -> Result<Self> {
        match config.seed {
            Some(seed) => Self::with_seed(config.board, seed),
            None => Self::new(config.board),
        }
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }
}

impl<G: MineGenerator> Minesweeper<G> {
    pub fn with_generator(config: BoardConfig, generator: G) -> Result<Self> {
        Ok(Self {
            board: Board::new(config)?,
            generator,
            state: Default::default(),
            flagged_count: Saturating(0),
            triggered_mine: None,
            started_at: None,
            ended_at: None,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    /// Flags placed by the player, right or wrong.
    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    /// Mine counter display: goes negative when the player over-flags.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.board.mine_count()) - i32::from(self.flagged_count.0)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Seconds since mines were placed, frozen once the game ends.
    pub fn elapsed_secs(&self) -> u64 {
        let Some(started_at) = self.started_at else {
            return 0;
        };
        let until = self.ended_at.unwrap_or_else(Instant::now);
        until
            .saturating_duration_since(started_at)
            .as_secs()
            .min(MAX_ELAPSED_SECS)
    }

    pub fn is_correctly_flagged(&self, coords: Coord2) -> bool {
        is_correctly_flagged(&self.board, coords)
    }

    pub fn check_win_condition(&self) -> bool {
        check_win_condition(&self.board)
    }

    /// Mine locations for the post-loss display, empty while the game is undecided or won.
    pub fn revealed_mines(&self) -> Vec<Coord2> {
        if matches!(self.state, EngineState::Lost) {
            mine_locations(&self.board)
        } else {
            Vec::new()
        }
    }

    pub fn square_view(&self, coords: Coord2) -> SquareView {
        let Some(square) = self.board.square(coords) else {
            return SquareView::Hidden;
        };

        if matches!(self.state, EngineState::Lost) && square.is_mine() {
            if self.triggered_mine == Some(coords) {
                return SquareView::TriggeredMine;
            }
            if square.state != SquareState::Flagged {
                return SquareView::Mine;
            }
        }

        match square.state {
            SquareState::Hidden => SquareView::Hidden,
            SquareState::Flagged => SquareView::Flagged,
            SquareState::QuestionMark => SquareView::QuestionMarked,
            SquareState::Revealed => SquareView::Revealed(square.adjacent_mines),
        }
    }

    /// Opens a square. The first open of a round lays the mines around it.
    ///
    /// A flag on the target is removed first; a mine underneath still loses.
    pub fn left_click(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        if self.board.place_mines(coords, &mut self.generator) {
            self.mark_started();
        }

        if self.board.square_state(coords) == SquareState::Flagged {
            self.board.set_square_state(coords, SquareState::Hidden);
            self.flagged_count -= 1;
        }

        if self.board.is_mine(coords) {
            self.triggered_mine = Some(coords);
            self.end_game(false);
            return Ok(HitMine);
        }

        let revealed = reveal_square(&mut self.board, coords);
        if board_won(&self.board) {
            self.end_game(true);
            Ok(Won)
        } else if revealed == 0 {
            Ok(NoChange)
        } else {
            Ok(Revealed)
        }
    }

    /// Cycles Hidden -> Flagged -> QuestionMark -> Hidden. Revealed squares are left alone.
    pub fn right_click(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use MarkOutcome::*;

        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        let current = self.board.square_state(coords);
        let Some(next) = current.cycled() else {
            return Ok(NoChange);
        };

        self.board.set_square_state(coords, next);
        match (current, next) {
            (_, SquareState::Flagged) => self.flagged_count += 1,
            (SquareState::Flagged, _) => self.flagged_count -= 1,
            _ => {}
        }

        if board_won(&self.board) {
            self.end_game(true);
            Ok(Won)
        } else {
            Ok(Changed)
        }
    }

    /// Clears the board for another round with the same dimensions.
    pub fn start_new_game(&mut self) {
        self.board.reset();
        self.state = EngineState::Ready;
        self.flagged_count = Saturating(0);
        self.triggered_mine = None;
        self.started_at = None;
        self.ended_at = None;
        log::debug!("New game on a {:?} board", self.board.size());
    }

    fn mark_started(&mut self) {
        if matches!(self.state, EngineState::Ready) {
            self.state = EngineState::Active;
            self.started_at = Some(Instant::now());
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            EngineState::Won
        } else {
            EngineState::Lost
        };
        self.ended_at = Some(Instant::now());
        log::debug!(
            "Game ended ({:?}) after {}s, triggered mine: {:?}",
            self.state,
            self.elapsed_secs(),
            self.triggered_mine
        );
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

/// Win check that only counts once mines exist.
fn board_won(board: &Board) -> bool {
    board.mines_placed() && check_win_condition(board)
}
