use serde::{Deserialize, Serialize};

/// What a square holds, fixed once mines are placed for the round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareKind {
    Empty,
    Number,
    Mine,
}

impl Default for SquareKind {
    fn default() -> Self {
        Self::Empty
    }
}

/// Player-facing mark on a square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareState {
    Hidden,
    Revealed,
    Flagged,
    QuestionMark,
}

impl SquareState {
    /// Next state in the right-click cycle, `None` for revealed squares.
    pub const fn cycled(self) -> Option<Self> {
        match self {
            Self::Hidden => Some(Self::Flagged),
            Self::Flagged => Some(Self::QuestionMark),
            Self::QuestionMark => Some(Self::Hidden),
            Self::Revealed => None,
        }
    }
}

impl Default for SquareState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    pub kind: SquareKind,
    pub state: SquareState,
    pub adjacent_mines: u8,
}

impl Square {
    pub const fn is_mine(&self) -> bool {
        matches!(self.kind, SquareKind::Mine)
    }
}

/// Display projection of a square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareView {
    Hidden,
    Flagged,
    QuestionMarked,
    Revealed(u8),
    // these are only used to show result after a loss:
    Mine,
    TriggeredMine,
}
