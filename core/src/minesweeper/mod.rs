//! Minesweeper rules: board layout, mine placement, flood reveal and the
//! click-driven play engine.

pub use board::*;
pub use engine::*;
pub use generator::*;
pub use outcome::*;
pub use reveal::*;
pub use square::*;

mod board;
mod engine;
mod generator;
mod outcome;
mod reveal;
mod square;

/// Result of a left click.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Result of a right click.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
    Won,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}
