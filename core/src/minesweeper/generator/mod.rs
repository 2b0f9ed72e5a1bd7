use super::BoardConfig;
use crate::*;
pub use random::*;

mod random;

/// Chooses where a round's mines go.
pub trait MineGenerator {
    /// Returns `config.mines` distinct in-bounds coordinates, none of them
    /// within the 3x3 block centered on `first_click`.
    fn generate(&mut self, config: BoardConfig, first_click: Coord2) -> Vec<Coord2>;
}
