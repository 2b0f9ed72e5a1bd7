//! Rule engines for two table games: Blackjack against a house dealer and
//! Minesweeper with a guaranteed-safe first click.
//!
//! Both engines are plain synchronous state machines. Each owns its own
//! seedable RNG, so a fixed seed reproduces a game exactly.

pub use error::*;
pub use types::*;

pub mod blackjack;
pub mod ledger;
pub mod minesweeper;

mod error;
mod types;
