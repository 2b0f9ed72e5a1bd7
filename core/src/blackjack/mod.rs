//! Blackjack rules: a self-refilling shoe, hand valuation, the dealer's
//! drawing policy and a single-player table that settles bets.

pub use bankroll::*;
pub use card::*;
pub use dealer::*;
pub use hand::*;
pub use outcome::*;
pub use shoe::*;
pub use table::*;

mod bankroll;
mod card;
mod dealer;
mod hand;
mod outcome;
mod shoe;
mod table;
