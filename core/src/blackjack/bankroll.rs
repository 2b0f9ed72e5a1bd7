use serde::{Deserialize, Serialize};

use super::RoundOutcome;

pub const STARTING_CHIPS: u64 = 100;

/// A player's running record: hands won and chips on hand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bankroll {
    pub hands_won: u32,
    pub total_chips: u64,
}

impl Bankroll {
    pub const fn new(hands_won: u32, total_chips: u64) -> Self {
        Self {
            hands_won,
            total_chips,
        }
    }

    /// Fresh player with no wins.
    pub const fn with_chips(total_chips: u64) -> Self {
        Self::new(0, total_chips)
    }

    pub fn buy_chips(&mut self, color: ChipColor) {
        self.total_chips = self.total_chips.saturating_add(color.value());
    }

    /// Applies a finished round's result. A blackjack pays 3:2, rounded down.
    pub fn settle(&mut self, outcome: RoundOutcome, bet: u64) {
        use RoundOutcome::*;

        match outcome {
            BlackjackWin => {
                self.total_chips = self.total_chips.saturating_add(bet.saturating_mul(3) / 2);
                self.hands_won = self.hands_won.saturating_add(1);
            }
            Win => {
                self.total_chips = self.total_chips.saturating_add(bet);
                self.hands_won = self.hands_won.saturating_add(1);
            }
            Lose | Busted | DealerBlackjack => {
                self.total_chips = self.total_chips.saturating_sub(bet);
            }
            Push | BlackjackPush => {}
        }
    }
}

impl Default for Bankroll {
    fn default() -> Self {
        Self::with_chips(STARTING_CHIPS)
    }
}

/// Chip denominations sold at the cashier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChipColor {
    White,
    Red,
    Green,
    Black,
}

impl ChipColor {
    pub const ALL: [Self; 4] = [Self::White, Self::Red, Self::Green, Self::Black];

    pub const fn value(self) -> u64 {
        match self {
            Self::White => 1,
            Self::Red => 5,
            Self::Green => 25,
            Self::Black => 100,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "white" => Some(Self::White),
            "red" => Some(Self::Red),
            "green" => Some(Self::Green),
            "black" => Some(Self::Black),
            _ => None,
        }
    }
}
