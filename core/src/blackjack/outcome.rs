use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{BLACKJACK, DealerResult, Hand};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Player natural against a dealer without one, paid 3:2.
    BlackjackWin,
    BlackjackPush,
    DealerBlackjack,
    Busted,
    Win,
    Lose,
    Push,
}

impl RoundOutcome {
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::BlackjackWin | Self::Win)
    }

    pub const fn is_push(self) -> bool {
        matches!(self, Self::BlackjackPush | Self::Push)
    }

    pub const fn describe(self) -> &'static str {
        match self {
            Self::BlackjackWin => "Blackjack! You win 3:2",
            Self::BlackjackPush => "Both have blackjack, push",
            Self::DealerBlackjack => "Dealer has blackjack",
            Self::Busted => "Bust, you lose",
            Self::Win => "You win",
            Self::Lose => "Dealer wins",
            Self::Push => "Push",
        }
    }
}

/// Checks the freshly dealt hands for a natural 21 on either side.
pub fn resolve_naturals(player: &Hand, dealer: &Hand) -> Option<RoundOutcome> {
    let player_21 = player.value() == BLACKJACK;
    let dealer_21 = dealer.value() == BLACKJACK;
    match (player_21, dealer_21) {
        (true, false) => Some(RoundOutcome::BlackjackWin),
        (true, true) => Some(RoundOutcome::BlackjackPush),
        (false, true) => Some(RoundOutcome::DealerBlackjack),
        (false, false) => None,
    }
}

/// Settles a standing player against the finished dealer hand.
pub fn compare_hands(player_value: u8, dealer: DealerResult) -> RoundOutcome {
    if dealer.busted {
        return RoundOutcome::Win;
    }
    match player_value.cmp(&dealer.final_value) {
        Ordering::Greater => RoundOutcome::Win,
        Ordering::Less => RoundOutcome::Lose,
        Ordering::Equal => RoundOutcome::Push,
    }
}
