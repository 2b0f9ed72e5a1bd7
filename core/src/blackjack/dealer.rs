use serde::{Deserialize, Serialize};

use super::{Hand, Shoe};

/// Dealer stands on hard 17 and above and hits soft 17.
pub const DEALER_STANDS_AT: u8 = 17;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealerResult {
    pub final_value: u8,
    pub busted: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dealer {
    hand: Hand,
    hole_revealed: bool,
}

impl Dealer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Whether the second card may be shown.
    pub fn hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    pub fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    pub fn clear(&mut self) {
        self.hand.clear();
        self.hole_revealed = false;
    }

    pub fn should_draw(&self) -> bool {
        let value = self.hand.value();
        value < DEALER_STANDS_AT || (value == DEALER_STANDS_AT && self.hand.is_soft())
    }

    /// Turns the hole card over, then draws until the house rule says stand.
    pub fn play_turn(&mut self, shoe: &mut Shoe) -> DealerResult {
        self.reveal_hole();
        while self.should_draw() {
            let card = self.hand.draw_from(shoe);
            log::debug!("Dealer draws {}, now {}", card, self.hand.value());
        }

        DealerResult {
            final_value: self.hand.value(),
            busted: self.hand.is_bust(),
        }
    }
}

/// Clears both hands and deals two cards each, alternating player first.
///
/// The dealer's second card is the hole card and stays face down.
pub fn deal_initial_hands(player: &mut Hand, dealer: &mut Dealer, shoe: &mut Shoe) {
    player.clear();
    dealer.clear();
    for _ in 0..2 {
        player.draw_from(shoe);
        dealer.hand.draw_from(shoe);
    }
    log::debug!(
        "Dealt player {:?}, dealer shows {:?}",
        player.cards(),
        dealer.hand.cards().first()
    );
}

#[cfg(test)]
mod tests {
    use super::super::Card;
    use super::*;

    fn cards(text: &str) -> Vec<Card> {
        text.split_whitespace()
            .map(|card| card.parse().unwrap())
            .collect()
    }

    fn dealer_with(text: &str) -> Dealer {
        Dealer {
            hand: Hand::from_cards(&cards(text)),
            hole_revealed: false,
        }
    }

    #[test]
    fn deal_alternates_player_first() {
        let order = cards("2h 3h 4h 5h");
        let mut shoe = Shoe::stacked(1, 0, &order);
        let mut player = Hand::from_cards(&cards("Kd"));
        let mut dealer = dealer_with("Qd");
        dealer.reveal_hole();

        deal_initial_hands(&mut player, &mut dealer, &mut shoe);

        assert_eq!(player.cards(), &[order[0], order[2]]);
        assert_eq!(dealer.hand().cards(), &[order[1], order[3]]);
        assert!(!dealer.hole_revealed());
    }

    #[test]
    fn dealer_hits_soft_17() {
        let mut dealer = dealer_with("Ah 6d");
        let mut shoe = Shoe::stacked(1, 0, &cards("4c"));

        let result = dealer.play_turn(&mut shoe);

        assert!(dealer.hole_revealed());
        assert_eq!(result.final_value, 21);
        assert!(!result.busted);
    }

    #[test]
    fn dealer_stands_on_hard_17() {
        let mut dealer = dealer_with("Th 7d");
        let mut shoe = Shoe::stacked(1, 0, &cards("4c"));

        let result = dealer.play_turn(&mut shoe);

        assert_eq!(result.final_value, 17);
        assert_eq!(dealer.hand().len(), 2);
        assert_eq!(shoe.remaining(), 1);
    }

    #[test]
    fn dealer_draws_until_bust() {
        let mut dealer = dealer_with("Th 6d");
        let mut shoe = Shoe::stacked(1, 0, &cards("9c"));

        let result = dealer.play_turn(&mut shoe);

        assert_eq!(
            result,
            DealerResult {
                final_value: 25,
                busted: true
            }
        );
    }

    #[test]
    fn soft_hand_demotes_while_drawing() {
        // A+5 soft 16, draws T for hard 16, then 2 for 18
        let mut dealer = dealer_with("Ah 5d");
        let mut shoe = Shoe::stacked(1, 0, &cards("Tc 2s"));

        let result = dealer.play_turn(&mut shoe);

        assert_eq!(result.final_value, 18);
        assert_eq!(dealer.hand().len(), 4);
    }
}
