use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Card, Shoe};

pub const BLACKJACK: u8 = 21;

/// Best total for `cards`: every Ace starts at 11 and is demoted to 1 while
/// the total is over 21.
pub fn hand_value(cards: &[Card]) -> u8 {
    let mut total: u16 = 0;
    let mut high_aces: u8 = 0;
    for card in cards {
        total += u16::from(card.rank.points());
        high_aces += u8::from(card.rank.is_ace());
    }

    while total > u16::from(BLACKJACK) && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }

    u8::try_from(total).unwrap_or(u8::MAX)
}

/// A hand is soft when one Ace can count as 11 without busting.
pub fn is_soft(cards: &[Card]) -> bool {
    let has_ace = cards.iter().any(|card| card.rank.is_ace());
    let hard_total: u16 = cards
        .iter()
        .map(|card| if card.rank.is_ace() { 1 } else { u16::from(card.rank.points()) })
        .sum();
    has_ace && hard_total + 10 <= u16::from(BLACKJACK)
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: SmallVec::from_slice(cards),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Draws one card from `shoe` into the hand.
    pub fn draw_from(&mut self, shoe: &mut Shoe) -> Card {
        let card = shoe.draw();
        self.push(card);
        card
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Exactly two cards worth 21.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }
}
