use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use super::{Card, Rank, Suit};

pub const CARDS_PER_DECK: usize = 52;
pub const DEFAULT_DECKS: u8 = 4;

/// Multi-deck shoe that refills itself when a draw finds it empty.
///
/// Each shoe owns its RNG, so two shoes built with the same seed deal the
/// same sequence. A refill raises a one-shot signal read through
/// [`Shoe::poll_reshuffle_signal`]; the shuffle done at construction does not.
#[derive(Clone, Debug)]
pub struct Shoe {
    decks: u8,
    cards: Vec<Card>,
    seed: u64,
    rng: ChaCha8Rng,
    reshuffled: bool,
}

impl Shoe {
    /// Shoe seeded from OS entropy.
    pub fn new(decks: u8) -> Self {
        Self::with_seed(decks, rand::random())
    }

    pub fn with_seed(decks: u8, seed: u64) -> Self {
        let mut shoe = Self {
            decks: decks.max(1),
            cards: Vec::new(),
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            reshuffled: false,
        };
        shoe.refill();
        log::debug!("New {}-deck shoe, seed {}", shoe.decks, seed);
        shoe
    }

    /// Shoe that deals `order` front to back before refilling normally.
    ///
    /// Only the refill is random, so `remaining` starts at `order.len()`
    /// rather than the full capacity.
    pub fn stacked(decks: u8, seed: u64, order: &[Card]) -> Self {
        let mut shoe = Self::with_seed(decks, seed);
        shoe.cards = order.iter().rev().copied().collect();
        shoe
    }

    /// Takes the top card, refilling and reshuffling first if the shoe is empty.
    pub fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            self.refill();
            self.reshuffled = true;
            log::info!("Shoe empty, reshuffled {} cards", self.cards.len());
        }
    }

    /// Returns whether the shoe was refilled since the last poll, and clears the signal.
    pub fn poll_reshuffle_signal(&mut self) -> bool {
        core::mem::take(&mut self.reshuffled)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn capacity(&self) -> usize {
        usize::from(self.decks) * CARDS_PER_DECK
    }

    pub fn decks(&self) -> u8 {
        self.decks
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn refill(&mut self) {
        self.cards.clear();
        for _ in 0..self.decks {
            for suit in Suit::ALL {
                self.cards
                    .extend(Rank::ALL.into_iter().map(|rank| Card::new(rank, suit)));
            }
        }
        self.cards.shuffle(&mut self.rng);
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::new(DEFAULT_DECKS)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn fresh_shoe_is_full_and_quiet() {
        let mut shoe = Shoe::with_seed(DEFAULT_DECKS, 7);
        assert_eq!(shoe.remaining(), 208);
        assert_eq!(shoe.capacity(), 208);
        assert!(!shoe.poll_reshuffle_signal());
    }

    #[test]
    fn every_card_appears_once_per_deck() {
        let mut shoe = Shoe::with_seed(2, 3);
        let mut counts: HashMap<Card, usize> = HashMap::new();
        for _ in 0..shoe.capacity() {
            *counts.entry(shoe.draw()).or_default() += 1;
        }
        assert_eq!(counts.len(), 52);
        assert!(counts.values().all(|&count| count == 2));
        assert_eq!(shoe.remaining(), 0);
        assert!(!shoe.poll_reshuffle_signal());
    }

    #[test]
    fn empty_shoe_refills_and_signals_once() {
        let mut shoe = Shoe::with_seed(1, 11);
        for _ in 0..52 {
            shoe.draw();
        }

        shoe.draw();
        assert_eq!(shoe.remaining(), 51);
        assert!(shoe.poll_reshuffle_signal());
        assert!(!shoe.poll_reshuffle_signal());
    }

    #[test]
    fn same_seed_same_order() {
        let mut first = Shoe::with_seed(4, 99);
        let mut second = Shoe::with_seed(4, 99);
        let a: Vec<_> = (0..30).map(|_| first.draw()).collect();
        let b: Vec<_> = (0..30).map(|_| second.draw()).collect();
        assert_eq!(a, b);
        assert_eq!(first.seed(), 99);
    }

    #[test]
    fn stacked_shoe_deals_in_order() {
        let order = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Two, Suit::Clubs),
        ];
        let mut shoe = Shoe::stacked(1, 0, &order);
        assert_eq!(shoe.draw(), order[0]);
        assert_eq!(shoe.draw(), order[1]);

        shoe.draw();
        assert!(shoe.poll_reshuffle_signal());
        assert_eq!(shoe.remaining(), 51);
    }

    #[test]
    fn zero_decks_means_one() {
        assert_eq!(Shoe::with_seed(0, 1).capacity(), 52);
    }
}
