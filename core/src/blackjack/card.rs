use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Blackjack points with the Ace counted high.
    pub const fn points(self) -> u8 {
        match self {
            Self::Ace => 11,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            pip => pip as u8,
        }
    }

    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Spelled-out form, e.g. `King of Hearts`.
    pub fn long_name(&self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.name())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Self::Hearts => 'h',
            Self::Diamonds => 'd',
            Self::Clubs => 'c',
            Self::Spades => 's',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Short form: `Ah`, `Td`, `7c`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("Card must be a rank followed by a suit, got {0:?}")]
    BadLength(String),
    #[error("Invalid rank: {0}")]
    Rank(char),
    #[error("Invalid suit: {0}")]
    Suit(char),
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseCardError::BadLength(s.to_owned()));
        };

        let rank = Rank::ALL
            .into_iter()
            .find(|rank| rank.symbol() == rank_ch.to_ascii_uppercase())
            .ok_or(ParseCardError::Rank(rank_ch))?;

        let suit = match suit_ch.to_ascii_lowercase() {
            'h' => Suit::Hearts,
            'd' => Suit::Diamonds,
            'c' => Suit::Clubs,
            's' => Suit::Spades,
            _ => return Err(ParseCardError::Suit(suit_ch)),
        };

        Ok(Self::new(rank, suit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_round_trips_through_display() {
        for text in ["Ah", "Td", "7c", "Ks", "2h"] {
            let card: Card = text.parse().unwrap();
            assert_eq!(card.to_string(), text);
        }
        assert_eq!("qS".parse(), Ok(Card::new(Rank::Queen, Suit::Spades)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!("1h".parse::<Card>(), Err(ParseCardError::Rank('1')));
        assert_eq!("Ax".parse::<Card>(), Err(ParseCardError::Suit('x')));
        assert!(matches!("10h".parse::<Card>(), Err(ParseCardError::BadLength(_))));
        assert!(matches!("".parse::<Card>(), Err(ParseCardError::BadLength(_))));
    }

    #[test]
    fn long_name_spells_out_rank_and_suit() {
        assert_eq!(Card::new(Rank::King, Suit::Hearts).long_name(), "King of Hearts");
        assert_eq!(Card::new(Rank::Seven, Suit::Clubs).long_name(), "Seven of Clubs");
    }

    #[test]
    fn points_follow_blackjack_values() {
        assert_eq!(Rank::Two.points(), 2);
        assert_eq!(Rank::Nine.points(), 9);
        assert_eq!(Rank::Ten.points(), 10);
        assert_eq!(Rank::King.points(), 10);
        assert_eq!(Rank::Ace.points(), 11);
    }
}
