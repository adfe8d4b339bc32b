// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// A card is a plain `(suit, rank)` pair with suits numbered `0..=3`
/// (spades, hearts, diamonds, clubs) and ranks numbered `2..=14` with
/// `11..=14` for jack, queen, king and ace. Two cards with the same suit and
/// rank are equal, the model doesn't prevent duplicates.
///
/// Values outside these ranges can be stored with [Card::from_raw], the
/// names of such a card have empty rank or suit fragments.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: u8,
    rank: u8,
}

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card {
            suit: suit as u8,
            rank: rank as u8,
        }
    }

    /// Create a card from raw suit and rank numbers without checking them.
    pub const fn from_raw(suit: u8, rank: u8) -> Card {
        Card { suit, rank }
    }

    /// The raw suit number.
    #[inline]
    pub const fn suit_value(&self) -> u8 {
        self.suit
    }

    /// The raw rank number.
    #[inline]
    pub const fn rank_value(&self) -> u8 {
        self.rank
    }

    /// Returns the card suit, `None` if the suit number is out of range.
    pub fn suit(&self) -> Option<Suit> {
        Suit::from_value(self.suit)
    }

    /// Returns the card rank, `None` if the rank number is out of range.
    pub fn rank(&self) -> Option<Rank> {
        Rank::from_value(self.rank)
    }

    /// The card display name.
    ///
    /// ```
    /// # use kicker_cards::{Card, Rank, Suit};
    /// assert_eq!(Card::new(Rank::Ace, Suit::Spades).name(), "Ace of Spades");
    /// assert_eq!(Card::new(Rank::Ten, Suit::Hearts).name(), "10 of Hearts");
    /// ```
    pub fn name(&self) -> String {
        format!("{} of {}", rank_name(self.rank), suit_name(self.suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = self.rank().map_or('?', Rank::symbol);
        let suit = self.suit().map_or('?', Suit::symbol);
        write!(f, "{rank}{suit}")
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

/// Error returned when parsing a card from text fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The text had no card in it.
    #[error("empty card")]
    Empty,
    /// The rank part is not a valid rank.
    #[error("invalid rank '{0}'")]
    InvalidRank(String),
    /// The last character is not a valid suit.
    #[error("invalid suit '{0}'")]
    InvalidSuit(char),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the short form used by [Display](fmt::Display), for example
    /// `AS`, `th` or `10h`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s.chars().last().ok_or(ParseCardError::Empty)?;
        let rank_str = &s[..s.len() - suit_char.len_utf8()];

        let suit = Suit::from_symbol(suit_char).ok_or(ParseCardError::InvalidSuit(suit_char))?;
        let rank = match rank_str.to_ascii_uppercase().as_str() {
            "10" => Some(Rank::Ten),
            r if r.len() == 1 => r.chars().next().and_then(Rank::from_symbol),
            _ => None,
        }
        .ok_or_else(|| ParseCardError::InvalidRank(rank_str.to_string()))?;

        Ok(Card::new(rank, suit))
    }
}

/// Parses a list of cards separated by whitespace or commas.
///
/// ```
/// # use kicker_cards::{parse_cards, Card, Rank, Suit};
/// let cards = parse_cards("AS, kh 10d").unwrap();
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Diamonds));
/// assert!(parse_cards("").unwrap().is_empty());
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// Returns the name of a rank number, empty for out of range numbers.
pub fn rank_name(rank: u8) -> &'static str {
    match rank {
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        11 => "Jack",
        12 => "Queen",
        13 => "King",
        14 => "Ace",
        _ => "",
    }
}

/// Returns the name of a suit number, empty for out of range numbers.
pub fn suit_name(suit: u8) -> &'static str {
    match suit {
        0 => "Spades",
        1 => "Hearts",
        2 => "Diamonds",
        3 => "Clubs",
        _ => "",
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Converts a rank number in `2..=14` to a rank.
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ranks().find(|r| *r as u8 == value)
    }

    /// The single character symbol for this rank.
    pub fn symbol(self) -> char {
        match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    fn from_symbol(c: char) -> Option<Rank> {
        let c = c.to_ascii_uppercase();
        Rank::ranks().find(|r| r.symbol() == c)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    /// Spades suit.
    Spades = 0,
    /// Hearts suit.
    Hearts = 1,
    /// Diamonds suit.
    Diamonds = 2,
    /// Clubs suit.
    Clubs = 3,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }

    /// Converts a suit number in `0..=3` to a suit.
    pub fn from_value(value: u8) -> Option<Suit> {
        Suit::suits().find(|s| *s as u8 == value)
    }

    /// The single character symbol for this suit.
    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    fn from_symbol(c: char) -> Option<Suit> {
        let c = c.to_ascii_uppercase();
        Suit::suits().find(|s| s.symbol() == c)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_names() {
        let c = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(c.name(), "Ace of Spades");

        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.name(), "King of Diamonds");

        let c = Card::new(Rank::Queen, Suit::Clubs);
        assert_eq!(c.name(), "Queen of Clubs");

        let c = Card::new(Rank::Jack, Suit::Hearts);
        assert_eq!(c.name(), "Jack of Hearts");

        let c = Card::from_raw(3, 7);
        assert_eq!(c.name(), "7 of Clubs");
    }

    #[test]
    fn out_of_range_names() {
        assert_eq!(Card::from_raw(4, 9).name(), "9 of ");
        assert_eq!(Card::from_raw(0, 15).name(), " of Spades");
        assert_eq!(Card::from_raw(7, 99).name(), " of ");
        assert_eq!(rank_name(1), "");
        assert_eq!(suit_name(255), "");

        let c = Card::from_raw(9, 1);
        assert_eq!(c.rank(), None);
        assert_eq!(c.suit(), None);
        assert_eq!(c.to_string(), "??");
    }

    #[test]
    fn raw_values() {
        let c = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(c.rank_value(), 14);
        assert_eq!(c.suit_value(), 3);
        assert_eq!(c, Card::from_raw(3, 14));
        assert_eq!(c.rank(), Some(Rank::Ace));
        assert_eq!(c.suit(), Some(Suit::Clubs));

        let c = Card::new(Rank::Deuce, Suit::Spades);
        assert_eq!(c.rank_value(), 2);
        assert_eq!(c.suit_value(), 0);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");
        assert_eq!(format!("{c:?}"), "Card(TH)");
    }

    #[test]
    fn card_from_str() {
        assert_eq!("AS".parse(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!("th".parse(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("10c".parse(), Ok(Card::new(Rank::Ten, Suit::Clubs)));
        assert_eq!(" 2d ".parse(), Ok(Card::new(Rank::Deuce, Suit::Diamonds)));

        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!("AX".parse::<Card>(), Err(ParseCardError::InvalidSuit('X')));
        assert_eq!(
            "1S".parse::<Card>(),
            Err(ParseCardError::InvalidRank("1".to_string()))
        );
        assert_eq!(
            "S".parse::<Card>(),
            Err(ParseCardError::InvalidRank(String::new()))
        );
    }

    #[test]
    fn display_parse_agree() {
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(card.to_string().parse(), Ok(card));
            }
        }
    }

    #[test]
    fn cards_list() {
        let cards = parse_cards("as,KS\tqs  js").unwrap();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[3], Card::new(Rank::Jack, Suit::Spades));

        assert!(parse_cards("AS ZZ").is_err());
        assert!(parse_cards(" , ").unwrap().is_empty());
    }
}
