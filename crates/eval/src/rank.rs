// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of an evaluated hand.
///
/// Variants are declared from the weakest to the strongest so that the
/// derived ordering matches the hand strength, [HandRank::value] gives the
/// numeric strength with [HandRank::Empty] at -1.
///
/// ```
/// # use kicker_eval::HandRank;
/// assert!(HandRank::Flush > HandRank::Straight);
/// assert_eq!(HandRank::RoyalFlush.value(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum HandRank {
    /// No cards to evaluate.
    Empty = -1,
    /// High card.
    HighCard = 0,
    /// One pair.
    Pair = 1,
    /// Two pairs.
    TwoPair = 2,
    /// Three of a kind.
    ThreeOfAKind = 3,
    /// Straight.
    Straight = 4,
    /// Flush.
    Flush = 5,
    /// Full house.
    FullHouse = 6,
    /// Four of a kind.
    FourOfAKind = 7,
    /// Straight flush.
    StraightFlush = 8,
    /// Ace high straight flush.
    RoyalFlush = 9,
}

impl HandRank {
    /// All categories from the weakest to the strongest.
    pub const ALL: [HandRank; 11] = [
        HandRank::Empty,
        HandRank::HighCard,
        HandRank::Pair,
        HandRank::TwoPair,
        HandRank::ThreeOfAKind,
        HandRank::Straight,
        HandRank::Flush,
        HandRank::FullHouse,
        HandRank::FourOfAKind,
        HandRank::StraightFlush,
        HandRank::RoyalFlush,
    ];

    /// The numeric strength of this category.
    pub const fn value(self) -> i8 {
        self as i8
    }

    /// Converts a numeric strength back to a category.
    pub fn from_value(value: i8) -> Option<HandRank> {
        HandRank::ALL.into_iter().find(|r| r.value() == value)
    }

    /// The category label, empty for [HandRank::Empty].
    pub fn name(self) -> &'static str {
        match self {
            HandRank::RoyalFlush => "Royal Flush",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::FullHouse => "Full House",
            HandRank::Flush => "Flush",
            HandRank::Straight => "Straight",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::TwoPair => "Two Pair",
            HandRank::Pair => "Pair",
            HandRank::HighCard => "High Card",
            HandRank::Empty => "",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_order() {
        for pair in HandRank::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{:?} < {:?}", pair[0], pair[1]);
            assert_eq!(pair[0].value() + 1, pair[1].value());
        }

        assert_eq!(HandRank::Empty.value(), -1);
        assert_eq!(HandRank::HighCard.value(), 0);
        assert_eq!(HandRank::FullHouse.value(), 6);
    }

    #[test]
    fn from_value() {
        for rank in HandRank::ALL {
            assert_eq!(HandRank::from_value(rank.value()), Some(rank));
        }

        assert_eq!(HandRank::from_value(-2), None);
        assert_eq!(HandRank::from_value(10), None);
    }

    #[test]
    fn labels() {
        assert_eq!(HandRank::RoyalFlush.to_string(), "Royal Flush");
        assert_eq!(HandRank::FourOfAKind.to_string(), "Four of a Kind");
        assert_eq!(HandRank::TwoPair.to_string(), "Two Pair");
        assert_eq!(HandRank::HighCard.to_string(), "High Card");
        assert_eq!(HandRank::Empty.to_string(), "");
    }
}
