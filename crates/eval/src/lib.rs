// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Kicker Poker hand evaluator.
//!
//! Classifies the best poker hand a player can make from their hole cards and
//! the community cards, and tells which of the cards make it.
//!
//! To use the evaluator pass the community and hole cards to [HandValue] and
//! get the hand rank and the indices of the hand cards into the hole cards
//! followed by the community cards:
//!
//! ```
//! # use kicker_eval::*;
//! let hole = parse_cards("AS KS").unwrap();
//! let community = parse_cards("QS JS TS 2D 3C").unwrap();
//!
//! let value = HandValue::eval(&community, &hole);
//! assert_eq!(value.rank(), HandRank::RoyalFlush);
//! assert_eq!(value.cards(), &[0, 1, 2, 3, 4]);
//! assert_eq!(value.rank().to_string(), "Royal Flush");
//! ```
//!
//! The default [Rules] reproduce some known deviations from standard poker
//! hands, flushes that are not straight flushes are discarded, the A-2-3-4-5
//! straight is not detected, and a high card hand only has one card. Use
//! [Rules::standard] to evaluate standard poker hands:
//!
//! ```
//! # use kicker_eval::*;
//! let hole = parse_cards("AH 7H").unwrap();
//! let community = parse_cards("2H 9H JH 4C KH").unwrap();
//!
//! let value = HandValue::eval(&community, &hole);
//! assert_eq!(value.rank(), HandRank::Empty);
//!
//! let value = HandValue::eval_with_rules(&community, &hole, &Rules::standard());
//! assert_eq!(value.rank(), HandRank::Flush);
//! assert_eq!(value.cards(), &[0, 6, 4, 3, 1]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::HandValue;

mod rank;
pub use rank::HandRank;

mod rules;
pub use rules::{FlushRule, Rules};

// Reexport cards types.
pub use kicker_cards::{
    Card, Deck, ParseCardError, Rank, Suit, parse_cards, rank_name, suit_name,
};
