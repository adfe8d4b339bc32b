// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Kicker Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use kicker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = Card::from_raw(2, 10);
//! assert_eq!(ah.name(), "Ace of Hearts");
//! assert_eq!(td.to_string(), "TD");
//! ```
//!
//! to parse them from their short form:
//!
//! ```
//! # use kicker_cards::{parse_cards, Card, Rank, Suit};
//! let cards = parse_cards("AH KH").unwrap();
//! assert_eq!(cards[1], Card::new(Rank::King, Suit::Hearts));
//! ```
//!
//! and a [Deck] type for iterating all k-cards combinations, for example to
//! count all 5 cards hands:
//!
//! ```no_run
//! # use kicker_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, ParseCardError, Rank, Suit, parse_cards, rank_name, suit_name};

mod deck;
pub use deck::Deck;
