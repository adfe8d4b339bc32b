// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator merges a player hole cards with the community cards, counts
//! ranks and suits, and walks the hand categories from the strongest to the
//! weakest. The first category that matches is the hand [rank](HandValue::rank)
//! and the indices of the cards that make it, into the `hole ++ community`
//! cards, are the hand [cards](HandValue::cards).
//!
//! ```
//! # use kicker_eval::*;
//! let hole = parse_cards("9S 9H").unwrap();
//! let community = parse_cards("9D 4C 9C KS 2H").unwrap();
//!
//! let value = HandValue::eval(&community, &hole);
//! assert_eq!(value.rank(), HandRank::FourOfAKind);
//! assert_eq!(value.cards(), &[0, 1, 2, 4]);
//! ```
//!
//! By default the evaluator uses the [compatible](Rules::compatible) rules,
//! use [HandValue::eval_with_rules] to select other [Rules].
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::{Card, FlushRule, HandRank, Rules};

mod stats;
use stats::{
    ACE, Stats, find_straight, most_common, most_common_excluding, rank_slot, straight_slots,
    suit_slot,
};

/// The result of a hand evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    cards: Vec<usize>,
}

impl HandValue {
    /// The value of a hand without cards.
    pub fn empty() -> Self {
        Self {
            rank: HandRank::Empty,
            cards: Vec::new(),
        }
    }

    /// Evaluates the hole cards and community cards with the default rules.
    ///
    /// Panics if a card rank is not in `2..=14` or a suit is not in `0..=3`.
    pub fn eval(community: &[Card], hole: &[Card]) -> Self {
        Self::eval_with_rules(community, hole, &Rules::default())
    }

    /// Evaluates the hole cards and community cards with the given rules.
    ///
    /// Panics if a card rank is not in `2..=14` or a suit is not in `0..=3`.
    pub fn eval_with_rules(community: &[Card], hole: &[Card], rules: &Rules) -> Self {
        let cards = hole.iter().chain(community).copied().collect::<Vec<_>>();
        let value = Evaluator::new(&cards, rules).eval();
        debug!(
            "Evaluated {} cards as {:?} {:?}",
            cards.len(),
            value.rank,
            value.cards
        );
        value
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The indices of the cards that make the hand into `hole ++ community`.
    pub fn cards(&self) -> &[usize] {
        &self.cards
    }

    /// Returns the hand category and cards indices.
    pub fn into_parts(self) -> (Vec<usize>, HandRank) {
        (self.cards, self.rank)
    }

    /// Gets the cards that make the hand from the `hole ++ community` cards
    /// this value was evaluated from.
    ///
    /// Panics if an index is out of range for `cards`.
    pub fn best_cards(&self, cards: &[Card]) -> Vec<Card> {
        self.cards.iter().map(|&idx| cards[idx]).collect()
    }

    fn new(rank: HandRank, cards: Vec<usize>) -> Self {
        Self { rank, cards }
    }
}

/// Per evaluation state.
struct Evaluator<'a> {
    cards: &'a [Card],
    rules: &'a Rules,
    stats: Stats,
}

impl<'a> Evaluator<'a> {
    fn new(cards: &'a [Card], rules: &'a Rules) -> Self {
        Self {
            cards,
            rules,
            stats: Stats::new(cards),
        }
    }

    fn eval(&self) -> HandValue {
        let (suit, suit_count) = most_common(&self.stats.suits);
        let (value, value_count) = most_common(&self.stats.ranks);
        let straight = find_straight(&self.stats.ranks, self.rules.wheel);

        if suit_count >= 5 {
            if let Some(high) = self.straight_flush(suit, straight) {
                let cards = straight_slots(high)
                    .into_iter()
                    .flat_map(move |slot| {
                        self.matching(move |c| suit_slot(c) == suit && rank_slot(c) == slot)
                            .take(1)
                    })
                    .collect();

                let rank = if high == ACE {
                    HandRank::RoyalFlush
                } else {
                    HandRank::StraightFlush
                };

                return HandValue::new(rank, cards);
            }
        }

        if value_count == 4 {
            return self.finish(HandRank::FourOfAKind, self.of_rank(value, 4));
        }

        let (second, second_count) = most_common_excluding(&self.stats.ranks, Some(value));

        if value_count == 3 && second_count >= 2 {
            let mut cards = self.of_rank(value, 3);
            cards.extend(self.of_rank(second, 2));
            HandValue::new(HandRank::FullHouse, cards)
        } else if suit_count >= 5 {
            match self.rules.flush {
                FlushRule::Discard => HandValue::empty(),
                FlushRule::FirstFound => {
                    let cards = self.matching(|c| suit_slot(c) == suit).take(5).collect();
                    HandValue::new(HandRank::Flush, cards)
                }
                FlushRule::Highest => {
                    let cards = self.highest(5, |_, c| suit_slot(c) == suit);
                    HandValue::new(HandRank::Flush, cards)
                }
            }
        } else if let Some(high) = straight {
            let cards = straight_slots(high)
                .into_iter()
                .flat_map(move |slot| self.matching(move |c| rank_slot(c) == slot).take(1))
                .collect();
            HandValue::new(HandRank::Straight, cards)
        } else if value_count == 3 {
            self.finish(HandRank::ThreeOfAKind, self.of_rank(value, 3))
        } else if value_count == 2 && second_count == 2 {
            let mut cards = self.of_rank(value, 2);
            cards.extend(self.of_rank(second, 2));
            self.finish(HandRank::TwoPair, cards)
        } else if value_count == 2 {
            self.finish(HandRank::Pair, self.of_rank(value, 2))
        } else if !self.cards.is_empty() {
            self.finish(HandRank::HighCard, self.highest(1, |_, _| true))
        } else {
            HandValue::empty()
        }
    }

    /// Returns the high slot of a straight flush in the given suit.
    fn straight_flush(&self, suit: usize, straight: Option<usize>) -> Option<usize> {
        if self.rules.suited_straights {
            let suited = Stats::suited_ranks(self.cards, suit);
            find_straight(&suited, self.rules.wheel)
        } else {
            straight.filter(|&high| {
                straight_slots(high).into_iter().all(|slot| {
                    self.cards
                        .iter()
                        .any(|c| suit_slot(c) == suit && rank_slot(c) == slot)
                })
            })
        }
    }

    /// Completes a hand with kickers if the rules ask for them.
    fn finish(&self, rank: HandRank, mut cards: Vec<usize>) -> HandValue {
        if self.rules.kickers && cards.len() < 5 {
            let kickers = self.highest(5 - cards.len(), |idx, _| !cards.contains(&idx));
            cards.extend(kickers);
        }

        HandValue::new(rank, cards)
    }

    /// Indices of the cards matching `pred` in input order.
    fn matching<P>(&self, pred: P) -> impl Iterator<Item = usize>
    where
        P: Fn(&Card) -> bool,
    {
        self.cards
            .iter()
            .enumerate()
            .filter(move |(_, c)| pred(*c))
            .map(|(idx, _)| idx)
    }

    /// The first `count` indices of cards with the given rank slot.
    fn of_rank(&self, slot: usize, count: usize) -> Vec<usize> {
        self.matching(|c| rank_slot(c) == slot).take(count).collect()
    }

    /// The indices of the `count` highest ranked cards matching `pred`, in
    /// descending rank order with ties in input order.
    fn highest<P>(&self, count: usize, pred: P) -> Vec<usize>
    where
        P: Fn(usize, &Card) -> bool,
    {
        let mut cards = self
            .cards
            .iter()
            .enumerate()
            .filter(|&(idx, c)| pred(idx, c))
            .collect::<Vec<_>>();
        cards.sort_by_key(|&(_, c)| Reverse(rank_slot(c)));
        cards.into_iter().take(count).map(|(idx, _)| idx).collect()
    }
}
