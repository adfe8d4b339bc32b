// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank and suit frequency tables.
use crate::Card;

/// Number of rank slots, slot 0 is the deuce and slot 12 the ace.
pub const RANKS: usize = 13;

/// Number of suit slots.
pub const SUITS: usize = 4;

/// The ace slot.
pub const ACE: usize = RANKS - 1;

/// The high slot of the A-2-3-4-5 straight, the five.
pub const WHEEL_HIGH: usize = 3;

/// Returns the rank slot of a card.
///
/// Panics if the card rank is not in `2..=14`.
#[inline]
pub fn rank_slot(card: &Card) -> usize {
    let rank = card.rank_value();
    match usize::from(rank).checked_sub(2) {
        Some(slot) if slot < RANKS => slot,
        _ => panic!("Invalid rank {rank} for card {card:?}"),
    }
}

/// Returns the suit slot of a card.
///
/// Panics if the card suit is not in `0..=3`.
#[inline]
pub fn suit_slot(card: &Card) -> usize {
    let suit = usize::from(card.suit_value());
    assert!(suit < SUITS, "Invalid suit {suit} for card {card:?}");
    suit
}

/// Cards counts by rank and by suit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    /// Counts by rank slot.
    pub ranks: [usize; RANKS],
    /// Counts by suit slot.
    pub suits: [usize; SUITS],
}

impl Stats {
    /// Counts the cards ranks and suits.
    pub fn new(cards: &[Card]) -> Self {
        let mut ranks = [0; RANKS];
        let mut suits = [0; SUITS];

        for card in cards {
            ranks[rank_slot(card)] += 1;
            suits[suit_slot(card)] += 1;
        }

        Self { ranks, suits }
    }

    /// Counts by rank slot for the cards of one suit.
    pub fn suited_ranks(cards: &[Card], suit: usize) -> [usize; RANKS] {
        let mut ranks = [0; RANKS];
        for card in cards.iter().filter(|c| suit_slot(c) == suit) {
            ranks[rank_slot(card)] += 1;
        }

        ranks
    }
}

/// Returns the `(slot, count)` with the highest count, on ties the higher
/// slot wins. An empty table returns `(0, 0)`.
pub fn most_common(counts: &[usize]) -> (usize, usize) {
    most_common_excluding(counts, None)
}

/// Like [most_common] with the `excluded` slot counted as zero.
pub fn most_common_excluding(counts: &[usize], excluded: Option<usize>) -> (usize, usize) {
    let mut best = (0, 0);
    for (slot, &count) in counts.iter().enumerate() {
        let count = if Some(slot) == excluded { 0 } else { count };
        if count >= best.1 {
            best = (slot, count);
        }
    }

    best
}

/// Returns the high slot of the best straight.
///
/// Only runs with a high card from the six up are found, with `wheel` set the
/// A-2-3-4-5 run is also checked when there is no higher straight.
pub fn find_straight(ranks: &[usize; RANKS], wheel: bool) -> Option<usize> {
    (4..RANKS)
        .rev()
        .find(|&high| (high - 4..=high).all(|slot| ranks[slot] > 0))
        .or_else(|| {
            let has_wheel = straight_slots(WHEEL_HIGH)
                .iter()
                .all(|&slot| ranks[slot] > 0);
            (wheel && has_wheel).then_some(WHEEL_HIGH)
        })
}

/// The rank slots of a straight from its high slot, in descending order with
/// the ace last for the wheel.
pub fn straight_slots(high: usize) -> [usize; 5] {
    if high == WHEEL_HIGH {
        [3, 2, 1, 0, ACE]
    } else {
        [high, high - 1, high - 2, high - 3, high - 4]
    }
}
