// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation rules.
//!
//! The evaluator reproduces a few deviations from standard poker by default,
//! each one has a switch in [Rules] so that callers can pick between the
//! [compatible](Rules::compatible) behavior and [standard](Rules::standard)
//! poker hands.
use serde::{Deserialize, Serialize};

/// What to do with a hand that has five or more cards of the same suit but
/// no straight flush, four of a kind, or full house.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlushRule {
    /// Drop the flush and stop evaluating, the hand is
    /// [Empty](crate::HandRank::Empty).
    #[default]
    Discard,
    /// A flush made of the first five suited cards in input order.
    FirstFound,
    /// A flush made of the five highest suited cards.
    Highest,
}

/// Evaluation rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// How to report flushes.
    pub flush: FlushRule,
    /// Detect the A-2-3-4-5 straight.
    pub wheel: bool,
    /// Search straight flushes among the flush suit cards, otherwise only the
    /// highest straight is checked for a straight flush.
    pub suited_straights: bool,
    /// Fill hands with less than five cards with the highest remaining cards.
    pub kickers: bool,
}

impl Rules {
    /// The default rules, no deviation is corrected.
    pub const fn compatible() -> Self {
        Self {
            flush: FlushRule::Discard,
            wheel: false,
            suited_straights: false,
            kickers: false,
        }
    }

    /// Standard poker hands.
    pub const fn standard() -> Self {
        Self {
            flush: FlushRule::Highest,
            wheel: true,
            suited_straights: true,
            kickers: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_compatible() {
        assert_eq!(Rules::default(), Rules::compatible());
        assert_ne!(Rules::standard(), Rules::compatible());
        assert_eq!(Rules::standard().flush, FlushRule::Highest);
    }
}
