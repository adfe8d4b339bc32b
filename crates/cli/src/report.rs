// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation report.
use serde::Serialize;
use std::fmt::{self, Write};

use kicker_eval::{Card, HandRank, HandValue};

/// A hand card in the report.
#[derive(Debug, Serialize)]
pub struct ReportCard {
    /// The card index into the hole cards followed by the community cards.
    pub index: usize,
    /// The card short form.
    pub card: String,
    /// The card display name.
    pub name: String,
}

/// The result of an evaluation ready for display.
#[derive(Debug, Serialize)]
pub struct Report {
    /// The hand category.
    pub rank: HandRank,
    /// The hand category numeric strength.
    pub strength: i8,
    /// The hand category label.
    pub label: String,
    /// The cards that make the hand.
    pub cards: Vec<ReportCard>,
}

impl Report {
    /// Creates a report for a value evaluated from `hole ++ community` cards.
    pub fn new(value: &HandValue, cards: &[Card]) -> Self {
        let cards = value
            .cards()
            .iter()
            .zip(value.best_cards(cards))
            .map(|(&index, card)| ReportCard {
                index,
                card: card.to_string(),
                name: card.name(),
            })
            .collect();

        Self {
            rank: value.rank(),
            strength: value.rank().value(),
            label: value.rank().name().to_string(),
            cards,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rank == HandRank::Empty {
            return f.write_str("No hand");
        }

        let mut out = String::new();
        writeln!(out, "{}", self.label)?;
        for card in &self.cards {
            writeln!(out, "  [{}] {} {}", card.index, card.card, card.name)?;
        }

        f.write_str(out.trim_end())
    }
}
