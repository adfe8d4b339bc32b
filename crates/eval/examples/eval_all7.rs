// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all7 -- --standard
// ...
// Total hands      133784560
// ...
// Empty:           0
// High Card:       23294460
// Pair:            58627800
// Two Pair:        31433400
// Three of a Kind: 6461620
// Straight:        6180020
// Flush:           4047644
// Full House:      3473184
// Four of a Kind:  224848
// Straight Flush:  37260
// Royal Flush:     4324
// ```
use clap::Parser;
use std::time::Instant;

use kicker_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Evaluate with the standard poker rules.
    #[clap(long)]
    standard: bool,
}

fn main() {
    let cli = Cli::parse();
    let rules = if cli.standard {
        Rules::standard()
    } else {
        Rules::compatible()
    };

    // Evaluate all 133M hands, the first two cards are the hole cards.
    let now = Instant::now();
    let mut counts = [0usize; HandRank::ALL.len()];

    Deck::default().for_each(7, |hand| {
        let rank = HandValue::eval_with_rules(&hand[2..], &hand[..2], &rules).rank();
        counts[(rank.value() + 1) as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ALL {
        let label = if rank == HandRank::Empty {
            "Empty"
        } else {
            rank.name()
        };

        println!("{:<17}{}", format!("{label}:"), counts[(rank.value() + 1) as usize]);
    }
}
