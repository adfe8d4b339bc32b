// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Kicker CLI hand evaluator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};

use kicker_eval::{HandValue, Rules, parse_cards};

pub mod report;

/// The evaluation rules to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RulesArg {
    /// Bit compatible with the original evaluator.
    Compatible,
    /// Standard poker hands.
    Standard,
}

impl From<RulesArg> for Rules {
    fn from(arg: RulesArg) -> Self {
        match arg {
            RulesArg::Compatible => Rules::compatible(),
            RulesArg::Standard => Rules::standard(),
        }
    }
}

#[derive(Debug, Parser)]
#[clap(about = "Evaluates a poker hand")]
struct Cli {
    /// The player hole cards, for example "AS KH".
    #[clap(long)]
    hole: String,
    /// The community cards, for example "QS JS TS".
    #[clap(long, short, default_value = "")]
    board: String,
    /// The evaluation rules.
    #[clap(long, value_enum, default_value_t = RulesArg::Compatible)]
    rules: RulesArg,
    /// Print the result as JSON.
    #[clap(long)]
    json: bool,
    /// Enable debug logs.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let hole = parse_cards(&cli.hole).with_context(|| format!("Invalid hole cards '{}'", cli.hole))?;
    let board =
        parse_cards(&cli.board).with_context(|| format!("Invalid board cards '{}'", cli.board))?;

    let rules = Rules::from(cli.rules);
    info!("Evaluating hole {hole:?} board {board:?}");
    debug!("Rules {rules:?}");

    let value = HandValue::eval_with_rules(&board, &hole, &rules);
    let cards = [hole, board].concat();
    let report = report::Report::new(&value, &cards);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args() {
        let cli = Cli::try_parse_from(["kicker", "--hole", "AS KS", "-b", "QS,JS,TS"]).unwrap();
        assert_eq!(cli.rules, RulesArg::Compatible);
        assert!(!cli.json);
        assert_eq!(parse_cards(&cli.board).unwrap().len(), 3);

        let cli = Cli::try_parse_from([
            "kicker", "--hole", "AS", "--rules", "standard", "--json", "-v",
        ])
        .unwrap();
        assert_eq!(Rules::from(cli.rules), Rules::standard());
        assert!(cli.json && cli.verbose);
        assert!(cli.board.is_empty());
    }

    #[test]
    fn missing_hole() {
        assert!(Cli::try_parse_from(["kicker", "-b", "QS"]).is_err());
        assert!(Cli::try_parse_from(["kicker", "--hole", "AS", "--rules", "loose"]).is_err());
    }
}
