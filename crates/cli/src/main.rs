// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, a heads-up poker match against the computer.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{ArgAction, Parser};
use log::LevelFilter;

use showdown_core::poker::Chips;

pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// The chips both sides start with.
    #[clap(long, short, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=1_000_000))]
    chips: u32,
    /// Seed for shuffling the deck, a random seed is used if not set.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Log more details, can be repeated.
    #[clap(long, short, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let config = terminal::Config {
        chips: Chips::new(cli.chips),
        seed: cli.seed,
    };

    terminal::run(config)
}
