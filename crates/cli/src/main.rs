// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem table simulator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;

use holdem_cli::StrategyKind;
use holdem_core::{Chips, TableConfig};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of hands to play.
    #[clap(long, default_value_t = 100)]
    hands: u64,
    /// Seed for a reproducible run.
    #[clap(long)]
    seed: Option<u64>,
    /// Number of seats at the table.
    #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=10))]
    seats: u8,
    /// The small blind.
    #[clap(long, default_value_t = 10)]
    small_blind: u32,
    /// The big blind.
    #[clap(long, default_value_t = 20)]
    big_blind: u32,
    /// Players starting chips.
    #[clap(long, default_value_t = 1_000)]
    chips: u32,
    /// The players strategy.
    #[clap(long, value_enum, default_value_t = StrategyKind::Passive)]
    strategy: StrategyKind,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = holdem_cli::Config {
        table: TableConfig {
            seats: cli.seats as usize,
            small_blind: Chips::new(cli.small_blind),
            big_blind: Chips::new(cli.big_blind),
            starting_chips: Chips::new(cli.chips),
        },
        hands: cli.hands,
        seed: cli.seed,
        strategy: cli.strategy,
    };

    let summary = holdem_cli::run(&config)?;

    info!(
        "Played {} hands{}",
        summary.hands,
        if summary.game_over { ", game over" } else { "" }
    );

    for (seat, chips) in summary.chips.iter().enumerate() {
        info!("Seat {seat} chips {chips}");
    }

    Ok(())
}
