// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem table simulator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail, ensure};
use log::info;
use rand::{SeedableRng, rngs::StdRng};

use holdem_core::{Chips, Table, TableConfig};

mod strategy;
pub use strategy::{Passive, RandomPlay, Strategy};

/// The built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyKind {
    /// Check or call.
    Passive,
    /// Mostly call, sometimes fold or raise.
    Random,
}

/// Simulation configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The table configuration.
    pub table: TableConfig,
    /// Number of hands to play.
    pub hands: u64,
    /// Seed for a reproducible run.
    pub seed: Option<u64>,
    /// The strategy used by all players.
    pub strategy: StrategyKind,
}

/// The result of a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of completed hands.
    pub hands: u64,
    /// The players chips in seat order.
    pub chips: Vec<Chips>,
    /// Only one player has chips left.
    pub game_over: bool,
}

/// Runs a simulation with the configured strategy at every seat.
pub fn run(config: &Config) -> Result<Summary> {
    let mut seed_rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let table_rng = StdRng::from_rng(&mut seed_rng);
    let mut strategies = (0..config.table.seats)
        .map(|_| -> Box<dyn Strategy> {
            match config.strategy {
                StrategyKind::Passive => Box::new(Passive),
                StrategyKind::Random => Box::new(RandomPlay::new(StdRng::from_rng(&mut seed_rng))),
            }
        })
        .collect::<Vec<_>>();

    let table = Table::with_rng(config.table.clone(), table_rng)?;
    simulate(table, &mut strategies, config.hands)
}

/// Plays hands at a table until `hands` have completed or the game is over.
///
/// Each seat is played by the strategy with the same index. Fails if an
/// action is rejected or the chips on the table change.
pub fn simulate<S: Strategy>(mut table: Table, strategies: &mut [S], hands: u64) -> Result<Summary> {
    ensure!(
        strategies.len() == table.config().seats,
        "expected {} strategies, got {}",
        table.config().seats,
        strategies.len()
    );

    let total = table.total_chips();
    table.new_hand()?;

    let mut completed = 0;
    while completed < hands && !table.is_game_over() {
        let view = table.view();
        let Some(seat) = view.current_actor else {
            bail!("no player to act in hand {}", view.hand_number);
        };

        let action = strategies[seat].execute(&view);
        table
            .apply_action(seat, action)
            .with_context(|| format!("hand {} seat {seat} {action}", view.hand_number))?;

        ensure!(
            table.total_chips() == total,
            "chips changed from {total} to {} in hand {}",
            table.total_chips(),
            view.hand_number
        );

        if let Some(outcome) = table.last_outcome() {
            if outcome.hand_number > completed {
                completed = outcome.hand_number;
                for payoff in &outcome.payoffs {
                    info!(
                        "Hand {completed} seat {} won {}",
                        payoff.seat, payoff.chips
                    );
                }
            }
        }
    }

    let chips = table.view().players.iter().map(|p| p.chips).collect();
    Ok(Summary {
        hands: completed,
        chips,
        game_over: table.is_game_over(),
    })
}
