// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Texas Hold'em table rules engine.
//!
//! The [Table] drives a hand through the betting rounds, validates the players
//! actions and pays the winners at showdown:
//!
//! ```
//! use holdem_core::{Action, Phase, Table, TableConfig};
//!
//! let mut table = Table::new(TableConfig::default()).unwrap();
//! table.new_hand().unwrap();
//!
//! // Everybody calls the big blind that checks.
//! while table.phase() == Phase::Preflop {
//!     let view = table.view();
//!     let seat = view.current_actor.unwrap();
//!     let action = if view.can_call() { Action::Call } else { Action::Check };
//!     table.apply_action(seat, action).unwrap();
//! }
//!
//! assert_eq!(table.phase(), Phase::Flop);
//! assert_eq!(table.board().len(), 3);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod action;
pub mod config;
pub mod error;
pub mod poker;
pub mod showdown;
pub mod table;
pub mod view;

pub use action::{Action, PlayerAction};
pub use config::TableConfig;
pub use error::TableError;
pub use poker::{Card, Chips, Deck, HandRank, HandValue, PlayerCards, Rank, Suit};
pub use showdown::Payoff;
pub use table::{HandOutcome, Phase, Table};
pub use view::{PlayerView, TableView};
