// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table errors.
use thiserror::Error;

use crate::{action::Action, poker::Chips};

/// Errors returned by the table operations.
///
/// A rejected operation leaves the table state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The action is not legal for this seat in the current state.
    #[error("Invalid action {action} for seat {seat}")]
    InvalidAction {
        /// The seat that tried to act.
        seat: usize,
        /// The rejected action.
        action: Action,
    },
    /// The raise amount is below the minimum raise.
    #[error("Raise to {amount} is below the minimum raise {min_raise}")]
    RaiseTooSmall {
        /// The requested raise.
        amount: Chips,
        /// The minimum raise.
        min_raise: Chips,
    },
    /// The raise amount is above the player chips plus bet.
    #[error("Raise to {amount} exceeds the player stack {max_raise}")]
    RaiseExceedsStack {
        /// The requested raise.
        amount: Chips,
        /// The maximum raise.
        max_raise: Chips,
    },
    /// A deal requested more cards than left in the deck.
    #[error("Deck exhausted")]
    DeckExhausted,
    /// The seat doesn't exist at this table.
    #[error("Invalid seat {0}")]
    InvalidSeat(usize),
    /// A hand needs at least two players with chips.
    #[error("Not enough players with chips")]
    NotEnoughPlayers,
    /// A new hand was requested while a hand is in progress.
    #[error("Hand in progress")]
    HandInProgress,
    /// The table configuration is not valid.
    #[error("Invalid table config: {0}")]
    InvalidConfig(String),
}
