// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player actions types.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::poker::Chips;

/// A Player action.
///
/// Used both as the last action taken by a player and as an entry in the list
/// of legal actions for the player who has to act.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// No action.
    None,
    /// Player pays small blind.
    SmallBlind,
    /// Player pays big blind.
    BigBlind,
    /// Player calls.
    Call,
    /// Player checks.
    Check,
    /// Player raises, a bet when there is no bet to call.
    Raise,
    /// Player folds.
    Fold,
}

impl PlayerAction {
    /// The action label.
    pub fn label(&self) -> &'static str {
        match self {
            PlayerAction::SmallBlind => "SB",
            PlayerAction::BigBlind => "BB",
            PlayerAction::Call => "CALL",
            PlayerAction::Check => "CHECK",
            PlayerAction::Raise => "RAISE",
            PlayerAction::Fold => "FOLD",
            PlayerAction::None => "",
        }
    }
}

/// A player decision submitted to the table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Give up the hand.
    Fold,
    /// Pass without betting, only when there is nothing to call.
    Check,
    /// Match the current bet, or go all in if short.
    Call,
    /// Raise the player total bet for this round to the given amount.
    Raise(Chips),
}

impl Action {
    /// The kind of this action used to check it against the legal actions.
    pub fn kind(&self) -> PlayerAction {
        match self {
            Action::Fold => PlayerAction::Fold,
            Action::Check => PlayerAction::Check,
            Action::Call => PlayerAction::Call,
            Action::Raise(_) => PlayerAction::Raise,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Raise(amount) => write!(f, "{} {amount}", self.kind().label()),
            _ => f.write_str(self.kind().label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_display() {
        assert_eq!(Action::Fold.to_string(), "FOLD");
        assert_eq!(Action::Check.to_string(), "CHECK");
        assert_eq!(Action::Raise(Chips::new(60)).to_string(), "RAISE 60");
        assert_eq!(Action::Raise(Chips::new(60)).kind(), PlayerAction::Raise);
    }
}
