// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Read-only table snapshots for the UI.
use serde::{Deserialize, Serialize};

use crate::{
    action::PlayerAction,
    poker::{Card, Chips, PlayerCards},
    table::Phase,
};

/// A player snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// The player seat.
    pub seat: usize,
    /// The player chips.
    pub chips: Chips,
    /// The player bet in this betting round.
    pub bet: Chips,
    /// The last player action.
    pub action: PlayerAction,
    /// The player cards, covered if the player folded.
    pub cards: PlayerCards,
    /// The player has the button.
    pub has_button: bool,
    /// The player has folded.
    pub is_folded: bool,
    /// The player is all in.
    pub is_all_in: bool,
    /// The player is sitting out this hand.
    pub is_sitting_out: bool,
}

/// A table snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    /// The hand number, starting from 1.
    pub hand_number: u64,
    /// The hand phase.
    pub phase: Phase,
    /// The dealer seat.
    pub dealer: usize,
    /// The players in seat order.
    pub players: Vec<PlayerView>,
    /// The pot, including the bets of the current round.
    pub pot: Chips,
    /// The bet to match in this round.
    pub current_bet: Chips,
    /// The community cards.
    pub board: Vec<Card>,
    /// The seat of the player who has to act.
    pub current_actor: Option<usize>,
    /// The actions the current actor can take.
    pub legal_actions: Vec<PlayerAction>,
    /// The chips the current actor has to put in to call.
    pub call_amount: Chips,
    /// The minimum raise for the current actor, lower if it is all in.
    pub min_raise: Chips,
    /// The maximum raise for the current actor.
    pub max_raise: Chips,
}

impl TableView {
    /// Check if a call action is legal.
    pub fn can_call(&self) -> bool {
        self.check_action(PlayerAction::Call)
    }

    /// Check if a check action is legal.
    pub fn can_check(&self) -> bool {
        self.check_action(PlayerAction::Check)
    }

    /// Check if a raise action is legal.
    pub fn can_raise(&self) -> bool {
        self.check_action(PlayerAction::Raise)
    }

    /// Returns the current actor view.
    pub fn actor(&self) -> Option<&PlayerView> {
        self.current_actor.and_then(|seat| self.players.get(seat))
    }

    fn check_action(&self, action: PlayerAction) -> bool {
        self.legal_actions.contains(&action)
    }
}
