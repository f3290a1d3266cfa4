// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table state machine.
//!
//! A [Table] owns the players, the deck and the pot and moves a hand through
//! the betting rounds:
//!
//! ```text
//! Preflop -> Flop -> Turn -> River -> Showdown -> (next hand) Preflop
//! ```
//!
//! A hand jumps to showdown as soon as all but one player fold. When fewer
//! than two players can still bet the remaining board cards are dealt without
//! betting.
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    action::{Action, PlayerAction},
    config::TableConfig,
    error::TableError,
    poker::{Card, Chips, Deck, PlayerCards},
    showdown::{self, Contender, Payoff},
    view::{PlayerView, TableView},
};

mod player;
use player::{Player, PlayersState};

/// The hand phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Betting before the flop.
    Preflop,
    /// Betting after the first three community cards.
    Flop,
    /// Betting after the fourth community card.
    Turn,
    /// Betting after the fifth community card.
    River,
    /// The hand has ended, or no hand has started yet.
    Showdown,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self {
            Phase::Preflop => "Preflop",
            Phase::Flop => "Flop",
            Phase::Turn => "Turn",
            Phase::River => "River",
            Phase::Showdown => "Showdown",
        };

        f.write_str(phase)
    }
}

/// The result of a completed hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandOutcome {
    /// The hand number.
    pub hand_number: u64,
    /// The community cards at the end of the hand.
    pub board: Vec<Card>,
    /// The chips paid to the winners.
    pub payoffs: Vec<Payoff>,
}

/// A Texas Hold'em table.
#[derive(Debug)]
pub struct Table {
    config: TableConfig,
    players: PlayersState,
    phase: Phase,
    dealer: usize,
    deck: Deck,
    board: Vec<Card>,
    pot: Chips,
    current_bet: Chips,
    last_aggressor: Option<usize>,
    hand_number: u64,
    last_outcome: Option<HandOutcome>,
    rng: StdRng,
}

impl Table {
    /// Creates a new table with OS seeded randomness.
    pub fn new(config: TableConfig) -> Result<Self, TableError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates a new table with user initialized randomness.
    ///
    /// The table waits for [Table::new_hand] to start the first hand, with the
    /// button at seat 0.
    pub fn with_rng(config: TableConfig, rng: StdRng) -> Result<Self, TableError> {
        config.validate()?;

        Ok(Self {
            players: PlayersState::new(config.seats, config.starting_chips),
            phase: Phase::Showdown,
            dealer: 0,
            deck: Deck::default(),
            board: Vec::default(),
            pot: Chips::ZERO,
            current_bet: Chips::ZERO,
            last_aggressor: None,
            hand_number: 0,
            last_outcome: None,
            rng,
            config,
        })
    }

    /// Starts a new hand.
    ///
    /// Following hands start automatically at the end of each hand, so this
    /// is only needed for the first hand.
    pub fn new_hand(&mut self) -> Result<(), TableError> {
        if self.phase != Phase::Showdown {
            return Err(TableError::HandInProgress);
        }

        if self.players.count_with_chips() < 2 {
            return Err(TableError::NotEnoughPlayers);
        }

        self.start_hand()
    }

    /// Applies a player action and advances the hand.
    ///
    /// On error the table state is unchanged.
    pub fn apply_action(&mut self, seat: usize, action: Action) -> Result<(), TableError> {
        if self.players.get(seat).is_none() {
            return Err(TableError::InvalidSeat(seat));
        }

        if !self.legal_actions(seat).contains(&action.kind()) {
            return Err(TableError::InvalidAction { seat, action });
        }

        let min_raise = self.min_raise(seat);
        if let Action::Raise(amount) = action {
            let max_raise = self.max_raise(seat);
            if amount > max_raise {
                return Err(TableError::RaiseExceedsStack { amount, max_raise });
            }

            // A raise for less is only allowed all in.
            if amount < min_raise && amount < max_raise {
                return Err(TableError::RaiseTooSmall { amount, min_raise });
            }
        }

        let current_bet = self.current_bet;
        let Some(player) = self.players.get_mut(seat) else {
            return Err(TableError::InvalidSeat(seat));
        };

        match action {
            Action::Fold => player.fold(),
            Action::Check => player.action = PlayerAction::Check,
            Action::Call => self.pot += player.bet(PlayerAction::Call, current_bet),
            Action::Raise(amount) => self.pot += player.bet(PlayerAction::Raise, amount),
        }

        player.has_acted = true;

        info!(
            "Seat {seat} {action}, bet {} chips {}{}",
            player.bet,
            player.chips,
            if player.is_all_in { " all in" } else { "" }
        );

        if let Action::Raise(amount) = action {
            self.current_bet = self.current_bet.max(amount);

            // Only a full raise reopens the betting to players who already acted.
            if amount >= min_raise {
                self.last_aggressor = Some(seat);
                self.players.reopen_action(seat);
            }
        }

        self.action_update(seat)
    }

    /// Returns the legal actions for a seat.
    ///
    /// Only the current actor has legal actions.
    pub fn legal_actions(&self, seat: usize) -> Vec<PlayerAction> {
        let Some(player) = self.players.get(seat) else {
            return Vec::new();
        };

        if self.phase == Phase::Showdown
            || self.players.active_seat() != Some(seat)
            || !player.can_act()
        {
            return Vec::new();
        }

        let mut actions = vec![PlayerAction::Fold];

        if player.bet == self.current_bet {
            actions.push(PlayerAction::Check);
        }

        if player.bet < self.current_bet && player.chips > Chips::ZERO {
            actions.push(PlayerAction::Call);
        }

        // A short all in doesn't give raising rights back to players who acted.
        if player.chips > self.current_bet - player.bet && !player.has_acted {
            actions.push(PlayerAction::Raise);
        }

        actions
    }

    /// The minimum total bet for a raise from a seat.
    ///
    /// The raise must be at least as large as the bet the player is facing and
    /// never smaller than a big blind.
    pub fn min_raise(&self, seat: usize) -> Chips {
        let bet = self.players.get(seat).map(|p| p.bet).unwrap_or_default();
        let raise = self.current_bet + (self.current_bet - bet);
        raise.max(self.current_bet + self.config.big_blind)
    }

    /// The maximum total bet for a raise from a seat, that is all in.
    pub fn max_raise(&self, seat: usize) -> Chips {
        self.players
            .get(seat)
            .map(|p| p.chips + p.bet)
            .unwrap_or_default()
    }

    /// The chips a seat has to put in to call.
    pub fn call_amount(&self, seat: usize) -> Chips {
        self.players
            .get(seat)
            .map(|p| (self.current_bet - p.bet).min(p.chips))
            .unwrap_or_default()
    }

    /// Returns a snapshot of the table.
    pub fn view(&self) -> TableView {
        let current_actor = self
            .players
            .active_seat()
            .filter(|_| self.phase != Phase::Showdown);

        let (legal_actions, call_amount, min_raise, max_raise) = match current_actor {
            Some(seat) => (
                self.legal_actions(seat),
                self.call_amount(seat),
                self.min_raise(seat).min(self.max_raise(seat)),
                self.max_raise(seat),
            ),
            None => (Vec::new(), Chips::ZERO, Chips::ZERO, Chips::ZERO),
        };

        let players = self
            .players
            .iter()
            .map(|p| PlayerView {
                seat: p.seat,
                chips: p.chips,
                bet: p.bet,
                action: p.action,
                cards: match p.hole_cards {
                    PlayerCards::Cards(..) if p.is_folded => PlayerCards::Covered,
                    cards => cards,
                },
                has_button: p.seat == self.dealer,
                is_folded: p.is_folded,
                is_all_in: p.is_all_in,
                is_sitting_out: p.is_sitting_out,
            })
            .collect();

        TableView {
            hand_number: self.hand_number,
            phase: self.phase,
            dealer: self.dealer,
            players,
            pot: self.pot,
            current_bet: self.current_bet,
            board: self.board.clone(),
            current_actor,
            legal_actions,
            call_amount,
            min_raise,
            max_raise,
        }
    }

    /// The table configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The hand phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The dealer seat.
    pub fn dealer(&self) -> usize {
        self.dealer
    }

    /// The current hand number, 0 before the first hand.
    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }

    /// The pot.
    pub fn pot(&self) -> Chips {
        self.pot
    }

    /// The community cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The seat of the player who has to act.
    pub fn current_actor(&self) -> Option<usize> {
        self.players
            .active_seat()
            .filter(|_| self.phase != Phase::Showdown)
    }

    /// The seat of the last player who made a full bet or raise this round.
    ///
    /// Informational only, round completion uses the players acted flags.
    pub fn last_aggressor(&self) -> Option<usize> {
        self.last_aggressor
    }

    /// The outcome of the last completed hand.
    pub fn last_outcome(&self) -> Option<&HandOutcome> {
        self.last_outcome.as_ref()
    }

    /// The chips on the table, players chips plus the pot.
    pub fn total_chips(&self) -> Chips {
        self.players.total_chips() + self.pot
    }

    /// Checks if the game has ended with a single player with chips.
    pub fn is_game_over(&self) -> bool {
        self.hand_number > 0
            && self.phase == Phase::Showdown
            && self.players.count_with_chips() < 2
    }

    fn start_hand(&mut self) -> Result<(), TableError> {
        self.hand_number += 1;
        self.phase = Phase::Preflop;
        self.board.clear();
        self.pot = Chips::ZERO;
        self.current_bet = Chips::ZERO;
        self.last_aggressor = None;
        self.players.start_hand();
        self.deck = Deck::new_and_shuffled(&mut self.rng);

        info!(
            "Hand {} starts with dealer seat {}",
            self.hand_number, self.dealer
        );

        // Deal one card at a time to each player starting left of the dealer.
        let seats = self
            .players
            .seats_from(self.dealer + 1)
            .filter(|&seat| self.players.get(seat).is_some_and(Player::in_hand))
            .collect::<Vec<_>>();

        let first = self.deal_cards(seats.len())?;
        let second = self.deal_cards(seats.len())?;

        for ((seat, c1), c2) in seats.into_iter().zip(first).zip(second) {
            if let Some(player) = self.players.get_mut(seat) {
                player.hole_cards = PlayerCards::Cards(c1, c2);
                debug!("Seat {seat} dealt {c1} {c2}");
            }
        }

        // Pay small and big blind.
        let sb = self
            .players
            .next_seat(self.dealer, Player::in_hand)
            .ok_or(TableError::NotEnoughPlayers)?;
        let bb = self
            .players
            .next_seat(sb, Player::in_hand)
            .ok_or(TableError::NotEnoughPlayers)?;

        self.post_blind(sb, PlayerAction::SmallBlind, self.config.small_blind);
        self.post_blind(bb, PlayerAction::BigBlind, self.config.big_blind);

        self.current_bet = self.config.big_blind;
        self.last_aggressor = Some(bb);

        if self.is_round_complete() {
            self.next_round()
        } else {
            self.players
                .activate_next_player(bb, needs_action(self.current_bet));
            Ok(())
        }
    }

    fn post_blind(&mut self, seat: usize, action: PlayerAction, blind: Chips) {
        if let Some(player) = self.players.get_mut(seat) {
            let paid = player.bet(action, blind);
            self.pot += paid;
            info!("Seat {seat} posts {} {paid}", action.label());
        }
    }

    fn action_update(&mut self, seat: usize) -> Result<(), TableError> {
        // Everyone else folded.
        if self.players.count_in_hand() < 2 {
            return self.enter_showdown();
        }

        if self.is_round_complete() {
            self.next_round()
        } else {
            self.players
                .activate_next_player(seat, needs_action(self.current_bet));
            Ok(())
        }
    }

    /// Checks if all players in the hand have acted.
    fn is_round_complete(&self) -> bool {
        if self.players.count_in_hand() < 2 {
            return true;
        }

        // Players who can bet must match the current bet.
        if self
            .players
            .iter()
            .any(|p| p.can_act() && p.bet < self.current_bet)
        {
            return false;
        }

        // Only one player has chips all others are all in.
        if self.players.count_can_act() < 2 {
            return true;
        }

        self.players
            .iter()
            .filter(|p| p.can_act())
            .all(|p| p.has_acted)
    }

    fn next_round(&mut self) -> Result<(), TableError> {
        loop {
            self.return_uncalled_bet();

            match self.phase {
                Phase::Preflop => {
                    self.deal_board(3)?;
                    self.phase = Phase::Flop;
                }
                Phase::Flop => {
                    self.deal_board(1)?;
                    self.phase = Phase::Turn;
                }
                Phase::Turn => {
                    self.deal_board(1)?;
                    self.phase = Phase::River;
                }
                Phase::River | Phase::Showdown => return self.enter_showdown(),
            }

            info!(
                "{} {}",
                self.phase,
                self.board
                    .iter()
                    .map(Card::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            );

            self.start_round();

            if !self.is_round_complete() {
                return Ok(());
            }
        }
    }

    fn start_round(&mut self) {
        self.players.start_round();
        self.current_bet = Chips::ZERO;
        self.last_aggressor = None;
        self.players
            .activate_next_player(self.dealer, Player::can_act);
    }

    fn enter_showdown(&mut self) -> Result<(), TableError> {
        self.phase = Phase::Showdown;

        // A single survivor takes the whole pot.
        if self.players.count_in_hand() > 1 {
            self.return_uncalled_bet();
        }

        let contenders = self
            .players
            .iter()
            .filter(|p| p.in_hand())
            .filter_map(|p| {
                p.hole_cards.cards().map(|cards| Contender {
                    seat: p.seat,
                    cards,
                })
            })
            .collect::<Vec<_>>();

        let payoffs = showdown::resolve(
            &contenders,
            &self.board,
            self.pot,
            self.dealer,
            self.players.count(),
        );

        for payoff in &payoffs {
            if let Some(player) = self.players.get_mut(payoff.seat) {
                player.chips += payoff.chips;
            }

            match &payoff.hand {
                Some(hand) => info!("Seat {} wins {} with {hand}", payoff.seat, payoff.chips),
                None => info!("Seat {} wins {}", payoff.seat, payoff.chips),
            }
        }

        self.pot = Chips::ZERO;
        self.players.end_hand();
        self.last_outcome = Some(HandOutcome {
            hand_number: self.hand_number,
            board: self.board.clone(),
            payoffs,
        });

        // Move the button.
        self.dealer = (self.dealer + 1) % self.players.count();

        if self.players.count_with_chips() < 2 {
            info!("Game over after hand {}", self.hand_number);
            Ok(())
        } else {
            self.start_hand()
        }
    }

    /// Gives back the part of the highest bet no other player matched.
    fn return_uncalled_bet(&mut self) {
        let Some((seat, top_bet)) = self
            .players
            .iter()
            .max_by_key(|p| p.bet)
            .map(|p| (p.seat, p.bet))
        else {
            return;
        };

        let called = self
            .players
            .iter()
            .filter(|p| p.seat != seat)
            .map(|p| p.bet)
            .max()
            .unwrap_or_default();

        let uncalled = top_bet - called;
        if uncalled > Chips::ZERO {
            if let Some(player) = self.players.get_mut(seat) {
                player.refund(uncalled);
                self.pot -= uncalled;
                debug!("Seat {seat} uncalled bet {uncalled} returned");
            }
        }
    }

    fn deal_board(&mut self, count: usize) -> Result<(), TableError> {
        let cards = self.deal_cards(count)?;
        self.board.extend(cards);
        Ok(())
    }

    fn deal_cards(&mut self, count: usize) -> Result<Vec<Card>, TableError> {
        if self.deck.count() < count {
            return Err(TableError::DeckExhausted);
        }

        (0..count)
            .map(|_| self.deck.deal().ok_or(TableError::DeckExhausted))
            .collect()
    }
}

/// Returns a predicate for players who still have to act facing `current_bet`.
fn needs_action(current_bet: Chips) -> impl Fn(&Player) -> bool {
    move |p: &Player| p.can_act() && (!p.has_acted || p.bet < current_bet)
}
