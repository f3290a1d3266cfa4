// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table player types.
use crate::{
    action::PlayerAction,
    poker::{Chips, PlayerCards},
};

/// A table player state.
#[derive(Debug, Clone)]
pub struct Player {
    /// The player seat, stable for the session.
    pub seat: usize,
    /// This player chips.
    pub chips: Chips,
    /// The player bet amount in this betting round.
    pub bet: Chips,
    /// The last player action.
    pub action: PlayerAction,
    /// This player private cards.
    pub hole_cards: PlayerCards,
    /// The player has folded this hand.
    pub is_folded: bool,
    /// The player has no chips left to bet this hand.
    pub is_all_in: bool,
    /// The player had no chips when the hand started.
    pub is_sitting_out: bool,
    /// The player acted since the last full raise.
    pub has_acted: bool,
}

impl Player {
    /// Creates a new player.
    pub fn new(seat: usize, chips: Chips) -> Self {
        Self {
            seat,
            chips,
            bet: Chips::ZERO,
            action: PlayerAction::None,
            hole_cards: PlayerCards::None,
            is_folded: false,
            is_all_in: false,
            is_sitting_out: chips == Chips::ZERO,
            has_acted: false,
        }
    }

    /// Checks if this player is still competing for the pot.
    pub fn in_hand(&self) -> bool {
        !self.is_sitting_out && !self.is_folded
    }

    /// Checks if this player can still bet.
    pub fn can_act(&self) -> bool {
        self.in_hand() && !self.is_all_in
    }

    /// Updates this player bets to the given chips amount.
    ///
    /// Returns the chips moved from the player stack to the pot.
    pub fn bet(&mut self, action: PlayerAction, chips: Chips) -> Chips {
        // How much to bet considering previous bets.
        let remainder = chips - self.bet;

        // Player run out of chips goes all in.
        let paid = remainder.min(self.chips);
        self.bet += paid;
        self.chips -= paid;
        self.is_all_in = self.chips == Chips::ZERO;
        self.action = action;

        paid
    }

    /// Returns chips from this player bet back to the stack.
    pub fn refund(&mut self, chips: Chips) {
        self.bet -= chips;
        self.chips += chips;
        self.is_all_in = self.chips == Chips::ZERO;
    }

    /// Sets this player in fold state.
    pub fn fold(&mut self) {
        self.is_folded = true;
        self.action = PlayerAction::Fold;
    }

    /// Reset state for a new hand.
    fn start_hand(&mut self) {
        self.is_sitting_out = self.chips == Chips::ZERO;
        self.is_folded = false;
        self.is_all_in = false;
        self.has_acted = false;
        self.bet = Chips::ZERO;
        self.action = PlayerAction::None;
        self.hole_cards = PlayerCards::None;
    }

    /// Reset state for a new betting round.
    fn start_round(&mut self) {
        self.bet = Chips::ZERO;
        self.has_acted = false;
        if !self.is_folded {
            self.action = PlayerAction::None;
        }
    }
}

/// The table players state.
#[derive(Debug)]
pub struct PlayersState {
    players: Vec<Player>,
    active_player: Option<usize>,
}

impl PlayersState {
    /// Seats `seats` players with the same chips.
    pub fn new(seats: usize, chips: Chips) -> Self {
        Self {
            players: (0..seats).map(|seat| Player::new(seat, chips)).collect(),
            active_player: None,
        }
    }

    /// Returns total number of seats.
    pub fn count(&self) -> usize {
        self.players.len()
    }

    /// Returns the number of players competing for the pot.
    pub fn count_in_hand(&self) -> usize {
        self.players.iter().filter(|p| p.in_hand()).count()
    }

    /// Returns the number of players in the hand who can still bet.
    pub fn count_can_act(&self) -> usize {
        self.players.iter().filter(|p| p.can_act()).count()
    }

    /// Returns the number of player who have chips.
    pub fn count_with_chips(&self) -> usize {
        self.players
            .iter()
            .filter(|p| p.chips > Chips::ZERO)
            .count()
    }

    /// Returns the sum of all players chips.
    pub fn total_chips(&self) -> Chips {
        self.players.iter().map(|p| p.chips).sum()
    }

    /// Returns the player at a seat.
    pub fn get(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns the mutable player at a seat.
    pub fn get_mut(&mut self, seat: usize) -> Option<&mut Player> {
        self.players.get_mut(seat)
    }

    /// The seat of the player who has to act.
    pub fn active_seat(&self) -> Option<usize> {
        self.active_player
    }

    /// Returns an iterator to all players.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Returns the seats in table order starting from `seat`.
    pub fn seats_from(&self, seat: usize) -> impl Iterator<Item = usize> + use<> {
        let count = self.players.len();
        (0..count).map(move |offset| (seat + offset) % count)
    }

    /// Returns the first seat after `seat` matching a predicate.
    pub fn next_seat<P>(&self, seat: usize, pred: P) -> Option<usize>
    where
        P: Fn(&Player) -> bool,
    {
        self.seats_from(seat + 1)
            .find(|&s| pred(&self.players[s]))
    }

    /// Activate the first player after `seat` matching the predicate.
    ///
    /// If no player matches there is no active player.
    pub fn activate_next_player<P>(&mut self, seat: usize, pred: P)
    where
        P: Fn(&Player) -> bool,
    {
        self.active_player = self.next_seat(seat, pred);
    }

    /// Set state for a new hand.
    pub fn start_hand(&mut self) {
        self.active_player = None;
        self.players.iter_mut().for_each(Player::start_hand);
    }

    /// Starts a new round.
    pub fn start_round(&mut self) {
        self.players.iter_mut().for_each(Player::start_round);
    }

    /// Clears the acted state of all players but the one at `seat`.
    pub fn reopen_action(&mut self, seat: usize) {
        for player in self.players.iter_mut().filter(|p| p.seat != seat) {
            player.has_acted = false;
        }
    }

    /// The hand has ended disable any active player.
    pub fn end_hand(&mut self) {
        self.active_player = None;
        for player in &mut self.players {
            player.bet = Chips::ZERO;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bet_goes_all_in_when_short() {
        let mut player = Player::new(0, Chips::new(50));

        let paid = player.bet(PlayerAction::Call, Chips::new(20));
        assert_eq!(paid, Chips::new(20));
        assert_eq!(player.bet, Chips::new(20));
        assert_eq!(player.chips, Chips::new(30));
        assert!(!player.is_all_in);

        // Raise to 100 with only 30 chips left.
        let paid = player.bet(PlayerAction::Raise, Chips::new(100));
        assert_eq!(paid, Chips::new(30));
        assert_eq!(player.bet, Chips::new(50));
        assert_eq!(player.chips, Chips::ZERO);
        assert!(player.is_all_in);
        assert!(!player.can_act());
        assert!(player.in_hand());

        player.refund(Chips::new(10));
        assert_eq!(player.bet, Chips::new(40));
        assert_eq!(player.chips, Chips::new(10));
        assert!(!player.is_all_in);
    }

    #[test]
    fn players_without_chips_sit_out() {
        let mut players = PlayersState::new(3, Chips::new(100));
        players.get_mut(1).unwrap().chips = Chips::ZERO;
        players.start_hand();

        assert!(players.get(1).unwrap().is_sitting_out);
        assert_eq!(players.count_in_hand(), 2);
        assert_eq!(players.count_with_chips(), 2);
        assert_eq!(players.total_chips(), Chips::new(200));
    }

    #[test]
    fn next_seat_wraps_and_skips() {
        let mut players = PlayersState::new(4, Chips::new(100));
        players.get_mut(0).unwrap().fold();
        players.get_mut(1).unwrap().is_all_in = true;

        assert_eq!(players.seats_from(2).collect::<Vec<_>>(), vec![2, 3, 0, 1]);
        assert_eq!(players.next_seat(3, Player::can_act), Some(2));
        assert_eq!(players.next_seat(2, Player::can_act), Some(3));

        players.activate_next_player(2, Player::can_act);
        assert_eq!(players.active_seat(), Some(3));

        players.activate_next_player(2, |p| p.seat == 0 && p.can_act());
        assert_eq!(players.active_seat(), None);
    }
}
