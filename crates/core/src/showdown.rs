// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown resolution and pot splitting.
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::poker::{Card, Chips, HandValue};

/// A player still in the hand at showdown.
#[derive(Debug, Clone, Copy)]
pub struct Contender {
    /// The player seat.
    pub seat: usize,
    /// The player hole cards.
    pub cards: [Card; 2],
}

/// Chips paid to a player at the end of a hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payoff {
    /// The winner seat.
    pub seat: usize,
    /// The chips won.
    pub chips: Chips,
    /// The winning hand, `None` if all the other players folded.
    pub hand: Option<HandValue>,
}

/// Compares the contenders hands and splits the pot among the winners.
///
/// A single contender takes the whole pot without evaluation. With ties the
/// pot is split evenly and the odd chips go to the first winner after the
/// dealer.
pub fn resolve(
    contenders: &[Contender],
    board: &[Card],
    pot: Chips,
    dealer: usize,
    seats: usize,
) -> Vec<Payoff> {
    if let [contender] = contenders {
        return vec![Payoff {
            seat: contender.seat,
            chips: pot,
            hand: None,
        }];
    }

    let mut best: Option<HandValue> = None;
    let mut winners = Vec::new();

    for contender in contenders {
        let mut cards = contender.cards.to_vec();
        cards.extend_from_slice(board);
        let value = HandValue::eval(&cards);
        debug!("Seat {} shows {value}", contender.seat);

        match best.as_ref().map(|b| value.cmp(b)) {
            None | Some(Ordering::Greater) => {
                winners.clear();
                winners.push(contender.seat);
                best = Some(value);
            }
            Some(Ordering::Equal) => winners.push(contender.seat),
            Some(Ordering::Less) => {}
        }
    }

    split_pot(pot, &winners, dealer, seats)
        .into_iter()
        .map(|(seat, chips)| Payoff {
            seat,
            chips,
            hand: best.clone(),
        })
        .collect()
}

/// Splits a pot among tied winners.
///
/// Returns the winners shares ordered from the first seat after the dealer,
/// the first winner in this order gets the pot remainder.
pub fn split_pot(pot: Chips, winners: &[usize], dealer: usize, seats: usize) -> Vec<(usize, Chips)> {
    if winners.is_empty() || seats == 0 {
        return Vec::new();
    }

    let first = (dealer + 1) % seats;
    let mut ordered = winners.to_vec();
    ordered.sort_by_key(|seat| (seat + seats - first) % seats);

    let count = ordered.len() as u32;
    let share = pot / count;
    let remainder = pot % count;

    ordered
        .into_iter()
        .enumerate()
        .map(|(idx, seat)| {
            let chips = if idx == 0 { share + remainder } else { share };
            (seat, chips)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn contender(seat: usize, hole: &str) -> Contender {
        let hole = cards(hole);
        Contender {
            seat,
            cards: [hole[0], hole[1]],
        }
    }

    #[test]
    fn split_remainder_goes_left_of_dealer() {
        let shares = split_pot(Chips::new(101), &[3, 1], 0, 4);
        assert_eq!(shares, vec![(1, Chips::new(51)), (3, Chips::new(50))]);

        // Scanning wraps around the table.
        let shares = split_pot(Chips::new(101), &[1, 3], 2, 4);
        assert_eq!(shares, vec![(3, Chips::new(51)), (1, Chips::new(50))]);

        assert!(split_pot(Chips::new(100), &[0], 0, 0).is_empty());
        assert!(split_pot(Chips::new(100), &[], 0, 4).is_empty());

        // The dealer is the last in order.
        let shares = split_pot(Chips::new(100), &[0, 1, 2], 0, 4);
        assert_eq!(
            shares,
            vec![(1, Chips::new(34)), (2, Chips::new(33)), (0, Chips::new(33))]
        );
    }

    #[test]
    fn single_contender_takes_pot_without_evaluation() {
        let payoffs = resolve(&[contender(2, "2C 7D")], &[], Chips::new(150), 0, 4);
        assert_eq!(
            payoffs,
            vec![Payoff {
                seat: 2,
                chips: Chips::new(150),
                hand: None,
            }]
        );
    }

    #[test]
    fn best_hand_wins() {
        let board = cards("QH JH TH 2C 3C");
        let contenders = [
            contender(0, "9S 9D"),
            contender(1, "AH KH"),
            contender(3, "AC KD"),
        ];

        let payoffs = resolve(&contenders, &board, Chips::new(300), 0, 4);
        assert_eq!(payoffs.len(), 1);
        assert_eq!(payoffs[0].seat, 1);
        assert_eq!(payoffs[0].chips, Chips::new(300));

        let hand = payoffs[0].hand.as_ref().unwrap();
        assert_eq!(hand.rank().category(), 9);
    }

    #[test]
    fn first_contender_can_win() {
        let board = cards("2H 7D 9C JS KD");
        let contenders = [contender(3, "AS AD"), contender(0, "QS QD")];

        let payoffs = resolve(&contenders, &board, Chips::new(80), 1, 4);
        assert_eq!(payoffs.len(), 1);
        assert_eq!(payoffs[0].seat, 3);
    }

    #[test]
    fn tied_hands_split_the_pot() {
        // All play the board straight.
        let board = cards("5H 6D 7C 8S 9D");
        let contenders = [
            contender(1, "2C 2D"),
            contender(2, "KC 3D"),
            contender(3, "2H 3S"),
        ];

        let payoffs = resolve(&contenders, &board, Chips::new(101), 0, 4);
        let shares = payoffs.iter().map(|p| (p.seat, p.chips)).collect::<Vec<_>>();
        assert_eq!(
            shares,
            vec![(1, Chips::new(35)), (2, Chips::new(33)), (3, Chips::new(33))]
        );
        assert!(payoffs.iter().all(|p| p.hand == payoffs[0].hand));
    }
}
