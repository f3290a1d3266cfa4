// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! [HandValue::eval] ranks the best 5 cards hand that can be made out of 5, 6
//! or 7 cards. Hand values are totally ordered: the category is compared first
//! and hands with the same category are compared by their tiebreak ranks.
use serde::{Deserialize, Serialize};
use std::fmt;

use holdem_cards::{Card, Rank};

/// The hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Royal flush.
    RoyalFlush,
}

impl HandRank {
    /// Returns all categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The numeric category, 0 for high card up to 9 for a royal flush.
    pub const fn category(self) -> u8 {
        self as u8
    }

    /// The category label.
    pub fn label(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High card",
            HandRank::OnePair => "One pair",
            HandRank::TwoPair => "Two pair",
            HandRank::ThreeOfAKind => "Three of a kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full house",
            HandRank::FourOfAKind => "Four of a kind",
            HandRank::StraightFlush => "Straight flush",
            HandRank::RoyalFlush => "Royal flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The value of a hand.
///
/// The derived ordering compares the category first and then the tiebreak
/// ranks lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    tiebreak: Vec<Rank>,
}

impl HandValue {
    /// Evaluates a 5, 6 or 7 cards hand.
    ///
    /// The result doesn't depend on the cards order.
    ///
    /// Panics if the number of cards is not 5 <= n <= 7.
    pub fn eval(cards: &[Card]) -> Self {
        assert!((5..=7).contains(&cards.len()), "5 <= cards <= 7");

        let mut counts = [0u8; 15];
        let mut suit_masks = [0u16; 4];
        let mut mask = 0u16;

        for card in cards {
            let value = card.rank().value();
            counts[value as usize] += 1;
            suit_masks[card.suit() as usize] |= 1 << value;
            mask |= 1 << value;
        }

        // With at most 7 cards only one suit can have 5 cards.
        let flush = suit_masks.into_iter().find(|m| m.count_ones() >= 5);

        if let Some(high) = flush.and_then(straight_high) {
            return if high == Rank::Ace {
                Self::new(HandRank::RoyalFlush, vec![high])
            } else {
                Self::new(HandRank::StraightFlush, vec![high])
            };
        }

        let quads = with_count(&counts, 4).collect::<Vec<_>>();
        let trips = with_count(&counts, 3).collect::<Vec<_>>();
        let pairs = with_count(&counts, 2).collect::<Vec<_>>();

        if let Some(&quad) = quads.first() {
            let mut tiebreak = vec![quad];
            tiebreak.extend(kickers(mask, &[quad], 1));
            return Self::new(HandRank::FourOfAKind, tiebreak);
        }

        if let Some(&trip) = trips.first() {
            // A second triple can only play as a pair.
            let pair = trips.get(1).into_iter().chain(pairs.first()).max();
            if let Some(&pair) = pair {
                return Self::new(HandRank::FullHouse, vec![trip, pair]);
            }
        }

        if let Some(flush) = flush {
            let tiebreak = ranks_in(flush).take(5).collect();
            return Self::new(HandRank::Flush, tiebreak);
        }

        if let Some(high) = straight_high(mask) {
            return Self::new(HandRank::Straight, vec![high]);
        }

        if let Some(&trip) = trips.first() {
            let mut tiebreak = vec![trip];
            tiebreak.extend(kickers(mask, &[trip], 2));
            return Self::new(HandRank::ThreeOfAKind, tiebreak);
        }

        match pairs.as_slice() {
            [high, low, ..] => {
                let mut tiebreak = vec![*high, *low];
                tiebreak.extend(kickers(mask, &[*high, *low], 1));
                Self::new(HandRank::TwoPair, tiebreak)
            }
            [pair] => {
                let mut tiebreak = vec![*pair];
                tiebreak.extend(kickers(mask, &[*pair], 3));
                Self::new(HandRank::OnePair, tiebreak)
            }
            [] => Self::new(HandRank::HighCard, ranks_in(mask).take(5).collect()),
        }
    }

    fn new(rank: HandRank, tiebreak: Vec<Rank>) -> Self {
        Self { rank, tiebreak }
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The ranks used to break ties between hands of the same category.
    pub fn tiebreak(&self) -> &[Rank] {
        &self.tiebreak
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank)?;
        for rank in &self.tiebreak {
            write!(f, " {rank}")?;
        }

        Ok(())
    }
}

/// Returns the ranks set in a ranks mask from the highest.
fn ranks_in(mask: u16) -> impl Iterator<Item = Rank> {
    Rank::ranks()
        .rev()
        .filter(move |r| mask & (1 << r.value()) != 0)
}

/// Returns the ranks that appear exactly `n` times from the highest.
fn with_count(counts: &[u8; 15], n: u8) -> impl Iterator<Item = Rank> + '_ {
    Rank::ranks()
        .rev()
        .filter(move |r| counts[r.value() as usize] == n)
}

/// Returns the `n` highest ranks that are not in `skip`.
fn kickers(mask: u16, skip: &[Rank], n: usize) -> impl Iterator<Item = Rank> {
    let skip = skip.iter().fold(0u16, |m, r| m | (1 << r.value()));
    ranks_in(mask & !skip).take(n)
}

/// Returns the high card of the best straight in a ranks mask.
fn straight_high(mask: u16) -> Option<Rank> {
    // The ace also plays low in the wheel.
    let mask = if mask & (1 << Rank::Ace.value()) != 0 {
        mask | 0b10
    } else {
        mask
    };

    (5..=Rank::Ace.value())
        .rev()
        .find(|high| {
            let run = 0b11111u16 << (high - 4);
            mask & run == run
        })
        .and_then(Rank::from_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_cards::Deck;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn eval(s: &str) -> HandValue {
        HandValue::eval(&cards(s))
    }

    fn ranks(values: &[u8]) -> Vec<Rank> {
        values.iter().map(|&v| Rank::from_value(v).unwrap()).collect()
    }

    #[test]
    fn royal_flush() {
        let hv = eval("AH KH QH JH TH 2C 3C");
        assert_eq!(hv.rank(), HandRank::RoyalFlush);
        assert_eq!(hv.rank().category(), 9);
    }

    #[test]
    fn straight_flush() {
        let hv = eval("9D 8D 7D 6D 5D AD KC");
        assert_eq!(hv.rank(), HandRank::StraightFlush);
        assert_eq!(hv.tiebreak(), ranks(&[9]));

        // The wheel straight flush is the lowest straight flush.
        let wheel = eval("AS 2S 3S 4S 5S 6D");
        assert_eq!(wheel.rank(), HandRank::StraightFlush);
        assert_eq!(wheel.tiebreak(), ranks(&[5]));
        assert!(wheel < eval("2H 3H 4H 5H 6H"));
    }

    #[test]
    fn flush_and_straight_not_straight_flush() {
        // Flush in hearts, straight 5-9 with mixed suits.
        let hv = eval("5H 6C 7H 8D 9H 2H KH");
        assert_eq!(hv.rank(), HandRank::Flush);
        assert_eq!(hv.tiebreak(), ranks(&[13, 9, 7, 5, 2]));
    }

    #[test]
    fn four_of_a_kind() {
        let hv = eval("5D 5C 5H 9C 9D 5S 3S");
        assert_eq!(hv.rank(), HandRank::FourOfAKind);
        assert_eq!(hv.rank().category(), 7);
        assert_eq!(hv.tiebreak(), ranks(&[5, 9]));

        // Kicker may come from a pair.
        let hv = eval("7D 7C 7H 7S KD KC 2S");
        assert_eq!(hv.tiebreak(), ranks(&[7, 13]));
    }

    #[test]
    fn three_fives_and_two_nines_is_a_full_house() {
        let hv = eval("5D 5C 5H 9C 9D 2S 3S");
        assert_eq!(hv.rank(), HandRank::FullHouse);
        assert_eq!(hv.rank().category(), 6);
        assert_eq!(hv.tiebreak(), ranks(&[5, 9]));
    }

    #[test]
    fn full_house_with_two_triples() {
        let hv = eval("8D 8C 8H QC QD QS 3S");
        assert_eq!(hv.rank(), HandRank::FullHouse);
        assert_eq!(hv.tiebreak(), ranks(&[12, 8]));

        // The highest of two pairs plays.
        let hv = eval("4D 4C 4H 9C 9D KS KD");
        assert_eq!(hv.tiebreak(), ranks(&[4, 13]));

        let hv = eval("4D 4C 4H 9C 9D 2S 2D");
        assert_eq!(hv.tiebreak(), ranks(&[4, 9]));
    }

    #[test]
    fn wheel_straight() {
        let hv = eval("AS 2S 3D 4C 5H 9S 9D");
        assert_eq!(hv.rank(), HandRank::Straight);
        assert_eq!(hv.rank().category(), 4);
        assert_eq!(hv.tiebreak(), ranks(&[5]));

        assert!(hv < eval("2S 3D 4C 5H 6H 9S 9D"));
    }

    #[test]
    fn highest_straight_wins() {
        let hv = eval("4S 5D 6C 7H 8H 9S TD");
        assert_eq!(hv.rank(), HandRank::Straight);
        assert_eq!(hv.tiebreak(), ranks(&[10]));

        let hv = eval("TS JD QC KH AH 2S 3D");
        assert_eq!(hv.tiebreak(), ranks(&[14]));

        // No wrap around.
        let hv = eval("QS KD AC 2H 3H 8S 9D");
        assert_eq!(hv.rank(), HandRank::HighCard);
    }

    #[test]
    fn three_of_a_kind() {
        let hv = eval("JS JD JC 2H 8H 9S 4D");
        assert_eq!(hv.rank(), HandRank::ThreeOfAKind);
        assert_eq!(hv.tiebreak(), ranks(&[11, 9, 8]));
    }

    #[test]
    fn two_pair() {
        let hv = eval("JS JD 4C 4H 8H 9S 2D");
        assert_eq!(hv.rank(), HandRank::TwoPair);
        assert_eq!(hv.tiebreak(), ranks(&[11, 4, 9]));

        // With three pairs the lowest pair can be the kicker.
        let hv = eval("JS JD 4C 4H 8H 8S 2D");
        assert_eq!(hv.tiebreak(), ranks(&[11, 8, 4]));
    }

    #[test]
    fn one_pair_and_high_card() {
        let hv = eval("AS AD 4C 7H 8H QS 2D");
        assert_eq!(hv.rank(), HandRank::OnePair);
        assert_eq!(hv.tiebreak(), ranks(&[14, 12, 8, 7]));

        let hv = eval("AS JD 4C 7H 8H QS 2D");
        assert_eq!(hv.rank(), HandRank::HighCard);
        assert_eq!(hv.tiebreak(), ranks(&[14, 12, 11, 8, 7]));
    }

    #[test]
    fn kickers_break_ties() {
        let board = "KS KD 9C 5H 2D";
        let ace = eval(&format!("{board} AH 3C"));
        let queen = eval(&format!("{board} QH 3S"));
        assert_eq!(ace.rank(), queen.rank());
        assert!(ace > queen);

        // Both hands play the board.
        let h1 = eval("AS AD KC KH QD 2C 3C");
        let h2 = eval("AS AD KC KH QD 4H 5H");
        assert_eq!(h1, h2);
    }

    #[test]
    fn categories_are_ordered() {
        let hands = [
            "AS JD 4C 7H 8H",
            "AS AD 4C 7H 8H",
            "AS AD 4C 4H 8H",
            "AS AD AC 7H 8H",
            "4S 5D 6C 7H 8H",
            "2H 9H 4H 7H 8H",
            "AS AD AC 8C 8H",
            "AS AD AC AH 8H",
            "4H 5H 6H 7H 8H",
            "TS JS QS KS AS",
        ];

        let values = hands.iter().map(|h| eval(h)).collect::<Vec<_>>();
        for (value, rank) in values.iter().zip(HandRank::ranks()) {
            assert_eq!(value.rank(), rank);
        }

        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn display() {
        assert_eq!(eval("AS AD AC 8C 8H").to_string(), "Full house A 8");
        assert_eq!(eval("TS JS QS KS AS").to_string(), "Royal flush A");
    }

    #[test]
    #[should_panic]
    fn eval_too_few_cards() {
        HandValue::eval(&cards("AS AD AC 8C"));
    }

    #[test]
    fn all_five_cards_hands() {
        let mut counts = [0usize; 10];
        Deck::default().for_each(5, |hand| {
            counts[HandValue::eval(hand).rank() as usize] += 1;
        });

        assert_eq!(counts[HandRank::HighCard as usize], 1_302_540);
        assert_eq!(counts[HandRank::OnePair as usize], 1_098_240);
        assert_eq!(counts[HandRank::TwoPair as usize], 123_552);
        assert_eq!(counts[HandRank::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandRank::Straight as usize], 10_200);
        assert_eq!(counts[HandRank::Flush as usize], 5_108);
        assert_eq!(counts[HandRank::FullHouse as usize], 3_744);
        assert_eq!(counts[HandRank::FourOfAKind as usize], 624);
        assert_eq!(counts[HandRank::StraightFlush as usize], 36);
        assert_eq!(counts[HandRank::RoyalFlush as usize], 4);
    }
}
