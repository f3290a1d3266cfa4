// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator groups the
//! cards by rank and suit and returns a [HandValue] made of the hand category
//! and the ranks that break ties between hands of the same category.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and compare it with other hands:
//!
//! ```
//! # use holdem_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]);
//! let v2 = HandValue::eval(&cards[5..]);
//! assert_eq!(v1.rank(), HandRank::StraightFlush);
//! assert!(v2 > v1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue};

// Reexport cards types.
pub use holdem_cards::{Card, Deck, Rank, Suit};
