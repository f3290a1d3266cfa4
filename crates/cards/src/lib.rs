// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.rank().value(), 14);
//! assert_eq!(ah.to_string(), "AH");
//! assert_eq!("AH".parse::<Card>().unwrap(), ah);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck:
//!
//! ```
//! # use holdem_cards::Deck;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut deck = Deck::new_and_shuffled(&mut rng);
//! let hole = (deck.deal().unwrap(), deck.deal().unwrap());
//! assert_ne!(hole.0, hole.1);
//! assert_eq!(deck.count(), Deck::SIZE - 2);
//! ```
//!
//! To iterate through all 5 cards hands:
//!
//! ```no_run
//! # use holdem_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
