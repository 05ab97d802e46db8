// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! The evaluator classifies all the cards it is given as a single hand, a 7
//! cards hand made of 2 private and 5 shared cards is not reduced to its best
//! 5 cards. The result is a [HandValue] that carries the [HandRank] category
//! and the cards that make the category, used to break ties:
//!
//! ```
//! # use showdown_eval::*;
//! let quads = parse_cards("AS AH AD AC KS 2H 3D").unwrap();
//! let boat = parse_cards("KH KD AD AC KS 2H 3D").unwrap();
//!
//! let v1 = HandValue::eval(&quads);
//! let v2 = HandValue::eval(&boat);
//! assert_eq!(v1.rank(), HandRank::FourOfAKind);
//! assert_eq!(v2.rank(), HandRank::FullHouse);
//! assert!(v1 > v2);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit, parse_cards};
