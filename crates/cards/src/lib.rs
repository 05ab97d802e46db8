// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "TD".parse().unwrap();
//! assert!(ah.rank() > td.rank());
//! ```
//!
//! and a [Deck] type for shuffling and dealing a round of heads-up cards:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let player = deck.deal_private_hand();
//! let opponent = deck.deal_private_hand();
//! let board = deck.deal_shared_cards();
//! assert_eq!(deck.count(), Deck::SIZE - player.len() - opponent.len() - board.len());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
