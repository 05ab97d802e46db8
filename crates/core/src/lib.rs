// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker core types.
//!
//! A heads-up match between a player and an opponent, each round deals two
//! private cards to each side and five shared cards, the player bets, the
//! opponent calls or goes all-in, and the best [HandValue](poker::HandValue)
//! takes the pot. The match ends when one side runs out of chips.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod betting;
pub mod game;
pub mod poker;
pub mod wager;
