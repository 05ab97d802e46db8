// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! [HandValue::eval] tries the categories from the strongest to the weakest and
//! the first one that matches the hand wins. Two values are compared by their
//! strength and, when that is the same, by the rank of the first tie-break card
//! only, the remaining cards are never looked at.

mod rank;
pub use rank::HandRank;

mod value;
pub use value::HandValue;
