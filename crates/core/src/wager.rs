// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wager input validation.
use thiserror::Error;

use crate::poker::Chips;

/// A rejected wager request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WagerError {
    /// The input is not a non negative integer.
    #[error("invalid wager {0:?}")]
    Format(String),
    /// The wager is larger than the player stake.
    #[error("wager {wager} exceeds the available {stake} chips")]
    InsufficientFunds {
        /// The requested wager.
        wager: Chips,
        /// The player stake.
        stake: Chips,
    },
}

/// Checks that a wager can be paid with the given stake.
pub fn check_wager(wager: Chips, stake: Chips) -> Result<Chips, WagerError> {
    if wager > stake {
        Err(WagerError::InsufficientFunds { wager, stake })
    } else {
        Ok(wager)
    }
}

/// Parses a wager typed by a player.
///
/// The input, without surrounding whitespace, must only contain decimal digits
/// and must not exceed the player `stake`.
pub fn parse_wager(input: &str, stake: Chips) -> Result<Chips, WagerError> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(WagerError::Format(input.to_string()));
    }

    let wager = input
        .parse::<u32>()
        .map_err(|_| WagerError::Format(input.to_string()))?;

    check_wager(Chips::new(wager), stake)
}
