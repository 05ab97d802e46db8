// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Types used in a Poker game.
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

pub use showdown_eval::{Card, Deck, HandRank, HandValue, Rank, Suit, parse_cards};

/// Chips amount.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Chips(u32);

impl Chips {
    /// The zero chips.
    pub const ZERO: Chips = Chips(0);

    /// Creates chips with the given value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The integer amount.
    pub fn amount(&self) -> u32 {
        self.0
    }

    /// Adds `rhs`, returning `None` on overflow.
    pub fn checked_add(&self, rhs: Chips) -> Option<Chips> {
        self.0.checked_add(rhs.0).map(Chips)
    }

    /// The signed difference `self - rhs`.
    pub fn delta(&self, rhs: Chips) -> i64 {
        i64::from(self.0) - i64::from(rhs.0)
    }
}

impl ops::Add for Chips {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Chips(self.0 + rhs.0)
    }
}

impl ops::Sub<Chips> for Chips {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0;
        if amount >= 10_000_000 {
            write!(f, "{:.1}M", amount as f64 / 1e6)
        } else if amount >= 1_000_000 {
            write!(
                f,
                "{},{:03},{:03}",
                amount / 1_000_000,
                amount % 1_000_000 / 1_000,
                amount % 1000
            )
        } else if amount >= 1_000 {
            write!(f, "{},{:03}", amount / 1000, amount % 1000)
        } else {
            write!(f, "{}", amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_formatting() {
        assert_eq!(Chips(123).to_string(), "123");
        assert_eq!(Chips(1_000).to_string(), "1,000");
        assert_eq!(Chips(12_345).to_string(), "12,345");
        assert_eq!(Chips(1_234_567).to_string(), "1,234,567");
        assert_eq!(Chips(123_456_789).to_string(), "123.5M");
    }

    #[test]
    fn chips_arithmetic() {
        let c = Chips::new(100) - Chips::new(30);
        assert_eq!(c, Chips::new(70));
        assert_eq!((c + Chips::new(60)).amount(), 130);
        assert_eq!(Chips::new(10) - Chips::new(20), Chips::ZERO);

        let max = Chips::new(u32::MAX);
        assert_eq!(max.checked_add(Chips::ZERO), Some(max));
        assert_eq!(max.checked_add(Chips::new(1)), None);
        assert_eq!(
            Chips::new(u32::MAX - 10).checked_add(Chips::new(10)),
            Some(max)
        );
    }

    #[test]
    fn chips_delta() {
        assert_eq!(Chips::new(130).delta(Chips::new(100)), 30);
        assert_eq!(Chips::new(70).delta(Chips::new(100)), -30);
        assert_eq!(Chips::ZERO.delta(Chips::new(u32::MAX)), -(u32::MAX as i64));
    }
}
