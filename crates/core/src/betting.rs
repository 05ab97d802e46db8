// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Heads-up betting round resolution.
//!
//! The player asks for a wager and the opponent always calls it. When the
//! opponent can not cover the wager it goes all-in and the player wager is
//! lowered to match, so both sides always commit the same amount. The pot goes
//! to the side with the best hand or is split back on a tie.
use log::{debug, info};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::{cmp::Ordering, fmt};
use thiserror::Error;

use crate::poker::{Chips, HandValue};

/// One of the two sides of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The side that makes the wager.
    Player,
    /// The side that calls the wager.
    Opponent,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("player"),
            Side::Opponent => f.write_str("opponent"),
        }
    }
}

/// Errors returned when creating stakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StakesError {
    /// The chips of both sides do not fit in a single chips amount.
    #[error("stakes {player} and {opponent} overflow the chips total")]
    Overflow {
        /// The player chips.
        player: Chips,
        /// The opponent chips.
        opponent: Chips,
    },
}

/// The chips each side owns.
///
/// The total of both sides always fits in [Chips], so a round can move any
/// amount from one side to the other without overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stakes {
    player: Chips,
    opponent: Chips,
}

impl<'de> Deserialize<'de> for Stakes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Repr {
            player: Chips,
            opponent: Chips,
        }

        let repr = Repr::deserialize(deserializer)?;
        Stakes::try_new(repr.player, repr.opponent).map_err(de::Error::custom)
    }
}

impl Stakes {
    /// Creates stakes with the given amounts.
    ///
    /// # Panics
    ///
    /// Panics if `player + opponent` overflows, see [Stakes::try_new].
    pub fn new(player: u32, opponent: u32) -> Self {
        match Self::try_new(Chips::new(player), Chips::new(opponent)) {
            Ok(stakes) => stakes,
            Err(e) => panic!("{e}"),
        }
    }

    /// Creates stakes checking that the total fits in [Chips].
    pub fn try_new(player: Chips, opponent: Chips) -> Result<Self, StakesError> {
        match player.checked_add(opponent) {
            Some(_) => Ok(Self { player, opponent }),
            None => Err(StakesError::Overflow { player, opponent }),
        }
    }

    /// The player chips.
    pub fn player(&self) -> Chips {
        self.player
    }

    /// The opponent chips.
    pub fn opponent(&self) -> Chips {
        self.opponent
    }

    /// The chips owned by a side.
    pub fn of(&self, side: Side) -> Chips {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    /// The chips owned by both sides.
    pub fn total(&self) -> Chips {
        self.player + self.opponent
    }

    /// Takes the committed amount from both sides.
    pub fn debit(&self, commitment: &Commitment) -> Stakes {
        Stakes {
            player: self.player - commitment.amount,
            opponent: self.opponent - commitment.amount,
        }
    }

    /// Gives `amount` to a side.
    ///
    /// The amount must come from chips already counted in the total, like a
    /// debited commitment.
    fn credit(&self, side: Side, amount: Chips) -> Stakes {
        match side {
            Side::Player => Stakes {
                player: self.player + amount,
                opponent: self.opponent,
            },
            Side::Opponent => Stakes {
                player: self.player,
                opponent: self.opponent + amount,
            },
        }
    }
}

/// The amount both sides put in the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    /// The wager the player asked for.
    pub requested: Chips,
    /// The amount each side commits.
    pub amount: Chips,
}

impl Commitment {
    /// Caps the requested wager to the opponent stake.
    ///
    /// The wager must not exceed the player stake, callers check it before
    /// asking for a commitment. The amount never exceeds either stake.
    pub fn new(requested: Chips, stakes: &Stakes) -> Self {
        debug_assert!(
            requested <= stakes.player,
            "wager {requested} exceeds player stake {}",
            stakes.player
        );

        let amount = requested.min(stakes.opponent).min(stakes.player);

        Self { requested, amount }
    }

    /// Checks if the opponent could not cover the wager and went all-in.
    pub fn is_all_in(&self) -> bool {
        self.amount < self.requested
    }

    /// The part of the requested wager that is never taken from the player.
    pub fn refund(&self) -> Chips {
        self.requested - self.amount
    }

    /// The pot with both sides commitments.
    pub fn pot(&self) -> Chips {
        self.amount + self.amount
    }
}

/// The result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// The amount committed by each side.
    pub commitment: Commitment,
    /// The side that won the pot, `None` on a tie.
    pub winner: Option<Side>,
    /// The stakes before the round.
    pub before: Stakes,
    /// The stakes after the round.
    pub after: Stakes,
}

impl RoundOutcome {
    /// Checks if the round ended with a tie.
    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }

    /// The chips won or lost by the player.
    pub fn player_delta(&self) -> i64 {
        self.after.player.delta(self.before.player)
    }

    /// The chips won or lost by the opponent.
    pub fn opponent_delta(&self) -> i64 {
        self.after.opponent.delta(self.before.opponent)
    }
}

/// Resolves a betting round.
///
/// Caps the player `wager` to what the opponent can call, takes the commitment
/// from both stakes, and pays the pot to the side with the best hand value.
pub fn resolve(
    wager: Chips,
    stakes: Stakes,
    player: &HandValue,
    opponent: &HandValue,
) -> RoundOutcome {
    let commitment = Commitment::new(wager, &stakes);
    if commitment.is_all_in() {
        info!(
            "Opponent all-in with {}, player wager lowered from {} by {}",
            commitment.amount,
            commitment.requested,
            commitment.refund()
        );
    }

    let debited = stakes.debit(&commitment);
    debug!("Committed {} each, stakes {debited:?}", commitment.amount);

    let winner = match player.cmp(opponent) {
        Ordering::Greater => Some(Side::Player),
        Ordering::Less => Some(Side::Opponent),
        Ordering::Equal => None,
    };

    let after = match winner {
        Some(side) => debited.credit(side, commitment.pot()),
        None => debited
            .credit(Side::Player, commitment.amount)
            .credit(Side::Opponent, commitment.amount),
    };

    debug!("Player {player} opponent {opponent} winner {winner:?}");

    RoundOutcome {
        commitment,
        winner,
        before: stakes,
        after,
    }
}
