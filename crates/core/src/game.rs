// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Heads-up match driver.
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    betting::{self, RoundOutcome, Side, Stakes, StakesError},
    poker::{Card, Chips, Deck, HandValue},
    wager::{WagerError, check_wager},
};

/// The match state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// Both sides have chips.
    InProgress,
    /// The player has no chips left.
    PlayerDepleted,
    /// The opponent has no chips left.
    OpponentDepleted,
}

impl MatchState {
    // Chips are conserved and a match starts with both stakes positive, so
    // both sides can never be depleted at once.
    fn from_stakes(stakes: &Stakes) -> Self {
        if stakes.player() == Chips::ZERO {
            MatchState::PlayerDepleted
        } else if stakes.opponent() == Chips::ZERO {
            MatchState::OpponentDepleted
        } else {
            MatchState::InProgress
        }
    }
}

/// Errors returned when creating a match or playing a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The match has already ended.
    #[error("the match is over ({0:?})")]
    Over(MatchState),
    /// The player wager is not valid.
    #[error(transparent)]
    Wager(#[from] WagerError),
    /// A side starts the match without chips.
    #[error("the {0} starting stake is empty")]
    EmptyStake(Side),
    /// The starting stakes are too large.
    #[error(transparent)]
    Stakes(#[from] StakesError),
}

/// The cards dealt for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal {
    /// The player private cards.
    pub player: [Card; 2],
    /// The opponent private cards.
    pub opponent: [Card; 2],
    /// The shared cards.
    pub board: [Card; 5],
}

impl Deal {
    /// Deals a round from a deck.
    pub fn from_deck(deck: &mut Deck) -> Self {
        let player = deck.deal_private_hand();
        let opponent = deck.deal_private_hand();
        let board = deck.deal_shared_cards();
        Self {
            player,
            opponent,
            board,
        }
    }

    /// The player private cards followed by the shared cards.
    pub fn player_hand(&self) -> Vec<Card> {
        self.player.iter().chain(&self.board).copied().collect()
    }

    /// The opponent private cards followed by the shared cards.
    pub fn opponent_hand(&self) -> Vec<Card> {
        self.opponent.iter().chain(&self.board).copied().collect()
    }
}

/// A settled round.
#[derive(Debug, Clone)]
pub struct RoundReport {
    /// The round number starting from 1.
    pub round: u32,
    /// The player hand value.
    pub player_value: HandValue,
    /// The opponent hand value.
    pub opponent_value: HandValue,
    /// The betting outcome.
    pub outcome: RoundOutcome,
}

/// A heads-up match between a player and an opponent.
#[derive(Debug)]
pub struct Match {
    stakes: Stakes,
    state: MatchState,
    round: u32,
    rng: StdRng,
}

impl Match {
    /// Create a new match with both sides starting with `chips`.
    pub fn new(chips: Chips) -> Result<Self, MatchError> {
        Self::with_rng(chips, StdRng::from_os_rng())
    }

    /// Create a new match with user initialized randomness.
    pub fn with_rng(chips: Chips, rng: StdRng) -> Result<Self, MatchError> {
        Self::with_stakes(Stakes::try_new(chips, chips)?, rng)
    }

    /// Create a match from the given stakes.
    ///
    /// Both sides must start with some chips.
    pub fn with_stakes(stakes: Stakes, rng: StdRng) -> Result<Self, MatchError> {
        for side in [Side::Player, Side::Opponent] {
            if stakes.of(side) == Chips::ZERO {
                return Err(MatchError::EmptyStake(side));
            }
        }

        Ok(Self {
            stakes,
            state: MatchState::InProgress,
            round: 0,
            rng,
        })
    }

    /// The current stakes.
    pub fn stakes(&self) -> Stakes {
        self.stakes
    }

    /// The match state.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Checks if one side has run out of chips.
    pub fn is_over(&self) -> bool {
        self.state != MatchState::InProgress
    }

    /// The side with chips left once the match is over.
    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::InProgress => None,
            MatchState::PlayerDepleted => Some(Side::Opponent),
            MatchState::OpponentDepleted => Some(Side::Player),
        }
    }

    /// The number of rounds played.
    pub fn rounds(&self) -> u32 {
        self.round
    }

    /// Shuffles a new deck and deals the round cards.
    pub fn deal(&mut self) -> Deal {
        let mut deck = Deck::new_and_shuffled(&mut self.rng);
        Deal::from_deck(&mut deck)
    }

    /// Checks a wager against the player stake.
    pub fn check_wager(&self, wager: Chips) -> Result<Chips, WagerError> {
        check_wager(wager, self.stakes.player())
    }

    /// Evaluates both hands, settles the wager and updates the stakes.
    pub fn play_round(&mut self, deal: &Deal, wager: Chips) -> Result<RoundReport, MatchError> {
        if self.is_over() {
            return Err(MatchError::Over(self.state));
        }

        self.check_wager(wager)?;

        let player_value = HandValue::eval(&deal.player_hand());
        let opponent_value = HandValue::eval(&deal.opponent_hand());
        debug!("Player {player_value}, opponent {opponent_value}");

        let outcome = betting::resolve(wager, self.stakes, &player_value, &opponent_value);

        self.round += 1;
        self.stakes = outcome.after;
        self.state = MatchState::from_stakes(&self.stakes);

        match outcome.winner {
            Some(side) => info!(
                "Round {} won by {side}, pot {}, stakes {} / {}",
                self.round,
                outcome.commitment.pot(),
                self.stakes.player(),
                self.stakes.opponent()
            ),
            None => info!("Round {} tied", self.round),
        }

        if let Some(side) = self.winner() {
            info!("Match won by {side} after {} rounds", self.round);
        }

        Ok(RoundReport {
            round: self.round,
            player_value,
            opponent_value,
            outcome,
        })
    }
}
