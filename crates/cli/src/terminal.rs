// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::{Result, bail};
use crossterm::style::{StyledContent, Stylize};
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use std::io::{self, BufRead, IsTerminal, Write};

use showdown_core::{
    betting::{Side, Stakes},
    game::{Deal, Match, RoundReport},
    poker::{Card, Chips},
    wager::parse_wager,
};

/// The match configuration.
#[derive(Debug)]
pub struct Config {
    /// The chips both sides start with.
    pub chips: Chips,
    /// The deck seed.
    pub seed: Option<u64>,
}

/// Runs a match on the standard input and output.
pub fn run(config: Config) -> Result<()> {
    let rng = match config.seed {
        Some(seed) => {
            info!("Shuffling with seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let mut game = Match::with_rng(config.chips, rng)?;
    let stdout = io::stdout();
    let colored = stdout.is_terminal();
    let mut term = Terminal::new(io::stdin().lock(), stdout).with_color(colored);

    play(&mut game, &mut term)
}

/// Plays rounds until one side runs out of chips.
pub fn play<R: BufRead, W: Write>(game: &mut Match, term: &mut Terminal<R, W>) -> Result<()> {
    while !game.is_over() {
        term.print_stakes(&game.stakes())?;

        // The wager is placed before the player sees the cards.
        let deal = game.deal();
        let wager = term.read_wager(game.stakes().player())?;
        let report = game.play_round(&deal, wager)?;

        term.print_round(&deal, &report)?;
    }

    term.print_match_end(game)
}

/// A line based terminal.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    colored: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal that reads from `input` and writes plain text to
    /// `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            colored: false,
        }
    }

    /// Enables or disables colored results.
    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Asks for a wager until the player enters one the stake can pay.
    pub fn read_wager(&mut self, stake: Chips) -> Result<Chips> {
        loop {
            write!(self.output, "How much do you want to bet? ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed while waiting for a wager");
            }

            match parse_wager(&line, stake) {
                Ok(wager) => return Ok(wager),
                Err(e) => {
                    debug!("Rejected wager: {e}");
                    writeln!(self.output, "Invalid bet, please bet again.")?;
                }
            }
        }
    }

    /// Prints both sides chips.
    pub fn print_stakes(&mut self, stakes: &Stakes) -> Result<()> {
        writeln!(
            self.output,
            "\nYour chips: {}, opponent chips: {}",
            stakes.player(),
            stakes.opponent()
        )?;
        Ok(())
    }

    /// Prints the cards, hand values and result of a round.
    pub fn print_round(&mut self, deal: &Deal, report: &RoundReport) -> Result<()> {
        let commitment = report.outcome.commitment;
        if commitment.is_all_in() {
            writeln!(
                self.output,
                "Opponent is going all-in with {}!",
                commitment.amount
            )?;
            writeln!(
                self.output,
                "Your bet has been lowered to match the opponent all-in of {}!",
                commitment.amount
            )?;
        }

        writeln!(self.output, "Your hand: {}", cards_to_string(&deal.player))?;
        writeln!(self.output, "Community cards: {}", cards_to_string(&deal.board))?;
        writeln!(
            self.output,
            "Opponent hand: {}",
            cards_to_string(&deal.opponent)
        )?;
        writeln!(
            self.output,
            "You have {}, the opponent has {}",
            report.player_value, report.opponent_value
        )?;

        let result = match report.outcome.winner {
            Some(Side::Player) => "You win this round!".green(),
            Some(Side::Opponent) => "Opponent wins this round!".red(),
            None => "It's a tie!".yellow(),
        };
        writeln!(self.output, "{}", self.styled(result))?;

        Ok(())
    }

    /// Prints the match result.
    pub fn print_match_end(&mut self, game: &Match) -> Result<()> {
        if let Some(side) = game.winner() {
            let message = match side {
                Side::Player => "Congratulations! You win the game!".green(),
                Side::Opponent => "Sorry, the opponent wins the game!".red(),
            };
            writeln!(self.output, "{}", self.styled(message.bold()))?;
            writeln!(
                self.output,
                "Final chips of the {side}: {}",
                game.stakes().of(side)
            )?;
        }

        self.output.flush()?;
        Ok(())
    }

    fn styled(&self, content: StyledContent<&str>) -> String {
        if self.colored {
            content.to_string()
        } else {
            content.content().to_string()
        }
    }

    /// Returns the terminal output.
    pub fn into_output(self) -> W {
        self.output
    }
}

fn cards_to_string(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
