//! Line-oriented front end for the game session.
//!
//! Reads N and K, then one command per line, and prints what the session
//! reports. Generic over reader and writer so transcripts can be tested
//! with in-memory buffers.

use crate::config::GameConfig;
use crate::session::{GameSession, SessionError, SessionEvent};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;
use strum::{Display, EnumString};
use tracing::{debug, info, instrument};

/// A command typed during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Command {
    /// Count out the next player.
    #[strum(serialize = "eliminate", serialize = "e")]
    Eliminate,
    /// Abandon the round and return to setup.
    #[strum(serialize = "reset", serialize = "r")]
    Reset,
    /// Leave the game.
    #[strum(serialize = "quit", serialize = "q")]
    Quit,
}

impl Command {
    /// Parses a line of input. A blank line means [`Command::Eliminate`].
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Some(Command::Eliminate);
        }
        Command::from_str(line).ok()
    }
}

/// What ended a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Finished,
    Quit,
}

/// Interactive console driving a [`GameSession`].
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    session: GameSession,
    label: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console using the bounds and label from `config`.
    #[instrument(skip(input, output, config))]
    pub fn new(input: R, output: W, config: &GameConfig) -> Self {
        Self {
            input,
            output,
            session: GameSession::new(config.bounds()),
            label: config.label().clone(),
        }
    }

    /// Runs rounds until the user quits or input ends.
    ///
    /// `players` and `step` pre-fill the first round; later rounds prompt
    /// for both values.
    #[instrument(skip(self))]
    pub fn run(&mut self, mut players: Option<usize>, mut step: Option<usize>) -> Result<()> {
        loop {
            let Some(n) = self.value_or_prompt(players.take(), "Enter N value: ", "N")? else {
                return Ok(());
            };
            let Some(k) = self.value_or_prompt(step.take(), "Enter K value: ", "K")? else {
                return Ok(());
            };

            match self.session.on_start(n, k) {
                Ok(_) => {
                    writeln!(
                        self.output,
                        "The game started with N={} players, K={} steps",
                        n, k
                    )?;
                }
                Err(e) => {
                    writeln!(self.output, "Invalid input: {}", e)?;
                    continue;
                }
            }

            if self.play_round()? == RoundEnd::Quit {
                info!("User quit");
                return Ok(());
            }
        }
    }

    /// Reads commands until the round ends.
    #[instrument(skip(self))]
    fn play_round(&mut self) -> Result<RoundEnd> {
        loop {
            let Some(line) = self.prompt("> ")? else {
                return Ok(RoundEnd::Quit);
            };

            match Command::parse_line(&line) {
                Some(Command::Eliminate) => {
                    if self.eliminate()? {
                        return Ok(RoundEnd::Finished);
                    }
                }
                Some(Command::Reset) => {
                    self.session.on_reset();
                    writeln!(self.output, "Game reset.")?;
                    return Ok(RoundEnd::Finished);
                }
                Some(Command::Quit) => return Ok(RoundEnd::Quit),
                None => {
                    debug!(line = line.trim(), "Unrecognised command");
                    writeln!(
                        self.output,
                        "Unknown command '{}'. Press Enter or type e to eliminate, r to reset, q to quit.",
                        line.trim()
                    )?;
                }
            }
        }
    }

    /// Eliminates one player. Returns true once the winner is announced.
    fn eliminate(&mut self) -> Result<bool> {
        match self.session.on_eliminate() {
            Ok(SessionEvent::Eliminated { player, .. }) => {
                writeln!(
                    self.output,
                    "Eliminated player: {}",
                    player.labeled(&self.label)
                )?;
                Ok(false)
            }
            Ok(SessionEvent::Winner { player, .. }) => {
                writeln!(self.output, "The winner is {}!", player.labeled(&self.label))?;
                Ok(true)
            }
            Ok(SessionEvent::Started { .. } | SessionEvent::Reset) => Ok(false),
            Err(SessionError::NoActiveGame) => {
                writeln!(self.output, "No players to eliminate.")?;
                Ok(true)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Uses `value` if present, otherwise prompts until a number is entered.
    ///
    /// Returns `None` at end of input or when the user types quit.
    fn value_or_prompt(
        &mut self,
        value: Option<usize>,
        prompt: &str,
        name: &str,
    ) -> Result<Option<usize>> {
        if value.is_some() {
            return Ok(value);
        }
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            if matches!(Command::from_str(line.trim()), Ok(Command::Quit)) {
                return Ok(None);
            }
            match line.trim().parse::<usize>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(
                    self.output,
                    "Invalid input: {} must be a whole number, got '{}'",
                    name,
                    line.trim()
                )?,
            }
        }
    }

    /// Writes `prompt` and reads one line. Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// The session driven by this console.
    pub fn session(&self) -> &GameSession {
        &self.session
    }
}
