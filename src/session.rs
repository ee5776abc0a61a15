//! Game session controller.
//!
//! The session owns the player ring for the current round and turns
//! front-end actions (start, eliminate, reset) into [`SessionEvent`]s.
//! It knows nothing about how players are drawn on screen.

use crate::config::{Bounds, MIN_PLAYERS};
use crate::player::PlayerId;
use counting_out_ring::{Elimination, PlayerRing, Step};
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Setup
// ─────────────────────────────────────────────────────────────

/// Reasons a requested game cannot be set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SetupError {
    /// The player count lies outside the configured bounds.
    #[display("N must be between {} and {}, got {}", min, max, players)]
    PlayersOutOfRange {
        /// Requested player count.
        players: usize,
        /// Smallest accepted count.
        min: usize,
        /// Largest accepted count.
        max: usize,
    },
    /// The step count is below one.
    #[display("K must be at least 1, got {}", step)]
    StepTooSmall {
        /// Requested step count.
        step: usize,
    },
}

/// A validated player count and step count.
///
/// Holding a `GameSetup` means the parameters have passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct GameSetup {
    /// Number of players seated around the circle.
    players: usize,
    /// Every `step`-th player is counted out.
    step: NonZeroUsize,
}

impl GameSetup {
    /// Validates `players` and `step` against `bounds`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::PlayersOutOfRange`] if `players` is outside
    /// `bounds` or below [`MIN_PLAYERS`], or [`SetupError::StepTooSmall`]
    /// if `step` is zero.
    #[instrument]
    pub fn new(players: usize, step: usize, bounds: &Bounds) -> Result<Self, SetupError> {
        if players < MIN_PLAYERS || !bounds.contains(players) {
            return Err(SetupError::PlayersOutOfRange {
                players,
                min: bounds.min.max(MIN_PLAYERS),
                max: bounds.max,
            });
        }
        let step = NonZeroUsize::new(step).ok_or(SetupError::StepTooSmall { step })?;
        Ok(Self { players, step })
    }

    /// Seats players `0..players` in a fresh ring.
    #[instrument(skip(self), fields(players = self.players))]
    fn seat_players(&self) -> PlayerRing<PlayerId> {
        let mut ring = PlayerRing::with_capacity(self.players);
        ring.extend((0..self.players).map(PlayerId::new));
        ring
    }
}

// ─────────────────────────────────────────────────────────────
//  Events and errors
// ─────────────────────────────────────────────────────────────

/// Something the front end should report to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new round has begun.
    Started {
        /// Players seated.
        players: usize,
        /// Step count.
        step: usize,
    },
    /// A player was counted out.
    Eliminated {
        /// Player removed from the circle.
        player: PlayerId,
        /// Players still seated.
        remaining: usize,
    },
    /// One player is left. The session is back in setup.
    Winner {
        /// The last player standing.
        player: PlayerId,
        /// Players counted out this round, in order.
        eliminated: Vec<PlayerId>,
    },
    /// The round was abandoned and the session is back in setup.
    Reset,
}

/// Errors returned by [`GameSession`] actions.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The requested parameters are invalid.
    #[display("{}", _0)]
    #[from]
    Setup(SetupError),
    /// An elimination was requested with no round running.
    #[display("No players to eliminate")]
    NoActiveGame,
    /// A new round was requested while one is running.
    #[display("A game is already in progress")]
    GameInProgress,
}

// ─────────────────────────────────────────────────────────────
//  Session
// ─────────────────────────────────────────────────────────────

/// A running round: its parameters, elimination sequence and history.
#[derive(Debug, Clone)]
pub struct Round {
    setup: GameSetup,
    elimination: Elimination<PlayerId>,
    history: Vec<PlayerId>,
}

impl Round {
    /// Parameters the round was started with.
    pub fn setup(&self) -> &GameSetup {
        &self.setup
    }

    /// Players counted out so far, in order.
    pub fn history(&self) -> &[PlayerId] {
        &self.history
    }

    /// Players still seated, in circle order.
    pub fn seated(&self) -> Vec<PlayerId> {
        self.elimination.survivors().copied().collect()
    }
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Default)]
pub enum SessionPhase {
    /// Waiting for N and K.
    #[default]
    Setup,
    /// A round is being played.
    InProgress(Round),
}

/// Controller for a single counting-out game at a time.
#[derive(Debug, Clone)]
pub struct GameSession {
    bounds: Bounds,
    phase: SessionPhase,
}

impl GameSession {
    /// Creates a session in the setup phase.
    #[instrument]
    pub fn new(bounds: Bounds) -> Self {
        info!(min = bounds.min, max = bounds.max, "Creating game session");
        Self {
            bounds,
            phase: SessionPhase::Setup,
        }
    }

    /// Starts a new round with `players` players counting by `step`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GameInProgress`] if a round is already
    /// running, or [`SessionError::Setup`] if the parameters are invalid.
    #[instrument(skip(self))]
    pub fn on_start(&mut self, players: usize, step: usize) -> Result<SessionEvent, SessionError> {
        if self.is_in_progress() {
            warn!("Start requested while a round is running");
            return Err(SessionError::GameInProgress);
        }

        let setup = GameSetup::new(players, step, &self.bounds).inspect_err(|e| {
            warn!(error = %e, "Rejected game parameters");
        })?;
        self.start_round(setup);
        Ok(SessionEvent::Started { players, step })
    }

    /// Starts a new round from already validated parameters.
    #[instrument(skip(self))]
    pub fn start_round(&mut self, setup: GameSetup) {
        let elimination = setup.seat_players().begin_elimination(setup.step);
        info!(
            players = setup.players,
            step = setup.step.get(),
            "Round started"
        );
        self.phase = SessionPhase::InProgress(Round {
            setup,
            elimination,
            history: Vec::with_capacity(setup.players),
        });
    }

    /// Counts out the next player.
    ///
    /// When only one player is left the winner is announced and the
    /// session returns to setup.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveGame`] if no round is running.
    #[instrument(skip(self))]
    pub fn on_eliminate(&mut self) -> Result<SessionEvent, SessionError> {
        let SessionPhase::InProgress(round) = &mut self.phase else {
            debug!("Eliminate requested with no round running");
            return Err(SessionError::NoActiveGame);
        };

        match round.elimination.step() {
            Step::Eliminated(player) => {
                round.history.push(player);
                let remaining = round.elimination.remaining();
                info!(%player, remaining, "Player eliminated");
                Ok(SessionEvent::Eliminated { player, remaining })
            }
            Step::Survivor(player) => {
                let eliminated = std::mem::take(&mut round.history);
                info!(%player, "Winner decided");
                self.phase = SessionPhase::Setup;
                Ok(SessionEvent::Winner { player, eliminated })
            }
            Step::Exhausted => {
                warn!("Round had no players left");
                self.phase = SessionPhase::Setup;
                Err(SessionError::NoActiveGame)
            }
        }
    }

    /// Abandons any running round and returns to setup.
    #[instrument(skip(self))]
    pub fn on_reset(&mut self) -> SessionEvent {
        if self.is_in_progress() {
            info!("Round abandoned");
        }
        self.phase = SessionPhase::Setup;
        SessionEvent::Reset
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Returns true while a round is being played.
    pub fn is_in_progress(&self) -> bool {
        matches!(self.phase, SessionPhase::InProgress(_))
    }

    /// Players still seated, zero outside a round.
    pub fn remaining(&self) -> usize {
        match &self.phase {
            SessionPhase::InProgress(round) => round.elimination.remaining(),
            SessionPhase::Setup => 0,
        }
    }

    /// Players counted out in the running round.
    pub fn history(&self) -> &[PlayerId] {
        match &self.phase {
            SessionPhase::InProgress(round) => round.history(),
            SessionPhase::Setup => &[],
        }
    }

    /// The accepted player-count range.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}

// ─────────────────────────────────────────────────────────────
//  Whole-game solving
// ─────────────────────────────────────────────────────────────

/// Outcome of a complete game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSummary {
    /// Players seated.
    players: usize,
    /// Step count.
    step: usize,
    /// Players counted out, in order, survivor excluded.
    order: Vec<PlayerId>,
    /// The last player standing. Present for every validated setup.
    winner: Option<PlayerId>,
}

/// Plays a whole game without interaction.
#[instrument]
pub fn solve(setup: GameSetup) -> GameSummary {
    let mut elimination = setup.seat_players().begin_elimination(setup.step);
    let mut order = Vec::with_capacity(setup.players);
    let mut winner = None;
    loop {
        match elimination.step() {
            Step::Eliminated(player) => order.push(player),
            Step::Survivor(player) => winner = Some(player),
            Step::Exhausted => break,
        }
    }
    debug_assert!(winner.is_some(), "a validated setup seats at least two players");
    debug!(?winner, eliminated = order.len(), "Game solved");
    GameSummary {
        players: setup.players,
        step: setup.step.get(),
        order,
        winner,
    }
}
