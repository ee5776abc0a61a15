//! Counting Out - the Josephus elimination game.
//!
//! N players sit in a circle and every K-th player is counted out until
//! one remains.
//!
//! # Architecture
//!
//! - **Ring**: the circular player sequence and its elimination steps live
//!   in the `counting_out_ring` crate
//! - **Session**: validates N and K, drives one elimination per action and
//!   announces the winner
//! - **Console**: a line-oriented front end over the session
//! - **Config**: player bounds and defaults loaded from TOML
//!
//! # Example
//!
//! ```
//! use counting_out::{Bounds, GameSession, SessionEvent};
//!
//! let mut session = GameSession::new(Bounds::default());
//! session.on_start(2, 1).unwrap();
//! let event = session.on_eliminate().unwrap();
//! assert!(matches!(event, SessionEvent::Eliminated { remaining: 1, .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod player;
mod session;

// Crate-level exports - Configuration
pub use config::{Bounds, ConfigError, DEFAULT_MAX_PLAYERS, GameConfig, MIN_PLAYERS};

// Crate-level exports - Console front end
pub use console::{Command, Console};

// Crate-level exports - Session management
pub use player::PlayerId;
pub use session::{
    GameSession, GameSetup, GameSummary, Round, SessionError, SessionEvent, SessionPhase,
    SetupError, solve,
};

// Crate-level exports - Ring
pub use counting_out_ring::{Elimination, Phase, PlayerRing, Step, josephus};
