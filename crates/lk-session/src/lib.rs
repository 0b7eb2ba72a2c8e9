//! Game sessions for Luckometer.
//!
//! Provides the session state machine that drives a playthrough, the
//! running luck score with its end-of-day bands, a journal of everything
//! that happened, and a plain-text command interface for terminals.

pub mod command;
pub mod config;
pub mod error;
pub mod journal;
pub mod luck;
pub mod phase;
pub mod render;
pub mod session;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use journal::{Journal, JournalEntry};
pub use luck::{LuckBand, LuckScore};
pub use phase::Phase;
pub use session::GameSession;
