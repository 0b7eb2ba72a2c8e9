//! Error types for game sessions.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while driving a game session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The action is not available on the current screen.
    #[error("cannot {action} from the {phase} screen")]
    InvalidAction {
        /// What was attempted.
        action: &'static str,
        /// Name of the current phase.
        phase: String,
    },

    /// A playthrough is already in progress.
    #[error("you have already started the game; use 'resume' to continue")]
    AlreadyStarted,

    /// There is no playthrough to resume.
    #[error("you have not started the game; use 'start' first")]
    NotStarted,

    /// Invalid choice or input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Unknown command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Scenario engine error.
    #[error("{0}")]
    Scenario(#[from] lk_core::ScenarioError),
}
