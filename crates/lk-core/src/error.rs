use std::path::PathBuf;

/// Alias for `Result<T, ScenarioError>`.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors raised while building or sequencing scenario content.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// A node has a child count other than zero or two, or leaves sit at
    /// different depths.
    #[error("invalid tree shape at {location}: {reason}")]
    InvalidTreeShape {
        /// Branch path from the root, e.g. `root.left.right`.
        location: String,
        /// What is wrong with the node.
        reason: String,
    },

    /// A playthrough was requested from an absent scenario list.
    #[error("no scenario list was supplied")]
    MissingInput,

    /// A choice number outside of `1..=2`.
    #[error("invalid choice: {0} (expected 1 or 2)")]
    InvalidChoice(u8),

    /// A luck delta outside of the allowed range.
    #[error("luck delta {0} is outside 1..=20")]
    LuckDeltaOutOfRange(i32),

    /// Positive and negative outcome text for one choice are identical.
    #[error("scenario {scenario} choice {choice}: positive and negative outcomes are identical")]
    DuplicateOutcome {
        /// Scenario id.
        scenario: u32,
        /// Choice number (1 or 2).
        choice: u8,
    },

    /// A required text field is blank.
    #[error("scenario {scenario}: {field} must not be empty")]
    EmptyField {
        /// Scenario id.
        scenario: u32,
        /// Name of the blank field.
        field: &'static str,
    },

    /// Content could not be parsed.
    #[error("content parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Content file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
