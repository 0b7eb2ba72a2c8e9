//! Screens of the game session state machine.

use serde::{Deserialize, Serialize};

use crate::luck::LuckBand;

/// Where the session currently is.
///
/// `start → instructions → scenario(k) → outcome(k) → scenario(k+1) → … → end → start`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Title screen.
    Start,
    /// Instructions shown before a playthrough begins.
    Instructions,
    /// Waiting for a choice in the scenario at `index`.
    Scenario {
        /// Zero-based position in the playthrough.
        index: usize,
    },
    /// Showing the resolved outcome of the scenario at `index`.
    Outcome {
        /// Zero-based position in the playthrough.
        index: usize,
    },
    /// Playthrough finished.
    End {
        /// Final classification of the luck score.
        band: LuckBand,
    },
}

impl Phase {
    /// Short screen name used in messages and the journal.
    pub fn name(&self) -> String {
        match self {
            Self::Start => "start".to_string(),
            Self::Instructions => "instructions".to_string(),
            Self::Scenario { index } => format!("scenario {}", index + 1),
            Self::Outcome { index } => format!("outcome {}", index + 1),
            Self::End { .. } => "end".to_string(),
        }
    }

    /// Whether a playthrough is underway on this screen.
    pub fn in_playthrough(&self) -> bool {
        matches!(self, Self::Scenario { .. } | Self::Outcome { .. })
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_one_based() {
        assert_eq!(Phase::Scenario { index: 0 }.name(), "scenario 1");
        assert_eq!(Phase::Outcome { index: 3 }.name(), "outcome 4");
        assert_eq!(Phase::End { band: LuckBand::Lucky }.to_string(), "end");
    }

    #[test]
    fn playthrough_screens() {
        assert!(Phase::Scenario { index: 1 }.in_playthrough());
        assert!(Phase::Outcome { index: 1 }.in_playthrough());
        assert!(!Phase::Start.in_playthrough());
        assert!(!Phase::Instructions.in_playthrough());
    }
}
