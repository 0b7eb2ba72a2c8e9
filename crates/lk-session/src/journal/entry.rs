//! Journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lk_core::Sign;

use crate::luck::LuckBand;

/// A single entry in the session journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JournalEntry {
    /// The player moved between screens.
    Navigation {
        /// What the player did, e.g. "start" or "home".
        action: String,
        /// Screen shown afterwards.
        screen: String,
        /// When it happened.
        timestamp: DateTime<Utc>,
    },
    /// A new playthrough was selected.
    PlaythroughStarted {
        /// Scenario labels in play order.
        scenarios: Vec<String>,
        /// Branches taken, e.g. "LRL".
        route: String,
        /// Luck at the start of the playthrough.
        luck: i64,
        /// When it started.
        timestamp: DateTime<Utc>,
    },
    /// The player picked an option.
    ChoiceMade {
        /// Scenario label.
        scenario: String,
        /// Choice number (1 or 2).
        choice: u8,
        /// Option label.
        label: String,
        /// When it was chosen.
        timestamp: DateTime<Utc>,
    },
    /// A choice resolved.
    OutcomeResolved {
        /// Scenario label.
        scenario: String,
        /// Whether luck went up or down.
        sign: Sign,
        /// Outcome text shown to the player.
        text: String,
        /// Signed luck change.
        delta: i32,
        /// Luck after applying the change.
        luck_after: i64,
        /// When it resolved.
        timestamp: DateTime<Utc>,
    },
    /// The playthrough reached its end.
    PlaythroughEnded {
        /// Final luck score.
        final_luck: i64,
        /// Band the score fell into.
        band: LuckBand,
        /// When it ended.
        timestamp: DateTime<Utc>,
    },
    /// Luck was redrawn for a new game.
    LuckReset {
        /// The fresh score.
        luck: i64,
        /// When it was reset.
        timestamp: DateTime<Utc>,
    },
    /// A player note.
    Note {
        /// The note text.
        text: String,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
}

impl JournalEntry {
    /// When the entry was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Navigation { timestamp, .. }
            | Self::PlaythroughStarted { timestamp, .. }
            | Self::ChoiceMade { timestamp, .. }
            | Self::OutcomeResolved { timestamp, .. }
            | Self::PlaythroughEnded { timestamp, .. }
            | Self::LuckReset { timestamp, .. }
            | Self::Note { timestamp, .. } => *timestamp,
        }
    }
}
