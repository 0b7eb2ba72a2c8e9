//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// A chronological log of session events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the journal entries as a JSON array.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Luckometer Journal\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::Navigation { action, screen, .. } => {
                    out.push_str(&format!("*{action}* → {screen}\n\n"));
                }
                JournalEntry::PlaythroughStarted {
                    scenarios,
                    route,
                    luck,
                    ..
                } => {
                    out.push_str("## Playthrough\n\n");
                    out.push_str(&format!("**Route**: {route} ({})\n", scenarios.join(", ")));
                    out.push_str(&format!("**Starting luck**: {luck}\n\n"));
                }
                JournalEntry::ChoiceMade {
                    scenario,
                    choice,
                    label,
                    ..
                } => {
                    out.push_str(&format!("**{scenario}**: chose {choice} ({label})\n"));
                }
                JournalEntry::OutcomeResolved {
                    sign,
                    text,
                    delta,
                    luck_after,
                    ..
                } => {
                    out.push_str(&format!("  *{sign}*: {text}\n"));
                    out.push_str(&format!("  Luck {delta:+} → {luck_after}\n\n"));
                }
                JournalEntry::PlaythroughEnded {
                    final_luck, band, ..
                } => {
                    out.push_str(&format!(
                        "**Final luck**: {final_luck} — {band}: {}\n\n",
                        band.message()
                    ));
                }
                JournalEntry::LuckReset { luck, .. } => {
                    out.push_str(&format!("*Luck reset to {luck}*\n\n"));
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("> {text}\n\n"));
                }
            }
        }
        out
    }

    /// Export the journal as plain text, one line per event, stamped with
    /// seconds since the first entry.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Luckometer Journal\n==================\n\n");
        let Some(first) = self.entries.first() else {
            return out;
        };
        let origin = first.timestamp();

        for entry in &self.entries {
            let elapsed = (entry.timestamp() - origin).num_milliseconds() as f64 / 1000.0;
            let line = match entry {
                JournalEntry::Navigation { action, screen, .. } => {
                    format!("{} -> {screen}", action.to_uppercase())
                }
                JournalEntry::PlaythroughStarted {
                    scenarios,
                    route,
                    luck,
                    ..
                } => format!(
                    "playthrough {route}: {} (luck {luck})",
                    scenarios.join(" -> ")
                ),
                JournalEntry::ChoiceMade {
                    scenario,
                    choice,
                    label,
                    ..
                } => format!("{scenario} choice {choice} ({label})"),
                JournalEntry::OutcomeResolved {
                    sign,
                    delta,
                    luck_after,
                    ..
                } => format!("{sign} outcome, luck {delta:+} -> {luck_after}"),
                JournalEntry::PlaythroughEnded {
                    final_luck, band, ..
                } => format!("end: final luck {final_luck} ({band})"),
                JournalEntry::LuckReset { luck, .. } => format!("luck reset to {luck}"),
                JournalEntry::Note { text, .. } => format!("note: {text}"),
            };
            out.push_str(&format!("{elapsed:.3}s: {line}\n"));
        }
        out
    }
}
