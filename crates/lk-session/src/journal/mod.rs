//! Journaling system for recording game session events.

pub mod entry;
pub mod record;

pub use entry::JournalEntry;
pub use record::Journal;
