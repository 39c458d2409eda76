//! Data models for the exported timeline files.
//!
//! - [`EmailEvent`] - One normalized message from an mbox archive
//! - [`HistoryEntry`] - One URL from Firefox history with all of its visits
//! - [`PlacesRow`] - One raw row of the places/visits join, before grouping
//! - [`FolderType`] - Which Thunderbird folder an archive was exported from
//!
//! The exported models derive serde so the JSON field order is the struct field order.

pub mod browser;
pub mod email;
pub mod folder;

pub use browser::{EntryKind, HistoryEntry, PlacesRow};
pub use email::{EmailEvent, NO_SUBJECT, UNKNOWN_SENDER};
pub use folder::FolderType;
