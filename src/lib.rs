//! Timeline Export - Turn local mail and browsing history into timeline JSON
//!
//! This library reads two kinds of local archives and writes them as JSON lists
//! for a timeline viewer:
//!
//! - Thunderbird mbox archives → [`EmailEvent`]s sorted chronologically
//! - Firefox `places.sqlite` databases → [`HistoryEntry`]s grouped by URL
//!
//! Record-level problems (bad dates, missing addresses, undecodable bodies, null
//! rows) degrade to documented defaults; only unreadable inputs are errors.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use timeline_export::{parse_mbox_file, parse_places_file};
//!
//! let emails = parse_mbox_file(Path::new("Inbox"))?;
//! let history = parse_places_file(Path::new("places.sqlite"))?;
//! println!("{} emails, {} URLs", emails.len(), history.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod models;
pub mod output;
pub mod parsers;
pub mod timeline;
pub mod utils;

// Re-export commonly used types
pub use models::{EmailEvent, FolderType, HistoryEntry};
pub use output::write_json_atomic;
pub use timeline::{group_visits, parse_mbox_file, parse_places_file, sort_chronologically};
