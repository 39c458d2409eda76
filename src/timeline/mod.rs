//! The two export pipelines.
//!
//! - [`mail`]: mbox archive → normalized [`EmailEvent`](crate::models::EmailEvent)s → chronological order
//! - [`history`]: places database rows → [`HistoryEntry`](crate::models::HistoryEntry) per URL
//!
//! The pipelines share nothing but the ambient utilities.

pub mod history;
pub mod mail;

pub use history::{VisitGrouper, group_visits, parse_places_file};
pub use mail::{parse_mbox_file, sort_chronologically};
