//! Readers for the two input formats.
//!
//! # Error Handling Strategy
//!
//! Two classes of failure are kept apart:
//!
//! - **Input-level failures** (missing file, not an mbox archive, not a places
//!   database, missing tables) are fatal. They propagate as `anyhow::Result` with
//!   context naming the file, and no output is written.
//!
//! - **Record-level failures** (unparseable date or address, undecodable body part,
//!   unparseable message) never abort a run. Extractors return `Option` and the
//!   caller substitutes a documented default, logging the degradation at debug level.

pub mod dates;
pub mod email;
pub mod mbox;
pub mod places;

pub use email::normalize_message;
pub use mbox::{MboxReader, RawMessage, open_mbox};
pub use places::query_places;
