use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::models::{EmailEvent, UNKNOWN_SENDER};
use crate::parsers::{normalize_message, open_mbox};

/// Parse an mbox archive into email events sorted chronologically
///
/// Produces one event per archived message. Per-message problems degrade to
/// defaults; only archive-level problems are errors.
///
/// # Errors
///
/// Returns an error if the archive can't be opened, isn't an mbox file, or a
/// read fails partway through.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use timeline_export::parse_mbox_file;
///
/// let events = parse_mbox_file(Path::new("Inbox"))?;
/// println!("Parsed {} emails", events.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn parse_mbox_file(path: &Path) -> Result<Vec<EmailEvent>> {
    let mut events = Vec::new();

    for raw in open_mbox(path)? {
        let raw = raw?;
        events.push(normalize_message(raw.position, &raw.contents));
    }

    log_degradations(&events);
    sort_chronologically(&mut events);

    Ok(events)
}

/// Stable sort by timestamp string; events without a timestamp come first
pub fn sort_chronologically(events: &mut [EmailEvent]) {
    // sort_by is stable: equal timestamps keep archive order
    events.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
}

fn log_degradations(events: &[EmailEvent]) {
    let missing_timestamps = events.iter().filter(|e| e.timestamp.is_none()).count();
    let unknown_senders = events.iter().filter(|e| e.sender == UNKNOWN_SENDER).count();
    let empty_bodies = events.iter().filter(|e| e.body.is_empty()).count();

    info!(
        messages = events.len(),
        missing_timestamps, unknown_senders, empty_bodies, "normalized mbox archive"
    );
}
