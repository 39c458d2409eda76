use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use crate::models::{HistoryEntry, PlacesRow};
use crate::parsers::query_places;
use crate::utils::{format_iso_naive, from_unix_micros};

/// Folds time-ordered visit rows into one entry per URL.
///
/// Entries keep first-seen order; `positions` maps a URL to its slot in `entries`.
#[derive(Debug, Default)]
pub struct VisitGrouper {
    entries: Vec<HistoryEntry>,
    positions: HashMap<String, usize>,
    skipped_rows: usize,
}

impl VisitGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one row. Rows without a URL or visit date are skipped.
    pub fn push(&mut self, row: PlacesRow) {
        let (Some(url), Some(visit_date)) = (row.url, row.visit_date) else {
            self.skip("row without url or visit date");
            return;
        };
        // Firefox writes 0 for visits it never dated; those would land on 1970-01-01
        if url.is_empty() || visit_date == 0 {
            self.skip("row with empty url or zero visit date");
            return;
        }
        let Some(visited_at) = from_unix_micros(visit_date) else {
            self.skip("visit date out of range");
            return;
        };
        let timestamp = format_iso_naive(&visited_at);

        // Rows arrive oldest first, so appending keeps each timestamp list ascending
        match self.positions.get(&url).copied() {
            Some(index) => self.entries[index].timestamps.push(timestamp),
            None => {
                let mut entry = HistoryEntry::new(
                    url.clone(),
                    row.title.unwrap_or_default(),
                    row.visit_count.unwrap_or(0),
                );
                entry.timestamps.push(timestamp);
                self.positions.insert(url, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Entries in first-seen URL order
    pub fn finish(self) -> Vec<HistoryEntry> {
        self.entries
    }

    fn skip(&mut self, reason: &str) {
        self.skipped_rows += 1;
        debug!(reason, "skipping history row");
    }
}

/// Group visit rows by URL in a single pass
pub fn group_visits(rows: impl IntoIterator<Item = PlacesRow>) -> Vec<HistoryEntry> {
    let mut grouper = VisitGrouper::new();
    for row in rows {
        grouper.push(row);
    }

    info!(
        entries = grouper.entries.len(),
        skipped_rows = grouper.skipped_rows(),
        "grouped history visits"
    );
    grouper.finish()
}

/// Read a Firefox `places.sqlite` and group its visits by URL
///
/// # Errors
///
/// Returns an error if the database can't be opened or lacks the places tables.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use timeline_export::parse_places_file;
///
/// let entries = parse_places_file(Path::new("places.sqlite"))?;
/// println!("{} distinct URLs", entries.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn parse_places_file(path: &Path) -> Result<Vec<HistoryEntry>> {
    let rows = query_places(path)?;
    Ok(group_visits(rows))
}
