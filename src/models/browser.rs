use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Browser,
}

/// All visits to one URL, in visit order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub url: String,
    /// Title recorded with the first visit seen
    pub title: String,
    pub timestamps: Vec<String>,
    /// Visit counter from the first row seen for this URL
    pub visit_count: i64,
}

impl HistoryEntry {
    pub fn new(url: String, title: String, visit_count: i64) -> Self {
        Self { kind: EntryKind::Browser, url, title, timestamps: Vec::new(), visit_count }
    }
}

/// A row of `moz_places JOIN moz_historyvisits`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacesRow {
    pub url: Option<String>,
    pub title: Option<String>,
    pub visit_count: Option<i64>,
    /// Microseconds since the Unix epoch (UTC)
    pub visit_date: Option<i64>,
}
