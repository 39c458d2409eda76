use serde::{Deserialize, Serialize};

/// Subject used when the header is missing or empty
pub const NO_SUBJECT: &str = "(No subject)";

/// Sender used when no address can be extracted from the From header
pub const UNKNOWN_SENDER: &str = "(unknown)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailEvent {
    /// 1-based position in the archive
    pub id: usize,
    pub subject: String,
    pub sender: String,
    pub receivers: Vec<String>,
    pub timestamp: Option<String>,
    pub body: String,
}

impl EmailEvent {
    /// Event for a message nothing could be extracted from
    pub fn degraded(id: usize) -> Self {
        Self {
            id,
            subject: NO_SUBJECT.to_string(),
            sender: UNKNOWN_SENDER.to_string(),
            receivers: Vec::new(),
            timestamp: None,
            body: String::new(),
        }
    }

    /// Key used for chronological ordering; a missing timestamp sorts first
    pub fn sort_key(&self) -> &str {
        self.timestamp.as_deref().unwrap_or("")
    }
}
