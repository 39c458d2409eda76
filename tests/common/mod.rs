//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, params};
use tempfile::TempDir;

const FROM_LINE: &str = "From MAILER-DAEMON Mon Jan  1 00:00:00 2024";

/// Builder for a single RFC 5322 message
pub struct MessageBuilder {
    headers: Vec<(String, String)>,
    body: String,
}

impl MessageBuilder {
    /// Create a message with no headers and an empty body
    pub fn new() -> Self {
        Self { headers: Vec::new(), body: String::new() }
    }

    /// Add an arbitrary header
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn from(self, value: &str) -> Self {
        self.header("From", value)
    }

    pub fn to(self, value: &str) -> Self {
        self.header("To", value)
    }

    pub fn subject(self, value: &str) -> Self {
        self.header("Subject", value)
    }

    pub fn date(self, value: &str) -> Self {
        self.header("Date", value)
    }

    /// Set the body (used as-is, so it can hold MIME parts)
    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    /// Render headers, blank line and body
    pub fn to_raw(&self) -> String {
        let mut raw = String::new();
        for (name, value) in &self.headers {
            raw.push_str(&format!("{}: {}\n", name, value));
        }
        raw.push('\n');
        raw.push_str(&self.body);
        if !self.body.ends_with('\n') {
            raw.push('\n');
        }
        raw
    }
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for mbox archives
pub struct MboxBuilder {
    messages: Vec<String>,
}

impl MboxBuilder {
    pub fn new() -> Self {
        Self { messages: Vec::new() }
    }

    /// Append a message
    pub fn with_message(self, message: MessageBuilder) -> Self {
        self.with_raw(&message.to_raw())
    }

    /// Append a message given as raw text
    pub fn with_raw(mut self, raw: &str) -> Self {
        self.messages.push(raw.to_string());
        self
    }

    /// Render the archive, escaping body lines that look like separators
    pub fn to_mbox(&self) -> String {
        let mut out = String::new();
        for message in &self.messages {
            out.push_str(FROM_LINE);
            out.push('\n');
            for line in message.lines() {
                if line.starts_with("From ") {
                    out.push('>');
                }
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    /// Write the archive into `dir` under `name`
    pub fn write_to(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, self.to_mbox()).expect("Failed to write mbox file");
        path
    }

    /// Write the archive into a fresh temp dir as `Inbox`
    pub fn build(&self) -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = self.write_to(dir.path(), "Inbox");
        (dir, path)
    }
}

impl Default for MboxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for Firefox places.sqlite databases
pub struct PlacesDbBuilder {
    places: Vec<(i64, Option<String>, Option<String>, Option<i64>)>,
    visits: Vec<(i64, Option<i64>)>,
}

impl PlacesDbBuilder {
    pub fn new() -> Self {
        Self { places: Vec::new(), visits: Vec::new() }
    }

    /// Add a row to moz_places
    pub fn with_place(
        mut self,
        id: i64,
        url: Option<&str>,
        title: Option<&str>,
        visit_count: Option<i64>,
    ) -> Self {
        self.places.push((id, url.map(str::to_string), title.map(str::to_string), visit_count));
        self
    }

    /// Add a row to moz_historyvisits (visit_date in microseconds)
    pub fn with_visit(mut self, place_id: i64, visit_date: Option<i64>) -> Self {
        self.visits.push((place_id, visit_date));
        self
    }

    /// Create the database at `dir/places.sqlite`
    pub fn write_to(&self, dir: &Path) -> PathBuf {
        let path = dir.join("places.sqlite");
        let conn = Connection::open(&path).expect("Failed to create places db");

        // Subset of the Firefox schema, enough columns to look real
        conn.execute_batch(
            "CREATE TABLE moz_places (
                id INTEGER PRIMARY KEY,
                url LONGVARCHAR,
                title LONGVARCHAR,
                rev_host LONGVARCHAR,
                visit_count INTEGER DEFAULT 0,
                hidden INTEGER DEFAULT 0 NOT NULL,
                typed INTEGER DEFAULT 0 NOT NULL,
                frecency INTEGER DEFAULT -1 NOT NULL,
                last_visit_date INTEGER,
                guid TEXT
            );
            CREATE TABLE moz_historyvisits (
                id INTEGER PRIMARY KEY,
                from_visit INTEGER,
                place_id INTEGER,
                visit_date INTEGER,
                visit_type INTEGER,
                session INTEGER
            );",
        )
        .expect("Failed to create places schema");

        for (id, url, title, visit_count) in &self.places {
            conn.execute(
                "INSERT INTO moz_places (id, url, title, visit_count) VALUES (?1, ?2, ?3, ?4)",
                params![id, url, title, visit_count],
            )
            .expect("Failed to insert place");
        }
        for (place_id, visit_date) in &self.visits {
            conn.execute(
                "INSERT INTO moz_historyvisits (place_id, visit_date, visit_type) VALUES (?1, ?2, 1)",
                params![place_id, visit_date],
            )
            .expect("Failed to insert visit");
        }

        path
    }

    /// Create the database in a fresh temp dir
    pub fn build(&self) -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = self.write_to(dir.path());
        (dir, path)
    }
}

impl Default for PlacesDbBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 2021-01-01T00:00:00Z in microseconds since the epoch
pub const JAN_1_2021_MICROS: i64 = 1_609_459_200_000_000;

/// One hour in microseconds
pub const HOUR_MICROS: i64 = 3_600_000_000;
