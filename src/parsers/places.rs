use std::path::Path;

use anyhow::{Context, Result, bail};
use rusqlite::{Connection, OpenFlags};

use crate::models::PlacesRow;
use crate::utils::validate_input_file;

const REQUIRED_TABLES: [&str; 2] = ["moz_places", "moz_historyvisits"];

const VISITS_QUERY: &str = "
    SELECT
        moz_places.url,
        moz_places.title,
        moz_places.visit_count,
        moz_historyvisits.visit_date
    FROM moz_places
    JOIN moz_historyvisits
        ON moz_places.id = moz_historyvisits.place_id
    WHERE moz_places.url NOT NULL
    ORDER BY moz_historyvisits.visit_date ASC
";

/// Read every visit from a Firefox `places.sqlite`, oldest first.
///
/// The database is opened read-only and closed before returning, on every path.
///
/// # Errors
///
/// Returns an error if:
/// - The path is missing or not a regular file
/// - The file is not a SQLite database
/// - `moz_places` or `moz_historyvisits` is missing
pub fn query_places(path: &Path) -> Result<Vec<PlacesRow>> {
    validate_input_file(path)?;

    // Read-only: a live Firefox profile must never be written to
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("Failed to open places database: {}", path.display()))?;

    verify_places_schema(&conn, path)?;

    read_visits(&conn).with_context(|| format!("Failed to query visits from {}", path.display()))
}

fn verify_places_schema(conn: &Connection, path: &Path) -> Result<()> {
    for table in REQUIRED_TABLES {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
                [table],
                |row| row.get(0),
            )
            .with_context(|| format!("Failed to read database schema: {}", path.display()))?;

        if !exists {
            bail!(
                "Unsupported schema: missing '{}' table, not a Firefox places database: {}",
                table,
                path.display()
            );
        }
    }

    Ok(())
}

fn read_visits(conn: &Connection) -> rusqlite::Result<Vec<PlacesRow>> {
    let mut stmt = conn.prepare(VISITS_QUERY)?;
    let rows = stmt.query_map([], |row| {
        Ok(PlacesRow {
            url: row.get(0)?,
            title: row.get(1)?,
            visit_count: row.get(2)?,
            visit_date: row.get(3)?,
        })
    })?;

    let visits = rows.collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(visits)
}
