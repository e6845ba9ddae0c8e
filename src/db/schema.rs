//! SQL DDL for the portfolio tables.

/// SQLite schema, safe to run against an existing database:
/// - every table uses `INTEGER PRIMARY KEY AUTOINCREMENT`, so ids never repeat
/// - `created_at` is RFC3339 text written by the store, not a column default
/// - `read_status` is stored as INTEGER 0/1
/// - `technologies` is the comma-joined sequence (see `models::encode_technologies`)
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS contact_messages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    subject TEXT NOT NULL,
    message TEXT NOT NULL,
    created_at TEXT NOT NULL,
    read_status INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    image_url TEXT,
    live_url TEXT,
    source_url TEXT,
    technologies TEXT,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS skills (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    category TEXT NOT NULL,
    proficiency INTEGER NOT NULL,
    created_at TEXT NOT NULL
);
"#;
