use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

const TECHNOLOGY_DELIMITER: &str = ",";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read_status: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub live_url: Option<String>,
    pub source_url: Option<String>,
    pub technologies: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub proficiency: i64,
    pub created_at: DateTime<Utc>,
}

/// Point-in-time counts. The four numbers come from separate queries and are
/// not a consistent snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Stats {
    pub total_messages: i64,
    pub unread_messages: i64,
    pub total_projects: i64,
    pub total_skills: i64,
}

/// Join technologies for the `projects.technologies` column.
///
/// The delimiter is not escaped: a value containing a comma splits into
/// several entries when read back.
pub fn encode_technologies(technologies: &[String]) -> String {
    technologies.join(TECHNOLOGY_DELIMITER)
}

/// Inverse of [`encode_technologies`]. NULL and empty both decode to `[]`.
pub fn decode_technologies(stored: Option<&str>) -> Vec<String> {
    match stored {
        Some(s) if !s.is_empty() => s.split(TECHNOLOGY_DELIMITER).map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// Fixed-width RFC3339 (microseconds, `Z`), so text order is time order.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored `created_at`. Rows written by SQLite's `CURRENT_TIMESTAMP`
/// (`YYYY-MM-DD HH:MM:SS`) are accepted as UTC.
pub fn parse_timestamp(stored: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(stored) {
        Ok(ts) => Ok(ts.with_timezone(&Utc)),
        Err(_) => NaiveDateTime::parse_from_str(stored, "%Y-%m-%d %H:%M:%S")
            .map(|naive| naive.and_utc()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn techs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn technologies_keep_order() {
        let stored = encode_technologies(&techs(&["Rust", "SQL", "Go"]));
        assert_eq!(stored, "Rust,SQL,Go");
        assert_eq!(decode_technologies(Some(&stored)), techs(&["Rust", "SQL", "Go"]));
    }

    #[test]
    fn empty_technologies_decode_to_empty_vec() {
        assert_eq!(encode_technologies(&[]), "");
        assert!(decode_technologies(Some("")).is_empty());
        assert!(decode_technologies(None).is_empty());
    }

    #[test]
    fn embedded_comma_splits_on_read() {
        // Known limitation of the unescaped encoding.
        let stored = encode_technologies(&techs(&["a,b"]));
        assert_eq!(decode_technologies(Some(&stored)), techs(&["a", "b"]));
    }

    #[test]
    fn timestamps_are_fixed_width() {
        let whole = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let formatted = format_timestamp(&whole);
        assert_eq!(formatted, "2026-01-02T03:04:05.000000Z");
        assert_eq!(parse_timestamp(&formatted).unwrap(), whole);
    }

    #[test]
    fn legacy_sqlite_timestamps_parse() {
        let ts = parse_timestamp("2024-05-06 07:08:09").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap());
    }
}
