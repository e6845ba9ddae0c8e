//! Record store: three flat tables (messages, projects, skills) in SQLite.
//!
//! Layout:
//! - `models.rs`: row structs, the technologies codec and the stats snapshot
//! - `schema.rs`: SQL DDL run on every start
//! - `sqlite.rs`: `RecordStore`, the create/list/stats operations

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{ContactMessage, Project, Skill, Stats};
pub use schema::SQLITE_INIT;
pub use sqlite::{RecordStore, SqlitePool};
