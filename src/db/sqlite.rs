use crate::db::models::{
    ContactMessage, Project, Skill, Stats, decode_technologies, encode_technologies,
    format_timestamp, parse_timestamp,
};
use crate::db::schema::SQLITE_INIT;
use crate::error::PortfolioError;
use crate::types::{NewMessage, NewProject, NewSkill};
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// `created_at` in the fixed-width form. Rows stamped by SQLite's
/// `CURRENT_TIMESTAMP` (`YYYY-MM-DD HH:MM:SS`, 19 chars) are widened so they
/// compare correctly against rows written by this store.
const SORTABLE_CREATED_AT: &str = "CASE WHEN length(created_at) = 19 \
    THEN replace(created_at, ' ', 'T') || '.000000Z' \
    ELSE created_at END";

/// Owns the messages, projects and skills tables.
///
/// Every operation borrows a pooled connection per statement and hands it back
/// before returning, including on error. Nothing else is cached in-process.
#[derive(Clone)]
pub struct RecordStore {
    pool: SqlitePool,
}

impl RecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url` and ensure
    /// the schema exists.
    pub async fn connect(database_url: &str) -> Result<Self, PortfolioError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL. Idempotent.
    pub async fn init_schema(&self) -> Result<(), PortfolioError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Validate and store a contact message. Returns the new row id.
    pub async fn insert_message(&self, msg: &NewMessage) -> Result<i64, PortfolioError> {
        msg.validate()?;
        let now = format_timestamp(&Utc::now());
        let sql = format!(
            "INSERT INTO contact_messages (name, email, subject, message, created_at, read_status)
             VALUES (?, ?, ?, ?, {}, 0)",
            clamped_now("contact_messages")
        );
        let id = sqlx::query(&sql)
            .bind(&msg.name)
            .bind(&msg.email)
            .bind(&msg.subject)
            .bind(&msg.message)
            .bind(now)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();
        debug!(id, "stored contact message");
        Ok(id)
    }

    /// Newest first; equal timestamps fall back to id.
    pub async fn list_messages(&self) -> Result<Vec<ContactMessage>, PortfolioError> {
        let sql = format!(
            "SELECT id, name, email, subject, message, created_at, read_status
             FROM contact_messages ORDER BY {SORTABLE_CREATED_AT} DESC, id DESC"
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        debug!(count = rows.len(), "listed contact messages");
        rows.into_iter().map(Self::row_to_message).collect()
    }

    /// Validate and store a project. Absent URLs are stored as empty strings.
    pub async fn insert_project(&self, project: &NewProject) -> Result<i64, PortfolioError> {
        project.validate()?;
        let technologies = encode_technologies(project.technologies.as_deref().unwrap_or(&[]));
        let now = format_timestamp(&Utc::now());
        let sql = format!(
            "INSERT INTO projects (
                title, description, image_url, live_url, source_url, technologies, created_at
             ) VALUES (?, ?, ?, ?, ?, ?, {})",
            clamped_now("projects")
        );
        let id = sqlx::query(&sql)
            .bind(&project.title)
            .bind(&project.description)
            .bind(project.image_url.as_deref().unwrap_or(""))
            .bind(project.live_url.as_deref().unwrap_or(""))
            .bind(project.source_url.as_deref().unwrap_or(""))
            .bind(technologies)
            .bind(now)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();
        debug!(id, "stored project");
        Ok(id)
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, PortfolioError> {
        let sql = format!(
            "SELECT id, title, description, image_url, live_url, source_url,
             technologies, created_at
             FROM projects ORDER BY {SORTABLE_CREATED_AT} DESC, id DESC"
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        debug!(count = rows.len(), "listed projects");
        rows.into_iter().map(Self::row_to_project).collect()
    }

    /// Validate and store a skill. A proficiency of 0 is rejected as missing.
    pub async fn insert_skill(&self, skill: &NewSkill) -> Result<i64, PortfolioError> {
        skill.validate()?;
        let now = format_timestamp(&Utc::now());
        let sql = format!(
            "INSERT INTO skills (name, category, proficiency, created_at)
             VALUES (?, ?, ?, {})",
            clamped_now("skills")
        );
        let id = sqlx::query(&sql)
            .bind(&skill.name)
            .bind(&skill.category)
            .bind(skill.proficiency)
            .bind(now)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();
        debug!(id, "stored skill");
        Ok(id)
    }

    /// Grouped by category, strongest first within each group.
    pub async fn list_skills(&self) -> Result<Vec<Skill>, PortfolioError> {
        let rows = sqlx::query(
            r#"SELECT id, name, category, proficiency, created_at
               FROM skills ORDER BY category ASC, proficiency DESC, id ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        debug!(count = rows.len(), "listed skills");
        rows.into_iter().map(Self::row_to_skill).collect()
    }

    pub async fn stats(&self) -> Result<Stats, PortfolioError> {
        let total_messages = self.count("SELECT COUNT(*) FROM contact_messages").await?;
        let unread_messages = self
            .count("SELECT COUNT(*) FROM contact_messages WHERE read_status = 0")
            .await?;
        let total_projects = self.count("SELECT COUNT(*) FROM projects").await?;
        let total_skills = self.count("SELECT COUNT(*) FROM skills").await?;
        Ok(Stats {
            total_messages,
            unread_messages,
            total_projects,
            total_skills,
        })
    }

    async fn count(&self, sql: &'static str) -> Result<i64, PortfolioError> {
        let n: i64 = sqlx::query_scalar(sql).fetch_one(&self.pool).await?;
        Ok(n)
    }

    fn row_to_message(row: SqliteRow) -> Result<ContactMessage, PortfolioError> {
        let created_at: String = row.try_get("created_at")?;
        let read_status: i64 = row.try_get("read_status")?;
        Ok(ContactMessage {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            subject: row.try_get("subject")?,
            message: row.try_get("message")?,
            created_at: Self::decode_created_at(&created_at)?,
            read_status: read_status != 0,
        })
    }

    fn row_to_project(row: SqliteRow) -> Result<Project, PortfolioError> {
        let technologies: Option<String> = row.try_get("technologies")?;
        let created_at: String = row.try_get("created_at")?;
        Ok(Project {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            image_url: row.try_get("image_url")?,
            live_url: row.try_get("live_url")?,
            source_url: row.try_get("source_url")?,
            technologies: decode_technologies(technologies.as_deref()),
            created_at: Self::decode_created_at(&created_at)?,
        })
    }

    fn row_to_skill(row: SqliteRow) -> Result<Skill, PortfolioError> {
        let created_at: String = row.try_get("created_at")?;
        Ok(Skill {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            category: row.try_get("category")?,
            proficiency: row.try_get("proficiency")?,
            created_at: Self::decode_created_at(&created_at)?,
        })
    }

    fn decode_created_at(stored: &str) -> Result<chrono::DateTime<Utc>, PortfolioError> {
        parse_timestamp(stored).map_err(|e| sqlx::Error::Decode(Box::new(e)).into())
    }
}

/// Bound `created_at` value that never goes below the newest stored row.
fn clamped_now(table: &str) -> String {
    format!("MAX(?, COALESCE((SELECT MAX({SORTABLE_CREATED_AT}) FROM {table}), ''))")
}
