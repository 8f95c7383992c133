//! SQLite connection pool, schema and first-run seeding.

use chrono::{Local, NaiveDateTime, SubsecRound};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rusqlite::types::Type;
use rusqlite::{params, Row};
use std::path::Path;
use std::time::Duration;

use super::seed;
use crate::models::TIMESTAMP_FORMAT;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("connection pool: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type DbResult<T> = Result<T, DbError>;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS documents (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    subject TEXT NOT NULL,
    last_edited TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    color TEXT NOT NULL DEFAULT '#FFFFFF',
    last_edited TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS events (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    date TEXT NOT NULL,
    time TEXT NOT NULL,
    type TEXT NOT NULL
);
";

/// Handle to the organizer database. Cheap to share behind an `Arc`.
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Open (or create) the database file. A file that did not exist yet is
    /// seeded with example documents, notes and a month of random events.
    pub fn open(path: &str) -> DbResult<Self> {
        Self::open_with_rng(path, &mut StdRng::from_entropy())
    }

    /// Same as [`Database::open`] with a caller-supplied random source for the seed events.
    pub fn open_with_rng<R: Rng + ?Sized>(path: &str, rng: &mut R) -> DbResult<Self> {
        let db_path = Path::new(path);
        let fresh = !db_path.exists();

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let manager = SqliteConnectionManager::file(db_path)
            .with_init(|conn| conn.busy_timeout(Duration::from_secs(5)));
        let pool = Pool::builder().max_size(8).build(manager)?;

        let db = Self { pool };
        db.conn()?.execute_batch(SCHEMA)?;

        if fresh {
            log::info!("Initializing database at {}", path);
            db.seed(rng, now_timestamp())?;
            log::info!("Database initialized");
        }

        Ok(db)
    }

    /// Check out a pooled connection; it returns to the pool when dropped.
    pub fn conn(&self) -> DbResult<DbConn> {
        Ok(self.pool.get()?)
    }

    /// Insert the example rows in a single transaction.
    fn seed<R: Rng + ?Sized>(&self, rng: &mut R, now: NaiveDateTime) -> DbResult<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        for doc in seed::DOCUMENTS {
            tx.execute(
                "INSERT INTO documents (title, subject, last_edited) VALUES (?1, ?2, ?3)",
                params![doc.title, doc.subject, format_timestamp(now - chrono::Duration::days(doc.days_ago))],
            )?;
        }

        for note in seed::NOTES {
            tx.execute(
                "INSERT INTO notes (title, content, color, last_edited) VALUES (?1, ?2, ?3, ?4)",
                params![
                    note.title,
                    note.content,
                    note.color,
                    format_timestamp(now - chrono::Duration::days(note.days_ago))
                ],
            )?;
        }

        let events = seed::random_events(rng, now.date());
        for event in &events {
            let event_type: &str = event.event_type.as_ref();
            tx.execute(
                "INSERT INTO events (title, date, time, type) VALUES (?1, ?2, ?3, ?4)",
                params![event.title, event.date, event.time, event_type],
            )?;
        }

        tx.commit()?;
        log::info!(
            "Seeded {} documents, {} notes, {} events",
            seed::DOCUMENTS.len(),
            seed::NOTES.len(),
            events.len()
        );
        Ok(())
    }
}

/// Current local time truncated to whole seconds, matching the stored precision.
pub fn now_timestamp() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Read a stored timestamp column by name.
pub(crate) fn get_timestamp(row: &Row, column: &str) -> rusqlite::Result<NaiveDateTime> {
    let raw: String = row.get(column)?;
    NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(|e| {
        let stmt: &rusqlite::Statement<'_> = row.as_ref();
        let idx = stmt.column_index(column).unwrap_or(0);
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn count(db: &Database, table: &str) -> i64 {
        db.conn()
            .unwrap()
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn test_fresh_database_is_seeded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("organizer.db");
        let mut rng = StdRng::seed_from_u64(7);

        let db = Database::open_with_rng(path.to_str().unwrap(), &mut rng).expect("open");
        assert_eq!(count(&db, "documents"), 5);
        assert_eq!(count(&db, "notes"), 4);
        assert!(count(&db, "events") <= 90);
    }

    #[test]
    fn test_existing_database_is_not_reseeded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("organizer.db");
        let path = path.to_str().unwrap();

        {
            let db = Database::open(path).expect("open");
            db.conn().unwrap().execute("DELETE FROM documents", []).unwrap();
        }

        let db = Database::open(path).expect("reopen");
        assert_eq!(count(&db, "documents"), 0);
        assert_eq!(count(&db, "notes"), 4);
    }

    #[test]
    fn test_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".db").join("organizer.db");
        Database::open(path.to_str().unwrap()).expect("open");
        assert!(path.exists());
    }

    #[test]
    fn test_timestamp_format_round_trip() {
        let now = now_timestamp();
        let text = format_timestamp(now);
        assert_eq!(NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT).unwrap(), now);
    }
}
