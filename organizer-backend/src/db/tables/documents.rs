//! Document database operations

use rusqlite::{params, OptionalExtension, Row};

use super::matches_query;
use crate::db::sqlite::{format_timestamp, get_timestamp, now_timestamp};
use crate::db::{Database, DbResult};
use crate::models::Document;

fn row_to_document(row: &Row) -> rusqlite::Result<Document> {
    Ok(Document {
        id: row.get("id")?,
        title: row.get("title")?,
        subject: row.get("subject")?,
        last_edited: get_timestamp(row, "last_edited")?,
    })
}

impl Database {
    /// List documents, most recently edited first, optionally filtered by
    /// a case-insensitive match on title or subject.
    pub fn list_documents(&self, search: Option<&str>) -> DbResult<Vec<Document>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, subject, last_edited FROM documents ORDER BY last_edited DESC, id DESC",
        )?;
        let documents = stmt
            .query_map([], row_to_document)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(match search.filter(|q| !q.is_empty()) {
            Some(query) => documents
                .into_iter()
                .filter(|doc| matches_query(query, &[doc.title.as_str(), doc.subject.as_str()]))
                .collect(),
            None => documents,
        })
    }

    pub fn create_document(&self, title: &str, subject: &str) -> DbResult<Document> {
        let conn = self.conn()?;
        let now = now_timestamp();

        conn.execute(
            "INSERT INTO documents (title, subject, last_edited) VALUES (?1, ?2, ?3)",
            params![title, subject, format_timestamp(now)],
        )?;

        Ok(Document {
            id: conn.last_insert_rowid(),
            title: title.to_string(),
            subject: subject.to_string(),
            last_edited: now,
        })
    }

    /// Update the given fields and refresh `last_edited`. Returns `None` if the id is unknown.
    pub fn update_document(
        &self,
        id: i64,
        title: Option<&str>,
        subject: Option<&str>,
    ) -> DbResult<Option<Document>> {
        let conn = self.conn()?;
        let doc = conn
            .query_row(
                "UPDATE documents
                 SET title = COALESCE(?1, title), subject = COALESCE(?2, subject), last_edited = ?3
                 WHERE id = ?4
                 RETURNING id, title, subject, last_edited",
                params![title, subject, format_timestamp(now_timestamp()), id],
                row_to_document,
            )
            .optional()?;
        Ok(doc)
    }

    /// Delete a document. Returns whether a row was removed.
    pub fn delete_document(&self, id: i64) -> DbResult<bool> {
        let conn = self.conn()?;
        let rows_affected = conn.execute("DELETE FROM documents WHERE id = ?1", [id])?;
        Ok(rows_affected > 0)
    }
}
