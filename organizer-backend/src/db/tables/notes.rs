//! Note database operations

use rusqlite::{params, OptionalExtension, Row};

use super::matches_query;
use crate::db::sqlite::{format_timestamp, get_timestamp, now_timestamp};
use crate::db::{Database, DbResult};
use crate::models::{NewNote, Note, UpdateNoteRequest};

fn row_to_note(row: &Row) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        color: row.get("color")?,
        last_edited: get_timestamp(row, "last_edited")?,
    })
}

impl Database {
    /// List notes, most recently edited first, optionally filtered on title or content.
    pub fn list_notes(&self, search: Option<&str>) -> DbResult<Vec<Note>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, content, color, last_edited FROM notes ORDER BY last_edited DESC, id DESC",
        )?;
        let notes = stmt.query_map([], row_to_note)?.collect::<Result<Vec<_>, _>>()?;

        Ok(match search.filter(|q| !q.is_empty()) {
            Some(query) => notes
                .into_iter()
                .filter(|note| matches_query(query, &[note.title.as_str(), note.content.as_str()]))
                .collect(),
            None => notes,
        })
    }

    pub fn create_note(&self, note: &NewNote<'_>) -> DbResult<Note> {
        let conn = self.conn()?;
        let now = now_timestamp();

        conn.execute(
            "INSERT INTO notes (title, content, color, last_edited) VALUES (?1, ?2, ?3, ?4)",
            params![note.title, note.content, note.color, format_timestamp(now)],
        )?;

        Ok(Note {
            id: conn.last_insert_rowid(),
            title: note.title.to_string(),
            content: note.content.to_string(),
            color: note.color.to_string(),
            last_edited: now,
        })
    }

    /// Apply a partial update and refresh `last_edited`. Returns `None` if the id is unknown.
    pub fn update_note(&self, id: i64, changes: &UpdateNoteRequest) -> DbResult<Option<Note>> {
        let conn = self.conn()?;
        let note = conn
            .query_row(
                "UPDATE notes
                 SET title = COALESCE(?1, title), content = COALESCE(?2, content),
                     color = COALESCE(?3, color), last_edited = ?4
                 WHERE id = ?5
                 RETURNING id, title, content, color, last_edited",
                params![
                    changes.title,
                    changes.content,
                    changes.color,
                    format_timestamp(now_timestamp()),
                    id
                ],
                row_to_note,
            )
            .optional()?;
        Ok(note)
    }

    pub fn delete_note(&self, id: i64) -> DbResult<bool> {
        let conn = self.conn()?;
        let rows_affected = conn.execute("DELETE FROM notes WHERE id = ?1", [id])?;
        Ok(rows_affected > 0)
    }
}
