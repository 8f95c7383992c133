use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::non_empty;
use crate::error::ApiError;
use crate::relative_time::format_last_edited;

pub const DEFAULT_NOTE_COLOR: &str = "#FFFFFF";

/// A sticky note
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub color: String,
    pub last_edited: NaiveDateTime,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub color: Option<String>,
}

/// Validated fields of a new note
#[derive(Debug, Clone, PartialEq)]
pub struct NewNote<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub color: &'a str,
}

impl CreateNoteRequest {
    pub fn validate(&self) -> Result<NewNote<'_>, ApiError> {
        match (non_empty(&self.title), non_empty(&self.content)) {
            (Some(title), Some(content)) => Ok(NewNote {
                title,
                content,
                color: non_empty(&self.color).unwrap_or(DEFAULT_NOTE_COLOR),
            }),
            _ => Err(ApiError::validation("Title and content are required")),
        }
    }
}

/// Partial update; omitted fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub color: String,
    pub last_edited: String,
}

impl NoteResponse {
    pub fn new(note: Note, now: NaiveDateTime) -> Self {
        Self {
            id: note.id.to_string(),
            last_edited: format_last_edited(note.last_edited, now),
            title: note.title,
            content: note.content,
            color: note.color,
        }
    }
}
