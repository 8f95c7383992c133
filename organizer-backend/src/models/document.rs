use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::non_empty;
use crate::error::ApiError;
use crate::relative_time::format_last_edited;

/// A stored document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: i64,
    pub title: String,
    pub subject: String,
    pub last_edited: NaiveDateTime,
}

/// Request body for `POST /api/documents`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateDocumentRequest {
    pub title: Option<String>,
    pub subject: Option<String>,
}

impl CreateDocumentRequest {
    /// Returns `(title, subject)` once both are present and non-blank.
    pub fn validate(&self) -> Result<(&str, &str), ApiError> {
        match (non_empty(&self.title), non_empty(&self.subject)) {
            (Some(title), Some(subject)) => Ok((title, subject)),
            _ => Err(ApiError::validation("Title and subject are required")),
        }
    }
}

/// Request body for `PUT /api/documents/{id}`; omitted fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDocumentRequest {
    pub title: Option<String>,
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub last_edited: String,
}

impl DocumentResponse {
    pub fn new(doc: Document, now: NaiveDateTime) -> Self {
        Self {
            id: doc.id.to_string(),
            last_edited: format_last_edited(doc.last_edited, now),
            title: doc.title,
            subject: doc.subject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_both_fields() {
        let ok = CreateDocumentRequest {
            title: Some(" Lab report ".to_string()),
            subject: Some("Physics".to_string()),
        };
        assert_eq!(ok.validate().unwrap(), ("Lab report", "Physics"));

        let missing = CreateDocumentRequest {
            title: Some("Lab report".to_string()),
            subject: None,
        };
        assert!(matches!(missing.validate(), Err(ApiError::Validation(_))));

        let blank = CreateDocumentRequest {
            title: Some("   ".to_string()),
            subject: Some("Physics".to_string()),
        };
        assert!(blank.validate().is_err());
    }
}
