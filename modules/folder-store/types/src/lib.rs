//! Shared types for the folder store service and its clients.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

// =====================================================
// Stored State
// =====================================================

/// The whole persisted state: folders plus their documents.
///
/// Unknown top-level keys (the web client also keeps `events` here) are
/// carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FolderState {
    pub folders: Vec<Folder>,
    /// Folder id -> documents in that folder
    pub documents: BTreeMap<String, Vec<StoredDocument>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A document as the client stored it. Everything besides `id` and `title`
/// (editor HTML in `content`, `createdAt`, `updatedAt`, ...) stays raw JSON so
/// it is written back exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: String,
    pub title: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StoredDocument {
    /// The editor HTML, when the client stored it as a string.
    pub fn content(&self) -> Option<&str> {
        self.extra.get("content").and_then(Value::as_str)
    }
}

// =====================================================
// Request Types
// =====================================================

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

// =====================================================
// Response Types
// =====================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub folder_id: String,
    pub folder_name: String,
    pub document: StoredDocument,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchHit>,
    pub count: usize,
}

/// Placeholder export result; no file is produced.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub success: bool,
    pub message: String,
    pub document_id: String,
    pub download_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub running: bool,
    pub uptime_secs: u64,
    pub store_exists: bool,
    pub version: String,
}
