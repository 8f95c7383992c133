//! Axum route handlers for the folder store API.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use folder_store_types::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tower_http::services::ServeDir;

use crate::error::ApiError;
use crate::search;
use crate::store::JsonStore;

pub struct AppState {
    pub store: JsonStore,
    pub start_time: Instant,
}

pub fn router(state: Arc<AppState>, static_dir: impl Into<PathBuf>) -> Router {
    Router::new()
        .route("/api/save", post(save))
        .route("/api/load", get(load))
        .route("/api/search", get(search_documents))
        .route("/api/export/:id", get(export))
        .route("/api/health", get(health))
        .fallback_service(ServeDir::new(static_dir.into()))
        .with_state(state)
}

// POST /api/save
pub async fn save(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<SaveResponse>), ApiError> {
    let folder_state: FolderState = serde_json::from_slice(&body)
        .map_err(|e| ApiError::Validation(format!("Invalid state: {}", e)))?;

    state.store.save(&folder_state).await?;
    log::info!(
        "Saved {} folders, {} documents",
        folder_state.folders.len(),
        folder_state.documents.values().map(Vec::len).sum::<usize>()
    );

    Ok((
        StatusCode::OK,
        Json(SaveResponse {
            success: true,
            message: "Data saved successfully".to_string(),
        }),
    ))
}

// GET /api/load
pub async fn load(State(state): State<Arc<AppState>>) -> Result<Json<FolderState>, ApiError> {
    Ok(Json(state.store.load().await?))
}

// GET /api/search?q=
pub async fn search_documents(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let q = query.q.unwrap_or_default();
    if q.trim().is_empty() {
        return Err(ApiError::Validation("Search query is required".to_string()));
    }

    let folder_state = state.store.load().await?;
    let results = search::search(&folder_state, &q);
    log::debug!("Search {:?} matched {} documents", q, results.len());

    Ok(Json(SearchResponse {
        count: results.len(),
        query: q,
        results,
    }))
}

// GET /api/export/{id}
//
// Stub: reports success and a download URL without generating anything.
pub async fn export(Path(id): Path<String>) -> Json<ExportResponse> {
    log::info!("Export requested for document {}", id);
    Json(ExportResponse {
        success: true,
        message: "PDF export simulated".to_string(),
        download_url: format!("/downloads/{}.pdf", id),
        document_id: id,
    })
}

// GET /api/health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<ServiceStatus> {
    Json(ServiceStatus {
        running: true,
        uptime_secs: state.start_time.elapsed().as_secs(),
        store_exists: state.store.exists().await,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
