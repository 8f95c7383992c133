use actix_web::{web, HttpResponse};

use super::SearchQuery;
use crate::db::sqlite::now_timestamp;
use crate::error::{ApiError, ApiResult};
use crate::models::{CreateNoteRequest, NoteResponse, UpdateNoteRequest};
use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/notes")
            .route(web::get().to(list_notes))
            .route(web::post().to(create_note)),
    );
    cfg.service(
        web::resource("/api/notes/{id}")
            .route(web::put().to(update_note))
            .route(web::delete().to(delete_note)),
    );
}

async fn list_notes(
    data: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> ApiResult<HttpResponse> {
    let now = now_timestamp();
    let notes: Vec<NoteResponse> = data
        .db
        .list_notes(query.search.as_deref())?
        .into_iter()
        .map(|note| NoteResponse::new(note, now))
        .collect();
    Ok(HttpResponse::Ok().json(notes))
}

async fn create_note(
    data: web::Data<AppState>,
    body: web::Json<CreateNoteRequest>,
) -> ApiResult<HttpResponse> {
    let new_note = body.validate()?;
    let note = data.db.create_note(&new_note)?;
    log::info!("Created note {} ({})", note.id, note.title);
    Ok(HttpResponse::Created().json(NoteResponse::new(note, now_timestamp())))
}

async fn update_note(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateNoteRequest>,
) -> ApiResult<HttpResponse> {
    let note = data
        .db
        .update_note(path.into_inner(), &body)?
        .ok_or_else(|| ApiError::not_found("Note not found"))?;
    Ok(HttpResponse::Ok().json(NoteResponse::new(note, now_timestamp())))
}

async fn delete_note(data: web::Data<AppState>, path: web::Path<i64>) -> ApiResult<HttpResponse> {
    data.db.delete_note(path.into_inner())?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Note deleted successfully"
    })))
}
