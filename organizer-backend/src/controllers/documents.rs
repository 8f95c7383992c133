use actix_web::{web, HttpResponse};

use super::SearchQuery;
use crate::db::sqlite::now_timestamp;
use crate::error::{ApiError, ApiResult};
use crate::models::{CreateDocumentRequest, DocumentResponse, UpdateDocumentRequest};
use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/documents")
            .route(web::get().to(list_documents))
            .route(web::post().to(create_document)),
    );
    cfg.service(
        web::resource("/api/documents/{id}")
            .route(web::put().to(update_document))
            .route(web::delete().to(delete_document)),
    );
}

async fn list_documents(
    data: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> ApiResult<HttpResponse> {
    let documents = data.db.list_documents(query.search.as_deref())?;
    let now = now_timestamp();
    let response: Vec<DocumentResponse> = documents
        .into_iter()
        .map(|doc| DocumentResponse::new(doc, now))
        .collect();
    Ok(HttpResponse::Ok().json(response))
}

async fn create_document(
    data: web::Data<AppState>,
    body: web::Json<CreateDocumentRequest>,
) -> ApiResult<HttpResponse> {
    let (title, subject) = body.validate()?;
    let doc = data.db.create_document(title, subject)?;
    log::info!("Created document {} ({})", doc.id, doc.title);
    Ok(HttpResponse::Created().json(DocumentResponse::new(doc, now_timestamp())))
}

async fn update_document(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateDocumentRequest>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let doc = data
        .db
        .update_document(id, body.title.as_deref(), body.subject.as_deref())?
        .ok_or_else(|| ApiError::not_found("Document not found"))?;
    Ok(HttpResponse::Ok().json(DocumentResponse::new(doc, now_timestamp())))
}

async fn delete_document(data: web::Data<AppState>, path: web::Path<i64>) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    if !data.db.delete_document(id)? {
        log::debug!("Delete of unknown document {}", id);
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Document deleted successfully"
    })))
}
