pub mod documents;
pub mod events;
pub mod health;
pub mod notes;
pub mod pages;

use actix_web::web;
use serde::Deserialize;

use crate::error::ApiError;

/// `?search=` query string shared by the document and note listings
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

/// Report malformed or missing JSON bodies as validation errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::validation(format!("Invalid request body: {}", err)).into())
}
