//! Front-end pages, served as plain files from the static directory.

use actix_files::{Files, NamedFile};
use actix_web::{web, HttpResponse};

use crate::AppState;

/// URL path -> page file
const PAGES: &[(&str, &str)] = &[
    ("/", "index.html"),
    ("/documents", "documents.html"),
    ("/calendar", "calendar.html"),
    ("/notes", "notes.html"),
];

pub fn config(cfg: &mut web::ServiceConfig, static_dir: &std::path::Path) {
    for (path, _) in PAGES {
        cfg.service(web::resource(*path).route(web::get().to(serve_page)));
    }
    if static_dir.is_dir() {
        cfg.service(Files::new("/static", static_dir));
    } else {
        log::warn!("Static directory {:?} not found, pages will return 404", static_dir);
    }
}

async fn serve_page(state: web::Data<AppState>, req: actix_web::HttpRequest) -> actix_web::Result<HttpResponse> {
    let Some((_, file)) = PAGES.iter().find(|(path, _)| *path == req.path()) else {
        return Ok(HttpResponse::NotFound().finish());
    };

    let page = state.config.static_dir.join(file);
    match NamedFile::open_async(&page).await {
        Ok(named) => Ok(named.into_response(&req)),
        Err(e) => {
            log::warn!("Page {:?} unavailable: {}", page, e);
            Ok(HttpResponse::NotFound().json(serde_json::json!({
                "error": "Page not found"
            })))
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    use crate::controllers::test_support::test_state;

    #[actix_web::test]
    async fn test_serves_pages_from_static_dir() {
        let (_dir, state) = test_state();
        let static_dir = state.config.static_dir.clone();
        std::fs::create_dir_all(&static_dir).unwrap();
        std::fs::write(static_dir.join("notes.html"), "<h1>Notes</h1>").unwrap();

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(|cfg| super::config(cfg, &static_dir)),
        )
        .await;

        let req = test::TestRequest::get().uri("/notes").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(&body[..], b"<h1>Notes</h1>");

        let req = test::TestRequest::get().uri("/calendar").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
