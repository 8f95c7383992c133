use actix_web::{web, HttpResponse};

use crate::error::{ApiError, ApiResult};
use crate::models::{CreateEventRequest, EventResponse, EventsQuery, UpdateEventRequest};
use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/events")
            .route(web::get().to(list_events))
            .route(web::post().to(create_event)),
    );
    cfg.service(
        web::resource("/api/events/{id}")
            .route(web::put().to(update_event))
            .route(web::delete().to(delete_event)),
    );
}

/// `?month=YYYY-MM` lists a month, `?month=YYYY-MM&day=DD` a single day.
async fn list_events(
    data: web::Data<AppState>,
    query: web::Query<EventsQuery>,
) -> ApiResult<HttpResponse> {
    let events: Vec<EventResponse> = data
        .db
        .list_events(&query.filter())?
        .into_iter()
        .map(EventResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(events))
}

async fn create_event(
    data: web::Data<AppState>,
    body: web::Json<CreateEventRequest>,
) -> ApiResult<HttpResponse> {
    let new_event = body.validate()?;
    let event = data.db.create_event(&new_event)?;
    log::info!("Created {} event {} on {}", event.event_type, event.id, event.date);
    Ok(HttpResponse::Created().json(EventResponse::from(event)))
}

async fn update_event(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateEventRequest>,
) -> ApiResult<HttpResponse> {
    let changes = body.validate()?;
    let event = data
        .db
        .update_event(path.into_inner(), &changes)?
        .ok_or_else(|| ApiError::not_found("Event not found"))?;
    Ok(HttpResponse::Ok().json(EventResponse::from(event)))
}

async fn delete_event(data: web::Data<AppState>, path: web::Path<i64>) -> ApiResult<HttpResponse> {
    data.db.delete_event(path.into_inner())?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Event deleted successfully"
    })))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use crate::controllers::test_support::test_state;

    #[actix_web::test]
    async fn test_event_endpoints() {
        let (_dir, state) = test_state();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .app_data(crate::controllers::json_config())
                .configure(super::config),
        )
        .await;

        for (date, time) in [("2024-05-20", "10:00"), ("2024-05-02", "14:30"), ("2024-06-01", "08:00")] {
            let req = test::TestRequest::post()
                .uri("/api/events")
                .set_json(json!({ "title": "Class", "date": date, "time": time, "type": "class" }))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get().uri("/api/events?month=2024-05").to_request();
        let may: Value = test::call_and_read_body_json(&app, req).await;
        let dates: Vec<&str> = may
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["date"].as_str().unwrap())
            .collect();
        assert_eq!(dates, vec!["2024-05-02", "2024-05-20"]);

        let req = test::TestRequest::get().uri("/api/events?month=2024-05&day=2").to_request();
        let day: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(day.as_array().unwrap().len(), 1);
        assert_eq!(day[0]["time"], "14:30");
        assert_eq!(day[0]["type"], "class");

        let id = day[0]["id"].as_str().unwrap().to_string();
        let req = test::TestRequest::put()
            .uri(&format!("/api/events/{}", id))
            .set_json(json!({ "type": "holiday" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::put()
            .uri("/api/events/9999")
            .set_json(json!({ "title": "Ghost" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_create_requires_all_fields() {
        let (_dir, state) = test_state();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .app_data(crate::controllers::json_config())
                .configure(super::config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/events")
            .set_json(json!({ "title": "Exam", "date": "2024-05-02", "type": "exam" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
