//! Organizer backend: documents, notes and calendar events over SQLite.

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod db;
mod error;
mod models;
mod relative_time;

use config::Config;
use db::Database;

pub struct AppState {
    pub db: Arc<Database>,
    pub config: Config,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("Organizer backend v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();

    log::info!("Opening database at {}", config.database_url);
    let db = match Database::open(&config.database_url) {
        Ok(db) => Arc::new(db),
        Err(e) => {
            log::error!("Failed to initialize database: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    let bind = (config.bind_address.clone(), config.port);
    log::info!("Listening on http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);
        let static_dir = config.static_dir.clone();

        App::new()
            .app_data(web::Data::new(AppState {
                db: Arc::clone(&db),
                config: config.clone(),
            }))
            .app_data(controllers::json_config())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config)
            .configure(controllers::documents::config)
            .configure(controllers::notes::config)
            .configure(controllers::events::config)
            .configure(move |cfg| controllers::pages::config(cfg, &static_dir))
    })
    .bind(bind)?
    .run()
    .await
}
