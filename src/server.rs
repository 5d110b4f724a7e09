use crate::config::Config;
use crate::dashboard::{DashboardController, Trigger};
use crate::view::Page;
use actix_web::http::header;
use actix_web::{web, App, HttpResponse, HttpServer};
use futures::future::join_all;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

pub struct AppState {
    pub page: Page,
    pub controller: Arc<DashboardController>,
}

async fn index(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(state.page.render())
}

async fn refresh(state: web::Data<AppState>) -> HttpResponse {
    let handles = state.controller.trigger(Trigger::RefreshButton);
    for result in join_all(handles).await {
        if let Err(e) = result {
            error!("Load task failed: {}", e);
        }
    }

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/refresh", web::post().to(refresh))
        .route("/health", web::get().to(health));
}

pub async fn run(config: &Config, state: web::Data<AppState>) -> std::io::Result<()> {
    let (host, port) = config.bind_addr();
    info!("Starting dashboard on http://{}:{}", host, port);
    info!("Upstream API: {}", config.api_base_url);

    HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind((host.as_str(), port))?
        .run()
        .await
}
