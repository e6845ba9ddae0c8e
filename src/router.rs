use axum::{
    Router,
    extract::DefaultBodyLimit,
    handler::HandlerWithoutStateExt,
    routing::{get, post},
};
use std::{path::PathBuf, sync::Arc};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::db::RecordStore;
use crate::handlers::{contact, pages, projects, skills, stats, upload};
use crate::service::notifier::ContactNotifier;
use crate::service::uploads::UPLOADS_URL_PREFIX;

/// Shared handler state. Cheap to clone; the store wraps a pool.
#[derive(Clone)]
pub struct PortfolioState {
    pub store: RecordStore,
    pub notifier: Arc<dyn ContactNotifier>,
    pub upload_dir: Arc<PathBuf>,
}

impl PortfolioState {
    pub fn new(
        store: RecordStore,
        notifier: Arc<dyn ContactNotifier>,
        upload_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            notifier,
            upload_dir: Arc::new(upload_dir.into()),
        }
    }
}

pub fn portfolio_router(state: PortfolioState, cfg: &Config) -> Router {
    let uploads = ServeDir::new(state.upload_dir.as_path())
        .not_found_service(pages::not_found.into_service());
    let assets =
        ServeDir::new(&cfg.static_dir).not_found_service(pages::not_found.into_service());

    Router::new()
        .route_service("/", ServeFile::new(cfg.static_dir.join("index.html")))
        .route_service("/admin", ServeFile::new(cfg.static_dir.join("admin.html")))
        .route(
            "/api/contact",
            get(contact::list_messages).post(contact::submit_message),
        )
        .route(
            "/api/projects",
            get(projects::list_projects).post(projects::add_project),
        )
        .route(
            "/api/skills",
            get(skills::list_skills).post(skills::add_skill),
        )
        .route("/api/stats", get(stats::get_stats))
        .route(
            "/api/upload",
            post(upload::upload_file).layer(DefaultBodyLimit::max(cfg.max_upload_bytes)),
        )
        .nest_service(UPLOADS_URL_PREFIX, uploads)
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
