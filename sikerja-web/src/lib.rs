//! sikerja-web library - employee performance evaluation dashboard
//!
//! Single-user web service: manual score entry, batch CSV import, name
//! search, category distribution stats, and CSV export over the stored
//! evaluation dataset.

use axum::Router;
use sikerja_common::model::KMeansModel;
use sqlx::SqlitePool;
use std::sync::Arc;

pub mod api;
pub mod db;
pub mod error;
pub mod ingest;
pub mod pagination;

pub use error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Pre-trained cluster model, loaded once at startup and never reloaded
    pub model: Arc<KMeansModel>,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, model: KMeansModel) -> Self {
        Self {
            db,
            model: Arc::new(model),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        // UI routes
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        // API routes
        .route("/api/employees", get(api::list_employees).post(api::create_employee))
        .route("/api/score/preview", post(api::preview_score))
        .route("/api/search/by-name", get(api::search_by_name))
        .route("/api/import", post(api::import_csv))
        .route("/api/stats/categories", get(api::category_stats))
        .route("/api/export/csv", get(api::export_csv))
        .route("/api/reference", get(api::scoring_reference))
        .merge(api::health_routes())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}
