//! HTTP API handlers for sikerja-web

pub mod employees;
pub mod export;
pub mod health;
pub mod import;
pub mod reference;
pub mod score;
pub mod search;
pub mod stats;
pub mod ui;

pub use employees::{create_employee, list_employees};
pub use export::export_csv;
pub use health::health_routes;
pub use import::import_csv;
pub use reference::scoring_reference;
pub use score::preview_score;
pub use search::search_by_name;
pub use stats::category_stats;
pub use ui::{serve_app_js, serve_index};
