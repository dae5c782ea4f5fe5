//! Employee search ("Cari Pegawai")

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::{self, EmployeeRow};
use crate::error::{ApiError, ApiResult};
use crate::pagination::{calculate_pagination, PAGE_SIZE};
use crate::AppState;

/// Query parameters for name search
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    /// Substring of the employee name (case-insensitive)
    pub name: String,

    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

/// Search response with results and metadata
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_results: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub rows: Vec<EmployeeRow>,
}

/// GET /api/search/by-name?name=...
///
/// Case-insensitive substring search over employee names, paginated.
pub async fn search_by_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> ApiResult<Json<SearchResponse>> {
    let needle = query.name.trim();
    if needle.is_empty() {
        return Err(ApiError::BadRequest("Empty search name".to_string()));
    }

    let total_results = db::count_by_name(&state.db, needle).await?;
    let p = calculate_pagination(total_results, query.page);

    let rows = db::search_by_name(&state.db, needle, PAGE_SIZE, p.offset).await?;

    Ok(Json(SearchResponse {
        query: needle.to_string(),
        total_results,
        page: p.page,
        page_size: PAGE_SIZE,
        total_pages: p.total_pages,
        rows,
    }))
}
