//! Category distribution stats ("Visualisasi Data" data source)

use axum::{extract::State, Json};
use serde::Serialize;
use sikerja_common::Category;

use crate::db;
use crate::error::ApiResult;
use crate::AppState;

/// One category's slice of the dataset
#[derive(Debug, Serialize)]
pub struct CategorySlice {
    pub category: String,
    pub count: i64,
    pub percent: f64,
}

/// GET /api/stats/categories response
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total: i64,
    /// Slices in fixed best-to-worst label order; absent categories count 0
    pub categories: Vec<CategorySlice>,
}

/// GET /api/stats/categories
///
/// Per-category counts and percentages over the stored dataset. Chart
/// rendering happens client-side.
pub async fn category_stats(State(state): State<AppState>) -> ApiResult<Json<StatsResponse>> {
    let counts = db::category_counts(&state.db).await?;
    let total: i64 = counts.iter().map(|(_, n)| n).sum();

    let categories = Category::all()
        .iter()
        .map(|cat| {
            let count = counts
                .iter()
                .find(|(name, _)| name == cat.as_str())
                .map(|(_, n)| *n)
                .unwrap_or(0);
            let percent = if total > 0 {
                count as f64 * 100.0 / total as f64
            } else {
                0.0
            };
            CategorySlice {
                category: cat.as_str().to_string(),
                count,
                percent,
            }
        })
        .collect();

    Ok(Json(StatsResponse { total, categories }))
}
