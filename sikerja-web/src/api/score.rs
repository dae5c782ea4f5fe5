//! Score preview ("Mencari Nilai Performance dan Soft Kompetensi")
//!
//! Computes the raw P value from its assessment components and the raw K
//! value as the mode of the individual rater scores, then shows how both
//! would bucket. Nothing is persisted.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use sikerja_common::scoring::{
    bucket_competency_interval, bucket_performance, competency_label, competency_mode,
    performance_label, performance_value,
};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// POST /api/score/preview request
#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    /// Individual target score
    pub sasaran: f64,
    /// Total individual contribution
    pub kontribusi: f64,
    /// Deductions
    pub pengurangan: f64,
    /// One integer rating in {1,2,3,4} per rater
    pub ratings: Vec<u8>,
}

/// POST /api/score/preview response
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub nilai_p: f64,
    pub p_label: String,
    pub p_num: u8,
    pub nilai_k: f64,
    pub k_label: String,
    pub k_num: Option<u8>,
}

/// POST /api/score/preview
///
/// Pure calculation helper backing the manual-entry form; the derived K is
/// bucketed with the interval variant since it is an aggregated value.
pub async fn preview_score(
    State(_state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> ApiResult<Json<PreviewResponse>> {
    if request.ratings.is_empty() {
        return Err(ApiError::BadRequest(
            "Minimal satu nilai penilai diperlukan".to_string(),
        ));
    }
    if let Some(bad) = request.ratings.iter().find(|r| !(1..=4).contains(*r)) {
        return Err(ApiError::BadRequest(format!(
            "Nilai penilai harus 1-4, ditemukan {}",
            bad
        )));
    }

    let nilai_p = performance_value(request.sasaran, request.kontribusi, request.pengurangan);
    let p_num = bucket_performance(nilai_p);

    // competency_mode is total over validated input with at least one rating
    let nilai_k = competency_mode(&request.ratings)
        .map(f64::from)
        .ok_or_else(|| ApiError::Internal("rating aggregation failed".to_string()))?;
    let k_num = bucket_competency_interval(nilai_k);

    Ok(Json(PreviewResponse {
        nilai_p,
        p_label: performance_label(p_num),
        p_num,
        nilai_k,
        k_label: competency_label(k_num),
        k_num,
    }))
}
