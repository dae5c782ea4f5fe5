//! Batch CSV import ("Clustering" menu)

use axum::{extract::State, Json};
use serde::Serialize;
use sikerja_common::records::EmployeeRecord;

use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::ingest::{self, IngestError};
use crate::AppState;

/// POST /api/import response: drop accounting plus the imported records
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    /// Data rows seen in the file
    pub total_rows: usize,
    /// Rows that survived preprocessing and were persisted
    pub imported_rows: usize,
    /// Rows dropped for blank or unparseable values
    pub dropped_rows: usize,
    pub records: Vec<EmployeeRecord>,
}

/// POST /api/import
///
/// Body is the raw CSV text of the uploaded file. Each surviving row is
/// bucketed (interval competency variant, matching the batch path where K
/// values are rater averages), clustered with the pre-trained model,
/// categorized, and persisted. Dropped rows are counted, not fatal.
pub async fn import_csv(
    State(state): State<AppState>,
    body: String,
) -> ApiResult<Json<ImportResponse>> {
    let parsed = ingest::parse_csv(&body).map_err(|e| match e {
        IngestError::Empty => ApiError::BadRequest(e.to_string()),
        IngestError::MissingColumns(_) => ApiError::BadRequest(e.to_string()),
    })?;

    let mut records = Vec::with_capacity(parsed.rows.len());
    for row in parsed.rows {
        let record = EmployeeRecord::from_derived(
            Some(row.nip),
            row.name,
            row.unit,
            row.nilai_p,
            row.nilai_k,
            &state.model,
        );
        db::insert_employee(&state.db, &record).await?;
        records.push(record);
    }

    if parsed.dropped_rows > 0 {
        tracing::warn!(
            dropped = parsed.dropped_rows,
            total = parsed.total_rows,
            "Import dropped rows with missing values"
        );
    }
    tracing::info!(imported = records.len(), "Import batch persisted");

    Ok(Json(ImportResponse {
        total_rows: parsed.total_rows,
        imported_rows: records.len(),
        dropped_rows: parsed.dropped_rows,
        records,
    }))
}
