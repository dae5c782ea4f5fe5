//! CSV export of the evaluated dataset

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::db;
use crate::error::ApiResult;
use crate::ingest::csv_field;
use crate::AppState;

/// Export contract columns, in order
const EXPORT_HEADER: &str = "NIP,Nama,Unit,Cluster,Nilai Kinerja";

/// GET /api/export/csv
///
/// Downloads the evaluated dataset as `Hasil_Kelompokkan.csv` with the
/// fixed five-column contract.
pub async fn export_csv(State(state): State<AppState>) -> ApiResult<Response> {
    let rows = db::export_rows(&state.db).await?;

    let mut out = String::with_capacity(64 * (rows.len() + 1));
    out.push_str(EXPORT_HEADER);
    out.push('\n');
    for row in &rows {
        out.push_str(&csv_field(row.nip.as_deref().unwrap_or("")));
        out.push(',');
        out.push_str(&csv_field(&row.name));
        out.push(',');
        out.push_str(&csv_field(&row.unit));
        out.push(',');
        out.push_str(&row.cluster.to_string());
        out.push(',');
        out.push_str(&csv_field(&row.category));
        out.push('\n');
    }

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"Hasil_Kelompokkan.csv\"",
            ),
        ],
        out,
    )
        .into_response())
}
