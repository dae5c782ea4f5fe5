//! Employee listing and manual entry ("Input Data Baru")

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sikerja_common::records::EmployeeRecord;

use crate::db::{self, EmployeeRow};
use crate::error::{ApiError, ApiResult};
use crate::pagination::{calculate_pagination, PAGE_SIZE};
use crate::AppState;

/// Query parameters for the paginated listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

/// Paginated listing response
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub total_rows: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub rows: Vec<EmployeeRow>,
}

/// GET /api/employees?page=N
///
/// Stored evaluation records, newest first.
pub async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ListResponse>> {
    let total_rows = db::count_employees(&state.db).await?;
    let p = calculate_pagination(total_rows, query.page);

    let rows = db::fetch_employees_page(&state.db, PAGE_SIZE, p.offset).await?;

    Ok(Json(ListResponse {
        total_rows,
        page: p.page,
        page_size: PAGE_SIZE,
        total_pages: p.total_pages,
        rows,
    }))
}

/// POST /api/employees request: one manually entered evaluation
#[derive(Debug, Deserialize)]
pub struct CreateEmployeeRequest {
    #[serde(default)]
    pub nip: Option<String>,
    pub name: String,
    pub unit: String,
    pub nilai_p: f64,
    /// Integer competency rating in {1,2,3,4}
    pub nilai_k: f64,
}

/// POST /api/employees
///
/// Manual entry: buckets the scores (discrete competency variant, as the
/// input is a raw integer rating), assigns the cluster from the pre-trained
/// model, maps the bucket pair to a Nilai Kinerja label, and persists the
/// assembled record.
pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> ApiResult<Json<EmployeeRecord>> {
    if request.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Nama Pegawai harus diisi".to_string()));
    }
    if request.unit.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Bagian/Fakultas harus diisi".to_string(),
        ));
    }

    let record = EmployeeRecord::from_rating(
        request.nip.filter(|n| !n.trim().is_empty()),
        request.name.trim().to_string(),
        request.unit.trim().to_string(),
        request.nilai_p,
        request.nilai_k,
        &state.model,
    );

    db::insert_employee(&state.db, &record).await?;

    tracing::info!(
        name = %record.name,
        p_label = %record.p_label,
        k_label = %record.k_label,
        cluster = record.cluster,
        category = %record.category,
        "Employee record created"
    );

    Ok(Json(record))
}
