//! Employee dataset queries for sikerja-web
//!
//! All writes go through [`insert_employee`]; reads are paginated listings,
//! name search, category distribution, and the export projection.

use serde::Serialize;
use sikerja_common::records::EmployeeRecord;
use sqlx::{FromRow, SqlitePool};

/// One stored employee row, as returned by listings and search
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EmployeeRow {
    pub guid: String,
    pub nip: Option<String>,
    pub name: String,
    pub unit: String,
    pub nilai_p: f64,
    pub p_label: String,
    pub p_num: i64,
    pub nilai_k: f64,
    pub k_label: String,
    pub k_num: Option<i64>,
    pub cluster: i64,
    pub category: String,
    pub created_at: String,
}

/// Projection used by the CSV export contract
#[derive(Debug, Clone, FromRow)]
pub struct ExportRow {
    pub nip: Option<String>,
    pub name: String,
    pub unit: String,
    pub cluster: i64,
    pub category: String,
}

/// Persist one assembled record
pub async fn insert_employee(pool: &SqlitePool, record: &EmployeeRecord) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO employees
            (guid, nip, name, unit, nilai_p, p_label, p_num,
             nilai_k, k_label, k_num, cluster, category, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(record.guid.to_string())
    .bind(&record.nip)
    .bind(&record.name)
    .bind(&record.unit)
    .bind(record.nilai_p)
    .bind(&record.p_label)
    .bind(i64::from(record.p_num))
    .bind(record.nilai_k)
    .bind(&record.k_label)
    .bind(record.k_num.map(i64::from))
    .bind(record.cluster)
    .bind(record.category.as_str())
    .bind(record.created_at.to_rfc3339())
    .execute(pool)
    .await?;

    Ok(())
}

/// Total number of stored records
pub async fn count_employees(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await
}

/// One page of records, newest first
pub async fn fetch_employees_page(
    pool: &SqlitePool,
    limit: i64,
    offset: i64,
) -> Result<Vec<EmployeeRow>, sqlx::Error> {
    sqlx::query_as::<_, EmployeeRow>(
        "SELECT guid, nip, name, unit, nilai_p, p_label, p_num,
                nilai_k, k_label, k_num, cluster, category, created_at
         FROM employees
         ORDER BY created_at DESC
         LIMIT ? OFFSET ?",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

/// Count of records whose name contains the pattern (case-insensitive)
pub async fn count_by_name(pool: &SqlitePool, name: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE name LIKE ?")
        .bind(like_pattern(name))
        .fetch_one(pool)
        .await
}

/// One page of records whose name contains the pattern
pub async fn search_by_name(
    pool: &SqlitePool,
    name: &str,
    limit: i64,
    offset: i64,
) -> Result<Vec<EmployeeRow>, sqlx::Error> {
    sqlx::query_as::<_, EmployeeRow>(
        "SELECT guid, nip, name, unit, nilai_p, p_label, p_num,
                nilai_k, k_label, k_num, cluster, category, created_at
         FROM employees
         WHERE name LIKE ?
         ORDER BY name ASC
         LIMIT ? OFFSET ?",
    )
    .bind(like_pattern(name))
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

/// Per-category record counts over the whole dataset
pub async fn category_counts(pool: &SqlitePool) -> Result<Vec<(String, i64)>, sqlx::Error> {
    sqlx::query_as::<_, (String, i64)>(
        "SELECT category, COUNT(*) FROM employees GROUP BY category",
    )
    .fetch_all(pool)
    .await
}

/// All rows in export order (insertion order via rowid)
pub async fn export_rows(pool: &SqlitePool) -> Result<Vec<ExportRow>, sqlx::Error> {
    sqlx::query_as::<_, ExportRow>(
        "SELECT nip, name, unit, cluster, category FROM employees ORDER BY rowid ASC",
    )
    .fetch_all(pool)
    .await
}

/// Substring LIKE pattern; SQLite LIKE is case-insensitive for ASCII
fn like_pattern(needle: &str) -> String {
    format!("%{}%", needle)
}
