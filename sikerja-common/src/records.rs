//! Employee record assembly
//!
//! Combines scorer output (bucket pair), the externally computed cluster id,
//! and the categorizer's label with identity fields into the record the
//! dashboard stores, displays, and exports.

use crate::category::{categorize, Category};
use crate::model::KMeansModel;
use crate::scoring::{
    bucket_competency_interval, bucket_competency_rating, bucket_performance, competency_label,
    performance_label, COMPETENCY_INVALID,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One evaluated employee, as persisted and returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeRecord {
    pub guid: Uuid,
    /// Employee number; absent for manual entries without one
    pub nip: Option<String>,
    pub name: String,
    pub unit: String,
    pub nilai_p: f64,
    /// Display label "P1".."P5"
    pub p_label: String,
    pub p_num: u8,
    pub nilai_k: f64,
    /// Display label "K1".."K4" or the not-categorized marker
    pub k_label: String,
    pub k_num: Option<u8>,
    /// Cluster id from the pre-trained K-Means model (opaque)
    pub cluster: i64,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

impl EmployeeRecord {
    /// Assemble a record from a manually entered integer competency rating
    /// (discrete bucketing variant).
    pub fn from_rating(
        nip: Option<String>,
        name: String,
        unit: String,
        nilai_p: f64,
        nilai_k: f64,
        model: &KMeansModel,
    ) -> EmployeeRecord {
        let k = bucket_competency_rating(nilai_k);
        let k_num = if k == COMPETENCY_INVALID { None } else { Some(k) };
        Self::assemble(nip, name, unit, nilai_p, nilai_k, k_num, model)
    }

    /// Assemble a record from a derived/averaged competency value
    /// (interval bucketing variant), as used by batch import.
    pub fn from_derived(
        nip: Option<String>,
        name: String,
        unit: String,
        nilai_p: f64,
        nilai_k: f64,
        model: &KMeansModel,
    ) -> EmployeeRecord {
        let k_num = bucket_competency_interval(nilai_k);
        Self::assemble(nip, name, unit, nilai_p, nilai_k, k_num, model)
    }

    fn assemble(
        nip: Option<String>,
        name: String,
        unit: String,
        nilai_p: f64,
        nilai_k: f64,
        k_num: Option<u8>,
        model: &KMeansModel,
    ) -> EmployeeRecord {
        let p_num = bucket_performance(nilai_p);
        // An uncategorized K contributes the sentinel coordinate 0
        let cluster = model.predict(f64::from(p_num), k_num.map(f64::from).unwrap_or(0.0));
        let category = categorize(p_num, k_num);

        EmployeeRecord {
            guid: Uuid::new_v4(),
            nip,
            name,
            unit,
            nilai_p,
            p_label: performance_label(p_num),
            p_num,
            nilai_k,
            k_label: competency_label(k_num),
            k_num,
            cluster,
            category,
            created_at: Utc::now(),
        }
    }
}
