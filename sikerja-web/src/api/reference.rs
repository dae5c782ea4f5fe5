//! Static scoring reference documentation
//!
//! Shown to the user after manual entry. The coarse "Metrik SDM" table here
//! is informational reference text only; the executable mapping lives in
//! `sikerja_common::category` and only uses the interval-cluster table.

use axum::Json;
use serde_json::{json, Value};

/// GET /api/reference
///
/// The HR metric reference: P/K thresholds and both category tables
/// (the coarse Metrik SDM one and the executable interval-cluster one).
pub async fn scoring_reference() -> Json<Value> {
    Json(json!({
        "performance": [
            "P1 (>= 101)",
            "P2 (91 - 100)",
            "P3 (81 - 90)",
            "P4 (71 - 80)",
            "P5 (<= 70)",
        ],
        "competency": ["K1", "K2", "K3", "K4"],
        "metrik_sdm": {
            "note": "Metrik Nilai Talenta awal dari pihak SDM (referensi, tidak dieksekusi)",
            "rules": [
                "P1 & K1 -> Sangat Istimewa",
                "P1 & K2 -> Istimewa",
                "P2 & K1 -> Baik Sekali",
                "P2 & K2-K3 -> Baik",
                "P3-P4 & K2-K3 -> Sedang",
                "P4-P5 & K3-K4 -> Kurang",
            ],
        },
        "interval_cluster": {
            "note": "Kombinasi P dan K berdasarkan interval klaster (dipakai oleh sistem)",
            "rules": [
                "P1 & K1 -> Sangat Istimewa",
                "P1 & K2 -> Istimewa",
                "P1 & K3 -> Istimewa",
                "P1 & K4 -> Istimewa",
                "P2 & K1 -> Sangat Istimewa",
                "P2 & K2 -> Baik",
                "P2 & K3 -> Baik Sekali",
                "P2 & K4 -> Baik Sekali",
                "P3 & K1-K4 -> Baik",
                "P4 & K1 -> Baik",
                "P4 & K2 -> Baik",
                "P4 & K3 -> Sedang",
                "P4 & K4 -> Sedang",
                "P5 & K2 -> Sedang",
                "P5 & K3 -> Sedang",
                "P5 & K4 -> Kurang",
                "lainnya -> Kurang",
            ],
        },
    }))
}
