//! Nilai Kinerja categorization: (P_num, K_num) -> qualitative label
//!
//! The lookup table below is the interval-cluster mapping. The coarser
//! "Metrik SDM" reference table shown in the UI is documentation only and
//! is intentionally never consulted here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative performance label ("Nilai Kinerja"), ordered best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Sangat Istimewa")]
    SangatIstimewa,
    #[serde(rename = "Istimewa")]
    Istimewa,
    #[serde(rename = "Baik Sekali")]
    BaikSekali,
    #[serde(rename = "Baik")]
    Baik,
    #[serde(rename = "Sedang")]
    Sedang,
    #[serde(rename = "Kurang")]
    Kurang,
}

impl Category {
    /// Display label as stored and exported
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SangatIstimewa => "Sangat Istimewa",
            Category::Istimewa => "Istimewa",
            Category::BaikSekali => "Baik Sekali",
            Category::Baik => "Baik",
            Category::Sedang => "Sedang",
            Category::Kurang => "Kurang",
        }
    }

    /// All labels, best to worst (stable ordering for stats display)
    pub fn all() -> [Category; 6] {
        [
            Category::SangatIstimewa,
            Category::Istimewa,
            Category::BaikSekali,
            Category::Baik,
            Category::Sedang,
            Category::Kurang,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a bucket pair to its Nilai Kinerja label.
///
/// Exact-match lookup in the interval-cluster table; any pair outside the
/// table — including an absent or invalid K bucket — resolves to `Kurang`.
/// Total function: never fails, never panics. Callers needing strict
/// validation must check bucket ranges before calling.
pub fn categorize(p_num: u8, k_num: Option<u8>) -> Category {
    let k = match k_num {
        Some(k) => k,
        None => return Category::Kurang,
    };

    match (p_num, k) {
        (1, 1) => Category::SangatIstimewa,
        (1, 2) => Category::Istimewa,
        (1, 3) => Category::Istimewa,
        (1, 4) => Category::Istimewa,

        (2, 1) => Category::SangatIstimewa,
        (2, 2) => Category::Baik,
        (2, 3) => Category::BaikSekali,
        (2, 4) => Category::BaikSekali,

        (3, 1) => Category::Baik,
        (3, 2) => Category::Baik,
        (3, 3) => Category::Baik,
        (3, 4) => Category::Baik,

        (4, 1) => Category::Baik,
        (4, 2) => Category::Baik,
        (4, 3) => Category::Sedang,
        (4, 4) => Category::Sedang,

        (5, 2) => Category::Sedang,
        (5, 3) => Category::Sedang,
        (5, 4) => Category::Kurang,

        // Anything unmapped (including (5,1)) defaults to the worst label
        _ => Category::Kurang,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_and_worst_corners() {
        assert_eq!(categorize(1, Some(1)), Category::SangatIstimewa);
        assert_eq!(categorize(5, Some(4)), Category::Kurang);
    }

    #[test]
    fn test_unmapped_pair_defaults_to_kurang() {
        // (5,1) is absent from the table
        assert_eq!(categorize(5, Some(1)), Category::Kurang);
        assert_eq!(categorize(9, Some(1)), Category::Kurang);
        assert_eq!(categorize(1, Some(9)), Category::Kurang);
    }

    #[test]
    fn test_absent_k_bucket_defaults_to_kurang() {
        for p in 1..=5u8 {
            assert_eq!(categorize(p, None), Category::Kurang);
        }
    }

    #[test]
    fn test_row_three_is_all_baik() {
        for k in 1..=4u8 {
            assert_eq!(categorize(3, Some(k)), Category::Baik);
        }
    }

    #[test]
    fn test_row_four_splits() {
        assert_eq!(categorize(4, Some(1)), Category::Baik);
        assert_eq!(categorize(4, Some(2)), Category::Baik);
        assert_eq!(categorize(4, Some(3)), Category::Sedang);
        assert_eq!(categorize(4, Some(4)), Category::Sedang);
    }

    #[test]
    fn test_row_two() {
        assert_eq!(categorize(2, Some(1)), Category::SangatIstimewa);
        assert_eq!(categorize(2, Some(2)), Category::Baik);
        assert_eq!(categorize(2, Some(3)), Category::BaikSekali);
        assert_eq!(categorize(2, Some(4)), Category::BaikSekali);
    }

    #[test]
    fn test_idempotent() {
        let a = categorize(2, Some(3));
        let b = categorize(2, Some(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Category::SangatIstimewa.to_string(), "Sangat Istimewa");
        assert_eq!(Category::BaikSekali.as_str(), "Baik Sekali");
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = serde_json::to_string(&Category::BaikSekali).unwrap();
        assert_eq!(json, "\"Baik Sekali\"");
        let back: Category = serde_json::from_str("\"Sangat Istimewa\"").unwrap();
        assert_eq!(back, Category::SangatIstimewa);
    }
}
