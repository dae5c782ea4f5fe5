//! P/K scoring: raw value computation and ordinal bucketing
//!
//! Two competency bucketing variants coexist on purpose and must not be
//! collapsed into one function:
//! - [`bucket_competency_rating`] treats the input as a manually entered
//!   integer rating (identity on {1,2,3,4}, sentinel 0 otherwise).
//! - [`bucket_competency_interval`] treats the input as a derived/averaged
//!   continuous value and maps half-open intervals to buckets.
//!
//! Conflating them silently changes categorization outcomes for non-integer
//! competency scores, so callers pick the variant matching their input.

/// Sentinel returned by [`bucket_competency_rating`] for out-of-range input
pub const COMPETENCY_INVALID: u8 = 0;

/// Display label for a competency value outside every interval
pub const COMPETENCY_NOT_CATEGORIZED: &str = "Tidak termasuk kategori";

/// Bucket a raw performance value into P1..P5 (returned as 1..=5).
///
/// Thresholds, checked in order (first match wins):
/// - p >= 101       -> 1
/// - 91 <= p <= 100 -> 2
/// - 81 <= p <= 90  -> 3
/// - 71 <= p <= 80  -> 4
/// - otherwise      -> 5
///
/// Total over the reals. Non-integer values between bands (e.g. 90.5) fall
/// through to the final branch and land in bucket 5; this mirrors the
/// branch ordering of the upstream scoring rules, where P values are whole
/// numbers in practice.
pub fn bucket_performance(nilai_p: f64) -> u8 {
    if nilai_p >= 101.0 {
        1
    } else if (91.0..=100.0).contains(&nilai_p) {
        2
    } else if (81.0..=90.0).contains(&nilai_p) {
        3
    } else if (71.0..=80.0).contains(&nilai_p) {
        4
    } else {
        5
    }
}

/// Bucket a manually entered competency rating (discrete variant).
///
/// Identity on the integral values {1,2,3,4}; anything else returns
/// [`COMPETENCY_INVALID`] (0). The caller decides whether to reject the
/// record or proceed; `categorize` treats an invalid bucket as unmapped
/// and falls back to its default label.
pub fn bucket_competency_rating(nilai_k: f64) -> u8 {
    if nilai_k == 1.0 || nilai_k == 2.0 || nilai_k == 3.0 || nilai_k == 4.0 {
        nilai_k as u8
    } else {
        COMPETENCY_INVALID
    }
}

/// Bucket a derived/averaged competency value (interval variant).
///
/// 1 <= k < 2 -> K1, 2 <= k < 3 -> K2, 3 <= k < 4 -> K3, 4 <= k <= 5 -> K4.
/// Values outside [1, 5] are not categorized and yield `None`.
pub fn bucket_competency_interval(nilai_k: f64) -> Option<u8> {
    if (1.0..2.0).contains(&nilai_k) {
        Some(1)
    } else if (2.0..3.0).contains(&nilai_k) {
        Some(2)
    } else if (3.0..4.0).contains(&nilai_k) {
        Some(3)
    } else if (4.0..=5.0).contains(&nilai_k) {
        Some(4)
    } else {
        None
    }
}

/// Raw performance value from its assessment components:
/// individual target score plus total contribution minus deductions.
pub fn performance_value(sasaran: f64, kontribusi: f64, pengurangan: f64) -> f64 {
    sasaran + kontribusi - pengurangan
}

/// Aggregate rater scores into a single competency rating.
///
/// The most frequent rating wins; when several ratings are equally
/// frequent the smallest one wins. Empty input yields `None`.
pub fn competency_mode(ratings: &[u8]) -> Option<u8> {
    let mut counts: [usize; 5] = [0; 5];
    for &r in ratings {
        if (1..=4).contains(&r) {
            counts[r as usize] += 1;
        }
    }

    let best = counts.iter().skip(1).max().copied().unwrap_or(0);
    if best == 0 {
        return None;
    }
    // Lowest rating wins ties
    (1u8..=4).find(|&r| counts[r as usize] == best)
}

/// Display label for a performance bucket ("P1".."P5")
pub fn performance_label(p_num: u8) -> String {
    format!("P{}", p_num)
}

/// Display label for a competency bucket ("K1".."K4", or the
/// not-categorized marker when the bucket is absent or invalid)
pub fn competency_label(k_num: Option<u8>) -> String {
    match k_num {
        Some(k) if (1..=4).contains(&k) => format!("K{}", k),
        _ => COMPETENCY_NOT_CATEGORIZED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_boundaries() {
        assert_eq!(bucket_performance(101.0), 1);
        assert_eq!(bucket_performance(100.0), 2);
        assert_eq!(bucket_performance(91.0), 2);
        assert_eq!(bucket_performance(90.0), 3);
        assert_eq!(bucket_performance(81.0), 3);
        assert_eq!(bucket_performance(80.0), 4);
        assert_eq!(bucket_performance(71.0), 4);
        assert_eq!(bucket_performance(70.0), 5);
    }

    #[test]
    fn test_performance_extremes() {
        assert_eq!(bucket_performance(110.0), 1);
        assert_eq!(bucket_performance(150.0), 1);
        assert_eq!(bucket_performance(0.0), 5);
        assert_eq!(bucket_performance(-3.0), 5);
    }

    #[test]
    fn test_performance_between_bands_falls_to_five() {
        // Non-integer gap values take the final branch
        assert_eq!(bucket_performance(90.5), 5);
        assert_eq!(bucket_performance(100.5), 5);
    }

    #[test]
    fn test_competency_rating_identity() {
        for k in 1..=4u8 {
            assert_eq!(bucket_competency_rating(f64::from(k)), k);
        }
    }

    #[test]
    fn test_competency_rating_invalid_sentinel() {
        assert_eq!(bucket_competency_rating(0.0), COMPETENCY_INVALID);
        assert_eq!(bucket_competency_rating(5.0), COMPETENCY_INVALID);
        assert_eq!(bucket_competency_rating(2.5), COMPETENCY_INVALID);
        assert_eq!(bucket_competency_rating(-1.0), COMPETENCY_INVALID);
    }

    #[test]
    fn test_competency_interval_mapping() {
        assert_eq!(bucket_competency_interval(1.0), Some(1));
        assert_eq!(bucket_competency_interval(1.999), Some(1));
        assert_eq!(bucket_competency_interval(2.0), Some(2));
        assert_eq!(bucket_competency_interval(3.999), Some(3));
        assert_eq!(bucket_competency_interval(4.0), Some(4));
        assert_eq!(bucket_competency_interval(5.0), Some(4));
    }

    #[test]
    fn test_competency_interval_out_of_range() {
        assert_eq!(bucket_competency_interval(0.5), None);
        assert_eq!(bucket_competency_interval(5.1), None);
        assert_eq!(bucket_competency_interval(-2.0), None);
    }

    #[test]
    fn test_performance_value_formula() {
        assert_eq!(performance_value(90.0, 15.0, 4.0), 101.0);
        assert_eq!(performance_value(80.0, 0.0, 10.0), 70.0);
    }

    #[test]
    fn test_competency_mode_unique() {
        assert_eq!(competency_mode(&[3, 3, 2, 3, 4]), Some(3));
    }

    #[test]
    fn test_competency_mode_tie_takes_smallest() {
        assert_eq!(competency_mode(&[2, 4, 4, 2]), Some(2));
        assert_eq!(competency_mode(&[1, 2, 3, 4]), Some(1));
    }

    #[test]
    fn test_competency_mode_empty() {
        assert_eq!(competency_mode(&[]), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(performance_label(1), "P1");
        assert_eq!(competency_label(Some(4)), "K4");
        assert_eq!(competency_label(None), COMPETENCY_NOT_CATEGORIZED);
        assert_eq!(competency_label(Some(0)), COMPETENCY_NOT_CATEGORIZED);
    }
}
