use crate::error::ScoreError;
use crate::traversal::DistanceMap;

/// Influence score: `(reachable - 1) / total_distance`.
///
/// `reachable` counts the source itself, and the source's distance of 0 is
/// part of the total. A node that reaches many others over short paths
/// scores high.
///
/// Returns [`ScoreError::Undefined`] instead of NaN or infinity when the
/// total distance is zero (empty map, isolated source, zero-cost edges only)
/// or not finite.
pub fn influence_score(distances: &DistanceMap) -> Result<f64, ScoreError> {
    let reachable = distances.len();
    let total = distances.total_distance();

    if total == 0.0 || !total.is_finite() {
        return Err(ScoreError::Undefined { reachable });
    }

    Ok((reachable as f64 - 1.0) / total)
}

/// Round to two decimal places, midpoints to even.
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round_ties_even() / 100.0
}
