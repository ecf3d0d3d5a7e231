//! Per-example error metric.

/// Half sum of squared errors.
///
/// Returns `0.5 * sum((target - pred)^2)`. Unlike a mean, this is not divided by the
/// number of outputs.
///
/// Shape contract: `pred.len() == target.len()`.
#[inline]
pub fn half_sse(pred: &[f64], target: &[f64]) -> f64 {
    assert_eq!(
        pred.len(),
        target.len(),
        "pred len {} does not match target len {}",
        pred.len(),
        target.len()
    );

    let mut sum_sq = 0.0_f64;
    for (&p, &t) in pred.iter().zip(target) {
        let diff = t - p;
        sum_sq = diff.mul_add(diff, sum_sq);
    }
    0.5 * sum_sq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_sse_is_zero_when_equal() {
        let pred = [1.0_f64, -2.0, 0.5];
        assert_eq!(half_sse(&pred, &pred), 0.0);
        assert_eq!(half_sse(&[], &[]), 0.0);
    }

    #[test]
    fn half_sse_matches_hand_computed_value() {
        // 0.5 * ((2-1)^2 + (1-3)^2) = 2.5
        let loss = half_sse(&[1.0, 3.0], &[2.0, 1.0]);
        assert!((loss - 2.5).abs() < 1e-12);
    }
}
