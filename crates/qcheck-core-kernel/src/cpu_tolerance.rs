// Absolute-tolerance equality over f64 pairs.
// |u - c| <= eps is a match, equality at the boundary included.
// NaN never matches. An infinity only matches the same infinity.

/// Absolute difference of one candidate/reference pair.
#[inline(always)]
pub fn abs_diff_f64(u: f64, c: f64) -> f64 {
    (u - c).abs()
}

/// Single pair test.
///
/// Decimal inputs like `1.05` are not exact in binary, so the boundary
/// absorbs one epsilon of rounding scaled by the larger operand. The slack
/// never exceeds `eps` itself, so `eps = 0` means exact equality.
#[inline(always)]
pub fn within_tolerance(u: f64, c: f64, eps: f64) -> bool {
    if u == c {
        return true;
    }
    if !u.is_finite() || !c.is_finite() {
        return false;
    }

    let slack = (f64::EPSILON * u.abs().max(c.abs())).min(eps);
    abs_diff_f64(u, c) <= eps + slack
}

/// Scans both slices left to right and returns the first index that is
/// out of tolerance, or `None` when every pair matches.
pub fn first_mismatch_f64(a: &[f64], b: &[f64], eps: f64) -> anyhow::Result<Option<usize>> {
    if a.len() != b.len() {
        anyhow::bail!(
            "[kernel][tolerance] length mismatch: {} vs {}",
            a.len(),
            b.len()
        );
    }

    Ok(a
        .iter()
        .zip(b.iter())
        .position(|(&u, &c)| !within_tolerance(u, c, eps)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_values_match_with_zero_eps() {
        assert!(within_tolerance(2.0, 2.0, 0.0));
        assert!(!within_tolerance(2.0, 2.5, 0.0));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        // 1.05 - 1.00 is a hair above 0.05 in binary
        assert!(within_tolerance(1.05, 1.00, 0.05));
        assert!(within_tolerance(1.00, 1.05, 0.05));
        assert!(within_tolerance(0.5, 0.25, 0.25));
    }

    #[test]
    fn test_zero_eps_rejects_neighbouring_floats() {
        assert!(!within_tolerance(1.0, 1.0 + f64::EPSILON, 0.0));
        assert!(!within_tolerance(1e16, 1e16 + 2.0, 0.0));
        // slack is capped by eps, not by operand magnitude
        assert!(!within_tolerance(1e16, 1e16 + 2.0, 1e-300));
    }

    #[test]
    fn test_outside_tolerance() {
        assert!(!within_tolerance(2.1, 2.0, 0.05));
        assert!(!within_tolerance(-1.0, 1.0, 1.999));
    }

    #[test]
    fn test_non_finite_values() {
        assert!(!within_tolerance(f64::NAN, f64::NAN, 1.0));
        assert!(!within_tolerance(f64::NAN, 1.0, f64::INFINITY));
        assert!(within_tolerance(f64::INFINITY, f64::INFINITY, 0.0));
        assert!(!within_tolerance(f64::INFINITY, f64::NEG_INFINITY, 1e300));
        assert!(!within_tolerance(f64::INFINITY, 1.0, f64::INFINITY));
        assert!(within_tolerance(3.0, -7.0, f64::INFINITY));
    }

    #[test]
    fn test_first_mismatch_stops_at_first_index() {
        let a = vec![1.0, 9.0, 9.0];
        let b = vec![1.0, 2.0, 3.0];
        let idx = first_mismatch_f64(&a, &b, 0.5).unwrap();
        assert_eq!(idx, Some(1));
    }

    #[test]
    fn test_first_mismatch_all_pass() {
        let a = vec![1.0, 2.0004, -3.0];
        let b = vec![1.0, 2.0, -3.0001];
        assert_eq!(first_mismatch_f64(&a, &b, 1e-3).unwrap(), None);
        assert_eq!(first_mismatch_f64(&[], &[], 0.0).unwrap(), None);
    }

    #[test]
    fn test_first_mismatch_rejects_uneven_slices() {
        let result = first_mismatch_f64(&[1.0], &[1.0, 2.0], 1.0);
        assert!(result.is_err());
    }
}
