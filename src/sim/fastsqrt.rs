//! Bit-level approximate square root
//!
//! Halves the IEEE-754 exponent directly on the raw bit pattern, with no
//! Newton refinement step. The result lands within a few percent of the
//! true root, which every distance comparison in the broad phase tolerates
//! in exchange for skipping a correctly-rounded sqrt per candidate pair.

/// Approximate `x.sqrt()` for non-negative finite inputs.
///
/// Returns exactly 0.0 for 0.0. Callers must tolerate up to a few percent
/// of error, which matters near collision boundaries: a pair sitting right
/// at the combined radius may be judged either way.
#[inline]
pub fn fast_sqrt(x: f32) -> f32 {
    if x == 0.0 {
        return 0.0;
    }
    let mut i = x.to_bits() as i32;
    i -= 1 << 23;
    i >>= 1;
    i += 1 << 29;
    f32::from_bits(i as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_is_exact() {
        assert_eq!(fast_sqrt(0.0), 0.0);
    }

    #[test]
    fn test_four_is_exact() {
        // Even powers of four survive the exponent halving untouched
        assert_eq!(fast_sqrt(4.0), 2.0);
        assert_eq!(fast_sqrt(16.0), 4.0);
    }

    #[test]
    fn test_known_values_stay_inside_the_bias_band() {
        // The transform is biased high: worst case is +6.07% at x = 2*4^k
        // (e.g. fast_sqrt(2.0) = 1.5), dropping to exact at powers of four.
        for x in [0.25f32, 0.5, 1.0, 2.0, 3.0, 10.0, 100.0, 12345.0] {
            let approx = fast_sqrt(x);
            let exact = x.sqrt();
            assert!(approx >= exact * 0.999, "fast_sqrt({x}) = {approx} undershoots {exact}");
            assert!(approx <= exact * 1.062, "fast_sqrt({x}) = {approx} overshoots {exact}");
        }
    }

    proptest! {
        #[test]
        fn test_stays_within_tolerance_band(x in 1e-3f32..1e12f32) {
            let approx = fast_sqrt(x);
            let exact = x.sqrt();
            prop_assert!((approx - exact).abs() <= exact * 0.062);
        }

        #[test]
        fn test_monotonic_on_ordered_pairs(a in 1e-3f32..1e6f32, b in 1e-3f32..1e6f32) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            // The bit transform is monotonic in the input bits
            prop_assert!(fast_sqrt(lo) <= fast_sqrt(hi));
        }
    }
}
