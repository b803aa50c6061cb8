// tests/parameter_derivation_test.rs

use life_patterns::pattern_params::{LissajousParams, PatternParams};
use life_patterns::types::ElapsedSeconds;

fn params(seconds: u64) -> PatternParams {
    PatternParams::from_elapsed(ElapsedSeconds::new(seconds))
}

fn summary(p: &PatternParams) -> (u64, u64, u64, u64, u64, u64, u64, u64) {
    (
        p.phyllotaxis_points,
        p.rose_k,
        p.lissajous.a,
        p.lissajous.b,
        p.spirograph.big_r,
        p.spirograph.r.get(),
        p.spirograph.d,
        p.ulam_limit,
    )
}

#[test]
fn test_reference_values() {
    assert_eq!(summary(&params(0)), (300, 2, 2, 3, 6, 1, 2, 0));
    assert_eq!(summary(&params(12_345)), (300, 7, 8, 7, 18, 1, 7, 61));
    assert_eq!(
        summary(&params(999_999_999)),
        (9_999_999, 11, 2, 8, 6, 5, 11, 5000)
    );
}

#[test]
fn test_derivation_is_deterministic() {
    for seconds in [0, 12_345, 999_999_999] {
        assert_eq!(params(seconds), params(seconds));
    }
}

#[test]
fn test_phyllotaxis_has_at_least_300_points() {
    assert_eq!(params(0).phyllotaxis_points, 300);
    for seconds in [1, 29_999, 30_000, 30_100, 1_000_000, u64::MAX] {
        assert!(params(seconds).phyllotaxis_points >= 300, "seconds = {seconds}");
    }
    assert_eq!(params(30_100).phyllotaxis_points, 301);
}

#[test]
fn test_ulam_limit_is_clamped() {
    assert_eq!(params(5000 * 200).ulam_limit, 5000);
    assert_eq!(params(5000 * 200 + 12_345).ulam_limit, 5000);
    assert_eq!(params(u64::MAX).ulam_limit, 5000);
    assert_eq!(params(4999 * 200).ulam_limit, 4999);
}

#[test]
fn test_lissajous_ranges() {
    for seconds in 0..100 {
        let LissajousParams { a, b } = params(seconds).lissajous;
        assert!((2..=10).contains(&a));
        assert!((3..=9).contains(&b));
    }
}
