// src/curves/phyllotaxis.rs

use crate::constants::GOLDEN_ANGLE_DEG;
use crate::types::PointSeries;

/// Generates `n_points` seeds of a sunflower-head (Vogel) spiral.
///
/// Seed `i` sits at angle `i * golden_angle` and radius `c * sqrt(i)`.
pub fn phyllotaxis(n_points: u64, c: f64) -> PointSeries {
    let golden_angle = GOLDEN_ANGLE_DEG.to_radians();
    (0..n_points)
        .map(|i| {
            let i = i as f64;
            let radius = c * i.sqrt();
            let theta = i * golden_angle;
            (radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_point_count() {
        assert_eq!(phyllotaxis(300, 2.0).len(), 300);
        assert!(phyllotaxis(0, 2.0).is_empty());
    }

    #[test]
    fn test_first_points() {
        let points = phyllotaxis(2, 2.0);
        assert_abs_diff_eq!(points[0].0, 0.0);
        assert_abs_diff_eq!(points[0].1, 0.0);

        let angle = 137.5_f64.to_radians();
        assert_abs_diff_eq!(points[1].0, 2.0 * angle.cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(points[1].1, 2.0 * angle.sin(), epsilon = 1e-12);
    }

    #[test]
    fn test_radius_grows_with_sqrt_of_index() {
        let points = phyllotaxis(101, 2.0);
        let (x, y) = points[100];
        assert_abs_diff_eq!((x * x + y * y).sqrt(), 20.0, epsilon = 1e-9);
    }
}
