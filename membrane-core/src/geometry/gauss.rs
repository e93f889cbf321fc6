//! Gauss quadrature rules for numerical integration over 2D reference elements.
//!
//! This module provides:
//! - 1D Gauss-Legendre rules on [-1, 1]
//! - Triangle rules on the reference triangle (0,0), (1,0), (0,1)
//! - Quadrilateral tensor-product rules on [-1, 1]²
//!
//! # Usage
//!
//! ```
//! use membrane_core::geometry::gauss::{gauss_quad, gauss_tri};
//!
//! // 3-point triangle rule, exact for quadratics
//! for gp in gauss_tri(3) {
//!     // gp.xi(), gp.eta() are natural coordinates, gp.weight the weight
//! }
//!
//! // 2x2 rule for bilinear quads
//! assert_eq!(gauss_quad(2).len(), 4);
//! ```

use crate::error::{Error, Result};

/// Point counts with a triangle rule.
pub const TRI_RULE_SIZES: [usize; 4] = [1, 3, 4, 6];

/// Points per direction with a quadrilateral rule.
pub const QUAD_RULE_SIZES: [usize; 3] = [1, 2, 3];

/// A Gauss quadrature point with natural coordinates and weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussPoint {
    /// Natural coordinates (ξ, η).
    ///
    /// For triangles these are the area coordinates (L2, L3), with L1 = 1 - ξ - η.
    pub coords: [f64; 2],
    /// Integration weight on the reference element.
    pub weight: f64,
}

impl GaussPoint {
    /// Create a new Gauss point.
    pub fn new(coords: [f64; 2], weight: f64) -> Self {
        Self { coords, weight }
    }

    /// Get ξ (first natural coordinate).
    #[inline]
    pub fn xi(&self) -> f64 {
        self.coords[0]
    }

    /// Get η (second natural coordinate).
    #[inline]
    pub fn eta(&self) -> f64 {
        self.coords[1]
    }
}

/// 1D Gauss-Legendre quadrature points and weights.
///
/// Returns (point, weight) pairs for integration on [-1, 1].
///
/// # Arguments
///
/// * `n` - Number of integration points (1, 2, 3, or 4)
///
/// # Panics
///
/// Panics if `n` is not in 1..=4.
pub fn gauss_1d(n: usize) -> Vec<(f64, f64)> {
    match n {
        1 => vec![(0.0, 2.0)],
        2 => {
            let p = 1.0 / 3.0_f64.sqrt();
            vec![(-p, 1.0), (p, 1.0)]
        }
        3 => {
            let p = (3.0 / 5.0_f64).sqrt();
            vec![(-p, 5.0 / 9.0), (0.0, 8.0 / 9.0), (p, 5.0 / 9.0)]
        }
        4 => {
            // Points: ±√((3 ∓ 2√(6/5))/7)
            let sqrt_6_5 = (6.0 / 5.0_f64).sqrt();
            let p1 = ((3.0 - 2.0 * sqrt_6_5) / 7.0).sqrt();
            let p2 = ((3.0 + 2.0 * sqrt_6_5) / 7.0).sqrt();
            // Weights: (18 ± √30) / 36
            let sqrt_30 = 30.0_f64.sqrt();
            let w1 = (18.0 + sqrt_30) / 36.0;
            let w2 = (18.0 - sqrt_30) / 36.0;
            vec![(-p2, w2), (-p1, w1), (p1, w1), (p2, w2)]
        }
        _ => panic!("gauss_1d: n must be 1, 2, 3, or 4, got {}", n),
    }
}

/// Triangle quadrature points.
///
/// Returns integration points for the reference triangle with vertices at
/// (0,0), (1,0), (0,1). Weights are scaled for its area (1/2).
///
/// # Arguments
///
/// * `n` - Number of integration points (1, 3, 4, or 6)
///
/// # Integration Order
///
/// - n=1: degree 1 (centroid)
/// - n=3: degree 2 (edge midpoints)
/// - n=4: degree 3
/// - n=6: degree 4
///
/// # Panics
///
/// Panics if `n` is not 1, 3, 4, or 6.
pub fn gauss_tri(n: usize) -> Vec<GaussPoint> {
    match n {
        1 => vec![GaussPoint::new([1.0 / 3.0, 1.0 / 3.0], 0.5)],
        3 => {
            let w = 1.0 / 6.0;
            vec![
                GaussPoint::new([0.5, 0.0], w),
                GaussPoint::new([0.5, 0.5], w),
                GaussPoint::new([0.0, 0.5], w),
            ]
        }
        4 => {
            // Negative centroid weight
            let w_center = -27.0 / 96.0;
            let w_corner = 25.0 / 96.0;
            vec![
                GaussPoint::new([1.0 / 3.0, 1.0 / 3.0], w_center),
                GaussPoint::new([0.2, 0.2], w_corner),
                GaussPoint::new([0.6, 0.2], w_corner),
                GaussPoint::new([0.2, 0.6], w_corner),
            ]
        }
        6 => {
            // Two orbits of three points each (Dunavant)
            let a = 0.445_948_490_915_965;
            let wa = 0.223_381_589_678_011 / 2.0;
            let b = 0.091_576_213_509_771;
            let wb = 0.109_951_743_655_322 / 2.0;
            vec![
                GaussPoint::new([a, a], wa),
                GaussPoint::new([1.0 - 2.0 * a, a], wa),
                GaussPoint::new([a, 1.0 - 2.0 * a], wa),
                GaussPoint::new([b, b], wb),
                GaussPoint::new([1.0 - 2.0 * b, b], wb),
                GaussPoint::new([b, 1.0 - 2.0 * b], wb),
            ]
        }
        _ => panic!("gauss_tri: n must be 1, 3, 4, or 6, got {}", n),
    }
}

/// Quadrilateral Gauss quadrature points.
///
/// Returns integration points for a reference quadrilateral with ξ, η ∈ [-1, 1],
/// built as the tensor product of 1D Gauss-Legendre rules.
///
/// # Arguments
///
/// * `n` - Number of points per direction (1, 2, or 3)
///
/// Returns n² total integration points.
///
/// # Panics
///
/// Panics if `n` is not 1, 2, or 3.
pub fn gauss_quad(n: usize) -> Vec<GaussPoint> {
    if !(1..=3).contains(&n) {
        panic!("gauss_quad: n must be 1, 2, or 3, got {}", n);
    }

    let rule_1d = gauss_1d(n);
    let mut points = Vec::with_capacity(n * n);

    for &(xi, w_xi) in &rule_1d {
        for &(eta, w_eta) in &rule_1d {
            points.push(GaussPoint::new([xi, eta], w_xi * w_eta));
        }
    }

    points
}

/// Triangle rule for a caller-chosen point count.
///
/// # Errors
///
/// [`Error::InvalidGeometry`] if `n` is not one of [`TRI_RULE_SIZES`].
pub fn try_gauss_tri(n: usize) -> Result<Vec<GaussPoint>> {
    if !TRI_RULE_SIZES.contains(&n) {
        return Err(Error::InvalidGeometry(format!(
            "no {}-point triangle rule, expected one of {:?}",
            n, TRI_RULE_SIZES
        )));
    }
    Ok(gauss_tri(n))
}

/// Quadrilateral rule for a caller-chosen number of points per direction.
///
/// # Errors
///
/// [`Error::InvalidGeometry`] if `n` is not one of [`QUAD_RULE_SIZES`].
pub fn try_gauss_quad(n: usize) -> Result<Vec<GaussPoint>> {
    if !QUAD_RULE_SIZES.contains(&n) {
        return Err(Error::InvalidGeometry(format!(
            "no quadrilateral rule with {} points per direction, expected one of {:?}",
            n, QUAD_RULE_SIZES
        )));
    }
    Ok(gauss_quad(n))
}
