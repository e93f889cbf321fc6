//! 3-node linear triangle geometry.
//!
//! Natural coordinates (ξ, η) on the reference triangle (0,0), (1,0), (0,1):
//!
//! ```text
//! N1 = 1 - ξ - η
//! N2 = ξ
//! N3 = η
//! ```
//!
//! Derivatives are constant, so strains are constant over the element.

use crate::config::QuadratureConfig;
use crate::error::Result;
use crate::geometry::gauss::{try_gauss_tri, GaussPoint};
use crate::geometry::{check_node_count, Geometry};
use crate::types::Point2;
use nalgebra::{DMatrix, DVector};

/// 3-node triangle (Constant Strain Triangle geometry).
#[derive(Debug, Clone)]
pub struct Tri3 {
    coords: Vec<Point2>,
    points: Vec<GaussPoint>,
    min_jacobian: f64,
}

impl Tri3 {
    /// Create a triangle from counter-clockwise nodal coordinates using the
    /// default quadrature settings.
    ///
    /// # Errors
    ///
    /// [`crate::Error::DimensionMismatch`] unless exactly 3 coordinates are given.
    pub fn new(coords: Vec<Point2>) -> Result<Self> {
        Self::with_config(coords, &QuadratureConfig::default())
    }

    /// Create a triangle with explicit quadrature settings.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidGeometry`] if `config.tri3_points` has no matching rule.
    pub fn with_config(coords: Vec<Point2>, config: &QuadratureConfig) -> Result<Self> {
        check_node_count(&coords, 3)?;
        Ok(Self {
            coords,
            points: try_gauss_tri(config.tri3_points)?,
            min_jacobian: config.min_jacobian,
        })
    }
}

impl Geometry for Tri3 {
    fn n_nodes(&self) -> usize {
        3
    }

    fn node_coords(&self) -> &[Point2] {
        &self.coords
    }

    fn integration_points(&self) -> &[GaussPoint] {
        &self.points
    }

    fn min_jacobian(&self) -> f64 {
        self.min_jacobian
    }

    fn shape_functions(&self, point: &Point2) -> DVector<f64> {
        let (xi, eta) = (point[0], point[1]);
        DVector::from_vec(vec![1.0 - xi - eta, xi, eta])
    }

    fn natural_derivatives(&self, _point: &Point2) -> DMatrix<f64> {
        DMatrix::from_row_slice(3, 2, &[
            -1.0, -1.0,
            1.0, 0.0,
            0.0, 1.0,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_relative_eq;

    fn unit_right_triangle() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_tri3_area_unit() {
        let tri = Tri3::new(unit_right_triangle()).unwrap();
        assert_relative_eq!(tri.integrate(&|_| 1.0).unwrap(), 0.5, epsilon = 1e-14);
    }

    #[test]
    fn test_tri3_one_point_rule() {
        let config = QuadratureConfig {
            tri3_points: 1,
            ..QuadratureConfig::default()
        };
        let tri = Tri3::with_config(unit_right_triangle(), &config).unwrap();
        assert_eq!(tri.integration_points().len(), 1);
        assert_relative_eq!(tri.integrate(&|_| 1.0).unwrap(), 0.5, epsilon = 1e-14);
    }

    #[test]
    fn test_tri3_unsupported_rule_rejected() {
        let config = QuadratureConfig {
            tri3_points: 2,
            ..QuadratureConfig::default()
        };
        assert!(matches!(
            Tri3::with_config(unit_right_triangle(), &config),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_tri3_wrong_node_count() {
        let result = Tri3::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch { expected: 3, found: 2, .. })
        ));
    }

    #[test]
    fn test_tri3_global_derivatives() {
        // Matches the closed-form CST derivatives (y_j - y_k) / 2A, (x_k - x_j) / 2A
        let coords = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.5, 1.0),
        ];
        let tri = Tri3::new(coords.clone()).unwrap();
        let dn = tri.shape_function_derivatives(&Point2::new(0.3, 0.3)).unwrap();

        let (x1, y1) = (coords[0][0], coords[0][1]);
        let (x2, y2) = (coords[1][0], coords[1][1]);
        let (x3, y3) = (coords[2][0], coords[2][1]);
        let inv_2a = 1.0 / ((x2 - x1) * (y3 - y1) - (x3 - x1) * (y2 - y1));

        assert_relative_eq!(dn[(0, 0)], (y2 - y3) * inv_2a, epsilon = 1e-14);
        assert_relative_eq!(dn[(0, 1)], (x3 - x2) * inv_2a, epsilon = 1e-14);
        assert_relative_eq!(dn[(1, 0)], (y3 - y1) * inv_2a, epsilon = 1e-14);
        assert_relative_eq!(dn[(1, 1)], (x1 - x3) * inv_2a, epsilon = 1e-14);
        assert_relative_eq!(dn[(2, 0)], (y1 - y2) * inv_2a, epsilon = 1e-14);
        assert_relative_eq!(dn[(2, 1)], (x2 - x1) * inv_2a, epsilon = 1e-14);
    }

    #[test]
    fn test_tri3_shape_functions_partition_of_unity() {
        let tri = Tri3::new(unit_right_triangle()).unwrap();
        for &(xi, eta) in &[(0.0, 0.0), (0.25, 0.5), (1.0 / 3.0, 1.0 / 3.0)] {
            let n = tri.shape_functions(&Point2::new(xi, eta));
            assert_relative_eq!(n.sum(), 1.0, epsilon = 1e-14);
        }
    }
}
