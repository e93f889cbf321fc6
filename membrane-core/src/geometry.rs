//! Geometry providers.
//!
//! A [`Geometry`] knows an element's nodal positions, its interpolation basis
//! and its integration rule. Physics strategies only ever see shape function
//! values and global derivatives through this trait, so any physics can be
//! combined with any geometry.
//!
//! # Submodules
//!
//! - [`gauss`] - Gauss quadrature rules
//! - [`tri3`] - 3-node linear triangle
//! - [`quad4`] - 4-node bilinear quadrilateral
//! - [`tri6`] - 6-node quadratic triangle

use crate::error::{Error, Result};
use crate::types::Point2;
use nalgebra::{DMatrix, DVector, Matrix2};
use std::fmt;

pub mod gauss;
pub mod quad4;
pub mod tri3;
pub mod tri6;

pub use gauss::{gauss_1d, gauss_quad, gauss_tri, try_gauss_quad, try_gauss_tri, GaussPoint};
pub use quad4::Quad4;
pub use tri3::Tri3;
pub use tri6::Tri6;

/// Everything an integrand needs at one integration point.
#[derive(Debug, Clone)]
pub struct IntegrationSample {
    /// Natural coordinates of the point.
    pub point: Point2,
    /// Shape function values, length N.
    pub shape_values: DVector<f64>,
    /// Shape function derivatives in global coordinates, N×2 (∂/∂x, ∂/∂y).
    pub shape_derivatives: DMatrix<f64>,
    /// Jacobian determinant at the point.
    pub det_j: f64,
    /// Quadrature weight multiplied by det(J), i.e. the area element dA.
    pub weight: f64,
}

/// Element geometry interface.
///
/// Implementors provide the basis and the quadrature rule; the Jacobian, the
/// global derivatives and the integration loops come as provided methods.
///
/// Geometries must be thread-safe (Send + Sync) so elements can be evaluated
/// in parallel.
pub trait Geometry: Send + Sync + fmt::Debug {
    /// Number of nodes N.
    fn n_nodes(&self) -> usize;

    /// Nodal positions in global coordinates, length N.
    fn node_coords(&self) -> &[Point2];

    /// Integration rule on the reference element.
    fn integration_points(&self) -> &[GaussPoint];

    /// Shape function values at natural coordinates, length N.
    fn shape_functions(&self, point: &Point2) -> DVector<f64>;

    /// Shape function derivatives with respect to natural coordinates, N×2
    /// (∂/∂ξ, ∂/∂η).
    fn natural_derivatives(&self, point: &Point2) -> DMatrix<f64>;

    /// Determinants at or below this value reject the element.
    fn min_jacobian(&self) -> f64 {
        0.0
    }

    /// Jacobian of the natural-to-global map.
    ///
    /// J = [[∂x/∂ξ, ∂y/∂ξ],
    ///      [∂x/∂η, ∂y/∂η]]
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the nodal coordinates or the natural
    /// derivatives disagree with [`Geometry::n_nodes`].
    fn jacobian(&self, point: &Point2) -> Result<Matrix2<f64>> {
        let dn_dnat = checked_natural_derivatives(self, point)?;
        let coords = self.node_coords();
        check_node_count(coords, self.n_nodes())?;

        let mut j = Matrix2::zeros();
        for (i, x) in coords.iter().enumerate() {
            j[(0, 0)] += dn_dnat[(i, 0)] * x[0];
            j[(0, 1)] += dn_dnat[(i, 0)] * x[1];
            j[(1, 0)] += dn_dnat[(i, 1)] * x[0];
            j[(1, 1)] += dn_dnat[(i, 1)] * x[1];
        }
        Ok(j)
    }

    /// Shape function derivatives in global coordinates, N×2 (∂/∂x, ∂/∂y).
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidGeometry`] if det(J) is not above [`Geometry::min_jacobian`]
    /// - [`Error::DimensionMismatch`] if the basis disagrees with [`Geometry::n_nodes`]
    fn shape_function_derivatives(&self, point: &Point2) -> Result<DMatrix<f64>> {
        let j = self.jacobian(point)?;
        let det_j = j.determinant();
        check_jacobian(det_j, self.min_jacobian(), point)?;

        let j_inv = j.try_inverse().ok_or_else(|| {
            Error::InvalidGeometry(format!("singular Jacobian at ({}, {})", point[0], point[1]))
        })?;

        // [dN/dx, dN/dy]^T = J^(-1) * [dN/dξ, dN/dη]^T
        let dn_dnat = checked_natural_derivatives(self, point)?;
        let n = self.n_nodes();
        let mut dn_dx = DMatrix::zeros(n, 2);
        for i in 0..n {
            let (dxi, deta) = (dn_dnat[(i, 0)], dn_dnat[(i, 1)]);
            dn_dx[(i, 0)] = j_inv[(0, 0)] * dxi + j_inv[(0, 1)] * deta;
            dn_dx[(i, 1)] = j_inv[(1, 0)] * dxi + j_inv[(1, 1)] * deta;
        }
        Ok(dn_dx)
    }

    /// Evaluate everything an integrand needs at one Gauss point.
    fn sample(&self, gp: &GaussPoint) -> Result<IntegrationSample> {
        let point = Point2::new(gp.xi(), gp.eta());
        let det_j = self.jacobian(&point)?.determinant();
        check_jacobian(det_j, self.min_jacobian(), &point)?;

        let shape_values = self.shape_functions(&point);
        if shape_values.len() != self.n_nodes() {
            return Err(Error::dimension(
                "shape function values",
                self.n_nodes(),
                shape_values.len(),
            ));
        }

        Ok(IntegrationSample {
            shape_values,
            shape_derivatives: self.shape_function_derivatives(&point)?,
            det_j,
            weight: gp.weight * det_j,
            point,
        })
    }

    /// Integrate a scalar field over the element domain.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidGeometry`] for a degenerate or inverted element.
    fn integrate(&self, integrand: &dyn Fn(&IntegrationSample) -> f64) -> Result<f64> {
        let mut total = 0.0;
        for gp in self.integration_points() {
            let sample = self.sample(gp)?;
            total += integrand(&sample) * sample.weight;
        }
        Ok(total)
    }

    /// Integrate a `rows`×`cols` matrix field over the element domain.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidGeometry`] for a degenerate or inverted element,
    /// [`Error::DimensionMismatch`] if the integrand returns the wrong shape,
    /// or any error raised by the integrand itself.
    fn integrate_matrix(
        &self,
        rows: usize,
        cols: usize,
        integrand: &dyn Fn(&IntegrationSample) -> Result<DMatrix<f64>>,
    ) -> Result<DMatrix<f64>> {
        let mut total = DMatrix::zeros(rows, cols);
        for gp in self.integration_points() {
            let sample = self.sample(gp)?;
            let value = integrand(&sample)?;
            if value.nrows() != rows {
                return Err(Error::dimension("integrand rows", rows, value.nrows()));
            }
            if value.ncols() != cols {
                return Err(Error::dimension("integrand columns", cols, value.ncols()));
            }
            total += value * sample.weight;
        }
        Ok(total)
    }
}

fn check_jacobian(det_j: f64, min_jacobian: f64, point: &Point2) -> Result<()> {
    // Negated comparison also rejects NaN
    if !(det_j > min_jacobian) {
        return Err(Error::InvalidGeometry(format!(
            "non-positive Jacobian determinant {:e} at ({}, {})",
            det_j, point[0], point[1]
        )));
    }
    Ok(())
}

fn checked_natural_derivatives<G: Geometry + ?Sized>(
    geometry: &G,
    point: &Point2,
) -> Result<DMatrix<f64>> {
    let dn_dnat = geometry.natural_derivatives(point);
    if dn_dnat.nrows() != geometry.n_nodes() {
        return Err(Error::dimension(
            "natural derivative rows",
            geometry.n_nodes(),
            dn_dnat.nrows(),
        ));
    }
    if dn_dnat.ncols() != 2 {
        return Err(Error::dimension("natural derivative columns", 2, dn_dnat.ncols()));
    }
    Ok(dn_dnat)
}

pub(crate) fn check_node_count(coords: &[Point2], expected: usize) -> Result<()> {
    if coords.len() != expected {
        return Err(Error::dimension("nodal coordinates", expected, coords.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_integrate_constant_gives_area() {
        let tri = Tri3::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 1.0),
        ])
        .unwrap();
        let area = tri.integrate(&|_| 1.0).unwrap();
        assert_relative_eq!(area, 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_integrate_matrix_rejects_wrong_shape() {
        let quad = Quad4::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
        .unwrap();
        let result = quad.integrate_matrix(2, 2, &|_| Ok(DMatrix::zeros(3, 2)));
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch { expected: 2, found: 3, .. })
        ));
    }

    #[test]
    fn test_inverted_element_rejected() {
        // Clockwise node order flips the sign of det(J)
        let tri = Tri3::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 0.0),
        ])
        .unwrap();
        assert!(matches!(tri.integrate(&|_| 1.0), Err(Error::InvalidGeometry(_))));
        assert!(matches!(
            tri.shape_function_derivatives(&Point2::new(0.2, 0.2)),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_collapsed_element_rejected() {
        let tri = Tri3::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ])
        .unwrap();
        assert!(matches!(tri.integrate(&|_| 1.0), Err(Error::InvalidGeometry(_))));
    }

    /// Reports three nodes but can be told to describe fewer of them.
    #[derive(Debug)]
    struct Miscounted {
        coords: Vec<Point2>,
        points: Vec<GaussPoint>,
        values: usize,
        derivative_rows: usize,
    }

    impl Miscounted {
        fn new() -> Self {
            Self {
                coords: vec![
                    Point2::new(0.0, 0.0),
                    Point2::new(1.0, 0.0),
                    Point2::new(0.0, 1.0),
                ],
                points: gauss_tri(3),
                values: 3,
                derivative_rows: 3,
            }
        }
    }

    impl Geometry for Miscounted {
        fn n_nodes(&self) -> usize {
            3
        }

        fn node_coords(&self) -> &[Point2] {
            &self.coords
        }

        fn integration_points(&self) -> &[GaussPoint] {
            &self.points
        }

        fn shape_functions(&self, point: &Point2) -> DVector<f64> {
            let n = [1.0 - point[0] - point[1], point[0], point[1]];
            DVector::from_column_slice(&n[..self.values])
        }

        fn natural_derivatives(&self, _point: &Point2) -> DMatrix<f64> {
            let dn = DMatrix::from_row_slice(3, 2, &[-1.0, -1.0, 1.0, 0.0, 0.0, 1.0]);
            dn.rows(0, self.derivative_rows).into_owned()
        }
    }

    #[test]
    fn test_consistent_basis_passes() {
        let geometry = Miscounted::new();
        assert_relative_eq!(geometry.integrate(&|_| 1.0).unwrap(), 0.5, epsilon = 1e-14);
    }

    #[test]
    fn test_short_derivatives_are_dimension_mismatch() {
        let geometry = Miscounted {
            derivative_rows: 2,
            ..Miscounted::new()
        };
        let point = Point2::new(0.2, 0.2);
        assert!(matches!(
            geometry.jacobian(&point),
            Err(Error::DimensionMismatch { expected: 3, found: 2, .. })
        ));
        assert!(matches!(
            geometry.shape_function_derivatives(&point),
            Err(Error::DimensionMismatch { expected: 3, found: 2, .. })
        ));
        assert!(matches!(
            geometry.integrate(&|_| 1.0),
            Err(Error::DimensionMismatch { expected: 3, found: 2, .. })
        ));
    }

    #[test]
    fn test_short_coordinates_are_dimension_mismatch() {
        let mut geometry = Miscounted::new();
        geometry.coords.truncate(2);
        assert!(matches!(
            geometry.jacobian(&Point2::new(0.2, 0.2)),
            Err(Error::DimensionMismatch { expected: 3, found: 2, .. })
        ));
    }

    #[test]
    fn test_short_shape_values_are_dimension_mismatch() {
        let geometry = Miscounted {
            values: 2,
            ..Miscounted::new()
        };
        assert!(matches!(
            geometry.sample(&GaussPoint::new([0.2, 0.2], 0.5)),
            Err(Error::DimensionMismatch { expected: 3, found: 2, .. })
        ));
    }

    #[test]
    fn test_sample_carries_point_and_determinant() {
        let tri = Tri3::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 1.0),
        ])
        .unwrap();
        let gp = GaussPoint::new([0.25, 0.5], 1.0 / 6.0);
        let sample = tri.sample(&gp).unwrap();

        assert_eq!(sample.point, Point2::new(0.25, 0.5));
        // Constant map: det(J) is twice the element area
        assert_relative_eq!(sample.det_j, 2.0, epsilon = 1e-14);
        assert_relative_eq!(sample.weight, sample.det_j / 6.0, epsilon = 1e-14);
        assert_relative_eq!(sample.shape_values.sum(), 1.0, epsilon = 1e-14);
    }
}
