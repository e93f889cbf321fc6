//! 6-node quadratic triangle geometry.
//!
//! # Node Numbering
//!
//! ```text
//!        3
//!       /\
//!      /  \
//!     6    5
//!    /      \
//!   /        \
//!  1----4-----2
//! ```
//!
//! - Corner nodes: 1, 2, 3 (local indices 0, 1, 2)
//! - Mid-edge nodes: 4 (edge 1-2), 5 (edge 2-3), 6 (edge 3-1) (local indices 3, 4, 5)
//!
//! # Shape Functions
//!
//! With area coordinates L1 = 1 - ξ - η, L2 = ξ, L3 = η:
//!
//! ```text
//! N1 = L1 * (2*L1 - 1)   (corner 1)
//! N2 = L2 * (2*L2 - 1)   (corner 2)
//! N3 = L3 * (2*L3 - 1)   (corner 3)
//! N4 = 4 * L1 * L2       (mid-edge 1-2)
//! N5 = 4 * L2 * L3       (mid-edge 2-3)
//! N6 = 4 * L3 * L1       (mid-edge 3-1)
//! ```
//!
//! Mid-edge nodes may be placed off the straight edge to describe curved
//! boundaries.

use crate::config::QuadratureConfig;
use crate::error::Result;
use crate::geometry::gauss::{try_gauss_tri, GaussPoint};
use crate::geometry::{check_node_count, Geometry};
use crate::types::Point2;
use nalgebra::{DMatrix, DVector};

/// 6-node quadratic triangle.
#[derive(Debug, Clone)]
pub struct Tri6 {
    coords: Vec<Point2>,
    points: Vec<GaussPoint>,
    min_jacobian: f64,
}

impl Tri6 {
    /// Create a quadratic triangle using the default quadrature settings.
    pub fn new(coords: Vec<Point2>) -> Result<Self> {
        Self::with_config(coords, &QuadratureConfig::default())
    }

    /// Create a quadratic triangle with explicit quadrature settings.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidGeometry`] if `config.tri6_points` has no matching rule.
    pub fn with_config(coords: Vec<Point2>, config: &QuadratureConfig) -> Result<Self> {
        check_node_count(&coords, 6)?;
        Ok(Self {
            coords,
            points: try_gauss_tri(config.tri6_points)?,
            min_jacobian: config.min_jacobian,
        })
    }

    /// Build a straight-sided Tri6 from three corners, placing mid-edge nodes
    /// at the edge midpoints.
    pub fn from_corners(corners: [Point2; 3]) -> Result<Self> {
        let [a, b, c] = corners;
        Self::new(vec![a, b, c, (a + b) / 2.0, (b + c) / 2.0, (c + a) / 2.0])
    }

    /// Derivatives with respect to area coordinates: (dN/dL1, dN/dL2, dN/dL3).
    fn area_derivatives(l1: f64, l2: f64, l3: f64) -> [(f64, f64, f64); 6] {
        [
            (4.0 * l1 - 1.0, 0.0, 0.0),
            (0.0, 4.0 * l2 - 1.0, 0.0),
            (0.0, 0.0, 4.0 * l3 - 1.0),
            (4.0 * l2, 4.0 * l1, 0.0),
            (0.0, 4.0 * l3, 4.0 * l2),
            (4.0 * l3, 0.0, 4.0 * l1),
        ]
    }
}

impl Geometry for Tri6 {
    fn n_nodes(&self) -> usize {
        6
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
        let (l2, l3) = (point[0], point[1]);
        let l1 = 1.0 - l2 - l3;
        DVector::from_vec(vec![
            l1 * (2.0 * l1 - 1.0),
            l2 * (2.0 * l2 - 1.0),
            l3 * (2.0 * l3 - 1.0),
            4.0 * l1 * l2,
            4.0 * l2 * l3,
            4.0 * l3 * l1,
        ])
    }

    fn natural_derivatives(&self, point: &Point2) -> DMatrix<f64> {
        let (l2, l3) = (point[0], point[1]);
        let l1 = 1.0 - l2 - l3;

        // dN/dξ = dN/dL2 - dN/dL1, dN/dη = dN/dL3 - dN/dL1
        let mut dn = DMatrix::zeros(6, 2);
        for (i, (d1, d2, d3)) in Self::area_derivatives(l1, l2, l3).into_iter().enumerate() {
            dn[(i, 0)] = d2 - d1;
            dn[(i, 1)] = d3 - d1;
        }
        dn
    }
}
