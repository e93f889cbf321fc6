//! 4-node bilinear quadrilateral geometry.
//!
//! # Shape Functions
//!
//! In natural coordinates (ξ, η) ∈ [-1, 1]²:
//! ```text
//! N_i = (1 + ξ_i*ξ)(1 + η_i*η) / 4
//! ```
//! where (ξ_i, η_i) = (±1, ±1) for node i.
//!
//! # Node Numbering
//!
//! ```text
//! 4 --- 3
//! |     |
//! 1 --- 2
//! ```
//! Node 1: (-1, -1), Node 2: (+1, -1), Node 3: (+1, +1), Node 4: (-1, +1)

use crate::config::QuadratureConfig;
use crate::error::Result;
use crate::geometry::gauss::{try_gauss_quad, GaussPoint};
use crate::geometry::{check_node_count, Geometry};
use crate::types::Point2;
use nalgebra::{DMatrix, DVector};

/// 4-node bilinear quadrilateral.
#[derive(Debug, Clone)]
pub struct Quad4 {
    coords: Vec<Point2>,
    points: Vec<GaussPoint>,
    min_jacobian: f64,
}

impl Quad4 {
    /// Node positions in natural coordinates.
    const NODE_COORDS: [(f64, f64); 4] = [
        (-1.0, -1.0), // Node 1
        (1.0, -1.0),  // Node 2
        (1.0, 1.0),   // Node 3
        (-1.0, 1.0),  // Node 4
    ];

    /// Create a quadrilateral from counter-clockwise nodal coordinates using
    /// the default quadrature settings.
    pub fn new(coords: Vec<Point2>) -> Result<Self> {
        Self::with_config(coords, &QuadratureConfig::default())
    }

    /// Create a quadrilateral with explicit quadrature settings.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidGeometry`] if `config.quad4_points_per_axis` has no matching rule.
    pub fn with_config(coords: Vec<Point2>, config: &QuadratureConfig) -> Result<Self> {
        check_node_count(&coords, 4)?;
        Ok(Self {
            coords,
            points: try_gauss_quad(config.quad4_points_per_axis)?,
            min_jacobian: config.min_jacobian,
        })
    }
}

impl Geometry for Quad4 {
    fn n_nodes(&self) -> usize {
        4
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
        DVector::from_iterator(
            4,
            Self::NODE_COORDS
                .iter()
                .map(|&(xi_i, eta_i)| 0.25 * (1.0 + xi_i * xi) * (1.0 + eta_i * eta)),
        )
    }

    fn natural_derivatives(&self, point: &Point2) -> DMatrix<f64> {
        let (xi, eta) = (point[0], point[1]);
        let mut dn = DMatrix::zeros(4, 2);
        for (i, &(xi_i, eta_i)) in Self::NODE_COORDS.iter().enumerate() {
            dn[(i, 0)] = 0.25 * xi_i * (1.0 + eta_i * eta);
            dn[(i, 1)] = 0.25 * eta_i * (1.0 + xi_i * xi);
        }
        dn
    }
}
