//! Plane stress membrane physics.
//!
//! A membrane is a flat extensional element with two in-plane displacement
//! DOFs (u, v) per node. It has no rotational stiffness and no stiffness
//! normal to its plane, so resultant forces must lie in the element plane.
//!
//! The three element quantities are exposed as free functions so they can be
//! used without an [`Element`](crate::element::Element):
//!
//! - [`plane_stress_matrix`] - D from (E, ν)
//! - [`strain_displacement_matrix`] - B from global shape function derivatives
//! - [`consistent_mass_matrix`] - M from a geometry and ρ·h

use crate::error::{Error, Result};
use crate::geometry::Geometry;
use crate::material::{Material, MaterialKind};
use crate::physics::Physics;
use crate::types::MaterialMatrix;
use log::trace;
use nalgebra::DMatrix;

/// Displacement DOFs per membrane node (u, v).
pub const DOFS_PER_NODE: usize = 2;

/// Plane stress constitutive matrix.
///
/// Returns the 3x3 matrix D for [σ_xx, σ_yy, τ_xy] = D * [ε_xx, ε_yy, γ_xy]:
///
/// ```text
/// D = E/(1-ν²) * [[1, ν, 0],
///                 [ν, 1, 0],
///                 [0, 0, (1-ν)/2]]
/// ```
///
/// # Errors
///
/// [`Error::InvalidMaterial`] if E is not positive or |ν| ≥ 1, where 1 - ν²
/// vanishes or the matrix loses its physical meaning.
pub fn plane_stress_matrix(youngs_modulus: f64, poissons_ratio: f64) -> Result<MaterialMatrix> {
    let e = youngs_modulus;
    let nu = poissons_ratio;

    if !e.is_finite() || e <= 0.0 {
        return Err(Error::InvalidMaterial(format!(
            "Young's modulus must be positive, got {}",
            e
        )));
    }
    if !nu.is_finite() || nu.abs() >= 1.0 {
        return Err(Error::InvalidMaterial(format!(
            "plane stress matrix is singular for Poisson's ratio {}",
            nu
        )));
    }

    let factor = e / (1.0 - nu * nu);

    Ok(MaterialMatrix::new(
        factor,      factor * nu, 0.0,
        factor * nu, factor,      0.0,
        0.0,         0.0,         factor * (1.0 - nu) / 2.0,
    ))
}

/// Strain-displacement matrix for two-DOF-per-node kinematics.
///
/// `shape_dgl` holds the global derivatives of the N shape functions, one row
/// per node: [dN_i/dx, dN_i/dy]. The result is the 3×2N matrix B with
/// ε = [ε_xx, ε_yy, γ_xy]^T = B * [u1, v1, u2, v2, ...]^T, using engineering
/// shear γ_xy = ∂u/∂y + ∂v/∂x.
///
/// # Errors
///
/// [`Error::DimensionMismatch`] if `shape_dgl` is not `n_nodes`×2.
pub fn strain_displacement_matrix(shape_dgl: &DMatrix<f64>, n_nodes: usize) -> Result<DMatrix<f64>> {
    if shape_dgl.nrows() != n_nodes {
        return Err(Error::dimension(
            "shape function derivative rows",
            n_nodes,
            shape_dgl.nrows(),
        ));
    }
    if shape_dgl.ncols() != 2 {
        return Err(Error::dimension(
            "shape function derivative columns",
            2,
            shape_dgl.ncols(),
        ));
    }

    let mut b = DMatrix::zeros(3, DOFS_PER_NODE * n_nodes);
    for i in 0..n_nodes {
        let col = DOFS_PER_NODE * i;
        let dn_dx = shape_dgl[(i, 0)];
        let dn_dy = shape_dgl[(i, 1)];
        b[(0, col)] = dn_dx;     // ε_xx = ∂u/∂x
        b[(1, col + 1)] = dn_dy; // ε_yy = ∂v/∂y
        b[(2, col)] = dn_dy;     // γ_xy = ∂u/∂y + ∂v/∂x
        b[(2, col + 1)] = dn_dx;
    }

    Ok(b)
}

/// Consistent mass matrix for two translational DOFs per node.
///
/// Integrates ρh·N_i·N_j over the element in a single pass, then expands each
/// entry into a 2x2 identity block: x and y translations never couple.
///
/// # Errors
///
/// [`Error::InvalidGeometry`] if the geometry is degenerate or inverted.
pub fn consistent_mass_matrix(geometry: &dyn Geometry, areal_density: f64) -> Result<DMatrix<f64>> {
    let n_nodes = geometry.n_nodes();

    let scalar = geometry.integrate_matrix(n_nodes, n_nodes, &|sample| {
        let n = &sample.shape_values;
        if n.len() != n_nodes {
            return Err(Error::dimension("shape function values", n_nodes, n.len()));
        }
        // Each product is formed once and written to both halves
        let mut m = DMatrix::zeros(n_nodes, n_nodes);
        for i in 0..n_nodes {
            for j in i..n_nodes {
                let value = areal_density * n[i] * n[j];
                m[(i, j)] = value;
                m[(j, i)] = value;
            }
        }
        Ok(m)
    })?;

    let n_dofs = DOFS_PER_NODE * n_nodes;
    let mut mass = DMatrix::zeros(n_dofs, n_dofs);
    for i in 0..n_nodes {
        for j in 0..n_nodes {
            let m = scalar[(i, j)];
            for d in 0..DOFS_PER_NODE {
                mass[(DOFS_PER_NODE * i + d, DOFS_PER_NODE * j + d)] = m;
            }
        }
    }

    Ok(mass)
}

/// Plane stress membrane physics.
///
/// Accepts only [`MaterialKind::PlaneStress`] materials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MembranePhysics;

impl Physics for MembranePhysics {
    fn name(&self) -> &'static str {
        "membrane"
    }

    fn dofs_per_node(&self) -> usize {
        DOFS_PER_NODE
    }

    fn accepted_material(&self) -> MaterialKind {
        MaterialKind::PlaneStress
    }

    fn strain_displacement_matrix(
        &self,
        shape_dgl: &DMatrix<f64>,
        n_nodes: usize,
    ) -> Result<DMatrix<f64>> {
        strain_displacement_matrix(shape_dgl, n_nodes)
    }

    fn material_matrix(&self, material: &Material) -> Result<MaterialMatrix> {
        let m = self.check_material(material)?;
        plane_stress_matrix(m.youngs_modulus(), m.poissons_ratio())
    }

    fn mass_matrix(&self, geometry: &dyn Geometry, material: &Material) -> Result<DMatrix<f64>> {
        let m = self.check_material(material)?;
        trace!(
            "membrane: mass matrix for {} nodes, rho*h = {}",
            geometry.n_nodes(),
            m.areal_density()
        );
        consistent_mass_matrix(geometry, m.areal_density())
    }
}
