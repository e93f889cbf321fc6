//! Plane strain physics.
//!
//! Same two-DOF kinematics and mass as the membrane, but for thick bodies
//! where ε_z = γ_yz = γ_xz = 0 (dams, tunnels, long prismatic structures).
//! The out-of-plane stress σ_z = ν(σ_x + σ_y) is not zero; the 3x3 D
//! below relates only the in-plane components.
//!
//! The material thickness is interpreted as the analysed depth, usually 1.0
//! for per-unit-depth analysis.

use crate::error::{Error, Result};
use crate::geometry::Geometry;
use crate::material::{Material, MaterialKind};
use crate::physics::membrane::{consistent_mass_matrix, strain_displacement_matrix, DOFS_PER_NODE};
use crate::physics::Physics;
use crate::types::MaterialMatrix;
use nalgebra::DMatrix;

/// Plane strain constitutive matrix.
///
/// Returns a 3x3 matrix for [σ_xx, σ_yy, τ_xy] = D * [ε_xx, ε_yy, γ_xy].
///
/// # Errors
///
/// [`Error::InvalidMaterial`] if E is not positive or ν is outside (-1, 0.5),
/// where (1 + ν)(1 - 2ν) vanishes or changes sign.
pub fn plane_strain_matrix(youngs_modulus: f64, poissons_ratio: f64) -> Result<MaterialMatrix> {
    let e = youngs_modulus;
    let nu = poissons_ratio;

    if !e.is_finite() || e <= 0.0 {
        return Err(Error::InvalidMaterial(format!(
            "Young's modulus must be positive, got {}",
            e
        )));
    }
    if !nu.is_finite() || nu <= -1.0 || nu >= 0.5 {
        return Err(Error::InvalidMaterial(format!(
            "plane strain matrix is singular for Poisson's ratio {}",
            nu
        )));
    }

    let factor = e / ((1.0 + nu) * (1.0 - 2.0 * nu));
    let c11 = factor * (1.0 - nu);
    let c12 = factor * nu;
    let c33 = factor * (1.0 - 2.0 * nu) / 2.0; // = G

    Ok(MaterialMatrix::new(
        c11, c12, 0.0,
        c12, c11, 0.0,
        0.0, 0.0, c33,
    ))
}

/// Plane strain continuum physics on membrane kinematics.
///
/// Accepts only [`MaterialKind::PlaneStrain`] materials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaneStrainPhysics;

impl Physics for PlaneStrainPhysics {
    fn name(&self) -> &'static str {
        "plane strain"
    }

    fn dofs_per_node(&self) -> usize {
        DOFS_PER_NODE
    }

    fn accepted_material(&self) -> MaterialKind {
        MaterialKind::PlaneStrain
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
        plane_strain_matrix(m.youngs_modulus(), m.poissons_ratio())
    }

    fn mass_matrix(&self, geometry: &dyn Geometry, material: &Material) -> Result<DMatrix<f64>> {
        let m = self.check_material(material)?;
        consistent_mass_matrix(geometry, m.areal_density())
    }
}
