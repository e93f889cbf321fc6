//! Physics strategies.
//!
//! A [`Physics`] turns shape function data from a [`Geometry`] and the
//! constants of a bound [`Material`] into element matrices. Physics objects
//! are stateless: the material and the geometry are supplied on every call,
//! which keeps them freely shareable across threads.
//!
//! # Submodules
//!
//! - [`membrane`] - plane stress membrane (two in-plane DOFs per node)
//! - [`plane_strain`] - plane strain continuum on the same kinematics

use crate::error::{Error, Result};
use crate::geometry::Geometry;
use crate::material::{LinearElasticity, Material, MaterialKind};
use crate::types::MaterialMatrix;
use log::trace;
use nalgebra::DMatrix;
use std::fmt;

pub mod membrane;
pub mod plane_strain;

pub use membrane::MembranePhysics;
pub use plane_strain::PlaneStrainPhysics;

/// Element physics interface.
///
/// Physics strategies must be thread-safe (Send + Sync) to enable parallel
/// element evaluation.
pub trait Physics: Send + Sync + fmt::Debug {
    /// Short human readable name.
    fn name(&self) -> &'static str;

    /// Degrees of freedom per node.
    fn dofs_per_node(&self) -> usize;

    /// The only material kind this physics accepts.
    fn accepted_material(&self) -> MaterialKind;

    /// Strain-displacement matrix B (3 × dofs_per_node·N) from global shape
    /// function derivatives (N×2).
    fn strain_displacement_matrix(
        &self,
        shape_dgl: &DMatrix<f64>,
        n_nodes: usize,
    ) -> Result<DMatrix<f64>>;

    /// Constitutive matrix D.
    fn material_matrix(&self, material: &Material) -> Result<MaterialMatrix>;

    /// Consistent mass matrix M.
    fn mass_matrix(&self, geometry: &dyn Geometry, material: &Material) -> Result<DMatrix<f64>>;

    /// Check that `material` is of the accepted kind and return its constants.
    ///
    /// # Errors
    ///
    /// [`Error::IncompatibleMaterial`] on a kind mismatch. There is no
    /// conversion between kinds.
    fn check_material<'a>(&self, material: &'a Material) -> Result<&'a LinearElasticity> {
        let expected = self.accepted_material();
        if material.kind() != expected {
            return Err(Error::IncompatibleMaterial {
                expected,
                found: material.kind(),
            });
        }
        Ok(material.linear_elasticity())
    }

    /// Element stiffness matrix K = ∫ Bᵀ D B h dA.
    fn stiffness_matrix(
        &self,
        geometry: &dyn Geometry,
        material: &Material,
    ) -> Result<DMatrix<f64>> {
        let d = self.material_matrix(material)?;
        let thickness = material.linear_elasticity().thickness();
        let n_nodes = geometry.n_nodes();
        let n_dofs = n_nodes * self.dofs_per_node();

        trace!("{}: integrating {}x{} stiffness", self.name(), n_dofs, n_dofs);

        geometry.integrate_matrix(n_dofs, n_dofs, &|sample| {
            let b = self.strain_displacement_matrix(&sample.shape_derivatives, n_nodes)?;
            let db = &d * &b;
            Ok(b.transpose() * db * thickness)
        })
    }
}
