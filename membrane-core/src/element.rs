//! Element binding.
//!
//! An [`Element`] composes one [`Geometry`] with one [`Physics`] strategy and
//! the shared [`Material`] it is made of. Matrix requests are delegated to
//! the physics, which pulls shape function data from the geometry.
//!
//! ```
//! use std::sync::Arc;
//! use membrane_core::element::Element;
//! use membrane_core::geometry::Tri3;
//! use membrane_core::material::{LinearElasticity, Material};
//! use membrane_core::types::Point2;
//!
//! let steel = Arc::new(Material::PlaneStress(
//!     LinearElasticity::new(210e9, 0.3)?.with_thickness(0.01)?.with_density(7850.0)?,
//! ));
//! let tri = Tri3::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(0.0, 1.0),
//! ])?;
//!
//! let element = Element::membrane(vec![0, 1, 2], Box::new(tri), steel)?;
//! assert_eq!(element.dofs_per_node(), 2);
//! assert_eq!(element.mass_matrix()?.shape(), (6, 6));
//! # Ok::<(), membrane_core::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::geometry::Geometry;
use crate::material::Material;
use crate::physics::{MembranePhysics, Physics};
use crate::types::{MaterialMatrix, Point2, StrainVector, StressVector};
use log::{debug, trace};
use nalgebra::{DMatrix, DVector, Vector3};
use std::fmt;
use std::sync::Arc;

/// A finite element: node indices + geometry + physics + material.
///
/// Invariants: the node index list always matches the geometry's node count,
/// and the bound material is always of the kind the physics accepts.
#[derive(Debug)]
pub struct Element {
    nodes: Vec<usize>,
    geometry: Box<dyn Geometry>,
    physics: Box<dyn Physics>,
    material: Arc<Material>,
}

impl Element {
    /// Bind a geometry, a physics strategy and a material.
    ///
    /// # Arguments
    ///
    /// * `nodes` - Global node indices, one per geometry node
    /// * `geometry` - Element geometry provider
    /// * `physics` - Physics strategy
    /// * `material` - Shared material descriptor
    ///
    /// # Errors
    ///
    /// - [`Error::DimensionMismatch`] if `nodes.len()` differs from the geometry node count
    /// - [`Error::IncompatibleMaterial`] if the physics does not accept the material kind
    pub fn new(
        nodes: Vec<usize>,
        geometry: Box<dyn Geometry>,
        physics: Box<dyn Physics>,
        material: Arc<Material>,
    ) -> Result<Self> {
        if nodes.len() != geometry.n_nodes() {
            return Err(Error::dimension("element node indices", geometry.n_nodes(), nodes.len()));
        }
        physics.check_material(&material)?;

        debug!(
            "created {} element on nodes {:?} ({})",
            physics.name(),
            nodes,
            material
        );

        Ok(Self {
            nodes,
            geometry,
            physics,
            material,
        })
    }

    /// Bind a geometry to plane stress membrane physics.
    pub fn membrane(
        nodes: Vec<usize>,
        geometry: Box<dyn Geometry>,
        material: Arc<Material>,
    ) -> Result<Self> {
        Self::new(nodes, geometry, Box::new(MembranePhysics), material)
    }

    /// Number of nodes in this element.
    pub fn n_nodes(&self) -> usize {
        self.geometry.n_nodes()
    }

    /// Degrees of freedom per node (2 for membranes).
    pub fn dofs_per_node(&self) -> usize {
        self.physics.dofs_per_node()
    }

    /// Total degrees of freedom for this element.
    pub fn n_dofs(&self) -> usize {
        self.n_nodes() * self.dofs_per_node()
    }

    /// Global node indices.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Global DOF indices in element DOF order: node * dofs_per_node + d.
    pub fn dof_indices(&self) -> Vec<usize> {
        let dofs_per_node = self.dofs_per_node();
        self.nodes
            .iter()
            .flat_map(|&node| (0..dofs_per_node).map(move |d| node * dofs_per_node + d))
            .collect()
    }

    /// The bound geometry.
    pub fn geometry(&self) -> &dyn Geometry {
        self.geometry.as_ref()
    }

    /// The bound physics strategy.
    pub fn physics(&self) -> &dyn Physics {
        self.physics.as_ref()
    }

    /// The bound material.
    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }

    /// Re-bind the material.
    ///
    /// # Errors
    ///
    /// [`Error::IncompatibleMaterial`] if the physics does not accept the
    /// material kind. The element keeps its previous material in that case.
    pub fn set_material(&mut self, material: Arc<Material>) -> Result<()> {
        if let Err(err) = self.physics.check_material(&material) {
            debug!("rejected material rebind on nodes {:?}: {}", self.nodes, err);
            return Err(err);
        }
        debug!("rebound nodes {:?} to {}", self.nodes, material);
        self.material = material;
        Ok(())
    }

    /// Strain-displacement matrix B (3 × n_dofs) from caller-supplied global
    /// shape function derivatives (n_nodes × 2).
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the derivative matrix has the wrong shape.
    pub fn strain_displacement_matrix(&self, shape_dgl: &DMatrix<f64>) -> Result<DMatrix<f64>> {
        self.physics
            .strain_displacement_matrix(shape_dgl, self.n_nodes())
    }

    /// Strain-displacement matrix B at natural coordinates `point`, using the
    /// geometry's own derivatives.
    pub fn strain_displacement_matrix_at(&self, point: &Point2) -> Result<DMatrix<f64>> {
        let shape_dgl = self.geometry.shape_function_derivatives(point)?;
        self.strain_displacement_matrix(&shape_dgl)
    }

    /// Constitutive matrix D of the bound material.
    pub fn material_matrix(&self) -> Result<MaterialMatrix> {
        self.physics.material_matrix(&self.material)
    }

    /// Consistent mass matrix (n_dofs × n_dofs).
    pub fn mass_matrix(&self) -> Result<DMatrix<f64>> {
        trace!("mass matrix for element on nodes {:?}", self.nodes);
        self.physics.mass_matrix(self.geometry.as_ref(), &self.material)
    }

    /// Stiffness matrix K = ∫ Bᵀ D B h dA (n_dofs × n_dofs).
    pub fn stiffness_matrix(&self) -> Result<DMatrix<f64>> {
        trace!("stiffness matrix for element on nodes {:?}", self.nodes);
        self.physics
            .stiffness_matrix(self.geometry.as_ref(), &self.material)
    }

    /// Element area.
    pub fn area(&self) -> Result<f64> {
        self.geometry.integrate(&|_| 1.0)
    }

    /// Strain at natural coordinates `point` for element displacements
    /// `[u1, v1, u2, v2, ...]`.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if `displacements.len() != n_dofs`.
    pub fn strain_at(&self, point: &Point2, displacements: &[f64]) -> Result<StrainVector> {
        if displacements.len() != self.n_dofs() {
            return Err(Error::dimension(
                "element displacements",
                self.n_dofs(),
                displacements.len(),
            ));
        }
        let b = self.strain_displacement_matrix_at(point)?;
        let strain = b * DVector::from_row_slice(displacements);
        Ok(StrainVector(Vector3::new(strain[0], strain[1], strain[2])))
    }

    /// In-plane stress at natural coordinates `point`: σ = D ε.
    pub fn stress_at(&self, point: &Point2, displacements: &[f64]) -> Result<StressVector> {
        let strain = self.strain_at(point, displacements)?;
        let d = self.material_matrix()?;
        Ok(StressVector(d * strain.0))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} element, {} nodes {:?}, {} DOFs/node, material: {}",
            self.physics.name(),
            self.n_nodes(),
            self.nodes,
            self.dofs_per_node(),
            self.material
        )
    }
}
