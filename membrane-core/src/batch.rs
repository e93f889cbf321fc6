//! Parallel element evaluation.
//!
//! Computes element stiffness and mass matrices for many elements using Rayon.
//! Every element writes only its own output, so no locking is needed. Merging
//! the results into a global system is left to the caller.

use crate::element::Element;
use crate::error::Result;
use log::debug;
use nalgebra::DMatrix;
use rayon::prelude::*;

/// Matrices for a single element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementMatrices {
    /// Element index in the input slice.
    pub element_id: usize,
    /// Global DOF indices, in element DOF order.
    pub dof_indices: Vec<usize>,
    /// Element stiffness matrix.
    pub stiffness: DMatrix<f64>,
    /// Consistent mass matrix.
    pub mass: DMatrix<f64>,
}

/// Evaluate stiffness and mass matrices for all elements in parallel.
///
/// Results are returned in input order.
///
/// # Errors
///
/// Returns the error of a failing element; no partial result is produced.
pub fn element_matrices(elements: &[Element]) -> Result<Vec<ElementMatrices>> {
    debug!("evaluating matrices for {} elements", elements.len());

    elements
        .par_iter()
        .enumerate()
        .map(|(element_id, element)| {
            Ok(ElementMatrices {
                element_id,
                dof_indices: element.dof_indices(),
                stiffness: element.stiffness_matrix()?,
                mass: element.mass_matrix()?,
            })
        })
        .collect()
}

/// Evaluate only the mass matrices for all elements in parallel.
pub fn mass_matrices(elements: &[Element]) -> Result<Vec<DMatrix<f64>>> {
    elements.par_iter().map(Element::mass_matrix).collect()
}
