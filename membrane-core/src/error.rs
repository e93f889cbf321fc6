//! Error types for membrane element computations.

use crate::material::MaterialKind;
use thiserror::Error;

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while evaluating element physics.
///
/// Every error is raised at the point of detection. Nothing is retried and no
/// partially filled matrix is ever returned alongside an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Elastic constants outside their physical domain.
    #[error("invalid material: {0}")]
    InvalidMaterial(String),

    /// Node or DOF count disagreement between geometry, physics and caller data.
    #[error("dimension mismatch in {context}: expected {expected}, found {found}")]
    DimensionMismatch {
        /// What was being checked (e.g. "shape function derivatives").
        context: &'static str,
        /// Size required by the element.
        expected: usize,
        /// Size actually supplied.
        found: usize,
    },

    /// Degenerate or inverted element detected during integration.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Material kind not accepted by the bound physics strategy.
    #[error("incompatible material: physics expects {expected}, got {found}")]
    IncompatibleMaterial {
        /// Kind the physics strategy accepts.
        expected: MaterialKind,
        /// Kind that was offered.
        found: MaterialKind,
    },
}

impl Error {
    pub(crate) fn dimension(context: &'static str, expected: usize, found: usize) -> Self {
        Error::DimensionMismatch {
            context,
            expected,
            found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = Error::dimension("shape function derivatives", 3, 4);
        assert_eq!(
            err.to_string(),
            "dimension mismatch in shape function derivatives: expected 3, found 4"
        );
    }

    #[test]
    fn test_incompatible_material_message() {
        let err = Error::IncompatibleMaterial {
            expected: MaterialKind::PlaneStress,
            found: MaterialKind::PlaneStrain,
        };
        assert_eq!(
            err.to_string(),
            "incompatible material: physics expects plane stress, got plane strain"
        );
    }
}
