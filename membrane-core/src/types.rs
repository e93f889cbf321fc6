//! Core data types for membrane computations.
//!
//! This module defines:
//! - Planar points (nodal positions and natural coordinates)
//! - In-plane strain and stress vectors in Voigt notation
//! - The 3x3 constitutive matrix alias

use nalgebra::{Matrix2, Matrix3, Vector2, Vector3};

/// A point in the element plane, either global (x, y) or natural (ξ, η).
pub type Point2 = Vector2<f64>;

/// Constitutive matrix mapping [ε_xx, ε_yy, γ_xy] to [σ_xx, σ_yy, τ_xy].
pub type MaterialMatrix = Matrix3<f64>;

/// In-plane strain in Voigt notation.
///
/// Components are ordered as: [ε_xx, ε_yy, γ_xy]
/// where γ_xy = ∂u/∂y + ∂v/∂x is the engineering shear strain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrainVector(pub Vector3<f64>);

impl StrainVector {
    /// Create a strain vector from Voigt components.
    pub fn new(components: [f64; 3]) -> Self {
        Self(Vector3::from_row_slice(&components))
    }

    /// Surface dilatation ε_xx + ε_yy.
    pub fn areal(&self) -> f64 {
        self.0[0] + self.0[1]
    }

    /// Symmetric 2x2 strain tensor (off-diagonal terms are γ/2).
    pub fn to_matrix(&self) -> Matrix2<f64> {
        let e = &self.0;
        Matrix2::new(
            e[0],       e[2] / 2.0,
            e[2] / 2.0, e[1],
        )
    }
}

/// In-plane stress in Voigt notation: [σ_xx, σ_yy, τ_xy].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressVector(pub Vector3<f64>);

impl StressVector {
    /// Create a stress vector from Voigt components.
    pub fn new(components: [f64; 3]) -> Self {
        Self(Vector3::from_row_slice(&components))
    }

    /// von Mises equivalent stress for a plane stress state (σ_zz = 0).
    pub fn von_mises(&self) -> f64 {
        let s_xx = self.0[0];
        let s_yy = self.0[1];
        let t_xy = self.0[2];
        (s_xx * s_xx - s_xx * s_yy + s_yy * s_yy + 3.0 * t_xy * t_xy).sqrt()
    }

    /// Symmetric 2x2 stress tensor.
    pub fn to_matrix(&self) -> Matrix2<f64> {
        let s = &self.0;
        Matrix2::new(
            s[0], s[2],
            s[2], s[1],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_von_mises_uniaxial() {
        let stress = StressVector::new([100.0, 0.0, 0.0]);
        assert_relative_eq!(stress.von_mises(), 100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_von_mises_pure_shear() {
        // von Mises = √3 * τ
        let stress = StressVector::new([0.0, 0.0, 100.0]);
        assert_relative_eq!(stress.von_mises(), 100.0 * 3.0_f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn test_von_mises_equibiaxial() {
        let stress = StressVector::new([50.0, 50.0, 0.0]);
        assert_relative_eq!(stress.von_mises(), 50.0, epsilon = 1e-10);
    }

    #[test]
    fn test_strain_matrix_halves_shear() {
        let strain = StrainVector::new([0.001, 0.002, 0.004]);
        let m = strain.to_matrix();
        assert_relative_eq!(m[(0, 1)], 0.002, epsilon = 1e-15);
        assert_relative_eq!(m[(1, 0)], 0.002, epsilon = 1e-15);
        assert_relative_eq!(strain.areal(), 0.003, epsilon = 1e-15);
    }
}
