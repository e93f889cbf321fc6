//! Material descriptors.
//!
//! A [`LinearElasticity`] holds the elastic constants of one isotropic
//! material. It is wrapped in a [`Material`] variant that records which 2D
//! idealisation the constants are meant for, so a physics strategy can refuse
//! a material of the wrong kind when it is bound to an element.
//!
//! Elements share materials through `Arc<Material>`; a descriptor is never
//! mutated once built.

use crate::error::{Error, Result};
use std::fmt;

/// Isotropic linear elastic constants for a thin sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearElasticity {
    youngs_modulus: f64,
    poissons_ratio: f64,
    thickness: f64,
    density: f64,
}

impl LinearElasticity {
    /// Create a new isotropic linear elastic descriptor with unit thickness
    /// and zero density.
    ///
    /// # Arguments
    ///
    /// * `youngs_modulus` - Young's modulus E (Pa), must be positive
    /// * `poissons_ratio` - Poisson's ratio ν (dimensionless, -1 < ν < 0.5)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMaterial`] if the constants are physically invalid.
    pub fn new(youngs_modulus: f64, poissons_ratio: f64) -> Result<Self> {
        if !youngs_modulus.is_finite() || youngs_modulus <= 0.0 {
            return Err(Error::InvalidMaterial(
                "Young's modulus must be positive".into(),
            ));
        }
        if !poissons_ratio.is_finite() || poissons_ratio <= -1.0 || poissons_ratio >= 0.5 {
            return Err(Error::InvalidMaterial(
                "Poisson's ratio must be in range (-1, 0.5)".into(),
            ));
        }
        Ok(Self {
            youngs_modulus,
            poissons_ratio,
            thickness: 1.0,
            density: 0.0,
        })
    }

    /// Set the sheet thickness h (must be positive).
    pub fn with_thickness(mut self, thickness: f64) -> Result<Self> {
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(Error::InvalidMaterial("Thickness must be positive".into()));
        }
        self.thickness = thickness;
        Ok(self)
    }

    /// Set the mass density ρ (kg/m³, must be non-negative).
    pub fn with_density(mut self, density: f64) -> Result<Self> {
        if !density.is_finite() || density < 0.0 {
            return Err(Error::InvalidMaterial(
                "Density must be non-negative".into(),
            ));
        }
        self.density = density;
        Ok(self)
    }

    /// Young's modulus E (Pa).
    pub fn youngs_modulus(&self) -> f64 {
        self.youngs_modulus
    }

    /// Poisson's ratio ν.
    pub fn poissons_ratio(&self) -> f64 {
        self.poissons_ratio
    }

    /// Sheet thickness h.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Mass density ρ (kg/m³).
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Mass per unit area ρ·h.
    pub fn areal_density(&self) -> f64 {
        self.density * self.thickness
    }

    /// Shear modulus G = E / (2(1 + ν)).
    pub fn shear_modulus(&self) -> f64 {
        self.youngs_modulus / (2.0 * (1.0 + self.poissons_ratio))
    }

    /// Bulk modulus K = E / (3(1 - 2ν)).
    pub fn bulk_modulus(&self) -> f64 {
        self.youngs_modulus / (3.0 * (1.0 - 2.0 * self.poissons_ratio))
    }
}

/// Common material presets (unit thickness).
impl LinearElasticity {
    /// Structural steel (E = 200 GPa, ν = 0.3, ρ = 7850 kg/m³).
    pub fn steel() -> Self {
        Self {
            youngs_modulus: 200e9,
            poissons_ratio: 0.3,
            thickness: 1.0,
            density: 7850.0,
        }
    }

    /// Aluminum 6061-T6 (E = 68.9 GPa, ν = 0.33, ρ = 2700 kg/m³).
    pub fn aluminum() -> Self {
        Self {
            youngs_modulus: 68.9e9,
            poissons_ratio: 0.33,
            thickness: 1.0,
            density: 2700.0,
        }
    }
}

impl fmt::Display for LinearElasticity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "E = {:e}, nu = {}, h = {}, rho = {}",
            self.youngs_modulus, self.poissons_ratio, self.thickness, self.density
        )
    }
}

/// The 2D idealisation a material descriptor is intended for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    /// Thin sheet, σ_zz = 0.
    PlaneStress,
    /// Thick body, ε_zz = 0.
    PlaneStrain,
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialKind::PlaneStress => f.write_str("plane stress"),
            MaterialKind::PlaneStrain => f.write_str("plane strain"),
        }
    }
}

/// A material descriptor tagged with its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    /// Linear elastic plane stress material (membranes).
    PlaneStress(LinearElasticity),
    /// Linear elastic plane strain material.
    PlaneStrain(LinearElasticity),
}

impl Material {
    /// Kind tag used for compatibility checks.
    pub fn kind(&self) -> MaterialKind {
        match self {
            Material::PlaneStress(_) => MaterialKind::PlaneStress,
            Material::PlaneStrain(_) => MaterialKind::PlaneStrain,
        }
    }

    /// Elastic constants regardless of kind.
    pub fn linear_elasticity(&self) -> &LinearElasticity {
        match self {
            Material::PlaneStress(m) | Material::PlaneStrain(m) => m,
        }
    }

    /// Elastic constants if this is a plane stress material.
    pub fn as_plane_stress(&self) -> Option<&LinearElasticity> {
        match self {
            Material::PlaneStress(m) => Some(m),
            Material::PlaneStrain(_) => None,
        }
    }

    /// Elastic constants if this is a plane strain material.
    pub fn as_plane_strain(&self) -> Option<&LinearElasticity> {
        match self {
            Material::PlaneStrain(m) => Some(m),
            Material::PlaneStress(_) => None,
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind(), self.linear_elasticity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_material_creation() {
        let mat = LinearElasticity::new(210e9, 0.3)
            .and_then(|m| m.with_thickness(0.01))
            .and_then(|m| m.with_density(7850.0))
            .unwrap();
        assert_relative_eq!(mat.youngs_modulus(), 210e9);
        assert_relative_eq!(mat.poissons_ratio(), 0.3);
        assert_relative_eq!(mat.thickness(), 0.01);
        assert_relative_eq!(mat.density(), 7850.0);
        assert_relative_eq!(mat.areal_density(), 78.5, epsilon = 1e-12);
    }

    #[test]
    fn test_defaults() {
        let mat = LinearElasticity::new(1.0, 0.0).unwrap();
        assert_eq!(mat.thickness(), 1.0);
        assert_eq!(mat.density(), 0.0);
    }

    #[test]
    fn test_invalid_youngs_modulus() {
        assert!(matches!(
            LinearElasticity::new(-100e9, 0.3),
            Err(Error::InvalidMaterial(_))
        ));
        assert!(LinearElasticity::new(0.0, 0.3).is_err());
        assert!(LinearElasticity::new(f64::NAN, 0.3).is_err());
    }

    #[test]
    fn test_invalid_poissons_ratio() {
        assert!(LinearElasticity::new(200e9, 0.5).is_err());
        assert!(LinearElasticity::new(200e9, -1.0).is_err());
        assert!(LinearElasticity::new(200e9, 1.0).is_err());
        assert!(LinearElasticity::new(200e9, -0.99).is_ok());
    }

    #[test]
    fn test_invalid_thickness_and_density() {
        let base = LinearElasticity::steel();
        assert!(base.clone().with_thickness(0.0).is_err());
        assert!(base.clone().with_thickness(-1.0).is_err());
        assert!(base.clone().with_density(-1.0).is_err());
        assert!(base.with_density(0.0).is_ok());
    }

    #[test]
    fn test_shear_modulus() {
        let mat = LinearElasticity::steel();
        let expected_g = 200e9 / (2.0 * 1.3);
        assert_relative_eq!(mat.shear_modulus(), expected_g, epsilon = 1e-6);
    }

    #[test]
    fn test_bulk_modulus() {
        let mat = LinearElasticity::steel();
        let expected_k = 200e9 / (3.0 * 0.4);
        assert_relative_eq!(mat.bulk_modulus(), expected_k, epsilon = 1e-6);
    }

    #[test]
    fn test_material_kind_tags() {
        let stress = Material::PlaneStress(LinearElasticity::aluminum());
        let strain = Material::PlaneStrain(LinearElasticity::aluminum());
        assert_eq!(stress.kind(), MaterialKind::PlaneStress);
        assert_eq!(strain.kind(), MaterialKind::PlaneStrain);
        assert!(stress.as_plane_stress().is_some());
        assert!(stress.as_plane_strain().is_none());
        assert!(strain.as_plane_strain().is_some());
        assert_eq!(stress.linear_elasticity(), strain.linear_elasticity());
    }

    #[test]
    fn test_display() {
        let mat = Material::PlaneStress(LinearElasticity::new(1e6, 0.25).unwrap());
        let text = mat.to_string();
        assert!(text.starts_with("plane stress"));
        assert!(text.contains("nu = 0.25"));
    }
}
