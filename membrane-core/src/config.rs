//! Integration settings used by the built-in geometry providers.

/// Quadrature configuration for geometry providers.
///
/// The physics never picks an integration rule; each geometry reads the
/// rule size it needs from here when it is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureConfig {
    /// Points for linear triangles (1, 3, 4 or 6).
    pub tri3_points: usize,
    /// Points per direction for bilinear quadrilaterals (1, 2 or 3).
    pub quad4_points_per_axis: usize,
    /// Points for quadratic triangles (1, 3, 4 or 6). Fewer than 6 under-integrates the mass.
    pub tri6_points: usize,
    /// Smallest Jacobian determinant accepted at an integration point.
    /// Anything at or below this marks the element as degenerate or inverted.
    pub min_jacobian: f64,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            // Degree-2 rule: integrates the Tri3 mass integrand exactly
            tri3_points: 3,
            quad4_points_per_axis: 2,
            // Degree-4 rule: integrates the Tri6 mass integrand exactly
            tri6_points: 6,
            min_jacobian: 0.0,
        }
    }
}
