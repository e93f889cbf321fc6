//! membrane-core - 2D membrane element physics
//!
//! Per-element quantities for planar elastic membranes with two in-plane
//! displacement DOFs per node:
//! - Strain-displacement matrix B
//! - Plane stress material matrix D
//! - Consistent mass matrix M (and stiffness K = ∫ Bᵀ D B h dA)
//!
//! Global assembly, boundary conditions and solving belong to the caller.
//!
//! # Architecture
//!
//! The crate is designed around these core abstractions:
//!
//! - [`Geometry`] trait: nodal positions, shape functions and integration
//! - [`Physics`] trait: turns geometry data and a material into matrices
//! - [`Element`]: binds one geometry, one physics strategy and a shared [`Material`]
//!
//! Any physics can be combined with any geometry; the material kind is
//! checked when it is bound to an element.

pub mod types;
pub mod config;
pub mod material;
pub mod geometry;
pub mod physics;
pub mod element;
pub mod batch;
pub mod error;

pub use types::{MaterialMatrix, Point2, StrainVector, StressVector};
pub use config::QuadratureConfig;
pub use material::{LinearElasticity, Material, MaterialKind};
pub use geometry::{Geometry, Quad4, Tri3, Tri6};
pub use physics::{MembranePhysics, Physics, PlaneStrainPhysics};
pub use element::Element;
pub use error::{Error, Result};
