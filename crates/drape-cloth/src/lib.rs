//! # drape-cloth
//!
//! Particle/spring cloth representation.
//!
//! ## Key Types
//!
//! - [`Particle`]: point mass with velocity, pending acceleration and
//!   per-substep bookkeeping flags
//! - [`Spring`]: damped linear spring between two particle handles
//! - [`Cloth`]: arena owning all particles and springs of a scene
//! - [`grid::build_grid`]: regular grid generator with structural and
//!   shear springs

pub mod cloth;
pub mod grid;
pub mod particle;
pub mod spring;

pub use cloth::Cloth;
pub use grid::{build_grid, GridParams, PinPattern, RestLength};
pub use particle::Particle;
pub use spring::{spring_force, Spring, SpringForce, SpringKind};
