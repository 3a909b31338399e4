//! # drape-types
//!
//! Shared types, identifiers, error types, and simulation constants
//! for the drape cloth simulator.
//!
//! This crate has zero domain logic. It defines the vocabulary
//! that all other drape crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{DrapeError, DrapeResult};
pub use ids::{ParticleId, SpringId};
pub use scalar::Scalar;
