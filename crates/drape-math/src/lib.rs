//! # drape-math
//!
//! Geometry primitives for the drape cloth kernel.
//!
//! Provides:
//! - `Vec3`, the double-precision `glam` vector used for all positions
//! - Vector helpers with explicit degenerate-case handling
//! - Axis-aligned boxes and the swept intersection queries the
//!   colliders build on (segment vs. sphere, segment vs. AABB slabs)

pub mod aabb;
pub mod axis;
pub mod intersect;
pub mod vector;

// Re-export glam's f64 vector as the canonical drape vector.
pub use glam::DVec3 as Vec3;

pub use aabb::Aabb;
pub use axis::Axis;
pub use intersect::{segment_aabb, segment_sphere, SegmentHit};
