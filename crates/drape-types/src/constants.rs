//! Simulation defaults and contact constants.
//!
//! Units are canvas units per substep: forces are applied directly as
//! velocity increments and the y axis points down the screen.

use crate::Scalar;

/// Default spring constant (per frame, divided by the substep count).
pub const DEFAULT_SPRING_CONSTANT: Scalar = 0.37;

/// Default per-substep velocity damping factor.
pub const DEFAULT_DAMPING: Scalar = 0.99;

/// Damping used while a particle is flagged inside a collider.
pub const DEFAULT_CONTACT_DAMPING: Scalar = 0.1;

/// Upper bound on the magnitude of a single spring force.
pub const MAX_SPRING_FORCE: Scalar = 10_000.0;

/// Number of physics substeps per rendered frame.
pub const DEFAULT_SUB_STEPS: u32 = 5;

/// Default downward gravity (y grows downward on the canvas).
pub const DEFAULT_GRAVITY: [Scalar; 3] = [0.0, 0.05, 0.0];

/// Distance a resolved particle is kept away from a collider surface.
pub const CONTACT_EPSILON: Scalar = 0.001;

/// Penetration up to this depth is not pushed out, only stopped.
pub const PENETRATION_TOLERANCE: Scalar = 0.01;

/// Threshold under which a vector is treated as zero length.
pub const EPSILON: Scalar = 1.0e-9;

/// Velocity retained after a sphere contact.
pub const SPHERE_RESTITUTION: Scalar = 0.95;

/// Velocity retained after a box contact.
pub const BOX_RESTITUTION: Scalar = 0.9;

/// Velocity retained after a cylinder contact.
pub const CYLINDER_RESTITUTION: Scalar = 0.95;

/// Bounce factor for the normal velocity at a cone contact.
pub const CONE_RESTITUTION: Scalar = 0.5;

/// Default spacing between neighbouring grid particles.
pub const DEFAULT_SPACING: Scalar = 10.0;

/// Fixed structural rest length used by the classic grid.
pub const DEFAULT_REST_LENGTH: Scalar = 20.0;

/// Largest particle count a generated grid may have.
pub const MAX_PARTICLES: usize = 1 << 20;
