//! Linear springs between particle handles.
//!
//! Springs never own particles. They hold two [`ParticleId`]s into the
//! [`Cloth`](crate::Cloth) arena and a rest length fixed at build time.

use serde::{Deserialize, Serialize};
use tracing::trace;

use drape_math::vector::try_normalize;
use drape_math::Vec3;
use drape_types::{DrapeError, DrapeResult, ParticleId, Scalar};

use crate::particle::Particle;

/// Topological role of a spring in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpringKind {
    /// Horizontal or vertical neighbour.
    Structural,
    /// Diagonal neighbour, omitted for soft cloth.
    Shear,
}

/// A spring connecting two particles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    pub a: ParticleId,
    pub b: ParticleId,
    /// Zero-force separation. Always positive.
    pub rest_length: Scalar,
    pub kind: SpringKind,
}

/// Outcome of evaluating one spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpringForce {
    /// Force added to `b`; `a` received its negation.
    Applied(Vec3),
    /// Endpoints coincide; no direction exists and nothing was applied.
    Degenerate,
}

impl Spring {
    /// Creates a spring, rejecting self-loops and non-positive rest lengths.
    pub fn new(a: ParticleId, b: ParticleId, rest_length: Scalar, kind: SpringKind) -> DrapeResult<Self> {
        if a == b {
            return Err(DrapeError::InvalidGrid(format!(
                "spring connects particle {} to itself",
                a.0
            )));
        }
        if !(rest_length > 0.0 && rest_length.is_finite()) {
            return Err(DrapeError::InvalidGrid(format!(
                "spring rest length must be positive, got {rest_length}"
            )));
        }
        Ok(Self { a, b, rest_length, kind })
    }

    /// Current length of the spring.
    pub fn length(&self, particles: &[Particle]) -> Scalar {
        particles[self.a.index()]
            .position
            .distance(particles[self.b.index()].position)
    }
}

/// Applies a Hooke spring between `a` and `b`.
///
/// `stretch = |a - b| - rest_length` (positive when stretched). The force
/// `k * stretch` is clamped to `±max_force` and directed along
/// `normalize(a - b)`; `b` receives `+F`, `a` receives `-F`, so a
/// stretched spring pulls both ends together. Locked endpoints ignore
/// their share.
pub fn spring_force(
    a: &mut Particle,
    b: &mut Particle,
    rest_length: Scalar,
    spring_constant: Scalar,
    max_force: Scalar,
) -> SpringForce {
    let separation = a.position - b.position;

    let Some(direction) = try_normalize(separation) else {
        trace!(
            position = ?a.position,
            "coincident spring endpoints, skipping force this substep"
        );
        return SpringForce::Degenerate;
    };

    let stretch = separation.length() - rest_length;
    let magnitude = (spring_constant * stretch).clamp(-max_force, max_force);
    let force = direction * magnitude;

    b.apply_force(force);
    a.apply_force(-force);
    SpringForce::Applied(force)
}
