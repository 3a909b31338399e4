//! Analytical sphere collision with continuous (swept) detection.
//!
//! Fast particles can cross a sphere within one substep. Instead of
//! testing only where the particle ends up, the collider intersects the
//! segment `position → next_point()` with the sphere and stops the
//! particle at the first surface crossing.

use serde::{Deserialize, Serialize};
use tracing::trace;

use drape_cloth::Particle;
use drape_math::vector::normalize_or;
use drape_math::{segment_sphere, Vec3};
use drape_types::constants::{CONTACT_EPSILON, PENETRATION_TOLERANCE, SPHERE_RESTITUTION};
use drape_types::Scalar;

use crate::collider::{Collide, Contact, ContactPhase, ResolutionMode};
use crate::render::ShapeRenderer;

/// Analytical sphere collider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereCollider {
    /// Center of the sphere.
    pub center: Vec3,
    /// Radius of the sphere.
    pub radius: Scalar,
    #[serde(default)]
    pub mode: ResolutionMode,
    /// Fraction of tangential velocity kept after a contact.
    #[serde(default = "default_restitution")]
    pub restitution: Scalar,
}

fn default_restitution() -> Scalar {
    SPHERE_RESTITUTION
}

/// Normal used when a particle sits exactly on the center: canvas up.
const CENTER_FALLBACK_NORMAL: Vec3 = Vec3::NEG_Y;

impl SphereCollider {
    /// Creates a new sphere collider.
    pub fn new(center: Vec3, radius: Scalar) -> Self {
        Self {
            center,
            radius,
            mode: ResolutionMode::Hard,
            restitution: SPHERE_RESTITUTION,
        }
    }

    pub fn with_mode(mut self, mode: ResolutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_restitution(mut self, restitution: Scalar) -> Self {
        self.restitution = restitution;
        self
    }

    /// Strict containment of a point.
    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        point.distance(self.center) < self.radius
    }

    fn outward_normal(&self, point: Vec3) -> Vec3 {
        let offset = point - self.center;
        if offset.length_squared() == 0.0 {
            trace!(center = ?self.center, "particle at sphere center, using fallback normal");
        }
        normalize_or(offset, CENTER_FALLBACK_NORMAL)
    }

    /// Pushes an already-overlapping particle back out along the normal.
    ///
    /// Shallow overlaps (below `PENETRATION_TOLERANCE`) only lose their
    /// inward velocity. Returns the overlap found, if any.
    pub fn resolve_penetration(&self, particle: &mut Particle) -> Option<Contact> {
        let dist = particle.position.distance(self.center);
        if dist >= self.radius {
            return None;
        }

        let normal = self.outward_normal(particle.position);
        let depth = self.radius - dist;

        match self.mode {
            ResolutionMode::Hard => {
                if depth > PENETRATION_TOLERANCE {
                    particle.position += normal * (depth + CONTACT_EPSILON);
                    particle.velocity *= self.restitution;
                } else {
                    particle.cancel_inward(normal);
                }
            }
            ResolutionMode::Soft => {
                particle.cancel_inward(normal);
                particle.velocity *= self.restitution;
            }
        }

        Some(Contact { normal, depth })
    }

    /// Swept resolution along `position → next_point()`.
    ///
    /// Finds the first crossing `t`, backs off by `CONTACT_EPSILON` along
    /// the path, removes the normal velocity, damps the remainder and
    /// nudges the particle `CONTACT_EPSILON` off the surface. In soft mode
    /// only the velocity is corrected. Paths starting inside are skipped.
    pub fn resolve_swept(&self, particle: &mut Particle) -> Option<Contact> {
        let start = particle.position;
        if self.contains(start) {
            return None;
        }
        let end = particle.next_point();
        let t = segment_sphere(start, end, self.center, self.radius)?;

        // A hit implies a non-degenerate segment.
        let path_len = start.distance(end);
        let safe_t = (t - CONTACT_EPSILON / path_len).max(0.0);
        let contact_point = start.lerp(end, safe_t);
        let normal = self.outward_normal(contact_point);

        let along = particle.velocity.dot(normal);
        particle.velocity -= normal * along;
        particle.velocity *= self.restitution;
        particle.cancel_inward(normal);

        if self.mode == ResolutionMode::Hard {
            particle.position = contact_point + normal * CONTACT_EPSILON;
        }

        let depth = (self.radius - end.distance(self.center)).max(0.0);
        Some(Contact { normal, depth })
    }
}

impl Collide for SphereCollider {
    fn phase(&self) -> ContactPhase {
        ContactPhase::Swept
    }

    fn check_collision(&self, particle: &Particle) -> bool {
        self.contains(particle.position)
            || segment_sphere(particle.position, particle.next_point(), self.center, self.radius).is_some()
    }

    /// Penetration fallback first, then the swept test from the
    /// corrected position.
    fn resolve_collision(&self, particle: &mut Particle) -> Option<Contact> {
        let penetration = self.resolve_penetration(particle);
        let swept = self.resolve_swept(particle);
        match (penetration, swept) {
            (Some(p), Some(s)) => Some(if p.depth >= s.depth { p } else { s }),
            (p, s) => p.or(s),
        }
    }

    fn draw(&self, renderer: &mut dyn ShapeRenderer) {
        renderer.sphere(self.center, self.radius);
    }
}
