//! Analytical cone collision.
//!
//! The cone opens from `apex` along `axis`: at axial distance `t` the
//! allowed radius is `t / height * base_radius`. Particles about to
//! enter are pushed to the surface along the radial direction and
//! bounce off with a partial restitution.

use serde::{Deserialize, Serialize};
use tracing::trace;

use drape_cloth::Particle;
use drape_math::vector::{any_perpendicular, normalize_or, try_normalize};
use drape_math::Vec3;
use drape_types::constants::{CONE_RESTITUTION, CONTACT_EPSILON, EPSILON};
use drape_types::Scalar;

use crate::collider::{Collide, Contact, ContactPhase, ResolutionMode};
use crate::render::ShapeRenderer;

/// Analytical cone collider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConeCollider {
    /// Tip of the cone.
    pub apex: Vec3,
    /// Direction from the apex toward the base. Normalized on use.
    #[serde(default = "default_axis")]
    pub axis: Vec3,
    /// Distance from apex to base along `axis`.
    pub height: Scalar,
    /// Radius of the base disc.
    pub base_radius: Scalar,
    #[serde(default)]
    pub mode: ResolutionMode,
    /// Bounce factor for the normal velocity.
    #[serde(default = "default_restitution")]
    pub restitution: Scalar,
}

/// Cones open toward the canvas floor (+y is down).
fn default_axis() -> Vec3 {
    Vec3::Y
}

fn default_restitution() -> Scalar {
    CONE_RESTITUTION
}

impl ConeCollider {
    /// Creates a cone opening along +y from `apex`.
    pub fn new(apex: Vec3, base_radius: Scalar, height: Scalar) -> Self {
        Self {
            apex,
            axis: default_axis(),
            height,
            base_radius,
            mode: ResolutionMode::Hard,
            restitution: CONE_RESTITUTION,
        }
    }

    pub fn with_axis(mut self, axis: Vec3) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_mode(mut self, mode: ResolutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_restitution(mut self, restitution: Scalar) -> Self {
        self.restitution = restitution;
        self
    }

    /// Unit axis, falling back to +y for a zero vector.
    #[inline]
    pub fn unit_axis(&self) -> Vec3 {
        normalize_or(self.axis, default_axis())
    }

    /// Allowed radius at axial distance `t` from the apex.
    #[inline]
    pub fn radius_at(&self, t: Scalar) -> Scalar {
        t / self.height * self.base_radius
    }

    /// Outward radial normal and penetration depth of `point`, if inside.
    pub fn probe(&self, point: Vec3) -> Option<Contact> {
        if self.height <= EPSILON {
            return None;
        }

        let axis = self.unit_axis();
        let local = point - self.apex;
        let t = local.dot(axis);
        if t < 0.0 || t > self.height {
            return None;
        }

        let radial = local - axis * t;
        let allowed = self.radius_at(t);
        let dist = radial.length();
        if dist >= allowed {
            return None;
        }

        let normal = try_normalize(radial).unwrap_or_else(|| {
            trace!(apex = ?self.apex, "particle on cone axis, using fallback normal");
            any_perpendicular(axis)
        });
        Some(Contact {
            normal,
            depth: allowed - dist,
        })
    }
}

impl Collide for ConeCollider {
    fn phase(&self) -> ContactPhase {
        ContactPhase::Swept
    }

    fn check_collision(&self, particle: &Particle) -> bool {
        self.probe(particle.next_point()).is_some()
    }

    /// Pushes the particle to the surface and reflects the inward
    /// radial velocity scaled by `restitution`.
    fn resolve_collision(&self, particle: &mut Particle) -> Option<Contact> {
        let contact = self.probe(particle.next_point())?;
        let normal = contact.normal;

        if self.mode == ResolutionMode::Hard {
            particle.position += normal * (contact.depth + CONTACT_EPSILON);
        }

        let vn = particle.velocity.dot(normal);
        if vn < 0.0 {
            particle.velocity -= normal * ((1.0 + self.restitution) * vn);
        }
        particle.cancel_inward(normal);

        Some(contact)
    }

    fn draw(&self, renderer: &mut dyn ShapeRenderer) {
        renderer.cone(self.apex, self.unit_axis(), self.height, self.base_radius);
    }
}
