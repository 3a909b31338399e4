//! Analytical cylinder collision.
//!
//! A finite cylinder centred on `origin` and aligned with a coordinate
//! axis. Containment and resolution run on the particle's prospective
//! next position, so contact is handled before the particle enters.

use serde::{Deserialize, Serialize};
use tracing::trace;

use drape_cloth::Particle;
use drape_math::vector::{any_perpendicular, try_normalize};
use drape_math::{Axis, Vec3};
use drape_types::constants::{CONTACT_EPSILON, CYLINDER_RESTITUTION};
use drape_types::Scalar;

use crate::collider::{Collide, Contact, ContactPhase, ResolutionMode};
use crate::render::ShapeRenderer;

/// Analytical cylinder collider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylinderCollider {
    /// Center of the cylinder.
    pub origin: Vec3,
    pub radius: Scalar,
    /// Full length along `axis`; the cylinder spans `±height / 2`.
    pub height: Scalar,
    #[serde(default = "default_axis")]
    pub axis: Axis,
    #[serde(default)]
    pub mode: ResolutionMode,
    /// Fraction of velocity kept after a contact.
    #[serde(default = "default_restitution")]
    pub restitution: Scalar,
}

fn default_axis() -> Axis {
    Axis::Z
}

fn default_restitution() -> Scalar {
    CYLINDER_RESTITUTION
}

impl CylinderCollider {
    /// Creates a cylinder along the z axis.
    pub fn new(origin: Vec3, radius: Scalar, height: Scalar) -> Self {
        Self {
            origin,
            radius,
            height,
            axis: default_axis(),
            mode: ResolutionMode::Hard,
            restitution: CYLINDER_RESTITUTION,
        }
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_mode(mut self, mode: ResolutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Outward radial normal and penetration depth of `point`, if inside.
    pub fn probe(&self, point: Vec3) -> Option<Contact> {
        let axis = self.axis.unit();
        let local = point - self.origin;
        let axial = local.dot(axis);
        if axial.abs() > self.height * 0.5 {
            return None;
        }

        let radial = local - axis * axial;
        let dist2 = radial.length_squared();
        if dist2 >= self.radius * self.radius {
            return None;
        }

        let normal = try_normalize(radial).unwrap_or_else(|| {
            trace!(origin = ?self.origin, "particle on cylinder axis, using fallback normal");
            any_perpendicular(axis)
        });
        Some(Contact {
            normal,
            depth: self.radius - dist2.sqrt(),
        })
    }
}

impl Collide for CylinderCollider {
    fn phase(&self) -> ContactPhase {
        ContactPhase::Swept
    }

    fn check_collision(&self, particle: &Particle) -> bool {
        self.probe(particle.next_point()).is_some()
    }

    /// Removes the inward radial velocity and pushes the particle out by
    /// the penetration depth less `CONTACT_EPSILON`.
    fn resolve_collision(&self, particle: &mut Particle) -> Option<Contact> {
        let contact = self.probe(particle.next_point())?;

        particle.cancel_inward(contact.normal);
        if self.mode == ResolutionMode::Hard {
            let push = (contact.depth - CONTACT_EPSILON).max(0.0);
            particle.position += contact.normal * push;
        }
        particle.velocity *= self.restitution;

        Some(contact)
    }

    fn draw(&self, renderer: &mut dyn ShapeRenderer) {
        renderer.cylinder(self.origin, self.axis.unit(), self.radius, self.height);
    }
}
