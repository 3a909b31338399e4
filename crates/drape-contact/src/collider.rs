//! Collider contract and the closed set of collider variants.
//!
//! Scenes hold colliders as the [`Collider`] enum; dispatch is a single
//! `match` per collider per particle.

use serde::{Deserialize, Serialize};

use drape_cloth::Particle;
use drape_math::Vec3;
use drape_types::Scalar;

use crate::box_collider::BoxCollider;
use crate::cone::ConeCollider;
use crate::cylinder::CylinderCollider;
use crate::render::ShapeRenderer;
use crate::sphere::SphereCollider;

/// How a collider corrects a penetrating particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMode {
    /// Correct position and velocity.
    #[default]
    Hard,
    /// Correct velocity only. Avoids visible snapping.
    Soft,
}

/// When in the substep a collider is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    /// Tests the uncommitted path `position → next_point()`, before integration.
    Swept,
    /// Tests committed positions, after integration.
    Discrete,
}

/// A resolved contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Outward unit surface normal at the contact.
    pub normal: Vec3,
    /// Penetration depth that was removed (or prevented).
    pub depth: Scalar,
}

/// Contract shared by all collider variants.
pub trait Collide {
    /// When this collider runs within a substep.
    fn phase(&self) -> ContactPhase;

    /// Point-in-volume (or about-to-enter) test.
    fn check_collision(&self, particle: &Particle) -> bool;

    /// Removes penetration and inward velocity.
    ///
    /// Returns `None` and leaves the particle untouched when there is
    /// nothing to resolve.
    fn resolve_collision(&self, particle: &mut Particle) -> Option<Contact>;

    /// Hands this collider's geometry to a renderer.
    fn draw(&self, renderer: &mut dyn ShapeRenderer);
}

/// One of the supported rigid colliders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Collider {
    Sphere(SphereCollider),
    Box(BoxCollider),
    Cylinder(CylinderCollider),
    Cone(ConeCollider),
}

impl Collider {
    /// Short variant name for logs and listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Collider::Sphere(_) => "sphere",
            Collider::Box(_) => "box",
            Collider::Cylinder(_) => "cylinder",
            Collider::Cone(_) => "cone",
        }
    }

    /// The box collider, if this is one. Edge collision only runs on boxes.
    pub fn as_box(&self) -> Option<&BoxCollider> {
        match self {
            Collider::Box(b) => Some(b),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn Collide {
        match self {
            Collider::Sphere(c) => c,
            Collider::Box(c) => c,
            Collider::Cylinder(c) => c,
            Collider::Cone(c) => c,
        }
    }
}

impl Collide for Collider {
    fn phase(&self) -> ContactPhase {
        self.inner().phase()
    }

    fn check_collision(&self, particle: &Particle) -> bool {
        self.inner().check_collision(particle)
    }

    fn resolve_collision(&self, particle: &mut Particle) -> Option<Contact> {
        self.inner().resolve_collision(particle)
    }

    fn draw(&self, renderer: &mut dyn ShapeRenderer) {
        self.inner().draw(renderer)
    }
}

impl From<SphereCollider> for Collider {
    fn from(c: SphereCollider) -> Self {
        Collider::Sphere(c)
    }
}

impl From<BoxCollider> for Collider {
    fn from(c: BoxCollider) -> Self {
        Collider::Box(c)
    }
}

impl From<CylinderCollider> for Collider {
    fn from(c: CylinderCollider) -> Self {
        Collider::Cylinder(c)
    }
}

impl From<ConeCollider> for Collider {
    fn from(c: ConeCollider) -> Self {
        Collider::Cone(c)
    }
}
