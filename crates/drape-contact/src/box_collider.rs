//! Analytical Axis-Aligned Bounding Box (AABB) collision.
//!
//! Particles found inside the box after integration are snapped to the
//! nearest face along the axis of least overlap. Spring edges crossing
//! the box are handled separately by [`crate::edge`].

use serde::{Deserialize, Serialize};

use drape_cloth::Particle;
use drape_math::{Aabb, Vec3};
use drape_types::constants::BOX_RESTITUTION;
use drape_types::Scalar;

use crate::collider::{Collide, Contact, ContactPhase, ResolutionMode};
use crate::render::ShapeRenderer;

/// Analytical AABB collider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxCollider {
    /// Center of the box.
    pub center: Vec3,
    /// Full extent along each axis.
    pub size: Vec3,
    #[serde(default)]
    pub mode: ResolutionMode,
    /// Fraction of velocity kept after a contact.
    #[serde(default = "default_restitution")]
    pub restitution: Scalar,
}

fn default_restitution() -> Scalar {
    BOX_RESTITUTION
}

impl BoxCollider {
    /// Creates a new box collider from its center and full size.
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self {
            center,
            size,
            mode: ResolutionMode::Hard,
            restitution: BOX_RESTITUTION,
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

    /// Bounds `center ± size / 2`.
    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.center, self.size)
    }
}

impl Collide for BoxCollider {
    fn phase(&self) -> ContactPhase {
        ContactPhase::Discrete
    }

    fn check_collision(&self, particle: &Particle) -> bool {
        self.bounds().contains(particle.position)
    }

    /// Snaps the particle to the nearest face on the axis of minimal
    /// overlap only, zeroes that velocity component and damps the rest.
    fn resolve_collision(&self, particle: &mut Particle) -> Option<Contact> {
        let bounds = self.bounds();
        let pos = particle.position;
        if !bounds.contains(pos) {
            return None;
        }

        let axis = bounds.min_overlap_axis(pos);
        let i = axis.index();
        let depth = bounds.overlap(pos, axis);
        let toward_min = pos[i] < self.center[i];
        let normal = if toward_min { -axis.unit() } else { axis.unit() };

        if self.mode == ResolutionMode::Hard {
            particle.position[i] = if toward_min { bounds.min[i] } else { bounds.max[i] };
        }
        particle.velocity[i] = 0.0;
        particle.velocity *= self.restitution;

        Some(Contact { normal, depth })
    }

    fn draw(&self, renderer: &mut dyn ShapeRenderer) {
        renderer.cuboid(self.center, self.size);
    }
}
