//! Continuous spring-edge versus box resolution.
//!
//! Point tests miss springs that straddle a thin box while both
//! endpoints stay outside it. Each spring is treated as a segment and
//! slab-tested against the box; on a hit both endpoints are pushed out
//! along the entry face normal, weighted toward the endpoint nearest
//! the entry point.

use drape_cloth::Particle;
use drape_math::vector::reflect;
use drape_math::{segment_aabb, SegmentHit, Vec3};
use drape_types::constants::{CONTACT_EPSILON, EPSILON};
use drape_types::Scalar;

use crate::box_collider::BoxCollider;
use crate::collider::{Contact, ResolutionMode};

impl BoxCollider {
    /// Slab test of the spring edge against this box.
    ///
    /// Springs have no direction. When `a → b` does not enter the box
    /// (`a` is inside), the edge is tested as `b → a` and the hit is the
    /// face on `b`'s side, with `t` measured from `b`.
    pub fn intersect_edge(&self, a: &Particle, b: &Particle) -> Option<SegmentHit> {
        let bounds = self.bounds();
        segment_aabb(a.position, b.position, &bounds)
            .or_else(|| segment_aabb(b.position, a.position, &bounds))
    }

    /// Resolves the spring edge `a → b` if it enters the box.
    ///
    /// Locked endpoints keep their position but still have their
    /// velocity reflected.
    pub fn resolve_edge(&self, a: &mut Particle, b: &mut Particle) -> Option<Contact> {
        let hit = self.intersect_edge(a, b)?;
        let normal = hit.normal;
        let i = hit.axis.index();

        let da = a.position.distance(hit.point);
        let db = b.position.distance(hit.point);
        let total = da + db;
        let (wa, wb) = if total < EPSILON {
            (0.5, 0.5)
        } else {
            (db / total, da / total)
        };

        let past_a = (hit.point - a.position).dot(normal);
        let past_b = (hit.point - b.position).dot(normal);
        let depth = past_a.max(past_b).clamp(0.0, self.size[i].abs()) + CONTACT_EPSILON;

        if self.mode == ResolutionMode::Hard {
            push(a, normal * (depth * wa));
            push(b, normal * (depth * wb));
        }
        bounce(a, normal, self.restitution);
        bounce(b, normal, self.restitution);

        Some(Contact { normal, depth })
    }
}

fn push(particle: &mut Particle, offset: Vec3) {
    if !particle.locked {
        particle.position += offset;
    }
}

fn bounce(particle: &mut Particle, normal: Vec3, restitution: Scalar) {
    if particle.velocity.dot(normal) < 0.0 {
        particle.velocity = reflect(particle.velocity, normal) * restitution;
    }
}
