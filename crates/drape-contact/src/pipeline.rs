//! Per-substep collision passes over a particle set.
//!
//! The solver calls [`collide_particle`] twice per particle per substep,
//! once for each [`ContactPhase`], and [`collide_edges`] once per substep
//! when the scene enables edge collision.

use tracing::trace;

use drape_cloth::cloth::pair_mut;
use drape_cloth::{Particle, Spring};

use crate::collider::{Collide, Collider, ContactPhase};
use crate::response::ContactResult;

/// Runs every collider of the given phase against one particle, in
/// scene order. Locked particles are never moved by colliders.
pub fn collide_particle(
    particle: &mut Particle,
    colliders: &[Collider],
    phase: ContactPhase,
    result: &mut ContactResult,
) {
    if particle.locked {
        return;
    }

    for collider in colliders.iter().filter(|c| c.phase() == phase) {
        if !collider.check_collision(particle) {
            continue;
        }
        particle.mark_inside();
        if let Some(contact) = collider.resolve_collision(particle) {
            result.record(&contact);
        }
    }
}

/// Resolves every spring edge against every box collider.
pub fn collide_edges(
    particles: &mut [Particle],
    springs: &[Spring],
    colliders: &[Collider],
    result: &mut ContactResult,
) {
    let boxes: Vec<_> = colliders.iter().filter_map(Collider::as_box).collect();
    if boxes.is_empty() {
        return;
    }

    for spring in springs {
        let Some((a, b)) = pair_mut(particles, spring.a, spring.b) else {
            trace!(a = spring.a.0, b = spring.b.0, "spring endpoints out of range, skipping");
            continue;
        };
        for collider in &boxes {
            if let Some(contact) = collider.resolve_edge(a, b) {
                result.record(&contact);
            }
        }
    }
}
