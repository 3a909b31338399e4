//! Swept intersection queries.
//!
//! Both queries take a segment `start → end`, parameterized as
//! `start + t * (end - start)` with `t ∈ [0, 1]`, and report the first
//! parameter at which the segment enters the shape. A miss is `None`,
//! never an error.

use drape_types::constants::EPSILON;
use drape_types::Scalar;

use crate::{Aabb, Axis, Vec3};

/// Entry of a segment into an axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// Segment parameter of the entry point.
    pub t: Scalar,
    /// Segment parameter where the segment leaves the box.
    pub t_exit: Scalar,
    /// Entry point in world space.
    pub point: Vec3,
    /// Axis of the face that was crossed.
    pub axis: Axis,
    /// Outward unit normal of the crossed face.
    pub normal: Vec3,
}

/// Smallest `t ∈ [0, 1]` at which the segment meets the sphere surface.
///
/// Solves `|start + t·dir − center|² = r²`, i.e. `a t² + b t + c = 0`
/// with `a = dir·dir`, `b = 2 f·dir`, `c = f·f − r²`, `f = start − center`.
/// A zero-length segment or negative discriminant is a miss. Only the
/// entering root counts: segments moving away from the center (`f·dir >= 0`),
/// including ones starting on the surface, and segments starting inside
/// are misses.
pub fn segment_sphere(start: Vec3, end: Vec3, center: Vec3, radius: Scalar) -> Option<Scalar> {
    let dir = end - start;
    let f = start - center;

    let a = dir.dot(dir);
    if a < EPSILON * EPSILON {
        return None;
    }
    let b = 2.0 * f.dot(dir);
    if b >= 0.0 {
        return None;
    }
    let c = f.dot(f) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    (0.0..=1.0).contains(&t).then_some(t)
}

/// Slab test of the segment against `aabb`.
///
/// Reports a hit only when the segment *enters* the box within
/// `t ∈ [0, 1]`. Segments that start inside the box are left to the
/// point-based resolution and return `None`.
pub fn segment_aabb(start: Vec3, end: Vec3, aabb: &Aabb) -> Option<SegmentHit> {
    let dir = end - start;

    let mut t_enter = Scalar::NEG_INFINITY;
    let mut t_exit = Scalar::INFINITY;
    let mut enter_axis = None;
    let mut enter_sign = 0.0;

    for axis in Axis::ALL {
        let i = axis.index();
        let (lo, hi) = (aabb.min[i], aabb.max[i]);

        if dir[i].abs() < EPSILON {
            // Parallel to this slab: must already lie within it.
            if start[i] < lo || start[i] > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / dir[i];
        let mut t_near = (lo - start[i]) * inv;
        let mut t_far = (hi - start[i]) * inv;
        // Moving in +axis enters through the min face, whose normal is -axis.
        let mut sign = -1.0;
        if t_near > t_far {
            std::mem::swap(&mut t_near, &mut t_far);
            sign = 1.0;
        }

        if t_near > t_enter {
            t_enter = t_near;
            enter_axis = Some(axis);
            enter_sign = sign;
        }
        t_exit = t_exit.min(t_far);

        if t_enter > t_exit {
            return None;
        }
    }

    let axis = enter_axis?;
    if !(0.0..=1.0).contains(&t_enter) {
        return None;
    }

    Some(SegmentHit {
        t: t_enter,
        t_exit,
        point: start + dir * t_enter,
        axis,
        normal: axis.unit() * enter_sign,
    })
}
