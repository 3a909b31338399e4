//! Vector helpers on top of `glam`.
//!
//! `glam` panics in debug builds on `normalize()` of a zero vector and
//! silently returns NaN in release. The kernel never normalizes
//! directly: it goes through [`normalize_or`] so degenerate geometry
//! falls back to a caller-chosen direction.

use drape_types::constants::EPSILON;
use drape_types::Scalar;

use crate::Vec3;

/// Normalizes `v`, or returns `None` if its length is below `EPSILON`.
#[inline]
pub fn try_normalize(v: Vec3) -> Option<Vec3> {
    let len = v.length();
    if len > EPSILON && len.is_finite() {
        Some(v / len)
    } else {
        None
    }
}

/// Normalizes `v`, substituting `fallback` for degenerate input.
#[inline]
pub fn normalize_or(v: Vec3, fallback: Vec3) -> Vec3 {
    try_normalize(v).unwrap_or(fallback)
}

/// Mirrors `v` across the plane with unit normal `normal`.
#[inline]
pub fn reflect(v: Vec3, normal: Vec3) -> Vec3 {
    v - normal * (2.0 * v.dot(normal))
}

/// Splits `v` into the part along `normal` and the remainder.
///
/// Returns `(normal_component, tangential_component)`.
#[inline]
pub fn decompose(v: Vec3, normal: Vec3) -> (Vec3, Vec3) {
    let along = normal * v.dot(normal);
    (along, v - along)
}

/// Returns some unit vector perpendicular to the unit vector `axis`.
///
/// Used as the substitute direction when a radial offset vanishes.
pub fn any_perpendicular(axis: Vec3) -> Vec3 {
    let helper = if axis.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    normalize_or(axis.cross(helper), Vec3::Z)
}

/// Clamps the length of `v` to `max_len`.
#[inline]
pub fn clamp_length(v: Vec3, max_len: Scalar) -> Vec3 {
    let len = v.length();
    if len > max_len && len > EPSILON {
        v * (max_len / len)
    } else {
        v
    }
}
