//! Rendering hook for collider geometry.
//!
//! The physics kernel draws nothing itself. A renderer implements
//! [`ShapeRenderer`] and is handed each collider's geometry; every
//! method defaults to a no-op so renderers can skip shapes they do not
//! support.

use drape_math::Vec3;
use drape_types::Scalar;

/// Receives collider geometry for drawing.
pub trait ShapeRenderer {
    fn sphere(&mut self, center: Vec3, radius: Scalar) {
        let _ = (center, radius);
    }

    /// Axis-aligned box given by center and full size.
    fn cuboid(&mut self, center: Vec3, size: Vec3) {
        let _ = (center, size);
    }

    /// Cylinder centred on `origin` along the unit vector `axis`.
    fn cylinder(&mut self, origin: Vec3, axis: Vec3, radius: Scalar, height: Scalar) {
        let _ = (origin, axis, radius, height);
    }

    /// Cone opening from `apex` along the unit vector `axis`.
    fn cone(&mut self, apex: Vec3, axis: Vec3, height: Scalar, base_radius: Scalar) {
        let _ = (apex, axis, height, base_radius);
    }
}

/// Renderer that draws nothing.
pub struct NullRenderer;

impl ShapeRenderer for NullRenderer {}
