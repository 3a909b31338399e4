//! Scene validation.
//!
//! Catches geometry that would make the physics kernel divide by zero
//! or produce NaNs before a simulation is built from it.

use drape_contact::Collider;
use drape_math::Vec3;
use drape_types::{DrapeError, DrapeResult, Scalar};

use crate::scene::SceneConfig;

/// Validates a complete scene.
///
/// Checks:
/// - Name is non-empty
/// - Grid dimensions, spacing and damping
/// - Every collider has positive, finite extents
/// - Gravity and wind are finite
pub fn validate_scene(scene: &SceneConfig) -> DrapeResult<()> {
    if scene.name.trim().is_empty() {
        return Err(DrapeError::InvalidScene("scene name is empty".into()));
    }

    scene
        .grid
        .validate()
        .map_err(|e| DrapeError::InvalidScene(format!("{}: {}", scene.name, e)))?;

    for (i, collider) in scene.colliders.iter().enumerate() {
        validate_collider(collider).map_err(|msg| {
            DrapeError::InvalidScene(format!(
                "{}: collider {} ({}): {}",
                scene.name,
                i,
                collider.kind(),
                msg
            ))
        })?;
    }

    if !scene.gravity.is_finite() {
        return Err(DrapeError::InvalidScene(format!(
            "{}: gravity must be finite",
            scene.name
        )));
    }
    if !scene.wind.is_finite() {
        return Err(DrapeError::InvalidScene(format!(
            "{}: wind must be finite",
            scene.name
        )));
    }

    Ok(())
}

fn validate_collider(collider: &Collider) -> Result<(), String> {
    match collider {
        Collider::Sphere(s) => {
            finite_point("center", s.center)?;
            positive("radius", s.radius)?;
            unit_interval("restitution", s.restitution)
        }
        Collider::Box(b) => {
            finite_point("center", b.center)?;
            positive("size.x", b.size.x)?;
            positive("size.y", b.size.y)?;
            positive("size.z", b.size.z)?;
            unit_interval("restitution", b.restitution)
        }
        Collider::Cylinder(c) => {
            finite_point("origin", c.origin)?;
            positive("radius", c.radius)?;
            positive("height", c.height)?;
            unit_interval("restitution", c.restitution)
        }
        Collider::Cone(c) => {
            finite_point("apex", c.apex)?;
            positive("height", c.height)?;
            positive("base_radius", c.base_radius)?;
            if !c.axis.is_finite() || c.axis.length_squared() == 0.0 {
                return Err("axis must be a finite non-zero vector".into());
            }
            unit_interval("restitution", c.restitution)
        }
    }
}

fn finite_point(field: &str, v: Vec3) -> Result<(), String> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(format!("{field} must be finite"))
    }
}

fn positive(field: &str, value: Scalar) -> Result<(), String> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(format!("{field} must be positive, got {value}"))
    }
}

fn unit_interval(field: &str, value: Scalar) -> Result<(), String> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{field} must be in [0, 1], got {value}"))
    }
}
