//! Axis-aligned bounding box.

use serde::{Deserialize, Serialize};

use drape_types::Scalar;

use crate::{Axis, Vec3};

/// Axis-aligned box given by its two extreme corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Builds the box `center ± half_extents`.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Builds the box from its center and full size per axis.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        Self::from_center_half_extents(center, size * 0.5)
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Inclusive containment on all three axes.
    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Distance from `p` to the nearer face on `axis` (positive inside).
    #[inline]
    pub fn overlap(&self, p: Vec3, axis: Axis) -> Scalar {
        let i = axis.index();
        (self.max[i] - p[i]).min(p[i] - self.min[i])
    }

    /// Axis along which `p` is closest to leaving the box.
    ///
    /// Ties resolve in X, Y, Z order.
    pub fn min_overlap_axis(&self, p: Vec3) -> Axis {
        let ox = self.overlap(p, Axis::X);
        let oy = self.overlap(p, Axis::Y);
        let oz = self.overlap(p, Axis::Z);
        if ox <= oy && ox <= oz {
            Axis::X
        } else if oy <= oz {
            Axis::Y
        } else {
            Axis::Z
        }
    }
}
