//! Scene record.

use serde::{Deserialize, Serialize};

use drape_cloth::{build_grid, Cloth, GridParams};
use drape_contact::Collider;
use drape_math::Vec3;
use drape_types::constants::DEFAULT_GRAVITY;
use drape_types::DrapeResult;

/// A named collider set with grid parameters and external forces.
///
/// Scenes are read-only once loaded; the simulation borrows the
/// colliders and builds its cloth from `grid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Evaluated in order for every particle.
    #[serde(default)]
    pub colliders: Vec<Collider>,
    #[serde(default)]
    pub grid: GridParams,
    /// Omit shear springs.
    #[serde(default)]
    pub soft: bool,
    #[serde(default = "default_gravity")]
    pub gravity: Vec3,
    #[serde(default)]
    pub wind: Vec3,
    /// Resolve spring edges against box colliders.
    #[serde(default)]
    pub edge_collision: bool,
}

fn default_gravity() -> Vec3 {
    Vec3::from_array(DEFAULT_GRAVITY)
}

impl SceneConfig {
    /// An empty scene with the default grid and gravity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            colliders: Vec::new(),
            grid: GridParams::default(),
            soft: false,
            gravity: default_gravity(),
            wind: Vec3::ZERO,
            edge_collision: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_collider(mut self, collider: impl Into<Collider>) -> Self {
        self.colliders.push(collider.into());
        self
    }

    pub fn with_grid(mut self, grid: GridParams) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_soft(mut self, soft: bool) -> Self {
        self.soft = soft;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_wind(mut self, wind: Vec3) -> Self {
        self.wind = wind;
        self
    }

    pub fn with_edge_collision(mut self, enabled: bool) -> Self {
        self.edge_collision = enabled;
        self
    }

    /// Builds the scene's cloth grid.
    pub fn build_cloth(&self) -> DrapeResult<Cloth> {
        build_grid(&self.grid, self.soft)
    }
}
