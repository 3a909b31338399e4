//! Step configuration.
//!
//! Owned by the caller and passed to every
//! [`Simulation::step`](crate::Simulation::step), so a UI can change
//! gravity, wind or the run mode between frames.

use serde::{Deserialize, Serialize};

use drape_math::Vec3;
use drape_scene::SceneConfig;
use drape_types::constants::{
    DEFAULT_CONTACT_DAMPING, DEFAULT_GRAVITY, DEFAULT_SPRING_CONSTANT, DEFAULT_SUB_STEPS,
    MAX_SPRING_FORCE,
};
use drape_types::{DrapeError, DrapeResult, Scalar};

/// Whether `step` advances physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    #[default]
    Running,
    /// No physics; the cloth keeps its state for rendering.
    Paused,
}

/// Parameters for one simulated frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub run_mode: RunMode,

    /// Substeps per frame. Spring constant and external forces are
    /// divided by this, so results are roughly substep-count invariant.
    pub sub_steps: u32,

    /// Hooke constant per frame, before division by `sub_steps`.
    pub spring_constant: Scalar,

    /// Damping that replaces the free damping while a particle is
    /// flagged inside a collider. `None` keeps the free damping.
    pub contact_damping: Option<Scalar>,

    /// Magnitude cap on a single spring force.
    pub max_spring_force: Scalar,

    /// Per-frame gravity. +y points down.
    pub gravity: Vec3,

    /// Per-frame wind.
    pub wind: Vec3,

    /// Resolve spring edges against box colliders.
    pub edge_collision: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            run_mode: RunMode::Running,
            sub_steps: DEFAULT_SUB_STEPS,
            spring_constant: DEFAULT_SPRING_CONSTANT,
            contact_damping: None,
            max_spring_force: MAX_SPRING_FORCE,
            gravity: Vec3::from_array(DEFAULT_GRAVITY),
            wind: Vec3::ZERO,
            edge_collision: false,
        }
    }
}

impl SimulationConfig {
    /// Takes gravity, wind and edge collision from a scene.
    pub fn from_scene(scene: &SceneConfig) -> Self {
        Self {
            gravity: scene.gravity,
            wind: scene.wind,
            edge_collision: scene.edge_collision,
            ..Default::default()
        }
    }

    /// Paused configuration. `step` becomes a no-op.
    pub fn paused() -> Self {
        Self {
            run_mode: RunMode::Paused,
            ..Default::default()
        }
    }

    /// Twice the substeps and contact friction on.
    pub fn high_quality() -> Self {
        Self {
            sub_steps: DEFAULT_SUB_STEPS * 2,
            contact_damping: Some(DEFAULT_CONTACT_DAMPING),
            ..Default::default()
        }
    }

    pub fn with_run_mode(mut self, run_mode: RunMode) -> Self {
        self.run_mode = run_mode;
        self
    }

    pub fn with_sub_steps(mut self, sub_steps: u32) -> Self {
        self.sub_steps = sub_steps;
        self
    }

    pub fn with_spring_constant(mut self, spring_constant: Scalar) -> Self {
        self.spring_constant = spring_constant;
        self
    }

    pub fn with_contact_damping(mut self, contact_damping: Option<Scalar>) -> Self {
        self.contact_damping = contact_damping;
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

    pub fn is_paused(&self) -> bool {
        self.run_mode == RunMode::Paused
    }

    /// Flips between running and paused.
    pub fn toggle_pause(&mut self) {
        self.run_mode = match self.run_mode {
            RunMode::Running => RunMode::Paused,
            RunMode::Paused => RunMode::Running,
        };
    }

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> DrapeResult<()> {
        if self.sub_steps == 0 {
            return Err(DrapeError::InvalidConfig("sub_steps must be >= 1".into()));
        }
        if !(self.spring_constant >= 0.0 && self.spring_constant.is_finite()) {
            return Err(DrapeError::InvalidConfig(format!(
                "spring_constant must be non-negative, got {}",
                self.spring_constant
            )));
        }
        if self.max_spring_force.is_nan() || self.max_spring_force <= 0.0 {
            return Err(DrapeError::InvalidConfig(format!(
                "max_spring_force must be positive, got {}",
                self.max_spring_force
            )));
        }
        if let Some(d) = self.contact_damping {
            if !(0.0..=1.0).contains(&d) {
                return Err(DrapeError::InvalidConfig(format!(
                    "contact_damping must be in [0, 1], got {d}"
                )));
            }
        }
        if !self.gravity.is_finite() || !self.wind.is_finite() {
            return Err(DrapeError::InvalidConfig(
                "gravity and wind must be finite".into(),
            ));
        }
        Ok(())
    }
}
