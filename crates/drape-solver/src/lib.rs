//! # drape-solver
//!
//! Frame stepping for the mass-spring cloth.
//!
//! ## Key Types
//!
//! - [`Simulation`]: Cloth plus the scene's colliders, advanced one frame per `step`
//! - [`SimulationConfig`]: Caller-owned step parameters
//! - [`StepResult`]: Per-frame counters and timing
//! - [`ForceProvider`]: Per-frame external force sources (wind, gravity)
//!
//! ## Substep order
//!
//! Each frame runs `sub_steps` iterations of:
//!
//! ```text
//! springs (k / S) → gravity, wind (/ S) → swept colliders
//!     → integrate → discrete colliders → edge collision (optional)
//! ```

pub mod config;
pub mod forces;
pub mod simulation;

pub use config::{RunMode, SimulationConfig};
pub use forces::{ConstantForce, ForceProvider, GustyWind};
pub use simulation::{Simulation, StepResult};
