//! # drape-scene
//!
//! Scene records: a named, ordered set of colliders plus the cloth grid
//! and the forces acting on it.
//!
//! ## Key Types
//!
//! - [`SceneConfig`]: One scene, serializable to TOML or JSON
//! - [`SceneLibrary`]: Built-in scenes with a default fallback
//! - [`validate_scene`]: Rejects unusable geometry before simulation
//! - [`load_scene`]: Reads a scene file by extension

pub mod library;
pub mod loader;
pub mod scene;
pub mod validator;

pub use library::{SceneLibrary, DEFAULT_SCENE};
pub use loader::{load_scene, parse_scene_json, parse_scene_toml};
pub use scene::SceneConfig;
pub use validator::validate_scene;
