//! Built-in scene library.
//!
//! Scenes are looked up by name. An unknown name is not an error at
//! this level: [`SceneLibrary::get_or_default`] falls back to the
//! default scene and logs a warning.

use std::collections::BTreeMap;

use tracing::warn;

use drape_cloth::GridParams;
use drape_contact::{BoxCollider, ConeCollider, CylinderCollider, SphereCollider};
use drape_math::Vec3;

use crate::scene::SceneConfig;

/// Name of the scene used when a lookup fails.
pub const DEFAULT_SCENE: &str = "mixed";

/// A named collection of scenes.
#[derive(Debug, Clone)]
pub struct SceneLibrary {
    scenes: BTreeMap<String, SceneConfig>,
}

impl SceneLibrary {
    /// Creates a library holding the built-in scenes.
    pub fn with_defaults() -> Self {
        let mut lib = Self::empty();

        lib.register(mixed());
        lib.register(cylinder(false));
        lib.register(cylinder(true));
        lib.register(sphere());
        lib.register(cone());

        lib
    }

    /// Creates an empty library.
    pub fn empty() -> Self {
        Self {
            scenes: BTreeMap::new(),
        }
    }

    /// Registers a scene. Overwrites if the name already exists.
    pub fn register(&mut self, scene: SceneConfig) {
        self.scenes.insert(scene.name.clone(), scene);
    }

    /// Looks up a scene by name.
    pub fn get(&self, name: &str) -> Option<&SceneConfig> {
        self.scenes.get(name)
    }

    /// Looks up a scene, falling back to [`DEFAULT_SCENE`].
    ///
    /// Returns `None` only if the default itself is not registered.
    pub fn get_or_default(&self, name: &str) -> Option<&SceneConfig> {
        if let Some(scene) = self.scenes.get(name) {
            return Some(scene);
        }
        warn!(requested = name, fallback = DEFAULT_SCENE, "unknown scene, using default");
        self.scenes.get(DEFAULT_SCENE)
    }

    /// Resolves a benchmark selection.
    ///
    /// `"all"` yields every scene in name order. Any other name goes
    /// through [`Self::get_or_default`]; the result is empty only when
    /// that lookup finds nothing.
    pub fn select(&self, name: &str) -> Vec<&SceneConfig> {
        if name == "all" {
            return self.iter().collect();
        }
        self.get_or_default(name).into_iter().collect()
    }

    /// Registered scene names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.scenes.keys().map(String::as_str).collect()
    }

    /// Iterates over all scenes in name order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneConfig> {
        self.scenes.values()
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl Default for SceneLibrary {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ─── Built-in Scenes ──────────────────────────────────────────────────

fn grid() -> GridParams {
    GridParams::new(20, 10, 10.0)
}

/// Sphere, cube, cone and a wide floor slab.
fn mixed() -> SceneConfig {
    SceneConfig::new(DEFAULT_SCENE)
        .with_description("sphere, box and cone above a floor")
        .with_grid(grid())
        .with_collider(SphereCollider::new(Vec3::new(150.0, 250.0, 20.0), 50.0))
        .with_collider(BoxCollider::new(
            Vec3::new(105.0, 200.0, 20.0),
            Vec3::new(100.0, 100.0, 100.0),
        ))
        .with_collider(BoxCollider::new(
            Vec3::new(0.0, 600.0, 0.0),
            Vec3::new(3000.0, 10.0, 5000.0),
        ))
        .with_collider(ConeCollider::new(Vec3::new(150.0, 200.0, 70.0), 40.0, 50.0))
}

/// Cylinder above a thin plate. Soft cloth drops the shear springs.
fn cylinder(soft: bool) -> SceneConfig {
    let (name, description) = if soft {
        ("cylinder_soft", "cylinder above a plate, cloth without shear springs")
    } else {
        ("cylinder", "cylinder above a plate")
    };
    SceneConfig::new(name)
        .with_description(description)
        .with_grid(grid())
        .with_soft(soft)
        .with_edge_collision(true)
        .with_collider(CylinderCollider::new(Vec3::new(200.0, 300.0, 0.0), 80.0, 100.0))
        .with_collider(BoxCollider::new(
            Vec3::new(100.0, 500.0, 0.0),
            Vec3::new(300.0, 20.0, 300.0),
        ))
}

fn sphere() -> SceneConfig {
    SceneConfig::new("sphere")
        .with_description("single large sphere")
        .with_grid(grid())
        .with_collider(SphereCollider::new(Vec3::new(200.0, 250.0, 20.0), 70.0))
}

fn cone() -> SceneConfig {
    SceneConfig::new("cone")
        .with_description("single cone")
        .with_grid(grid())
        .with_collider(ConeCollider::new(Vec3::new(150.0, 200.0, 70.0), 40.0, 50.0))
}
