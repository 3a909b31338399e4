//! Integration tests for drape-scene.

use std::path::PathBuf;

use drape_cloth::PinPattern;
use drape_contact::{Collider, SphereCollider};
use drape_math::Vec3;
use drape_scene::{
    load_scene, parse_scene_json, parse_scene_toml, validate_scene, SceneConfig, SceneLibrary,
    DEFAULT_SCENE,
};
use drape_types::DrapeError;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("drape-scene-{}-{}", std::process::id(), name))
}

// ─── Library Tests ────────────────────────────────────────────

#[test]
fn library_has_builtin_scenes() {
    let lib = SceneLibrary::with_defaults();
    assert_eq!(lib.len(), 5);
    assert_eq!(
        lib.names(),
        vec!["cone", "cylinder", "cylinder_soft", "mixed", "sphere"]
    );
}

#[test]
fn builtin_scenes_are_valid() {
    for scene in SceneLibrary::with_defaults().iter() {
        validate_scene(scene).unwrap_or_else(|e| panic!("{}: {e}", scene.name));
    }
}

#[test]
fn mixed_scene_geometry() {
    let lib = SceneLibrary::with_defaults();
    let scene = lib.get("mixed").unwrap();

    let kinds: Vec<_> = scene.colliders.iter().map(Collider::kind).collect();
    assert_eq!(kinds, vec!["sphere", "box", "box", "cone"]);
    assert!(!scene.soft);
    assert_eq!(scene.grid.spacing, 10.0);
    assert_eq!(scene.gravity, Vec3::new(0.0, 0.05, 0.0));
}

#[test]
fn cylinder_soft_differs_only_in_softness() {
    let lib = SceneLibrary::with_defaults();
    let hard = lib.get("cylinder").unwrap();
    let soft = lib.get("cylinder_soft").unwrap();

    assert!(soft.soft);
    assert!(!hard.soft);
    assert_eq!(hard.colliders, soft.colliders);
    assert!(hard.edge_collision);
}

#[test]
fn unknown_scene_falls_back_to_default() {
    let lib = SceneLibrary::with_defaults();
    assert!(lib.get("nope").is_none());

    let scene = lib.get_or_default("nope").unwrap();
    assert_eq!(scene.name, DEFAULT_SCENE);
}

#[test]
fn empty_library_has_no_fallback() {
    let lib = SceneLibrary::empty();
    assert!(lib.is_empty());
    assert!(lib.get_or_default("mixed").is_none());
}

#[test]
fn select_all_returns_every_scene() {
    let lib = SceneLibrary::with_defaults();
    let names: Vec<&str> = lib.select("all").iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, lib.names());
}

#[test]
fn select_named_scene() {
    let lib = SceneLibrary::with_defaults();
    let picked = lib.select("cone");
    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].name, "cone");
}

#[test]
fn select_unknown_falls_back_to_default() {
    let lib = SceneLibrary::with_defaults();
    let picked = lib.select("nope");
    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].name, DEFAULT_SCENE);

    assert!(SceneLibrary::empty().select("nope").is_empty());
}

#[test]
fn register_overwrites_by_name() {
    let mut lib = SceneLibrary::with_defaults();
    lib.register(SceneConfig::new("sphere").with_soft(true));
    assert_eq!(lib.len(), 5);
    assert!(lib.get("sphere").unwrap().soft);
}

// ─── Validation Tests ─────────────────────────────────────────

#[test]
fn validate_rejects_empty_name() {
    let scene = SceneConfig::new("  ");
    assert!(matches!(validate_scene(&scene), Err(DrapeError::InvalidScene(_))));
}

#[test]
fn validate_rejects_zero_radius() {
    let scene = SceneConfig::new("bad").with_collider(SphereCollider::new(Vec3::ZERO, 0.0));
    let err = validate_scene(&scene).unwrap_err();
    assert!(err.to_string().contains("radius"));
}

#[test]
fn validate_rejects_bad_grid() {
    let mut scene = SceneConfig::new("bad");
    scene.grid.cols = 0;
    assert!(matches!(validate_scene(&scene), Err(DrapeError::InvalidScene(_))));
}

#[test]
fn validate_rejects_oversized_grid() {
    let mut scene = SceneConfig::new("huge");
    scene.grid.cols = 1 << 33;
    scene.grid.rows = 1 << 33;
    assert!(matches!(validate_scene(&scene), Err(DrapeError::InvalidScene(_))));
}

#[test]
fn validate_rejects_nan_gravity() {
    let scene = SceneConfig::new("bad").with_gravity(Vec3::new(0.0, f64::NAN, 0.0));
    assert!(validate_scene(&scene).is_err());
}

// ─── Parsing Tests ────────────────────────────────────────────

const TOML_SCENE: &str = r#"
name = "plate"
soft = true
edge_collision = true
gravity = [0.0, 0.1, 0.0]

[grid]
cols = 8
rows = 4
spacing = 5.0
pinning = "top_row"

[[colliders]]
type = "box"
center = [20.0, 40.0, 0.0]
size = [100.0, 4.0, 100.0]
"#;

#[test]
fn parse_toml_scene() {
    let scene = parse_scene_toml(TOML_SCENE).unwrap();
    assert_eq!(scene.name, "plate");
    assert!(scene.soft);
    assert!(scene.edge_collision);
    assert_eq!(scene.grid.cols, 8);
    assert_eq!(scene.grid.pinning, PinPattern::TopRow);
    assert_eq!(scene.wind, Vec3::ZERO);
    assert_eq!(scene.colliders.len(), 1);
    validate_scene(&scene).unwrap();
}

#[test]
fn parse_json_defaults() {
    let scene = parse_scene_json(r#"{ "name": "bare" }"#).unwrap();
    assert!(scene.colliders.is_empty());
    assert_eq!(scene.gravity, Vec3::new(0.0, 0.05, 0.0));
    assert_eq!(scene.grid.cols, 20);
    assert!(!scene.edge_collision);
}

#[test]
fn parse_rejects_unknown_collider() {
    let err = parse_scene_json(r#"{ "name": "x", "colliders": [{ "type": "torus" }] }"#)
        .unwrap_err();
    assert!(matches!(err, DrapeError::Serialization(_)));
}

#[test]
fn builtin_scene_survives_json() {
    let lib = SceneLibrary::with_defaults();
    let scene = lib.get("mixed").unwrap();
    let json = serde_json::to_string_pretty(scene).unwrap();
    let recovered = parse_scene_json(&json).unwrap();

    assert_eq!(recovered.name, scene.name);
    assert_eq!(recovered.grid.cols, scene.grid.cols);
    let kinds: Vec<_> = recovered.colliders.iter().map(Collider::kind).collect();
    assert_eq!(kinds, vec!["sphere", "box", "box", "cone"]);
}

// ─── Loading Tests ────────────────────────────────────────────

#[test]
fn load_scene_by_extension() {
    let path = temp_path("plate.toml");
    std::fs::write(&path, TOML_SCENE).unwrap();
    let scene = load_scene(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(scene.name, "plate");
}

#[test]
fn load_scene_rejects_unknown_extension() {
    let path = temp_path("plate.yaml");
    std::fs::write(&path, TOML_SCENE).unwrap();
    let err = load_scene(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(matches!(err, DrapeError::InvalidScene(_)));
}

#[test]
fn load_scene_missing_file_is_io_error() {
    let err = load_scene(temp_path("missing.toml")).unwrap_err();
    assert!(matches!(err, DrapeError::Io(_)));
}

#[test]
fn build_cloth_honours_softness() {
    let scene = parse_scene_toml(TOML_SCENE).unwrap();
    let cloth = scene.build_cloth().unwrap();
    assert_eq!(cloth.particle_count(), 32);
    assert_eq!(cloth.spring_count(), scene.grid.spring_count(true));
    assert_eq!(cloth.locked_count(), 8);
}
