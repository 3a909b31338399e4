//! Integration tests for drape-contact.

use approx::assert_relative_eq;

use drape_cloth::{Particle, Spring, SpringKind};
use drape_contact::{
    collide_edges, collide_particle, BoxCollider, Collide, Collider, ConeCollider, Contact,
    ContactPhase, ContactResult, CylinderCollider, NullRenderer, ResolutionMode, ShapeRenderer,
    SphereCollider,
};
use drape_math::{Axis, Vec3};
use drape_types::constants::{CONTACT_EPSILON, SPHERE_RESTITUTION};
use drape_types::ParticleId;

fn is_finite(v: Vec3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

// ─── Sphere Tests ─────────────────────────────────────────────

#[test]
fn sphere_swept_stops_fast_particle_on_surface() {
    let sphere = SphereCollider::new(Vec3::ZERO, 50.0);
    // Next point lands on the far side: a discrete test would miss it.
    let mut p = Particle::new(Vec3::new(0.0, 100.0, 0.0)).with_velocity(Vec3::new(0.0, -200.0, 0.0));
    assert!(!sphere.contains(p.next_point()));
    assert!(sphere.check_collision(&p));

    let contact = sphere.resolve_collision(&mut p).unwrap();
    assert_relative_eq!(contact.normal, Vec3::Y, epsilon = 1e-9);

    let dist = p.position.length();
    assert!(dist >= 50.0, "particle ended inside: {dist}");
    assert!(dist <= 50.0 + 3.0 * CONTACT_EPSILON, "particle too far out: {dist}");

    // Normal velocity removed, so integration keeps it outside.
    assert!(p.velocity.dot(contact.normal) >= 0.0);
    p.integrate(None);
    assert!(p.position.length() >= 50.0);
}

#[test]
fn sphere_swept_keeps_tangential_velocity() {
    let sphere = SphereCollider::new(Vec3::ZERO, 50.0);
    let mut p = Particle::new(Vec3::new(0.0, 60.0, 0.0)).with_velocity(Vec3::new(4.0, -20.0, 0.0));
    let speed = p.velocity.length();
    let contact = sphere.resolve_collision(&mut p).unwrap();

    assert!(p.velocity.x > 0.0);
    assert!(p.velocity.dot(contact.normal) >= -1e-9);
    assert!(p.velocity.length() <= speed * SPHERE_RESTITUTION);
}

#[test]
fn sphere_pushes_out_deep_penetration() {
    let sphere = SphereCollider::new(Vec3::ZERO, 50.0);
    let mut p = Particle::new(Vec3::new(0.0, 0.0, 30.0));
    let contact = sphere.resolve_penetration(&mut p).unwrap();

    assert_relative_eq!(contact.depth, 20.0, epsilon = 1e-9);
    assert_relative_eq!(p.position.z, 50.0 + CONTACT_EPSILON, epsilon = 1e-9);
}

#[test]
fn sphere_ignores_particle_moving_away() {
    let sphere = SphereCollider::new(Vec3::ZERO, 50.0);
    let mut p = Particle::new(Vec3::new(0.0, 60.0, 0.0)).with_velocity(Vec3::new(0.0, 5.0, 0.0));
    let before = p.clone();

    assert!(!sphere.check_collision(&p));
    assert!(sphere.resolve_collision(&mut p).is_none());
    assert_eq!(p, before);
}

#[test]
fn sphere_releases_particle_leaving_surface() {
    let sphere = SphereCollider::new(Vec3::ZERO, 50.0);
    let mut p = Particle::new(Vec3::new(0.0, 50.0, 0.0)).with_velocity(Vec3::new(0.0, 10.0, 0.0));
    let before = p.clone();

    assert!(!sphere.check_collision(&p));
    assert!(sphere.resolve_collision(&mut p).is_none());
    assert_eq!(p, before);
}

#[test]
fn sphere_stops_particle_on_surface_moving_in() {
    let sphere = SphereCollider::new(Vec3::ZERO, 50.0);
    let mut p = Particle::new(Vec3::new(0.0, 50.0, 0.0)).with_velocity(Vec3::new(0.0, -10.0, 0.0));

    assert!(sphere.check_collision(&p));
    assert!(sphere.resolve_collision(&mut p).is_some());
    assert!(p.velocity.y >= 0.0);
    assert!(p.position.length() >= 50.0);
}

#[test]
fn sphere_center_particle_stays_finite() {
    let sphere = SphereCollider::new(Vec3::ZERO, 10.0);
    let mut p = Particle::new(Vec3::ZERO);
    sphere.resolve_collision(&mut p).unwrap();

    assert!(is_finite(p.position));
    assert!(is_finite(p.velocity));
    assert!(p.position.length() >= 10.0);
}

#[test]
fn sphere_soft_mode_only_changes_velocity() {
    let sphere = SphereCollider::new(Vec3::ZERO, 50.0).with_mode(ResolutionMode::Soft);
    let mut p = Particle::new(Vec3::new(0.0, 100.0, 0.0)).with_velocity(Vec3::new(0.0, -200.0, 0.0));
    sphere.resolve_collision(&mut p).unwrap();

    assert_eq!(p.position, Vec3::new(0.0, 100.0, 0.0));
    assert!(p.velocity.y >= 0.0);
}

// ─── Box Tests ────────────────────────────────────────────────

#[test]
fn box_snaps_on_min_overlap_axis_only() {
    let cube = BoxCollider::new(Vec3::ZERO, Vec3::splat(100.0));
    let mut p = Particle::new(Vec3::new(45.0, 10.0, -20.0)).with_velocity(Vec3::new(3.0, 4.0, 5.0));

    assert!(cube.check_collision(&p));
    let contact = cube.resolve_collision(&mut p).unwrap();

    assert_eq!(p.position, Vec3::new(50.0, 10.0, -20.0));
    assert_relative_eq!(contact.normal, Vec3::X);
    assert_relative_eq!(contact.depth, 5.0);
    assert_relative_eq!(p.velocity, Vec3::new(0.0, 4.0, 5.0) * 0.9, epsilon = 1e-12);
}

#[test]
fn box_snaps_to_min_face_below_center() {
    let floor = BoxCollider::new(Vec3::new(0.0, 600.0, 0.0), Vec3::new(3000.0, 10.0, 5000.0));
    let mut p = Particle::new(Vec3::new(10.0, 597.0, 0.0));
    let contact = floor.resolve_collision(&mut p).unwrap();

    assert_relative_eq!(p.position.y, 595.0);
    assert_relative_eq!(contact.normal, Vec3::NEG_Y);
}

#[test]
fn box_leaves_outside_particle_untouched() {
    let cube = BoxCollider::new(Vec3::ZERO, Vec3::splat(10.0));
    let mut p = Particle::new(Vec3::new(20.0, 0.0, 0.0)).with_velocity(Vec3::X);
    let before = p.clone();

    assert!(!cube.check_collision(&p));
    assert!(cube.resolve_collision(&mut p).is_none());
    assert_eq!(p, before);
}

#[test]
fn box_bounds_from_center_and_size() {
    let b = BoxCollider::new(Vec3::new(105.0, 200.0, 20.0), Vec3::splat(100.0)).bounds();
    assert_eq!(b.min, Vec3::new(55.0, 150.0, -30.0));
    assert_eq!(b.max, Vec3::new(155.0, 250.0, 70.0));
}

// ─── Edge Tests ───────────────────────────────────────────────

fn plate() -> BoxCollider {
    BoxCollider::new(Vec3::ZERO, Vec3::new(100.0, 10.0, 100.0))
}

#[test]
fn edge_outside_box_is_a_miss() {
    let plate = plate();
    let mut a = Particle::new(Vec3::new(200.0, 0.0, 0.0));
    let mut b = Particle::new(Vec3::new(300.0, 0.0, 0.0));

    assert!(plate.intersect_edge(&a, &b).is_none());
    assert!(plate.resolve_edge(&mut a, &mut b).is_none());
    assert_eq!(a.position, Vec3::new(200.0, 0.0, 0.0));
}

#[test]
fn edge_crossing_plate_reports_single_face() {
    let plate = plate();
    let a = Particle::new(Vec3::new(0.0, -20.0, 0.0));
    let b = Particle::new(Vec3::new(0.0, 20.0, 0.0));
    let hit = plate.intersect_edge(&a, &b).unwrap();

    assert_eq!(hit.axis, Axis::Y);
    assert_relative_eq!(hit.normal, Vec3::NEG_Y);
    assert_relative_eq!(hit.normal.length(), 1.0);
    assert_relative_eq!(hit.t, 15.0 / 40.0, epsilon = 1e-12);
}

#[test]
fn edge_push_weights_closer_endpoint_more() {
    let plate = plate();
    let mut a = Particle::new(Vec3::new(0.0, -20.0, 0.0));
    let mut b = Particle::new(Vec3::new(0.0, 20.0, 0.0));
    let contact = plate.resolve_edge(&mut a, &mut b).unwrap();

    let moved_a = (a.position.y + 20.0).abs();
    let moved_b = (b.position.y - 20.0).abs();
    assert!(moved_a > moved_b);
    assert_relative_eq!(moved_a + moved_b, contact.depth, epsilon = 1e-9);
    assert_eq!(a.position.x, 0.0);
    assert_eq!(b.position.z, 0.0);
}

#[test]
fn edge_locked_endpoint_keeps_position_but_reflects() {
    let plate = plate();
    let mut a = Particle::locked(Vec3::new(0.0, -20.0, 0.0)).with_velocity(Vec3::new(0.0, 5.0, 0.0));
    let mut b = Particle::new(Vec3::new(0.0, 20.0, 0.0));
    plate.resolve_edge(&mut a, &mut b).unwrap();

    assert_eq!(a.position, Vec3::new(0.0, -20.0, 0.0));
    assert_relative_eq!(a.velocity, Vec3::new(0.0, -5.0 * 0.9, 0.0), epsilon = 1e-12);
    assert!(b.position.y < 20.0);
}

#[test]
fn edge_hit_does_not_depend_on_spring_direction() {
    let plate = plate();
    let inside = Particle::new(Vec3::ZERO);
    let outside = Particle::new(Vec3::new(0.0, 20.0, 0.0));

    let forward = plate.intersect_edge(&inside, &outside).unwrap();
    let reverse = plate.intersect_edge(&outside, &inside).unwrap();
    assert_eq!(forward.axis, Axis::Y);
    assert_eq!(forward.normal, Vec3::Y);
    assert_eq!(forward.normal, reverse.normal);
    assert_relative_eq!(forward.point, reverse.point, epsilon = 1e-12);

    let (mut a1, mut b1) = (inside.clone(), outside.clone());
    let (mut a2, mut b2) = (inside.clone(), outside.clone());
    let c1 = plate.resolve_edge(&mut a1, &mut b1).unwrap();
    let c2 = plate.resolve_edge(&mut b2, &mut a2).unwrap();
    assert_relative_eq!(c1.depth, c2.depth, epsilon = 1e-12);
    assert_relative_eq!(a1.position, a2.position, epsilon = 1e-12);
    assert_relative_eq!(b1.position, b2.position, epsilon = 1e-12);
    assert!(a1.position.y > 0.0);
}

// ─── Cylinder Tests ───────────────────────────────────────────

#[test]
fn cylinder_blocks_particle_about_to_enter() {
    let cyl = CylinderCollider::new(Vec3::ZERO, 10.0, 20.0);
    let mut p = Particle::new(Vec3::new(12.0, 0.0, 0.0)).with_velocity(Vec3::new(-5.0, 0.0, 0.0));

    assert!(cyl.check_collision(&p));
    let contact = cyl.resolve_collision(&mut p).unwrap();

    assert_relative_eq!(contact.normal, Vec3::X);
    assert_relative_eq!(contact.depth, 10.0 - (12.0 - 5.0 * 0.99), epsilon = 1e-9);
    assert!(p.velocity.x >= 0.0);
    assert!(!cyl.check_collision(&p));
}

#[test]
fn cylinder_ignores_points_beyond_height() {
    let cyl = CylinderCollider::new(Vec3::ZERO, 10.0, 20.0);
    assert!(cyl.probe(Vec3::new(5.0, 0.0, 9.0)).is_some());
    assert!(cyl.probe(Vec3::new(5.0, 0.0, 11.0)).is_none());
    assert!(cyl.probe(Vec3::new(5.0, 0.0, -11.0)).is_none());
}

#[test]
fn cylinder_respects_axis() {
    let cyl = CylinderCollider::new(Vec3::ZERO, 10.0, 20.0).with_axis(Axis::Y);
    let contact = cyl.probe(Vec3::new(0.0, 9.0, 4.0)).unwrap();
    assert_relative_eq!(contact.normal, Vec3::Z);
    assert_relative_eq!(contact.depth, 6.0);
}

#[test]
fn cylinder_axis_particle_stays_finite() {
    let cyl = CylinderCollider::new(Vec3::ZERO, 10.0, 20.0);
    let mut p = Particle::new(Vec3::ZERO);
    let contact = cyl.resolve_collision(&mut p).unwrap();

    assert!(is_finite(contact.normal));
    assert_relative_eq!(contact.normal.length(), 1.0, epsilon = 1e-12);
    assert!(is_finite(p.position));
}

// ─── Cone Tests ───────────────────────────────────────────────

#[test]
fn cone_radius_grows_from_apex() {
    let cone = ConeCollider::new(Vec3::ZERO, 40.0, 50.0);
    assert_relative_eq!(cone.radius_at(0.0), 0.0);
    assert_relative_eq!(cone.radius_at(25.0), 20.0);
    assert_relative_eq!(cone.radius_at(50.0), 40.0);
}

#[test]
fn cone_pushes_out_and_bounces() {
    let cone = ConeCollider::new(Vec3::ZERO, 40.0, 50.0);
    let mut p = Particle::new(Vec3::new(5.0, 25.0, 0.0)).with_velocity(Vec3::new(-1.0, 0.0, 0.0));
    let contact = cone.resolve_collision(&mut p).unwrap();

    assert_relative_eq!(contact.normal, Vec3::X);
    assert!(p.position.x > cone.radius_at(25.0));
    assert_relative_eq!(p.velocity.x, 0.5, epsilon = 1e-12);
}

#[test]
fn cone_ignores_points_outside_height() {
    let cone = ConeCollider::new(Vec3::ZERO, 40.0, 50.0);
    assert!(cone.probe(Vec3::new(0.0, -1.0, 0.0)).is_none());
    assert!(cone.probe(Vec3::new(0.0, 60.0, 0.0)).is_none());
    assert!(cone.probe(Vec3::new(30.0, 25.0, 0.0)).is_none());
}

#[test]
fn cone_axis_particle_stays_finite() {
    let cone = ConeCollider::new(Vec3::ZERO, 40.0, 50.0);
    let mut p = Particle::new(Vec3::new(0.0, 25.0, 0.0));
    cone.resolve_collision(&mut p).unwrap();
    assert!(is_finite(p.position));
    assert!(is_finite(p.velocity));
}

// ─── Pipeline Tests ───────────────────────────────────────────

#[test]
fn pipeline_skips_locked_particles() {
    let colliders = vec![Collider::from(SphereCollider::new(Vec3::ZERO, 50.0))];
    let mut p = Particle::locked(Vec3::new(0.0, 10.0, 0.0));
    let mut result = ContactResult::default();

    collide_particle(&mut p, &colliders, ContactPhase::Swept, &mut result);
    assert_eq!(p.position, Vec3::new(0.0, 10.0, 0.0));
    assert_eq!(result.resolved_count, 0);
}

#[test]
fn pipeline_filters_by_phase() {
    let colliders = vec![
        Collider::from(SphereCollider::new(Vec3::ZERO, 50.0)),
        Collider::from(BoxCollider::new(Vec3::new(0.0, 0.0, 200.0), Vec3::splat(20.0))),
    ];
    let mut p = Particle::new(Vec3::new(0.0, 0.0, 40.0));
    let mut result = ContactResult::default();

    collide_particle(&mut p, &colliders, ContactPhase::Discrete, &mut result);
    assert_eq!(result.resolved_count, 0);
    assert!(!p.is_inside());

    collide_particle(&mut p, &colliders, ContactPhase::Swept, &mut result);
    assert_eq!(result.resolved_count, 1);
    assert!(p.is_inside());
    assert!(p.position.length() >= 50.0);
}

#[test]
fn pipeline_resolves_edges_against_boxes_only() {
    let colliders = vec![
        Collider::from(SphereCollider::new(Vec3::new(0.0, 0.0, 500.0), 10.0)),
        Collider::from(plate()),
    ];
    let mut particles = vec![
        Particle::new(Vec3::new(0.0, -20.0, 0.0)),
        Particle::new(Vec3::new(0.0, 20.0, 0.0)),
    ];
    let springs = vec![Spring::new(ParticleId(0), ParticleId(1), 40.0, SpringKind::Structural).unwrap()];
    let mut result = ContactResult::default();

    collide_edges(&mut particles, &springs, &colliders, &mut result);
    assert_eq!(result.resolved_count, 1);
    assert!(particles[0].position.y < -20.0);
}

#[test]
fn contact_result_tracks_max_and_total() {
    let mut a = ContactResult::default();
    a.record(&Contact { normal: Vec3::Y, depth: 2.0 });
    a.record(&Contact { normal: Vec3::Y, depth: 1.0 });

    let mut b = ContactResult::default();
    b.record(&Contact { normal: Vec3::X, depth: 5.0 });
    a.merge(&b);

    assert_eq!(a.resolved_count, 3);
    assert_relative_eq!(a.max_penetration, 5.0);
    assert_relative_eq!(a.total_depth, 8.0);
}

// ─── Rendering Tests ──────────────────────────────────────────

#[derive(Default)]
struct Recorder {
    shapes: Vec<&'static str>,
}

impl ShapeRenderer for Recorder {
    fn sphere(&mut self, _center: Vec3, _radius: f64) {
        self.shapes.push("sphere");
    }

    fn cuboid(&mut self, _center: Vec3, _size: Vec3) {
        self.shapes.push("box");
    }

    fn cone(&mut self, _apex: Vec3, _axis: Vec3, _height: f64, _base_radius: f64) {
        self.shapes.push("cone");
    }
}

#[test]
fn draw_dispatches_per_variant() {
    let colliders = vec![
        Collider::from(SphereCollider::new(Vec3::ZERO, 1.0)),
        Collider::from(BoxCollider::new(Vec3::ZERO, Vec3::ONE)),
        Collider::from(CylinderCollider::new(Vec3::ZERO, 1.0, 1.0)),
        Collider::from(ConeCollider::new(Vec3::ZERO, 1.0, 1.0)),
    ];
    let mut recorder = Recorder::default();
    for c in &colliders {
        c.draw(&mut recorder);
        c.draw(&mut NullRenderer);
    }
    // Cylinder falls through to the default no-op.
    assert_eq!(recorder.shapes, vec!["sphere", "box", "cone"]);
}

// ─── Serialization Tests ──────────────────────────────────────

#[derive(serde::Deserialize)]
struct ColliderList {
    colliders: Vec<Collider>,
}

#[test]
fn colliders_parse_from_toml() {
    let src = r#"
        [[colliders]]
        type = "sphere"
        center = [150.0, 250.0, 20.0]
        radius = 50.0

        [[colliders]]
        type = "box"
        center = [0.0, 600.0, 0.0]
        size = [3000.0, 10.0, 5000.0]
        mode = "soft"

        [[colliders]]
        type = "cylinder"
        origin = [200.0, 300.0, 0.0]
        radius = 80.0
        height = 100.0
    "#;
    let list: ColliderList = toml::from_str(src).unwrap();

    assert_eq!(list.colliders.len(), 3);
    assert_eq!(list.colliders[0].kind(), "sphere");
    match &list.colliders[1] {
        Collider::Box(b) => {
            assert_eq!(b.mode, ResolutionMode::Soft);
            assert_relative_eq!(b.restitution, 0.9);
        }
        other => panic!("expected box, got {}", other.kind()),
    }
    match &list.colliders[2] {
        Collider::Cylinder(c) => assert_eq!(c.axis, Axis::Z),
        other => panic!("expected cylinder, got {}", other.kind()),
    }
}

#[test]
fn collider_json_round_trip() {
    let cone = Collider::from(ConeCollider::new(Vec3::new(150.0, 200.0, 70.0), 40.0, 50.0));
    let json = serde_json::to_string(&cone).unwrap();
    assert!(json.contains("\"type\":\"cone\""));
    let recovered: Collider = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, cone);
}
