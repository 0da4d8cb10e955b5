//! Integration tests for the orbital motion invariants

use std::f32::consts::TAU;

use orrery::plugins::simulation::SimulationPlugin;
use orrery::plugins::simulation::components::{Body, Orbit, angular_difference};
use orrery::prelude::*;
use orrery::test_utils::create_test_app;

fn seeded_app(seed: u64, rate: f32) -> App {
    let mut config = OrreryConfig::default();
    config.simulation.initial_seed = Some(seed);
    config.simulation.global_rate = rate;

    let mut app = create_test_app();
    app.add_plugins(SimulationPlugin::new(config, BodyCatalog::default()));
    app.update();
    app
}

fn snapshot(app: &mut App) -> Vec<(BodyId, Orbit, Vec3)> {
    let mut query = app.world_mut().query::<(&Body, &Orbit, &Transform)>();
    let mut bodies: Vec<_> = query
        .iter(app.world())
        .map(|(body, orbit, transform)| (body.id, *orbit, transform.translation))
        .collect();
    bodies.sort_by_key(|(id, _, _)| *id);
    bodies
}

#[test]
fn test_single_body_scenario() {
    let mut orbit = Orbit::new(10.0, 0.1, 0.0);

    orbit.advance(0.0);
    assert!((orbit.angle - 0.1).abs() < 1e-6);
    assert!((orbit.position() - Vec3::new(10.0 * 0.1f32.cos(), 0.0, 10.0 * 0.1f32.sin())).length() < 1e-4);

    for _ in 1..62 {
        orbit.advance(0.0);
    }
    assert!(angular_difference(orbit.angle, 6.2).abs() < 1e-3);
    assert!(angular_difference(orbit.angle, TAU).abs() < 0.1);
}

#[test]
fn test_every_body_follows_closed_form_over_many_frames() {
    let rate = 0.002;
    let mut app = seeded_app(11, rate);
    let start = snapshot(&mut app);

    let frames = 300;
    for _ in 0..frames {
        app.update();
    }

    let end = snapshot(&mut app);
    assert_eq!(start.len(), end.len());
    for ((id, initial, _), (_, current, position)) in start.iter().zip(end) {
        let expected = initial.angle + frames as f32 * (initial.angular_speed + rate);
        assert!(
            angular_difference(current.angle, expected).abs() < 1e-3,
            "body {id}: angle {} expected {}",
            current.angle,
            expected
        );
        assert!((position.length() - initial.radius).abs() < 1e-3);
        assert_eq!(position.y, 0.0);
    }
}

#[test]
fn test_zero_rate_uses_only_own_speeds() {
    let mut app = seeded_app(5, 0.0);
    let start = snapshot(&mut app);

    app.update();

    for ((_, before, _), (_, after, _)) in start.iter().zip(snapshot(&mut app)) {
        assert!(angular_difference(after.angle, before.angle + before.angular_speed).abs() < 1e-5);
    }
}

#[test]
fn test_rate_change_applies_from_next_frame() {
    let mut app = seeded_app(3, 0.0);
    let start = snapshot(&mut app);

    **app.world_mut().resource_mut::<GlobalSimulationRate>() = 0.01;
    app.update();

    for ((_, before, _), (_, after, _)) in start.iter().zip(snapshot(&mut app)) {
        let expected = before.angle + before.angular_speed + 0.01;
        assert!(angular_difference(after.angle, expected).abs() < 1e-5);
    }
}

#[test]
fn test_radius_never_changes() {
    let mut app = seeded_app(8, 0.001);
    let radii: Vec<f32> = snapshot(&mut app).iter().map(|(_, orbit, _)| orbit.radius).collect();

    for _ in 0..50 {
        app.update();
    }

    let after: Vec<f32> = snapshot(&mut app).iter().map(|(_, orbit, _)| orbit.radius).collect();
    assert_eq!(radii, after);
}
