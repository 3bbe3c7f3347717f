use approx::assert_abs_diff_eq;
use carsim_simulator::controller::{Feedback, PursuitController};
use carsim_simulator::geometry::{null, vec2, Vec2};
use carsim_simulator::vehicle::{VehicleConfig, VehicleModel};
use test_log::test;

const DT: f64 = 1.0 / 60.0;

/// A car at rest, facing +x, with its pivot exactly at the origin.
fn car_with_pivot_at_origin() -> VehicleModel {
    let mut car = VehicleModel::new(&VehicleConfig::default(), null()).unwrap();
    let offset = car.turn_center();
    car.set_position(-offset);
    assert_eq!(car.pivot(), null());
    car
}

fn feed(target: Vec2) -> (VehicleModel, Feedback) {
    let mut car = car_with_pivot_at_origin();
    let feedback = PursuitController.feed(&mut car, DT, target);
    (car, feedback)
}

#[test]
fn test_far_target_throttles_only() {
    let (car, feedback) = feed(vec2(200.0, 0.0));
    assert_eq!(feedback.distance, 200.0);
    assert_eq!(feedback.bearing, 0.0);
    assert_eq!(feedback.turned, 0.0);
    assert_eq!(car.rotation(), 0.0);

    assert_abs_diff_eq!(
        feedback.throttle_signal.unwrap(),
        170f64.ln() / 10.0,
        epsilon = 1e-12
    );
    assert!(feedback.accelerated);
    assert_eq!(feedback.brake_signal, -100.0);
    assert!(!feedback.braked);
    assert_abs_diff_eq!(car.acceleration(), vec2(0.1, 0.0), epsilon = 1e-12);
}

#[test]
fn test_near_target_throttles_and_brakes() {
    let (car, feedback) = feed(vec2(50.0, 0.0));
    assert_eq!(feedback.distance, 50.0);
    assert_abs_diff_eq!(feedback.throttle_signal.unwrap(), 0.2996, epsilon = 1e-4);
    assert!(feedback.accelerated);
    assert_eq!(feedback.brake_signal, 50.0);
    assert!(feedback.braked);
    // Accelerate runs first, then the brake scales the new acceleration.
    assert_abs_diff_eq!(
        car.acceleration(),
        vec2(0.1 * 0.9999 / 50.0, 0.0),
        epsilon = 1e-12
    );
}

#[test]
fn test_close_target_skips_throttle() {
    let (car, feedback) = feed(vec2(20.0, 0.0));
    assert_eq!(feedback.distance, 20.0);
    assert_eq!(feedback.throttle_signal, None);
    assert!(!feedback.accelerated);
    assert_eq!(feedback.brake_signal, 80.0);
    assert!(feedback.braked);
    assert_eq!(car.acceleration(), null());
}

#[test]
fn test_dead_zone_boundary() {
    // Exactly at the dead zone edge the logarithm is never evaluated.
    let (_, feedback) = feed(vec2(30.0, 0.0));
    assert_eq!(feedback.throttle_signal, None);

    // Just outside it the signal is negative, so no throttle.
    let (car, feedback) = feed(vec2(30.5, 0.0));
    assert!(feedback.throttle_signal.unwrap() < 0.0);
    assert!(!feedback.accelerated);
    assert_eq!(car.acceleration(), null());
}

#[test]
fn test_target_on_pivot() {
    let (car, feedback) = feed(null());
    assert_eq!(feedback.bearing, 0.0);
    assert_eq!(feedback.distance, 0.0);
    assert!(feedback.braked);
    assert!(car.position().x.is_finite() && car.position().y.is_finite());
}

#[test]
fn test_signals_stay_finite() {
    let mut car = car_with_pivot_at_origin();
    let targets = [
        vec2(0.0, 0.0),
        vec2(1e6, -1e6),
        vec2(30.0, 0.0),
        vec2(-5.0, 2.0),
        vec2(400.0, 400.0),
    ];
    for i in 0..5000 {
        let target = targets[i % targets.len()];
        let feedback = PursuitController.feed(&mut car, DT, target);
        car.update(DT);
        assert!(feedback.bearing.is_finite());
        assert!(feedback.distance.is_finite());
        assert!(car.position().x.is_finite() && car.position().y.is_finite());
        assert!(car.velocity().x.is_finite() && car.velocity().y.is_finite());
    }
}
