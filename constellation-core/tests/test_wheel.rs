//! Wheel input changes the target count and the live particles immediately

use constellation_core::{DisplayList, EngineConfig, InputEvent, Simulation, WheelDirection};
use glam::{Vec2, Vec3};

fn simulation(target: usize) -> Simulation<DisplayList> {
    let config = EngineConfig {
        target_particle_count: target,
        seed: Some(23),
        ..EngineConfig::default()
    };
    Simulation::new(config, DisplayList::new(), Vec2::new(800.0, 606.0)).unwrap()
}

#[test]
fn test_decrement_removes_one_particle_without_a_frame() {
    let mut sim = simulation(4);
    let direction = WheelDirection::from_deltas(Vec3::new(0.0, -100.0, 0.0));

    sim.handle_event(InputEvent::Wheel(direction));

    assert_eq!(sim.state().target_count, 3);
    assert_eq!(sim.particles().len(), 3);
}

#[test]
fn test_increment_adds_one_particle_without_a_frame() {
    let mut sim = simulation(4);

    sim.handle_event(InputEvent::Wheel(WheelDirection::Increment));

    assert_eq!(sim.state().target_count, 5);
    assert_eq!(sim.particles().len(), 5);
    assert!(!sim.is_outside(&sim.particles()[4]));
}

#[test]
fn test_decrement_stops_at_zero() {
    let mut sim = simulation(1);
    sim.wheel(WheelDirection::Decrement);
    sim.wheel(WheelDirection::Decrement);

    assert_eq!(sim.state().target_count, 0);
    assert!(sim.particles().is_empty());
}

#[test]
fn test_count_holds_across_frames_after_wheel() {
    let mut sim = simulation(6);
    sim.wheel(WheelDirection::Decrement);
    sim.wheel(WheelDirection::Decrement);
    sim.wheel(WheelDirection::Increment);

    for frame in 1..=20 {
        sim.run_frame(frame as f64 * 16.0, Vec2::new(800.0, 606.0));
        assert_eq!(sim.particles().len(), 5);
    }
}
