//! Loading configuration documents from disk

use constellation_core::{
    ConfigError, DisplayList, EngineConfig, InteractionMode, Simulation,
};
use glam::Vec2;
use std::path::PathBuf;

fn test_data_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(filename);
    path
}

#[test]
fn test_load_dense_config() {
    let config = EngineConfig::from_json_file(test_data_path("dense.json")).expect("Should load");
    assert_eq!(config.target_particle_count, 60);
    assert_eq!(config.initial_mode, InteractionMode::Repulsion);
    assert_eq!(config.seed, Some(2024));
    // unspecified fields keep their defaults
    assert_eq!(config.pointer_proximity, 100.0);

    let sim = Simulation::new(config, DisplayList::new(), Vec2::new(800.0, 606.0)).unwrap();
    assert_eq!(sim.particles().len(), 60);
    assert!(sim.state().is_repelling());
}

#[test]
fn test_inverted_opacity_config_is_rejected() {
    let err = EngineConfig::from_json_file(test_data_path("inverted_opacity.json")).unwrap_err();
    assert!(matches!(err, ConfigError::OpacityRange { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = EngineConfig::from_json_file(test_data_path("missing.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_config_roundtrips_through_json() {
    let config = EngineConfig {
        seed: Some(9),
        ..EngineConfig::default()
    };
    let json = config.to_json_string().unwrap();
    assert_eq!(EngineConfig::from_json_str(&json).unwrap(), config);
}
