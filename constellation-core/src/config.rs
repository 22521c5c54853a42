//! Simulation configuration.
//!
//! Every option has a default, so a JSON document only needs the fields it
//! wants to change:
//!
//! ```json
//! { "target_particle_count": 80, "initial_mode": "repulsion", "seed": 7 }
//! ```

use crate::error::ConfigError;
use crate::state::InteractionMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub target_particle_count: usize,
    pub min_radius: f32,
    pub max_radius: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Connector trigger distance, also the off-screen margin before removal
    pub min_distance: f32,
    pub full_opacity_distance: f32,
    pub pointer_proximity: f32,
    pub initial_mode: InteractionMode,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_particle_count: 10,
            min_radius: 2.0,
            max_radius: 5.0,
            min_speed: 0.5,
            max_speed: 1.0,
            min_distance: 200.0,
            full_opacity_distance: 150.0,
            pointer_proximity: 100.0,
            initial_mode: InteractionMode::Neutral,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json_str(&source)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations that would produce degenerate particles or
    /// connector opacities outside [0, 1].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("min_radius", self.min_radius),
            ("max_radius", self.max_radius),
            ("min_speed", self.min_speed),
            ("max_speed", self.max_speed),
            ("min_distance", self.min_distance),
            ("full_opacity_distance", self.full_opacity_distance),
            ("pointer_proximity", self.pointer_proximity),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        for (field, value) in [
            ("min_radius", self.min_radius),
            ("min_speed", self.min_speed),
            ("min_distance", self.min_distance),
            ("pointer_proximity", self.pointer_proximity),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.min_radius > self.max_radius {
            return Err(ConfigError::InvertedRange {
                min_field: "min_radius",
                max_field: "max_radius",
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        if self.min_speed > self.max_speed {
            return Err(ConfigError::InvertedRange {
                min_field: "min_speed",
                max_field: "max_speed",
                min: self.min_speed,
                max: self.max_speed,
            });
        }

        if self.full_opacity_distance < 0.0 || self.full_opacity_distance >= self.min_distance {
            return Err(ConfigError::OpacityRange {
                full_opacity_distance: self.full_opacity_distance,
                min_distance: self.min_distance,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.target_particle_count, 10);
        assert_eq!(config.min_distance, 200.0);
        assert_eq!(config.full_opacity_distance, 150.0);
        assert_eq!(config.pointer_proximity, 100.0);
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config =
            EngineConfig::from_json_str(r#"{ "target_particle_count": 3, "initial_mode": "attraction" }"#)
                .unwrap();
        assert_eq!(config.target_particle_count, 3);
        assert_eq!(config.initial_mode, InteractionMode::Attraction);
        assert_eq!(config.max_radius, 5.0);
    }

    #[test]
    fn test_rejects_opacity_distance_at_or_above_trigger() {
        let config = EngineConfig {
            full_opacity_distance: 200.0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OpacityRange { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_radius_and_speed() {
        let config = EngineConfig {
            min_radius: 0.0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "min_radius", .. })
        ));

        let config = EngineConfig {
            min_speed: -1.0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "min_speed", .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_ranges() {
        let config = EngineConfig {
            min_speed: 2.0,
            max_speed: 1.0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { min_field: "min_speed", .. })
        ));
    }

    #[test]
    fn test_rejects_nan() {
        let config = EngineConfig {
            max_radius: f32::NAN,
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NotFinite { .. })));
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let err = EngineConfig::from_json_str("{ target_particle_count: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
