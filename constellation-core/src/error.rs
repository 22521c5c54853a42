use thiserror::Error;

/// Rejected simulation configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{field}` must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("`{field}` must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("`{min_field}` ({min}) must not exceed `{max_field}` ({max})")]
    InvertedRange {
        min_field: &'static str,
        max_field: &'static str,
        min: f32,
        max: f32,
    },
    #[error(
        "full_opacity_distance ({full_opacity_distance}) must be below min_distance ({min_distance})"
    )]
    OpacityRange {
        full_opacity_distance: f32,
        min_distance: f32,
    },
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// The drawing surface could not hand out a drawing context
#[derive(Debug, Error)]
#[error("drawing surface unavailable: {reason}")]
pub struct SurfaceError {
    pub reason: String,
}

impl SurfaceError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Failure to build a simulation
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
