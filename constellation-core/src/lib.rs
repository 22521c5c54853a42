pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod host;
pub mod input;
pub mod math;
pub mod particle;
pub mod render;
pub mod state;

pub use clock::FrameClock;
pub use config::EngineConfig;
pub use engine::Simulation;
pub use error::{ConfigError, EngineError, SurfaceError};
pub use host::{EventSource, FrameHandle, FrameScheduler, Host, SubscriptionId};
pub use input::{EventKind, EventResponse, InputEvent, Key, WheelDirection};
pub use particle::{Particle, ParticleOptions, ParticleStyle};
pub use render::{DisplayList, DrawCommand, Font, Renderer, Rgba};
pub use state::{InteractionMode, InteractionState};

// Test helpers module (public for integration tests)
pub mod tests;
