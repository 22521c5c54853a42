use crate::render::Rgba;
use glam::Vec2;
use rand::Rng;
use std::ops::RangeInclusive;

/// Radius range used when a particle is built without an explicit radius.
pub const DEFAULT_RADIUS_RANGE: RangeInclusive<f32> = 5.0..=20.0;

/// Speed used when a particle is built without an explicit speed.
pub const DEFAULT_SPEED: f32 = 0.1;

/// How a particle is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleStyle {
    pub fill: Rgba,
    pub stroke: Option<Rgba>,
    pub stroke_width: f32,
}

impl Default for ParticleStyle {
    fn default() -> Self {
        Self {
            fill: Rgba::BLACK,
            stroke: None,
            stroke_width: 0.0,
        }
    }
}

/// Optional construction parameters; unset fields fall back to the defaults above
#[derive(Debug, Clone, Default)]
pub struct ParticleOptions {
    pub radius: Option<f32>,
    pub style: Option<ParticleStyle>,
    pub speed: Option<f32>,
}

/// A moving circle in the field
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    radius: f32,
    /// Per-axis components drawn independently from [-1, 1], never renormalized.
    dir: Vec2,
    speed: f32,
    style: ParticleStyle,
}

impl Particle {
    /// Build a particle at `pos`, drawing a fresh random direction from `rng`.
    pub fn new(pos: Vec2, options: ParticleOptions, rng: &mut impl Rng) -> Self {
        let radius = options
            .radius
            .unwrap_or_else(|| rng.gen_range(DEFAULT_RADIUS_RANGE));
        let dir = Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
        Self {
            pos,
            radius,
            dir,
            speed: options.speed.unwrap_or(DEFAULT_SPEED),
            style: options.style.unwrap_or_default(),
        }
    }

    /// Build a particle with a known direction. Used for deterministic fixtures.
    pub fn with_direction(pos: Vec2, radius: f32, speed: f32, dir: Vec2) -> Self {
        Self {
            pos,
            radius,
            dir,
            speed,
            style: ParticleStyle::default(),
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn direction(&self) -> Vec2 {
        self.dir
    }

    pub fn style(&self) -> &ParticleStyle {
        &self.style
    }

    /// Move one step along the direction, scaled by `speed_override` or the
    /// particle's own speed. No bounds checking.
    pub fn advance(&mut self, speed_override: Option<f32>) {
        self.pos += self.dir * speed_override.unwrap_or(self.speed);
    }

    /// Shift the particle by `step` units along `angle` (radians).
    pub fn displace(&mut self, angle: f32, step: f32) {
        self.pos += Vec2::new(angle.cos(), angle.sin()) * step;
    }
}
