use crate::clock::FrameClock;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::host::{FrameHandle, Host, SubscriptionId};
use crate::input::{EventKind, EventResponse, InputEvent, Key, WheelDirection};
use crate::math::{angle_radians, connector_opacity, distance};
use crate::particle::{Particle, ParticleOptions};
use crate::render::{Font, Renderer, Rgba};
use crate::state::{InteractionMode, InteractionState};
use glam::Vec2;
use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::PI;

/// Height taken off the viewport so the surface never triggers a scrollbar
pub const SURFACE_HEIGHT_OFFSET: f32 = 6.0;
/// The pointer only pushes or pulls while this far inside every surface edge
pub const POINTER_INSET: f32 = 10.0;
/// Displacement per frame for a particle caught by attraction or repulsion
pub const POINTER_STEP: f32 = 2.0;
pub const POINTER_MARKER_RADIUS: f32 = 10.0;
/// Normal motion resumes only this far beyond the proximity radius
const PROXIMITY_RELEASE: f32 = 2.0;

/// The particle field: owns every particle plus the interaction state and
/// issues all drawing calls of a frame.
pub struct Simulation<R: Renderer> {
    config: EngineConfig,
    renderer: R,
    particles: Vec<Particle>,
    state: InteractionState,
    clock: FrameClock,
    rng: SmallRng,
    surface: Vec2,
    running: bool,
    pending_frame: Option<FrameHandle>,
    subscriptions: Vec<(EventKind, SubscriptionId)>,
}

impl<R: Renderer> Simulation<R> {
    /// Validate `config`, acquire the drawing context and populate the field
    /// for a surface fitted to `viewport`.
    pub fn new(config: EngineConfig, mut renderer: R, viewport: Vec2) -> Result<Self, EngineError> {
        config.validate()?;
        renderer.acquire()?;

        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let mut sim = Self {
            state: InteractionState::new(config.target_particle_count, config.initial_mode),
            config,
            renderer,
            particles: Vec::new(),
            clock: FrameClock::new(0.0),
            rng,
            surface: Vec2::ZERO,
            running: false,
            pending_frame: None,
            subscriptions: Vec::new(),
        };
        sim.fit_surface(viewport);
        for _ in 0..sim.state.target_count {
            let particle = sim.create_particle(false);
            sim.particles.push(particle);
        }
        Ok(sim)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Replace the live particles, e.g. with a deterministic fixture.
    pub fn set_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Logical surface size after the last resize
    pub fn surface_size(&self) -> Vec2 {
        self.surface
    }

    pub fn fps(&self) -> f64 {
        self.clock.fps()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    /// Event kinds this simulation still holds a subscription for
    pub fn active_subscriptions(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.subscriptions.iter().map(|(kind, _)| *kind)
    }

    /// New particle at a uniform-random position, or at the surface center.
    pub fn create_particle(&mut self, from_center: bool) -> Particle {
        let pos = if from_center {
            self.surface / 2.0
        } else {
            Vec2::new(
                self.rng.gen_range(0.0..=self.surface.x),
                self.rng.gen_range(0.0..=self.surface.y),
            )
        };
        let speed = self
            .rng
            .gen_range(self.config.min_speed..=self.config.max_speed);
        let radius = self
            .rng
            .gen_range(self.config.min_radius..=self.config.max_radius)
            .round()
            .clamp(self.config.min_radius, self.config.max_radius);
        Particle::new(
            pos,
            ParticleOptions {
                radius: Some(radius),
                speed: Some(speed),
                style: None,
            },
            &mut self.rng,
        )
    }

    /// Whether `particle` has left the surface extended by `min_distance` on
    /// every side.
    pub fn is_outside(&self, particle: &Particle) -> bool {
        let margin = self.config.min_distance;
        let r = particle.radius();
        let p = particle.pos;
        p.x + r > self.surface.x + margin
            || p.x - r < -margin
            || p.y + r > self.surface.y + margin
            || p.y - r < -margin
    }

    /// Subscribe to every event kind and schedule the first frame.
    ///
    /// `now_ms` becomes the frame clock's reference, so hosts handing out
    /// absolute timestamps still get a sensible first reading.
    pub fn start(&mut self, host: &mut impl Host, now_ms: f64) {
        if self.running {
            return;
        }
        self.clock = FrameClock::new(now_ms);
        self.subscriptions = EventKind::ALL
            .iter()
            .map(|kind| (*kind, host.subscribe(*kind)))
            .collect();
        self.pending_frame = Some(host.schedule_next_frame());
        self.running = true;
        info!(
            "simulation started with {} particles on a {}x{} surface",
            self.particles.len(),
            self.surface.x,
            self.surface.y
        );
    }

    /// Frame callback: run one frame and re-arm while running.
    ///
    /// Returns `false` when the simulation was stopped and nothing was drawn.
    pub fn on_frame(&mut self, now_ms: f64, viewport: Vec2, host: &mut impl Host) -> bool {
        if !self.running {
            warn!("frame callback delivered to a stopped simulation");
            return false;
        }
        self.pending_frame = None;
        self.run_frame(now_ms, viewport);
        self.pending_frame = Some(host.schedule_next_frame());
        true
    }

    /// Stop re-arming, cancel the pending frame and drop every subscription.
    pub fn stop(&mut self, host: &mut impl Host) {
        self.running = false;
        if let Some(handle) = self.pending_frame.take() {
            host.cancel_frame(handle);
        }
        for (_, id) in self.subscriptions.drain(..) {
            host.unsubscribe(id);
        }
        info!("simulation stopped");
    }

    /// Route one input sample to its mutation entry point.
    pub fn handle_event(&mut self, event: InputEvent) -> EventResponse {
        match event {
            InputEvent::PointerMoved(pos) => self.state.pointer_moved(pos),
            InputEvent::PrimaryClick => self.state.toggle_attraction(),
            InputEvent::SecondaryClick => {
                self.state.toggle_repulsion();
                return EventResponse::SuppressDefault;
            }
            InputEvent::TouchStart => self.state.touch_started(),
            InputEvent::TouchEnd => self.state.touch_ended(),
            InputEvent::Wheel(direction) => self.wheel(direction),
            InputEvent::KeyReleased(Key::Space) => self.state.toggle_pause(),
            InputEvent::KeyReleased(_) => {}
        }
        EventResponse::Continue
    }

    /// Change the target count by one and apply it to the live particles at once.
    pub fn wheel(&mut self, direction: WheelDirection) {
        match direction {
            WheelDirection::Decrement => {
                self.state.target_count = self.state.target_count.saturating_sub(1);
                self.particles.pop();
            }
            WheelDirection::Increment => {
                self.state.target_count += 1;
                let particle = self.create_particle(false);
                self.particles.push(particle);
            }
        }
        debug!("target particle count now {}", self.state.target_count);
    }

    /// Draw one frame at `now_ms` for a viewport of the given size.
    pub fn run_frame(&mut self, now_ms: f64, viewport: Vec2) {
        self.fit_surface(viewport);
        self.renderer.clear();

        let mut outside = Vec::new();
        for i in 0..self.particles.len() {
            draw_particle(&mut self.renderer, &self.particles[i]);
            if self.is_outside(&self.particles[i]) {
                outside.push(i);
            } else {
                self.pointer_proximity(i);
            }
        }

        let removed = outside.len();
        self.remove_particles(outside);
        for _ in 0..removed {
            let particle = self.create_particle(false);
            self.particles.push(particle);
        }
        if removed > 0 {
            debug!("respawned {} particles that left the surface", removed);
        }

        self.draw_connectors();
        self.draw_pointer();
        let fps = self.clock.tick(now_ms);
        self.draw_overlay(fps);
    }

    fn fit_surface(&mut self, viewport: Vec2) {
        self.surface = Vec2::new(
            surface_extent(viewport.x),
            surface_extent(viewport.y - SURFACE_HEIGHT_OFFSET),
        );
        self.renderer.resize(self.surface.x, self.surface.y);
    }

    fn pointer_inside_inset(&self) -> bool {
        let p = self.state.pointer;
        p.x > POINTER_INSET
            && p.x < self.surface.x - POINTER_INSET
            && p.y > POINTER_INSET
            && p.y < self.surface.y - POINTER_INSET
    }

    fn pointer_proximity(&mut self, index: usize) {
        let pointer = self.state.pointer;
        let paused = self.state.paused;
        let mode = self.state.mode;
        let inside = self.pointer_inside_inset();
        let config = &self.config;
        let particle = &mut self.particles[index];

        let dist = distance(particle.pos, pointer);
        let interacting = mode != InteractionMode::Neutral;

        if interacting && !paused && dist < config.pointer_proximity && inside {
            let mut angle = angle_radians(particle.pos, pointer);
            if mode == InteractionMode::Repulsion {
                angle += PI;
            }
            particle.displace(angle, POINTER_STEP);
        }

        if !interacting && dist < config.min_distance {
            let opacity =
                connector_opacity(dist, config.full_opacity_distance, config.min_distance);
            self.renderer.draw_line(particle.pos, pointer, opacity);
        }

        if !paused && (dist > config.pointer_proximity + PROXIMITY_RELEASE || !interacting) {
            particle.advance(None);
        }
    }

    /// Remove in descending index order so earlier indices stay valid.
    fn remove_particles(&mut self, mut indices: Vec<usize>) {
        indices.sort_unstable_by(|a, b| b.cmp(a));
        for index in indices {
            self.particles.remove(index);
        }
    }

    /// Every unordered pair closer than `min_distance` gets a connector.
    fn draw_connectors(&mut self) {
        let full = self.config.full_opacity_distance;
        let min = self.config.min_distance;
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = self.particles[i].pos;
                let b = self.particles[j].pos;
                let dist = distance(a, b);
                if dist < min {
                    self.renderer
                        .draw_line(a, b, connector_opacity(dist, full, min));
                }
            }
        }
    }

    fn draw_pointer(&mut self) {
        self.renderer.draw_circle(
            self.state.pointer,
            POINTER_MARKER_RADIUS,
            Some(Rgba::BLACK),
            None,
            0.0,
        );
    }

    fn draw_overlay(&mut self, fps: f64) {
        let font = Font::default();
        let pointer = self.state.pointer;
        self.renderer
            .draw_text(&format!("FPS: {:.0}", fps), Vec2::new(10.0, 0.0), &font);
        self.renderer.draw_text(
            &format!("Mouse: {}, {}", pointer.x, pointer.y),
            Vec2::new(10.0, 20.0),
            &font,
        );
        self.renderer.draw_text(
            &format!("Particles: {}", self.particles.len()),
            Vec2::new(10.0, 40.0),
            &font,
        );
    }
}

/// Non-finite or negative sizes collapse to an empty axis.
fn surface_extent(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

fn draw_particle(renderer: &mut impl Renderer, particle: &Particle) {
    let style = particle.style();
    renderer.draw_circle(
        particle.pos,
        particle.radius(),
        Some(style.fill),
        style.stroke,
        style.stroke_width,
    );
}
