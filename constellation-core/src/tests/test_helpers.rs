//! Test helper utilities shared by unit and integration tests

use crate::error::SurfaceError;
use crate::host::{EventSource, FrameHandle, FrameScheduler, SubscriptionId};
use crate::input::EventKind;
use crate::particle::Particle;
use crate::render::{DisplayList, Font, Renderer, Rgba};
use glam::Vec2;
use std::collections::{HashMap, HashSet};

/// Check if two f32 values are approximately equal within tolerance
pub fn approx_eq_f32(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

/// `count` motionless particles stacked on `pos`
pub fn stacked_particles(count: usize, pos: Vec2, radius: f32) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle::with_direction(pos, radius, 0.0, Vec2::ZERO))
        .collect()
}

/// Host that records scheduling and subscriptions instead of running a loop
#[derive(Debug, Default)]
pub struct ManualHost {
    next_id: u64,
    pub pending_frames: HashSet<FrameHandle>,
    pub cancelled_frames: Vec<FrameHandle>,
    pub subscriptions: HashMap<SubscriptionId, EventKind>,
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Take the pending frame, as the scheduler would before invoking the callback
    pub fn fire_frame(&mut self) -> Option<FrameHandle> {
        let handle = *self.pending_frames.iter().next()?;
        self.pending_frames.remove(&handle);
        Some(handle)
    }

    pub fn is_subscribed(&self, kind: EventKind) -> bool {
        self.subscriptions.values().any(|k| *k == kind)
    }
}

impl FrameScheduler for ManualHost {
    fn schedule_next_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next());
        self.pending_frames.insert(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending_frames.remove(&handle);
        self.cancelled_frames.push(handle);
    }
}

impl EventSource for ManualHost {
    fn subscribe(&mut self, kind: EventKind) -> SubscriptionId {
        let id = SubscriptionId(self.next());
        self.subscriptions.insert(id, kind);
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscriptions.remove(&id);
    }
}

/// Surface whose drawing context can never be acquired
#[derive(Debug, Default)]
pub struct UnavailableSurface {
    inner: DisplayList,
}

impl Renderer for UnavailableSurface {
    fn acquire(&mut self) -> Result<(), SurfaceError> {
        Err(SurfaceError::new("no 2d context"))
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.inner.resize(width, height);
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn draw_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        fill: Option<Rgba>,
        stroke: Option<Rgba>,
        stroke_width: f32,
    ) {
        self.inner
            .draw_circle(center, radius, fill, stroke, stroke_width);
    }

    fn draw_line(&mut self, a: Vec2, b: Vec2, opacity: f32) {
        self.inner.draw_line(a, b, opacity);
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, font: &Font) {
        self.inner.draw_text(text, pos, font);
    }
}
