//! Pointer and keyboard driven state shared between the event layer and the
//! frame loop.
//!
//! Each event kind has exactly one mutation entry point here; the frame
//! algorithm only reads. A multi-threaded host should put this struct behind
//! a single mutex.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// How particles near the pointer react
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    #[default]
    Neutral,
    Attraction,
    Repulsion,
}

#[derive(Debug, Clone)]
pub struct InteractionState {
    pub pointer: Vec2,
    pub mode: InteractionMode,
    pub paused: bool,
    pub target_count: usize,
}

impl InteractionState {
    pub fn new(target_count: usize, mode: InteractionMode) -> Self {
        Self {
            pointer: Vec2::ZERO,
            mode,
            paused: false,
            target_count,
        }
    }

    pub fn is_attracting(&self) -> bool {
        self.mode == InteractionMode::Attraction
    }

    pub fn is_repelling(&self) -> bool {
        self.mode == InteractionMode::Repulsion
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    /// Primary click: attraction on/off. Turning it on clears repulsion.
    pub fn toggle_attraction(&mut self) {
        self.mode = match self.mode {
            InteractionMode::Attraction => InteractionMode::Neutral,
            _ => InteractionMode::Attraction,
        };
    }

    /// Secondary click: repulsion on/off. Turning it on clears attraction.
    pub fn toggle_repulsion(&mut self) {
        self.mode = match self.mode {
            InteractionMode::Repulsion => InteractionMode::Neutral,
            _ => InteractionMode::Repulsion,
        };
    }

    /// Touch has no hover, so attraction is held for as long as the finger is down.
    pub fn touch_started(&mut self) {
        self.mode = InteractionMode::Attraction;
    }

    pub fn touch_ended(&mut self) {
        if self.mode == InteractionMode::Attraction {
            self.mode = InteractionMode::Neutral;
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }
}
