//! Drawing surface seam.
//!
//! The engine never talks to a windowing or canvas API directly. It issues
//! calls against [`Renderer`], and front ends either implement it on top of
//! their own painter or replay a recorded [`DisplayList`].

use crate::error::SurfaceError;
use glam::Vec2;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FONT_SIZE: f32 = 12.0;
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Font used by [`Renderer::draw_text`]
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub size: f32,
    pub family: String,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            size: DEFAULT_FONT_SIZE,
            family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

/// The drawing capability consumed by the simulation
pub trait Renderer {
    /// Obtain the drawing context. Called once when the simulation is built;
    /// an error here aborts construction.
    fn acquire(&mut self) -> Result<(), SurfaceError> {
        Ok(())
    }

    fn resize(&mut self, width: f32, height: f32);

    fn clear(&mut self);

    fn draw_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        fill: Option<Rgba>,
        stroke: Option<Rgba>,
        stroke_width: f32,
    );

    /// Black line between `a` and `b`; `opacity` is passed through unclamped.
    fn draw_line(&mut self, a: Vec2, b: Vec2, opacity: f32);

    /// Text anchored at its top-left corner.
    fn draw_text(&mut self, text: &str, pos: Vec2, font: &Font);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize {
        width: f32,
        height: f32,
    },
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        fill: Option<Rgba>,
        stroke: Option<Rgba>,
        stroke_width: f32,
    },
    Line {
        a: Vec2,
        b: Vec2,
        opacity: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        font: Font,
    },
}

/// A [`Renderer`] that records the calls of the current frame.
///
/// `clear()` drops everything recorded before it, so after a frame the list
/// holds exactly what is visible.
#[derive(Debug, Default)]
pub struct DisplayList {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size requested by the last `resize`
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Renderer for DisplayList {
    fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        fill: Option<Rgba>,
        stroke: Option<Rgba>,
        stroke_width: f32,
    ) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
            stroke,
            stroke_width,
        });
    }

    fn draw_line(&mut self, a: Vec2, b: Vec2, opacity: f32) {
        self.commands.push(DrawCommand::Line { a, b, opacity });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, font: &Font) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            font: font.clone(),
        });
    }
}
