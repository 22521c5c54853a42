//! Replays a recorded frame onto an egui painter.

use constellation_core::{DrawCommand, Font, Rgba};
use glam::Vec2;

fn color(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

fn font_id(font: &Font) -> egui::FontId {
    let family = match font.family.as_str() {
        "monospace" => egui::FontFamily::Monospace,
        _ => egui::FontFamily::Proportional,
    };
    egui::FontId::new(font.size, family)
}

/// Paint `commands` with surface-local coordinates mapped onto `rect`.
pub fn replay(painter: &egui::Painter, rect: egui::Rect, commands: &[DrawCommand]) {
    let to_screen = |p: Vec2| rect.min + egui::vec2(p.x, p.y);

    for command in commands {
        match command {
            // The panel already has the viewport size
            DrawCommand::Resize { .. } => {}
            DrawCommand::Clear => {
                painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
            }
            DrawCommand::Circle {
                center,
                radius,
                fill,
                stroke,
                stroke_width,
            } => {
                let stroke = match stroke {
                    Some(c) if *stroke_width > 0.0 => egui::Stroke::new(*stroke_width, color(*c)),
                    _ => egui::Stroke::NONE,
                };
                painter.circle(
                    to_screen(*center),
                    *radius,
                    fill.map(color).unwrap_or(egui::Color32::TRANSPARENT),
                    stroke,
                );
            }
            DrawCommand::Line { a, b, opacity } => {
                let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
                painter.line_segment(
                    [to_screen(*a), to_screen(*b)],
                    egui::Stroke::new(1.0, egui::Color32::from_black_alpha(alpha)),
                );
            }
            DrawCommand::Text { text, pos, font } => {
                painter.text(
                    to_screen(*pos),
                    egui::Align2::LEFT_TOP,
                    text,
                    font_id(font),
                    egui::Color32::BLACK,
                );
            }
        }
    }
}
