//! Headless surface that records draw calls

use crate::platform::Surface;
use crate::sim::Color;

/// One recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: String,
        color: Color,
    },
}

/// Collects every draw call and alert for later inspection
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    pub alerts: Vec<String>,
}

impl RecordingSurface {
    /// Drop recorded draw calls (alerts are kept)
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Rectangles filled with `color`
    pub fn rects_of(&self, color: Color) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(move |cmd| matches!(cmd, DrawCommand::Rect { color: fill, .. } if *fill == color))
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
            font: font.to_owned(),
            color,
        });
    }

    fn alert(&mut self, message: &str) {
        log::info!("Alert: {}", message);
        self.alerts.push(message.to_owned());
    }
}
