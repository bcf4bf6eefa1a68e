//! Draw surface that records calls instead of drawing

use super::vertex::Color;
use super::{DrawSurface, TextAlign};
use crate::sim::{Playfield, Vector2};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Circle {
        center: Vector2,
        radius: f64,
        color: Color,
    },
    Rect {
        center: Vector2,
        width: f64,
        height: f64,
        color: Color,
    },
    Line {
        from: Vector2,
        to: Vector2,
        color: Color,
    },
    Text {
        text: String,
        position: Vector2,
        align: TextAlign,
        font: String,
        color: Color,
    },
}

/// Keeps every draw call since it was created (or last drained)
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    playfield: Playfield,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(playfield: Playfield) -> Self {
        Self {
            playfield,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawSurface for RecordingSurface {
    fn playfield(&self) -> Playfield {
        self.playfield
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_circle(&mut self, center: Vector2, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, center: Vector2, width: f64, height: f64, color: Color) {
        self.commands.push(DrawCommand::Rect {
            center,
            width,
            height,
            color,
        });
    }

    fn line(&mut self, from: Vector2, to: Vector2, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn text(&mut self, text: &str, position: Vector2, align: TextAlign, font: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            align,
            font: font.to_string(),
            color,
        });
    }
}
