//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// RGBA, each channel in `0.0..=1.0`
pub type Color = [f32; 4];

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];

    pub const BACKGROUND: Color = BLACK;
    /// Ball, paddles, divider and score text
    pub const FOREGROUND: Color = WHITE;

    /// CSS color string, e.g. `rgb(255,255,255)`
    pub fn css(color: Color) -> String {
        let [r, g, b, a] = color.map(|c| c.clamp(0.0, 1.0));
        let to_byte = |c: f32| (c * 255.0).round() as u8;
        if a >= 1.0 {
            format!("rgb({},{},{})", to_byte(r), to_byte(g), to_byte(b))
        } else {
            format!("rgba({},{},{},{})", to_byte(r), to_byte(g), to_byte(b), a)
        }
    }
}
