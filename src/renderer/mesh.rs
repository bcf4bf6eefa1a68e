//! Vertex mesh backend
//!
//! Tessellates each frame into a single triangle list that can be uploaded
//! to a GPU vertex buffer as-is. Text can't be tessellated here, so it is
//! kept as labels for an overlay to draw.

use glam::Vec2;

use super::shapes;
use super::vertex::{Color, Vertex};
use super::{DrawSurface, TextAlign};
use crate::sim::{Playfield, Vector2};

/// Segments used for circles
const CIRCLE_SEGMENTS: u32 = 32;
/// Line thickness in playfield units
const LINE_THICKNESS: f32 = 1.0;

/// A piece of text to draw on top of the mesh
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub position: Vector2,
    pub align: TextAlign,
    pub font: String,
    pub color: Color,
}

/// Draw surface that builds a vertex list per frame
#[derive(Debug, Clone)]
pub struct MeshSurface {
    playfield: Playfield,
    clear_color: Color,
    vertices: Vec<Vertex>,
    labels: Vec<TextLabel>,
}

impl MeshSurface {
    pub fn new(playfield: Playfield) -> Self {
        Self {
            playfield,
            clear_color: super::colors::BLACK,
            vertices: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes of the vertex list for a buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }
}

fn to_vec2(v: Vector2) -> Vec2 {
    Vec2::new(v.x as f32, v.y as f32)
}

impl DrawSurface for MeshSurface {
    fn playfield(&self) -> Playfield {
        self.playfield
    }

    /// Starts a new frame: everything drawn before is dropped
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
        self.labels.clear();
    }

    fn fill_circle(&mut self, center: Vector2, radius: f64, color: Color) {
        self.vertices.extend(shapes::circle(
            to_vec2(center),
            radius as f32,
            color,
            CIRCLE_SEGMENTS,
        ));
    }

    fn fill_rect(&mut self, center: Vector2, width: f64, height: f64, color: Color) {
        self.vertices.extend(shapes::rect(
            to_vec2(center),
            Vec2::new(width as f32, height as f32),
            color,
        ));
    }

    fn line(&mut self, from: Vector2, to: Vector2, color: Color) {
        self.vertices
            .extend(shapes::line(to_vec2(from), to_vec2(to), LINE_THICKNESS, color));
    }

    fn text(&mut self, text: &str, position: Vector2, align: TextAlign, font: &str, color: Color) {
        self.labels.push(TextLabel {
            text: text.to_string(),
            position,
            align,
            font: font.to_string(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{colors, render_frame};
    use crate::settings::Settings;
    use crate::sim::GameState;

    #[test]
    fn test_frame_mesh() {
        let state = GameState::new(&Settings::default(), 3).unwrap();
        let mut surface = MeshSurface::new(state.playfield);

        render_frame(&mut surface, &state);

        // Ball + two paddles + divider
        let expected = (CIRCLE_SEGMENTS * 3) as usize + 6 + 6 + 6;
        assert_eq!(surface.vertices().len(), expected);
        assert_eq!(surface.vertex_bytes().len(), expected * std::mem::size_of::<Vertex>());
        assert_eq!(surface.clear_color(), colors::BLACK);

        let texts: Vec<&str> = surface.labels().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["0", "0"]);
    }

    #[test]
    fn test_clear_starts_new_frame() {
        let state = GameState::new(&Settings::default(), 3).unwrap();
        let mut surface = MeshSurface::new(state.playfield);

        render_frame(&mut surface, &state);
        let first = surface.vertices().len();
        render_frame(&mut surface, &state);

        assert_eq!(surface.vertices().len(), first);
        assert_eq!(surface.labels().len(), 2);
    }
}
