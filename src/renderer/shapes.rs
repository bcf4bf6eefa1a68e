//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Color, Vertex};

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(center: Vec2, size: Vec2, color: Color) -> Vec<Vertex> {
    let half = size / 2.0;
    quad(
        center + Vec2::new(-half.x, -half.y),
        center + Vec2::new(half.x, -half.y),
        center + Vec2::new(half.x, half.y),
        center + Vec2::new(-half.x, half.y),
        color,
    )
}

/// Generate vertices for a line segment drawn as a thin quad
pub fn line(from: Vec2, to: Vec2, thickness: f32, color: Color) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (thickness / 2.0);
    quad(from + perp, to + perp, to - perp, from - perp, color)
}

/// Two triangles covering the quad `a b c d` (in winding order)
fn quad(a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: Color) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(a.x, a.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::colors;

    #[test]
    fn test_circle_vertex_count_and_radius() {
        let center = Vec2::new(100.0, 50.0);
        let vertices = circle(center, 10.0, colors::WHITE, 16);
        assert_eq!(vertices.len(), 48);
        for tri in vertices.chunks(3) {
            assert_eq!(tri[0].position, [100.0, 50.0]);
            let edge = Vec2::from(tri[1].position);
            assert!((edge.distance(center) - 10.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_rect_corners() {
        let vertices = rect(Vec2::new(10.0, 300.0), Vec2::new(10.0, 100.0), colors::WHITE);
        assert_eq!(vertices.len(), 6);
        let xs: Vec<f32> = vertices.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = vertices.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 5.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 15.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 250.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 350.0);
    }

    #[test]
    fn test_vertical_line_has_width() {
        let vertices = line(Vec2::new(400.0, 0.0), Vec2::new(400.0, 600.0), 2.0, colors::WHITE);
        assert_eq!(vertices.len(), 6);
        for v in &vertices {
            assert!((v.position[0] - 400.0).abs() <= 1.0 + 1e-5);
        }
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        let p = Vec2::new(3.0, 3.0);
        assert!(line(p, p, 2.0, colors::WHITE).is_empty());
    }
}
