//! Frame rendering
//!
//! The game draws through the [`DrawSurface`] trait, so the same frame code
//! feeds the browser canvas, the vertex mesh builder and the test recorder.

pub mod mesh;
pub mod recorder;
pub mod shapes;
pub mod vertex;

pub use mesh::{MeshSurface, TextLabel};
pub use recorder::{DrawCommand, RecordingSurface};
pub use vertex::{Color, Vertex, colors};

use crate::consts::{SCORE_FONT, SCORE_TEXT_Y};
use crate::sim::{Ball, GameState, Paddle, Playfield, Score, Vector2};

/// Horizontal anchor for text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Canvas `textAlign` value
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Something the game can draw on
pub trait DrawSurface {
    /// Size of the drawable area
    fn playfield(&self) -> Playfield;

    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    fn fill_circle(&mut self, center: Vector2, radius: f64, color: Color);

    /// Filled axis-aligned rectangle centered on `center`
    fn fill_rect(&mut self, center: Vector2, width: f64, height: f64, color: Color);

    fn line(&mut self, from: Vector2, to: Vector2, color: Color);

    fn text(&mut self, text: &str, position: Vector2, align: TextAlign, font: &str, color: Color);
}

/// Draw a full frame of `state`: background, ball, paddles, then the
/// divider and scores on top.
pub fn render_frame<S: DrawSurface + ?Sized>(surface: &mut S, state: &GameState) {
    surface.clear(colors::BACKGROUND);
    draw_ball(surface, &state.ball);
    draw_paddle(surface, &state.left);
    draw_paddle(surface, &state.right);
    draw_scores(surface, &state.score);
}

pub fn draw_ball<S: DrawSurface + ?Sized>(surface: &mut S, ball: &Ball) {
    surface.fill_circle(ball.location, ball.radius, colors::FOREGROUND);
}

pub fn draw_paddle<S: DrawSurface + ?Sized>(surface: &mut S, paddle: &Paddle) {
    surface.fill_rect(paddle.location, paddle.width, paddle.height, colors::FOREGROUND);
}

/// Center divider plus each player's score over their half
pub fn draw_scores<S: DrawSurface + ?Sized>(surface: &mut S, score: &Score) {
    let field = surface.playfield();
    let mid = field.width / 2.0;
    surface.line(
        Vector2::new(mid, 0.0),
        Vector2::new(mid, field.height),
        colors::FOREGROUND,
    );

    let quarter = field.width / 4.0;
    surface.text(
        &score.left.to_string(),
        Vector2::new(quarter, SCORE_TEXT_Y),
        TextAlign::Center,
        SCORE_FONT,
        colors::FOREGROUND,
    );
    surface.text(
        &score.right.to_string(),
        Vector2::new(field.width - quarter, SCORE_TEXT_Y),
        TextAlign::Center,
        SCORE_FONT,
        colors::FOREGROUND,
    );
}
