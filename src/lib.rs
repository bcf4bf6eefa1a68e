//! Twin Paddle - classic two-player Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vectors, input, ball, paddles, collisions)
//! - `renderer`: Draw surface trait and frame drawing
//! - `game`: Per-frame driver tying the simulation to a surface
//! - `settings`: Data-driven geometry, speeds and key bindings
//! - `platform`: Browser canvas surface

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, advance_frame};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f64 = 800.0;
    pub const PLAYFIELD_HEIGHT: f64 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 10.0;
    /// Launch speed in units per frame
    pub const BALL_LAUNCH_SPEED: f64 = 8.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f64 = 10.0;
    pub const PADDLE_HEIGHT: f64 = 100.0;
    /// Paddle center distance from its side wall
    pub const PADDLE_INSET: f64 = 10.0;
    /// Units per frame while a key is held
    pub const PADDLE_SPEED: f64 = 10.0;
    /// Horizontal speed multiplier on each paddle return (compounds, no cap)
    pub const PADDLE_BOOST: f64 = 1.05;

    /// Score text
    pub const SCORE_FONT: &str = "40px Consolas";
    pub const SCORE_TEXT_Y: f64 = 100.0;
}
