//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per frame, no time delta
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{CollisionResult, ball_paddle_collision, nearest_point_on_paddle};
pub use input::{InputState, KeyCode};
pub use state::{
    Ball, GameEvent, GameState, Paddle, PaddleControls, Playfield, Score, Side, Wall,
};
pub use tick::{check_for_collisions, control_paddles, tick, update_components};
pub use vector::Vector2;
