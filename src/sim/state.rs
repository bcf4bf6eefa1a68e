//! Game state and core simulation types
//!
//! Everything the frame step reads or mutates lives here. Nothing in this
//! module draws or touches the platform.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::input::{InputState, KeyCode};
use super::vector::Vector2;
use crate::settings::{Settings, SettingsError};

/// Rectangular drawing area bounding ball and paddle motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Playfield {
    /// Both dimensions must be positive and finite
    pub fn new(width: f64, height: f64) -> Result<Self, SettingsError> {
        SettingsError::check_positive("playfield_width", width)?;
        SettingsError::check_positive("playfield_height", height)?;
        Ok(Self { width, height })
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Half-angle of the launch cone in degrees: the slope of the
    /// playfield's diagonal seen from its center
    pub fn half_diagonal_angle(&self) -> f64 {
        (self.height / 2.0).atan2(self.width / 2.0).to_degrees()
    }
}

/// Which player / which side of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Horizontal walls the ball bounces off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
}

/// Things that happened during one frame step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallBounce(Wall),
    /// The paddle on this side returned the ball
    PaddleHit(Side),
    /// This side's player earned a point
    Scored(Side),
}

/// Points per player, only ever incremented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// The ball. Its only behavioral state is in flight.
#[derive(Debug, Clone)]
pub struct Ball {
    pub start_location: Vector2,
    pub location: Vector2,
    pub velocity: Vector2,
    pub radius: f64,
    /// Speed magnitude given on every reset
    pub launch_speed: f64,
}

impl Ball {
    /// Create a ball at rest on its start location. Call [`Ball::reset`]
    /// to give it a launch velocity.
    pub fn new(start_location: Vector2, radius: f64, launch_speed: f64) -> Self {
        Self {
            start_location,
            location: start_location,
            velocity: Vector2::ZERO,
            radius,
            launch_speed,
        }
    }

    /// One Euler step: no time delta, the frame is the unit of time
    pub fn update(&mut self) {
        self.location.add(self.velocity);
    }

    /// Back to the start location with a fresh launch velocity inside the
    /// bounce cone, toward either side with equal odds
    pub fn reset<R: Rng + ?Sized>(&mut self, playfield: Playfield, rng: &mut R) {
        self.location = self.start_location;

        let angle = playfield.half_diagonal_angle();
        let random_angle = rng.random_range(-angle..=angle);
        log::debug!("Ball launch angle: {:.4}°", random_angle);

        let direction = if rng.random::<f64>() > 0.5 { -1.0 } else { 1.0 };
        let mut velocity = Vector2::from_angle(random_angle.to_radians());
        velocity.scale(self.launch_speed * direction);
        self.velocity = velocity;
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.location.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.location.y + self.radius
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.location.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.location.x + self.radius
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}

/// Up/down key bindings for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleControls {
    pub up: KeyCode,
    pub down: KeyCode,
}

/// A vertical paddle, positioned by its center
#[derive(Debug, Clone)]
pub struct Paddle {
    pub start_location: Vector2,
    pub location: Vector2,
    pub width: f64,
    pub height: f64,
    /// Units moved per frame while a key is held
    pub speed: f64,
    controls: PaddleControls,
}

impl Paddle {
    pub fn new(
        start_location: Vector2,
        width: f64,
        height: f64,
        speed: f64,
        controls: PaddleControls,
    ) -> Self {
        Self {
            start_location,
            location: start_location,
            width,
            height,
            speed,
            controls,
        }
    }

    pub fn controls(&self) -> PaddleControls {
        self.controls
    }

    /// Move one step if a bound key is held. Up wins when both are.
    ///
    /// The edge clamp runs before the step, so the paddle may end up one
    /// step past the wall: holding up settles at `height/2 - speed`, holding
    /// down at `playfield_height - height/2 + speed`.
    pub fn control(&mut self, input: &InputState, playfield_height: f64) {
        let half = self.height / 2.0;
        if input.is_down(self.controls.up) {
            let top = (self.location.y - half).clamp(0.0, playfield_height);
            self.location.y = (half + top) - self.speed;
        } else if input.is_down(self.controls.down) {
            let bottom = (self.location.y + half).clamp(0.0, playfield_height);
            self.location.y = (bottom - half) + self.speed;
        }
    }

    pub fn reset(&mut self) {
        self.location = self.start_location;
    }

    pub fn top_left(&self) -> Vector2 {
        Vector2::new(
            self.location.x - self.width / 2.0,
            self.location.y - self.height / 2.0,
        )
    }

    pub fn bottom_right(&self) -> Vector2 {
        Vector2::new(
            self.location.x + self.width / 2.0,
            self.location.y + self.height / 2.0,
        )
    }
}

/// Complete game state, owned by the host and advanced once per frame
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub playfield: Playfield,
    pub ball: Ball,
    /// Player one (W/S by default)
    pub left: Paddle,
    /// Player two (arrow keys by default)
    pub right: Paddle,
    pub score: Score,
    /// Multiplier applied to the ball's x velocity on every paddle return
    pub paddle_boost: f64,
    /// Frames stepped since construction
    pub frame: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Build a new game from validated settings. The ball is launched
    /// immediately.
    pub fn new(settings: &Settings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;
        let playfield = settings.playfield()?;
        let center = playfield.center();

        let ball = Ball::new(center, settings.ball_radius, settings.ball_speed);
        let left = Paddle::new(
            Vector2::new(settings.paddle_inset, center.y),
            settings.paddle_width,
            settings.paddle_height,
            settings.paddle_speed,
            settings.left_controls,
        );
        let right = Paddle::new(
            Vector2::new(playfield.width - settings.paddle_inset, center.y),
            settings.paddle_width,
            settings.paddle_height,
            settings.paddle_speed,
            settings.right_controls,
        );

        let mut state = Self {
            seed,
            playfield,
            ball,
            left,
            right,
            score: Score::default(),
            paddle_boost: settings.paddle_boost,
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset_ball();
        Ok(state)
    }

    /// Relaunch the ball from the center
    pub fn reset_ball(&mut self) {
        self.ball.reset(self.playfield, &mut self.rng);
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}
