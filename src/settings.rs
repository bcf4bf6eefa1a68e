//! Game settings
//!
//! Geometry, speeds and key bindings. Everything has a default, so a settings
//! file only needs the fields it wants to change.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{KeyCode, PaddleControls, Playfield};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}

impl SettingsError {
    pub(crate) fn check_positive(field: &'static str, value: f64) -> Result<(), SettingsError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(SettingsError::NonPositive { field, value })
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub playfield_width: f64,
    pub playfield_height: f64,

    // === Ball ===
    pub ball_radius: f64,
    /// Speed given to the ball on every launch (units per frame)
    pub ball_speed: f64,

    // === Paddles ===
    pub paddle_width: f64,
    pub paddle_height: f64,
    /// Distance from the side wall to the paddle's center
    pub paddle_inset: f64,
    /// Units per frame while a key is held
    pub paddle_speed: f64,
    /// Horizontal speed multiplier on every paddle return
    pub paddle_boost: f64,

    // === Controls ===
    pub left_controls: PaddleControls,
    pub right_controls: PaddleControls,

    /// RNG seed; the host picks one when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_LAUNCH_SPEED,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_inset: PADDLE_INSET,
            paddle_speed: PADDLE_SPEED,
            paddle_boost: PADDLE_BOOST,

            left_controls: PaddleControls {
                up: KeyCode::W,
                down: KeyCode::S,
            },
            right_controls: PaddleControls {
                up: KeyCode::UP_ARROW,
                down: KeyCode::DOWN_ARROW,
            },

            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let json = std::fs::read_to_string(&path)
            .map_err(|source| SettingsError::Io { path: path.clone(), source })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject sizes and speeds that would make the simulation produce
    /// NaN/∞ or freeze
    pub fn validate(&self) -> Result<(), SettingsError> {
        SettingsError::check_positive("playfield_width", self.playfield_width)?;
        SettingsError::check_positive("playfield_height", self.playfield_height)?;
        SettingsError::check_positive("ball_radius", self.ball_radius)?;
        SettingsError::check_positive("ball_speed", self.ball_speed)?;
        SettingsError::check_positive("paddle_width", self.paddle_width)?;
        SettingsError::check_positive("paddle_height", self.paddle_height)?;
        SettingsError::check_positive("paddle_inset", self.paddle_inset)?;
        SettingsError::check_positive("paddle_speed", self.paddle_speed)?;
        SettingsError::check_positive("paddle_boost", self.paddle_boost)?;
        Ok(())
    }

    pub fn playfield(&self) -> Result<Playfield, SettingsError> {
        Playfield::new(self.playfield_width, self.playfield_height)
    }
}
