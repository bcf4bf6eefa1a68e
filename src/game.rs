//! Host-facing frame driver
//!
//! Ties the simulation to a draw surface. The host owns a [`Game`] (or a
//! `GameState` + `InputState` pair), forwards key events into it, and calls
//! [`advance_frame`] once per scheduling tick.

use crate::renderer::{DrawSurface, render_frame};
use crate::settings::{Settings, SettingsError};
use crate::sim::{GameEvent, GameState, InputState, KeyCode, tick};

/// Draw the current state, then step the simulation once.
///
/// The picture is always one frame behind the physics: what gets drawn is
/// the result of the previous call.
pub fn advance_frame<S: DrawSurface + ?Sized>(
    state: &mut GameState,
    input: &InputState,
    surface: &mut S,
) -> Vec<GameEvent> {
    render_frame(surface, state);
    tick(state, input)
}

/// Game state plus the keyboard state that drives it
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    pub input: InputState,
}

impl Game {
    pub fn new(settings: &Settings, seed: u64) -> Result<Self, SettingsError> {
        Ok(Self {
            state: GameState::new(settings, seed)?,
            input: InputState::new(),
        })
    }

    pub fn key_down(&mut self, code: KeyCode) {
        self.input.trigger(code);
    }

    pub fn key_up(&mut self, code: KeyCode) {
        self.input.un_trigger(code);
    }

    pub fn advance_frame<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> Vec<GameEvent> {
        advance_frame(&mut self.state, &self.input, surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface, colors};
    use crate::sim::{Side, Vector2};

    fn new_game() -> Game {
        Game::new(&Settings::default(), 2024).unwrap()
    }

    #[test]
    fn test_render_lags_physics_by_one_frame() {
        let mut game = new_game();
        let mut surface = RecordingSurface::new(game.state.playfield);
        let before = game.state.ball.location;

        game.advance_frame(&mut surface);

        let commands = surface.drain();
        assert_eq!(commands[0], DrawCommand::Clear(colors::BACKGROUND));
        assert!(matches!(commands[1], DrawCommand::Circle { center, .. } if center == before));
        assert_ne!(game.state.ball.location, before);

        let after_first = game.state.ball.location;
        game.advance_frame(&mut surface);
        assert!(matches!(surface.commands()[1], DrawCommand::Circle { center, .. } if center == after_first));
    }

    #[test]
    fn test_keys_drive_paddles() {
        let mut game = new_game();
        let mut surface = RecordingSurface::new(game.state.playfield);

        game.key_down(KeyCode::S);
        game.key_down(KeyCode::UP_ARROW);
        game.advance_frame(&mut surface);
        assert_eq!(game.state.left.location.y, 310.0);
        assert_eq!(game.state.right.location.y, 290.0);

        game.key_up(KeyCode::S);
        game.advance_frame(&mut surface);
        assert_eq!(game.state.left.location.y, 310.0);
        assert_eq!(game.state.right.location.y, 280.0);
    }

    #[test]
    fn test_score_is_drawn_next_frame() {
        let mut game = new_game();
        let mut surface = RecordingSurface::new(game.state.playfield);
        game.state.ball.location = Vector2::new(-30.0, 300.0);
        game.state.ball.velocity = Vector2::new(-8.0, 0.0);

        let events = game.advance_frame(&mut surface);
        assert!(events.contains(&GameEvent::Scored(Side::Right)));

        surface.drain();
        game.advance_frame(&mut surface);
        let right_score = surface.commands().iter().rev().find_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.clone()),
            _ => None,
        });
        assert_eq!(right_score.as_deref(), Some("1"));
    }

    /// 800x600, ball at the center with radius 10: each relaunch keeps speed
    /// 8 inside the diagonal cone, and nothing escapes the frame loop as NaN.
    #[test]
    fn test_long_idle_match() {
        let mut game = new_game();
        let mut surface = RecordingSurface::new(game.state.playfield);
        let cone = 300.0f64.atan2(400.0).to_degrees();

        let mut points = 0;
        for _ in 0..20_000 {
            let events = game.advance_frame(&mut surface);
            surface.drain();
            if events.iter().any(|e| matches!(e, GameEvent::Scored(_))) {
                points += 1;
                let v = game.state.ball.velocity;
                assert!((v.length() - 8.0).abs() < 1e-9);
                let off_axis = v.y.abs().atan2(v.x.abs()).to_degrees();
                assert!(off_axis <= cone + 1e-9);
            }
            assert!(game.state.ball.location.x.is_finite());
            assert!(game.state.ball.location.y.is_finite());
        }

        assert!(points > 0);
        assert_eq!(game.state.score.left + game.state.score.right, points);
    }
}
