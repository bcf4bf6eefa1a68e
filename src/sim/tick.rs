//! Fixed per-frame simulation step
//!
//! One call advances the game by exactly one frame. There is no time delta:
//! speeds are in units per frame, so the host's frame rate sets game speed.

use super::collision::{ball_paddle_collision, moving_toward, return_ball};
use super::input::InputState;
use super::state::{GameEvent, GameState, Side, Wall};

/// Advance the game by one frame and report what happened.
///
/// Order: paddles read input, collisions are resolved against the current
/// ball position, then the ball moves.
pub fn tick(state: &mut GameState, input: &InputState) -> Vec<GameEvent> {
    state.frame += 1;

    control_paddles(state, input);
    let events = check_for_collisions(state);
    update_components(state);

    events
}

/// Apply held keys to both paddles. The paddles don't interact.
pub fn control_paddles(state: &mut GameState, input: &InputState) {
    let height = state.playfield.height;
    state.left.control(input, height);
    state.right.control(input, height);
}

/// Walls, then scoring, then paddles.
///
/// Ball edges are taken once up front, so a scoring reset doesn't feed back
/// into the other wall/score checks of the same frame. The paddle checks do
/// see the reset ball.
pub fn check_for_collisions(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    let ball_top = state.ball.top();
    let ball_bottom = state.ball.bottom();
    let ball_left = state.ball.left();
    let ball_right = state.ball.right();

    // Sign flip only, the ball may sit inside the wall for a frame
    if ball_top <= 0.0 {
        state.ball.velocity.y *= -1.0;
        events.push(GameEvent::WallBounce(Wall::Top));
    }
    if ball_bottom >= state.playfield.height {
        state.ball.velocity.y *= -1.0;
        events.push(GameEvent::WallBounce(Wall::Bottom));
    }

    // Whoever the ball got past, the other player scores
    if ball_right <= 0.0 {
        score_point(state, Side::Right);
        events.push(GameEvent::Scored(Side::Right));
    }
    if ball_left >= state.playfield.width {
        score_point(state, Side::Left);
        events.push(GameEvent::Scored(Side::Left));
    }

    for side in [Side::Left, Side::Right] {
        let paddle = state.paddle(side);
        if moving_toward(&state.ball, side) && ball_paddle_collision(&state.ball, paddle).hit {
            return_ball(&mut state.ball.velocity, state.paddle_boost);
            log::trace!(
                "Paddle hit ({:?}), ball speed now {:.3}",
                side,
                state.ball.speed()
            );
            events.push(GameEvent::PaddleHit(side));
        }
    }

    events
}

/// Integrate the ball with its (possibly just changed) velocity
pub fn update_components(state: &mut GameState) {
    state.ball.update();
}

/// Award a point to `side`, then put the ball and both paddles back
fn score_point(state: &mut GameState, side: Side) {
    state.score.award(side);
    log::info!(
        "{:?} scores: {} - {}",
        side,
        state.score.left,
        state.score.right
    );
    state.reset_ball();
    state.left.reset();
    state.right.reset();
}
