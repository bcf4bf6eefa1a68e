//! Ball vs paddle collision geometry
//!
//! Circle-rectangle overlap via the clamped nearest point: clamp the ball's
//! center into the paddle rectangle, then compare the distance to that point
//! with the ball's radius. Detection only, nothing is predicted, so a fast
//! enough ball can pass through a paddle between two frames.

use super::state::{Ball, Paddle, Side};
use super::vector::Vector2;

/// Result of a ball/paddle check
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Whether the ball overlaps (or touches) the paddle
    pub hit: bool,
    /// Closest point on the paddle rectangle to the ball center
    pub point: Vector2,
    /// Distance from the ball center to `point`
    pub distance: f64,
}

/// Closest point on the paddle's rectangle to `point`
#[inline]
pub fn nearest_point_on_paddle(point: Vector2, paddle: &Paddle) -> Vector2 {
    point.clamp(paddle.top_left(), paddle.bottom_right())
}

/// Check whether the ball touches the paddle, regardless of direction
pub fn ball_paddle_collision(ball: &Ball, paddle: &Paddle) -> CollisionResult {
    let point = nearest_point_on_paddle(ball.location, paddle);
    let distance = ball.location.distance_to(point);
    CollisionResult {
        hit: distance <= ball.radius,
        point,
        distance,
    }
}

/// Whether the ball is travelling toward the paddle on `side`
#[inline]
pub fn moving_toward(ball: &Ball, side: Side) -> bool {
    match side {
        Side::Left => ball.velocity.x < 0.0,
        Side::Right => ball.velocity.x > 0.0,
    }
}

/// Send the ball back the other way, `boost` times faster horizontally.
/// Vertical velocity is left alone.
#[inline]
pub fn return_ball(velocity: &mut Vector2, boost: f64) {
    velocity.x *= -boost;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::KeyCode;
    use crate::sim::state::PaddleControls;

    fn left_paddle() -> Paddle {
        Paddle::new(
            Vector2::new(10.0, 300.0),
            10.0,
            100.0,
            10.0,
            PaddleControls {
                up: KeyCode::W,
                down: KeyCode::S,
            },
        )
    }

    fn ball_at(x: f64, y: f64) -> Ball {
        Ball::new(Vector2::new(x, y), 10.0, 8.0)
    }

    #[test]
    fn test_nearest_point_face() {
        let p = nearest_point_on_paddle(Vector2::new(20.0, 300.0), &left_paddle());
        assert_eq!(p, Vector2::new(15.0, 300.0));
    }

    #[test]
    fn test_nearest_point_corner() {
        let p = nearest_point_on_paddle(Vector2::new(30.0, 400.0), &left_paddle());
        assert_eq!(p, Vector2::new(15.0, 350.0));
    }

    #[test]
    fn test_nearest_point_inside() {
        let p = nearest_point_on_paddle(Vector2::new(12.0, 280.0), &left_paddle());
        assert_eq!(p, Vector2::new(12.0, 280.0));
    }

    #[test]
    fn test_collision_hit_on_face() {
        let result = ball_paddle_collision(&ball_at(20.0, 300.0), &left_paddle());
        assert!(result.hit);
        assert!((result.distance - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_collision_touching_counts() {
        // Ball edge exactly on the paddle face
        let result = ball_paddle_collision(&ball_at(25.0, 300.0), &left_paddle());
        assert!(result.hit);
        assert!((result.distance - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_collision_miss() {
        let result = ball_paddle_collision(&ball_at(26.0, 300.0), &left_paddle());
        assert!(!result.hit);
    }

    #[test]
    fn test_collision_corner_uses_true_distance() {
        // Within 10 on each axis of the corner, but farther than 10 diagonally
        let result = ball_paddle_collision(&ball_at(23.0, 358.0), &left_paddle());
        assert!(!result.hit);

        let result = ball_paddle_collision(&ball_at(21.0, 356.0), &left_paddle());
        assert!(result.hit);
    }

    #[test]
    fn test_moving_toward() {
        let mut ball = ball_at(100.0, 100.0);
        ball.velocity = Vector2::new(-1.0, 0.0);
        assert!(moving_toward(&ball, Side::Left));
        assert!(!moving_toward(&ball, Side::Right));

        ball.velocity = Vector2::new(0.0, 5.0);
        assert!(!moving_toward(&ball, Side::Left));
        assert!(!moving_toward(&ball, Side::Right));
    }

    #[test]
    fn test_return_ball() {
        let mut v = Vector2::new(-4.0, 3.0);
        return_ball(&mut v, 1.05);
        assert!((v.x - 4.2).abs() < 1e-12);
        assert_eq!(v.y, 3.0);
    }
}
