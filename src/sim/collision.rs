//! Collision tests and responses for the rectangular field
//!
//! All tests are on the floor plane (lateral x, depth z); ball height never matters.
//! These are pure functions so they can be checked in isolation from a tick.

use glam::{Vec2, Vec3};

use super::state::{Player, PlayerId};
use crate::Tuning;

/// Ball is beyond a side wall (inner edge shrunk by the ball radius)
#[inline]
pub fn ball_wall_collision(ball_x: f32, ball_radius: f32, field_width: f32) -> bool {
    let left_wall = -field_width / 2.0 + ball_radius;
    let right_wall = field_width / 2.0 - ball_radius;
    ball_x < left_wall || ball_x > right_wall
}

/// Check a ball against a paddle box.
///
/// Returns the hit offset (ball lateral distance from the paddle centre divided by
/// half the paddle width) when the ball's depth extent overlaps the paddle's and
/// the ball is laterally within reach. The offset is not clamped: an edge hit
/// can exceed 1 by up to `ball_radius / half_width`.
pub fn ball_paddle_collision(
    ball_pos: Vec3,
    ball_radius: f32,
    paddle: &Player,
    paddle_depth: f32,
) -> Option<f32> {
    let ball_front = ball_pos.z - ball_radius;
    let ball_back = ball_pos.z + ball_radius;
    let paddle_front = paddle.z - paddle_depth;
    let paddle_back = paddle.z + paddle_depth;
    let at_paddle_depth = ball_front < paddle_back && ball_back > paddle_front;

    let half_width = paddle.width / 2.0;
    let within_paddle = (ball_pos.x - paddle.x).abs() < half_width + ball_radius;

    if at_paddle_depth && within_paddle {
        Some((ball_pos.x - paddle.x) / half_width)
    } else {
        None
    }
}

/// New ball velocity after `hitter` returns it.
///
/// Depth speed ratchets up and always points away from the hitter; the hit
/// offset adds lateral spin.
pub fn paddle_return(vel: Vec3, hitter: PlayerId, offset: f32, tuning: &Tuning) -> Vec3 {
    Vec3::new(
        vel.x + offset * tuning.spin_factor,
        vel.y,
        hitter.away() * vel.z.abs() * tuning.hit_speedup,
    )
}

/// Ball touches a powerup (planar distance)
#[inline]
pub fn ball_pickup_collision(
    ball_pos: Vec3,
    ball_radius: f32,
    pickup_pos: Vec2,
    pickup_radius: f32,
) -> bool {
    let d = Vec2::new(ball_pos.x, ball_pos.z) - pickup_pos;
    d.length() < pickup_radius + ball_radius
}

/// Player awarded the point if the ball has left the field through a back line
pub fn scoring_player(ball_z: f32, tuning: &Tuning) -> Option<PlayerId> {
    let limit = tuning.field_depth / 2.0 + tuning.score_margin;
    if ball_z < -limit {
        // Got past player 1
        Some(PlayerId::Two)
    } else if ball_z > limit {
        Some(PlayerId::One)
    } else {
        None
    }
}
