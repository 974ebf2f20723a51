//! Computer-controlled paddle
//!
//! The AI chases the nearest ball heading its way, with a slow sinusoidal aim
//! error so it stays beatable. The error is a function of the frame counter only,
//! so replays are exact.

use super::paddle;
use super::state::{Ball, Player};
use crate::Tuning;

/// True if `ball` is travelling toward `player`'s end
fn is_incoming(ball: &Ball, player: &Player) -> bool {
    // A ball moving away from the player's side is coming toward the player
    ball.vel.z * player.id.away() < 0.0
}

/// Nearest (by depth) ball heading toward `player`, first one on ties
pub fn closest_incoming<'a>(balls: &'a [Ball], player: &Player) -> Option<&'a Ball> {
    let mut best: Option<&Ball> = None;
    for ball in balls.iter().filter(|b| is_incoming(b, player)) {
        let dist = (ball.pos.z - player.z).abs();
        match best {
            Some(b) if (b.pos.z - player.z).abs() <= dist => {}
            _ => best = Some(ball),
        }
    }
    best
}

/// Aim error for this frame
pub fn aim_error(frame_count: u64, tuning: &Tuning) -> f32 {
    (frame_count as f32 * tuning.ai_error_frequency).sin() * tuning.ai_error_amplitude
}

/// Lateral position the AI wants its paddle at
pub fn target_x(balls: &[Ball], player: &Player, frame_count: u64, tuning: &Tuning) -> f32 {
    match closest_incoming(balls, player) {
        Some(ball) => ball.pos.x + aim_error(frame_count, tuning),
        None => 0.0,
    }
}

/// Move an AI paddle one tick toward its target
pub fn drive(player: &mut Player, balls: &[Ball], frame_count: u64, tuning: &Tuning) {
    let target = target_x(balls, player, frame_count, tuning);
    let speed = tuning.normal_speed * tuning.ai_speed_scale;
    paddle::move_toward(player, target, speed, tuning);
}
