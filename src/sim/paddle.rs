//! Paddle movement, dash and giant timers
//!
//! Human paddles follow held controls; AI paddles call [`move_toward`] with a
//! target from [`super::ai`]. Every paddle runs [`update_timers`] once per tick.

use super::effects::Effects;
use super::input::{Control, HeldControls};
use super::state::{CameraMode, Player};
use crate::{Tuning, clamp_lateral};

/// Scale of a "DASH!" announcement
const DASH_TEXT_SCALE: f32 = 0.8;

/// Keep the paddle inside the field for its current width
pub fn keep_in_bounds(player: &mut Player, tuning: &Tuning) {
    player.x = clamp_lateral(player.x, tuning.field_width, player.width);
}

/// Try to use dash. Returns true if it fired (cooldown was exactly zero).
pub fn try_dash(player: &mut Player, tuning: &Tuning) -> bool {
    if player.dash_cooldown == 0 {
        player.dash_cooldown = tuning.dash_cooldown;
        true
    } else {
        false
    }
}

/// Lateral step for "left"/"right" as seen on screen.
///
/// The first-person camera looks down the field from behind player 1, so screen
/// left is +x there.
fn screen_step(camera: CameraMode, speed: f32, right: bool) -> f32 {
    let step = if right { speed } else { -speed };
    if camera == CameraMode::FirstPerson {
        -step
    } else {
        step
    }
}

/// Apply held controls to a human paddle. Returns true if a dash fired.
pub fn apply_controls(
    player: &mut Player,
    held: &HeldControls,
    camera: CameraMode,
    tuning: &Tuning,
    effects: &mut Effects,
) -> bool {
    let id = player.id;
    let mut speed = tuning.normal_speed;
    let mut dashed = false;

    if held.is_held(id, Control::Dash) && try_dash(player, tuning) {
        speed = tuning.dash_speed;
        dashed = true;
        effects.text("DASH!", player.x, player.z, id.color(), DASH_TEXT_SCALE);
    }

    if held.is_held(id, Control::MoveLeft) {
        player.x += screen_step(camera, speed, false);
        keep_in_bounds(player, tuning);
    }
    if held.is_held(id, Control::MoveRight) {
        player.x += screen_step(camera, speed, true);
        keep_in_bounds(player, tuning);
    }

    dashed
}

/// Step toward `target_x` unless already within the dead zone
pub fn move_toward(player: &mut Player, target_x: f32, speed: f32, tuning: &Tuning) {
    if player.x < target_x - tuning.ai_dead_zone {
        player.x += speed;
    } else if player.x > target_x + tuning.ai_dead_zone {
        player.x -= speed;
    }
    keep_in_bounds(player, tuning);
}

/// Per-tick bookkeeping: dash cooldown, giant timer and width easing
pub fn update_timers(player: &mut Player, tuning: &Tuning) {
    if player.dash_cooldown > 0 {
        player.dash_cooldown -= 1;
    }

    if player.giant {
        player.giant_ticks = player.giant_ticks.saturating_sub(1);
        if player.giant_ticks == 0 {
            player.giant = false;
        }
    }

    // Exponential approach, not a lerp over fixed time
    let target = player.target_width(tuning);
    player.width += (target - player.width) * tuning.width_ease;

    // A widening paddle may now poke past the wall
    keep_in_bounds(player, tuning);
}

/// Switch on the giant paddle for `duration` ticks
pub fn make_giant(player: &mut Player, duration: u32) {
    player.giant = true;
    player.giant_ticks = duration;
}
