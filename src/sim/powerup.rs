//! Powerup spawning and pickup
//!
//! At most one powerup floats on the field. A ball that rolls through it claims it
//! for the player the ball is heading away from.

use glam::Vec2;
use rand::Rng;

use super::collision::ball_pickup_collision;
use super::paddle;
use super::state::{GameEvent, GameState, PlayerId, Powerup, PowerupKind};
use crate::consts::{POWERUP_SPIN, SHAKE_POWERUP};

const PICKUP_TEXT_SCALE: f32 = 1.5;

/// Roll for a new powerup if none is on the field
pub fn maybe_spawn<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R, events: &mut Vec<GameEvent>) {
    if state.powerup.is_some() {
        return;
    }
    if rng.random::<f32>() >= state.tuning.powerup_chance {
        return;
    }

    let t = &state.tuning;
    let x = (rng.random::<f32>() - 0.5) * t.field_width * 0.8;
    let z = (rng.random::<f32>() - 0.5) * t.field_depth * 0.5;
    let kind = if rng.random::<f32>() > 0.5 {
        PowerupKind::Giant
    } else {
        PowerupKind::MultiBall
    };

    state.powerup = Some(Powerup {
        kind,
        x,
        z,
        rotation: 0.0,
    });
    events.push(GameEvent::PowerupSpawned { kind });
    log::debug!("Powerup {:?} spawned at ({:.1}, {:.1})", kind, x, z);
}

/// Spin the powerup and resolve the first ball touching it
pub fn update<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R, events: &mut Vec<GameEvent>) {
    let Some(powerup) = state.powerup.as_mut() else {
        return;
    };
    powerup.rotation += POWERUP_SPIN;
    let (kind, at) = (powerup.kind, Vec2::new(powerup.x, powerup.z));

    let ball_size = state.tuning.ball_size;
    let radius = state.tuning.powerup_radius;
    let Some(ball) = state
        .balls
        .iter()
        .find(|b| ball_pickup_collision(b.pos, ball_size, at, radius))
    else {
        return;
    };

    // Credit goes by direction of travel, not by who touched it last
    let owner = if ball.vel.z > 0.0 {
        PlayerId::One
    } else {
        PlayerId::Two
    };
    let server = ball.heading_server();

    match kind {
        PowerupKind::Giant => {
            let duration = state.tuning.giant_duration;
            paddle::make_giant(state.player_mut(owner), duration);
        }
        PowerupKind::MultiBall => {
            state.serve(server, rng);
        }
    }

    state
        .effects
        .text(kind.label(), at.x, at.y, kind.color(), PICKUP_TEXT_SCALE);
    state.screen_shake = SHAKE_POWERUP;
    state.powerup = None;
    events.push(GameEvent::PowerupCollected { kind, owner });
    log::debug!("Player {} collected {:?}", owner.number(), kind);
}
