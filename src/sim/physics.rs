//! Ball registry update: trail, motion, walls, paddles and the scoring boundary

use rand::Rng;

use super::collision::{ball_paddle_collision, ball_wall_collision, paddle_return, scoring_player};
use super::scoring;
use super::state::{GameEvent, GameState, MatchMode, PlayerId};
use crate::consts::{SHAKE_PADDLE, SHAKE_WALL};

/// Scale of a "SMASH!" announcement
const SMASH_TEXT_SCALE: f32 = 1.0;

/// Advance every ball one tick.
///
/// Balls are processed in registry order. Each ball can be returned by each paddle
/// at most once per tick; a ball still overlapping a paddle next tick is returned
/// again. Balls that cross a back line are removed one by one, each followed by its
/// point award, so serve decisions see the same registry the award would.
pub fn update_balls<R: Rng + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    let tuning = &state.tuning;
    let mut scored: Vec<(u32, PlayerId)> = Vec::new();

    for ball in &mut state.balls {
        ball.record_trail();
        ball.pos += ball.vel;

        if ball_wall_collision(ball.pos.x, tuning.ball_size, tuning.field_width) {
            ball.vel.x = -ball.vel.x;
            state.screen_shake = SHAKE_WALL;
            events.push(GameEvent::WallBounce { ball: ball.id });
        }

        for player in &state.players {
            let Some(offset) =
                ball_paddle_collision(ball.pos, tuning.ball_size, player, tuning.paddle_depth)
            else {
                continue;
            };

            ball.vel = paddle_return(ball.vel, player.id, offset, tuning);
            state.rally += 1;
            state.screen_shake = SHAKE_PADDLE;

            let color = player.id.color();
            state.effects.burst(ball.pos.x, ball.pos.z, color, rng);
            state
                .effects
                .text("SMASH!", ball.pos.x, ball.pos.z, color, SMASH_TEXT_SCALE);
            events.push(GameEvent::PaddleHit {
                player: player.id,
                ball: ball.id,
            });
        }

        if let Some(scorer) = scoring_player(ball.pos.z, tuning) {
            scored.push((ball.id, scorer));
        }
    }

    for (id, scorer) in scored {
        // The match may have ended on an earlier ball this tick
        if state.mode != MatchMode::Playing {
            break;
        }
        state.balls.retain(|b| b.id != id);
        scoring::award_point(state, scorer, rng, events);
    }
}
