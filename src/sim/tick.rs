//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use rand::Rng;

use super::effects::decay_shake;
use super::input::{Command, TickInput};
use super::state::{GameEvent, GameState, MatchMode, PlayerId};
use super::{ai, paddle, physics, powerup, rally};
use crate::consts::SHAKE_DECAY;

/// Advance the game state by one tick and report what happened.
///
/// One-shot commands are applied first and are honoured in any mode they make
/// sense in. Gameplay only advances while a match is playing and not paused.
pub fn tick<R: Rng + ?Sized>(state: &mut GameState, input: &TickInput, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.held = input.held;

    for &command in &input.commands {
        apply_command(state, command, rng, &mut events);
    }

    // Don't tick if paused or not in a match
    if state.mode != MatchMode::Playing || state.paused {
        return events;
    }

    state.frame_count += 1;

    // Paddles
    if input.idle_mode {
        drive_ai(state, PlayerId::One);
    } else {
        drive_human(state, PlayerId::One, &mut events);
    }
    if state.two_player {
        drive_human(state, PlayerId::Two, &mut events);
    } else {
        drive_ai(state, PlayerId::Two);
    }
    for player in &mut state.players {
        paddle::update_timers(player, &state.tuning);
    }

    // Balls (may end the match)
    physics::update_balls(state, rng, &mut events);
    // The match can end on a point; nothing else moves after that
    if state.mode != MatchMode::Playing {
        return events;
    }

    // Powerups
    powerup::maybe_spawn(state, rng, &mut events);
    powerup::update(state, rng, &mut events);

    rally::check_mayhem(state, rng, &mut events);

    // Effects
    state.screen_shake = decay_shake(state.screen_shake, SHAKE_DECAY);
    state.effects.update();

    events
}

fn apply_command<R: Rng + ?Sized>(
    state: &mut GameState,
    command: Command,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    match (command, state.mode) {
        (Command::ToggleCamera, _) => {
            state.camera = state.camera.next();
            events.push(GameEvent::CameraChanged {
                camera: state.camera,
            });
        }
        (Command::TogglePause, MatchMode::Playing) => {
            state.paused = !state.paused;
            events.push(GameEvent::PauseToggled {
                paused: state.paused,
            });
        }
        (Command::SelectSinglePlayer, MatchMode::Menu) => {
            state.start_match(false, rng);
            events.push(GameEvent::MatchStarted { two_player: false });
        }
        (Command::SelectTwoPlayer, MatchMode::Menu) => {
            state.start_match(true, rng);
            events.push(GameEvent::MatchStarted { two_player: true });
        }
        (Command::ReturnToMenu, MatchMode::GameOver) => {
            state.reset();
            events.push(GameEvent::ReturnedToMenu);
        }
        // Not meaningful in this mode
        _ => {}
    }
}

fn drive_human(state: &mut GameState, id: PlayerId, events: &mut Vec<GameEvent>) {
    let player = &mut state.players[id.index()];
    if paddle::apply_controls(
        player,
        &state.held,
        state.camera,
        &state.tuning,
        &mut state.effects,
    ) {
        events.push(GameEvent::Dash { player: id });
        log::debug!("Player {} dashed", id.number());
    }
}

fn drive_ai(state: &mut GameState, id: PlayerId) {
    let player = &mut state.players[id.index()];
    ai::drive(player, &state.balls, state.frame_count, &state.tuning);
}
