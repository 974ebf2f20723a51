//! Rally mayhem: a long rally with a single ball earns a second ball

use rand::Rng;

use super::state::{ColorTag, GameEvent, GameState};

const MAYHEM_TEXT_SCALE: f32 = 2.0;

/// Spawn the mayhem ball if the rally just reached the threshold.
///
/// The rally counter is bumped past the threshold so the trigger cannot repeat
/// on later ticks of the same rally.
pub fn check_mayhem<R: Rng + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    if state.rally != state.tuning.mayhem_rally || state.balls.len() != 1 {
        return;
    }

    let server = state.balls[0].heading_server();
    let ball = state.serve(server, rng);
    state
        .effects
        .text("MAYHEM!", 0.0, 0.0, ColorTag::Mayhem, MAYHEM_TEXT_SCALE);
    state.rally += 1;

    events.push(GameEvent::Mayhem { ball });
    log::info!("Mayhem! Rally of {} adds a second ball", state.tuning.mayhem_rally);
}
