//! Point awards, streaks, match end and serving

use rand::Rng;

use super::state::{GameEvent, GameState, MatchMode, PlayerId};
use crate::consts::SHAKE_SCORE;

const FIRE_TEXT_SCALE: f32 = 2.0;
/// Depth (from centre, toward the player's own end) of the FIRE banner
const FIRE_TEXT_DEPTH: f32 = 200.0;

/// First player (in id order) at or past the winning score
pub fn match_winner(state: &GameState) -> Option<PlayerId> {
    state
        .players
        .iter()
        .find(|p| p.score >= state.tuning.points_to_win)
        .map(|p| p.id)
}

/// Award a point to `scorer`. The scoring ball must already be out of the registry.
pub fn award_point<R: Rng + ?Sized>(
    state: &mut GameState,
    scorer: PlayerId,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    let loser = scorer.opponent();
    state.screen_shake = SHAKE_SCORE;

    let streak = {
        let p = state.player_mut(scorer);
        p.score += 1;
        p.streak += 1;
        p.streak
    };
    state.player_mut(loser).streak = 0;
    events.push(GameEvent::PointScored { scorer });
    log::debug!(
        "Player {} scores ({} - {})",
        scorer.number(),
        state.player(PlayerId::One).score,
        state.player(PlayerId::Two).score
    );

    // Exactly at the threshold: announced once per streak
    if streak == state.tuning.fire_streak {
        state.effects.text(
            format!("P{} FIRE!", scorer.number()),
            0.0,
            -scorer.away() * FIRE_TEXT_DEPTH,
            scorer.color(),
            FIRE_TEXT_SCALE,
        );
        events.push(GameEvent::OnFire { player: scorer });
    }

    if let Some(winner) = match_winner(state) {
        state.mode = MatchMode::GameOver;
        state.winner = Some(winner);
        events.push(GameEvent::MatchOver { winner });
        log::info!(
            "Player {} wins {} - {}",
            winner.number(),
            state.player(PlayerId::One).score,
            state.player(PlayerId::Two).score
        );
        return;
    }

    if state.balls.is_empty() {
        state.rally = 0;
        state.serve(loser, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::consts::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn playing_state() -> (GameState, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut state = GameState::new(Tuning::default());
        state.start_match(true, &mut rng);
        state.balls.clear();
        (state, rng)
    }

    #[test]
    fn test_award_updates_score_and_streaks() {
        let (mut state, mut rng) = playing_state();
        state.player_mut(PlayerId::Two).streak = 2;
        let mut events = Vec::new();

        award_point(&mut state, PlayerId::One, &mut rng, &mut events);

        let p1 = state.player(PlayerId::One);
        assert_eq!((p1.score, p1.streak), (1, 1));
        assert_eq!(state.player(PlayerId::Two).streak, 0);
        assert_eq!(state.screen_shake, SHAKE_SCORE);
        assert_eq!(events[0], GameEvent::PointScored { scorer: PlayerId::One });
    }

    #[test]
    fn test_loser_serves_and_rally_resets() {
        let (mut state, mut rng) = playing_state();
        state.rally = 9;
        let mut events = Vec::new();

        award_point(&mut state, PlayerId::One, &mut rng, &mut events);

        assert_eq!(state.rally, 0);
        assert_eq!(state.balls.len(), 1);
        let ball = &state.balls[0];
        assert_eq!(ball.pos.z, FIELD_DEPTH / 2.0 - SERVE_INSET);
        assert!(ball.vel.z < 0.0);
    }

    #[test]
    fn test_no_serve_while_balls_remain() {
        let (mut state, mut rng) = playing_state();
        state.serve(PlayerId::One, &mut rng);
        state.rally = 6;
        let mut events = Vec::new();

        award_point(&mut state, PlayerId::Two, &mut rng, &mut events);

        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.rally, 6);
    }

    #[test]
    fn test_fire_announced_once_at_streak_three() {
        let (mut state, mut rng) = playing_state();
        let mut fire_events = 0;

        for point in 1..=5 {
            let mut events = Vec::new();
            award_point(&mut state, PlayerId::Two, &mut rng, &mut events);
            let fired = events
                .iter()
                .filter(|e| matches!(e, GameEvent::OnFire { .. }))
                .count();
            assert_eq!(fired, usize::from(point == 3), "point {point}");
            fire_events += fired;
            state.balls.clear();
        }

        assert_eq!(fire_events, 1);
        assert_eq!(state.effects.count_texts("FIRE!"), 1);
        let text = &state.effects.texts[0];
        assert_eq!(text.text, "P2 FIRE!");
        assert_eq!(text.pos.z, 200.0);
    }

    #[test]
    fn test_reaching_win_threshold_ends_match() {
        let (mut state, mut rng) = playing_state();
        state.player_mut(PlayerId::One).score = POINTS_TO_WIN - 1;
        state.player_mut(PlayerId::Two).score = POINTS_TO_WIN - 1;
        let mut events = Vec::new();

        award_point(&mut state, PlayerId::Two, &mut rng, &mut events);

        assert_eq!(state.mode, MatchMode::GameOver);
        assert_eq!(state.winner, Some(PlayerId::Two));
        assert_eq!(state.player(PlayerId::One).score, POINTS_TO_WIN - 1);
        // No serve after the final point
        assert!(state.balls.is_empty());
        assert_eq!(
            events.last(),
            Some(&GameEvent::MatchOver {
                winner: PlayerId::Two
            })
        );
    }
}
