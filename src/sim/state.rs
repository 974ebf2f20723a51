//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`]. There is exactly one
//! owner; collaborators get a [`Snapshot`](super::Snapshot) between ticks.

use std::collections::VecDeque;

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::effects::Effects;
use super::input::HeldControls;
use crate::Tuning;

/// Maximum number of trail points kept per ball
pub const TRAIL_LENGTH: usize = 12;

/// Player identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// Near end (negative depth), serves first
    One,
    /// Far end (positive depth), computer-controlled in single player
    Two,
}

impl PlayerId {
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 1 or 2, as shown to players
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Sign of depth velocity for a ball moving away from this player
    pub fn away(self) -> f32 {
        match self {
            PlayerId::One => 1.0,
            PlayerId::Two => -1.0,
        }
    }

    pub fn color(self) -> ColorTag {
        match self {
            PlayerId::One => ColorTag::PlayerOne,
            PlayerId::Two => ColorTag::PlayerTwo,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// Top-level match mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// Waiting for single/two player selection
    Menu,
    /// Match in progress (may be paused)
    Playing,
    /// Someone reached the winning score
    GameOver,
}

/// Camera used by the renderer; first person also mirrors human steering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraMode {
    #[default]
    Side,
    Top,
    FirstPerson,
}

impl CameraMode {
    pub fn next(self) -> Self {
        match self {
            CameraMode::Side => CameraMode::Top,
            CameraMode::Top => CameraMode::FirstPerson,
            CameraMode::FirstPerson => CameraMode::Side,
        }
    }
}

/// Presentation colour, resolved to RGB by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorTag {
    PlayerOne,
    PlayerTwo,
    Ball,
    GiantPowerup,
    MultiPowerup,
    OnFire,
    Mayhem,
}

/// A paddle and the player behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Lateral centre
    pub x: f32,
    /// Depth of the paddle face (fixed per player)
    pub z: f32,
    /// Current width (eases toward the target width)
    pub width: f32,
    pub score: u32,
    /// Points won in a row
    pub streak: u32,
    /// Ticks until dash is ready (0 = ready)
    pub dash_cooldown: u32,
    pub giant: bool,
    pub giant_ticks: u32,
}

impl Player {
    pub fn new(id: PlayerId, tuning: &Tuning) -> Self {
        Self {
            id,
            x: 0.0,
            z: -id.away() * tuning.paddle_z(),
            width: tuning.paddle_width,
            score: 0,
            streak: 0,
            dash_cooldown: 0,
            giant: false,
            giant_ticks: 0,
        }
    }

    /// Width the paddle is easing toward
    pub fn target_width(&self, tuning: &Tuning) -> f32 {
        if self.giant {
            tuning.giant_width()
        } else {
            tuning.paddle_width
        }
    }

    pub fn is_on_fire(&self, tuning: &Tuning) -> bool {
        self.streak >= tuning.fire_streak
    }

    /// Paddle colour (orange while on a winning streak)
    pub fn color(&self, tuning: &Tuning) -> ColorTag {
        if self.is_on_fire(tuning) {
            ColorTag::OnFire
        } else {
            self.id.color()
        }
    }
}

/// A ball. `vel.y` is always zero: height is cosmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    /// (lateral, height, depth)
    pub pos: Vec3,
    pub vel: Vec3,
    pub color: ColorTag,
    /// Previous positions, oldest first
    pub trail: VecDeque<Vec3>,
}

impl Ball {
    pub fn new(id: u32, pos: Vec3, vel: Vec3) -> Self {
        Self {
            id,
            pos,
            vel,
            color: ColorTag::Ball,
            trail: VecDeque::with_capacity(TRAIL_LENGTH + 1),
        }
    }

    /// Record current position to trail (call each tick before moving)
    pub fn record_trail(&mut self) {
        self.trail.push_back(self.pos);
        while self.trail.len() > TRAIL_LENGTH {
            self.trail.pop_front();
        }
    }

    /// Player whose serve would send a ball the way this one is heading
    pub fn heading_server(&self) -> PlayerId {
        if self.vel.z > 0.0 {
            PlayerId::One
        } else {
            PlayerId::Two
        }
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerupKind {
    /// Widens the owner's paddle for a while
    Giant,
    /// Serves an extra ball
    MultiBall,
}

impl PowerupKind {
    pub fn color(self) -> ColorTag {
        match self {
            PowerupKind::Giant => ColorTag::GiantPowerup,
            PowerupKind::MultiBall => ColorTag::MultiPowerup,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PowerupKind::Giant => "GIANT!",
            PowerupKind::MultiBall => "MULTIBALL!",
        }
    }
}

/// The single powerup that may be floating on the field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Powerup {
    pub kind: PowerupKind,
    pub x: f32,
    pub z: f32,
    /// Degrees (cosmetic)
    pub rotation: f32,
}

/// Something that happened during a tick (for audio, logs and UI)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    MatchStarted { two_player: bool },
    Dash { player: PlayerId },
    WallBounce { ball: u32 },
    PaddleHit { player: PlayerId, ball: u32 },
    PointScored { scorer: PlayerId },
    OnFire { player: PlayerId },
    MatchOver { winner: PlayerId },
    PowerupSpawned { kind: PowerupKind },
    PowerupCollected { kind: PowerupKind, owner: PlayerId },
    Mayhem { ball: u32 },
    PauseToggled { paused: bool },
    CameraChanged { camera: CameraMode },
    ReturnedToMenu,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance values in force for this match
    pub tuning: Tuning,
    pub mode: MatchMode,
    pub two_player: bool,
    pub paused: bool,
    /// Set when entering GameOver
    pub winner: Option<PlayerId>,
    /// Controls held during the last tick
    pub held: HeldControls,
    pub camera: CameraMode,
    /// Shake magnitude; decays geometrically while playing
    pub screen_shake: f32,
    /// Paddle hits since the last serve after a point
    pub rally: u32,
    /// Gameplay tick counter (only advances while playing)
    pub frame_count: u64,
    pub players: [Player; 2],
    /// Active balls, in serve order
    pub balls: Vec<Ball>,
    pub powerup: Option<Powerup>,
    /// Visual particles and floating texts (not gameplay-affecting)
    #[serde(skip)]
    pub effects: Effects,
    /// Next ball ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state sitting at the menu
    pub fn new(tuning: Tuning) -> Self {
        let players = [
            Player::new(PlayerId::One, &tuning),
            Player::new(PlayerId::Two, &tuning),
        ];
        Self {
            tuning,
            mode: MatchMode::Menu,
            two_player: false,
            paused: false,
            winner: None,
            held: HeldControls::new(),
            camera: CameraMode::default(),
            screen_shake: 0.0,
            rally: 0,
            frame_count: 0,
            players,
            balls: Vec::new(),
            powerup: None,
            effects: Effects::default(),
            next_id: 1,
        }
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Return to the menu, discarding the match (tuning is kept)
    pub fn reset(&mut self) {
        let tuning = std::mem::take(&mut self.tuning);
        *self = Self::new(tuning);
    }

    /// Reset everything and start playing, player 1 serving
    pub fn start_match<R: Rng + ?Sized>(&mut self, two_player: bool, rng: &mut R) {
        self.reset();
        self.two_player = two_player;
        self.mode = MatchMode::Playing;
        self.serve(PlayerId::One, rng);
        log::info!(
            "Match started ({})",
            if two_player { "two players" } else { "vs computer" }
        );
    }

    /// Serve a new ball from `server`'s end toward the opponent; returns its ID
    pub fn serve<R: Rng + ?Sized>(&mut self, server: PlayerId, rng: &mut R) -> u32 {
        let t = &self.tuning;
        let dir = server.away();
        let pos = Vec3::new(0.0, t.ball_size, -dir * (t.field_depth / 2.0 - t.serve_inset));
        let vel = Vec3::new(
            (rng.random::<f32>() - 0.5) * t.serve_spread,
            0.0,
            dir * t.serve_speed,
        );

        let id = self.next_id;
        self.next_id += 1;
        self.balls.push(Ball::new(id, pos, vel));
        id
    }

    /// True when either player is one point from winning
    pub fn is_match_point(&self) -> bool {
        let needed = self.tuning.points_to_win.saturating_sub(1);
        self.players.iter().any(|p| p.score == needed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_state_is_menu() {
        let state = GameState::new(Tuning::default());
        assert_eq!(state.mode, MatchMode::Menu);
        assert!(state.balls.is_empty());
        assert!(state.powerup.is_none());
        assert_eq!(state.player(PlayerId::One).z, -FIELD_DEPTH / 2.0 + 40.0);
        assert_eq!(state.player(PlayerId::Two).z, FIELD_DEPTH / 2.0 - 40.0);
    }

    #[test]
    fn test_serve_positions() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut state = GameState::new(Tuning::default());

        state.serve(PlayerId::One, &mut rng);
        state.serve(PlayerId::Two, &mut rng);

        let b1 = &state.balls[0];
        assert_eq!(b1.pos.z, -FIELD_DEPTH / 2.0 + 100.0);
        assert_eq!(b1.vel.z, SERVE_SPEED);
        assert!(b1.vel.x.abs() <= SERVE_SPREAD / 2.0);
        assert_eq!(b1.pos.y, BALL_SIZE);

        let b2 = &state.balls[1];
        assert_eq!(b2.pos.z, FIELD_DEPTH / 2.0 - 100.0);
        assert_eq!(b2.vel.z, -SERVE_SPEED);
        assert_ne!(b1.id, b2.id);
    }

    #[test]
    fn test_trail_is_bounded_fifo() {
        let mut ball = Ball::new(1, Vec3::ZERO, Vec3::ZERO);
        for i in 0..20 {
            ball.pos = Vec3::new(i as f32, 0.0, 0.0);
            ball.record_trail();
        }
        assert_eq!(ball.trail.len(), TRAIL_LENGTH);
        // Oldest 8 evicted, so the front is position 8
        assert_eq!(ball.trail.front().unwrap().x, 8.0);
        assert_eq!(ball.trail.back().unwrap().x, 19.0);
    }

    #[test]
    fn test_start_match_resets() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = GameState::new(Tuning::default());
        state.player_mut(PlayerId::Two).score = 4;
        state.rally = 3;
        state.camera = CameraMode::Top;

        state.start_match(true, &mut rng);

        assert_eq!(state.mode, MatchMode::Playing);
        assert!(state.two_player);
        assert_eq!(state.player(PlayerId::Two).score, 0);
        assert_eq!(state.rally, 0);
        assert_eq!(state.camera, CameraMode::Side);
        assert_eq!(state.balls.len(), 1);
        assert!(state.balls[0].vel.z > 0.0);
    }

    #[test]
    fn test_camera_cycle() {
        let c = CameraMode::Side;
        assert_eq!(c.next(), CameraMode::Top);
        assert_eq!(c.next().next(), CameraMode::FirstPerson);
        assert_eq!(c.next().next().next(), CameraMode::Side);
    }

    #[test]
    fn test_match_point() {
        let mut state = GameState::new(Tuning::default());
        assert!(!state.is_match_point());
        state.player_mut(PlayerId::One).score = POINTS_TO_WIN - 1;
        assert!(state.is_match_point());
    }

    #[test]
    fn test_on_fire_color() {
        let tuning = Tuning::default();
        let mut p = Player::new(PlayerId::Two, &tuning);
        assert_eq!(p.color(&tuning), ColorTag::PlayerTwo);
        p.streak = 3;
        assert_eq!(p.color(&tuning), ColorTag::OnFire);
    }
}
