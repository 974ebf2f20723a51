//! Read-only view of the game for presentation layers
//!
//! A [`Snapshot`] owns its data, so it can be handed to a renderer or serialized
//! while the next tick mutates the state.

use glam::{Vec2, Vec3};
use rand::Rng;
use serde::Serialize;

use super::effects::shake_offset;
use super::state::{CameraMode, ColorTag, GameState, MatchMode, PlayerId, PowerupKind};

/// Rally length at which the intensity indicator is full
const FULL_INTENSITY_RALLY: f32 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub x: f32,
    pub z: f32,
    pub width: f32,
    pub score: u32,
    pub streak: u32,
    /// 1.0 when dash is ready, rising from 0.0 right after a dash
    pub dash_ready: f32,
    pub giant: bool,
    pub color: ColorTag,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallView {
    pub pos: Vec3,
    pub color: ColorTag,
    /// Oldest first
    pub trail: Vec<Vec3>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerupView {
    pub pos: Vec2,
    pub kind: PowerupKind,
    pub rotation: f32,
    pub color: ColorTag,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleView {
    pub pos: Vec3,
    pub color: ColorTag,
    pub life: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextView {
    pub text: String,
    pub pos: Vec3,
    pub color: ColorTag,
    pub scale: f32,
    pub life: u32,
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub mode: MatchMode,
    pub camera: CameraMode,
    pub paused: bool,
    pub two_player: bool,
    pub winner: Option<PlayerId>,
    pub screen_shake: f32,
    pub rally: u32,
    pub match_point: bool,
    /// 0..=1, grows with the rally
    pub intensity: f32,
    pub players: [PlayerView; 2],
    pub balls: Vec<BallView>,
    pub powerup: Option<PowerupView>,
    pub particles: Vec<ParticleView>,
    pub texts: Vec<TextView>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let tuning = &state.tuning;
        let players = state.players.each_ref().map(|p| {
            let dash_ready = if tuning.dash_cooldown == 0 {
                1.0
            } else {
                1.0 - p.dash_cooldown as f32 / tuning.dash_cooldown as f32
            };
            PlayerView {
                id: p.id,
                x: p.x,
                z: p.z,
                width: p.width,
                score: p.score,
                streak: p.streak,
                dash_ready,
                giant: p.giant,
                color: p.color(tuning),
            }
        });

        Self {
            mode: state.mode,
            camera: state.camera,
            paused: state.paused,
            two_player: state.two_player,
            winner: state.winner,
            screen_shake: state.screen_shake,
            rally: state.rally,
            match_point: state.is_match_point(),
            intensity: (state.rally as f32 / FULL_INTENSITY_RALLY).min(1.0),
            players,
            balls: state
                .balls
                .iter()
                .map(|b| BallView {
                    pos: b.pos,
                    color: b.color,
                    trail: b.trail.iter().copied().collect(),
                })
                .collect(),
            powerup: state.powerup.as_ref().map(|p| PowerupView {
                pos: Vec2::new(p.x, p.z),
                kind: p.kind,
                rotation: p.rotation,
                color: p.kind.color(),
            }),
            particles: state
                .effects
                .particles
                .iter()
                .map(|p| ParticleView {
                    pos: p.pos,
                    color: p.color,
                    life: p.life_fraction(),
                })
                .collect(),
            texts: state
                .effects
                .texts
                .iter()
                .map(|t| TextView {
                    text: t.text.clone(),
                    pos: t.pos,
                    color: t.color,
                    scale: t.scale,
                    life: t.life,
                })
                .collect(),
        }
    }

    /// Camera offset for this frame's shake. Cosmetic; use a separate RNG from the simulation.
    pub fn camera_jitter<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        if self.screen_shake > 0.0 {
            shake_offset(self.screen_shake, rng)
        } else {
            Vec2::ZERO
        }
    }

    pub fn player(&self, id: PlayerId) -> &PlayerView {
        match id {
            PlayerId::One => &self.players[0],
            PlayerId::Two => &self.players[1],
        }
    }
}
