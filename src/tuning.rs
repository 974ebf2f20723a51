//! Game balance values
//!
//! Every number the simulation uses comes from a [`Tuning`]. The defaults are the
//! constants in [`crate::consts`]; a JSON file may override any subset of them at start-up.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Simulation tuning (read once per match, never mutated by the simulation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_depth: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_depth: f32,
    pub paddle_inset: f32,
    pub normal_speed: f32,
    pub dash_speed: f32,
    /// Ticks before dash can be used again
    pub dash_cooldown: u32,
    pub width_ease: f32,

    // === Ball ===
    pub ball_size: f32,
    pub serve_speed: f32,
    pub serve_spread: f32,
    pub serve_inset: f32,
    pub hit_speedup: f32,
    pub spin_factor: f32,
    pub score_margin: f32,

    // === Rules ===
    pub points_to_win: u32,
    pub fire_streak: u32,
    pub mayhem_rally: u32,

    // === Powerups ===
    /// Per-tick probability of a powerup appearing (when none exists)
    pub powerup_chance: f32,
    pub powerup_radius: f32,
    pub giant_duration: u32,
    pub giant_scale: f32,

    // === Computer opponent ===
    pub ai_speed_scale: f32,
    pub ai_dead_zone: f32,
    pub ai_error_amplitude: f32,
    pub ai_error_frequency: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_depth: FIELD_DEPTH,

            paddle_width: PADDLE_WIDTH,
            paddle_depth: PADDLE_DEPTH,
            paddle_inset: PADDLE_INSET,
            normal_speed: NORMAL_SPEED,
            dash_speed: DASH_SPEED,
            dash_cooldown: DASH_COOLDOWN_TIME,
            width_ease: WIDTH_EASE,

            ball_size: BALL_SIZE,
            serve_speed: SERVE_SPEED,
            serve_spread: SERVE_SPREAD,
            serve_inset: SERVE_INSET,
            hit_speedup: HIT_SPEEDUP,
            spin_factor: SPIN_FACTOR,
            score_margin: SCORE_MARGIN,

            points_to_win: POINTS_TO_WIN,
            fire_streak: FIRE_STREAK,
            mayhem_rally: MAYHEM_RALLY,

            powerup_chance: POWERUP_SPAWN_CHANCE,
            powerup_radius: POWERUP_RADIUS,
            giant_duration: GIANT_DURATION,
            giant_scale: GIANT_SCALE,

            ai_speed_scale: AI_SPEED_SCALE,
            ai_dead_zone: AI_DEAD_ZONE,
            ai_error_amplitude: AI_ERROR_AMPLITUDE,
            ai_error_frequency: AI_ERROR_FREQUENCY,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load tuning from a JSON file, falling back to defaults on any problem
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cannot read tuning {}: {} - using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) if tuning.is_playable() => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Ok(_) => {
                log::warn!("Tuning in {} is not playable - using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Invalid tuning in {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Paddle width while the giant powerup is active
    pub fn giant_width(&self) -> f32 {
        self.paddle_width * self.giant_scale
    }

    /// Depth of player 1's paddle (player 2 mirrors it)
    pub fn paddle_z(&self) -> f32 {
        self.field_depth / 2.0 - self.paddle_inset
    }

    /// Sanity check: a giant paddle must fit in the field and balls must move
    pub fn is_playable(&self) -> bool {
        self.field_width > 0.0
            && self.field_depth > 0.0
            && self.giant_width() < self.field_width
            && self.serve_speed > 0.0
            && self.points_to_win > 0
            && (0.0..=1.0).contains(&self.powerup_chance)
            && (0.0..=1.0).contains(&self.width_ease)
    }
}
