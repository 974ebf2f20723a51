//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected, seedable RNG only
//! - Stable iteration order (players by id, balls by insertion)
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod effects;
pub mod input;
pub mod paddle;
pub mod physics;
pub mod powerup;
pub mod rally;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod tick;

use rand::SeedableRng;
use rand_pcg::Pcg32;

pub use effects::{Effects, FloatingText, Particle};
pub use input::{Command, Control, HeldControls, TickInput};
pub use snapshot::Snapshot;
pub use state::{
    Ball, CameraMode, ColorTag, GameEvent, GameState, MatchMode, Player, PlayerId, Powerup,
    PowerupKind, TRAIL_LENGTH,
};
pub use tick::tick;

/// RNG used by the driver; any `rand::Rng` works with [`tick`]
pub type GameRng = Pcg32;

pub fn seeded_rng(seed: u64) -> GameRng {
    Pcg32::seed_from_u64(seed)
}
