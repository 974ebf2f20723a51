//! Pong Deluxe - a 3D arcade Pong simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, balls, powerups, scoring, effects)
//! - `tuning`: Data-driven game balance
//! - `clock`: Fixed-cadence frame gate for the driver loop
//!
//! Rendering and raw input are external: a renderer reads [`sim::Snapshot`], an input
//! layer fills a [`sim::TickInput`] once per frame.

pub mod clock;
pub mod sim;
pub mod tuning;

pub use clock::FrameGate;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Minimum wall-clock time between two ticks (milliseconds)
    pub const FRAME_TIME_MS: u64 = 16;

    /// Playing field (lateral x depth)
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_DEPTH: f32 = 800.0;

    /// Paddle box: width is lateral, depth is a half-extent along z
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_DEPTH: f32 = 15.0;
    /// Distance from the back line to the paddle centre
    pub const PADDLE_INSET: f32 = 40.0;

    /// Ball radius
    pub const BALL_SIZE: f32 = 8.0;
    /// Depth speed of a freshly served ball (units/tick)
    pub const SERVE_SPEED: f32 = 9.0;
    /// Full range of random lateral serve speed
    pub const SERVE_SPREAD: f32 = 6.0;
    /// Distance from the back line to the serve point
    pub const SERVE_INSET: f32 = 100.0;
    /// Depth speed multiplier on every paddle hit
    pub const HIT_SPEEDUP: f32 = 1.05;
    /// Lateral kick at the very edge of the paddle
    pub const SPIN_FACTOR: f32 = 4.0;
    /// How far past the back line a ball must travel to score
    pub const SCORE_MARGIN: f32 = 50.0;

    /// Game rules
    pub const POINTS_TO_WIN: u32 = 11;
    pub const FIRE_STREAK: u32 = 3;
    pub const MAYHEM_RALLY: u32 = 5;

    /// Movement speeds (units/tick)
    pub const NORMAL_SPEED: f32 = 6.0;
    pub const DASH_SPEED: f32 = 14.0;
    pub const DASH_COOLDOWN_TIME: u32 = 120;

    /// Paddle width easing factor (fraction of the remaining gap per tick)
    pub const WIDTH_EASE: f32 = 0.1;

    /// Powerups
    pub const POWERUP_SPAWN_CHANCE: f32 = 0.002;
    pub const POWERUP_RADIUS: f32 = 25.0;
    pub const POWERUP_SPIN: f32 = 2.0;
    pub const GIANT_DURATION: u32 = 600;
    pub const GIANT_SCALE: f32 = 1.5;

    /// Computer opponent
    pub const AI_SPEED_SCALE: f32 = 0.8;
    pub const AI_DEAD_ZONE: f32 = 10.0;
    pub const AI_ERROR_AMPLITUDE: f32 = 40.0;
    pub const AI_ERROR_FREQUENCY: f32 = 0.05;

    /// Screen shake levels
    pub const SHAKE_WALL: f32 = 5.0;
    pub const SHAKE_PADDLE: f32 = 10.0;
    pub const SHAKE_POWERUP: f32 = 20.0;
    pub const SHAKE_SCORE: f32 = 30.0;
    pub const SHAKE_DECAY: f32 = 0.9;
}

/// Half-open lateral range a paddle of `width` may occupy on a field of `field_width`
#[inline]
pub fn paddle_limits(field_width: f32, width: f32) -> (f32, f32) {
    let left = -field_width / 2.0 + width / 2.0;
    let right = field_width / 2.0 - width / 2.0;
    (left, right)
}

/// Clamp a paddle's lateral centre into the field
#[inline]
pub fn clamp_lateral(x: f32, field_width: f32, width: f32) -> f32 {
    let (left, right) = paddle_limits(field_width, width);
    // Not `f32::clamp`: a paddle wider than the field must not panic
    if x < left {
        left
    } else if x > right {
        right
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consts::*;

    #[test]
    fn test_paddle_limits() {
        let (l, r) = paddle_limits(FIELD_WIDTH, PADDLE_WIDTH);
        assert_eq!(l, -160.0);
        assert_eq!(r, 160.0);
    }

    #[test]
    fn test_clamp_lateral() {
        assert_eq!(clamp_lateral(-500.0, FIELD_WIDTH, PADDLE_WIDTH), -160.0);
        assert_eq!(clamp_lateral(500.0, FIELD_WIDTH, PADDLE_WIDTH), 160.0);
        assert_eq!(clamp_lateral(12.5, FIELD_WIDTH, PADDLE_WIDTH), 12.5);
    }
}
