//! Cosmetic effects: particle bursts, floating texts and camera shake
//!
//! Nothing here feeds back into gameplay. Randomness is drawn from the RNG the
//! caller injects so replays stay exact.

use glam::{Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::ColorTag;

/// Particles per impact burst
pub const BURST_SIZE: usize = 10;
/// Lifetime of a floating text (ticks)
pub const TEXT_LIFE: u32 = 60;
/// Particle lifetime range (ticks, inclusive)
pub const PARTICLE_LIFE_MIN: u32 = 20;
pub const PARTICLE_LIFE_MAX: u32 = 50;

const PARTICLE_SPAWN_HEIGHT: f32 = 10.0;
const PARTICLE_GRAVITY: f32 = 0.5;
const TEXT_SPAWN_HEIGHT: f32 = 20.0;
const TEXT_RISE: f32 = 1.0;

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec3,
    pub vel: Vec3,
    pub color: ColorTag,
    /// Ticks left
    pub life: u32,
    /// Ticks at spawn (for fading)
    pub max_life: u32,
}

impl Particle {
    /// Remaining life in [0, 1]
    pub fn life_fraction(&self) -> f32 {
        if self.max_life == 0 {
            0.0
        } else {
            self.life as f32 / self.max_life as f32
        }
    }
}

/// Rising text announcing an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingText {
    pub text: String,
    pub pos: Vec3,
    pub color: ColorTag,
    pub scale: f32,
    /// Ticks left
    pub life: u32,
}

/// All live cosmetic effects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Effects {
    pub particles: Vec<Particle>,
    pub texts: Vec<FloatingText>,
}

impl Effects {
    /// Spray a burst of particles from a point on the floor
    pub fn burst<R: Rng + ?Sized>(&mut self, x: f32, z: f32, color: ColorTag, rng: &mut R) {
        for _ in 0..BURST_SIZE {
            let vel = Vec3::new(
                (rng.random::<f32>() - 0.5) * 8.0,
                rng.random::<f32>() * 5.0 + 2.0,
                (rng.random::<f32>() - 0.5) * 8.0,
            );
            let life = rng.random_range(PARTICLE_LIFE_MIN..=PARTICLE_LIFE_MAX);
            self.particles.push(Particle {
                pos: Vec3::new(x, PARTICLE_SPAWN_HEIGHT, z),
                vel,
                color,
                life,
                max_life: life,
            });
        }
    }

    /// Show floating text at a point on the floor
    pub fn text(&mut self, text: impl Into<String>, x: f32, z: f32, color: ColorTag, scale: f32) {
        self.texts.push(FloatingText {
            text: text.into(),
            pos: Vec3::new(x, TEXT_SPAWN_HEIGHT, z),
            color,
            scale,
            life: TEXT_LIFE,
        });
    }

    /// Advance every effect one tick and drop the expired ones
    pub fn update(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.vel.y -= PARTICLE_GRAVITY;
            p.life = p.life.saturating_sub(1);
        }
        self.particles.retain(|p| p.life > 0);

        for t in &mut self.texts {
            t.pos.y += TEXT_RISE;
            t.life = t.life.saturating_sub(1);
        }
        self.texts.retain(|t| t.life > 0);
    }

    /// Number of live texts whose message contains `needle`
    pub fn count_texts(&self, needle: &str) -> usize {
        self.texts.iter().filter(|t| t.text.contains(needle)).count()
    }
}

/// Geometric decay of the shake magnitude
#[inline]
pub fn decay_shake(shake: f32, factor: f32) -> f32 {
    shake * factor
}

/// Random camera offset for the current shake magnitude
pub fn shake_offset<R: Rng + ?Sized>(shake: f32, rng: &mut R) -> Vec2 {
    Vec2::new(
        (rng.random::<f32>() - 0.5) * shake,
        (rng.random::<f32>() - 0.5) * shake,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_burst_spawns_particles_in_range() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut fx = Effects::default();
        fx.burst(10.0, -20.0, ColorTag::PlayerOne, &mut rng);

        assert_eq!(fx.particles.len(), BURST_SIZE);
        for p in &fx.particles {
            assert_eq!(p.pos, Vec3::new(10.0, PARTICLE_SPAWN_HEIGHT, -20.0));
            assert!((PARTICLE_LIFE_MIN..=PARTICLE_LIFE_MAX).contains(&p.life));
            assert!(p.vel.y >= 2.0 && p.vel.y < 7.0);
            assert!(p.vel.x.abs() <= 4.0 && p.vel.z.abs() <= 4.0);
            assert_eq!(p.life_fraction(), 1.0);
        }
    }

    #[test]
    fn test_particles_fall_and_expire() {
        let mut fx = Effects::default();
        fx.particles.push(Particle {
            pos: Vec3::ZERO,
            vel: Vec3::new(1.0, 2.0, 0.0),
            color: ColorTag::Ball,
            life: 2,
            max_life: 2,
        });

        fx.update();
        let p = &fx.particles[0];
        assert_eq!(p.pos, Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(p.vel.y, 1.5);
        assert_eq!(p.life, 1);
        assert_eq!(p.life_fraction(), 0.5);

        fx.update();
        assert!(fx.particles.is_empty());
    }

    #[test]
    fn test_dead_particle_is_removed_not_underflowed() {
        let mut fx = Effects::default();
        fx.particles.push(Particle {
            pos: Vec3::ZERO,
            vel: Vec3::ZERO,
            color: ColorTag::Ball,
            life: 0,
            max_life: 0,
        });
        fx.update();
        assert!(fx.particles.is_empty());
    }

    #[test]
    fn test_text_rises_for_its_lifetime() {
        let mut fx = Effects::default();
        fx.text("SMASH!", 0.0, 0.0, ColorTag::PlayerTwo, 1.0);

        for _ in 0..TEXT_LIFE - 1 {
            fx.update();
        }
        assert_eq!(fx.texts.len(), 1);
        assert_eq!(fx.texts[0].life, 1);
        assert_eq!(fx.texts[0].pos.y, TEXT_SPAWN_HEIGHT + (TEXT_LIFE - 1) as f32);

        fx.update();
        assert!(fx.texts.is_empty());
    }

    #[test]
    fn test_shake() {
        assert_eq!(decay_shake(10.0, 0.9), 9.0);

        let mut rng = Pcg32::seed_from_u64(11);
        let off = shake_offset(30.0, &mut rng);
        assert!(off.x.abs() <= 15.0 && off.y.abs() <= 15.0);
        assert_eq!(shake_offset(0.0, &mut rng), Vec2::ZERO);
    }
}
