//! Short-lived orbiting star particles emitted by flowers.

use glam::Vec2;
use rand::Rng;

use std::f32::consts::TAU;

/// Star size range at spawn, exclusive of the upper bound.
pub const SIZE_MIN: f32 = 2.0;
pub const SIZE_MAX: f32 = 5.0;

/// Orbit radius range at spawn.
pub const ORBIT_RADIUS_MIN: f32 = 10.0;
pub const ORBIT_RADIUS_MAX: f32 = 30.0;

/// Angular speed range at spawn, radians per frame.
pub const SPEED_MIN: f32 = 0.001;
pub const SPEED_MAX: f32 = 0.003;

/// Opacity lost per frame. A fresh star lives `1 / FADE_DECAY` frames.
pub const FADE_DECAY: f32 = 0.002;

/// Fraction of the orbit radius applied as positional drift per frame.
pub const DRIFT_SCALE: f32 = 0.01;

/// A fading star that drifts along a slow orbit.
///
/// The position is accumulated every frame rather than recomputed from
/// a fixed orbit center, so the path drifts instead of tracing a closed
/// circle around the spawn point. That drift is intentional.
#[derive(Clone, Debug)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    /// Current opacity in `[0, 1]`; strictly decreasing after spawn.
    pub alpha: f32,
    /// Orbital angle in radians, advanced by `speed` each frame.
    pub angle: f32,
    pub orbit_radius: f32,
    pub speed: f32,
}

impl Star {
    /// Spawns a star at `origin` with randomized orbit parameters.
    pub fn spawn(origin: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            pos: origin,
            size: rng.random_range(SIZE_MIN..SIZE_MAX),
            alpha: 1.0,
            angle: rng.random_range(0.0..TAU),
            orbit_radius: rng.random_range(ORBIT_RADIUS_MIN..ORBIT_RADIUS_MAX),
            speed: rng.random_range(SPEED_MIN..SPEED_MAX),
        }
    }

    /// Advances the orbit by one frame and fades the star.
    ///
    /// The owning flower is responsible for removing the star once
    /// [`Star::is_dead`] returns `true`.
    pub fn update(&mut self) {
        self.angle += self.speed;
        self.pos += Vec2::new(self.angle.cos(), self.angle.sin()) * self.orbit_radius * DRIFT_SCALE;
        self.alpha -= FADE_DECAY;
    }

    /// `true` once the star has fully faded out.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.alpha <= 0.0
    }
}
