//! Flowers: fade-in emitters that own a small set of orbiting stars.

use glam::Vec2;
use rand::Rng;

use crate::{config::Config, star::Star};

/// A clicked-in flower that fades in and periodically emits stars.
///
/// Flowers are never removed once created; their fade-in alpha rises
/// monotonically to 1 and stays there. The owned star list is bounded
/// by [`Config::star_cap`] at every observation point.
#[derive(Clone, Debug)]
pub struct Flower {
    pub pos: Vec2,
    /// Nominal petal radius; must be positive.
    pub size: f32,
    /// Petal count; 7 or more keeps petals visually distinct.
    pub petal_count: u32,
    /// Petal fill color as 8-bit RGB.
    pub color: [u8; 3],
    /// Fade-in opacity in `[0, 1]`, non-decreasing until clamped at 1.
    pub alpha: f32,
    /// Per-frame fade-in increment, fixed at creation.
    pub fade_speed: f32,
    pub stars: Vec<Star>,
}

impl Flower {
    /// Creates a fully transparent flower at `pos`.
    pub fn new(pos: Vec2, size: f32, petal_count: u32, color: [u8; 3], fade_speed: f32) -> Self {
        Self {
            pos,
            size,
            petal_count,
            color,
            alpha: 0.0,
            fade_speed,
            stars: Vec::with_capacity(4),
        }
    }

    /// Advances the flower by one frame.
    ///
    /// 1. Raises the fade-in alpha by `fade_speed`, clamped to 1 since
    ///    it is used directly as a rendering alpha.
    /// 2. With probability [`Config::spawn_chance`], and only while the
    ///    star count is below [`Config::star_cap`], emits a burst of
    ///    `burst_min..=burst_max` stars at the flower's position. The
    ///    burst is truncated so the cap is never exceeded.
    /// 3. Advances every owned star and removes the ones that have
    ///    fully faded out.
    pub fn update(&mut self, cfg: &Config, rng: &mut impl Rng) {
        if self.alpha < 1.0 {
            self.alpha = (self.alpha + self.fade_speed).min(1.0);
        }

        if rng.random::<f32>() < cfg.spawn_chance && self.stars.len() < cfg.star_cap {
            let burst = rng
                .random_range(cfg.burst_min..=cfg.burst_max)
                .min(cfg.star_cap - self.stars.len());
            for _ in 0..burst {
                self.stars.push(Star::spawn(self.pos, rng));
            }
        }

        for star in &mut self.stars {
            star.update();
        }
        self.stars.retain(|s| !s.is_dead());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::star;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn test_flower(fade_speed: f32) -> Flower {
        Flower::new(Vec2::new(100.0, 150.0), 30.0, 8, [200, 80, 120], fade_speed)
    }

    #[test]
    fn new_flower_is_transparent_and_starless() {
        let flower = test_flower(0.02);
        assert_eq!(flower.pos, Vec2::new(100.0, 150.0));
        assert_eq!(flower.alpha, 0.0);
        assert!(flower.stars.is_empty());
    }

    #[test]
    fn fade_in_reaches_one_and_never_exceeds_it() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut cfg = Config::default();
        cfg.spawn_chance = 0.0; // isolate the fade behavior

        let mut flower = test_flower(0.02);
        for _ in 0..60 {
            flower.update(&cfg, &mut rng);
            assert!(flower.alpha >= 0.0 && flower.alpha <= 1.0);
        }

        // At 0.02 per frame the flower is fully opaque within ~50
        // frames, and the clamp keeps it exactly at 1 afterwards.
        assert_eq!(flower.alpha, 1.0);
        flower.update(&cfg, &mut rng);
        assert_eq!(flower.alpha, 1.0);
    }

    #[test]
    fn overshooting_fade_rate_is_clamped() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut cfg = Config::default();
        cfg.spawn_chance = 0.0;

        let mut flower = test_flower(0.7);
        flower.update(&cfg, &mut rng);
        assert_eq!(flower.alpha, 0.7);
        flower.update(&cfg, &mut rng);
        assert_eq!(flower.alpha, 1.0);
    }

    #[test]
    fn star_count_never_exceeds_the_cap() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut cfg = Config::default();
        cfg.spawn_chance = 1.0; // force a burst attempt every frame

        let mut flower = test_flower(0.02);
        for _ in 0..2000 {
            flower.update(&cfg, &mut rng);
            assert!(
                flower.stars.len() <= cfg.star_cap,
                "cap exceeded: {} stars",
                flower.stars.len()
            );
        }
    }

    #[test]
    fn burst_is_truncated_when_near_the_cap() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut cfg = Config::default();
        cfg.spawn_chance = 1.0;

        let mut flower = test_flower(0.02);
        // Pre-fill to one below the cap; the next burst may add at
        // most a single star.
        for _ in 0..cfg.star_cap - 1 {
            flower.stars.push(Star::spawn(flower.pos, &mut rng));
        }

        flower.update(&cfg, &mut rng);
        assert_eq!(flower.stars.len(), cfg.star_cap);
    }

    #[test]
    fn dead_stars_are_removed_the_frame_they_fade_out() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut cfg = Config::default();
        cfg.spawn_chance = 0.0; // no respawns while we watch one star

        let mut flower = test_flower(0.02);
        flower.stars.push(Star {
            pos: flower.pos,
            size: 3.0,
            // Two decay steps away from death.
            alpha: 2.0 * star::FADE_DECAY,
            angle: 0.0,
            orbit_radius: 15.0,
            speed: 0.002,
        });

        flower.update(&cfg, &mut rng);
        assert_eq!(flower.stars.len(), 1);
        assert!(flower.stars[0].alpha > 0.0);

        flower.update(&cfg, &mut rng);
        assert!(flower.stars.is_empty(), "faded star must be reaped same frame");
    }

    #[test]
    fn stars_spawn_at_the_flower_position() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut cfg = Config::default();
        cfg.spawn_chance = 1.0;

        let mut flower = test_flower(0.02);
        flower.update(&cfg, &mut rng);

        assert!(!flower.stars.is_empty());
        for star in &flower.stars {
            // Each star gets one update on its spawn frame, so it has
            // drifted at most one orbit step from the flower.
            let max_step = star::ORBIT_RADIUS_MAX * star::DRIFT_SCALE;
            assert!((star.pos - flower.pos).length() <= max_step + 1e-4);
        }
    }
}
