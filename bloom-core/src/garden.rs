//! The garden: an append-only, ordered collection of flowers.
//!
//! Insertion order is draw order. Newly spawned flowers are parked in a
//! pending list and only join the live list at the start of the next
//! [`Garden::step`], so a click that lands mid-frame never changes the
//! set of flowers the current frame iterates over.

use glam::Vec2;
use rand::Rng;

use crate::{color::hsl_to_rgb, config::Config, flower::Flower, types::FlowerId};

/// Saturation of click-spawned flower colors.
pub const FLOWER_SATURATION: f32 = 0.7;
/// Lightness of click-spawned flower colors.
pub const FLOWER_LIGHTNESS: f32 = 0.6;

/// Ordered collection of flowers plus the deferred-spawn queue.
#[derive(Debug, Default)]
pub struct Garden {
    flowers: Vec<Flower>,
    pending: Vec<Flower>,
}

impl Garden {
    /// Creates an empty garden.
    pub fn new() -> Self {
        Self::default()
    }

    /// The live flowers, in insertion (= draw) order.
    ///
    /// Flowers spawned since the last [`Garden::step`] are not yet
    /// included.
    pub fn flowers(&self) -> &[Flower] {
        &self.flowers
    }

    /// Total number of flowers, live and pending.
    pub fn len(&self) -> usize {
        self.flowers.len() + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty() && self.pending.is_empty()
    }

    /// Total number of live stars across all live flowers.
    pub fn star_count(&self) -> usize {
        self.flowers.iter().map(|f| f.stars.len()).sum()
    }

    /// Queues a flower for insertion at the next step.
    ///
    /// ### Returns
    /// The id the flower will have once it joins the live list. Ids are
    /// stable because the garden is append-only.
    pub fn push(&mut self, flower: Flower) -> FlowerId {
        let id = self.len();
        self.pending.push(flower);
        id
    }

    /// Spawns a randomized flower at `pos`, deferred to the next step.
    ///
    /// Size, petal count, and fade-in rate are drawn from the ranges in
    /// `cfg`; the color is a random hue at the fixed
    /// [`FLOWER_SATURATION`] / [`FLOWER_LIGHTNESS`] presets.
    pub fn spawn_at(&mut self, pos: Vec2, cfg: &Config, rng: &mut impl Rng) -> FlowerId {
        let size = rng.random_range(cfg.flower_size_min..cfg.flower_size_max);
        let petal_count = rng.random_range(cfg.petal_count_min..=cfg.petal_count_max);
        let hue = rng.random_range(0.0..360.0);
        let color = hsl_to_rgb(hue, FLOWER_SATURATION, FLOWER_LIGHTNESS);
        let fade_speed = rng.random_range(cfg.fade_speed_min..cfg.fade_speed_max);

        self.push(Flower::new(pos, size, petal_count, color, fade_speed))
    }

    /// Advances the garden by one frame.
    ///
    /// Pending flowers are promoted to the live list first (preserving
    /// insertion order), then every live flower is updated in order.
    pub fn step(&mut self, cfg: &Config, rng: &mut impl Rng) {
        self.flowers.append(&mut self.pending);
        for flower in &mut self.flowers {
            flower.update(cfg, rng);
        }
    }

    /// Removes all flowers, live and pending.
    pub fn clear(&mut self) {
        self.flowers.clear();
        self.pending.clear();
    }
}
