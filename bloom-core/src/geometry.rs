//! Pure outline generators for the two shapes the garden draws.
//!
//! Both functions produce offsets relative to the shape's center; the
//! caller translates them to a world position before painting.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;

/// Angular sampling step for the rose curve, in radians.
pub const ROSE_THETA_STEP: f32 = 0.01;

/// Base radius fraction of the rose curve.
///
/// Together with [`ROSE_PETAL_DEPTH`] this keeps every sample inside
/// `[0.4 * size, size]`, so petals never touch the center and never
/// exceed the nominal size.
pub const ROSE_BASE: f32 = 0.7;

/// Amplitude of the petal modulation of the rose curve.
pub const ROSE_PETAL_DEPTH: f32 = 0.3;

/// Number of vertices in a [`star_outline`].
pub const STAR_POINTS: usize = 10;

/// Samples a rose curve (rhodonea) outline as Cartesian offsets.
///
/// The radius at angle `theta` is
/// `size * (ROSE_BASE + ROSE_PETAL_DEPTH * cos(petal_count * theta))`,
/// sampled from `0` to `2π` in [`ROSE_THETA_STEP`] increments. The
/// sequence is finite and recomputed on every call.
///
/// ### Parameters
/// - `size` - Nominal flower radius; must be positive.
/// - `petal_count` - Number of petals; values of 7 or more keep the
///   petals visually distinct.
///
/// ### Returns
/// A lazy iterator over offsets from the flower center.
pub fn rose_outline(size: f32, petal_count: u32) -> impl Iterator<Item = Vec2> {
    let steps = (TAU / ROSE_THETA_STEP) as usize;
    (0..steps).map(move |i| {
        let theta = i as f32 * ROSE_THETA_STEP;
        let r = size * (ROSE_BASE + ROSE_PETAL_DEPTH * (petal_count as f32 * theta).cos());
        Vec2::new(r * theta.cos(), r * theta.sin())
    })
}

/// Builds a 5-pointed star outline as ten Cartesian offsets.
///
/// Vertices alternate between the outer radius `size` and the inner
/// radius `size / 2`, rotating 36° per step. The first vertex points
/// straight up (negative y, screen coordinates).
pub fn star_outline(size: f32) -> [Vec2; STAR_POINTS] {
    let mut points = [Vec2::ZERO; STAR_POINTS];
    let step = TAU / STAR_POINTS as f32;
    for (i, p) in points.iter_mut().enumerate() {
        let r = if i % 2 == 0 { size } else { size * 0.5 };
        let a = -FRAC_PI_2 + i as f32 * step;
        *p = Vec2::new(r * a.cos(), r * a.sin());
    }
    points
}
