//! Core flower-and-star particle simulation library.
//!
//! Main components:
//! - [`garden`] — the ordered scene of flowers and the per-frame step.
//! - [`flower`] — fade-in flowers that emit stars.
//! - [`star`] — short-lived orbiting star particles.
//! - [`geometry`] — rose-curve and star outline generators.
//! - [`color`] — HSL → RGB conversion for flower colors.
//! - [`config`] — tunable simulation parameters.
//! - [`types`] — shared type aliases and IDs.

pub mod color;
pub mod config;
pub mod flower;
pub mod garden;
pub mod geometry;
pub mod star;
pub mod types;
