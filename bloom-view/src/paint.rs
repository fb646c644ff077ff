//! egui painting for flowers and stars.
//!
//! The rose curve and the 5-pointed star are star-shaped regions around
//! their own center, so both are filled with a triangle fan rooted at
//! the center vertex instead of egui's convex-polygon shape.

use std::f32::consts::FRAC_PI_4;

use bloom_core::{
    flower::Flower,
    geometry::{rose_outline, star_outline},
    star::Star,
};
use glam::Vec2;
use rand::Rng;

/// Flower center disc color (`#ffcc00`).
const CENTER_COLOR: [u8; 3] = [255, 204, 0];
/// Stalk color (`#4CAF50`).
const STALK_COLOR: [u8; 3] = [76, 175, 80];

fn to_pos2(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

fn with_alpha(rgb: [u8; 3], alpha: f32) -> egui::Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(rgb[0], rgb[1], rgb[2], a)
}

/// Builds a triangle-fan mesh filling a star-shaped outline.
///
/// `center` becomes vertex 0; each consecutive pair of outline points
/// forms a triangle with it, closing back to the first outline point.
pub fn fan_mesh(
    center: egui::Pos2,
    outline: impl Iterator<Item = egui::Pos2>,
    color: egui::Color32,
) -> egui::Mesh {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(center, color);
    for p in outline {
        mesh.colored_vertex(p, color);
    }

    let ring = mesh.vertices.len() as u32 - 1;
    for i in 1..=ring {
        let next = if i == ring { 1 } else { i + 1 };
        mesh.add_triangle(0, i, next);
    }
    mesh
}

/// Paints one flower: petals, center disc, and stalk.
///
/// The flower's fade-in alpha scales all three parts, matching a
/// single global-alpha scope.
pub fn paint_flower(painter: &egui::Painter, flower: &Flower) {
    let center = to_pos2(flower.pos);
    let alpha = flower.alpha;

    let petals = fan_mesh(
        center,
        rose_outline(flower.size, flower.petal_count).map(|off| to_pos2(flower.pos + off)),
        with_alpha(flower.color, alpha),
    );
    painter.add(egui::Shape::mesh(petals));

    painter.circle_filled(center, flower.size / 6.0, with_alpha(CENTER_COLOR, alpha));

    // Stalk hangs straight down from the flower center.
    let foot = to_pos2(flower.pos + Vec2::new(0.0, flower.size * 2.0));
    painter.line_segment(
        [center, foot],
        egui::Stroke::new(flower.size / 10.0, with_alpha(STALK_COLOR, alpha)),
    );
}

/// Paints one star with its glow halo.
///
/// The visual rotation is re-rolled from `rng` on every call (a random
/// multiple of 45°) and never stored, so the star flickers rather than
/// spinning smoothly.
pub fn paint_star(painter: &egui::Painter, star: &Star, rng: &mut impl Rng) {
    let center = to_pos2(star.pos);

    // Glow halo standing in for a blur: two soft white discs.
    painter.circle_filled(center, star.size * 2.5, with_alpha([255, 255, 255], star.alpha * 0.1));
    painter.circle_filled(center, star.size * 1.5, with_alpha([255, 255, 255], star.alpha * 0.2));

    let rotation = FRAC_PI_4 * rng.random_range(0..4) as f32;
    let (sin, cos) = rotation.sin_cos();
    let body = fan_mesh(
        center,
        star_outline(star.size).into_iter().map(|off| {
            let rotated = Vec2::new(off.x * cos - off.y * sin, off.x * sin + off.y * cos);
            to_pos2(star.pos + rotated)
        }),
        with_alpha([255, 255, 255], star.alpha),
    );
    painter.add(egui::Shape::mesh(body));
}
