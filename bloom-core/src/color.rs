//! HSL to RGB conversion for flower colors.
//!
//! Click-spawned flowers pick a random hue at full saturation/lightness
//! presets, so the core only needs the one-way HSL → RGB mapping.

/// Converts an HSL color to 8-bit RGB.
///
/// ### Parameters
/// - `h` - Hue in degrees; values outside `[0, 360)` are wrapped.
/// - `s` - Saturation in `[0, 1]`.
/// - `l` - Lightness in `[0, 1]`.
///
/// ### Returns
/// The `[r, g, b]` triple, each channel in `0..=255`.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [u8; 3] {
    let h = h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    ]
}
