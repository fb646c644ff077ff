/// Tunable parameters for flower and star behavior.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Per-frame chance that a flower emits a burst of stars.
    pub spawn_chance: f32,
    /// Maximum number of live stars a single flower may own.
    pub star_cap: usize,
    /// Minimum stars emitted per burst.
    pub burst_min: usize,
    /// Maximum stars emitted per burst.
    pub burst_max: usize,
    /// Fade-in rate range for new flowers, per frame.
    pub fade_speed_min: f32,
    pub fade_speed_max: f32,
    /// Flower size range for click-spawned flowers.
    pub flower_size_min: f32,
    pub flower_size_max: f32,
    /// Petal count range for click-spawned flowers (inclusive).
    pub petal_count_min: u32,
    pub petal_count_max: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spawn_chance: 0.1,
            star_cap: 4,
            burst_min: 3,
            burst_max: 4,
            fade_speed_min: 0.01,
            fade_speed_max: 0.03,
            flower_size_min: 20.0,
            flower_size_max: 50.0,
            petal_count_min: 7,
            petal_count_max: 12,
        }
    }
}
