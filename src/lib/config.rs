/// Parameters of a fixture generation run.
///
/// All values are fixed at compile time. Changing any of them changes the
/// emitted fixture, so a committed fixture file has to be regenerated
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureConfig {
    /// Seed of the random source.
    pub seed: u64,
    /// Number of geometries generated for every geometry kind.
    pub count_per_kind: usize,
    /// Coordinates are drawn from `[-coord_range, coord_range]`.
    pub coord_range: f64,
    /// Number of fractional decimal digits kept for every coordinate value.
    pub resolution: u32,
}

pub const SEED: u64 = 0;
pub const COUNT_PER_KIND: usize = 8;
pub const COORD_RANGE: f64 = 1.0;
pub const RESOLUTION: u32 = 6;

impl Default for FixtureConfig {
    fn default() -> Self {
        FixtureConfig {
            seed: SEED,
            count_per_kind: COUNT_PER_KIND,
            coord_range: COORD_RANGE,
            resolution: RESOLUTION,
        }
    }
}

impl FixtureConfig {
    /// Factor between a coordinate value and the integer it is drawn as.
    pub fn scale(&self) -> f64 {
        10f64.powi(self.resolution as i32)
    }

    /// Inclusive bound of the scaled integer draw.
    pub fn scaled_range(&self) -> i64 {
        (self.coord_range * self.scale()).round() as i64
    }
}
