use super::config::FixtureConfig;
use geo_types::Coord;
use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Seeded source of quantized coordinates and collection sizes.
///
/// Coordinate values are drawn as integers in the scaled range and divided by
/// the scale, so every value is exactly representable at the configured
/// resolution and survives a text round-trip.
///
/// Every draw consumes a fixed width word of the ChaCha20 stream: 64 bits per
/// coordinate value, 32 bits per count. The sequence is the same on every
/// target.
pub struct RandomSource {
    rng: ChaCha20Rng,
    values: Uniform<i64>,
    scale: f64,
}

impl RandomSource {
    pub fn new(config: &FixtureConfig) -> Self {
        let bound = config.scaled_range();
        RandomSource {
            rng: ChaCha20Rng::seed_from_u64(config.seed),
            values: Uniform::new_inclusive(-bound, bound),
            scale: config.scale(),
        }
    }

    pub fn coordinate_value(&mut self) -> f64 {
        let scaled = self.rng.sample(&self.values);
        scaled as f64 / self.scale
    }

    /// Draws x first, then y.
    pub fn coord(&mut self) -> Coord<f64> {
        let x = self.coordinate_value();
        let y = self.coordinate_value();
        Coord { x, y }
    }

    pub fn coords(&mut self, n: usize) -> Vec<Coord<f64>> {
        (0..n).map(|_| self.coord()).collect()
    }

    /// Uniform integer in `[low, high]`, drawn as a `u32`.
    pub fn count(&mut self, low: usize, high: usize) -> usize {
        let counts = Uniform::new_inclusive(low as u32, high as u32);
        self.rng.sample(counts) as usize
    }
}
