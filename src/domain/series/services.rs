use super::entities::SampleSeries;
use super::value_objects::{Magnitude, MagnitudeBounds};
use crate::domain::errors::{AppError, DataResult};

/// Domain abstraction over the randomness source.
///
/// The browser implementation lives in the infrastructure layer
/// (`js_sys::Math::random`); tests plug in a deterministic source.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Domain service - regenerates the backing series on demand.
#[derive(Debug, Clone)]
pub struct SeriesGenerator {
    len: usize,
    bounds: MagnitudeBounds,
}

impl SeriesGenerator {
    pub fn new(len: usize, bounds: MagnitudeBounds) -> DataResult<Self> {
        if len == 0 {
            return Err(AppError::ValidationError("series length must be positive".to_string()));
        }
        if !bounds.is_valid() {
            return Err(AppError::ValidationError(format!(
                "invalid magnitude bounds [{}, {})",
                bounds.min, bounds.max
            )));
        }
        Ok(Self { len, bounds })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn bounds(&self) -> MagnitudeBounds {
        self.bounds
    }

    /// Produce a whole new series. Magnitudes are whole numbers drawn
    /// uniformly from the half-open bounds.
    pub fn generate(&self, rng: &mut dyn RandomSource) -> SampleSeries {
        let span = self.bounds.span() as f64;
        let values = (0..self.len)
            .map(|_| {
                let draw = (rng.next_unit() * span).floor() as f32 + self.bounds.min;
                Magnitude::from(draw)
            })
            .collect();
        SampleSeries::new(values)
    }
}

/// Deterministic fallback source (splitmix64). Used on hosts without a
/// browser RNG and by tests that need reproducible series.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl RandomSource for SplitMix64 {
    fn next_unit(&mut self) -> f64 {
        // 53 significant bits, same precision as Math.random
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_rejects_empty_bounds() {
        let bounds = MagnitudeBounds::new(100.0, 100.0);
        assert!(SeriesGenerator::new(10, bounds).is_err());
    }

    #[test]
    fn generated_values_stay_in_bounds() {
        let generator = SeriesGenerator::new(500, MagnitudeBounds::default()).unwrap();
        let mut rng = SplitMix64::new(7);
        let series = generator.generate(&mut rng);
        assert_eq!(series.len(), 500);
        for sample in series.values() {
            assert!(generator.bounds().contains(sample.value()), "{:?} out of bounds", sample);
        }
    }
}
