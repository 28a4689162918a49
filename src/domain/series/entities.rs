pub use super::value_objects::{Magnitude, MagnitudeBounds};
use serde::{Deserialize, Serialize};

/// Domain entity - the full backing series.
///
/// Fixed length, ordered, read-by-index only. The visualizer never mutates
/// individual samples; a reset replaces the whole series with a freshly
/// generated one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSeries {
    values: Vec<Magnitude>,
}

impl SampleSeries {
    pub fn new(values: Vec<Magnitude>) -> Self {
        Self { values }
    }

    pub fn empty() -> Self {
        Self { values: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read a sample by global index. `None` past the end of the series;
    /// the projector maps that to the baseline.
    pub fn get(&self, index: usize) -> Option<Magnitude> {
        self.values.get(index).copied()
    }

    pub fn values(&self) -> &[Magnitude] {
        &self.values
    }

    pub fn first(&self) -> Option<Magnitude> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<Magnitude> {
        self.values.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_past_end_is_none() {
        let series = SampleSeries::new(vec![Magnitude::from(30.0), Magnitude::from(40.0)]);
        assert_eq!(series.get(1), Some(Magnitude::from(40.0)));
        assert_eq!(series.get(2), None);
    }
}
