use crate::prelude::ScreenPoint;
use serde::{Deserialize, Serialize};

/// Simulated echolocation return on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    x: f32,
    y: f32,
    depth: f32,
}

impl Sample {
    /// Builds a sample whose depth is measured from `origin`.
    pub fn measured_from(origin: ScreenPoint, x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            depth: (x - origin.x).hypot(y - origin.y),
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn position(&self) -> ScreenPoint {
        ScreenPoint::new(self.x, self.y)
    }
}

/// Immutable collection of samples shared by every frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl FromIterator<Sample> for SampleSet {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_is_distance_to_origin() {
        let sample = Sample::measured_from(ScreenPoint::new(200.0, 266.0), 230.0, 306.0);
        assert_eq!(sample.depth(), 50.0);
        assert_eq!(sample.position(), ScreenPoint::new(230.0, 306.0));
    }

    #[test]
    fn empty_set_has_no_samples() {
        let set = SampleSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }
}
