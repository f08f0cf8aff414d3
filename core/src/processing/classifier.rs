use crate::prelude::{SceneConfig, BAND_COUNT};
use serde::{Deserialize, Serialize};

/// Distance band, nearest first. The variant order is the band order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColorId {
    White,
    Green,
    Yellow,
    Orange,
    Red,
}

impl ColorId {
    pub const ALL: [ColorId; BAND_COUNT] = [
        ColorId::White,
        ColorId::Green,
        ColorId::Yellow,
        ColorId::Orange,
        ColorId::Red,
    ];

    pub fn index(self) -> usize {
        match self {
            ColorId::White => 0,
            ColorId::Green => 1,
            ColorId::Yellow => 2,
            ColorId::Orange => 3,
            ColorId::Red => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorId::White => (255, 255, 255),
            ColorId::Green => (0, 255, 0),
            ColorId::Yellow => (255, 255, 0),
            ColorId::Orange => (255, 165, 0),
            ColorId::Red => (255, 0, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorId::White => "White",
            ColorId::Green => "Green",
            ColorId::Yellow => "Yellow",
            ColorId::Orange => "Orange",
            ColorId::Red => "Red",
        }
    }

    pub fn is_farthest(self) -> bool {
        self == ColorId::Red
    }
}

/// Ascending band thresholds in display pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceBands {
    thresholds: [f32; BAND_COUNT],
}

impl DistanceBands {
    /// Callers guarantee ascending thresholds; `SceneConfig::validate` checks loaded ones.
    pub fn new(thresholds: [f32; BAND_COUNT]) -> Self {
        debug_assert!(
            thresholds.windows(2).all(|pair| pair[0] < pair[1]),
            "thresholds must ascend: {thresholds:?}"
        );
        Self { thresholds }
    }

    pub fn from_scene(config: &SceneConfig) -> Self {
        Self::new(config.scaled_thresholds())
    }

    pub fn thresholds(&self) -> &[f32; BAND_COUNT] {
        &self.thresholds
    }

    pub fn outer_radius(&self) -> f32 {
        self.thresholds[BAND_COUNT - 1]
    }

    /// First band whose upper bound `depth` does not exceed; the last band otherwise.
    /// Ties land in the nearer band (`<=`); a strict `<` would push them one band out.
    pub fn classify(&self, depth: f32) -> ColorId {
        self.thresholds[..BAND_COUNT - 1]
            .iter()
            .position(|&bound| depth <= bound)
            .and_then(ColorId::from_index)
            .unwrap_or(ColorId::Red)
    }

    /// Far-band samples beyond the outer ring are culled from every count.
    pub fn passes_radius_gate(&self, color: ColorId, depth: f32) -> bool {
        !color.is_farthest() || depth <= self.outer_radius()
    }
}

impl Default for DistanceBands {
    fn default() -> Self {
        Self::from_scene(&SceneConfig::default())
    }
}
