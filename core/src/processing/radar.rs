use crate::math::angle::AngleHelper;
use crate::prelude::{SceneConfig, ScreenPoint};
use crate::processing::classifier::ColorId;
use crate::processing::cone::VisionCone;
use crate::sensor::sample::{Sample, SampleSet};
use serde::{Deserialize, Serialize};

const RING_FRACTIONS: [(f32, ColorId); 4] = [
    (0.25, ColorId::White),
    (0.50, ColorId::Green),
    (0.75, ColorId::Yellow),
    (1.00, ColorId::Red),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarBlip {
    pub position: ScreenPoint,
    pub color: ColorId,
}

/// Gaze-up minimap: samples are rotated so the cone heading points to the top.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarProjector {
    center: ScreenPoint,
    radius: f32,
    range: f32,
}

impl RadarProjector {
    pub fn new(center: ScreenPoint, radius: f32, range: f32) -> Self {
        Self {
            center,
            radius,
            range,
        }
    }

    pub fn from_scene(config: &SceneConfig) -> Self {
        let panel = config.info_panel();
        let center = ScreenPoint::new(
            panel.right - config.radar_radius - 20.0,
            panel.top + panel.height() / 2.0,
        );
        Self::new(center, config.radar_radius, config.outer_radius())
    }

    pub fn center(&self) -> ScreenPoint {
        self.center
    }

    /// Ring radii with their colors, innermost first.
    pub fn rings(&self) -> [(f32, ColorId); 4] {
        RING_FRACTIONS.map(|(fraction, color)| (self.radius * fraction, color))
    }

    pub fn blip(&self, cone: &VisionCone, sample: &Sample) -> Option<RadarBlip> {
        let distance = AngleHelper::distance(cone.apex(), sample.position());
        if distance > self.range {
            return None;
        }
        let scaled = distance / self.range * self.radius;
        let relative =
            AngleHelper::normalize(AngleHelper::bearing(cone.apex(), sample.position()) - cone.orientation());
        let color = RING_FRACTIONS
            .iter()
            .find(|(fraction, _)| scaled <= self.radius * fraction)
            .map(|&(_, color)| color)
            .unwrap_or(ColorId::Red);

        Some(RadarBlip {
            position: ScreenPoint::new(
                self.center.x + relative.sin() * scaled,
                self.center.y - relative.cos() * scaled,
            ),
            color,
        })
    }

    pub fn blips<'a>(
        &'a self,
        cone: &'a VisionCone,
        samples: &'a SampleSet,
    ) -> impl Iterator<Item = RadarBlip> + 'a {
        samples
            .iter()
            .filter_map(move |sample| self.blip(cone, sample))
    }
}
