use serde::{Deserialize, Serialize};

/// Number of distance bands the classifier knows about.
pub const BAND_COUNT: usize = 5;

/// Point on the logical display canvas (Y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle on the display, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Region {
    pub fn contains(&self, point: ScreenPoint) -> bool {
        (self.left..=self.right).contains(&point.x) && (self.top..=self.bottom).contains(&point.y)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Compiled-in scene constants; every field can be overridden from a workflow file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub display_width: f32,
    pub display_height: f32,
    /// Pixels per conceptual distance unit.
    pub display_scale: f32,
    /// Raw band thresholds, ascending, in conceptual units (tenths of a meter).
    pub distances: [f32; BAND_COUNT],
    pub cone_half_width_deg: f32,
    pub viewer_distance: f32,
    /// Distance between the projection row and the ground line in the first-person view.
    pub ground_offset: f32,
    pub radar_radius: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            display_width: 800.0,
            display_height: 800.0,
            display_scale: 1.7,
            distances: [20.0, 40.0, 60.0, 80.0, 100.0],
            cone_half_width_deg: 45.0,
            viewer_distance: 500.0,
            ground_offset: 100.0,
            radar_radius: 100.0,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> SceneResult<()> {
        let empty = |side: f32| side.is_nan() || side <= 0.0;
        if empty(self.display_width) || empty(self.display_height) {
            return Err(SceneError::EmptyDisplay {
                width: self.display_width,
                height: self.display_height,
            });
        }
        for (name, value) in [
            ("display_scale", self.display_scale),
            ("cone_half_width_deg", self.cone_half_width_deg),
            ("viewer_distance", self.viewer_distance),
            ("radar_radius", self.radar_radius),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(SceneError::NonPositive { name, value });
            }
        }
        if self.distances[0].is_nan() || self.distances[0] <= 0.0 {
            return Err(SceneError::NonPositive {
                name: "distances[0]",
                value: self.distances[0],
            });
        }
        for index in 1..BAND_COUNT {
            let previous = self.distances[index - 1];
            let current = self.distances[index];
            if current.is_nan() || current <= previous {
                return Err(SceneError::NonAscendingThresholds {
                    index,
                    previous,
                    current,
                });
            }
        }
        Ok(())
    }

    /// Thresholds in display pixels.
    pub fn scaled_thresholds(&self) -> [f32; BAND_COUNT] {
        self.distances.map(|distance| distance * self.display_scale)
    }

    /// Radius of the outermost ring; samples beyond it are never counted.
    pub fn outer_radius(&self) -> f32 {
        self.distances[BAND_COUNT - 1] * self.display_scale
    }

    pub fn cone_length(&self) -> f32 {
        self.outer_radius().trunc()
    }

    pub fn cone_half_width(&self) -> f32 {
        self.cone_half_width_deg.to_radians()
    }

    /// Reference origin of the map view: cone apex and sample generation center.
    pub fn map_origin(&self) -> ScreenPoint {
        ScreenPoint::new(
            (self.display_width / 4.0).floor(),
            (self.display_height / 3.0).floor(),
        )
    }

    /// Pointer positions inside this region steer the cone.
    pub fn input_region(&self) -> Region {
        Region {
            left: 0.0,
            top: 0.0,
            right: (self.display_width / 2.0).floor(),
            bottom: (self.display_height / 2.0).floor(),
        }
    }

    /// Samples left of this column are drawn on the map.
    pub fn map_view_width(&self) -> f32 {
        (self.display_width / 2.0).floor()
    }

    pub fn view_panel_x(&self) -> f32 {
        (self.display_width / 2.0).floor()
    }

    pub fn view_panel_width(&self) -> f32 {
        self.display_width - self.view_panel_x()
    }

    /// Screen offset applied by the perspective projection.
    pub fn projection_offset(&self) -> ScreenPoint {
        ScreenPoint::new(
            (self.display_width / 4.0).floor() * 3.0,
            (self.display_height / 3.0).floor(),
        )
    }

    pub fn ground_level(&self) -> f32 {
        (self.display_height / 3.0).floor() + self.ground_offset
    }

    /// Bottom-right panel listing silhouette counts.
    pub fn log_panel(&self) -> Region {
        Region {
            left: self.view_panel_x(),
            top: self.display_height - 225.0,
            right: self.display_width,
            bottom: self.display_height,
        }
    }

    /// Bottom-left panel with the map totals and the radar.
    pub fn info_panel(&self) -> Region {
        Region {
            left: 0.0,
            top: self.display_height - 300.0,
            right: self.map_view_width(),
            bottom: self.display_height,
        }
    }
}

/// Configuration defects detected when a scene is built.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("threshold {index} ({current}) must exceed the previous threshold ({previous})")]
    NonAscendingThresholds {
        index: usize,
        previous: f32,
        current: f32,
    },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("display must have a positive size, got {width}x{height}")]
    EmptyDisplay { width: f32, height: f32 },
}

pub type SceneResult<T> = Result<T, SceneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_matches_compiled_constants() {
        let config = SceneConfig::default();
        config.validate().unwrap();
        assert_eq!(config.map_origin(), ScreenPoint::new(200.0, 266.0));
        assert_eq!(config.cone_length(), 170.0);
        assert_eq!(config.projection_offset(), ScreenPoint::new(600.0, 266.0));
        assert_eq!(config.ground_level(), 366.0);
        assert_eq!(config.view_panel_width(), 400.0);
    }

    #[test]
    fn thresholds_are_scaled_by_display_factor() {
        let config = SceneConfig::default();
        let scaled = config.scaled_thresholds();
        assert!((scaled[0] - 34.0).abs() < 1e-4);
        assert!((scaled[4] - 170.0).abs() < 1e-4);
    }

    #[test]
    fn validate_rejects_non_ascending_thresholds() {
        let config = SceneConfig {
            distances: [20.0, 40.0, 40.0, 80.0, 100.0],
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(SceneError::NonAscendingThresholds {
                index: 2,
                previous: 40.0,
                current: 40.0,
            })
        );
    }

    #[test]
    fn validate_rejects_non_positive_viewer_distance() {
        let config = SceneConfig {
            viewer_distance: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SceneError::NonPositive {
                name: "viewer_distance",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_nan_display_size() {
        let config = SceneConfig {
            display_height: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SceneError::EmptyDisplay { .. })
        ));
    }

    #[test]
    fn input_region_is_inclusive() {
        let region = SceneConfig::default().input_region();
        assert!(region.contains(ScreenPoint::new(0.0, 0.0)));
        assert!(region.contains(ScreenPoint::new(400.0, 400.0)));
        assert!(!region.contains(ScreenPoint::new(400.5, 10.0)));
        assert!(!region.contains(ScreenPoint::new(-1.0, 10.0)));
    }
}
