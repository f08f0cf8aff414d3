use crate::prelude::{SceneConfig, ScreenPoint};
use crate::processing::classifier::ColorId;
use serde::{Deserialize, Serialize};

/// Screen placement of an in-cone sample for one draw call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub position: ScreenPoint,
    pub scale: u32,
}

/// First-person projections onto the view panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Projector {
    offset: ScreenPoint,
    viewer_distance: f32,
    panel_x: f32,
    panel_width: f32,
    ground_level: f32,
}

impl Projector {
    pub fn from_scene(config: &SceneConfig) -> Self {
        Self {
            offset: config.projection_offset(),
            viewer_distance: config.viewer_distance,
            panel_x: config.view_panel_x(),
            panel_width: config.view_panel_width(),
            ground_level: config.ground_level(),
        }
    }

    pub fn viewer_distance(&self) -> f32 {
        self.viewer_distance
    }

    pub fn ground_level(&self) -> f32 {
        self.ground_level
    }

    /// Perspective divide; the Y axis flips from world-up to display-down.
    pub fn project_3d(
        &self,
        x: f32,
        y: f32,
        depth: f32,
        viewer_distance: f32,
        scale: f32,
    ) -> ScreenPoint {
        let factor = viewer_distance / (viewer_distance + depth);
        ScreenPoint::new(
            x * factor * scale + self.offset.x,
            -y * factor * scale + self.offset.y,
        )
    }

    pub fn project_relative_angle(relative_angle: f32, panel_width: f32, panel_x_offset: f32) -> f32 {
        (relative_angle + 0.5) * panel_width + panel_x_offset
    }

    /// Places a silhouette on the ground line of the view panel.
    pub fn project_silhouette(&self, relative_angle: f32, color: ColorId) -> ProjectedPoint {
        ProjectedPoint {
            position: ScreenPoint::new(
                Self::project_relative_angle(relative_angle, self.panel_width, self.panel_x),
                self.ground_level,
            ),
            scale: Self::silhouette_scale(color),
        }
    }

    /// Nearer bands draw larger silhouettes.
    pub fn silhouette_scale(color: ColorId) -> u32 {
        match color {
            ColorId::White => 7,
            ColorId::Green => 6,
            ColorId::Yellow => 4,
            ColorId::Orange => 2,
            ColorId::Red => 1,
        }
    }

    /// Row of the exit-arrow counters for `color`, below the ground line.
    pub fn counter_row(&self, color: ColorId) -> f32 {
        let row = match color {
            ColorId::White => 0.0,
            ColorId::Green => 1.0,
            ColorId::Yellow => 2.0,
            ColorId::Orange => 3.0,
            ColorId::Red => 4.0,
        };
        self.ground_level + 20.0 + 40.0 * row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projector() -> Projector {
        Projector::from_scene(&SceneConfig::default())
    }

    #[test]
    fn project_3d_divides_by_depth() {
        let projector = projector();
        let origin = projector.project_3d(0.0, 0.0, 250.0, 500.0, 1.0);
        assert_eq!(origin, ScreenPoint::new(600.0, 266.0));

        let near = projector.project_3d(30.0, 60.0, 0.0, 500.0, 1.0);
        assert_eq!(near, ScreenPoint::new(630.0, 206.0));

        let far = projector.project_3d(30.0, 60.0, 500.0, 500.0, 2.0);
        assert_eq!(far, ScreenPoint::new(630.0, 206.0));
    }

    #[test]
    fn relative_angle_spans_the_panel() {
        assert_eq!(Projector::project_relative_angle(-0.5, 400.0, 400.0), 400.0);
        assert_eq!(Projector::project_relative_angle(0.0, 400.0, 400.0), 600.0);
        assert_eq!(Projector::project_relative_angle(0.5, 400.0, 400.0), 800.0);
    }

    #[test]
    fn silhouettes_sit_on_the_ground_line() {
        let projected = projector().project_silhouette(0.25, ColorId::Green);
        assert_eq!(projected.position, ScreenPoint::new(700.0, 366.0));
        assert_eq!(projected.scale, 6);
    }

    #[test]
    fn silhouette_scale_shrinks_with_distance() {
        let scales: Vec<u32> = ColorId::ALL
            .iter()
            .map(|&color| Projector::silhouette_scale(color))
            .collect();
        assert_eq!(scales, vec![7, 6, 4, 2, 1]);
    }

    #[test]
    fn counter_rows_stack_below_ground() {
        let projector = projector();
        assert_eq!(projector.counter_row(ColorId::White), 386.0);
        assert_eq!(projector.counter_row(ColorId::Red), 546.0);
    }
}
