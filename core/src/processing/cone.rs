use crate::math::angle::AngleHelper;
use crate::prelude::{Region, SceneConfig, ScreenPoint};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};

/// Outcome of a cone membership test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ConeResult {
    /// `relative_angle` spans `[-0.5, 0.5]` across the cone.
    Inside { relative_angle: f32 },
    Outside,
}

impl ConeResult {
    pub fn is_inside(&self) -> bool {
        matches!(self, ConeResult::Inside { .. })
    }

    pub fn relative_angle(&self) -> Option<f32> {
        match self {
            ConeResult::Inside { relative_angle } => Some(*relative_angle),
            ConeResult::Outside => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Steerable field of view anchored at the map origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionCone {
    apex: ScreenPoint,
    orientation: f32,
    half_width: f32,
    length: f32,
}

impl VisionCone {
    pub fn new(apex: ScreenPoint, half_width: f32, length: f32) -> Self {
        Self {
            apex,
            orientation: 0.0,
            half_width,
            length,
        }
    }

    pub fn from_scene(config: &SceneConfig) -> Self {
        Self::new(
            config.map_origin(),
            config.cone_half_width(),
            config.cone_length(),
        )
    }

    pub fn with_orientation(mut self, orientation: f32) -> Self {
        self.orientation = AngleHelper::normalize(orientation);
        self
    }

    pub fn apex(&self) -> ScreenPoint {
        self.apex
    }

    pub fn orientation(&self) -> f32 {
        self.orientation
    }

    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    /// Re-aims the cone at `pointer` when it lies in `input_region`; otherwise keeps the heading.
    pub fn update_orientation(&mut self, pointer: ScreenPoint, input_region: &Region) -> bool {
        if !input_region.contains(pointer) {
            return false;
        }
        self.orientation = AngleHelper::bearing(self.apex, pointer);
        true
    }

    pub fn test_membership(&self, point: ScreenPoint) -> ConeResult {
        if AngleHelper::distance(self.apex, point) > self.length {
            return ConeResult::Outside;
        }
        let angle_to_point = AngleHelper::bearing(self.apex, point);
        match AngleHelper::offset_within(angle_to_point, self.orientation, self.half_width) {
            Some(offset) => ConeResult::Inside {
                relative_angle: offset / (2.0 * self.half_width),
            },
            None => ConeResult::Outside,
        }
    }

    /// Fixed split of the plane around the apex; the current heading plays no part.
    pub fn side_of(&self, point: ScreenPoint) -> Side {
        let angle = AngleHelper::bearing(self.apex, point);
        let left_lower = angle > -PI && angle < -FRAC_PI_2;
        let left_upper = angle > FRAC_PI_2 && angle < PI;
        if left_lower || left_upper {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// End points of the two cone edges, counter-clockwise edge first.
    pub fn edges(&self) -> (ScreenPoint, ScreenPoint) {
        let at = |angle: f32| {
            ScreenPoint::new(
                self.apex.x + self.length * angle.cos(),
                self.apex.y + self.length * angle.sin(),
            )
        };
        (
            at(self.orientation - self.half_width),
            at(self.orientation + self.half_width),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    fn close(lhs: f32, rhs: f32) -> bool {
        (lhs - rhs).abs() < 1e-4
    }

    fn cone() -> VisionCone {
        VisionCone::new(ScreenPoint::new(0.0, 0.0), FRAC_PI_4, 100.0)
    }

    fn polar(degrees: f32, distance: f32) -> ScreenPoint {
        let angle = degrees.to_radians();
        ScreenPoint::new(distance * angle.cos(), distance * angle.sin())
    }

    #[test]
    fn point_on_heading_is_centered() {
        let result = cone().test_membership(polar(0.0, 50.0));
        assert_eq!(result, ConeResult::Inside { relative_angle: 0.0 });
    }

    #[test]
    fn point_on_rotated_heading_is_centered() {
        for degrees in [-170.0_f32, -90.0, -30.0, 60.0, 135.0, 180.0] {
            let heading = degrees.to_radians();
            let cone = cone().with_orientation(heading);
            let relative = cone
                .test_membership(polar(degrees, 80.0))
                .relative_angle()
                .unwrap();
            assert!(close(relative, 0.0), "{degrees}: {relative}");
        }
    }

    #[test]
    fn offset_inside_width_maps_to_relative_angle() {
        let relative = cone()
            .test_membership(polar(44.0, 50.0))
            .relative_angle()
            .unwrap();
        assert!(close(relative, 44.0 / 90.0), "{relative}");

        let relative = cone()
            .test_membership(polar(-30.0, 50.0))
            .relative_angle()
            .unwrap();
        assert!(close(relative, -30.0 / 90.0), "{relative}");
    }

    #[test]
    fn offset_beyond_width_is_outside() {
        let point = polar(46.0, 50.0);
        assert_eq!(cone().test_membership(point), ConeResult::Outside);
        assert_eq!(cone().side_of(point), Side::Right);
    }

    #[test]
    fn offset_equal_to_half_width_is_outside() {
        let apex = ScreenPoint::new(0.0, 0.0);
        let edge = ScreenPoint::new(50.0, 50.0);
        let cone = VisionCone::new(apex, AngleHelper::bearing(apex, edge), 100.0);
        assert_eq!(cone.test_membership(edge), ConeResult::Outside);
        assert!(cone.test_membership(ScreenPoint::new(50.0, 49.0)).is_inside());
    }

    #[test]
    fn distance_equal_to_length_is_inside() {
        assert!(cone()
            .test_membership(ScreenPoint::new(100.0, 0.0))
            .is_inside());
        assert_eq!(
            cone().test_membership(ScreenPoint::new(101.0, 0.0)),
            ConeResult::Outside
        );
    }

    #[test]
    fn update_orientation_respects_input_region() {
        let region = Region {
            left: 0.0,
            top: 0.0,
            right: 200.0,
            bottom: 200.0,
        };
        let mut cone = VisionCone::new(ScreenPoint::new(100.0, 100.0), FRAC_PI_4, 100.0);

        assert!(cone.update_orientation(ScreenPoint::new(100.0, 0.0), &region));
        assert!(close(cone.orientation(), -FRAC_PI_2));

        assert!(!cone.update_orientation(ScreenPoint::new(300.0, 100.0), &region));
        assert!(close(cone.orientation(), -FRAC_PI_2));
    }

    #[test]
    fn side_split_ignores_heading() {
        let turned = cone().with_orientation(PI);
        for cone in [cone(), turned] {
            assert_eq!(cone.side_of(polar(135.0, 50.0)), Side::Left);
            assert_eq!(cone.side_of(polar(-135.0, 50.0)), Side::Left);
            assert_eq!(cone.side_of(polar(45.0, 50.0)), Side::Right);
            assert_eq!(cone.side_of(polar(-45.0, 50.0)), Side::Right);
        }
    }

    #[test]
    fn side_split_boundaries_fall_right() {
        // Straight behind the apex `atan2` yields PI, which the open interval excludes.
        assert_eq!(cone().side_of(ScreenPoint::new(-50.0, 0.0)), Side::Right);
        assert_eq!(cone().side_of(ScreenPoint::new(0.0, 50.0)), Side::Right);
        assert_eq!(cone().side_of(ScreenPoint::new(0.0, -50.0)), Side::Right);
    }

    #[test]
    fn edges_straddle_heading() {
        let (left, right) = cone().edges();
        assert!(close(left.x, right.x));
        assert!(close(left.y, -right.y));
        assert!(close(AngleHelper::distance(ScreenPoint::new(0.0, 0.0), left), 100.0));
    }
}
