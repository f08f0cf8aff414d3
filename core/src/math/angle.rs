use crate::prelude::ScreenPoint;
use std::f32::consts::{PI, TAU};

/// Trigonometric helpers shared by the cone model and the radar projection.
pub struct AngleHelper;

impl AngleHelper {
    /// Wraps an angle difference into `(-PI, PI]`.
    pub fn normalize(delta: f32) -> f32 {
        if delta > -PI && delta <= PI {
            return delta;
        }
        let wrapped = (delta + PI).rem_euclid(TAU) - PI;
        if wrapped <= -PI {
            wrapped + TAU
        } else {
            wrapped
        }
    }

    /// Direction from `origin` to `target`, measured with `atan2`.
    pub fn bearing(origin: ScreenPoint, target: ScreenPoint) -> f32 {
        (target.y - origin.y).atan2(target.x - origin.x)
    }

    pub fn distance(origin: ScreenPoint, target: ScreenPoint) -> f32 {
        (target.x - origin.x).hypot(target.y - origin.y)
    }

    /// Signed offset of `angle` from `heading`; `None` unless strictly inside `half_width`.
    pub fn offset_within(angle: f32, heading: f32, half_width: f32) -> Option<f32> {
        let offset = Self::normalize(angle - heading);
        if offset.abs() < half_width {
            Some(offset)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(lhs: f32, rhs: f32) -> bool {
        (lhs - rhs).abs() < 1e-4
    }

    #[test]
    fn normalize_keeps_values_already_in_range() {
        assert_eq!(AngleHelper::normalize(0.0), 0.0);
        assert_eq!(AngleHelper::normalize(PI), PI);
        assert_eq!(AngleHelper::normalize(-1.25), -1.25);
    }

    #[test]
    fn normalize_maps_minus_pi_to_pi() {
        assert_eq!(AngleHelper::normalize(-PI), PI);
        assert!(close(AngleHelper::normalize(3.0 * PI), PI));
    }

    #[test]
    fn normalize_results_stay_in_half_open_range() {
        let mut delta = -20.0_f32;
        while delta < 20.0 {
            let wrapped = AngleHelper::normalize(delta);
            assert!(wrapped > -PI && wrapped <= PI, "{delta} -> {wrapped}");
            delta += 0.173;
        }
    }

    #[test]
    fn normalize_is_periodic() {
        for delta in [-7.5_f32, -2.0, -0.3, 0.0, 1.1, 2.9, 6.0, 11.0] {
            let lhs = AngleHelper::normalize(delta);
            let rhs = AngleHelper::normalize(delta + TAU);
            // Both sides of the wrap point describe the same direction.
            let diff = AngleHelper::normalize(lhs - rhs);
            assert!(diff.abs() < 1e-4, "{delta}: {lhs} vs {rhs}");
        }
    }

    #[test]
    fn bearing_follows_display_axes() {
        let origin = ScreenPoint::new(10.0, 10.0);
        assert!(close(AngleHelper::bearing(origin, ScreenPoint::new(20.0, 10.0)), 0.0));
        assert!(close(
            AngleHelper::bearing(origin, ScreenPoint::new(10.0, 20.0)),
            PI / 2.0
        ));
        assert!(close(
            AngleHelper::bearing(origin, ScreenPoint::new(0.0, 10.0)),
            PI
        ));
    }

    #[test]
    fn offset_within_is_strict_at_the_edge() {
        let half = PI / 4.0;
        assert_eq!(AngleHelper::offset_within(half, 0.0, half), None);
        assert!(AngleHelper::offset_within(half - 0.01, 0.0, half).is_some());
    }
}
