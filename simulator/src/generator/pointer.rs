use echocore::prelude::{SceneConfig, ScreenPoint};
use serde::{Deserialize, Serialize};

/// Scripted pointer input standing in for a live mouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerScript {
    /// Circles the map origin, advancing `step_deg` per frame.
    Sweep { radius: f32, step_deg: f32 },
    /// Holds the pointer still.
    Fixed { x: f32, y: f32 },
    /// Visits the waypoints in order, one per frame, then wraps.
    Waypoints { points: Vec<ScreenPoint> },
    /// Pointer never enters the window.
    Idle,
}

impl Default for PointerScript {
    fn default() -> Self {
        PointerScript::Sweep {
            radius: 120.0,
            step_deg: 6.0,
        }
    }
}

impl PointerScript {
    pub fn pointer_at(&self, frame: usize, scene: &SceneConfig) -> Option<ScreenPoint> {
        match self {
            PointerScript::Sweep { radius, step_deg } => {
                let origin = scene.map_origin();
                let angle = (frame as f32 * step_deg).to_radians();
                Some(ScreenPoint::new(
                    origin.x + radius * angle.cos(),
                    origin.y + radius * angle.sin(),
                ))
            }
            PointerScript::Fixed { x, y } => Some(ScreenPoint::new(*x, *y)),
            PointerScript::Waypoints { points } => {
                if points.is_empty() {
                    None
                } else {
                    Some(points[frame % points.len()])
                }
            }
            PointerScript::Idle => None,
        }
    }
}
