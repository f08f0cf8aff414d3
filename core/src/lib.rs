//! Per-frame geometry core for the echolocation cone demonstrator.
//!
//! Samples are classified into distance bands, tested against a steerable
//! vision cone, projected into the first-person panel and tallied per band.
//! Windowing and drawing live in the `visualizer` crate.

pub mod math;
pub mod prelude;
pub mod processing;
pub mod sensor;
pub mod telemetry;

pub use prelude::{SceneConfig, SceneError, ScreenPoint};
pub use processing::{FrameReport, Scene};
