pub mod aggregator;
pub mod classifier;
pub mod cone;
pub mod projection;
pub mod radar;
pub mod scene;

pub use aggregator::{ColorCounts, FrameAggregator, FrameReport, SampleDecision};
pub use classifier::{ColorId, DistanceBands};
pub use cone::{ConeResult, Side, VisionCone};
pub use projection::{ProjectedPoint, Projector};
pub use radar::{RadarBlip, RadarProjector};
pub use scene::Scene;
