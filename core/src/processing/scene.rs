use crate::prelude::{SceneConfig, SceneResult, ScreenPoint};
use crate::processing::aggregator::{FrameAggregator, FrameReport};
use crate::processing::cone::VisionCone;
use crate::processing::radar::RadarProjector;
use crate::sensor::sample::SampleSet;
use crate::telemetry::log::LogManager;
use crate::telemetry::metrics::MetricsRecorder;

/// Frame-loop context: the immutable sample set plus the one piece of state
/// carried between frames, the cone heading.
pub struct Scene {
    config: SceneConfig,
    samples: SampleSet,
    cone: VisionCone,
    aggregator: FrameAggregator,
    radar: RadarProjector,
    metrics: MetricsRecorder,
    logger: LogManager,
}

impl Scene {
    pub fn new(config: SceneConfig, samples: SampleSet) -> SceneResult<Self> {
        config.validate()?;
        let logger = LogManager::new();
        logger.record(&format!(
            "scene ready: {} samples, cone length {:.0}",
            samples.len(),
            config.cone_length()
        ));
        Ok(Self {
            cone: VisionCone::from_scene(&config),
            aggregator: FrameAggregator::from_scene(&config),
            radar: RadarProjector::from_scene(&config),
            metrics: MetricsRecorder::new(),
            logger,
            config,
            samples,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn cone(&self) -> &VisionCone {
        &self.cone
    }

    pub fn aggregator(&self) -> &FrameAggregator {
        &self.aggregator
    }

    pub fn radar(&self) -> &RadarProjector {
        &self.radar
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    /// One tick: steer the cone from the latest pointer, then run the frame pass.
    pub fn tick(&mut self, pointer: Option<ScreenPoint>) -> FrameReport {
        if let Some(pointer) = pointer {
            if self
                .cone
                .update_orientation(pointer, &self.config.input_region())
            {
                self.logger.trace(format_args!(
                    "pointer ({:.0}, {:.0}) -> heading {:.3}",
                    pointer.x,
                    pointer.y,
                    self.cone.orientation()
                ));
            }
        }

        let report = self.aggregator.execute(&self.cone, &self.samples);
        self.metrics
            .record_frame(report.silhouettes.total(), report.excluded);
        report
    }
}
