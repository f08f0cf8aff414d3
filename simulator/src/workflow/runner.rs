use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use echocore::processing::{ColorCounts, FrameReport, Scene};
use echocore::sensor::generate_samples;
use echocore::telemetry::FrameMetrics;
use log::info;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-frame tallies keyed by band name, ready for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct FrameSummary {
    pub frame: usize,
    pub heading_deg: f32,
    pub map_points: BTreeMap<&'static str, usize>,
    pub silhouettes: BTreeMap<&'static str, usize>,
    pub left_exits: BTreeMap<&'static str, usize>,
    pub right_exits: BTreeMap<&'static str, usize>,
    pub excluded: usize,
}

impl FrameSummary {
    fn from_report(frame: usize, heading: f32, report: &FrameReport) -> Self {
        let by_name = |counts: &ColorCounts| -> BTreeMap<&'static str, usize> {
            counts
                .non_zero()
                .map(|(color, count)| (color.name(), count))
                .collect()
        };
        Self {
            frame,
            heading_deg: heading.to_degrees(),
            map_points: by_name(&report.map_points),
            silhouettes: by_name(&report.silhouettes),
            left_exits: by_name(&report.left_exits),
            right_exits: by_name(&report.right_exits),
            excluded: report.excluded,
        }
    }
}

#[derive(Debug)]
pub struct WorkflowResult {
    pub sample_count: usize,
    pub frames: Vec<FrameSummary>,
    pub metrics: FrameMetrics,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        self.config.scene.validate().context("building scene")?;
        let samples = generate_samples(&self.config.generator, &self.config.scene);
        let sample_count = samples.len();
        let mut scene =
            Scene::new(self.config.scene.clone(), samples).context("building scene")?;

        let mut frames = Vec::with_capacity(self.config.frames);
        for frame in 0..self.config.frames {
            let pointer = self.config.pointer.pointer_at(frame, &self.config.scene);
            let report = scene.tick(pointer);
            frames.push(FrameSummary::from_report(
                frame,
                scene.cone().orientation(),
                &report,
            ));
        }

        let metrics = scene.metrics().snapshot();
        info!(
            "workflow finished: {} frames over {} samples, {} in-cone hits",
            metrics.frames, sample_count, metrics.in_cone
        );

        Ok(WorkflowResult {
            sample_count,
            frames,
            metrics,
        })
    }
}
