use crate::prelude::{SceneConfig, BAND_COUNT};
use crate::processing::classifier::{ColorId, DistanceBands};
use crate::processing::cone::{ConeResult, Side, VisionCone};
use crate::processing::projection::{ProjectedPoint, Projector};
use crate::sensor::sample::{Sample, SampleSet};
use crate::telemetry::log::LogManager;
use serde::{Deserialize, Serialize};

/// Per-band tally, zero-initialised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCounts {
    counts: [usize; BAND_COUNT],
}

impl ColorCounts {
    pub fn get(&self, color: ColorId) -> usize {
        self.counts[color.index()]
    }

    pub fn increment(&mut self, color: ColorId) {
        self.counts[color.index()] += 1;
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Bands with a non-zero count, nearest first.
    pub fn non_zero(&self) -> impl Iterator<Item = (ColorId, usize)> + '_ {
        ColorId::ALL
            .into_iter()
            .map(|color| (color, self.get(color)))
            .filter(|&(_, count)| count > 0)
    }

    pub fn merge(&mut self, other: &ColorCounts) {
        for (slot, value) in self.counts.iter_mut().zip(other.counts) {
            *slot += value;
        }
    }
}

/// Everything the frame pass decided about one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleDecision {
    pub sample: Sample,
    pub color: ColorId,
    pub in_map_view: bool,
    /// False when the outer-radius gate culled the sample from every count.
    pub counted: bool,
    pub cone: ConeResult,
    pub side: Option<Side>,
    pub projected: Option<ProjectedPoint>,
}

/// Tallies of one frame; rebuilt from scratch every tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub map_points: ColorCounts,
    pub silhouettes: ColorCounts,
    pub left_exits: ColorCounts,
    pub right_exits: ColorCounts,
    pub excluded: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decisions: Vec<SampleDecision>,
}

impl FrameReport {
    pub fn fold(&mut self, decision: SampleDecision) {
        if decision.counted {
            if decision.in_map_view {
                self.map_points.increment(decision.color);
            }
            if decision.cone.is_inside() {
                self.silhouettes.increment(decision.color);
            }
            match decision.side {
                Some(Side::Left) => self.left_exits.increment(decision.color),
                Some(Side::Right) => self.right_exits.increment(decision.color),
                None => {}
            }
        } else {
            self.excluded += 1;
        }
        self.decisions.push(decision);
    }

    /// Associative merge; partial reports combine in any grouping.
    pub fn merge(&mut self, other: FrameReport) {
        self.map_points.merge(&other.map_points);
        self.silhouettes.merge(&other.silhouettes);
        self.left_exits.merge(&other.left_exits);
        self.right_exits.merge(&other.right_exits);
        self.excluded += other.excluded;
        self.decisions.extend(other.decisions);
    }

    /// Samples accounted for by the cone outcome tables plus the culled ones.
    pub fn accounted(&self) -> usize {
        self.silhouettes.total() + self.left_exits.total() + self.right_exits.total() + self.excluded
    }

    pub fn projected_silhouettes(&self) -> impl Iterator<Item = (ColorId, ProjectedPoint)> + '_ {
        self.decisions
            .iter()
            .filter_map(|decision| decision.projected.map(|p| (decision.color, p)))
    }
}

/// Single pass over the sample set for the current cone heading.
pub struct FrameAggregator {
    bands: DistanceBands,
    projector: Projector,
    map_view_width: f32,
    logger: LogManager,
}

impl FrameAggregator {
    pub fn new(bands: DistanceBands, projector: Projector, map_view_width: f32) -> Self {
        Self {
            bands,
            projector,
            map_view_width,
            logger: LogManager::new(),
        }
    }

    pub fn from_scene(config: &SceneConfig) -> Self {
        Self::new(
            DistanceBands::from_scene(config),
            Projector::from_scene(config),
            config.map_view_width(),
        )
    }

    pub fn bands(&self) -> &DistanceBands {
        &self.bands
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn decide(&self, cone: &VisionCone, sample: &Sample) -> SampleDecision {
        let color = self.bands.classify(sample.depth());
        let counted = self.bands.passes_radius_gate(color, sample.depth());
        let cone_result = cone.test_membership(sample.position());
        let side = match cone_result {
            ConeResult::Outside if counted => Some(cone.side_of(sample.position())),
            _ => None,
        };
        let projected = match cone_result {
            ConeResult::Inside { relative_angle } if counted => {
                Some(self.projector.project_silhouette(relative_angle, color))
            }
            _ => None,
        };

        self.logger.trace(format_args!(
            "sample ({:.1}, {:.1}) depth {:.1} -> {} {:?}",
            sample.x(),
            sample.y(),
            sample.depth(),
            color.name(),
            cone_result
        ));

        SampleDecision {
            sample: *sample,
            color,
            in_map_view: sample.x() < self.map_view_width,
            counted,
            cone: cone_result,
            side,
            projected,
        }
    }

    pub fn execute(&self, cone: &VisionCone, samples: &SampleSet) -> FrameReport {
        let report = self.execute_slice(cone, samples.as_slice());
        self.logger.debug(format_args!(
            "frame heading {:.3}: {} in cone, {} left, {} right, {} culled",
            cone.orientation(),
            report.silhouettes.total(),
            report.left_exits.total(),
            report.right_exits.total(),
            report.excluded
        ));
        report
    }

    /// Aggregates `chunk_size`-sized partitions independently and merges them.
    pub fn execute_partitioned(
        &self,
        cone: &VisionCone,
        samples: &SampleSet,
        chunk_size: usize,
    ) -> FrameReport {
        samples
            .as_slice()
            .chunks(chunk_size.max(1))
            .map(|chunk| self.execute_slice(cone, chunk))
            .fold(FrameReport::default(), |mut acc, partial| {
                acc.merge(partial);
                acc
            })
    }

    fn execute_slice(&self, cone: &VisionCone, samples: &[Sample]) -> FrameReport {
        let mut report = FrameReport::default();
        for sample in samples {
            report.fold(self.decide(cone, sample));
        }
        report
    }
}
