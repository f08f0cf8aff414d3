use crate::prelude::SceneConfig;
use crate::sensor::sample::{Sample, SampleSet};
use crate::telemetry::log::LogManager;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Parameters of the one-off sample seeding done at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of draws; draws landing outside the outer ring are dropped.
    pub count: usize,
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 10,
            seed: None,
        }
    }
}

/// Draws samples uniformly from the square around the outer ring and keeps
/// those inside it, so the set may hold fewer than `config.count` samples.
/// A scene without a positive, finite outer radius yields an empty set.
pub fn generate_samples(config: &GeneratorConfig, scene: &SceneConfig) -> SampleSet {
    let logger = LogManager::new();
    let origin = scene.map_origin();
    let radius = scene.outer_radius();
    if !(radius.is_finite() && radius > 0.0) || !(origin.x.is_finite() && origin.y.is_finite()) {
        logger.record(&format!("no samples generated: outer radius {radius}"));
        return SampleSet::empty();
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let set: SampleSet = (0..config.count)
        .map(|_| {
            let x = rng.gen_range(origin.x - radius..=origin.x + radius);
            let y = rng.gen_range(origin.y - radius..=origin.y + radius);
            Sample::measured_from(origin, x, y)
        })
        .filter(|sample| sample.depth() <= radius)
        .collect();

    logger.debug(format_args!(
        "generated {} of {} requested samples (radius {:.1})",
        set.len(),
        config.count,
        radius
    ));
    set
}
