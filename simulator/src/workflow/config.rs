use crate::generator::pointer::PointerScript;
use anyhow::Context;
use echocore::prelude::SceneConfig;
use echocore::sensor::GeneratorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub scene: SceneConfig,
    pub generator: GeneratorConfig,
    pub frames: usize,
    pub pointer: PointerScript,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            scene: SceneConfig::default(),
            generator: GeneratorConfig::default(),
            frames: 90,
            pointer: PointerScript::default(),
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        config
            .scene
            .validate()
            .with_context(|| format!("validating scene in {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(frames: usize, samples: usize, seed: Option<u64>) -> Self {
        Self {
            frames,
            generator: GeneratorConfig {
                count: samples,
                seed,
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_overrides_generator() {
        let cfg = WorkflowConfig::from_args(30, 25, Some(9));
        assert_eq!(cfg.frames, 30);
        assert_eq!(cfg.generator.count, 25);
        assert_eq!(cfg.generator.seed, Some(9));
        assert_eq!(cfg.scene, SceneConfig::default());
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"frames: 12\ngenerator:\n  count: 40\n  seed: 5\npointer:\n  kind: fixed\n  x: 200\n  y: 100\nscene:\n  viewer_distance: 250\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.frames, 12);
        assert_eq!(cfg.generator.count, 40);
        assert_eq!(cfg.pointer, PointerScript::Fixed { x: 200.0, y: 100.0 });
        assert_eq!(cfg.scene.viewer_distance, 250.0);
        assert_eq!(cfg.scene.display_scale, 1.7);
    }

    #[test]
    fn config_load_rejects_descending_thresholds() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"scene:\n  distances: [20, 40, 30, 80, 100]\n")
            .unwrap();
        let path = temp.into_temp_path();
        let err = WorkflowConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("must exceed"));
    }
}
