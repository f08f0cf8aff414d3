use crate::workflow::runner::FrameSummary;
use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends one JSON line per frame to a report file.
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn append(&self, frames: &[FrameSummary]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating report dir {}", parent.display()))?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening report {}", self.path.display()))?;

        for frame in frames {
            let line = serde_json::to_string(frame).context("encoding frame summary")?;
            writeln!(file, "{}", line)
                .with_context(|| format!("writing report {}", self.path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::config::WorkflowConfig;
    use crate::workflow::runner::Runner;

    #[test]
    fn report_appends_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/frames.jsonl");
        let result = Runner::new(WorkflowConfig::from_args(3, 10, Some(4)))
            .execute()
            .unwrap();

        let writer = ReportWriter::new(&path);
        writer.append(&result.frames).unwrap();
        writer.append(&result.frames).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 6);
        let first: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        assert_eq!(first["frame"], 0);
    }
}
