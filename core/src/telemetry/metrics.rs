use serde::Serialize;
use std::sync::Mutex;

pub struct MetricsRecorder {
    inner: Mutex<FrameMetrics>,
}

/// Running totals across frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrameMetrics {
    pub frames: usize,
    pub in_cone: usize,
    pub excluded: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(FrameMetrics::default()),
        }
    }

    pub fn record_frame(&self, in_cone: usize, excluded: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.frames += 1;
            metrics.in_cone += in_cone;
            metrics.excluded += excluded;
        }
    }

    pub fn snapshot(&self) -> FrameMetrics {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            FrameMetrics::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_accumulate() {
        let recorder = MetricsRecorder::new();
        recorder.record_frame(2, 0);
        recorder.record_frame(1, 1);
        assert_eq!(
            recorder.snapshot(),
            FrameMetrics {
                frames: 2,
                in_cone: 3,
                excluded: 1,
            }
        );
    }
}
