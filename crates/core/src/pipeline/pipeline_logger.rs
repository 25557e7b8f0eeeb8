use std::time::Instant;

/// Cross-cutting logger for extraction stage events.
///
/// Decouples the use case from specific output mechanisms so the CLI can
/// print a timing report while tests and library callers stay silent.
pub trait PipelineLogger: Send {
    /// Record how long a named stage took.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// CLI-oriented logger that forwards messages to the `log` crate and
/// reports per-stage timings when the run finishes.
pub struct StageTimingLogger {
    timings: Vec<(String, f64)>,
    start_time: Instant,
}

impl StageTimingLogger {
    pub fn new() -> Self {
        Self {
            timings: Vec::new(),
            start_time: Instant::now(),
        }
    }

    /// Returns the formatted summary string, or `None` if no stage ran.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = Vec::with_capacity(self.timings.len() + 1);
        lines.push(format!("Run summary ({:.1}s total):", elapsed_ms / 1000.0));

        for (stage, ms) in &self.timings {
            let pct = if elapsed_ms > 0.0 {
                ms / elapsed_ms * 100.0
            } else {
                0.0
            };
            lines.push(format!("  {stage:10}: {ms:8.0}ms  ({pct:4.1}%)"));
        }

        Some(lines.join("\n"))
    }

    /// Total time recorded for `stage`, if it ran.
    pub fn timing_for(&self, stage: &str) -> Option<f64> {
        let mut matched = self.timings.iter().filter(|(s, _)| s == stage).peekable();
        matched.peek()?;
        Some(matched.map(|(_, ms)| ms).sum())
    }
}

impl Default for StageTimingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineLogger for StageTimingLogger {
    fn timing(&mut self, stage: &str, duration_ms: f64) {
        self.timings.push((stage.to_string(), duration_ms));
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("{text}");
        }
    }
}
