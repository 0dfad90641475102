use crate::ui;
use std::time::{Duration, Instant};

/// A simple progress tracker for CLI operations
pub struct ProgressTracker {
    operation_name: String,
    start_time: Instant,
    steps: Vec<String>,
    current_step: usize,
}

impl ProgressTracker {
    /// Create a new progress tracker with the given operation name
    pub fn new(operation_name: &str) -> Self {
        ui::section_header(operation_name);
        Self {
            operation_name: operation_name.to_string(),
            start_time: Instant::now(),
            steps: Vec::new(),
            current_step: 0,
        }
    }

    pub fn with_steps(mut self, steps: &[&str]) -> Self {
        self.steps = steps.iter().map(ToString::to_string).collect();
        self
    }

    pub fn start_step(&self) {
        if let Some(step) = self.steps.get(self.current_step) {
            ui::status_message(step);
        }
    }

    pub fn complete_step(&mut self) {
        if let Some(step) = self.steps.get(self.current_step) {
            ui::success_message(step);
            self.current_step += 1;
        }
    }

    /// Complete the current step with a note on what it found
    pub fn complete_step_with(&mut self, detail: &str) {
        if let Some(step) = self.steps.get(self.current_step) {
            ui::success_message(&format!("{step} ({detail})"));
            self.current_step += 1;
        }
    }

    /// Complete the operation
    pub fn complete(&self) {
        let elapsed = self.start_time.elapsed();
        ui::success_message(&format!(
            "{} completed in {}",
            self.operation_name,
            Self::format_duration(elapsed)
        ));
    }

    fn format_duration(duration: Duration) -> String {
        let millis = duration.as_millis();
        if millis < 1000 {
            format!("{millis} ms")
        } else {
            format!("{:.1} seconds", duration.as_secs_f64())
        }
    }
}
