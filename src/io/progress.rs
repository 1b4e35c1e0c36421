//! Terminal progress for long searches and configuration sweeps

use crate::io::configuration::{PROGRESS_BAR_WIDTH, SOLVE_PROGRESS_INTERVAL};
use crate::tour::sweep::SweepEntry;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SWEEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Supplies: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static STATUS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Coordinates progress display for solve and sweep runs
///
/// A sweep gets a bar over all supply configurations plus a status line
/// naming the most recent viable one; a single solve gets only the status
/// line, refreshed every few solutions.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    sweep_bar: Option<ProgressBar>,
    status: Option<ProgressBar>,
    viable: usize,
    solutions: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with nothing displayed yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            sweep_bar: None,
            status: None,
            viable: 0,
            solutions: 0,
        }
    }

    /// Show a bar over `configurations` supply configurations
    pub fn start_sweep(&mut self, configurations: usize) {
        let bar = ProgressBar::new(configurations as u64);
        bar.set_style(SWEEP_STYLE.clone());
        self.sweep_bar = Some(self.multi_progress.add(bar));
        self.start_status("viable:");
        self.viable = 0;
    }

    /// Show a spinner counting solutions of a single search
    pub fn start_solve(&mut self) {
        self.start_status("solutions:");
        self.solutions = 0;
    }

    /// Advance the sweep bar past one searched configuration
    pub fn record_configuration(&mut self, entry: &SweepEntry) {
        if let Some(ref bar) = self.sweep_bar {
            bar.inc(1);
        }
        if entry.solutions > 0 {
            self.viable += 1;
            if let Some(ref status) = self.status {
                status.set_message(format!(
                    "{} (last: {} with {} tours)",
                    self.viable, entry.supply, entry.solutions
                ));
            }
        }
    }

    /// Count one more solution of the running search
    pub fn record_solution(&mut self) {
        self.solutions += 1;
        if self.solutions % SOLVE_PROGRESS_INTERVAL != 1 {
            return;
        }
        if let Some(ref status) = self.status {
            status.set_message(self.solutions.to_string());
        }
    }

    /// Number of viable configurations seen by the current sweep
    pub const fn viable(&self) -> usize {
        self.viable
    }

    /// Number of solutions seen by the current solve
    pub const fn solutions(&self) -> usize {
        self.solutions
    }

    /// Clean up all progress displays
    pub fn finish(&mut self) {
        if let Some(bar) = self.sweep_bar.take() {
            bar.finish_with_message("done");
        }
        if let Some(status) = self.status.take() {
            status.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }

    fn start_status(&mut self, prefix: &'static str) {
        let status = ProgressBar::new_spinner();
        status.set_style(STATUS_STYLE.clone());
        status.set_prefix(prefix);
        status.set_message("0");
        status.enable_steady_tick(Duration::from_millis(120));
        self.status = Some(self.multi_progress.add(status));
    }
}
