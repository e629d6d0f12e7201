//! Stage progress reporting for long-running pipeline phases

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:>17} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Reporting capability handed to every pipeline stage
///
/// `begin` and `finish` bracket one stage and need exclusive access;
/// `advance` may be called from worker threads while a stage runs, so
/// it takes a shared receiver and implementations must be `Sync`.
pub trait ProgressReporter: Sync {
    /// Start a stage with a label and a known amount of work
    fn begin(&mut self, label: &str, total: u64);

    /// Record completed work units within the current stage
    fn advance(&self, delta: u64);

    /// Close the current stage
    fn finish(&mut self);
}

/// Draws one terminal progress bar per stage
#[derive(Debug)]
pub struct ConsoleProgress {
    active: Option<ProgressBar>,
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleProgress {
    /// Create a reporter with no active stage
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }
}

impl ProgressReporter for ConsoleProgress {
    fn begin(&mut self, label: &str, total: u64) {
        if let Some(previous) = self.active.take() {
            previous.finish_and_clear();
        }
        let bar = ProgressBar::new(total);
        bar.set_style(STAGE_STYLE.clone());
        bar.set_message(label.to_string());
        self.active = Some(bar);
    }

    fn advance(&self, delta: u64) {
        if let Some(ref bar) = self.active {
            bar.inc(delta);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.active.take() {
            bar.finish_and_clear();
        }
    }
}

/// Ignores all progress, for quiet mode and library embedding
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn begin(&mut self, _label: &str, _total: u64) {}

    fn advance(&self, _delta: u64) {}

    fn finish(&mut self) {}
}
