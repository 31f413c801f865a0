//! Progress reporting for the comparison phase

use anyhow::Result;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use super::config::{COMPARING_MESSAGE, PROGRESS_TEMPLATE};

/// Receives a `(completed, total)` signal after every repository finishes
///
/// Called while the result collector's lock is held, so implementations must
/// be quick and must not call back into the collector.
pub trait ProgressReporter: Send + Sync {
    fn on_progress(&self, completed: usize, total: usize);

    /// Called once after the last repository completed
    fn finish(&self) {}
}

/// Discards progress; used for JSON output and in tests
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn on_progress(&self, _completed: usize, _total: usize) {}
}

/// Renders progress as a single `Comparing repos... (N/total)` line
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new(total: usize) -> Result<Self> {
        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
        bar.set_style(create_progress_style()?);
        bar.set_prefix(COMPARING_MESSAGE);
        Ok(Self { bar })
    }
}

impl ProgressReporter for BarProgress {
    fn on_progress(&self, completed: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(completed as u64);
    }

    fn finish(&self) {
        self.bar.finish();
    }
}

/// Creates a progress bar style configuration
/// Returns a ProgressStyle configured with the application's visual styling
pub(crate) fn create_progress_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::default_bar().template(PROGRESS_TEMPLATE)?)
}
