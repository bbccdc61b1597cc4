//! Progress display for batch level generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let bar = format!("{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}");
    let template = format!("[{{elapsed_precise}}] Levels: [{bar}] {{pos}}/{{len}} {{msg}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Coordinates a batch bar and a per-level stage line
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    stage_bar: Option<ProgressBar>,
    level_count: usize,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bars yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            stage_bar: None,
            level_count: 0,
            completed: 0,
        }
    }

    /// Create the bars for a batch of `level_count` levels
    pub fn initialize(&mut self, level_count: usize) {
        self.level_count = level_count;
        self.completed = 0;

        let batch_bar = ProgressBar::new(level_count as u64);
        batch_bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(self.multi_progress.add(batch_bar));

        let stage_bar = ProgressBar::new_spinner();
        stage_bar.set_style(STAGE_STYLE.clone());
        self.stage_bar = Some(self.multi_progress.add(stage_bar));
    }

    /// Announce the level being generated
    pub fn start_level(&self, seed: u64) {
        if let Some(ref stage_bar) = self.stage_bar {
            stage_bar.set_prefix(format!("seed {seed}"));
            stage_bar.set_message("generating");
            stage_bar.tick();
        }
    }

    /// Describe the current stage of the active level
    pub fn set_stage(&self, stage: &'static str) {
        if let Some(ref stage_bar) = self.stage_bar {
            stage_bar.set_message(stage);
            stage_bar.tick();
        }
    }

    /// Mark the active level as written
    pub fn complete_level(&mut self, elapsed: Duration) {
        self.completed += 1;
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
            batch_bar.set_message(format!("last {elapsed:.0?}"));
        }
    }

    /// Levels completed so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Levels in the batch
    pub const fn level_count(&self) -> usize {
        self.level_count
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref stage_bar) = self.stage_bar {
            stage_bar.finish_and_clear();
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("all levels written");
        }
        let _ = self.multi_progress.clear();
    }
}
