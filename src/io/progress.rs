//! Batch progress display for multi-level conversions

use crate::io::configuration::{MIN_ITEMS_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over a batch of items
///
/// Stays hidden for batches smaller than [`MIN_ITEMS_FOR_PROGRESS`], where a
/// bar would only flash.
#[derive(Debug, Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a manager with no bar yet
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Prepare the bar for `item_count` items
    pub fn initialize(&mut self, item_count: usize) {
        self.bar = (item_count >= MIN_ITEMS_FOR_PROGRESS).then(|| {
            let bar = ProgressBar::new(item_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            bar
        });
    }

    /// True when a bar is being displayed
    pub const fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    /// Show the item currently being processed
    pub fn start_item(&self, label: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(label.to_string());
        }
    }

    /// Advance the bar by one finished item
    pub fn complete_item(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Finish and remove the bar
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/progress.rs"]
mod tests;
