//! Batch progress display: one bar for images, one for the rings of the current image

use crate::algorithm::observer::{LayerEvent, LayerObserver};
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static LAYER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos:>2}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Images: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for a batch of generated images
///
/// The layer bar is driven by [`LayerObserver`] events, so the manager can be
/// handed straight to the compositor.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    layer_bar: Option<ProgressBar>,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bars yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            layer_bar: None,
            completed: 0,
        }
    }

    /// Create the batch and layer bars for `image_count` images
    pub fn initialize(&mut self, image_count: usize) {
        self.completed = 0;

        let batch_bar = ProgressBar::new(image_count as u64);
        batch_bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(self.multi_progress.add(batch_bar));

        let layer_bar = ProgressBar::new(0);
        layer_bar.set_style(LAYER_STYLE.clone());
        self.layer_bar = Some(self.multi_progress.add(layer_bar));
    }

    /// Point the layer bar at a new output file
    pub fn start_image(&self, path: &Path) {
        if let Some(ref bar) = self.layer_bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_prefix(display_name);
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
        }
    }

    /// Count one more finished image
    pub fn complete_image(&mut self) {
        self.completed += 1;
        if let Some(ref bar) = self.batch_bar {
            bar.inc(1);
        }
    }

    /// Number of images reported complete since [`ProgressManager::initialize`]
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref bar) = self.layer_bar {
            bar.finish_and_clear();
        }
        if let Some(ref bar) = self.batch_bar {
            bar.finish_with_message("All images generated");
        }
        let _ = self.multi_progress.clear();
    }
}

impl LayerObserver for ProgressManager {
    fn composition_started(&mut self, n_layers: usize, _base_radius: f64) {
        if let Some(ref bar) = self.layer_bar {
            bar.set_length(n_layers as u64);
            bar.set_position(0);
        }
    }

    fn layer_selected(&mut self, event: &LayerEvent) {
        if let Some(ref bar) = self.layer_bar {
            bar.set_position((event.index + 1) as u64);
            bar.set_message(event.choice.to_string());
        }
    }
}
