//! Frame rendering progress display

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static RENDER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the frames of a single animation run
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar expecting `frame_count` frames
    pub fn new(frame_count: usize) -> Self {
        let bar = ProgressBar::new(frame_count as u64);
        bar.set_style(RENDER_STYLE.clone());
        bar.set_message("Rendering");
        Self { bar }
    }

    /// Record one completed frame
    pub fn frame_done(&self) {
        self.bar.inc(1);
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_with_message("Rendered");
    }
}
