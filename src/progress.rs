//! Progress bar display for synchronization

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display over discovered jar files
pub struct ProgressDisplay {
    pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total file count
    pub fn new(total_files: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-");

        let pb = ProgressBar::new(total_files);
        pb.set_style(style);

        Self { pb }
    }

    /// Create a hidden display (dry runs, quiet contexts)
    pub fn hidden() -> Self {
        Self {
            pb: ProgressBar::hidden(),
        }
    }

    /// Update to show the jar currently being processed
    pub fn update_file(&self, file_path: &str) {
        // Truncate long paths for display, keeping the suffix. The cut
        // must land on a char boundary or slicing panics on multibyte
        // paths.
        let display_path = if file_path.len() > 50 {
            let mut start = file_path.len() - 47;
            while !file_path.is_char_boundary(start) {
                start += 1;
            }
            format!("...{}", &file_path[start..])
        } else {
            file_path.to_string()
        };
        self.pb.set_message(display_path);
    }

    /// Increment file progress
    pub fn inc(&self) {
        self.pb.inc(1);
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}
