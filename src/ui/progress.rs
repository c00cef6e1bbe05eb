//! Progress bar utilities

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for `len` items with the given message.
///
/// Returns `None` if quiet mode is enabled.
pub fn create_progress_bar(len: u64, message: &str, quiet: bool) -> Option<ProgressBar> {
    if quiet {
        return None;
    }
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap()
            .progress_chars("=> "),
    );
    bar.set_message(message.to_string());
    Some(bar)
}

/// Finish the progress bar with a message
pub fn finish_progress_bar(bar: Option<ProgressBar>, message: &str) {
    if let Some(b) = bar {
        b.finish_with_message(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_progress_bar_quiet_mode() {
        assert!(create_progress_bar(10, "test", true).is_none());
    }

    #[test]
    fn test_create_progress_bar_has_length() {
        let bar = create_progress_bar(7, "test", false).unwrap();
        assert_eq!(bar.length(), Some(7));
        bar.finish_and_clear();
    }

    #[test]
    fn test_finish_progress_bar_none() {
        // Should not panic
        finish_progress_bar(None, "Done");
    }
}
