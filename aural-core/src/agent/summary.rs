//! Summaries of prior task results
//!
//! When an agent renders its context, each earlier completed task is reduced
//! to a summary. The policy is pluggable; the default keeps a prefix.

use super::task::Task;

/// Default number of characters kept from a prior result.
pub const DEFAULT_SUMMARY_CHARS: usize = 500;

/// Policy for condensing a prior task's result into context text
pub trait ContextSummarizer: Send + Sync {
    /// Summarize `task`, whose result is `result`
    fn summarize(&self, task: &Task, result: &str) -> String;
}

/// Keeps the first `max_chars` characters of a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncatingSummarizer {
    pub max_chars: usize,
}

impl TruncatingSummarizer {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }
}

impl Default for TruncatingSummarizer {
    fn default() -> Self {
        Self::new(DEFAULT_SUMMARY_CHARS)
    }
}

impl ContextSummarizer for TruncatingSummarizer {
    fn summarize(&self, _task: &Task, result: &str) -> String {
        truncate_chars(result, self.max_chars)
    }
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exact", 5), "exact");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        assert_eq!(truncate_chars("abcdefghij", 4), "abcd...");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "é".repeat(10);
        let cut = truncate_chars(&text, 3);
        assert_eq!(cut, "ééé...");
    }

    #[test]
    fn default_summarizer_keeps_500_chars() {
        let task = Task::new("orchestrator", "Plan");
        let result = "x".repeat(800);

        let summary = TruncatingSummarizer::default().summarize(&task, &result);

        assert_eq!(summary.len(), 503);
        assert!(summary.ends_with("..."));
    }
}
