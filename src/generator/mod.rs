//! Change summary generation
//!
//! The composer only sees the [SummaryGenerator] trait. [gemini::GeminiClient]
//! talks to the hosted model; tests supply their own implementations.

pub mod gemini;

pub use gemini::GeminiClient;

use crate::error::Result;

/// Turns a diff into a markdown change summary
pub trait SummaryGenerator {
    /// Produce a non-empty markdown summary for `diff`.
    ///
    /// The request is attempted once; any failure is returned as
    /// [crate::error::ChangelogError::Generation].
    fn summarize(&self, diff: &str) -> Result<String>;
}

/// Build the fixed instruction sent with every diff.
pub fn build_prompt(diff: &str) -> String {
    format!(
        "You are an AI changelog generator.\n\
         Analyze the following git diff and summarize the changes for developers.\n\
         Use sections (Features, Bug Fixes, Refactors, Performance, Chores).\n\
         Be concise, technical, and clear. Avoid marketing language.\n\
         Write in plain markdown with short bullet points.\n\
         \n\
         Diff:\n\
         {}\n",
        diff
    )
}
