//! Extractive lead summarizer for offline use
//!
//! Keeps whole leading sentences while they fit in `max_length` words. When
//! that yields fewer than `min_length` words it cuts the leading words at
//! `max_length` instead. Always deterministic.

use super::traits::{ensure_text, SummarizeOptions, Summarizer, SummarizerError};
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, Default)]
pub struct LeadSummarizer;

impl LeadSummarizer {
    pub fn new() -> Self {
        Self
    }
}

fn ends_sentence(word: &str) -> bool {
    word.trim_end_matches(['"', '\'', ')', ']'])
        .ends_with(['.', '!', '?'])
}

/// Leading sentences that fit within `max` words, as one word list.
fn leading_sentences<'a>(words: &[&'a str], max: usize) -> Vec<&'a str> {
    let mut kept = 0;
    for (i, word) in words.iter().enumerate() {
        if i >= max {
            break;
        }
        if ends_sentence(word) {
            kept = i + 1;
        }
    }
    words[..kept].to_vec()
}

fn lead_summary(text: &str, options: &SummarizeOptions) -> Result<String, SummarizerError> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() < options.min_length {
        return Err(SummarizerError::Failed(format!(
            "input has {} words, fewer than the minimum summary length of {}",
            words.len(),
            options.min_length
        )));
    }

    let mut summary = leading_sentences(&words, options.max_length);
    if summary.len() < options.min_length || summary.is_empty() {
        summary = words.iter().take(options.max_length).copied().collect();
    }
    Ok(summary.join(" "))
}

#[async_trait]
impl Summarizer for LeadSummarizer {
    async fn summarize(
        &self,
        text: &str,
        options: &SummarizeOptions,
    ) -> Result<String, SummarizerError> {
        let text = ensure_text(text)?;
        lead_summary(text, options)
    }

    fn name(&self) -> &str {
        "lead"
    }
}
