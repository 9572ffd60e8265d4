//! Whitespace tokenization and keyword ranking

use super::types::KeywordRank;
use std::collections::HashMap;

/// Tokens excluded from keyword counts (matched after lower-casing)
pub const STOP_WORDS: [&str; 13] = [
    "the", "is", "a", "an", "and", "to", "of", "in", "for", "with", "on", "this", "that",
];

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Number of whitespace-delimited, non-empty tokens
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Rank lower-cased, non-stop-word tokens across `texts` by frequency.
///
/// Ties keep the order in which terms first appear in the token stream.
/// Returns at most `limit` entries.
pub fn rank_keywords<'a>(texts: impl IntoIterator<Item = &'a str>, limit: usize) -> Vec<KeywordRank> {
    // Insertion order doubles as first-occurrence order.
    let mut ranks: Vec<KeywordRank> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for text in texts {
        let lowered = text.to_lowercase();
        for token in lowered.split_whitespace() {
            if is_stop_word(token) {
                continue;
            }
            match index.get(token) {
                Some(&i) => ranks[i].count += 1,
                None => {
                    index.insert(token.to_string(), ranks.len());
                    ranks.push(KeywordRank::new(token, 1));
                }
            }
        }
    }

    // Stable sort: equal counts stay in first-occurrence order
    ranks.sort_by(|a, b| b.count.cmp(&a.count));
    ranks.truncate(limit);
    ranks
}
