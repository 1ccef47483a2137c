// WHY: a style profile summarizes a writing sample for later personalization
// Degenerate samples produce zeros instead of errors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::timestamp::unix_millis;
use crate::tokenizer::{avg_word_length, split_sentences};

/// Maximum number of common phrases kept in a profile
pub const MAX_COMMON_PHRASES: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    /// Mean words per sentence, rounded
    pub avg_sentence_length: u64,
    /// Mean characters per word, one decimal
    pub avg_word_length: f64,
    pub common_phrases: Vec<String>,
    /// Number of sentences in the sample
    pub sample_size: usize,
    /// Milliseconds since the Unix epoch
    pub created_at: u64,
}

/// Profile a sample, stamping it with the current time
pub fn analyze_writing_style(sample: &str) -> StyleProfile {
    analyze_writing_style_at(sample, unix_millis())
}

/// Profile a sample with an explicit timestamp
pub fn analyze_writing_style_at(sample: &str, created_at: u64) -> StyleProfile {
    let sentences = split_sentences(sample);

    let avg_sentence_length = if sentences.is_empty() {
        0
    } else {
        let words: usize = sentences.iter().map(|sentence| sentence.word_count()).sum();
        (words as f64 / sentences.len() as f64).round() as u64
    };

    let sentence_texts: Vec<&str> = sentences.iter().map(|sentence| sentence.text).collect();
    let profile = StyleProfile {
        avg_sentence_length,
        avg_word_length: (avg_word_length(sample) * 10.0).round() / 10.0,
        common_phrases: common_phrases(&sentence_texts, MAX_COMMON_PHRASES),
        sample_size: sentences.len(),
        created_at,
    };
    debug!(
        sample_size = profile.sample_size,
        phrases = profile.common_phrases.len(),
        "Style profile built"
    );
    profile
}

/// Most frequent lowercased word pairs, ties kept in first-seen order
pub fn common_phrases(sentences: &[&str], limit: usize) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for sentence in sentences {
        let lowered = sentence.to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();
        for pair in words.windows(2) {
            let phrase = pair.join(" ");
            match counts.get_mut(&phrase) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(phrase.clone(), 1);
                    order.push(phrase);
                }
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.truncate(limit);
    order
}
