// WHY: every analysis step needs the same sentence and word boundaries
// Centralizing them keeps grammar, tone, summary and profile numbers consistent

use serde::{Deserialize, Serialize};

/// Characters that terminate a sentence
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Borrowed sentence slice with its position in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// 0-based index among the non-empty sentences
    pub index: usize,
    /// Trimmed sentence text without its terminator
    pub text: &'a str,
}

impl<'a> Sentence<'a> {
    /// Number of whitespace-separated words in the sentence
    pub fn word_count(&self) -> usize {
        word_count(self.text)
    }
}

/// Split text on runs of `.`, `!` or `?`, trimming each piece and dropping empties
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    text.split(|c: char| SENTENCE_TERMINATORS.contains(&c))
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .enumerate()
        .map(|(index, text)| Sentence { index, text })
        .collect()
}

/// Owned copies of the sentence texts, for callers that outlive the input
pub fn sentence_texts(text: &str) -> Vec<String> {
    split_sentences(text)
        .into_iter()
        .map(|sentence| sentence.text.to_string())
        .collect()
}

/// Number of non-empty sentences
pub fn sentence_count(text: &str) -> usize {
    split_sentences(text).len()
}

/// Maximal runs of non-whitespace characters
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Word count; blank text has zero words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Non-whitespace characters divided by word count, 0.0 when there are no words
pub fn avg_word_length(text: &str) -> f64 {
    let words = word_count(text);
    if words == 0 {
        return 0.0;
    }
    let letters = text.chars().filter(|c| !c.is_whitespace()).count();
    letters as f64 / words as f64
}

/// Words per sentence across the whole text, 0.0 when there are no sentences
pub fn avg_sentence_length(text: &str) -> f64 {
    let sentences = sentence_count(text);
    if sentences == 0 {
        return 0.0;
    }
    word_count(text) as f64 / sentences as f64
}

/// Lowercase a word and strip surrounding punctuation so "Great!" matches "great"
pub fn normalize_word(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Live counters shown next to the text being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextCounts {
    pub words: usize,
    pub chars: usize,
    pub sentences: usize,
}

/// Count words, characters and sentences of the trimmed text
pub fn count_text(text: &str) -> TextCounts {
    let trimmed = text.trim();
    TextCounts {
        words: word_count(trimmed),
        chars: trimmed.chars().count(),
        sentences: sentence_count(trimmed),
    }
}
