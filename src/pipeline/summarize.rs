// WHY: extractive summaries only ever reuse source sentences verbatim
// Brief and detailed selection policies are configurable because surfaces differed

use serde::{Deserialize, Serialize};

use crate::tokenizer::{normalize_word, split_sentences, Sentence};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub brief: String,
    pub detailed: String,
    pub key_points: Vec<String>,
}

/// Sentences used for the brief summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BriefPolicy {
    #[default]
    FirstSentence,
    FirstAndLast,
}

/// Sentences used for the detailed summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetailPolicy {
    /// First, middle (`floor(n/2)`) and last sentence
    #[default]
    FirstMidLast,
    /// The first `max(2, ceil(n/3))` sentences
    FirstThird,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SummaryPolicy {
    pub brief: BriefPolicy,
    pub detail: DetailPolicy,
    pub max_key_points: usize,
}

impl Default for SummaryPolicy {
    fn default() -> Self {
        Self {
            brief: BriefPolicy::FirstSentence,
            detail: DetailPolicy::FirstMidLast,
            max_key_points: 3,
        }
    }
}

/// Words that mark a sentence as a key point
pub const IMPORTANCE_WORDS: &[&str] = &[
    "important", "key", "main", "essential", "critical",
    "significant", "must", "need", "should",
];

pub struct Summarizer {
    policy: SummaryPolicy,
}

impl Summarizer {
    pub fn new(policy: SummaryPolicy) -> Self {
        Self { policy }
    }

    pub fn summarize(&self, text: &str) -> SummaryResult {
        let sentences = split_sentences(text);

        // Short documents are returned verbatim; text without sentences has no key points
        if sentences.len() <= 2 {
            let key_points = if sentences.is_empty() {
                Vec::new()
            } else {
                vec![text.to_string()]
            };
            return SummaryResult {
                brief: text.to_string(),
                detailed: text.to_string(),
                key_points,
            };
        }

        let n = sentences.len();
        let first = &sentences[0];
        let last = &sentences[n - 1];

        let brief = match self.policy.brief {
            BriefPolicy::FirstSentence => join_sentences(&[first]),
            BriefPolicy::FirstAndLast => join_sentences(&[first, last]),
        };

        let detailed = match self.policy.detail {
            DetailPolicy::FirstMidLast => join_sentences(&[first, &sentences[n / 2], last]),
            DetailPolicy::FirstThird => {
                let count = n.div_ceil(3).max(2);
                let leading: Vec<&Sentence<'_>> = sentences.iter().take(count).collect();
                join_sentences(&leading)
            }
        };

        SummaryResult {
            brief,
            detailed,
            key_points: self.key_points(&sentences),
        }
    }

    /// Sentences containing an importance word, falling back to the opening sentences
    fn key_points(&self, sentences: &[Sentence<'_>]) -> Vec<String> {
        let cap = self.policy.max_key_points;
        let flagged: Vec<String> = sentences
            .iter()
            .filter(|sentence| is_key_sentence(sentence.text))
            .take(cap)
            .map(|sentence| sentence.text.to_string())
            .collect();

        if !flagged.is_empty() {
            return flagged;
        }
        sentences
            .iter()
            .take(cap)
            .map(|sentence| sentence.text.to_string())
            .collect()
    }
}

fn is_key_sentence(sentence: &str) -> bool {
    sentence
        .split_whitespace()
        .map(normalize_word)
        .any(|word| IMPORTANCE_WORDS.contains(&word.as_str()))
}

/// "A. B. C." from trimmed sentences
fn join_sentences(sentences: &[&Sentence<'_>]) -> String {
    let texts: Vec<&str> = sentences.iter().map(|sentence| sentence.text).collect();
    format!("{}.", texts.join(". "))
}
