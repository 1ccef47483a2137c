// WHY: long text is condensed to a short marked excerpt, short text gets fixed elaboration
// Both outputs are string constants or verbatim source, never generated prose

use serde::{Deserialize, Serialize};

use crate::tokenizer::{split_sentences, word_count};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpansionMode {
    Expand,
    Condense,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionResult {
    pub mode: ExpansionMode,
    pub result: String,
}

/// Line prefix used for condensed sentences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CondenseMarker {
    /// "1. ", "2. ", ...
    #[default]
    Numbered,
    /// "• "
    Bullet,
}

pub const TOOLBAR_ELABORATION: &str =
    " Furthermore, this concept provides valuable insights that enhance our understanding.";

pub const SIDE_PANEL_ELABORATION: &str = " Furthermore, this concept is particularly significant as it demonstrates fundamental principles that are essential to understanding the broader context. By examining these elements more closely, we can gain valuable insights that enhance our comprehension of the subject matter.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ExpansionPolicy {
    /// Texts with more words than this are condensed
    pub word_threshold: usize,
    /// Leading sentences kept when condensing
    pub condense_sentences: usize,
    pub marker: CondenseMarker,
    /// Appended verbatim when expanding
    pub elaboration: String,
}

impl Default for ExpansionPolicy {
    fn default() -> Self {
        Self {
            word_threshold: 50,
            condense_sentences: 3,
            marker: CondenseMarker::Numbered,
            elaboration: TOOLBAR_ELABORATION.to_string(),
        }
    }
}

impl ExpansionPolicy {
    pub fn side_panel() -> Self {
        Self {
            word_threshold: 50,
            condense_sentences: 5,
            marker: CondenseMarker::Bullet,
            elaboration: SIDE_PANEL_ELABORATION.to_string(),
        }
    }
}

pub struct ExpanderCondenser {
    policy: ExpansionPolicy,
}

impl ExpanderCondenser {
    pub fn new(policy: ExpansionPolicy) -> Self {
        Self { policy }
    }

    pub fn expand_or_condense(&self, text: &str) -> ExpansionResult {
        if word_count(text) > self.policy.word_threshold {
            ExpansionResult {
                mode: ExpansionMode::Condense,
                result: self.condense(text),
            }
        } else {
            ExpansionResult {
                mode: ExpansionMode::Expand,
                result: format!("{text}{}", self.policy.elaboration),
            }
        }
    }

    fn condense(&self, text: &str) -> String {
        split_sentences(text)
            .iter()
            .take(self.policy.condense_sentences)
            .map(|sentence| match self.policy.marker {
                CondenseMarker::Numbered => format!("{}. {}", sentence.index + 1, sentence.text),
                CondenseMarker::Bullet => format!("• {}", sentence.text),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
