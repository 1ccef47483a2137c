// WHY: rephrasing is three independent lexical rewrites of the same input
// Tables are ordered so no rule's output is an input recognized by a later rule

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use super::substitution::SubstitutionTable;
use crate::tokenizer::split_sentences;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RephraseResult {
    pub formal: String,
    pub simple: String,
    pub creative: String,
}

/// How the "simple" variant is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimplePhrasing {
    /// Replace elevated vocabulary with plain words
    #[default]
    Substitution,
    /// Keep only the first `max_words` words of every sentence
    Truncate { max_words: usize },
}

pub const FORMAL_RULES: &[(&str, &str)] = &[
    ("get", "obtain"),
    ("got", "obtained"),
    ("very", "extremely"),
    ("really", "genuinely"),
    ("kinda", "somewhat"),
    ("a lot of", "numerous"),
    ("thing", "matter"),
    ("stuff", "material"),
    ("but", "however"),
];

pub const SIMPLE_RULES: &[(&str, &str)] = &[
    ("obtain|acquire", "get"),
    ("utilize", "use"),
    ("demonstrate", "show"),
];

pub const CREATIVE_RULES: &[(&str, &str)] = &[
    ("said", "articulated"),
    ("show", "demonstrate"),
    ("good", "remarkable"),
    ("bad", "unfortunate"),
    ("make", "create"),
    ("think", "believe"),
    ("important", "crucial"),
];

pub struct Rephraser {
    formal: SubstitutionTable,
    simple: SubstitutionTable,
    creative: SubstitutionTable,
    phrasing: SimplePhrasing,
}

impl Rephraser {
    pub fn new(phrasing: SimplePhrasing) -> Result<Self> {
        if let SimplePhrasing::Truncate { max_words: 0 } = phrasing {
            bail!("rephrase truncation needs max_words of at least 1");
        }
        Ok(Self {
            formal: SubstitutionTable::compile(FORMAL_RULES)?,
            simple: SubstitutionTable::compile(SIMPLE_RULES)?,
            creative: SubstitutionTable::compile(CREATIVE_RULES)?,
            phrasing,
        })
    }

    pub fn rephrase(&self, text: &str) -> RephraseResult {
        let simple = match self.phrasing {
            SimplePhrasing::Substitution => self.simple.apply(text),
            SimplePhrasing::Truncate { max_words } => truncate_sentences(text, max_words),
        };
        RephraseResult {
            formal: self.formal.apply(text),
            simple,
            creative: self.creative.apply(text),
        }
    }
}

/// Cut each sentence to `max_words` words and rejoin as "A. B."; no sentences gives ""
fn truncate_sentences(text: &str, max_words: usize) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return String::new();
    }
    let shortened: Vec<String> = sentences
        .iter()
        .map(|sentence| {
            sentence
                .text
                .split_whitespace()
                .take(max_words)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    format!("{}.", shortened.join(". "))
}
