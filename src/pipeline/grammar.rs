// WHY: mechanical writing issues are detected with independent rules
// Rules run in a fixed order and every hit is reported; the caller decides presentation

use anyhow::Result;
use regex_automata::meta::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Category of a grammar finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Spacing,
    Punctuation,
    Capitalization,
    Style,
    Repetition,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IssueKind::Spacing => "spacing",
            IssueKind::Punctuation => "punctuation",
            IssueKind::Capitalization => "capitalization",
            IssueKind::Style => "style",
            IssueKind::Repetition => "repetition",
        };
        f.write_str(name)
    }
}

/// A single finding; `position` is a character offset into the checked text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarIssue {
    pub kind: IssueKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

/// Tunable grammar rule set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GrammarRules {
    /// Trimmed text must be longer than this before missing end punctuation is flagged
    pub min_length_for_punctuation: usize,
    /// Flag `was/were/been/being` followed by an `-ed` word
    pub passive_voice: bool,
    /// Flag long words used too often
    pub repetition: bool,
    /// Words need more than this many characters to be counted for repetition
    pub repetition_min_word_length: usize,
    /// A word repeated more than this many times is flagged
    pub repetition_max_occurrences: usize,
}

impl Default for GrammarRules {
    fn default() -> Self {
        Self {
            min_length_for_punctuation: 10,
            passive_voice: true,
            repetition: true,
            repetition_min_word_length: 4,
            repetition_max_occurrences: 3,
        }
    }
}

/// Runs the grammar rules against a document
#[derive(Debug)]
pub struct GrammarChecker {
    rules: GrammarRules,
    passive: Regex,
}

impl GrammarChecker {
    pub fn new(rules: GrammarRules) -> Result<Self> {
        let passive = Regex::new(r"(?i)\b(?:was|were|been|being)\s+\w+ed\b")?;
        Ok(Self { rules, passive })
    }

    pub fn rules(&self) -> &GrammarRules {
        &self.rules
    }

    /// Run every enabled rule in order: spacing, punctuation, capitalization, passive voice, repetition
    pub fn check(&self, text: &str) -> Vec<GrammarIssue> {
        let mut issues = Vec::new();

        if let Some(byte_pos) = text.find("  ") {
            issues.push(GrammarIssue {
                kind: IssueKind::Spacing,
                message: "Multiple consecutive spaces detected".to_string(),
                suggestion: Some("Use single spaces between words".to_string()),
                position: Some(text[..byte_pos].chars().count()),
            });
        }

        let trimmed = text.trim();
        if trimmed.chars().count() > self.rules.min_length_for_punctuation
            && !trimmed.ends_with(['.', '!', '?'])
        {
            issues.push(GrammarIssue {
                kind: IssueKind::Punctuation,
                message: "Missing punctuation at the end of sentence".to_string(),
                suggestion: Some("Add a period, exclamation mark, or question mark".to_string()),
                position: Some(text.chars().count().saturating_sub(1)),
            });
        }

        if let Some(first) = text.chars().next() {
            if !first.is_ascii_uppercase() {
                issues.push(GrammarIssue {
                    kind: IssueKind::Capitalization,
                    message: "Sentence should start with a capital letter".to_string(),
                    suggestion: Some("Capitalize the first letter".to_string()),
                    position: Some(0),
                });
            }
        }

        if self.rules.passive_voice && self.passive.is_match(text) {
            issues.push(GrammarIssue {
                kind: IssueKind::Style,
                message: "Passive voice detected".to_string(),
                suggestion: Some("Consider using active voice for clarity".to_string()),
                position: None,
            });
        }

        if self.rules.repetition {
            for (word, count) in self.repeated_words(text) {
                issues.push(GrammarIssue {
                    kind: IssueKind::Repetition,
                    message: format!("Word \"{word}\" appears {count} times"),
                    suggestion: Some("Consider using synonyms for variety".to_string()),
                    position: None,
                });
            }
        }

        debug!("Grammar check found {} issues", issues.len());
        issues
    }

    /// Over-used words in first-seen order
    fn repeated_words(&self, text: &str) -> Vec<(String, usize)> {
        let lowered = text.to_lowercase();
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();

        for word in lowered.split_whitespace() {
            if word.chars().count() <= self.rules.repetition_min_word_length {
                continue;
            }
            let count = counts.entry(word).or_insert(0);
            if *count == 0 {
                order.push(word);
            }
            *count += 1;
        }

        order
            .into_iter()
            .filter_map(|word| {
                let count = counts[word];
                (count > self.rules.repetition_max_occurrences).then(|| (word.to_string(), count))
            })
            .collect()
    }
}
