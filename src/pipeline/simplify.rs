// WHY: simplification swaps complex vocabulary for plain words and reports how many terms moved
// Wording of the change summary belongs to the presentation layer

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::substitution::SubstitutionTable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplificationResult {
    pub simplified: String,
    pub change_count: usize,
}

pub const COMPLEX_TO_SIMPLE: &[(&str, &str)] = &[
    ("utilize", "use"),
    ("implement", "do"),
    ("facilitate", "help"),
    ("demonstrate", "show"),
    ("approximately", "about"),
];

pub struct Simplifier {
    table: SubstitutionTable,
}

impl Simplifier {
    pub fn new() -> Result<Self> {
        Ok(Self {
            table: SubstitutionTable::compile(COMPLEX_TO_SIMPLE)?,
        })
    }

    pub fn simplify(&self, text: &str) -> SimplificationResult {
        let outcome = self.table.apply_counting(text);
        SimplificationResult {
            simplified: outcome.text,
            change_count: outcome.changed_entries,
        }
    }

    /// Number of table entries whose pattern occurs in the text
    pub fn matching_entries(&self, text: &str) -> usize {
        self.table
            .entries()
            .iter()
            .filter(|entry| entry.matches(text))
            .count()
    }
}
