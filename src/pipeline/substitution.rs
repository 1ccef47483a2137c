// WHY: rephrasing and simplification are both ordered whole-word replacement chains
// One compiled table type keeps rule order explicit and lets each table be tested alone

use anyhow::{Context, Result};
use regex_automata::meta::Regex;
use tracing::debug;

/// One compiled `(pattern, replacement)` rule
#[derive(Debug)]
pub struct Substitution {
    source: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl Substitution {
    /// Compile a case-insensitive whole-word rule; `source` may be an alternation like `get|got`
    pub fn compile(source: &'static str, replacement: &'static str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"(?i)\b(?:{source})\b"))
            .with_context(|| format!("invalid substitution pattern: {source}"))?;
        Ok(Self {
            source,
            pattern,
            replacement,
        })
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn replacement(&self) -> &'static str {
        self.replacement
    }

    /// Whether the rule would change the text
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Replace every match, returning `None` when nothing matched
    pub fn apply(&self, text: &str) -> Option<String> {
        let mut output = String::with_capacity(text.len());
        let mut last = 0;
        let mut matched = false;
        for found in self.pattern.find_iter(text) {
            output.push_str(&text[last..found.start()]);
            output.push_str(self.replacement);
            last = found.end();
            matched = true;
        }
        if !matched {
            return None;
        }
        output.push_str(&text[last..]);
        Some(output)
    }
}

/// Ordered list of substitutions applied one after another
#[derive(Debug)]
pub struct SubstitutionTable {
    entries: Vec<Substitution>,
}

/// Text after a table pass plus how many entries changed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOutcome {
    pub text: String,
    pub changed_entries: usize,
}

impl SubstitutionTable {
    /// Compile rules in the given order
    pub fn compile(rules: &[(&'static str, &'static str)]) -> Result<Self> {
        let entries = rules
            .iter()
            .map(|&(source, replacement)| Substitution::compile(source, replacement))
            .collect::<Result<Vec<_>>>()?;
        debug!("Compiled substitution table with {} entries", entries.len());
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Substitution] {
        &self.entries
    }

    /// Apply every entry in table order
    pub fn apply(&self, text: &str) -> String {
        self.apply_counting(text).text
    }

    /// Apply every entry in table order, counting entries that changed the text
    /// An entry counts once no matter how many occurrences it replaced
    pub fn apply_counting(&self, text: &str) -> TableOutcome {
        let mut current = text.to_string();
        let mut changed_entries = 0;
        for entry in &self.entries {
            if let Some(next) = entry.apply(&current) {
                if next != current {
                    changed_entries += 1;
                }
                current = next;
            }
        }
        TableOutcome {
            text: current,
            changed_entries,
        }
    }
}
