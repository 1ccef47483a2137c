// WHY: one configured rule pipeline serves every surface
// Compiled tables live here; every operation is pure and total for any input string

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub mod expand;
pub mod grammar;
pub mod list_format;
pub mod rephrase;
pub mod simplify;
pub mod style_profile;
pub mod substitution;
pub mod summarize;
pub mod tone;
pub mod translate;

pub use expand::{ExpanderCondenser, ExpansionMode, ExpansionPolicy, ExpansionResult};
pub use grammar::{GrammarChecker, GrammarIssue, GrammarRules, IssueKind};
pub use list_format::{format_lists, ListResult};
pub use rephrase::{RephraseResult, Rephraser, SimplePhrasing};
pub use simplify::{SimplificationResult, Simplifier};
pub use style_profile::{analyze_writing_style, StyleProfile};
pub use summarize::{SummaryPolicy, SummaryResult, Summarizer};
pub use tone::{Sentiment, SentimentResult, Tone, ToneAnalysis, ToneAnalyzer, ToneResult};
pub use translate::{translate, Translations};

use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;

/// Operations a surface can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Grammar,
    Tone,
    Summarize,
    Rephrase,
    Expand,
    Translate,
    Simplify,
    Bullets,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Grammar,
        Operation::Tone,
        Operation::Summarize,
        Operation::Rephrase,
        Operation::Expand,
        Operation::Translate,
        Operation::Simplify,
        Operation::Bullets,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Grammar => "grammar",
            Operation::Tone => "tone",
            Operation::Summarize => "summarize",
            Operation::Rephrase => "rephrase",
            Operation::Expand => "expand",
            Operation::Translate => "translate",
            Operation::Simplify => "simplify",
            Operation::Bullets => "bullets",
        }
    }

    /// Latency the rule backend imitates before answering
    pub fn nominal_delay(&self) -> Duration {
        let millis = match self {
            Operation::Grammar => 500,
            Operation::Tone => 400,
            Operation::Summarize => 600,
            Operation::Rephrase => 500,
            Operation::Expand => 400,
            Operation::Translate => 700,
            Operation::Simplify => 400,
            Operation::Bullets => 300,
        };
        Duration::from_millis(millis)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Operation {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Operation::ALL
            .into_iter()
            .find(|operation| operation.as_str() == wanted)
            .ok_or_else(|| AnalysisError::UnknownOperation(s.to_string()))
    }
}

/// Result of one operation, tagged by the operation that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", content = "result", rename_all = "lowercase")]
pub enum AnalysisResult {
    Grammar(Vec<GrammarIssue>),
    Tone(ToneAnalysis),
    Summarize(SummaryResult),
    Rephrase(RephraseResult),
    Expand(ExpansionResult),
    Translate(Translations),
    Simplify(SimplificationResult),
    Bullets(ListResult),
}

impl AnalysisResult {
    pub fn operation(&self) -> Operation {
        match self {
            AnalysisResult::Grammar(_) => Operation::Grammar,
            AnalysisResult::Tone(_) => Operation::Tone,
            AnalysisResult::Summarize(_) => Operation::Summarize,
            AnalysisResult::Rephrase(_) => Operation::Rephrase,
            AnalysisResult::Expand(_) => Operation::Expand,
            AnalysisResult::Translate(_) => Operation::Translate,
            AnalysisResult::Simplify(_) => Operation::Simplify,
            AnalysisResult::Bullets(_) => Operation::Bullets,
        }
    }

    /// Tone detected by this result, recorded in usage statistics
    pub fn detected_tone(&self) -> Option<Tone> {
        match self {
            AnalysisResult::Tone(analysis) => Some(analysis.tone.primary),
            _ => None,
        }
    }
}

/// Canonical rule pipeline built from one configuration
pub struct Pipeline {
    config: AnalyzerConfig,
    grammar: GrammarChecker,
    tone: ToneAnalyzer,
    summarizer: Summarizer,
    rephraser: Rephraser,
    expander: ExpanderCondenser,
    simplifier: Simplifier,
}

impl Pipeline {
    /// Compile all rule tables for the given configuration
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let pipeline = Self {
            grammar: GrammarChecker::new(config.grammar.clone())?,
            tone: ToneAnalyzer::new(config.tone.clone(), config.sentiment),
            summarizer: Summarizer::new(config.summary.clone()),
            rephraser: Rephraser::new(config.rephrase)?,
            expander: ExpanderCondenser::new(config.expansion.clone()),
            simplifier: Simplifier::new()?,
            config,
        };
        debug!("Pipeline compiled");
        Ok(pipeline)
    }

    pub fn with_default_config() -> Result<Self> {
        Self::new(AnalyzerConfig::default())
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run one operation
    pub fn run(&self, operation: Operation, text: &str) -> AnalysisResult {
        debug!(%operation, chars = text.len(), "Running pipeline operation");
        match operation {
            Operation::Grammar => AnalysisResult::Grammar(self.check_grammar(text)),
            Operation::Tone => AnalysisResult::Tone(self.analyze_tone(text)),
            Operation::Summarize => AnalysisResult::Summarize(self.summarize(text)),
            Operation::Rephrase => AnalysisResult::Rephrase(self.rephrase(text)),
            Operation::Expand => AnalysisResult::Expand(self.expand_or_condense(text)),
            Operation::Translate => AnalysisResult::Translate(translate(text)),
            Operation::Simplify => AnalysisResult::Simplify(self.simplify(text)),
            Operation::Bullets => AnalysisResult::Bullets(format_lists(text)),
        }
    }

    pub fn check_grammar(&self, text: &str) -> Vec<GrammarIssue> {
        self.grammar.check(text)
    }

    pub fn analyze_tone(&self, text: &str) -> ToneAnalysis {
        self.tone.analyze(text)
    }

    pub fn summarize(&self, text: &str) -> SummaryResult {
        self.summarizer.summarize(text)
    }

    pub fn rephrase(&self, text: &str) -> RephraseResult {
        self.rephraser.rephrase(text)
    }

    pub fn expand_or_condense(&self, text: &str) -> ExpansionResult {
        self.expander.expand_or_condense(text)
    }

    pub fn simplify(&self, text: &str) -> SimplificationResult {
        self.simplifier.simplify(text)
    }

    pub fn format_lists(&self, text: &str) -> ListResult {
        format_lists(text)
    }

    pub fn profile_style(&self, sample: &str) -> StyleProfile {
        analyze_writing_style(sample)
    }
}
