// WHY: tone and sentiment are coarse lexical classifications, not learned scores
// Thresholds are explicit values because the toolbar and side panel historically disagreed

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tokenizer::{self, normalize_word};

/// Register classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    Casual,
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Casual => "casual",
            Tone::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "formal" => Ok(Tone::Formal),
            "casual" => Ok(Tone::Casual),
            "neutral" => Ok(Tone::Neutral),
            other => Err(format!("unknown tone: {other}")),
        }
    }
}

/// Polarity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneResult {
    pub primary: Tone,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: Sentiment,
    pub score: f64,
}

/// Combined output of the tone operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneAnalysis {
    pub tone: ToneResult,
    pub sentiment: SentimentResult,
    pub suggestions: Vec<String>,
}

/// Thresholds for the ordered formal / casual / neutral decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ToneThresholds {
    /// Average word length must exceed this for formal
    pub formal_min_word_length: f64,
    /// When set, average sentence length must also exceed this for formal
    pub formal_min_sentence_length: Option<f64>,
    /// Formal requires a text without exclamation marks
    pub formal_forbids_exclamation: bool,
    /// At least this many exclamation marks makes the text casual
    pub casual_min_exclamations: usize,
    /// Average word length below this makes the text casual
    pub casual_max_word_length: f64,
}

impl Default for ToneThresholds {
    fn default() -> Self {
        Self {
            formal_min_word_length: 6.0,
            formal_min_sentence_length: None,
            formal_forbids_exclamation: true,
            casual_min_exclamations: 2,
            casual_max_word_length: 4.0,
        }
    }
}

impl ToneThresholds {
    /// Side panel variant: long sentences for formal, a single `!` or short words for casual
    pub fn side_panel() -> Self {
        Self {
            formal_min_word_length: 6.0,
            formal_min_sentence_length: Some(20.0),
            formal_forbids_exclamation: false,
            casual_min_exclamations: 1,
            casual_max_word_length: 4.5,
        }
    }
}

/// How the sentiment score is derived from keyword counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SentimentScoring {
    /// 0.7 positive, 0.3 negative, 0.5 neutral
    #[default]
    Fixed,
    /// 0.5 shifted by 0.1 per keyword, clamped to 0.1..=0.9
    Scaled,
}

pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "wonderful", "amazing",
    "fantastic", "love", "best", "happy", "perfect",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "worst",
    "hate", "poor", "disappointing", "sad", "unfortunate",
];

/// Average sentence length above which a clarity hint is added
pub const LONG_SENTENCE_WORDS: f64 = 25.0;

pub struct ToneAnalyzer {
    thresholds: ToneThresholds,
    scoring: SentimentScoring,
}

impl ToneAnalyzer {
    pub fn new(thresholds: ToneThresholds, scoring: SentimentScoring) -> Self {
        Self { thresholds, scoring }
    }

    pub fn analyze(&self, text: &str) -> ToneAnalysis {
        let tone = self.classify_tone(text);
        let sentiment = self.classify_sentiment(text);
        let mut suggestions = suggestions_for(tone.primary, sentiment.label);
        if tokenizer::avg_sentence_length(text) > LONG_SENTENCE_WORDS {
            suggestions.push("Consider breaking long sentences for better readability".to_string());
        }
        debug!(tone = %tone.primary, sentiment = %sentiment.label, "Tone analysis complete");
        ToneAnalysis {
            tone,
            sentiment,
            suggestions,
        }
    }

    /// First matching rule wins: formal, then casual, otherwise neutral
    pub fn classify_tone(&self, text: &str) -> ToneResult {
        let rules = &self.thresholds;
        let avg_word = tokenizer::avg_word_length(text);
        let exclamations = text.matches('!').count();

        let formal_words = avg_word > rules.formal_min_word_length;
        let formal_sentences = rules
            .formal_min_sentence_length
            .map_or(true, |min| tokenizer::avg_sentence_length(text) > min);
        let formal_calm = !rules.formal_forbids_exclamation || exclamations == 0;

        if formal_words && formal_sentences && formal_calm {
            ToneResult { primary: Tone::Formal, confidence: 0.85 }
        } else if exclamations >= rules.casual_min_exclamations
            || avg_word < rules.casual_max_word_length
        {
            ToneResult { primary: Tone::Casual, confidence: 0.80 }
        } else {
            ToneResult { primary: Tone::Neutral, confidence: 0.75 }
        }
    }

    /// Strictly greater keyword count decides the polarity; ties are neutral
    pub fn classify_sentiment(&self, text: &str) -> SentimentResult {
        let (positive, negative) = keyword_counts(text);

        let label = if positive > negative {
            Sentiment::Positive
        } else if negative > positive {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };

        let score = match (self.scoring, label) {
            (_, Sentiment::Neutral) => 0.5,
            (SentimentScoring::Fixed, Sentiment::Positive) => 0.7,
            (SentimentScoring::Fixed, Sentiment::Negative) => 0.3,
            (SentimentScoring::Scaled, Sentiment::Positive) => (0.5 + 0.1 * positive as f64).min(0.9),
            (SentimentScoring::Scaled, Sentiment::Negative) => (0.5 - 0.1 * negative as f64).max(0.1),
        };

        SentimentResult { label, score }
    }
}

/// Occurrences of positive and negative keywords among the lowercased words
pub fn keyword_counts(text: &str) -> (usize, usize) {
    let mut positive = 0;
    let mut negative = 0;
    for word in text.split_whitespace().map(normalize_word) {
        if POSITIVE_WORDS.contains(&word.as_str()) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(&word.as_str()) {
            negative += 1;
        }
    }
    (positive, negative)
}

/// Static advice keyed by tone, then by sentiment
pub fn suggestions_for(tone: Tone, sentiment: Sentiment) -> Vec<String> {
    let mut suggestions: Vec<&str> = match tone {
        Tone::Formal => vec![
            "Consider adding personal touches for better engagement",
            "Your writing is professional and clear",
        ],
        Tone::Casual => vec![
            "Great for informal communication",
            "For professional contexts, consider a more formal tone",
        ],
        Tone::Neutral => Vec::new(),
    };
    match sentiment {
        Sentiment::Negative => suggestions.push("Consider balancing negative points with positive aspects"),
        Sentiment::Positive => suggestions.push("Your positive tone creates an engaging message"),
        Sentiment::Neutral => {}
    }
    suggestions.into_iter().map(str::to_string).collect()
}
