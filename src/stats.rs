// WHY: usage statistics are a pure fold of one session's numbers into the running record
// Persistence and read-modify-write safety belong to the store, not here

use serde::{Deserialize, Serialize};

use crate::pipeline::tone::Tone;
use crate::tokenizer;

/// Per-tone session counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToneDistribution {
    pub formal: u64,
    pub casual: u64,
    pub neutral: u64,
}

impl ToneDistribution {
    pub fn record(&mut self, tone: Tone) {
        match tone {
            Tone::Formal => self.formal += 1,
            Tone::Casual => self.casual += 1,
            Tone::Neutral => self.neutral += 1,
        }
    }

    pub fn get(&self, tone: Tone) -> u64 {
        match tone {
            Tone::Formal => self.formal,
            Tone::Casual => self.casual,
            Tone::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> u64 {
        self.formal + self.casual + self.neutral
    }

    /// Share of sessions with the given tone, 0.0 when nothing was recorded
    pub fn percentage(&self, tone: Tone) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(tone) as f64 / total as f64 * 100.0
    }
}

/// Running usage record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingStats {
    pub total_words: u64,
    pub sessions_count: u64,
    /// Accumulated words divided by accumulated sentences
    pub avg_sentence_length: f64,
    pub tone_distribution: ToneDistribution,
    /// Older records lack this field and start from zero
    #[serde(default)]
    pub total_sentences: u64,
}

/// What one session contributes to the running record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDelta {
    pub word_count: u64,
    pub sentence_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
}

impl StatsDelta {
    /// Delta for a session over `text`, with the tone if the operation detected one
    pub fn for_text(text: &str, tone: Option<Tone>) -> Self {
        Self {
            word_count: tokenizer::word_count(text) as u64,
            sentence_count: tokenizer::sentence_count(text) as u64,
            tone,
        }
    }
}

impl WritingStats {
    /// Fold one session into the record
    pub fn apply(&self, delta: &StatsDelta) -> WritingStats {
        let mut next = self.clone();
        next.total_words += delta.word_count;
        next.total_sentences += delta.sentence_count;
        next.sessions_count += 1;
        if let Some(tone) = delta.tone {
            next.tone_distribution.record(tone);
        }
        next.avg_sentence_length = if next.total_sentences == 0 {
            0.0
        } else {
            next.total_words as f64 / next.total_sentences as f64
        };
        next
    }
}

/// Compact count for dashboards: 1.2M, 3.4K, or the plain number
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_accumulates() {
        let stats = WritingStats::default()
            .apply(&StatsDelta { word_count: 10, sentence_count: 2, tone: Some(Tone::Formal) })
            .apply(&StatsDelta { word_count: 6, sentence_count: 2, tone: None });
        assert_eq!(stats.total_words, 16);
        assert_eq!(stats.sessions_count, 2);
        assert_eq!(stats.total_sentences, 4);
        assert_eq!(stats.avg_sentence_length, 4.0);
        assert_eq!(stats.tone_distribution.formal, 1);
        assert_eq!(stats.tone_distribution.total(), 1);
    }

    #[test]
    fn test_delta_for_text() {
        let delta = StatsDelta::for_text("One two. Three!", Some(Tone::Casual));
        assert_eq!(delta.word_count, 3);
        assert_eq!(delta.sentence_count, 2);
        assert_eq!(delta.tone, Some(Tone::Casual));
    }

    #[test]
    fn test_legacy_record_without_total_sentences() {
        let json = r#"{"totalWords":5,"sessionsCount":1,"avgSentenceLength":0,"toneDistribution":{"formal":0,"casual":1,"neutral":0}}"#;
        let stats: WritingStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_sentences, 0);
        assert_eq!(stats.tone_distribution.casual, 1);
    }

    #[test]
    fn test_percentage() {
        let mut distribution = ToneDistribution::default();
        assert_eq!(distribution.percentage(Tone::Formal), 0.0);
        distribution.record(Tone::Formal);
        distribution.record(Tone::Casual);
        assert_eq!(distribution.percentage(Tone::Formal), 50.0);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_500), "1.5K");
        assert_eq!(format_count(2_300_000), "2.3M");
    }
}
