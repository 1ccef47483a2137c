// WHY: every rule that differs between the toolbar and side panel is an explicit setting
// Presets reproduce each surface; the toolbar preset is the canonical default

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::pipeline::expand::ExpansionPolicy;
use crate::pipeline::grammar::GrammarRules;
use crate::pipeline::rephrase::SimplePhrasing;
use crate::pipeline::summarize::{BriefPolicy, DetailPolicy, SummaryPolicy};
use crate::pipeline::tone::{SentimentScoring, ToneThresholds};
use crate::pipeline::Operation;

/// Named rule sets matching each surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    #[default]
    Toolbar,
    SidePanel,
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toolbar" | "popup" => Ok(Preset::Toolbar),
            "side-panel" | "sidepanel" => Ok(Preset::SidePanel),
            other => Err(format!("unknown preset: {other}")),
        }
    }
}

/// Simulated backend latency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LatencyConfig {
    pub enabled: bool,
    /// Scales every operation's nominal delay
    pub multiplier: f64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            multiplier: 1.0,
        }
    }
}

impl LatencyConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            multiplier: 1.0,
        }
    }

    /// Delay before answering `operation`; zero when disabled or the multiplier is unusable
    pub fn delay_for(&self, operation: Operation) -> Duration {
        if !self.enabled || !self.multiplier.is_finite() || self.multiplier <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(operation.nominal_delay().as_secs_f64() * self.multiplier)
            .unwrap_or(Duration::ZERO)
    }
}

/// Full analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AnalyzerConfig {
    pub grammar: GrammarRules,
    pub tone: ToneThresholds,
    pub sentiment: SentimentScoring,
    pub summary: SummaryPolicy,
    pub rephrase: SimplePhrasing,
    pub expansion: ExpansionPolicy,
    pub latency: LatencyConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::toolbar()
    }
}

impl AnalyzerConfig {
    /// Toolbar and popup rules
    pub fn toolbar() -> Self {
        Self {
            grammar: GrammarRules::default(),
            tone: ToneThresholds::default(),
            sentiment: SentimentScoring::Fixed,
            summary: SummaryPolicy::default(),
            rephrase: SimplePhrasing::Substitution,
            expansion: ExpansionPolicy::default(),
            latency: LatencyConfig::default(),
        }
    }

    /// Side panel rules
    pub fn side_panel() -> Self {
        Self {
            grammar: GrammarRules {
                min_length_for_punctuation: 0,
                ..GrammarRules::default()
            },
            tone: ToneThresholds::side_panel(),
            sentiment: SentimentScoring::Scaled,
            summary: SummaryPolicy {
                brief: BriefPolicy::FirstAndLast,
                detail: DetailPolicy::FirstThird,
                max_key_points: 3,
            },
            rephrase: SimplePhrasing::Truncate { max_words: 15 },
            expansion: ExpansionPolicy::side_panel(),
            latency: LatencyConfig::default(),
        }
    }

    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Toolbar => Self::toolbar(),
            Preset::SidePanel => Self::side_panel(),
        }
    }

    /// Parse TOML; missing keys fall back to the toolbar preset
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("invalid analyzer configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot drive the pipeline
    pub fn validate(&self) -> Result<()> {
        let multiplier = self.latency.multiplier;
        if !multiplier.is_finite() || multiplier < 0.0 {
            bail!("latency multiplier must be a finite, non-negative number, got {multiplier}");
        }
        if let SimplePhrasing::Truncate { max_words: 0 } = self.rephrase {
            bail!("rephrase truncation needs max_words of at least 1");
        }
        Ok(())
    }

    /// Load TOML configuration from disk
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded analyzer configuration from {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize analyzer configuration")
    }
}
