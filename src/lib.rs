pub mod config;
pub mod error;
pub mod pipeline;
pub mod session;
pub mod stats;
pub mod store;
pub mod timestamp;
pub mod tokenizer;

// Re-export main types for convenient access
pub use config::{AnalyzerConfig, LatencyConfig, Preset};
pub use error::AnalysisError;
pub use pipeline::{AnalysisResult, Operation, Pipeline};

// Re-export the asynchronous submission boundary
pub use session::{AnalysisBackend, RuleBackend, Session, Submission};

// Re-export statistics and storage types used by surfaces
pub use stats::{StatsDelta, ToneDistribution, WritingStats};
pub use store::{Settings, SettingsUpdate, Snippet, StateStore, StoreRecord, Theme};
pub use tokenizer::{count_text, TextCounts};
