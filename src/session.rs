// Submission boundary: submit text, await a result from any backend
// A session allows one submission at a time and honours caller cancellation

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::LatencyConfig;
use crate::error::AnalysisError;
use crate::pipeline::{AnalysisResult, Operation, Pipeline};
use crate::stats::StatsDelta;

/// Something that can answer an analysis request asynchronously
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn analyze(&self, operation: Operation, text: &str) -> Result<AnalysisResult, AnalysisError>;
}

/// Backend that runs the rule pipeline after an imitated latency
pub struct RuleBackend {
    pipeline: Arc<Pipeline>,
    latency: LatencyConfig,
}

impl RuleBackend {
    /// Latency settings are taken from the pipeline configuration
    pub fn new(pipeline: Arc<Pipeline>) -> Self {
        let latency = pipeline.config().latency.clone();
        Self { pipeline, latency }
    }

    pub fn with_latency(pipeline: Arc<Pipeline>, latency: LatencyConfig) -> Self {
        Self { pipeline, latency }
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }
}

#[async_trait]
impl AnalysisBackend for RuleBackend {
    async fn analyze(&self, operation: Operation, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let delay = self.latency.delay_for(operation);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let pipeline = Arc::clone(&self.pipeline);
        let text = text.to_string();
        tokio::task::spawn_blocking(move || pipeline.run(operation, &text))
            .await
            .map_err(|e| AnalysisError::Failure(e.to_string()))
    }
}

/// A completed submission and its contribution to usage statistics
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub result: AnalysisResult,
    pub stats: StatsDelta,
}

/// One surface's submission state
pub struct Session<B: AnalysisBackend> {
    backend: B,
    busy: AtomicBool,
}

/// Clears the busy flag however the submission ends
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl<B: AnalysisBackend> Session<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            busy: AtomicBool::new(false),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Submit text for one operation
    ///
    /// Blank text is rejected with `EmptyInput`, a second concurrent call with `Busy`,
    /// and a fired `cancel` token ends the wait with `Cancelled`.
    pub async fn submit(
        &self,
        operation: Operation,
        text: &str,
        cancel: &CancellationToken,
    ) -> Result<Submission, AnalysisError> {
        if text.trim().is_empty() {
            debug!(%operation, "Rejected empty submission");
            return Err(AnalysisError::EmptyInput);
        }

        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!(%operation, "Rejected submission while another is in flight");
            return Err(AnalysisError::Busy);
        }
        let _guard = BusyGuard { flag: &self.busy };

        info!(%operation, chars = text.len(), "Submitting analysis");
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!(%operation, "Analysis cancelled");
                return Err(AnalysisError::Cancelled);
            }
            result = self.backend.analyze(operation, text) => result?,
        };

        let stats = StatsDelta::for_text(text, result.detected_tone());
        debug!(%operation, words = stats.word_count, "Analysis complete");
        Ok(Submission { result, stats })
    }
}
