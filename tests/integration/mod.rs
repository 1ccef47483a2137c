// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use privatepen::{AnalyzerConfig, LatencyConfig, Pipeline, RuleBackend, Session, StateStore};

/// Short casual note, two sentences
pub const CASUAL_TEXT: &str = "Wow this is fun! Yes it is!";

/// Long words, no exclamations
pub const FORMAL_TEXT: &str =
    "Organizational considerations necessitate comprehensive documentation. Management acknowledges responsibilities.";

/// Five sentences, one flagged by an importance word
pub const REPORT_TEXT: &str = "We met on Monday. The budget was reviewed. \
    It is important to finish the audit. Lunch was served. We adjourned at noon.";

/// Test fixture with a temporary directory for state files and samples
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self { temp_dir, root_path }
    }

    /// Store backed by the default state file name in the fixture directory
    pub fn store(&self) -> StateStore {
        StateStore::in_dir(&self.root_path)
    }

    /// Write a text sample under the fixture directory
    pub fn create_sample<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write sample file");
        file_path
    }
}

/// Pipeline with the toolbar preset
pub fn toolbar_pipeline() -> Pipeline {
    Pipeline::new(AnalyzerConfig::toolbar()).expect("Toolbar pipeline should compile")
}

/// Pipeline with the side-panel preset
pub fn side_panel_pipeline() -> Pipeline {
    Pipeline::new(AnalyzerConfig::side_panel()).expect("Side-panel pipeline should compile")
}

/// Session over the rule backend with latency switched off
pub fn instant_session() -> Session<RuleBackend> {
    let pipeline = Arc::new(toolbar_pipeline());
    Session::new(RuleBackend::with_latency(pipeline, LatencyConfig::disabled()))
}
