use anyhow::{bail, Context, Result};
use fd_lock::RwLock;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::pipeline::StyleProfile;
use crate::stats::{StatsDelta, WritingStats};
use crate::timestamp::unix_millis;

/// Colour scheme for the overlay surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Auto,
    Light,
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Theme::Auto => "auto",
            Theme::Light => "light",
            Theme::Dark => "dark",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Theme::Auto),
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// User settings as a flat record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub privacy_mode: bool,
    pub theme: Theme,
    pub whisper_mode: bool,
    pub auto_complete: bool,
    pub language: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            privacy_mode: true,
            theme: Theme::Auto,
            whisper_mode: false,
            auto_complete: false,
            language: "en".to_string(),
        }
    }
}

/// Partial settings change; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub privacy_mode: Option<bool>,
    pub theme: Option<Theme>,
    pub whisper_mode: Option<bool>,
    pub auto_complete: Option<bool>,
    pub language: Option<String>,
}

impl Settings {
    pub fn merged(&self, update: SettingsUpdate) -> Settings {
        Settings {
            privacy_mode: update.privacy_mode.unwrap_or(self.privacy_mode),
            theme: update.theme.unwrap_or(self.theme),
            whisper_mode: update.whisper_mode.unwrap_or(self.whisper_mode),
            auto_complete: update.auto_complete.unwrap_or(self.auto_complete),
            language: update.language.unwrap_or_else(|| self.language.clone()),
        }
    }
}

/// Saved piece of reusable text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: String,
    pub content: String,
    pub created_at: u64,
}

/// Everything persisted, one JSON document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreRecord {
    #[serde(flatten)]
    pub settings: Settings,
    pub writing_stats: WritingStats,
    pub style_profile: Option<StyleProfile>,
    pub snippets: Vec<Snippet>,
}

/// Pause between attempts to take the cross-process lock
const LOCK_RETRY_INTERVAL: Duration = Duration::from_millis(5);

/// JSON file store with serialized read-modify-write
///
/// Writers in this process queue on an async mutex; writers in other processes,
/// or other `StateStore` values on the same path, queue on an advisory lock
/// held on a `.lock` file next to the state file.
pub struct StateStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Default file name inside a directory
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(".privatepen_state.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current record; a missing file yields defaults
    pub async fn load(&self) -> Result<StoreRecord> {
        let _held = self.lock.lock().await;
        self.read_record().await
    }

    pub async fn settings(&self) -> Result<Settings> {
        Ok(self.load().await?.settings)
    }

    pub async fn update_settings(&self, update: SettingsUpdate) -> Result<Settings> {
        self.modify(|record| {
            record.settings = record.settings.merged(update);
            Ok(record.settings.clone())
        })
        .await
    }

    pub async fn stats(&self) -> Result<WritingStats> {
        Ok(self.load().await?.writing_stats)
    }

    /// Fold one session into the persisted stats
    pub async fn update_stats(&self, delta: &StatsDelta) -> Result<WritingStats> {
        self.modify(|record| {
            record.writing_stats = record.writing_stats.apply(delta);
            Ok(record.writing_stats.clone())
        })
        .await
    }

    pub async fn reset_stats(&self) -> Result<WritingStats> {
        info!("Resetting writing statistics");
        self.modify(|record| {
            record.writing_stats = WritingStats::default();
            Ok(record.writing_stats.clone())
        })
        .await
    }

    pub async fn style_profile(&self) -> Result<Option<StyleProfile>> {
        Ok(self.load().await?.style_profile)
    }

    /// Replace any previous profile
    pub async fn save_style_profile(&self, profile: StyleProfile) -> Result<()> {
        self.modify(|record| {
            record.style_profile = Some(profile);
            Ok(())
        })
        .await
    }

    pub async fn snippets(&self) -> Result<Vec<Snippet>> {
        Ok(self.load().await?.snippets)
    }

    /// Append a snippet; title and content must not be blank
    pub async fn add_snippet(&self, title: &str, content: &str) -> Result<Snippet> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() || content.is_empty() {
            bail!("snippet title and content must both be filled in");
        }
        let snippet = Snippet {
            title: title.to_string(),
            content: content.to_string(),
            created_at: unix_millis(),
        };
        self.modify(|record| {
            record.snippets.push(snippet.clone());
            Ok(snippet)
        })
        .await
    }

    pub async fn delete_snippet(&self, index: usize) -> Result<Snippet> {
        self.modify(|record| {
            if index >= record.snippets.len() {
                bail!(
                    "snippet index {} out of range ({} stored)",
                    index,
                    record.snippets.len()
                );
            }
            Ok(record.snippets.remove(index))
        })
        .await
    }

    /// Sidecar file carrying the cross-process lock
    pub fn lock_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| ".privatepen_state.json".into());
        name.push(".lock");
        self.path.with_file_name(name)
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Read, change and write back while holding both store locks
    async fn modify<T>(&self, change: impl FnOnce(&mut StoreRecord) -> Result<T>) -> Result<T> {
        let _held = self.lock.lock().await;

        let dir = self.parent_dir();
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("failed to create {}", dir.display()))?;
        let lock_path = self.lock_path();
        let lock_file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&lock_path)
            .with_context(|| format!("failed to open lock file {}", lock_path.display()))?;
        let mut file_lock = RwLock::new(lock_file);

        let _exclusive = loop {
            match file_lock.try_write() {
                Ok(guard) => break guard,
                Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    tokio::time::sleep(LOCK_RETRY_INTERVAL).await;
                }
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("failed to lock {}", lock_path.display()));
                }
            }
        };

        let mut record = self.read_record().await?;
        let output = change(&mut record)?;
        self.write_record(&record).await?;
        Ok(output)
    }

    async fn read_record(&self) -> Result<StoreRecord> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => serde_json::from_str(&content)
                .with_context(|| format!("corrupt state file {}", self.path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No state file at {}, using defaults", self.path.display());
                Ok(StoreRecord::default())
            }
            Err(e) => {
                warn!("Failed to read state file {}: {}", self.path.display(), e);
                Err(e).with_context(|| format!("failed to read {}", self.path.display()))
            }
        }
    }

    /// Write through a uniquely named temporary file, then rename it over the record
    async fn write_record(&self, record: &StoreRecord) -> Result<()> {
        let content = serde_json::to_string_pretty(record)?;
        let dir = self.parent_dir();
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || -> Result<()> {
            let mut tmp = NamedTempFile::new_in(&dir)
                .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
            tmp.write_all(content.as_bytes())?;
            tmp.as_file().sync_all()?;
            tmp.persist(&path)
                .with_context(|| format!("failed to replace {}", path.display()))?;
            Ok(())
        })
        .await
        .context("state writer task failed")??;

        debug!("Saved state to {}", self.path.display());
        Ok(())
    }
}
