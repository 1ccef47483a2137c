use anyhow::{bail, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use privatepen::pipeline::analyze_writing_style;
use privatepen::{
    count_text, AnalysisError, AnalyzerConfig, LatencyConfig, Operation, Pipeline, Preset,
    RuleBackend, Session, SettingsUpdate, StateStore, Theme,
};

mod render;

#[derive(Parser, Debug)]
#[command(name = "privatepen")]
#[command(about = "Rule-based writing assistant: grammar, tone, summaries, rephrasing and more")]
#[command(version)]
struct Args {
    /// State file holding settings, statistics, style profile and snippets
    #[arg(long, global = true, default_value = ".privatepen_state.json")]
    state: PathBuf,

    /// Rule preset (toolbar or side-panel)
    #[arg(long, global = true, default_value = "toolbar")]
    preset: Preset,

    /// TOML analyzer configuration; overrides the preset
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Skip the simulated backend latency
    #[arg(long, global = true)]
    no_delay: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one analysis operation
    Analyze {
        /// grammar, tone, summarize, rephrase, expand, translate, simplify or bullets
        operation: Operation,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Count words, characters and sentences
    Count {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Build and store a writing style profile from a sample file
    Profile {
        /// Plain text or markdown sample
        file: PathBuf,
    },
    /// Show usage statistics
    Stats {
        /// Clear all statistics
        #[arg(long)]
        reset: bool,
    },
    /// Manage saved snippets
    Snippets {
        #[command(subcommand)]
        action: SnippetAction,
    },
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Print the effective analyzer configuration as TOML
    Config,
}

#[derive(Subcommand, Debug)]
enum SnippetAction {
    List,
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    Delete {
        /// 0-based position in the list
        index: usize,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    Show,
    Set {
        #[arg(long)]
        privacy_mode: Option<bool>,
        #[arg(long)]
        theme: Option<Theme>,
        #[arg(long)]
        whisper_mode: Option<bool>,
        #[arg(long)]
        auto_complete: Option<bool>,
        #[arg(long)]
        language: Option<String>,
    },
}

#[derive(ClapArgs, Debug)]
struct InputArgs {
    /// Text to analyze
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,

    /// Read text from a file; stdin is used when neither --text nor --file is given
    #[arg(long)]
    file: Option<PathBuf>,
}

impl InputArgs {
    async fn read(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read {}", path.display()));
        }
        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .context("failed to read stdin")?;
        Ok(buffer)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: JSON logs on stderr keep stdout free for results
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let mut config = match &args.config {
        Some(path) => AnalyzerConfig::load(path).await?,
        None => AnalyzerConfig::from_preset(args.preset),
    };
    if args.no_delay {
        config.latency = LatencyConfig::disabled();
    }

    let store = StateStore::new(&args.state);

    match &args.command {
        Command::Analyze { operation, input } => {
            let text = input.read().await?;
            run_analysis(config, &store, *operation, &text, args.json).await?;
        }
        Command::Count { input } => {
            let counts = count_text(&input.read().await?);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&counts)?);
            } else {
                println!("Words: {}  Characters: {}  Sentences: {}", counts.words, counts.chars, counts.sentences);
            }
        }
        Command::Profile { file } => {
            let sample = tokio::fs::read_to_string(file)
                .await
                .with_context(|| format!("failed to read sample {}", file.display()))?;
            let profile = analyze_writing_style(&sample);
            store.save_style_profile(profile.clone()).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                println!("{}", render::style_profile(&profile));
                println!("Writing style profile created!");
            }
        }
        Command::Stats { reset } => {
            let stats = if *reset {
                store.reset_stats().await?
            } else {
                store.stats().await?
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                if *reset {
                    println!("Statistics reset");
                }
                println!("{}", render::writing_stats(&stats));
            }
        }
        Command::Snippets { action } => match action {
            SnippetAction::List => {
                let snippets = store.snippets().await?;
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&snippets)?);
                } else {
                    println!("{}", render::snippets(&snippets));
                }
            }
            SnippetAction::Add { title, content } => {
                let snippet = store.add_snippet(title, content).await?;
                println!("Snippet saved: {}", snippet.title);
            }
            SnippetAction::Delete { index } => {
                let snippet = store.delete_snippet(*index).await?;
                println!("Snippet deleted: {}", snippet.title);
            }
        },
        Command::Settings { action } => {
            let settings = match action {
                SettingsAction::Show => store.settings().await?,
                SettingsAction::Set {
                    privacy_mode,
                    theme,
                    whisper_mode,
                    auto_complete,
                    language,
                } => {
                    let update = SettingsUpdate {
                        privacy_mode: *privacy_mode,
                        theme: *theme,
                        whisper_mode: *whisper_mode,
                        auto_complete: *auto_complete,
                        language: language.clone(),
                    };
                    store.update_settings(update).await?
                }
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            } else {
                println!("{}", render::settings(&settings));
            }
        }
        Command::Config => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}

/// Submit one operation, print the result and record the session
async fn run_analysis(
    config: AnalyzerConfig,
    store: &StateStore,
    operation: Operation,
    text: &str,
    json: bool,
) -> Result<()> {
    let pipeline = Arc::new(Pipeline::new(config)?);
    let session = Session::new(RuleBackend::new(pipeline));

    // Ctrl-C cancels the pending submission
    let cancel = CancellationToken::new();
    let watcher = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            watcher.cancel();
        }
    });

    if !json {
        eprintln!("{}", render::loading_message(operation));
    }

    let submission = match session.submit(operation, text, &cancel).await {
        Ok(submission) => submission,
        Err(AnalysisError::EmptyInput) => bail!("Please enter or select some text first"),
        Err(AnalysisError::Cancelled) => bail!("Analysis cancelled"),
        Err(e) => {
            error!(error = %e, %operation, "Analysis error");
            bail!("Analysis failed. Please try again.");
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&submission.result)?);
    } else {
        println!("{}", render::analysis_result(&submission.result));
    }

    store.update_stats(&submission.stats).await?;
    Ok(())
}
