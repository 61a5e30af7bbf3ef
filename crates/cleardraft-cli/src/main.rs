mod display;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cleardraft_ai::{AiConfig, TextService};
use cleardraft_core::{Clause, ClauseAnalyzer, seed, validate};
use cleardraft_store::{RestorePolicy, Session};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cleardraft", version, about = "Contract clause editor core")]
struct Cli {
    /// API key for the hosted text model. Without one, AI answers are fixed
    /// "unavailable" messages.
    #[arg(long, env = "API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    #[arg(long, env = "CLEARDRAFT_MODEL", default_value = cleardraft_ai::config::DEFAULT_MODEL, global = true)]
    model: String,

    #[arg(long, env = "CLEARDRAFT_AI_URL", default_value = cleardraft_ai::config::DEFAULT_BASE_URL, global = true)]
    ai_url: String,

    /// Per-request timeout for the text model, in seconds.
    #[arg(long, env = "CLEARDRAFT_AI_TIMEOUT_SECS", global = true)]
    timeout_secs: Option<u64>,

    /// Name recorded on comments and versions.
    #[arg(long, env = "CLEARDRAFT_AUTHOR", default_value = cleardraft_core::DEFAULT_AUTHOR, global = true)]
    author: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the document.
    Show {
        /// JSON array of clauses; defaults to the starter agreement.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Check the document's structure.
    Validate {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Ask the text model to critique a clause.
    Analyze {
        text: String,
    },
    /// Apply edits to the starter agreement and save a new version.
    Save {
        /// Replace the live clauses with this JSON array before editing.
        #[arg(long)]
        file: Option<PathBuf>,
        /// Set a clause's content, as `ID=TEXT`. Repeatable.
        #[arg(long = "edit", value_parser = parse_pair)]
        edits: Vec<(String, String)>,
        /// Comment on a clause, as `ID=TEXT`. Repeatable.
        #[arg(long = "comment", value_parser = parse_pair)]
        comments: Vec<(String, String)>,
        /// Rebuild clause numbering before saving.
        #[arg(long)]
        renumber: bool,
        /// Restore the baseline afterwards and record the restore in history.
        #[arg(long)]
        revert: bool,
    },
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    let (id, text) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=TEXT, got `{raw}`"))?;
    if id.trim().is_empty() {
        return Err(format!("missing clause id in `{raw}`"));
    }
    Ok((id.trim().to_string(), text.to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("cleardraft v{}", env!("CARGO_PKG_VERSION"));

    let config = AiConfig {
        api_key: cli.api_key.clone().filter(|k| !k.trim().is_empty()),
        model: cli.model.clone(),
        base_url: cli.ai_url.clone(),
        timeout: cli.timeout_secs.map(Duration::from_secs),
    };

    match cli.command {
        Command::Show { file } => {
            let clauses = load_clauses(file.as_deref())?;
            display::print_document(&clauses, None);
        }
        Command::Validate { file } => {
            let clauses = load_clauses(file.as_deref())?;
            let result = validate(&clauses);
            display::print_validation(&result);
            if !result.is_valid() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Analyze { text } => {
            let service = TextService::from_config(&config);
            println!("{}", service.analyze_clause_text(&text).await);
        }
        Command::Save {
            file,
            edits,
            comments,
            renumber,
            revert,
        } => {
            let service = Arc::new(TextService::from_config(&config));
            let mut session = Session::new(seed::initial_clauses(), service.clone(), service)
                .with_author(cli.author)
                .with_restore_policy(RestorePolicy::Record);
            let baseline = session.current_version().id().to_string();

            if let Some(path) = file.as_deref() {
                session.load_document(load_clauses(Some(path))?);
            }
            for (id, text) in &edits {
                session
                    .update_clause(id, text.as_str())
                    .with_context(|| format!("editing clause {id}"))?;
            }
            for (id, text) in &comments {
                session
                    .select(id)
                    .with_context(|| format!("selecting clause {id}"))?;
                session
                    .add_annotation(text)
                    .with_context(|| format!("commenting on clause {id}"))?;
            }
            if renumber {
                let changed = session.renumber();
                tracing::info!(changed, "renumbered clauses");
            }

            let saved = session.save_version().await;
            display::print_document(session.document().clauses(), Some(session.annotations()));
            if let Err(result) = &saved {
                display::print_validation(result);
            }
            if revert {
                session.restore_version(&baseline)?;
            }
            display::print_history(session.archive());
            if saved.is_err() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Clauses from a JSON file, or the starter agreement when no path is given.
fn load_clauses(path: Option<&Path>) -> anyhow::Result<Vec<Clause>> {
    let Some(path) = path else {
        return Ok(seed::initial_clauses());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let clauses: Vec<Clause> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(clauses)
}
