//! Synopsis CLI — summarize text, review history, analyze stored summaries.
//!
//! Usage:
//!   synopsis summarize [TEXT] [--db path]
//!   synopsis history [--limit N] [--db path]
//!   synopsis analyze [--db path]

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use synopsis::report::{render_analysis, render_history, render_keyword_chart};
use synopsis::{Backend, OpenStore, PipelineError, Settings, SqliteHistoryStore, SummaryPipeline};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter; overrides `--log-level`
const LOG_ENV: &str = "SYNOPSIS_LOG";

#[derive(Parser)]
#[command(
    name = "synopsis",
    version,
    about = "Text summarizer with history and keyword analytics"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Path to a YAML settings file (default: ./synopsis.yaml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Path to SQLite database file
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Summarization backend: http or lead
    #[arg(long, global = true)]
    backend: Option<Backend>,
    /// Model identifier for the http backend
    #[arg(long, global = true)]
    model: Option<String>,
    /// Base URL of the inference endpoint for the http backend
    #[arg(long, global = true)]
    endpoint: Option<String>,
    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize text and save it to the history
    Summarize {
        /// Text to summarize; read from stdin when omitted
        text: Option<String>,
    },
    /// Show saved summaries, newest first
    History {
        /// Show at most this many entries
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show statistics and top keywords over all saved summaries
    Analyze,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(cli: &Cli) -> Result<Settings, String> {
    let mut settings = Settings::load(cli.config.as_deref()).map_err(|e| e.to_string())?;
    if let Some(db) = &cli.db {
        settings.database = db.clone();
    }
    if let Some(backend) = cli.backend {
        settings.summarizer.backend = backend;
    }
    if let Some(model) = &cli.model {
        settings.summarizer.model = model.clone();
    }
    if let Some(endpoint) = &cli.endpoint {
        settings.summarizer.base_url = endpoint.clone();
    }
    settings.validate().map_err(|e| e.to_string())?;
    Ok(settings)
}

fn open_pipeline(settings: &Settings) -> Result<SummaryPipeline, String> {
    let store = SqliteHistoryStore::open(&settings.database).map_err(|e| {
        format!(
            "Failed to open database {}: {}",
            settings.database.display(),
            e
        )
    })?;
    let summarizer = settings
        .build_summarizer()
        .map_err(|e| format!("Failed to set up summarizer: {}", e))?;
    Ok(SummaryPipeline::new(summarizer, Arc::new(store)))
}

fn cmd_summarize(pipeline: &SummaryPipeline, text: Option<String>) -> i32 {
    let text = match text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("Error: cannot read stdin: {}", e);
                return 1;
            }
            buf
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("failed to create tokio runtime: {}", e);
            return 1;
        }
    };

    match rt.block_on(pipeline.submit(&text)) {
        Ok(record) => {
            println!("{}", record.summary_text);
            println!();
            println!("Summary saved (id {})", record.id);
            0
        }
        Err(PipelineError::InvalidInput) => {
            eprintln!("Input Error: Please enter some text.");
            1
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_history(pipeline: &SummaryPipeline, limit: Option<usize>) -> i32 {
    match pipeline.history() {
        Ok(records) if records.is_empty() => {
            println!("No summaries saved yet.");
            0
        }
        Ok(records) => {
            let shown = limit.unwrap_or(records.len()).min(records.len());
            print!("{}", render_history(&records[..shown]));
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_analyze(pipeline: &SummaryPipeline) -> i32 {
    match pipeline.analyze() {
        Ok(summary) => {
            print!("{}", render_analysis(&summary));
            let chart = render_keyword_chart(&summary.top_keywords);
            if !chart.is_empty() {
                println!();
                print!("{}", chart);
            }
            0
        }
        Err(PipelineError::NoData) => {
            println!("No Data: No summaries found to analyze.");
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let pipeline = match load_settings(&cli).and_then(|s| open_pipeline(&s)) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Summarize { text } => cmd_summarize(&pipeline, text),
        Commands::History { limit } => cmd_history(&pipeline, limit),
        Commands::Analyze => cmd_analyze(&pipeline),
    };
    std::process::exit(code);
}
