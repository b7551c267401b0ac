//! quizdesk CLI — register, take quizzes, and view reports from the console.

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};

use quizdesk_core::config::{load_config_from, CONFIG_FILE};
use quizdesk_core::session::QuizContext;
use quizdesk_core::store::QuizStore;

mod commands;
mod prompt;

use commands::report::ReportFormat;

#[derive(Parser)]
#[command(name = "quizdesk", version, about = "Console multiple-choice quizzes")]
struct Cli {
    /// Config file path (default: ./quizdesk.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding users.txt, quizzes.txt and results.txt
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (the default)
    Play,

    /// Print a report without the interactive menu
    Report {
        #[command(subcommand)]
        kind: ReportKind,
    },

    /// Check that the data files parse
    Validate,

    /// Create a starter config and quiz file
    Init,
}

#[derive(Subcommand)]
enum ReportKind {
    /// Every result recorded for one user
    User {
        #[arg(long)]
        username: String,

        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,
    },

    /// Average and best score for a category at a difficulty
    Quiz {
        #[arg(long)]
        category: String,

        /// Easy, Medium, or Hard
        #[arg(long)]
        difficulty: String,

        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quizdesk=error")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // `init` may be asked to create the config file it was pointed at.
    let creating_config = matches!(cli.command, Some(Commands::Init))
        && cli.config.as_deref().is_some_and(|p| !p.exists());
    let mut config = if creating_config {
        load_config_from(None)?
    } else {
        load_config_from(cli.config.as_deref())?
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    let store = QuizStore::from_config(&config);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut ctx = open_context(store);
            let stdin = io::stdin();
            let mut prompt = prompt::Prompt::new(stdin.lock(), io::stdout());
            commands::play::execute(&mut ctx, &mut prompt, &mut rand::thread_rng())
        }
        Commands::Report { kind } => {
            let ctx = open_context(store);
            match kind {
                ReportKind::User { username, format } => {
                    commands::report::execute_user(&ctx, &username, format)
                }
                ReportKind::Quiz {
                    category,
                    difficulty,
                    format,
                } => commands::report::execute_quiz(&ctx, &category, &difficulty, format),
            }
        }
        Commands::Validate => commands::validate::execute(&store),
        Commands::Init => {
            let config_path = cli.config.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
            commands::init::execute(&store, &config_path)
        }
    }
}

/// Load all collections, telling the user about any that start out empty.
fn open_context(store: QuizStore) -> QuizContext {
    let (ctx, warnings) = QuizContext::load(store);
    for w in &warnings {
        eprintln!("Unable to load {}...", w.collection);
    }
    ctx
}
