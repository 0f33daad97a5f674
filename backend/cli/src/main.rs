mod ask_cmd;
mod config_cmd;
mod context;
mod doctor_cmd;
mod record_cmd;
mod teachers_cmd;
mod terminal_output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use tutorforge_config::defaults::DEFAULT_LOG_LEVEL;
use tutorforge_config::{load_and_prepare, TutorConfig};
use tutorforge_logging::init_logger;

use ask_cmd::AskArgs;
use context::AppContext;
use terminal_output::note_error;

#[derive(Parser)]
#[command(name = "tutorforge")]
#[command(about = "TutorForge: homework questions answered by the right teacher")]
#[command(version)]
struct Cli {
    /// Config directory (defaults to $TUTORFORGE_CONFIG_DIR or ~/.tutorforge)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the teacher personas
    Teachers,
    /// Show which subject and teacher a question routes to
    Classify {
        text: String,
    },
    /// Recognize the text in an image
    Ocr {
        image: PathBuf,
    },
    /// Ask a question, typed or recognized from an image
    Ask {
        /// Image to recognize the question from
        #[arg(long, conflicts_with = "question", required_unless_present = "question")]
        image: Option<PathBuf>,
        /// Question text
        #[arg(long)]
        question: Option<String>,
        /// Teacher to answer (subject like 数学, role like 数学老师, or auto)
        #[arg(long)]
        teacher: Option<String>,
        /// Save the answer as a JSON record
        #[arg(long)]
        save: Option<PathBuf>,
        /// Send the answer to the printer
        #[arg(long)]
        print: bool,
    },
    /// Display a saved record
    Show {
        record: PathBuf,
    },
    /// Print a saved record
    Print {
        record: PathBuf,
    },
    /// Show the effective configuration with secrets masked
    Config {
        /// Write a starter config.yaml instead
        #[arg(long)]
        init: bool,
    },
    /// Check configuration and credentials
    Doctor,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            note_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(tutorforge_config::config_dir);
    let loaded = load_and_prepare(&config_dir).await;

    let (log_dir, configured_level) = match &loaded {
        Ok(config) => (config.log_dir().cloned(), config.log_level().to_string()),
        Err(_) => (None, DEFAULT_LOG_LEVEL.to_string()),
    };
    let level = cli.log_level.clone().unwrap_or(configured_level);
    init_logger(log_dir.as_deref(), &level)?;
    debug!(config_dir = %config_dir.display(), "Starting");

    match cli.command {
        Commands::Teachers => teachers_cmd::run_list(),
        Commands::Classify { text } => teachers_cmd::run_classify(&text),
        Commands::Show { record } => record_cmd::run_show(&record),
        Commands::Doctor => doctor_cmd::run(&config_dir, &loaded).await,
        Commands::Config { init: true } => config_cmd::run_init(&config_dir).await,
        Commands::Config { init: false } => {
            config_cmd::run_show(&context(config_dir, loaded)?)
        }
        Commands::Ocr { image } => {
            ask_cmd::run_ocr(&context(config_dir, loaded)?, &image).await
        }
        Commands::Ask {
            image,
            question,
            teacher,
            save,
            print,
        } => {
            let args = AskArgs {
                image,
                question,
                teacher,
                save,
                print,
            };
            ask_cmd::run_ask(&context(config_dir, loaded)?, args).await
        }
        Commands::Print { record } => {
            record_cmd::run_print(&context(config_dir, loaded)?, &record)
        }
    }
}

/// Commands past this point need a valid config.
fn context(config_dir: PathBuf, loaded: Result<TutorConfig>) -> Result<AppContext> {
    Ok(AppContext::new(config_dir, loaded?))
}
