//! Grade geometry rule submissions against the reference implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use grader::cli::{self, Format, RunOptions};
use grader::{exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "grader",
    version,
    about = "Grade geometry rule submissions against the reference"
)]
struct Cli {
    /// Config file (default: `grader.toml` in the working directory, if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List registered rule sets.
    List,
    /// Grade submissions against the reference.
    Run {
        /// Submissions to grade (default: every registered non-reference set).
        submissions: Vec<String>,
        /// Suite file to use instead of the configured or builtin suite.
        #[arg(long)]
        suite: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Also write the JSON report to this path.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the effective suite as TOML.
    Suite {
        #[arg(long)]
        suite: Option<PathBuf>,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let cfg = cli::resolve_config(&cwd, cli.config.as_deref())?;
    match cli.command {
        Command::List => cli::list_rule_sets(&cfg),
        Command::Run {
            submissions,
            suite,
            format,
            out,
        } => cli::run_submissions(
            &cfg,
            &RunOptions {
                submissions,
                suite,
                format,
                out,
            },
        ),
        Command::Suite { suite } => cli::show_suite(&cfg, suite.as_deref()),
    }
}
