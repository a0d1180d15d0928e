//! apiforge — server and SDK generator driven by a declarative API spec.
//!
//! `apiforge --config <path>` validates the spec and generates IR for
//! every configured target; `apiforge version` prints the version.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use apiforge_lib::generate;

#[derive(Parser, Debug)]
#[command(
    name = "apiforge",
    about = "Server and SDK generator driven by a declarative API spec"
)]
struct Cli {
    /// Config file to use (YAML only).
    #[arg(long)]
    config: Option<String>,

    /// Log level.
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the generator version.
    Version {
        /// Print only the version number without additional text.
        #[arg(short, long)]
        short: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(Commands::Version { short }) = cli.command {
        if short {
            println!("{}", env!("CARGO_PKG_VERSION"));
        } else {
            println!("apiforge version: {}", env!("CARGO_PKG_VERSION"));
        }
        return ExitCode::SUCCESS;
    }

    let Some(config) = cli.config else {
        // No config given: print help and exit cleanly, like `--help`.
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    init_logging(&cli.log_level);

    match run_generation(Path::new(&config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_generation(config: &Path) -> Result<()> {
    generate::run(config)?;
    println!("Generation completed successfully!");
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
