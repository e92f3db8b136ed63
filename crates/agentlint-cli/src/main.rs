mod commands;
mod config_file;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "agentlint")]
#[command(about = "Lint UI markup for automated-agent usability", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to agentlint config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run lint rules over markup files
    Lint {
        /// Files or directories to lint
        #[arg(value_name = "PATH", default_value = ".")]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Apply available fixes in place
        #[arg(long)]
        fix: bool,

        /// Show the fixes that would be applied without writing files
        #[arg(long)]
        fix_dry_run: bool,
    },

    /// List available rules with their default severities
    Rules {
        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Human,
    /// JSON output for tooling
    Json,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Lint {
            paths,
            format,
            fix,
            fix_dry_run,
        } => commands::lint::run(cli.config, &paths, format, fix, fix_dry_run)?,
        Commands::Rules { format } => {
            commands::rules::run(format);
            0
        }
    };

    if exit_code != 0 {
        process::exit(exit_code);
    }
    Ok(())
}

/// Initialize tracing/logging based on the RUST_LOG env var
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}
