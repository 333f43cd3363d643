//! profilegen - command-line front end for device capability profiles
//!
//! This CLI lets profile authors and tooling:
//! - Validate profile documents against the meta-schema
//! - Generate the profile table as Rust source
//! - List resolved profiles
//! - Check a saved device report against profiles
//! - Merge a profile into a device creation request

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod output;

use config::ProfilegenConfig;
use output::OutputFormat;

/// profilegen CLI application
#[derive(Parser)]
#[command(name = "profilegen")]
#[command(about = "Validate, generate and check device capability profiles", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "PROFILEGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Validate profile documents and resolve inheritance
    Validate {
        /// Profile documents (defaults to `inputs` from the config)
        documents: Vec<PathBuf>,
    },

    /// Generate the profile table as Rust source
    Generate {
        /// Profile documents (defaults to `inputs` from the config)
        documents: Vec<PathBuf>,

        /// Output file (defaults to `output` from the config, else stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List resolved profiles
    #[command(alias = "ls")]
    List {
        /// Profile documents (defaults to `inputs` from the config)
        documents: Vec<PathBuf>,
    },

    /// Check a device report against profiles
    Check {
        /// Profile documents (defaults to `inputs` from the config)
        documents: Vec<PathBuf>,

        /// Profile as NAME or NAME@VERSION; repeatable, defaults to all
        #[arg(short, long = "profile")]
        profiles: Vec<String>,

        /// Device report (JSON)
        #[arg(short, long)]
        device: PathBuf,
    },

    /// Merge a profile into a device creation request
    Merge {
        /// Profile documents (defaults to `inputs` from the config)
        documents: Vec<PathBuf>,

        /// Profile as NAME or NAME@VERSION
        #[arg(short, long)]
        profile: String,

        /// Caller creation request (JSON); empty when omitted
        #[arg(short, long)]
        request: Option<PathBuf>,

        /// Let the request disable profile-required features
        #[arg(long)]
        lenient: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    // Load config
    let config = ProfilegenConfig::load(cli.config.as_deref())?;

    // Execute command
    match cli.command {
        Commands::Validate { documents } => commands::validate::execute(&config.documents(documents)),
        Commands::Generate { documents, out } => {
            let out = out.or_else(|| config.output.clone());
            commands::generate::execute(&config.documents(documents), out.as_deref())
        }
        Commands::List { documents } => {
            commands::list::execute(&config.documents(documents), cli.output)
        }
        Commands::Check {
            documents,
            profiles,
            device,
        } => commands::check::execute(&config.documents(documents), &profiles, &device, cli.output),
        Commands::Merge {
            documents,
            profile,
            request,
            lenient,
        } => {
            let strict = !lenient && config.strict();
            commands::merge::execute(
                &config.documents(documents),
                &profile,
                request.as_deref(),
                strict,
            )
        }
    }
}
