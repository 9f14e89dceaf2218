#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process::ExitCode;

use app::cli::{EnrichArgs, GlobalArgs};
use app::command::{
    CommandStrategy, EnrichInput, EnrichStrategy, GrepInput, GrepStrategy, InfoStrategy,
    InitStrategy, OpsReportInput, OpsReportStrategy, VersionStrategy,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "catalog-tools")]
#[command(about = "Maintenance tools for the content catalog", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize entry tags and report brand tokens without a logo alias
    Enrich(EnrichArgs),
    /// List files containing a CSS class or other literal text
    Grep {
        /// Text to search for (default: grep.pattern from config)
        pattern: Option<String>,

        /// Only search files whose name matches this glob
        #[arg(long)]
        glob: Option<String>,
    },
    /// Write the timestamped ops status report
    OpsReport {
        /// Output path, relative to the root unless absolute
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Create a config file with default settings
    Init,
    /// Show the effective configuration
    Info,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if matches!(cli.command, Commands::Version) {
        return Ok(ExitCode::from(VersionStrategy.execute(())?));
    }

    let workspace = cli.global.init()?;

    let status = match cli.command {
        Commands::Enrich(args) => EnrichStrategy.execute(EnrichInput {
            workspace,
            dry_run: args.dry_run,
            report: args.report,
        })?,
        Commands::Grep { pattern, glob } => GrepStrategy.execute(GrepInput {
            workspace,
            pattern,
            glob,
        })?,
        Commands::OpsReport { output } => {
            OpsReportStrategy.execute(OpsReportInput { workspace, output })?
        }
        Commands::Init => InitStrategy.execute(workspace)?,
        Commands::Info => InfoStrategy.execute(workspace)?,
        Commands::Version => VersionStrategy.execute(())?,
    };

    Ok(ExitCode::from(status))
}
