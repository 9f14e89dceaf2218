//! Standalone entry point for the enrichment pass:
//! `catalog_enrich [--dry-run] [--report PATH]`.

use std::process::ExitCode;

use app::cli::{EnrichArgs, GlobalArgs};
use app::command::{CommandStrategy, EnrichInput, EnrichStrategy};
use clap::Parser;

#[derive(Parser)]
#[command(name = "catalog_enrich")]
#[command(about = "Catalog enrichment helper", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    enrich: EnrichArgs,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let workspace = cli.global.init()?;

    let status = EnrichStrategy.execute(EnrichInput {
        workspace,
        dry_run: cli.enrich.dry_run,
        report: cli.enrich.report,
    })?;

    Ok(ExitCode::from(status))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn parses_dry_run_and_report() {
        let cli = Cli::try_parse_from(["catalog_enrich", "--dry-run", "--report", "x.md"]).unwrap();
        assert!(cli.enrich.dry_run);
        assert_eq!(cli.enrich.report.as_deref(), Some(Path::new("x.md")));
        assert!(cli.global.root.is_none());
    }

    #[test]
    fn defaults_to_write_mode_without_report_override() {
        let cli = Cli::try_parse_from(["catalog_enrich"]).unwrap();
        assert!(!cli.enrich.dry_run);
        assert!(cli.enrich.report.is_none());
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["catalog_enrich", "--force"]).is_err());
        assert!(Cli::try_parse_from(["catalog_enrich", "--report"]).is_err());
    }
}
