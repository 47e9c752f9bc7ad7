//! automap CLI
//!
//! Reads destination addresses from a spreadsheet, computes driving distance
//! and time from a fixed origin via openrouteservice and writes the results
//! to a new spreadsheet.

#![allow(clippy::print_stdout)]

use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use domain::BatchSummary;
use infrastructure::{AppConfig, LogFormat, build_batch_service, init_logging, resolve_api_key};
use tracing::{error, info};

/// automap CLI
#[derive(Debug, Parser)]
#[command(name = "automap")]
#[command(author, version, about = "Batch driving distances from a fixed origin", long_about = None)]
struct Cli {
    /// Verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: automap.toml if present)
    #[arg(short, long, env = "AUTOMAP_CONFIG")]
    config: Option<PathBuf>,

    /// Input spreadsheet (.xlsx, .xlsm, .xlsb, .xls, .ods, .csv)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output spreadsheet (.xlsx, .csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Origin address every route starts from
    #[arg(long)]
    origin: Option<String>,
}

impl Cli {
    /// Command line flags take precedence over file and environment
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(input) = &self.input {
            config.input.path.clone_from(input);
        }
        if let Some(output) = &self.output {
            config.output.path.clone_from(output);
        }
        if let Some(origin) = &self.origin {
            config.origin.address.clone_from(origin);
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    Ok(config)
}

async fn run(config: &AppConfig) -> anyhow::Result<BatchSummary> {
    // checked before anything touches the network
    let api_key = resolve_api_key()?;
    let service = build_batch_service(config, api_key)?;
    Ok(service.run().await?)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = load_config(&cli);

    let log_format = config
        .as_ref()
        .map_or(LogFormat::default(), |config| config.log_format);
    if let Err(e) = init_logging(log_format, cli.verbose) {
        println!("⚠️  {e}");
    }

    let outcome = match config {
        Ok(config) => run(&config).await.map(|summary| (summary, config)),
        Err(e) => Err(e),
    };

    match outcome {
        Ok((summary, config)) => {
            info!(?summary, "Done");
            println!(
                "✅ Processed {} rows: {} routed, {} without address, {} failed",
                summary.total, summary.routed, summary.no_address, summary.failed
            );
            println!("📄 Results saved to {}", config.output.path.display());
            ExitCode::SUCCESS
        },
        Err(e) => {
            error!(error = %e, "Batch failed");
            println!("❌ {e:#}");
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;

    fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
        let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
        Cli::try_parse_from(os_args)
    }

    #[test]
    fn no_arguments_is_valid() {
        let cli = parse_args(&["automap"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
        assert!(cli.origin.is_none());
    }

    #[test]
    fn verbosity_counts() {
        let cli = parse_args(&["automap", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn parses_all_flags() {
        let cli = parse_args(&[
            "automap",
            "-c",
            "batch.toml",
            "-i",
            "in.csv",
            "--output",
            "out.xlsx",
            "--origin",
            "Bundesplatz 3, 3005 Bern",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("batch.toml")));
        assert_eq!(cli.input, Some(PathBuf::from("in.csv")));
        assert_eq!(cli.output, Some(PathBuf::from("out.xlsx")));
        assert_eq!(cli.origin.as_deref(), Some("Bundesplatz 3, 3005 Bern"));
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(parse_args(&["automap", "--bogus"]).is_err());
    }

    #[test]
    fn overrides_replace_configured_values() {
        let cli = parse_args(&["automap", "-i", "in.csv", "--origin", "Basel"]).unwrap();
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.input.path, PathBuf::from("in.csv"));
        assert_eq!(config.origin.address, "Basel");
        assert_eq!(
            config.output.path,
            PathBuf::from("addresses_with_distances.xlsx")
        );
    }
}
