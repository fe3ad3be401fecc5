mod config;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use veritas::{Version, VersionRequirement, Veritas};

use config::VeritasConfig;
use output::{render_versions, CheckReport, OutputFormat, RangeReport};

#[derive(Parser, Debug)]
#[command(name = "veritas")]
#[command(about = "Check versions against semantic version requirements", version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Output format (defaults to the config file setting, then text)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Path to a veritas.toml (default: search upward from the working directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether versions satisfy a requirement (exit code 1 if any does not)
    Check {
        /// Requirement such as ">=1.2, <2" or @name from veritas.toml
        requirement: String,

        /// Versions to check
        #[arg(required = true)]
        versions: Vec<String>,
    },

    /// Show the version range a requirement resolves to
    Range {
        /// Requirement such as ">=1.2, <2" or @name from veritas.toml
        requirement: String,
    },

    /// Print the versions that satisfy a requirement, in ascending order
    Filter {
        /// Requirement such as ">=1.2, <2" or @name from veritas.toml
        requirement: String,

        /// Candidate versions
        #[arg(required = true)]
        versions: Vec<String>,

        /// Only print the highest satisfying version
        #[arg(long)]
        max: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(explicit: Option<&PathBuf>) -> Result<VeritasConfig> {
    if let Some(path) = explicit {
        return VeritasConfig::load_file(path);
    }

    let cwd = std::env::current_dir()?;
    match VeritasConfig::load(&cwd)? {
        Some((config, path)) => {
            log::debug!("Loaded configuration from {}", path.display());
            Ok(config)
        }
        None => Ok(VeritasConfig::default()),
    }
}

fn parse_requirement(config: &VeritasConfig, argument: &str) -> Result<VersionRequirement> {
    let requirement = config.resolve_requirement(argument)?;
    Veritas::parse_requirement(requirement)
        .with_context(|| format!("Invalid requirement \"{}\"", argument))
}

fn parse_versions(versions: &[String]) -> Result<Vec<Version>> {
    versions
        .iter()
        .map(|v| Veritas::parse_version(v).map_err(anyhow::Error::from))
        .collect()
}

/// Versions that satisfy the requirement in ascending order, or only the highest with `max`
fn filter_versions(requirement: &VersionRequirement, versions: &[Version], max: bool) -> Vec<Version> {
    if max {
        return requirement.max_satisfying(versions).into_iter().cloned().collect();
    }

    let mut matching: Vec<Version> = requirement.satisfied_by(versions).into_iter().cloned().collect();
    matching.sort();
    matching
}

/// Run a command, returning the process exit status (0 success, 1 negative verdict)
fn run(args: Args) -> Result<u8> {
    let config = load_config(args.config.as_ref())?;
    let format = args.format.or(config.format).unwrap_or_default();

    match args.command {
        Commands::Check { requirement, versions } => {
            let requirement = parse_requirement(&config, &requirement)?;
            let versions = parse_versions(&versions)?;
            let report = CheckReport::new(&requirement, &versions);

            match format {
                OutputFormat::Text => println!("{}", report.render_text()),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }

            Ok(if report.all_satisfied() { 0 } else { 1 })
        }
        Commands::Range { requirement } => {
            let requirement = parse_requirement(&config, &requirement)?;
            let report = RangeReport::new(&requirement);

            match format {
                OutputFormat::Text => println!("{}", report.render_text()),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }

            Ok(0)
        }
        Commands::Filter { requirement, versions, max } => {
            let requirement = parse_requirement(&config, &requirement)?;
            let versions = parse_versions(&versions)?;
            let matching = filter_versions(&requirement, &versions, max);
            log::info!("{} of {} versions satisfy {}", matching.len(), versions.len(), requirement);

            // nothing to print in text mode, the exit code carries the result
            if !matching.is_empty() || format == OutputFormat::Json {
                println!("{}", render_versions(&matching, format)?);
            }

            Ok(if matching.is_empty() { 1 } else { 0 })
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
