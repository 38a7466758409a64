// SPDX-License-Identifier: PMPL-1.0-or-later

//! modpack-probe: startup diagnostics for modded Minecraft instances
//!
//! Reads the instance's latest.log, flags known failure signatures, prints a
//! summary and saves a timestamped JSON report next to the instance.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use modpack_probe::config::{Overrides, ProbeConfig};
use modpack_probe::probe;
use modpack_probe::report;
use modpack_probe::signatures::SignatureTable;
use modpack_probe::types::Severity;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "modpack-probe")]
#[command(version)]
#[command(about = "Classify a game client log against known startup failure signatures")]
#[command(long_about = None)]
struct Cli {
    /// Diagnostic log verbosity (-v info, -vv debug; RUST_LOG overrides)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an instance's log and write a startup report
    Analyze {
        /// Instance directory containing logs/latest.log
        #[arg(value_name = "INSTANCE_DIR")]
        minecraft_dir: Option<PathBuf>,

        /// YAML config file (CLI flags take precedence)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Java executable of the launch collaborator (recorded, not used)
        #[arg(long)]
        java: Option<String>,

        /// Launch timeout in seconds (recorded, not used)
        #[arg(long)]
        timeout: Option<u64>,

        /// Log file, relative to the instance directory unless absolute
        #[arg(long)]
        log: Option<PathBuf>,

        /// Directory for the timestamped report (default: instance directory)
        #[arg(long)]
        report_dir: Option<PathBuf>,

        /// Write the report to this exact path instead
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exit with status 1 when critical issues are found
        #[arg(long)]
        strict: bool,

        /// Skip the console summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// List the built-in failure signatures
    Signatures,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let table = SignatureTable::builtin().context("compiling built-in signatures")?;

    match cli.command {
        Commands::Analyze {
            minecraft_dir,
            config,
            java,
            timeout,
            log,
            report_dir,
            output,
            strict,
            quiet,
        } => {
            let overrides = Overrides {
                minecraft_dir,
                java_path: java,
                timeout_secs: timeout,
                log_file: log,
                report_dir,
            };
            let config = ProbeConfig::resolve(overrides, config.as_deref())?;

            println!("{}", "Starting Minecraft Modpack Startup Test".bold());
            println!("{}", "=".repeat(50));
            println!("Configuration:");
            println!("  Minecraft Directory: {}", config.minecraft_dir.display());
            println!("  Log File: {}", config.log_path().display());
            println!("  Java Path: {}", config.java_path);
            println!("  Timeout: {} seconds", config.timeout_secs);

            let outcome = probe::run(&config, &table, output.as_deref())?;

            if quiet {
                println!("Report saved to: {}", outcome.saved_to.display());
            } else {
                report::print_report(&outcome.report, Some(outcome.saved_to.as_path()));
            }

            if strict && outcome.report.critical_issues > 0 {
                std::process::exit(1);
            }
        }

        Commands::Signatures => {
            println!("{}", "FAILURE SIGNATURES".bold().yellow());
            for sig in table.signatures() {
                let severity = match sig.severity() {
                    Severity::Critical => sig.severity().to_string().red(),
                    Severity::Warning => sig.severity().to_string().yellow(),
                };
                println!(
                    "  {:<20} {:<10} {}",
                    sig.kind.as_str(),
                    severity,
                    sig.pattern.as_str().dimmed()
                );
            }
            println!();
            println!("{}", "SUCCESS PHRASES".bold().yellow());
            for pattern in table.success_patterns() {
                println!("  {}", pattern.as_str());
            }
        }
    }

    Ok(())
}
