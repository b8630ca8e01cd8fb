use clap::{CommandFactory, Parser};
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};
use std::path::PathBuf;

use ipsynth::config::GeneratorConfig;
use ipsynth::config_loader::{self, CliOverrides};
use ipsynth::ip::Strategy;
use ipsynth::orchestrator;
use ipsynth::utils::count::parse_count;

/// Generate synthetic public IPv4 addresses into a timestamped text file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  ipsynth 500000\n  ipsynth 500000 unique --strategy flat")]
struct Args {
    /// Number of addresses to generate (positive integer)
    #[arg(value_parser = parse_count, allow_negative_numbers = true)]
    count: usize,

    /// Pass "unique" (case-insensitive) to reject duplicate addresses
    mode: Option<String>,

    /// Generation strategy
    #[arg(short, long, value_enum)]
    strategy: Option<Strategy>,

    /// Directory the output file is written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Path to a YAML generator configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible output (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Parse arguments, printing usage errors to standard output
fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            let rendered = err.render().to_string();
            print!("{}", rendered);
            // Value errors omit the usage line
            if !rendered.contains("Usage:") {
                println!("\n{}", Args::command().render_usage());
            }
            std::process::exit(err.exit_code());
        }
        // --help and --version
        Err(err) => err.exit(),
    }
}

/// Interpret the optional positional mode argument
fn unique_mode(mode: Option<&str>) -> bool {
    match mode {
        Some(mode) if mode.eq_ignore_ascii_case("unique") => true,
        Some(other) => {
            warn!("Unknown mode '{}', generating without duplicate checking", other);
            false
        }
        None => false,
    }
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = parse_args();

    env_logger::Builder::from_env(Env::default().default_filter_or(&args.log_level)).init();

    let mut config = match &args.config {
        Some(path) => config_loader::load_config(path)?,
        None => GeneratorConfig::default(),
    };

    let overrides = CliOverrides {
        strategy: args.strategy,
        unique: unique_mode(args.mode.as_deref()),
        output_dir: args.output_dir.clone(),
        seed: args.seed,
    };
    config_loader::apply_overrides(&mut config, &overrides)?;

    if config.unique {
        println!(
            "Generating {} UNIQUE public IP addresses ({})...",
            args.count, config.strategy
        );
    } else {
        println!(
            "Generating {} public IP addresses ({}, may have duplicates)...",
            args.count, config.strategy
        );
    }

    let summary = orchestrator::run(args.count, &config)?;
    summary.print();

    info!("Generation completed successfully");
    Ok(())
}
