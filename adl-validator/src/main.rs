// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use adl_validator::{FsSourceConfig, output, validate_bytes, validate_fs};
use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "adl-validator",
    version,
    about = "Check ADL documents for structural defects and list the tools and references they use"
)]
struct Cli {
    /// Files or directories to validate
    paths: Vec<PathBuf>,

    /// Validate a single document read from standard input
    #[arg(long, conflicts_with = "paths")]
    stdin: bool,

    /// Glob pattern to exclude (repeatable)
    #[arg(long, value_name = "GLOB")]
    exclude: Vec<String>,

    /// Extension picked up when walking directories (repeatable, replaces the defaults)
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Maximum size of a single file in bytes
    #[arg(long, value_name = "BYTES", default_value_t = 10_485_760)]
    max_file_size: u64,

    /// Follow symbolic links while walking directories
    #[arg(long)]
    follow_links: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn fs_config(&self) -> FsSourceConfig {
        let mut config = FsSourceConfig::for_paths(self.paths.clone());
        config.exclude.clone_from(&self.exclude);
        if !self.extensions.is_empty() {
            config.extensions = self
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();
        }
        config.max_file_size = self.max_file_size;
        config.follow_links = self.follow_links;
        config
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Validate standard input. Returns whether the document is free of issues.
fn run_stdin(format: OutputFormat, out: &mut dyn Write) -> anyhow::Result<bool> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read standard input")?;

    let result = match validate_bytes(&bytes) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            return Ok(false);
        }
    };

    match format {
        OutputFormat::Json => output::write_result_json(&result, out)?,
        OutputFormat::Human => output::write_result_human(&result, out)?,
    }
    Ok(result.is_clean())
}

/// Validate files on disk. Returns whether the report is ok.
fn run_paths(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<bool> {
    let report = validate_fs(&cli.fs_config())?;
    info!(
        scanned = report.scanned_files,
        failed = report.failed_files,
        issues = report.issues_count(),
        "validation finished"
    );

    match cli.format {
        OutputFormat::Json => output::write_json(&report, out)?,
        OutputFormat::Human => {
            output::write_human(&report, out)?;
            let status = if report.ok {
                "PASSED".green().bold()
            } else {
                "FAILED".red().bold()
            };
            eprintln!("{status}");
        }
    }
    Ok(report.ok)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if !io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    let mut stdout = io::stdout().lock();
    let outcome = if cli.stdin {
        run_stdin(cli.format, &mut stdout)
    } else {
        run_paths(&cli, &mut stdout)
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::from(2)
        }
    }
}
