//! Link-Sieve main entry point
//!
//! This is the command-line interface for the Link-Sieve link classifier.

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use link_sieve::classify::KeywordTable;
use link_sieve::config::{
    validate, FilterConfig, Settings, DEFAULT_DETAIL_PATTERN, DEFAULT_EXCLUDED_EXTENSIONS,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use link_sieve::crawler::sieve;
use link_sieve::output::{emit_all, ConsoleReport, JsonRecord};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: link-sieve <url>";

/// Link-Sieve: a single-page link classifier
///
/// Fetches one page, keeps the same-domain listing links and sorts them into
/// news, press release and annual report buckets. Prints a report and writes
/// `<domain>.json`.
#[derive(Parser, Debug)]
#[command(name = "link-sieve")]
#[command(version = "1.0.0")]
#[command(about = "Classifies the links of a single web page", long_about = None)]
struct Cli {
    /// Page to crawl; `https://` is assumed when no scheme is given
    #[arg(value_name = "URL")]
    url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// User-Agent header sent with the request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Validate TLS certificates instead of trusting every certificate
    #[arg(long)]
    verify_tls: bool,

    /// Directory the JSON record is written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Regex matched against the lowercased path to reject detail pages
    #[arg(long, value_name = "REGEX", default_value = DEFAULT_DETAIL_PATTERN)]
    detail_pattern: String,

    /// Path extension that disqualifies a link (repeatable, replaces the defaults)
    #[arg(long = "exclude-ext", value_name = "EXT")]
    exclude_ext: Vec<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Builds validated runtime settings from the parsed flags
    fn settings(&self) -> link_sieve::Result<Settings> {
        let filter = if self.exclude_ext.is_empty() {
            FilterConfig::new(DEFAULT_EXCLUDED_EXTENSIONS, &self.detail_pattern)?
        } else {
            FilterConfig::new(self.exclude_ext.as_slice(), &self.detail_pattern)?
        };

        let mut settings = Settings {
            filter,
            ..Settings::default()
        };
        settings.fetch.timeout_secs = self.timeout;
        settings.fetch.user_agent = self.user_agent.clone();
        settings.fetch.accept_invalid_certs = !self.verify_tls;
        settings.output.directory = self.output_dir.clone();

        validate(&settings)?;
        Ok(settings)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("{}", USAGE);
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };

    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to standard error; standard output carries the report.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("link_sieve=warn,error"),
            1 => EnvFilter::new("link_sieve=info,warn"),
            2 => EnvFilter::new("link_sieve=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Runs the crawl, prints the report and persists the record
async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = cli.settings().context("invalid options")?;
    let keywords = KeywordTable::builtin();

    let summary = sieve(&cli.url, &settings, &keywords)
        .await
        .with_context(|| format!("cannot crawl '{}'", cli.url))?;

    let json_record = JsonRecord::new(&settings.output.directory);
    emit_all(&summary, &[&ConsoleReport, &json_record]).context("failed to write output")?;

    Ok(())
}
