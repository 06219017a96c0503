//! sky-recap - Summarize a Bluesky account's year as Markdown

use clap::error::ErrorKind;
use clap::Parser;
use libskyrecap::logging::LoggingConfig;
use libskyrecap::types::normalize_handle;
use libskyrecap::{build_report, BlueskyFeedClient, Config, RecapError, Result, TargetYear};
use std::io::Write;

const USAGE: &str = "Usage: sky-recap <handle>\nExample: sky-recap someone.bsky.social";

#[derive(Parser, Debug)]
#[command(name = "sky-recap")]
#[command(version, about = "Summarize a Bluesky account's 2025 posts as a Markdown report", long_about = None)]
#[command(after_help = r#"EXAMPLES:
    sky-recap someone.bsky.social
    sky-recap @someone.bsky.social > recap.md

ENVIRONMENT:
    SKYRECAP_API_URL     Override the feed API base (default: https://public.api.bsky.app/xrpc)
    SKYRECAP_CONFIG      Path to an optional TOML config file
    SKYRECAP_LOG_LEVEL   Log level for stderr diagnostics (default: warn)
    SKYRECAP_LOG_FORMAT  Log format: text, json, or pretty (default: text)

EXIT CODES:
    0 - Report written to stdout
    1 - Missing handle, API error, or network failure"#)]
struct Cli {
    /// Account handle, with or without a leading @
    handle: Option<String>,

    /// Ignored
    #[arg(hide = true)]
    extra: Vec<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    LoggingConfig::from_env(cli.verbose).init();

    if let Err(e) = run(cli).await {
        match &e {
            RecapError::Usage(_) => eprintln!("{}", USAGE),
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let handle = match cli.handle.as_deref() {
        Some(raw) => normalize_handle(raw)?,
        None => return Err(RecapError::Usage("handle is required".to_string())),
    };

    let config = Config::load()?;
    let client = BlueskyFeedClient::new(&config.api);
    let year = TargetYear::default();

    tracing::debug!("Building {} recap for @{}", year.year(), handle);
    let report = build_report(&client, &handle, &year).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(report.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| RecapError::Unknown(format!("Failed to write report: {}", e)))?;

    Ok(())
}
