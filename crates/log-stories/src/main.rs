use anyhow::{Context, Result};
use clap::Parser;
use shared::{pipeline, FilterConfig, HnClient, MatchLog, StoryFilter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "log-stories")]
#[command(about = "Filter the Hacker News front page by keyword/domain into an append-only log")]
struct Args {
    /// Maximum number of stories to examine
    #[arg(long, default_value = "250")]
    max_stories: i64,

    /// Comma-separated list of keywords to filter story titles by
    #[arg(short, long)]
    keywords: String,

    /// Domain to filter story URLs by (optional)
    #[arg(short, long, default_value = "")]
    domain: String,

    /// Log file receiving one tagged line per matched story
    #[arg(long, default_value = "matches.log")]
    log_file: PathBuf,

    /// Delay between requests (e.g. 100ms, 2s)
    #[arg(long, default_value = "100ms")]
    delay: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = FilterConfig::new(args.max_stories, &args.keywords, &args.domain, &args.delay)?;
    let filter = StoryFilter::new(&config.keywords, &config.domain)?;
    let client = HnClient::new().context("Failed to build Hacker News client")?;

    // Opened once, before the run; the same handle serves the pipeline's
    // appends and the finalizing sort.
    let mut log = MatchLog::open(&args.log_file)?;

    pipeline::run(&config, &filter, &client, Some(&mut log)).await?;

    log.sort_and_rewrite()
        .context("Failed to sort log file")?;

    println!("✓ Match log saved to: {}", args.log_file.display());

    Ok(())
}
