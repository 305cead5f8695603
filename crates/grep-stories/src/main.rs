use anyhow::{Context, Result};
use clap::Parser;
use shared::{pipeline, FilterConfig, HnClient, ReportGenerator, StoryFilter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grep-stories")]
#[command(about = "Filter the Hacker News front page by keyword/domain into an HTML report")]
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

    /// Output HTML file for matched stories
    #[arg(long, default_value = "grep.html")]
    html_file: PathBuf,

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

    // All validation happens before the first network call.
    let config = FilterConfig::new(args.max_stories, &args.keywords, &args.domain, &args.delay)?;
    let filter = StoryFilter::new(&config.keywords, &config.domain)?;
    let client = HnClient::new().context("Failed to build Hacker News client")?;

    let summary = pipeline::run(&config, &filter, &client, None).await?;

    let html = ReportGenerator::generate(&summary.matched, &config.keywords, &config.domain);
    ReportGenerator::save(&html, &args.html_file)?;

    println!("✓ HTML report saved to: {}", args.html_file.display());

    Ok(())
}
