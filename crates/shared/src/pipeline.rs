use anyhow::{Context, Result};
use tracing::warn;

use crate::config::FilterConfig;
use crate::filter::StoryFilter;
use crate::hackernews::StoryClient;
use crate::logfile::MatchLog;
use crate::models::RunSummary;

/// One full fetch-filter-report cycle.
///
/// The top-story listing fetch is fatal on failure; per-item detail
/// failures and missing items are warned about and skipped. Matched
/// stories are appended to `log` (when one is configured) as they are
/// found, and always accumulated into the returned summary in listing
/// order.
pub async fn run<C: StoryClient>(
    cfg: &FilterConfig,
    filter: &StoryFilter,
    client: &C,
    mut log: Option<&mut MatchLog>,
) -> Result<RunSummary> {
    let ids = client
        .top_stories()
        .await
        .context("Failed to fetch top stories")?;

    println!(
        "Fetched {} story ids. Examining the first {}...",
        ids.len(),
        cfg.max_stories.min(ids.len())
    );

    let mut summary = RunSummary::default();

    for (index, &id) in ids.iter().take(cfg.max_stories).enumerate() {
        summary.examined += 1;

        match client.story(id).await {
            Err(err) => {
                warn!(id, error = %err, "Failed to fetch story detail; skipping");
                summary.failed += 1;
            }
            Ok(None) => {
                warn!(id, "Story not found; skipping");
                summary.missing += 1;
            }
            Ok(Some(story)) => {
                let matched = filter.matches(&story);
                println!(
                    "[{}] {} {}",
                    index + 1,
                    if matched { "✓" } else { "✗" },
                    story.title
                );

                if matched {
                    if let Some(log) = log.as_deref_mut() {
                        log.append(&story)?;
                    }
                    summary.matched.push(story);
                }
            }
        }

        // Unconditional fixed pacing, failures included; the API gets the
        // same breathing room no matter what happened.
        tokio::time::sleep(cfg.delay).await;
    }

    println!("\nMatched {} stories.", summary.matched.len());

    Ok(summary)
}
