use anyhow::{bail, Result};
use std::time::Duration;

/// The smallest inter-request delay the Hacker News API is asked to tolerate.
pub const MIN_DELAY: Duration = Duration::from_millis(100);

/// Validated run configuration, built once at startup from CLI input and
/// passed by reference into the pipeline. No ambient global state.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub max_stories: usize,
    pub keywords: Vec<String>,
    pub domain: String,
    pub delay: Duration,
}

impl FilterConfig {
    /// Validate raw CLI values. Fails fast, before any network call.
    pub fn new(max_stories: i64, raw_keywords: &str, domain: &str, raw_delay: &str) -> Result<Self> {
        if max_stories <= 0 {
            bail!("max-stories must be a positive integer");
        }

        let keywords: Vec<String> = raw_keywords
            .split(',')
            .map(str::trim)
            .filter(|kw| !kw.is_empty())
            .map(str::to_string)
            .collect();
        if keywords.is_empty() {
            bail!("keywords must be provided");
        }

        let delay = parse_delay(raw_delay)?;
        if delay < MIN_DELAY {
            bail!("delay must be greater than or equal to 100ms");
        }

        Ok(Self {
            max_stories: max_stories as usize,
            keywords,
            domain: domain.to_string(),
            delay,
        })
    }
}

/// Parse a delay string like `100ms`, `2s` or `1m`.
///
/// None of the stacks in use ship a duration parser, so this handles just
/// the suffixes the tool documents.
fn parse_delay(raw: &str) -> Result<Duration> {
    let raw = raw.trim();

    let (number, unit): (&str, &str) = if let Some(n) = raw.strip_suffix("ms") {
        (n, "ms")
    } else if let Some(n) = raw.strip_suffix('s') {
        (n, "s")
    } else if let Some(n) = raw.strip_suffix('m') {
        (n, "m")
    } else {
        bail!("invalid delay {:?}: expected a number with an ms, s or m suffix", raw);
    };

    let value: u64 = number
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid delay {:?}: {:?} is not a whole number", raw, number))?;

    Ok(match unit {
        "ms" => Duration::from_millis(value),
        "s" => Duration::from_secs(value),
        _ => Duration::from_secs(value * 60),
    })
}
