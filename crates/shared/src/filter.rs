use anyhow::{Context, Result};
use regex::Regex;

use crate::models::Story;

/// Decides whether a story is relevant. Pure, no I/O; the keyword pattern
/// is compiled once at construction.
#[derive(Debug, Clone)]
pub struct StoryFilter {
    keyword_re: Regex,
    domain: String,
}

impl StoryFilter {
    /// `keywords` must be non-empty with trimmed, non-empty entries
    /// (enforced by `FilterConfig::new`); `domain` may be empty, meaning
    /// no domain filter.
    pub fn new(keywords: &[String], domain: &str) -> Result<Self> {
        let pattern = keyword_pattern(keywords);
        let keyword_re = Regex::new(&pattern)
            .with_context(|| format!("failed to compile keyword pattern {pattern:?}"))?;

        Ok(Self {
            keyword_re,
            domain: domain.to_lowercase(),
        })
    }

    /// A domain match alone is sufficient and short-circuits the keyword
    /// check; a story from the watched domain is relevant whatever its
    /// title says.
    pub fn matches(&self, story: &Story) -> bool {
        if !self.domain.is_empty() && story.url.to_lowercase().contains(&self.domain) {
            return true;
        }

        self.keyword_re.is_match(&story.title)
    }
}

/// Build a single case-insensitive alternation over all keywords, each
/// escaped so metacharacters match literally (`c++` means the text "c++").
///
/// The word boundary is simulated with `(^|[^A-Za-z0-9_])` / `($|[^A-Za-z0-9_])`
/// rather than `\b` so that the keyword "go" does not match inside "golang".
fn keyword_pattern(keywords: &[String]) -> String {
    let escaped: Vec<String> = keywords.iter().map(|kw| regex::escape(kw)).collect();
    format!(
        "(?i)(^|[^A-Za-z0-9_])({})($|[^A-Za-z0-9_])",
        escaped.join("|")
    )
}
