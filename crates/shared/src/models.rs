use serde::{Deserialize, Serialize};

/// One ranked item from the Hacker News listing.
///
/// `title` and `url` are serde-defaulted because the item endpoint omits
/// them for some item kinds (e.g. Ask HN posts carry no `url`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

impl Story {
    /// The Hacker News comment page for this story, derived from its id.
    pub fn discussion_url(&self) -> String {
        format!("https://news.ycombinator.com/item?id={}", self.id)
    }
}

/// Totals for one pipeline run. `matched` preserves fetch order, which is
/// the listing's ranking order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub examined: usize,
    pub failed: usize,
    pub missing: usize,
    pub matched: Vec<Story>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discussion_url_derived_from_id() {
        let story = Story {
            id: 8863,
            title: "My YC app".to_string(),
            url: String::new(),
        };
        assert_eq!(
            story.discussion_url(),
            "https://news.ycombinator.com/item?id=8863"
        );
    }

    #[test]
    fn test_story_deserializes_without_url() {
        let story: Story =
            serde_json::from_str(r#"{"id": 1, "title": "Ask HN: something"}"#).unwrap();
        assert_eq!(story.id, 1);
        assert_eq!(story.title, "Ask HN: something");
        assert!(story.url.is_empty());
    }

    #[test]
    fn test_story_ignores_unknown_fields() {
        let story: Story = serde_json::from_str(
            r#"{"id": 2, "title": "T", "url": "https://example.com", "by": "pg", "score": 99, "type": "story"}"#,
        )
        .unwrap();
        assert_eq!(story.url, "https://example.com");
    }
}
