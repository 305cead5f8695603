use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::Story;

pub struct ReportGenerator;

impl ReportGenerator {
    /// Render the matched stories as a static HTML page: the configured
    /// keywords and domain in the header, then one entry per story with
    /// its origin link and Hacker News discussion link.
    pub fn generate(stories: &[Story], keywords: &[String], domain: &str) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str("  <title>Matched Hacker News Stories</title>\n");
        html.push_str("  <style>\n");
        html.push_str("    body { font-family: Arial, sans-serif; max-width: 900px; margin: 40px auto; padding: 0 20px; line-height: 1.6; }\n");
        html.push_str("    h1 { color: #2c3e50; border-bottom: 3px solid #ff6600; padding-bottom: 10px; }\n");
        html.push_str("    .filters { color: #7f8c8d; font-size: 0.9em; margin-bottom: 30px; }\n");
        html.push_str("    .story { margin: 15px 0; padding: 10px; background-color: #f8f9fa; border-radius: 4px; }\n");
        html.push_str("    .story h2 { font-size: 1.1em; margin: 0 0 5px 0; color: #2c3e50; }\n");
        html.push_str("    .link { color: #3498db; text-decoration: none; }\n");
        html.push_str("    .link:hover { text-decoration: underline; }\n");
        html.push_str("    .empty { color: #7f8c8d; font-style: italic; }\n");
        html.push_str("  </style>\n");
        html.push_str("</head>\n<body>\n");

        html.push_str("<h1>Matched Hacker News Stories</h1>\n");
        html.push_str("<div class=\"filters\">\n");
        html.push_str(&format!(
            "  Keywords: {}<br>\n",
            Self::escape_html(&keywords.join(", "))
        ));
        if !domain.is_empty() {
            html.push_str(&format!("  Domain: {}<br>\n", Self::escape_html(domain)));
        }
        html.push_str(&format!("  Matched: {} stories\n", stories.len()));
        html.push_str("</div>\n");

        if stories.is_empty() {
            html.push_str("<p class=\"empty\">No stories matched this run.</p>\n");
        }

        for story in stories {
            html.push_str("<div class=\"story\">\n");
            html.push_str(&format!(
                "  <h2>{}</h2>\n",
                Self::escape_html(&story.title)
            ));
            if !story.url.is_empty() {
                html.push_str(&format!(
                    "  <a href=\"{}\" class=\"link\" target=\"_blank\">{}</a><br>\n",
                    story.url,
                    Self::escape_html(&story.url)
                ));
            }
            html.push_str(&format!(
                "  <a href=\"{}\" class=\"link\" target=\"_blank\">HN discussion</a>\n",
                story.discussion_url()
            ));
            html.push_str("</div>\n");
        }

        html.push_str("</body>\n</html>");
        html
    }

    pub fn save(content: &str, path: &Path) -> Result<()> {
        fs::write(path, content)
            .with_context(|| format!("Failed to write HTML report {}", path.display()))
    }

    fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }
}
