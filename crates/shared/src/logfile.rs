use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::models::Story;

/// Tag carried by every match line; the sort step keeps only lines that
/// contain it.
pub const MATCH_TAG: &str = "[MATCH]";

/// Append-only log of matched stories, backed by a single file handle held
/// open for the whole run. The handle is opened read+write so the
/// finalizing sort can re-read what the pipeline wrote without reopening.
pub struct MatchLog {
    file: File,
}

impl MatchLog {
    pub fn open(path: &Path) -> Result<Self> {
        // O_APPEND keeps pipeline writes at the end even though the same
        // handle is later rewound to read everything back for sorting.
        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        Ok(Self { file })
    }

    /// Write one tagged line for a matched story. The timestamp prefix is
    /// fixed-width and zero-padded, which is what makes the lexicographic
    /// sort in [`MatchLog::sort_and_rewrite`] chronological.
    pub fn append(&mut self, story: &Story) -> Result<()> {
        let timestamp = Local::now().format("%Y/%m/%d %H:%M:%S");
        writeln!(
            self.file,
            "{timestamp} {MATCH_TAG} Title: {:?} URL: {}",
            story.title, story.url
        )
        .context("Failed to append to log file")?;

        Ok(())
    }

    /// Finalization step: rewrite the file to contain only the tagged match
    /// lines, most recent first. Destructive — untagged lines are dropped.
    /// Must run once, after the pipeline has stopped writing.
    pub fn sort_and_rewrite(&mut self) -> Result<()> {
        self.file
            .seek(SeekFrom::Start(0))
            .context("Failed to seek log file")?;

        let mut content = String::new();
        self.file
            .read_to_string(&mut content)
            .context("Failed to read log file")?;

        let mut lines: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| line.contains(MATCH_TAG))
            .collect();

        // Descending lexicographic order equals reverse chronological order
        // as long as every line starts with the same timestamp format.
        lines.sort_unstable_by(|a, b| b.cmp(a));

        self.file
            .seek(SeekFrom::Start(0))
            .context("Failed to rewind log file")?;
        self.file.set_len(0).context("Failed to truncate log file")?;

        for line in &lines {
            writeln!(self.file, "{line}").context("Failed to rewrite log file")?;
        }
        self.file.flush().context("Failed to flush log file")?;

        Ok(())
    }
}
