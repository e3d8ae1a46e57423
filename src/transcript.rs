//! Plain-text commentary for later text-to-speech playback.
//!
//! Lines are buffered for the whole session and written once, at the end,
//! to the destination given on the command line.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

use crate::events::ResultRecord;

pub const TITLE: &str = "Claude Game Player Commentary";

/// Append-only list of finalized commentary lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// A narration paragraph followed by a blank separator line.
    pub fn push_narration(&mut self, text: &str) {
        self.lines.push(text.trim().to_string());
        self.lines.push(String::new());
    }

    pub fn push_action(&mut self, label: &str) {
        self.lines.push(format!("[Action: {label}]"));
    }

    /// A blank line followed by the session summary.
    pub fn push_summary(&mut self, result: &ResultRecord, fallback_turns: u64) {
        self.lines.push(String::new());
        self.lines.push(session_summary(result, fallback_turns));
    }

    /// Full file contents: a two-line comment header, a blank line, then the
    /// buffered lines, newline-joined with no trailing newline.
    pub fn render(&self, started_at: &str) -> String {
        let header = [format!("# {TITLE}"), format!("# {started_at}"), String::new()];
        header
            .iter()
            .chain(self.lines.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write the transcript to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path, started_at: &str) -> Result<()> {
        fs::write(path, self.render(started_at))
            .wrap_err_with(|| format!("Failed to write transcript to {}", path.display()))?;
        tracing::info!(path = %path.display(), lines = self.lines.len(), "transcript written");
        Ok(())
    }
}

/// `[Session: <turns> turns, <seconds>s, $<cost>]`
pub fn session_summary(result: &ResultRecord, fallback_turns: u64) -> String {
    let turns = result.num_turns.unwrap_or(fallback_turns);
    let seconds = result.duration_ms / 1000.0;
    format!(
        "[Session: {turns} turns, {seconds:.1}s, ${:.4}]",
        result.total_cost_usd
    )
}
