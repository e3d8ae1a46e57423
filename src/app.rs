use std::io::{BufRead, Write};
use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};

use crate::events::StreamRecord;
use crate::ingest::RecordStream;
use crate::reducer::Reducer;
use crate::transcript::Transcript;
use crate::ui::TerminalRenderer;

/// One narration session: reducer, live view, and the optional transcript
/// destination.
pub struct App<W: Write> {
    pub reducer: Reducer,
    pub renderer: TerminalRenderer<W>,
    /// Where the transcript goes at the end; `None` skips writing it.
    pub transcript_path: Option<PathBuf>,
    /// Local start time, shown in the header and the transcript.
    pub started_at: String,
}

impl<W: Write> App<W> {
    pub fn new(out: W, wrap_width: usize, transcript_path: Option<PathBuf>, started_at: String) -> Self {
        Self {
            reducer: Reducer::new(),
            renderer: TerminalRenderer::new(out, wrap_width),
            transcript_path,
            started_at,
        }
    }

    pub fn start(&mut self) -> Result<()> {
        self.renderer
            .header(&self.started_at)
            .wrap_err("Failed to write to the terminal")
    }

    /// Feed a single raw line. Lines that do not decode change nothing.
    #[cfg(test)]
    pub fn process_line(&mut self, line: &str) -> Result<()> {
        use crate::ingest::claude::{self, Decoded};

        match claude::decode_line(line) {
            Decoded::Record(record) => self.process_record(*record),
            Decoded::Blank | Decoded::Malformed => Ok(()),
        }
    }

    pub fn process_record(&mut self, record: StreamRecord) -> Result<()> {
        for effect in self.reducer.apply(record) {
            self.renderer
                .render(&effect)
                .wrap_err("Failed to write to the terminal")?;
        }
        Ok(())
    }

    /// Consume the whole input, in order, until it is exhausted.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        let mut records = RecordStream::new(input);
        let mut decoded = 0usize;
        for record in records.by_ref() {
            self.process_record(record?)?;
            decoded += 1;
        }
        tracing::debug!(
            lines = records.lines_read(),
            decoded,
            skipped = records.skipped(),
            "input exhausted"
        );
        Ok(())
    }

    /// Write the transcript once, if a destination was given.
    pub fn finish(&mut self) -> Result<()> {
        if let Some(path) = &self.transcript_path {
            self.reducer.transcript().write_to(path, &self.started_at)?;
            self.renderer
                .saved_notice(path)
                .wrap_err("Failed to write to the terminal")?;
        }
        Ok(())
    }

    pub fn transcript(&self) -> &Transcript {
        self.reducer.transcript()
    }
}
