pub mod claude;

use std::io::BufRead;

use color_eyre::eyre::{Result, WrapErr};

use crate::events::StreamRecord;

/// Iterates the records of a newline-delimited stream in input order.
/// Lines that do not decode are skipped and counted, never surfaced.
pub struct RecordStream<R> {
    reader: R,
    line: Vec<u8>,
    line_number: usize,
    skipped: usize,
}

impl<R: BufRead> RecordStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            line_number: 0,
            skipped: 0,
        }
    }

    /// Number of lines read so far.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    /// Number of non-empty lines that failed to decode.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<R: BufRead> Iterator for RecordStream<R> {
    type Item = Result<StreamRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line.clear();
            match self.reader.read_until(b'\n', &mut self.line) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_number += 1;
                    match claude::decode_bytes(&self.line) {
                        claude::Decoded::Record(record) => return Some(Ok(*record)),
                        claude::Decoded::Blank => {}
                        claude::Decoded::Malformed => {
                            self.skipped += 1;
                            tracing::debug!(line = self.line_number, "skipping undecodable line");
                        }
                    }
                }
                Err(err) => {
                    let line = self.line_number + 1;
                    return Some(Err(err).wrap_err_with(|| format!("failed reading input line {line}")));
                }
            }
        }
    }
}
