use serde_json::Value;

use crate::events::StreamRecord;

/// Outcome of decoding one input line.
#[derive(Debug)]
pub enum Decoded {
    Record(Box<StreamRecord>),
    /// Empty or whitespace-only line.
    Blank,
    /// Not a JSON object, or an object whose known discriminant carries an
    /// unusable payload. Producers interleave diagnostics with the event
    /// stream, so this is skipped rather than reported.
    Malformed,
}

/// Decode a raw line. Bytes that are not UTF-8 are noise like any other.
pub fn decode_bytes(line: &[u8]) -> Decoded {
    match std::str::from_utf8(line) {
        Ok(text) => decode_line(text),
        Err(err) => {
            tracing::trace!(%err, "line is not valid UTF-8");
            Decoded::Malformed
        }
    }
}

/// Decode a single line of `stream-json` output.
pub fn decode_line(line: &str) -> Decoded {
    let line = line.trim();
    if line.is_empty() {
        return Decoded::Blank;
    }

    // Decode to a Value first so that non-object JSON (numbers, arrays)
    // is rejected the same way as text noise.
    let value: Value = match serde_json::from_str(line) {
        Ok(v @ Value::Object(_)) => v,
        _ => return Decoded::Malformed,
    };

    match serde_json::from_value::<StreamRecord>(value) {
        Ok(record) => Decoded::Record(Box::new(record)),
        Err(err) => {
            tracing::trace!(%err, "record did not match the stream-json schema");
            Decoded::Malformed
        }
    }
}
