#![allow(dead_code)]

use std::path::PathBuf;

use commentary::app::App;

pub const STARTED_AT: &str = "2026-02-14 09:30:00";

/// Build an app writing the live view into a byte buffer.
pub fn app(wrap_width: usize, transcript: Option<PathBuf>) -> App<Vec<u8>> {
    App::new(Vec::new(), wrap_width, transcript, STARTED_AT.to_string())
}

/// Visible terminal text with ANSI escape sequences removed.
pub fn visible(bytes: &[u8]) -> String {
    let raw = String::from_utf8_lossy(bytes);
    let mut out = String::new();
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(ch);
        }
    }
    out
}

fn stream_event(inner: &str) -> String {
    format!(r#"{{"type":"stream_event","event":{inner},"session_id":"s1","parent_tool_use_id":null}}"#)
}

pub fn message_start() -> String {
    stream_event(r#"{"type":"message_start","message":{"id":"msg_1","type":"message","role":"assistant","content":[]}}"#)
}

pub fn text_start() -> String {
    stream_event(r#"{"type":"content_block_start","index":0,"content_block":{"type":"text","text":""}}"#)
}

pub fn text_delta(text: &str) -> String {
    let text = serde_json::to_string(text).unwrap();
    stream_event(&format!(
        r#"{{"type":"content_block_delta","index":0,"delta":{{"type":"text_delta","text":{text}}}}}"#
    ))
}

pub fn tool_start(name: &str) -> String {
    stream_event(&format!(
        r#"{{"type":"content_block_start","index":1,"content_block":{{"type":"tool_use","id":"toolu_01","name":"{name}","input":{{}}}}}}"#
    ))
}

pub fn json_delta(partial: &str) -> String {
    let partial = serde_json::to_string(partial).unwrap();
    stream_event(&format!(
        r#"{{"type":"content_block_delta","index":1,"delta":{{"type":"input_json_delta","partial_json":{partial}}}}}"#
    ))
}

pub fn block_stop() -> String {
    stream_event(r#"{"type":"content_block_stop","index":0}"#)
}

pub fn message_stop() -> String {
    stream_event(r#"{"type":"message_stop"}"#)
}

/// A complete assistant message with a single tool_use block.
pub fn assistant_tool(name: &str, input_json: &str) -> String {
    format!(
        r#"{{"type":"assistant","message":{{"role":"assistant","content":[{{"type":"tool_use","id":"toolu_02","name":"{name}","input":{input_json}}}]}},"session_id":"s1"}}"#
    )
}

/// A complete assistant message with a single text block.
pub fn assistant_text(text: &str) -> String {
    let text = serde_json::to_string(text).unwrap();
    format!(
        r#"{{"type":"assistant","message":{{"role":"assistant","content":[{{"type":"text","text":{text}}}]}},"session_id":"s1"}}"#
    )
}

pub fn result(duration_ms: u64, cost: f64, turns: u64) -> String {
    format!(
        r#"{{"type":"result","subtype":"success","is_error":false,"duration_ms":{duration_ms},"total_cost_usd":{cost},"num_turns":{turns}}}"#
    )
}

pub fn join(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
