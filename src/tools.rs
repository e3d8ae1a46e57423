//! Friendly labels and short details for tool calls.

use serde_json::{Map, Value};

/// Tool identifiers with a hand-written label.
const TOOL_LABELS: &[(&str, &str)] = &[
    ("mcp__playwright__browser_navigate", "Navigating"),
    ("mcp__playwright__browser_snapshot", "Reading page"),
    ("mcp__playwright__browser_click", "Clicking"),
    ("mcp__playwright__browser_type", "Typing"),
    ("mcp__playwright__browser_take_screenshot", "Taking screenshot"),
    ("mcp__playwright__browser_evaluate", "Running JavaScript"),
    ("mcp__playwright__browser_hover", "Hovering"),
    ("mcp__playwright__browser_press_key", "Pressing key"),
    ("mcp__playwright__browser_select_option", "Selecting option"),
    ("mcp__playwright__browser_fill_form", "Filling form"),
    ("mcp__playwright__browser_drag", "Dragging"),
    ("mcp__playwright__browser_wait_for", "Waiting"),
    ("mcp__playwright__browser_tabs", "Managing tabs"),
    ("mcp__playwright__browser_navigate_back", "Going back"),
    ("mcp__playwright__browser_console_messages", "Reading console"),
    ("mcp__playwright__browser_network_requests", "Checking network"),
    ("mcp__playwright__browser_close", "Closing browser"),
    ("mcp__playwright__browser_resize", "Resizing browser"),
    ("mcp__playwright__browser_install", "Installing browser"),
    ("mcp__playwright__browser_run_code", "Running code"),
    ("Bash", "Running command"),
    ("Read", "Reading file"),
    ("Write", "Writing file"),
    ("Edit", "Editing file"),
    ("Glob", "Finding files"),
    ("Grep", "Searching code"),
    ("WebFetch", "Fetching web page"),
    ("WebSearch", "Searching web"),
];

const NAMESPACE_SEPARATOR: &str = "__";

const URL_LIMIT: usize = 60;
const ELEMENT_LIMIT: usize = 50;
const TEXT_LIMIT: usize = 40;
const ELLIPSIS: &str = "...";

/// Resolve a tool identifier to the label shown to viewers.
///
/// Unmapped identifiers lose their MCP namespace (`mcp__server__`), and the
/// remaining snake_case name is title-cased: `mcp__foo__do_thing` becomes
/// `Do Thing`.
pub fn friendly_label(tool_name: &str) -> String {
    if let Some((_, label)) = TOOL_LABELS.iter().find(|(name, _)| *name == tool_name) {
        return (*label).to_string();
    }

    let bare = tool_name
        .rsplit(NAMESPACE_SEPARATOR)
        .next()
        .unwrap_or(tool_name);
    title_case(&bare.replace('_', " "))
}

/// Uppercase the first letter of every alphabetic run and lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// Pick the most telling argument of a tool call, formatted as a ` → ...`
/// suffix. Keys are checked in priority order and the first present wins:
/// `url`, `element` (with `ref`), `ref`, `text`, `key`.
pub fn action_detail(input: Option<&Map<String, Value>>) -> Option<String> {
    let input = input?;

    let detail = if let Some(url) = input.get("url") {
        truncate(&value_text(url), URL_LIMIT, ELLIPSIS)
    } else if let (Some(_), Some(element)) = (input.get("ref"), input.get("element")) {
        truncate(&value_text(element), ELEMENT_LIMIT, "")
    } else if let Some(reference) = input.get("ref") {
        value_text(reference)
    } else if let Some(text) = input.get("text") {
        format!("\"{}\"", truncate(&value_text(text), TEXT_LIMIT, ""))
    } else if let Some(key) = input.get("key") {
        value_text(key)
    } else {
        return None;
    };

    Some(format!(" → {detail}"))
}

/// Best-effort decode of accumulated `input_json_delta` fragments. Anything
/// that is not a JSON object counts as "no arguments".
pub fn decode_arguments(raw: &str) -> Option<Map<String, Value>> {
    if raw.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(err) => {
            tracing::debug!(%err, "tool arguments did not decode, rendering label only");
            None
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Keep at most `limit` characters, appending `marker` when anything was cut.
fn truncate(s: &str, limit: usize, marker: &str) -> String {
    match s.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{marker}", &s[..cut]),
        None => s.to_string(),
    }
}
