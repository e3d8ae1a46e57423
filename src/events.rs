//! Records emitted by `claude -p --output-format stream-json`.
//!
//! Only the fields the reducer reads are modelled. Every field carries a
//! default so that a record with the right discriminant never fails to
//! decode because of a missing detail; unknown discriminants land in the
//! `Other` variants instead of failing.

use serde::Deserialize;
use serde_json::Value;

/// Top-level record, discriminated by its `type` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum StreamRecord {
    /// Partial message event (`--include-partial-messages`).
    #[serde(rename = "stream_event")]
    StreamEvent { event: StreamEvent },
    /// A complete assistant message.
    #[serde(rename = "assistant")]
    Assistant {
        #[serde(default)]
        message: AssistantMessage,
    },
    /// Final session statistics.
    #[serde(rename = "result")]
    Result(ResultRecord),
    #[serde(other)]
    Other,
}

/// Inner event wrapped by `stream_event`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum StreamEvent {
    #[serde(rename = "message_start")]
    MessageStart,
    #[serde(rename = "content_block_start")]
    ContentBlockStart { content_block: BlockStart },
    #[serde(rename = "content_block_delta")]
    ContentBlockDelta { delta: Delta },
    #[serde(rename = "content_block_stop")]
    ContentBlockStop,
    #[serde(other)]
    Other,
}

/// The `content_block` of a `content_block_start`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BlockStart {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "tool_use")]
    ToolUse {
        #[serde(default = "unknown_tool")]
        name: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Delta {
    #[serde(rename = "text_delta")]
    TextDelta {
        #[serde(default)]
        text: String,
    },
    #[serde(rename = "input_json_delta")]
    InputJsonDelta {
        #[serde(default)]
        partial_json: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

/// A block inside a complete assistant message.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    #[serde(rename = "text")]
    Text {
        #[serde(default)]
        text: String,
    },
    #[serde(rename = "tool_use")]
    ToolUse {
        #[serde(default = "unknown_tool")]
        name: String,
        #[serde(default)]
        input: Value,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultRecord {
    #[serde(default)]
    pub duration_ms: f64,
    #[serde(default)]
    pub total_cost_usd: f64,
    #[serde(default)]
    pub num_turns: Option<u64>,
}

fn unknown_tool() -> String {
    "unknown".to_string()
}
