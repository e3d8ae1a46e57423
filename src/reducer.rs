//! The event reducer: one decoded record in, state updated, transcript
//! appended, and the terminal effects to perform returned in order.

use serde_json::Value;

use crate::events::{AssistantMessage, BlockStart, ContentBlock, Delta, ResultRecord, StreamEvent, StreamRecord};
use crate::state::{BlockState, ReducerState};
use crate::tools;
use crate::transcript::Transcript;

/// A terminal effect produced by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Render {
    /// A fragment of narration, written as soon as it arrives.
    Narration(String),
    /// The current narration span is finished.
    NarrationEnd,
    ToolAction { label: String, detail: Option<String> },
    TurnSeparator,
    SessionComplete,
}

#[derive(Debug, Default)]
pub struct Reducer {
    state: ReducerState,
    transcript: Transcript,
}

impl Reducer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ReducerState {
        &self.state
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Apply one record.
    pub fn apply(&mut self, record: StreamRecord) -> Vec<Render> {
        let mut out = Vec::new();
        match record {
            StreamRecord::StreamEvent { event } => self.stream_event(event, &mut out),
            StreamRecord::Assistant { message } => self.assistant_message(message, &mut out),
            StreamRecord::Result(result) => self.session_result(&result, &mut out),
            StreamRecord::Other => tracing::trace!("ignoring unrecognized record"),
        }
        out
    }

    fn stream_event(&mut self, event: StreamEvent, out: &mut Vec<Render>) {
        match event {
            StreamEvent::MessageStart => {
                self.state.turn_count += 1;
                if self.state.turn_count > 1 {
                    out.push(Render::TurnSeparator);
                }
            }

            StreamEvent::ContentBlockStart { content_block } => match content_block {
                BlockStart::Text => self.open(BlockState::StreamingText {
                    buffer: String::new(),
                }),
                BlockStart::ToolUse { name } => self.open(BlockState::StreamingTool {
                    name,
                    args_raw: String::new(),
                }),
                BlockStart::Other => {}
            },

            StreamEvent::ContentBlockDelta { delta } => self.delta(delta, out),

            StreamEvent::ContentBlockStop => self.close_block(out),

            StreamEvent::Other => {}
        }
    }

    fn delta(&mut self, delta: Delta, out: &mut Vec<Render>) {
        match delta {
            Delta::TextDelta { text } => match &mut self.state.block {
                BlockState::StreamingText { buffer } => {
                    buffer.push_str(&text);
                    out.push(Render::Narration(text));
                }
                // Narration without a preceding block start still streams.
                BlockState::Idle => {
                    self.state.block = BlockState::StreamingText {
                        buffer: text.clone(),
                    };
                    out.push(Render::Narration(text));
                }
                block => tracing::debug!(state = %block, "text delta while a tool call is open"),
            },
            Delta::InputJsonDelta { partial_json } => match &mut self.state.block {
                BlockState::StreamingTool { args_raw, .. } => args_raw.push_str(&partial_json),
                block => tracing::debug!(state = %block, "argument fragment outside a tool call"),
            },
            Delta::Other => {}
        }
    }

    fn open(&mut self, block: BlockState) {
        let previous = self.state.open(block);
        if previous != BlockState::Idle {
            tracing::debug!(discarded = %previous, "block started before the previous one stopped");
        }
    }

    fn close_block(&mut self, out: &mut Vec<Render>) {
        match &self.state.block {
            BlockState::StreamingText { buffer } if !buffer.trim().is_empty() => {
                self.transcript.push_narration(buffer);
                out.push(Render::NarrationEnd);
                self.state.close();
            }
            // A whitespace-only span stays open until something replaces it.
            BlockState::StreamingText { .. } => {}
            BlockState::StreamingTool { .. } => {
                if let BlockState::StreamingTool { name, args_raw } = self.state.close() {
                    let args = tools::decode_arguments(&args_raw);
                    self.tool_action(&name, args.as_ref(), out);
                }
            }
            BlockState::Idle => {}
        }
    }

    fn tool_action(
        &mut self,
        name: &str,
        input: Option<&serde_json::Map<String, Value>>,
        out: &mut Vec<Render>,
    ) {
        let label = tools::friendly_label(name);
        self.transcript.push_action(&label);
        out.push(Render::ToolAction {
            label,
            detail: tools::action_detail(input),
        });
    }

    /// Complete messages arrive when the producer is not streaming partial
    /// messages. Text is skipped while a streamed span is still open so the
    /// same narration is not shown twice; a producer that emits both forms
    /// after the span has closed will still duplicate it.
    fn assistant_message(&mut self, message: AssistantMessage, out: &mut Vec<Render>) {
        for block in message.content {
            match block {
                ContentBlock::Text { text } => {
                    if text.trim().is_empty() || self.state.in_text_block() {
                        continue;
                    }
                    self.transcript.push_narration(&text);
                    out.push(Render::Narration(text.trim_end().to_string()));
                    out.push(Render::NarrationEnd);
                }
                ContentBlock::ToolUse { name, input } => {
                    self.tool_action(&name, input.as_object(), out);
                }
                ContentBlock::Other => {}
            }
        }
    }

    fn session_result(&mut self, result: &ResultRecord, out: &mut Vec<Render>) {
        out.push(Render::SessionComplete);
        self.transcript.push_summary(result, self.state.turn_count);
    }
}
