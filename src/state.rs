/// Which content block, if any, is currently open.
///
/// A narration span and a tool call are never open at the same time: each
/// variant owns its own buffer, so leaving a state drops its buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BlockState {
    #[default]
    Idle,
    StreamingText {
        buffer: String,
    },
    StreamingTool {
        name: String,
        args_raw: String,
    },
}

impl std::fmt::Display for BlockState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockState::Idle => write!(f, "idle"),
            BlockState::StreamingText { .. } => write!(f, "streaming text"),
            BlockState::StreamingTool { name, .. } => write!(f, "streaming tool {name}"),
        }
    }
}

/// Everything the reducer remembers between records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReducerState {
    pub block: BlockState,
    /// Number of `message_start` events seen.
    pub turn_count: u64,
}

impl ReducerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_text_block(&self) -> bool {
        matches!(self.block, BlockState::StreamingText { .. })
    }

    pub fn text_buffer(&self) -> &str {
        match &self.block {
            BlockState::StreamingText { buffer } => buffer,
            _ => "",
        }
    }

    pub fn pending_tool_name(&self) -> Option<&str> {
        match &self.block {
            BlockState::StreamingTool { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn pending_tool_args_raw(&self) -> &str {
        match &self.block {
            BlockState::StreamingTool { args_raw, .. } => args_raw,
            _ => "",
        }
    }

    /// Replace the open block, returning whatever was open before.
    pub fn open(&mut self, block: BlockState) -> BlockState {
        std::mem::replace(&mut self.block, block)
    }

    /// Close the open block and return it.
    pub fn close(&mut self) -> BlockState {
        std::mem::take(&mut self.block)
    }
}
