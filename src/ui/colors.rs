//! Shared color palette for the live view (256-color ANSI).

use crossterm::style::Color;

// ── Content ─────────────────────────────────────────────────────────
pub const NARRATION: Color = Color::AnsiValue(114);
pub const TOOL_ACTION: Color = Color::AnsiValue(81);

// ── Chrome ──────────────────────────────────────────────────────────
pub const HEADER: Color = Color::AnsiValue(221);
pub const MUTED: Color = Color::AnsiValue(243);
