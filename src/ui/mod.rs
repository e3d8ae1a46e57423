//! Live terminal view: colorized narration, tool indicators and session
//! chrome, written to any `io::Write` and flushed after every emission.

pub mod colors;
pub mod wrap;

use std::io::{self, Write};
use std::path::Path;

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};

use crate::reducer::Render;

use wrap::StreamWrap;

pub const TITLE: &str = "Claude Game Player";
const HEAVY_RULE: char = '━';
const LIGHT_RULE: char = '─';
const ACTION_MARKER: char = '▸';

pub struct TerminalRenderer<W: Write> {
    out: W,
    wrap: StreamWrap,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, wrap_width: usize) -> Self {
        Self {
            out,
            wrap: StreamWrap::new(wrap_width),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Title block printed before the first record.
    pub fn header(&mut self, started_at: &str) -> io::Result<()> {
        let rule = self.rule(HEAVY_RULE, self.wrap.width());
        queue!(self.out, Print("\n"))?;
        self.line(colors::HEADER, Some(Attribute::Bold), &rule)?;
        self.line(colors::HEADER, Some(Attribute::Bold), &format!("  {TITLE}"))?;
        self.line(colors::MUTED, None, &format!("  {started_at}"))?;
        self.line(colors::HEADER, Some(Attribute::Bold), &rule)?;
        queue!(self.out, Print("\n"))?;
        self.out.flush()
    }

    pub fn render(&mut self, effect: &Render) -> io::Result<()> {
        match effect {
            Render::Narration(text) => {
                let wrapped = self.wrap.push(text);
                self.styled(colors::NARRATION, None, &wrapped)?;
            }
            Render::NarrationEnd => {
                self.wrap.reset();
                queue!(self.out, Print("\n"))?;
            }
            Render::ToolAction { label, detail } => {
                self.wrap.reset();
                let detail = detail.as_deref().unwrap_or("");
                queue!(self.out, Print("\n"))?;
                self.line(
                    colors::TOOL_ACTION,
                    Some(Attribute::Dim),
                    &format!("  {ACTION_MARKER} {label}{detail}"),
                )?;
            }
            Render::TurnSeparator => {
                self.wrap.reset();
                let rule = self.rule(LIGHT_RULE, self.wrap.width() / 2);
                queue!(self.out, Print("\n"))?;
                self.line(colors::MUTED, None, &rule)?;
                queue!(self.out, Print("\n"))?;
            }
            Render::SessionComplete => {
                let rule = self.rule(HEAVY_RULE, self.wrap.width());
                queue!(self.out, Print("\n\n"))?;
                self.line(colors::HEADER, Some(Attribute::Bold), &rule)?;
                self.line(colors::HEADER, Some(Attribute::Bold), "  Session Complete")?;
                self.line(colors::HEADER, Some(Attribute::Bold), &rule)?;
                queue!(self.out, Print("\n"))?;
            }
        }
        self.out.flush()
    }

    /// Footer naming the transcript file.
    pub fn saved_notice(&mut self, path: &Path) -> io::Result<()> {
        queue!(self.out, Print("\n"))?;
        self.line(
            colors::MUTED,
            None,
            &format!("Commentary saved to: {}", path.display()),
        )?;
        queue!(self.out, Print("\n"))?;
        self.out.flush()
    }

    fn rule(&self, ch: char, width: usize) -> String {
        std::iter::repeat(ch).take(width).collect()
    }

    fn line(&mut self, color: Color, attr: Option<Attribute>, text: &str) -> io::Result<()> {
        self.styled(color, attr, text)?;
        queue!(self.out, Print("\n"))
    }

    fn styled(&mut self, color: Color, attr: Option<Attribute>, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        queue!(self.out, SetForegroundColor(color))?;
        if let Some(attr) = attr {
            queue!(self.out, SetAttribute(attr))?;
        }
        queue!(self.out, Print(text), SetAttribute(Attribute::Reset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drop CSI sequences so assertions can look at the visible text.
    fn visible(bytes: &[u8]) -> String {
        let raw = String::from_utf8(bytes.to_vec()).unwrap();
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

    fn render_all(width: usize, effects: &[Render]) -> Vec<u8> {
        let mut renderer = TerminalRenderer::new(Vec::new(), width);
        for effect in effects {
            renderer.render(effect).unwrap();
        }
        renderer.into_inner()
    }

    #[test]
    fn test_header_layout() {
        let mut renderer = TerminalRenderer::new(Vec::new(), 20);
        renderer.header("2026-01-02 03:04:05").unwrap();
        let text = visible(&renderer.into_inner());
        let rule = "━".repeat(20);
        assert_eq!(
            text,
            format!("\n{rule}\n  Claude Game Player\n  2026-01-02 03:04:05\n{rule}\n\n")
        );
    }

    #[test]
    fn test_narration_is_colored_and_wrapped() {
        let bytes = render_all(
            20,
            &[
                Render::Narration("The board has loaded and ".into()),
                Render::Narration("the first move is mine.".into()),
                Render::NarrationEnd,
            ],
        );
        let raw = String::from_utf8(bytes.clone()).unwrap();
        assert!(raw.contains("\x1b[38;5;114m"));
        assert_eq!(
            visible(&bytes),
            "The board has loaded\nand the first move\nis mine.\n"
        );
    }

    #[test]
    fn test_tool_action_line() {
        let bytes = render_all(
            20,
            &[Render::ToolAction {
                label: "Running command".into(),
                detail: None,
            }],
        );
        let raw = String::from_utf8(bytes.clone()).unwrap();
        assert!(raw.contains("\x1b[38;5;81m"));
        assert_eq!(visible(&bytes), "\n  ▸ Running command\n");
    }

    #[test]
    fn test_tool_action_is_never_wrapped() {
        let detail = format!(" → {}", "x".repeat(50));
        let bytes = render_all(
            20,
            &[Render::ToolAction {
                label: "Typing".into(),
                detail: Some(detail.clone()),
            }],
        );
        assert_eq!(visible(&bytes), format!("\n  ▸ Typing{detail}\n"));
    }

    #[test]
    fn test_separator_is_half_width() {
        let bytes = render_all(40, &[Render::TurnSeparator]);
        assert_eq!(visible(&bytes), format!("\n{}\n\n", "─".repeat(20)));
    }

    #[test]
    fn test_session_complete_banner() {
        let bytes = render_all(20, &[Render::SessionComplete]);
        let rule = "━".repeat(20);
        assert_eq!(
            visible(&bytes),
            format!("\n\n{rule}\n  Session Complete\n{rule}\n\n")
        );
    }

    #[test]
    fn test_narration_end_resets_wrap_column() {
        let bytes = render_all(
            20,
            &[
                Render::Narration("nineteen characters".into()),
                Render::NarrationEnd,
                Render::Narration("next".into()),
            ],
        );
        assert_eq!(visible(&bytes), "nineteen characters\nnext");
    }

    #[test]
    fn test_tool_action_resets_wrap_column() {
        let bytes = render_all(
            20,
            &[
                Render::Narration("nineteen characters".into()),
                Render::ToolAction {
                    label: "Clicking".into(),
                    detail: None,
                },
                Render::Narration("short words".into()),
            ],
        );
        assert_eq!(
            visible(&bytes),
            "nineteen characters\n  ▸ Clicking\nshort words"
        );
    }

    #[test]
    fn test_separator_resets_wrap_column() {
        let bytes = render_all(
            20,
            &[
                Render::Narration("nineteen characters".into()),
                Render::TurnSeparator,
                Render::Narration("next turn".into()),
            ],
        );
        assert_eq!(
            visible(&bytes),
            format!("nineteen characters\n{}\n\nnext turn", "─".repeat(10))
        );
    }

    #[test]
    fn test_saved_notice() {
        let mut renderer = TerminalRenderer::new(Vec::new(), 20);
        renderer.saved_notice(Path::new("out/commentary.txt")).unwrap();
        assert_eq!(
            visible(&renderer.into_inner()),
            "\nCommentary saved to: out/commentary.txt\n\n"
        );
    }
}
