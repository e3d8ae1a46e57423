use unicode_width::UnicodeWidthStr;

/// Word-wraps narration that arrives in arbitrary fragments.
///
/// The column is carried across calls to [`StreamWrap::push`], so a word
/// split over two fragments is still treated as one word. Text already
/// written is never moved: if the tail of a word overflows, it overflows.
#[derive(Debug, Clone)]
pub struct StreamWrap {
    width: usize,
    column: usize,
    /// Whitespace seen since the last word on this line.
    pending_space: bool,
    /// The last fragment ended inside a word.
    in_word: bool,
}

impl StreamWrap {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            column: 0,
            pending_space: false,
            in_word: false,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Forget the current line, e.g. after the span ended with a newline.
    pub fn reset(&mut self) {
        self.column = 0;
        self.pending_space = false;
        self.in_word = false;
    }

    /// Wrap the next fragment, returning the text to write.
    pub fn push(&mut self, fragment: &str) -> String {
        let mut out = String::with_capacity(fragment.len() + 1);
        let mut rest = fragment;

        while let Some(ch) = rest.chars().next() {
            if ch == '\n' {
                out.push('\n');
                self.reset();
                rest = &rest[1..];
            } else if ch.is_whitespace() {
                if self.column > 0 {
                    self.pending_space = true;
                }
                self.in_word = false;
                rest = &rest[ch.len_utf8()..];
            } else {
                let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                self.word(&rest[..end], &mut out);
                rest = &rest[end..];
            }
        }

        out
    }

    fn word(&mut self, word: &str, out: &mut String) {
        let width = word.width();
        if !self.in_word && self.pending_space {
            if self.column + 1 + width > self.width {
                out.push('\n');
                self.column = 0;
            } else {
                out.push(' ');
                self.column += 1;
            }
        }
        out.push_str(word);
        self.column += width;
        self.pending_space = false;
        self.in_word = true;
    }
}
