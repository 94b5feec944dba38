//! Styled output rows.

use std::fmt;

/// Color role of a span, resolved to concrete colors by the render sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    /// Selected option or field label
    Highlight,
    /// Selected submit button, notifications
    Success,
    /// Selected cancel slot, error prefixes
    Alert,
}

/// A run of text sharing one tone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Tone::Plain)
    }

    pub fn styled(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    /// Width in terminal columns, one per character
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// One output row of a frame.
///
/// Tones never contribute to the width; escape codes are added by the sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderLine {
    spans: Vec<Span>,
}

impl RenderLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_spans(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Append a span, skipping empty text
    pub fn push(&mut self, span: Span) {
        if !span.text.is_empty() {
            self.spans.push(span);
        }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Width in terminal columns
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// The row's characters without any styling
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl fmt::Display for RenderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_counts_chars_not_bytes() {
        let mut line = RenderLine::new();
        line.push(Span::plain("#"));
        line.push(Span::styled("▸", Tone::Highlight));
        line.push(Span::plain("ok"));
        assert_eq!(line.width(), 4);
        assert_eq!(line.text(), "#▸ok");
    }

    #[test]
    fn test_empty_spans_skipped() {
        let mut line = RenderLine::new();
        line.push(Span::plain(""));
        assert!(line.spans().is_empty());
    }
}
