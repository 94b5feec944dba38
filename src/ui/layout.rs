//! Fixed-width layout of rows inside the bordered frame.
//!
//! Every row produced here is exactly `cols` characters wide: content is
//! truncated or wrapped while the row is built, then closed with the border.

use crate::domain::{MenuOption, TerminalDimensions};
use crate::ui::line::{RenderLine, Span, Tone};

/// Glyphs and labels used when laying out rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameStyle {
    pub border: char,
    pub pointer: char,
    pub cursor: char,
    pub mask: char,
    pub cancel: String,
    pub error: String,
    pub notice: String,
    pub separator: String,
    pub colors: bool,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            border: '#',
            pointer: '\u{25b8}',
            cursor: '\u{258d}',
            mask: '*',
            cancel: "CANCEL".to_string(),
            error: "Error".to_string(),
            notice: "Notice".to_string(),
            separator: ": ".to_string(),
            colors: true,
        }
    }
}

/// How a labeled row is decorated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLook {
    /// Draw the pointer glyph in the marker column
    pub bulleted: bool,
    /// Color the label with `tone`
    pub highlighted: bool,
    /// Append the cursor glyph and follow the tail of the text
    pub editing: bool,
    pub tone: Tone,
}

impl FieldLook {
    /// Look of a form field: pointer, highlight and cursor all follow focus
    pub fn focused(selected: bool) -> Self {
        Self {
            bulleted: selected,
            highlighted: selected,
            editing: selected,
            tone: Tone::Highlight,
        }
    }

    /// Look of an unbulleted, highlighted, read-only row such as an error
    pub fn banner(tone: Tone) -> Self {
        Self {
            bulleted: false,
            highlighted: true,
            editing: false,
            tone,
        }
    }
}

/// Indent of the detail rows under a card headline
const CARD_INDENT: usize = 3;

/// Row builder for one frame at one terminal width
pub struct Layout<'a> {
    cols: usize,
    style: &'a FrameStyle,
}

impl<'a> Layout<'a> {
    pub fn new(dims: TerminalDimensions, style: &'a FrameStyle) -> Self {
        Self {
            cols: dims.cols as usize,
            style,
        }
    }

    /// Width between the two border characters
    pub fn inner_width(&self) -> usize {
        self.cols.saturating_sub(2)
    }

    /// Full-width border row
    pub fn horizontal_bar(&self) -> RenderLine {
        let mut line = RenderLine::new();
        line.push(Span::plain(repeat(self.style.border, self.cols)));
        line
    }

    /// Bordered row with nothing inside
    pub fn blank(&self) -> RenderLine {
        self.row(Vec::new())
    }

    /// Bordered row: content is cut at the inner width, short content is padded
    pub fn row(&self, content: Vec<Span>) -> RenderLine {
        if self.cols < 2 {
            return self.horizontal_bar();
        }

        let width = self.inner_width();
        let border = self.style.border.to_string();
        let mut line = RenderLine::new();
        line.push(Span::plain(border.clone()));

        let mut used = 0;
        for span in content {
            if used == width {
                break;
            }
            let text: String = span.text.chars().take(width - used).collect();
            used += text.chars().count();
            line.push(Span::styled(text, span.tone));
        }

        line.push(Span::plain(repeat(' ', width - used)));
        line.push(Span::plain(border));
        line
    }

    /// Row with `text` centered; an odd remainder goes to the right
    pub fn centered(&self, text: &str, tone: Tone) -> RenderLine {
        let width = self.inner_width();
        let text: String = text.chars().take(width).collect();
        let left = (width - text.chars().count()) / 2;
        self.row(vec![Span::plain(repeat(' ', left)), Span::styled(text, tone)])
    }

    /// Single-row selectable entry: marker column, then the text
    pub fn option_row(&self, text: &str, selected: bool, tone: Tone) -> RenderLine {
        self.row(vec![self.marker(selected), self.selectable(text, selected, tone)])
    }

    /// Rows of a menu option, dispatched on its variant
    pub fn option_rows(&self, option: &MenuOption, selected: bool) -> Vec<RenderLine> {
        match option {
            MenuOption::Label(text) => vec![self.option_row(text, selected, Tone::Highlight)],
            MenuOption::ActionMarker(text) => vec![self.row(vec![
                self.marker(selected),
                Span::styled("+ ", Tone::Success),
                self.selectable(text, selected, Tone::Success),
            ])],
            MenuOption::UserCard(card) => {
                let headline = format!("{} (@{})", card.full_name(), card.user_id);
                let mut rows = vec![self.option_row(&headline, selected, Tone::Highlight)];
                rows.extend(self.indented(CARD_INDENT, &card.email));
                rows
            }
            MenuOption::RequestCard(card) => {
                let headline = format!("Request from {} (@{})", card.from_name, card.from_user);
                let mut rows = vec![self.option_row(&headline, selected, Tone::Highlight)];
                rows.extend(self.indented(CARD_INDENT, &card.message));
                rows
            }
        }
    }

    /// Single-line labeled field.
    ///
    /// Read-only text is cut to the available width. While editing, an
    /// over-long value shows only its trailing characters followed by the cursor.
    pub fn single_line_field(&self, label: &str, text: &str, look: FieldLook) -> RenderLine {
        let (mut content, prefix_width) = self.label_prefix(label, look);
        let available = self.inner_width().saturating_sub(prefix_width + 1);

        let shown = if look.editing {
            if available == 0 {
                String::new()
            } else {
                let mut tail = tail_chars(text, available - 1);
                tail.push(self.style.cursor);
                tail
            }
        } else {
            text.chars().take(available).collect()
        };

        content.push(Span::plain(shown));
        self.row(content)
    }

    /// Multi-line labeled field.
    ///
    /// The first line renders after the label; the rest wrap by character
    /// count and break on embedded newlines, indented under the text column.
    pub fn multiline_field(&self, label: &str, text: &str, look: FieldLook) -> Vec<RenderLine> {
        let (mut content, prefix_width) = self.label_prefix(label, look);
        let available = self.inner_width().saturating_sub(prefix_width + 1);

        let mut chars: Vec<char> = text.chars().collect();
        if look.editing {
            chars.push(self.style.cursor);
        }

        let first_newline = chars.iter().position(|&c| c == '\n').unwrap_or(chars.len());
        let stop = first_newline.min(available);
        content.push(Span::plain(chars[..stop].iter().collect::<String>()));

        let mut rows = vec![self.row(content)];
        if available > 0 {
            let rest: String = chars[stop..].iter().collect();
            rows.extend(self.indented(prefix_width, &rest));
        }
        rows
    }

    /// Continuation rows of wrapped text starting at column `indent`
    pub fn indented(&self, indent: usize, text: &str) -> Vec<RenderLine> {
        let width = self.inner_width().saturating_sub(indent + 1);
        wrap_chars(text, width)
            .into_iter()
            .map(|chunk| self.row(vec![Span::plain(repeat(' ', indent)), Span::plain(chunk)]))
            .collect()
    }

    /// Rows of an error message
    pub fn error_rows(&self, message: &str) -> Vec<RenderLine> {
        self.multiline_field(&self.style.error, message, FieldLook::banner(Tone::Alert))
    }

    /// Rows of a notification
    pub fn notice_rows(&self, message: &str) -> Vec<RenderLine> {
        self.multiline_field(&self.style.notice, message, FieldLook::banner(Tone::Success))
    }

    fn marker(&self, selected: bool) -> Span {
        if selected {
            Span::plain(self.style.pointer.to_string())
        } else {
            Span::plain(" ")
        }
    }

    fn selectable(&self, text: &str, selected: bool, tone: Tone) -> Span {
        if selected {
            Span::styled(text, tone)
        } else {
            Span::plain(text)
        }
    }

    /// Marker, label and separator, with the width they occupy
    fn label_prefix(&self, label: &str, look: FieldLook) -> (Vec<Span>, usize) {
        let label_span = if look.highlighted {
            Span::styled(label, look.tone)
        } else {
            Span::plain(label)
        };
        let content = vec![
            self.marker(look.bulleted),
            label_span,
            Span::plain(self.style.separator.clone()),
        ];
        let width = content.iter().map(Span::width).sum();
        (content, width)
    }
}

/// Split `text` into rows of at most `width` characters.
///
/// One leading newline is dropped, every embedded newline starts a new row,
/// and rows are cut by raw character count with no regard for words.
/// Empty text, or a zero width, yields no rows.
pub fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() || width == 0 {
        return Vec::new();
    }
    let text = text.strip_prefix('\n').unwrap_or(text);

    let mut rows = Vec::new();
    for segment in text.split('\n') {
        let chars: Vec<char> = segment.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    rows
}

/// The last `n` characters of `text`
fn tail_chars(text: &str, n: usize) -> String {
    let len = text.chars().count();
    text.chars().skip(len.saturating_sub(n)).collect()
}

fn repeat(c: char, n: usize) -> String {
    std::iter::repeat(c).take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RequestCard, UserCard};

    fn layout(cols: u16, style: &FrameStyle) -> Layout<'_> {
        Layout::new(TerminalDimensions::new(24, cols), style)
    }

    fn texts(rows: &[RenderLine]) -> Vec<String> {
        rows.iter().map(RenderLine::text).collect()
    }

    #[test]
    fn test_centered_odd_remainder_goes_right() {
        let style = FrameStyle::default();
        // Inner width 9, text 4 → 2 left, 3 right
        let line = layout(11, &style).centered("MENU", Tone::Plain);
        assert_eq!(line.text(), "#  MENU   #");
    }

    #[test]
    fn test_centered_truncates_overlong_title() {
        let style = FrameStyle::default();
        let line = layout(6, &style).centered("WELCOME", Tone::Plain);
        assert_eq!(line.text(), "#WELC#");
    }

    #[test]
    fn test_single_line_tail_follows_cursor() {
        let style = FrameStyle::default();
        // Inner width 11; prefix "▸ab: " takes 5 and the trailing pad 1 → 5 available
        let lay = layout(13, &style);
        let look = FieldLook::focused(true);
        let line = lay.single_line_field("ab", "abcdefgh", look);
        assert_eq!(line.text(), "#▸ab: efgh▍ #");
        assert_eq!(line.width(), 13);
    }

    #[test]
    fn test_single_line_read_only_truncates_head() {
        let style = FrameStyle::default();
        let line =
            layout(13, &style).single_line_field("ab", "abcdefgh", FieldLook::focused(false));
        assert_eq!(line.text(), "# ab: abcde #");
    }

    #[test]
    fn test_single_line_empty_still_one_row() {
        let style = FrameStyle::default();
        let line = layout(20, &style).single_line_field("Name", "", FieldLook::focused(false));
        assert_eq!(line.text(), "# Name:            #");
    }

    #[test]
    fn test_non_positive_width_renders_label_only() {
        let style = FrameStyle::default();
        let lay = layout(8, &style);
        let line = lay.single_line_field("Username", "secret", FieldLook::focused(true));
        assert_eq!(line.text(), "#▸Usern#");
        assert_eq!(line.width(), 8);

        let rows = lay.multiline_field("Username", "a\nb\nc", FieldLook::focused(true));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].width(), 8);
    }

    #[test]
    fn test_multiline_wraps_by_characters() {
        let style = FrameStyle::default();
        // Inner 14; prefix " Msg: " = 6, pad 1 → 7 per row, indent 6
        let rows =
            layout(16, &style).multiline_field("Msg", "hello world", FieldLook::focused(false));
        assert_eq!(
            texts(&rows),
            vec!["# Msg: hello w #", "#      orld    #"]
        );
    }

    #[test]
    fn test_multiline_breaks_on_newlines() {
        let style = FrameStyle::default();
        let rows = layout(16, &style).multiline_field("Msg", "hi\nthere", FieldLook::focused(true));
        assert_eq!(
            texts(&rows),
            vec!["#▸Msg: hi      #", "#      there▍  #"]
        );
    }

    #[test]
    fn test_multiline_empty_has_no_extra_rows() {
        let style = FrameStyle::default();
        let rows = layout(16, &style).multiline_field("Msg", "", FieldLook::focused(false));
        assert_eq!(texts(&rows), vec!["# Msg:         #"]);
    }

    #[test]
    fn test_wrap_chars() {
        assert_eq!(wrap_chars("", 4), Vec::<String>::new());
        assert_eq!(wrap_chars("abc", 0), Vec::<String>::new());
        assert_eq!(wrap_chars("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_chars("\nab\n\ncd", 4), vec!["ab", "", "cd"]);
        // A lone newline produces one empty row
        assert_eq!(wrap_chars("\n", 4), vec![""]);
    }

    #[test]
    fn test_error_rows_unbulleted() {
        let style = FrameStyle::default();
        let rows = layout(40, &style).error_rows("Username cannot be empty");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text(), "# Error: Username cannot be empty      #");
        assert_eq!(rows[0].spans()[2], Span::styled("Error", Tone::Alert));
    }

    #[test]
    fn test_option_variants() {
        let style = FrameStyle::default();
        let lay = layout(40, &style);

        let user = MenuOption::UserCard(UserCard {
            user_id: "ada".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "al1@nyu.edu".into(),
        });
        assert_eq!(
            texts(&lay.option_rows(&user, true)),
            vec![
                "#▸Ada Lovelace (@ada)                  #",
                "#   al1@nyu.edu                        #",
            ]
        );

        let request = MenuOption::RequestCard(RequestCard {
            from_user: "bob".into(),
            from_name: "Bob".into(),
            message: String::new(),
        });
        assert_eq!(lay.option_rows(&request, false).len(), 1);

        let action = MenuOption::action("New Message");
        assert_eq!(
            texts(&lay.option_rows(&action, false)),
            vec!["# + New Message                        #"]
        );
    }

    #[test]
    fn test_every_row_is_exactly_cols_wide() {
        let style = FrameStyle::default();
        let text = "lorem ipsum\ndolor sit amet, consectetur adipiscing elit\n\nsed do";
        for cols in 2..60u16 {
            let lay = layout(cols, &style);
            let mut rows = vec![
                lay.horizontal_bar(),
                lay.blank(),
                lay.centered("A TITLE", Tone::Plain),
                lay.option_row("Friends", true, Tone::Highlight),
                lay.single_line_field("Username", text, FieldLook::focused(true)),
                lay.single_line_field("Username", text, FieldLook::focused(false)),
            ];
            rows.extend(lay.multiline_field("Message", text, FieldLook::focused(true)));
            rows.extend(lay.error_rows(text));
            for row in rows {
                assert_eq!(row.width(), cols as usize, "cols={} row={:?}", cols, row.text());
            }
        }
    }
}
