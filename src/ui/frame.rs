//! Full-screen frame composition.

use crate::domain::TerminalDimensions;
use crate::ui::layout::Layout;
use crate::ui::line::RenderLine;

/// Collects content rows between a top and bottom border.
///
/// On `finish`, blank rows are inserted before the bottom border so the
/// frame height is a multiple of `rows - 1`: the frame grows to fill the
/// terminal instead of relying on the terminal to scroll.
pub struct FrameBuilder {
    page_height: usize,
    bar: RenderLine,
    blank: RenderLine,
    lines: Vec<RenderLine>,
}

impl FrameBuilder {
    /// Start a frame with its top border
    pub fn new(layout: &Layout<'_>, dims: TerminalDimensions) -> Self {
        let bar = layout.horizontal_bar();
        Self {
            page_height: dims.page_height(),
            blank: layout.blank(),
            lines: vec![bar.clone()],
            bar,
        }
    }

    pub fn push(&mut self, line: RenderLine) {
        self.lines.push(line);
    }

    /// Append a block of rows in order
    pub fn block(&mut self, rows: impl IntoIterator<Item = RenderLine>) {
        self.lines.extend(rows);
    }

    pub fn blank_row(&mut self) {
        self.lines.push(self.blank.clone());
    }

    /// Pad with blank rows and close with the bottom border
    pub fn finish(mut self) -> Vec<RenderLine> {
        let remainder = self.lines.len() % self.page_height;
        let to_fill = self.page_height - remainder;
        for _ in 1..to_fill {
            self.lines.push(self.blank.clone());
        }
        self.lines.push(self.bar);
        self.lines
    }
}
