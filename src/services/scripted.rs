//! In-memory terminal that replays a keystroke script and records frames.

use crate::domain::TerminalDimensions;
use crate::error::Result;
use crate::services::Terminal;
use crate::ui::input::{InputEvent, InputReader};
use crate::ui::layout::FrameStyle;
use crate::ui::line::RenderLine;
use std::collections::VecDeque;

/// Terminal fed from a byte script.
///
/// Once the script runs out, `next_event` fails with `InputExhausted`,
/// which ends any session still waiting for input.
pub struct ScriptedTerminal {
    dims: TerminalDimensions,
    resizes: VecDeque<TerminalDimensions>,
    input: InputReader<VecDeque<u8>>,
    frames: Vec<Vec<RenderLine>>,
    dimension_queries: usize,
    style: FrameStyle,
}

impl ScriptedTerminal {
    pub fn new(rows: u16, cols: u16, script: impl AsRef<[u8]>) -> Self {
        Self {
            dims: TerminalDimensions::new(rows, cols),
            resizes: VecDeque::new(),
            input: InputReader::new(script.as_ref().iter().copied().collect()),
            frames: Vec::new(),
            dimension_queries: 0,
            style: FrameStyle::default(),
        }
    }

    /// Use a custom style
    pub fn with_style(mut self, style: FrameStyle) -> Self {
        self.style = style;
        self
    }

    /// Sizes reported by subsequent dimension queries, one per query
    pub fn with_resizes(mut self, sizes: impl IntoIterator<Item = (u16, u16)>) -> Self {
        self.resizes
            .extend(sizes.into_iter().map(|(rows, cols)| TerminalDimensions::new(rows, cols)));
        self
    }

    /// Append more keystrokes to the script
    pub fn push_input(&mut self, bytes: impl AsRef<[u8]>) {
        self.input.source_mut().extend(bytes.as_ref().iter().copied());
    }

    /// Every frame drawn so far
    pub fn frames(&self) -> &[Vec<RenderLine>] {
        &self.frames
    }

    /// Plain text of the most recent frame
    pub fn last_frame(&self) -> Vec<String> {
        self.frames
            .last()
            .map(|frame| frame.iter().map(RenderLine::text).collect())
            .unwrap_or_default()
    }

    pub fn dimension_queries(&self) -> usize {
        self.dimension_queries
    }
}

impl Terminal for ScriptedTerminal {
    fn dimensions(&mut self) -> Result<TerminalDimensions> {
        self.dimension_queries += 1;
        if let Some(next) = self.resizes.pop_front() {
            self.dims = next;
        }
        Ok(self.dims)
    }

    fn next_event(&mut self) -> Result<InputEvent> {
        self.input.next_event()
    }

    fn draw(&mut self, frame: &[RenderLine]) -> Result<()> {
        self.frames.push(frame.to_vec());
        Ok(())
    }

    fn style(&self) -> &FrameStyle {
        &self.style
    }
}
