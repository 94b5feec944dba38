//! Terminal interfaces and the crossterm-backed implementation.

use crate::domain::TerminalDimensions;
use crate::error::{EngineError, Result};
use crate::ui::input::{InputEvent, InputReader};
use crate::ui::layout::FrameStyle;
use crate::ui::line::{RenderLine, Tone};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::collections::VecDeque;
use std::io::{self, Read, Write};

/// Source of raw keystroke bytes, one at a time
pub trait KeySource {
    /// Block until the next byte is available
    fn read_byte(&mut self) -> Result<u8>;
}

impl KeySource for VecDeque<u8> {
    fn read_byte(&mut self) -> Result<u8> {
        self.pop_front().ok_or(EngineError::InputExhausted)
    }
}

/// Everything a session needs from the terminal
pub trait Terminal {
    /// Current size; queried fresh before every frame
    fn dimensions(&mut self) -> Result<TerminalDimensions>;

    /// Block until the next complete keypress
    fn next_event(&mut self) -> Result<InputEvent>;

    /// Write one complete frame, rows in order
    fn draw(&mut self, frame: &[RenderLine]) -> Result<()>;

    /// Glyphs and labels frames are laid out with
    fn style(&self) -> &FrameStyle;
}

/// Unbuffered stdin reader; expects the terminal to be in raw mode
pub struct StdinKeys {
    stdin: io::Stdin,
}

impl StdinKeys {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdinKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySource for StdinKeys {
    fn read_byte(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        self.stdin.lock().read_exact(&mut byte)?;
        Ok(byte[0])
    }
}

/// Terminal backed by the process's stdin/stdout.
///
/// Raw mode is managed by the caller; see `main.rs`.
pub struct RawTerminal {
    input: InputReader<StdinKeys>,
    stdout: io::Stdout,
    style: FrameStyle,
    min_cols: u16,
}

impl RawTerminal {
    pub fn new(style: FrameStyle, min_cols: u16) -> Self {
        Self {
            input: InputReader::new(StdinKeys::new()),
            stdout: io::stdout(),
            style,
            min_cols,
        }
    }
}

impl Terminal for RawTerminal {
    fn dimensions(&mut self) -> Result<TerminalDimensions> {
        let (cols, rows) = crossterm::terminal::size()
            .map_err(|e| EngineError::terminal(format!("size query failed: {}", e)))?;
        if cols < self.min_cols {
            tracing::warn!("Terminal is {} columns wide, rendering truncated", cols);
        }
        Ok(TerminalDimensions::new(rows, cols))
    }

    fn next_event(&mut self) -> Result<InputEvent> {
        self.input.next_event()
    }

    fn draw(&mut self, frame: &[RenderLine]) -> Result<()> {
        let mut out = self.stdout.lock();
        for line in frame {
            for span in line.spans() {
                match tone_color(span.tone) {
                    Some(color) if self.style.colors => {
                        queue!(out, SetForegroundColor(color), Print(&span.text), ResetColor)?
                    }
                    _ => queue!(out, Print(&span.text))?,
                }
            }
            queue!(out, Print("\r\n"))?;
        }
        out.flush()?;
        Ok(())
    }

    fn style(&self) -> &FrameStyle {
        &self.style
    }
}

fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Plain => None,
        Tone::Highlight => Some(Color::Blue),
        Tone::Success => Some(Color::Green),
        Tone::Alert => Some(Color::Red),
    }
}
