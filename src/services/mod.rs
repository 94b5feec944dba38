//! Terminal services for frameform.
//!
//! This module contains:
//! - Terminal: Dimension query, keystroke source and render sink seen by sessions
//! - RawTerminal: Crossterm-backed terminal in raw mode
//! - ScriptedTerminal: In-memory terminal replaying a byte script

mod scripted;
mod terminal;

pub use scripted::ScriptedTerminal;
pub use terminal::{KeySource, RawTerminal, StdinKeys, Terminal};
