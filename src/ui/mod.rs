//! UI components for frameform.
//!
//! This module contains:
//! - input: Raw keystroke decoding
//! - line: Styled output rows
//! - layout: Fixed-width row layout
//! - frame: Full-screen frame composition
//! - widgets: Menu and form sessions

pub mod frame;
pub mod input;
pub mod layout;
pub mod line;
pub mod widgets;
