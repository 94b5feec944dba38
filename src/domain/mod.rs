//! Domain entities for frameform.
//!
//! This module contains the plain data the engine operates on:
//! - TerminalDimensions: The size sampled before every frame
//! - MenuOption: A selectable menu entry (label, user card, request card, action)
//! - Field: A form field and its edit buffer
//! - SelectionState: Wrap-around cursor over menu slots

mod dimensions;
mod field;
mod option;
mod selection;

pub use dimensions::TerminalDimensions;
pub use field::Field;
pub use option::{MenuOption, RequestCard, UserCard};
pub use selection::{wrap_step, SelectionState};
