//! Interactive sessions for frameform.

pub mod form;
pub mod menu;
pub mod validators;

pub use form::{FieldValues, Form, FormOutcome, FormStatus, ValidationReport, Validator};
pub use menu::{Feedback, Menu, MenuContext, SelectionHandler};
