//! frameform: bordered text-mode menus and forms
//!
//! This crate renders fixed-width framed menus and data-entry forms straight
//! to a raw-mode terminal and drives them from decoded keystrokes. Sessions
//! nest: a menu's selection handler may run another menu or form to
//! completion before returning.

pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod ui;

pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use ui::widgets::{Form, FormOutcome, Menu, MenuContext};
