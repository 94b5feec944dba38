//! frameform: demo of bordered menus and forms
//!
//! Runs a small account dashboard (log in, sign up, friends, requests)
//! against an in-memory store to exercise nested sessions.

mod screens;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::cell::RefCell;
use std::io;
use std::panic;
use std::rc::Rc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use frameform::services::RawTerminal;
use frameform::EngineConfig;

/// Put the terminal in raw mode on the alternate screen
fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// Restore the terminal to normal mode
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Initialize logging with RUST_LOG environment variable support
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Install a panic hook that restores the terminal before printing the panic
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    init_logging();
    install_panic_hook();

    let project_root = std::env::current_dir().ok();
    let config = EngineConfig::load(project_root.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Falling back to default configuration: {}", e);
        EngineConfig::default()
    });
    let style = config.style()?;

    let store = Rc::new(RefCell::new(screens::AccountStore::seeded()));
    tracing::info!("Starting frameform demo");

    setup_terminal()?;
    let result = {
        let mut terminal = RawTerminal::new(style, config.ui.min_cols);
        screens::welcome_menu(store).run(&mut terminal)
    };

    // Restore terminal (always, even on error)
    restore_terminal()?;

    result?;
    Ok(())
}
