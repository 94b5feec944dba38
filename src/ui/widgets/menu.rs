//! Menu session: a list of selectable options with an optional dismiss slot.

use crate::domain::{MenuOption, SelectionState, TerminalDimensions};
use crate::error::Result;
use crate::services::Terminal;
use crate::ui::frame::FrameBuilder;
use crate::ui::input::InputEvent;
use crate::ui::layout::{FrameStyle, Layout};
use crate::ui::line::{RenderLine, Tone};
use crate::ui::widgets::form::{Form, FormOutcome, Validator};

/// Caller logic invoked when a real option is confirmed
pub trait SelectionHandler {
    /// Handle the option at `index`; may run nested sessions through `ctx`
    fn on_select(&mut self, ctx: &mut MenuContext<'_>, index: usize) -> Result<()>;

    /// Called exactly once, when the menu becomes dismissed
    fn on_dismiss(&mut self) {}
}

/// Selection handler backed by a closure
pub struct FnHandler<F>(F);

/// Wrap a closure as a selection handler
pub fn from_fn<F>(f: F) -> FnHandler<F>
where
    F: FnMut(&mut MenuContext<'_>, usize) -> Result<()>,
{
    FnHandler(f)
}

impl<F> SelectionHandler for FnHandler<F>
where
    F: FnMut(&mut MenuContext<'_>, usize) -> Result<()>,
{
    fn on_select(&mut self, ctx: &mut MenuContext<'_>, index: usize) -> Result<()> {
        (self.0)(ctx, index)
    }
}

/// Errors and notifications shown under the options.
///
/// Cleared at the start of every selection, filled only during it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub errors: Vec<String>,
    pub notices: Vec<String>,
}

impl Feedback {
    pub fn clear(&mut self) {
        self.errors.clear();
        self.notices.clear();
    }
}

/// What a selection handler may touch while it runs
pub struct MenuContext<'a> {
    options: &'a mut Vec<MenuOption>,
    selection: &'a mut SelectionState,
    feedback: &'a mut Feedback,
    terminal: &'a mut dyn Terminal,
}

impl<'a> MenuContext<'a> {
    /// Show an error on the next frame
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.feedback.errors.push(message.into());
    }

    /// Show a notification on the next frame
    pub fn notify(&mut self, message: impl Into<String>) {
        self.feedback.notices.push(message.into());
    }

    /// End the menu once the handler returns
    pub fn dismiss(&mut self) {
        self.selection.dismissed = true;
    }

    pub fn selected_index(&self) -> usize {
        self.selection.current_index
    }

    pub fn selected_option(&self) -> Option<&MenuOption> {
        self.options.get(self.selection.current_index)
    }

    pub fn options(&self) -> &[MenuOption] {
        self.options
    }

    /// Replace the option list; the cursor is pulled back into range
    pub fn set_options(&mut self, options: Vec<MenuOption>) {
        self.selection.resize(options.len());
        *self.options = options;
    }

    /// Run a nested menu to completion
    pub fn run_menu<H: SelectionHandler>(&mut self, menu: &mut Menu<H>) -> Result<()> {
        menu.run(&mut *self.terminal)
    }

    /// Run a nested form to completion
    pub fn run_form<V: Validator>(&mut self, form: &mut Form<V>) -> Result<FormOutcome> {
        form.run(&mut *self.terminal)
    }
}

/// A menu session.
///
/// Active until dismissed, either through the dismiss slot or by the
/// selection handler.
pub struct Menu<H> {
    title: String,
    options: Vec<MenuOption>,
    selection: SelectionState,
    feedback: Feedback,
    handler: H,
}

impl<H: SelectionHandler> Menu<H> {
    /// Create a menu with the cursor on the first option
    pub fn new(title: impl Into<String>, options: Vec<MenuOption>, handler: H) -> Self {
        let selection = SelectionState::new(options.len(), false);
        Self {
            title: title.into(),
            options,
            selection,
            feedback: Feedback::default(),
            handler,
        }
    }

    /// Add the synthetic dismiss slot after the options
    pub fn dismissable(mut self, dismissable: bool) -> Self {
        self.selection.dismissable = dismissable;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn is_dismissed(&self) -> bool {
        self.selection.dismissed
    }

    /// Show an error on the next frame
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.feedback.errors.push(message.into());
    }

    /// Render, wait for one event, transition; repeat until dismissed
    pub fn run(&mut self, terminal: &mut dyn Terminal) -> Result<()> {
        tracing::debug!(menu = %self.title, "menu session started");
        while !self.selection.dismissed {
            let dims = terminal.dimensions()?;
            let frame = self.render(dims, terminal.style());
            terminal.draw(&frame)?;

            let event = terminal.next_event()?;
            self.handle_event(event, terminal)?;
        }
        tracing::debug!(menu = %self.title, "menu session dismissed");
        Ok(())
    }

    /// Apply one input event
    pub fn handle_event(&mut self, event: InputEvent, terminal: &mut dyn Terminal) -> Result<()> {
        match event {
            InputEvent::MoveBack => self.selection.move_back(),
            InputEvent::MoveForward | InputEvent::Tab => self.selection.move_forward(),
            InputEvent::Confirm => self.confirm(terminal)?,
            InputEvent::Printable(_) | InputEvent::Backspace => {}
        }
        Ok(())
    }

    fn confirm(&mut self, terminal: &mut dyn Terminal) -> Result<()> {
        if self.selection.slot_count() == 0 {
            return Ok(());
        }

        let was_dismissed = self.selection.dismissed;
        self.feedback.clear();

        if self.selection.on_dismiss_slot() {
            self.selection.dismissed = true;
        } else {
            let index = self.selection.current_index;
            tracing::debug!(menu = %self.title, index, "menu option selected");
            let mut ctx = MenuContext {
                options: &mut self.options,
                selection: &mut self.selection,
                feedback: &mut self.feedback,
                terminal,
            };
            self.handler.on_select(&mut ctx, index)?;
        }

        if self.selection.dismissed && !was_dismissed {
            self.handler.on_dismiss();
        }
        Ok(())
    }

    /// Lay out one full frame
    pub fn render(&self, dims: TerminalDimensions, style: &FrameStyle) -> Vec<RenderLine> {
        let layout = Layout::new(dims, style);
        let mut frame = FrameBuilder::new(&layout, dims);

        frame.push(layout.centered(&self.title.to_uppercase(), Tone::Plain));
        for (idx, option) in self.options.iter().enumerate() {
            frame.block(layout.option_rows(option, idx == self.selection.current_index));
        }
        if self.selection.dismissable {
            frame.push(layout.option_row(
                &style.cancel,
                self.selection.on_dismiss_slot(),
                Tone::Alert,
            ));
        }

        frame.blank_row();
        for error in &self.feedback.errors {
            frame.block(layout.error_rows(error));
        }
        for notice in &self.feedback.notices {
            frame.block(layout.notice_rows(notice));
        }
        frame.finish()
    }
}
