//! Form session: labeled fields followed by Submit and Cancel buttons.

use crate::domain::{wrap_step, Field, TerminalDimensions};
use crate::error::Result;
use crate::services::Terminal;
use crate::ui::frame::FrameBuilder;
use crate::ui::input::InputEvent;
use crate::ui::layout::{FieldLook, FrameStyle, Layout};
use crate::ui::line::{RenderLine, Tone};

/// Read-only view of the fields handed to a validator
pub struct FieldValues<'a> {
    fields: &'a [Field],
}

impl<'a> FieldValues<'a> {
    pub fn new(fields: &'a [Field]) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Value of the field at `index`
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.fields.get(index).map(|f| f.value.as_str())
    }

    /// Value of the first field with this label
    pub fn by_label(&self, label: &str) -> Option<&'a str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }

    /// (label, value) pairs in field order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.fields
            .iter()
            .map(|f| (f.label.as_str(), f.value.as_str()))
    }
}

/// Collects the error strings a validator reports
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a form-level error
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Report an error scoped to one field, prefixed with its quoted label
    pub fn field_error(&mut self, label: &str, message: &str) {
        self.errors.push(format!("'{}' {}", label, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.errors
    }

    pub fn into_messages(self) -> Vec<String> {
        self.errors
    }
}

/// Caller logic deciding whether a submission is accepted
pub trait Validator {
    /// Return true to accept; report errors for the next frame otherwise
    fn validate(&mut self, values: &FieldValues<'_>, report: &mut ValidationReport) -> bool;
}

impl Validator for Box<dyn Validator> {
    fn validate(&mut self, values: &FieldValues<'_>, report: &mut ValidationReport) -> bool {
        (**self).validate(values, report)
    }
}

/// Validator backed by a closure
pub struct FnValidator<F>(F);

/// Wrap a closure as a validator
pub fn from_fn<F>(f: F) -> FnValidator<F>
where
    F: FnMut(&FieldValues<'_>, &mut ValidationReport) -> bool,
{
    FnValidator(f)
}

impl<F> Validator for FnValidator<F>
where
    F: FnMut(&FieldValues<'_>, &mut ValidationReport) -> bool,
{
    fn validate(&mut self, values: &FieldValues<'_>, report: &mut ValidationReport) -> bool {
        (self.0)(values, report)
    }
}

/// Lifecycle of a form session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitted,
    Cancelled,
}

/// Result returned to the caller once a form finishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Field values in field order
    Submitted(Vec<String>),
    Cancelled,
}

impl FormOutcome {
    /// Field values, or None when cancelled
    pub fn into_responses(self) -> Option<Vec<String>> {
        match self {
            Self::Submitted(values) => Some(values),
            Self::Cancelled => None,
        }
    }
}

/// A form session.
///
/// The cursor covers every field, then Submit, then Cancel.
pub struct Form<V> {
    title: String,
    submit_label: String,
    fields: Vec<Field>,
    current_selection: usize,
    status: FormStatus,
    errors: Vec<String>,
    validator: V,
}

impl<V: Validator> Form<V> {
    /// Create a form with the cursor on the first field
    pub fn new(title: impl Into<String>, fields: Vec<Field>, validator: V) -> Self {
        Self {
            title: title.into(),
            submit_label: "Submit".to_string(),
            fields,
            current_selection: 0,
            status: FormStatus::Editing,
            errors: Vec::new(),
            validator,
        }
    }

    /// Text of the Submit button
    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn current_selection(&self) -> usize {
        self.current_selection
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Fields plus the Submit and Cancel slots
    pub fn slot_count(&self) -> usize {
        self.fields.len() + 2
    }

    fn submit_slot(&self) -> usize {
        self.fields.len()
    }

    fn cancel_slot(&self) -> usize {
        self.fields.len() + 1
    }

    /// Current buffer contents in field order
    pub fn values(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.value.clone()).collect()
    }

    /// Submitted values; None while editing or after cancel
    pub fn responses(&self) -> Option<Vec<String>> {
        match self.status {
            FormStatus::Submitted => Some(self.values()),
            FormStatus::Editing | FormStatus::Cancelled => None,
        }
    }

    /// Render, wait for one event, transition; repeat until submitted or cancelled
    pub fn run(&mut self, terminal: &mut dyn Terminal) -> Result<FormOutcome> {
        tracing::debug!(form = %self.title, "form session started");
        loop {
            match self.status {
                FormStatus::Submitted => return Ok(FormOutcome::Submitted(self.values())),
                FormStatus::Cancelled => return Ok(FormOutcome::Cancelled),
                FormStatus::Editing => {}
            }

            let dims = terminal.dimensions()?;
            let frame = self.render(dims, terminal.style());
            terminal.draw(&frame)?;

            let event = terminal.next_event()?;
            self.handle_event(event);
        }
    }

    /// Apply one input event
    pub fn handle_event(&mut self, event: InputEvent) {
        if self.status != FormStatus::Editing {
            return;
        }

        let slots = self.slot_count();
        match event {
            InputEvent::MoveBack => {
                self.current_selection = wrap_step(self.current_selection, slots, false);
            }
            InputEvent::MoveForward | InputEvent::Tab => {
                self.current_selection = wrap_step(self.current_selection, slots, true);
            }
            InputEvent::Confirm => self.confirm(),
            InputEvent::Printable(c) => {
                if let Some(field) = self.fields.get_mut(self.current_selection) {
                    field.push(c);
                }
            }
            InputEvent::Backspace => {
                if let Some(field) = self.fields.get_mut(self.current_selection) {
                    field.backspace();
                }
            }
        }
    }

    fn confirm(&mut self) {
        if self.current_selection == self.submit_slot() {
            self.submit();
        } else if self.current_selection == self.cancel_slot() {
            tracing::debug!(form = %self.title, "form cancelled");
            self.status = FormStatus::Cancelled;
        } else if let Some(field) = self.fields.get_mut(self.current_selection) {
            if field.multiline {
                field.push('\n');
            }
        }
    }

    fn submit(&mut self) {
        self.errors.clear();

        let mut report = ValidationReport::new();
        let valid = self
            .validator
            .validate(&FieldValues::new(&self.fields), &mut report);
        self.errors = report.into_messages();

        if valid {
            tracing::debug!(form = %self.title, "form submitted");
            self.status = FormStatus::Submitted;
        } else {
            tracing::debug!(form = %self.title, errors = self.errors.len(), "form rejected");
        }
    }

    /// Lay out one full frame
    pub fn render(&self, dims: TerminalDimensions, style: &FrameStyle) -> Vec<RenderLine> {
        let layout = Layout::new(dims, style);
        let mut frame = FrameBuilder::new(&layout, dims);

        frame.push(layout.centered(&self.title.to_uppercase(), Tone::Plain));
        for (idx, field) in self.fields.iter().enumerate() {
            let look = FieldLook::focused(idx == self.current_selection);
            let text = field.display_value(style.mask);
            if field.multiline {
                frame.block(layout.multiline_field(&field.label, &text, look));
            } else {
                frame.push(layout.single_line_field(&field.label, &text, look));
            }
        }
        frame.push(layout.option_row(
            &self.submit_label,
            self.current_selection == self.submit_slot(),
            Tone::Success,
        ));
        frame.push(layout.option_row(
            &style.cancel,
            self.current_selection == self.cancel_slot(),
            Tone::Alert,
        ));

        frame.blank_row();
        for error in &self.errors {
            frame.block(layout.error_rows(error));
        }
        frame.finish()
    }
}
