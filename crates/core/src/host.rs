//! Seams between the guard and whatever renders the form.
//!
//! A browser host backs these with the DOM and `window.alert`; tests and the
//! CLI back them with recorded inputs and an in-memory message log.

use crate::input::SelectableInput;

/// Reads the live state of the inputs in a category.
///
/// Called once per submission attempt. Implementations return every input
/// in the category, checked or not.
pub trait SelectionSource {
    fn read_inputs(&self, category: &str) -> Vec<SelectableInput>;
}

impl SelectionSource for [SelectableInput] {
    fn read_inputs(&self, category: &str) -> Vec<SelectableInput> {
        self.iter()
            .filter(|input| input.in_category(category))
            .cloned()
            .collect()
    }
}

impl SelectionSource for Vec<SelectableInput> {
    fn read_inputs(&self, category: &str) -> Vec<SelectableInput> {
        self.as_slice().read_inputs(category)
    }
}

impl<S: SelectionSource + ?Sized> SelectionSource for &S {
    fn read_inputs(&self, category: &str) -> Vec<SelectableInput> {
        (**self).read_inputs(category)
    }
}

/// Adapts a closure into a [`SelectionSource`].
pub struct FnSource<F>(pub F);

impl<F> SelectionSource for FnSource<F>
where
    F: Fn(&str) -> Vec<SelectableInput>,
{
    fn read_inputs(&self, category: &str) -> Vec<SelectableInput> {
        (self.0)(category)
    }
}

/// Shows a blocking message to the user.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

impl<F: FnMut(&str)> Notifier for F {
    fn notify(&mut self, message: &str) {
        self(message)
    }
}

/// Records every message instead of showing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectingNotifier {
    messages: Vec<String>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// The cancellable half of a form submission event.
pub trait SubmitEvent {
    /// Suppress the form's default submit action.
    fn prevent_default(&mut self);
}

/// In-memory submission event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordedSubmit {
    cancelled: bool,
}

impl RecordedSubmit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl SubmitEvent for RecordedSubmit {
    fn prevent_default(&mut self) {
        self.cancelled = true;
    }
}
