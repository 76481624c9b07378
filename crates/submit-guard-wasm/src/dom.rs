use submit_guard_core::{Notifier, SelectableInput, SelectionSource, SubmitEvent};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement, Window};

/// Reads the category's inputs from the live document on every call.
pub(crate) struct DomSource {
    pub(crate) document: Document,
}

impl SelectionSource for DomSource {
    fn read_inputs(&self, category: &str) -> Vec<SelectableInput> {
        let elements = self.document.get_elements_by_class_name(category);
        (0..elements.length())
            .filter_map(|i| elements.item(i))
            // Non-input elements carrying the class have no checked state.
            .filter_map(|element| element.dyn_into::<HtmlInputElement>().ok())
            .map(|input| {
                let name = input.name();
                SelectableInput {
                    value: input.value(),
                    checked: input.checked(),
                    name: (!name.is_empty()).then_some(name),
                    classes: input
                        .class_name()
                        .split_whitespace()
                        .map(str::to_owned)
                        .collect(),
                }
            })
            .collect()
    }
}

/// Shows block messages with `window.alert`.
pub(crate) struct AlertNotifier {
    pub(crate) window: Window,
}

impl Notifier for AlertNotifier {
    fn notify(&mut self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            tracing::warn!(?e, "window.alert failed");
        }
    }
}

pub(crate) struct DomSubmit<'a>(pub(crate) &'a Event);

impl SubmitEvent for DomSubmit<'_> {
    fn prevent_default(&mut self) {
        self.0.prevent_default();
    }
}
