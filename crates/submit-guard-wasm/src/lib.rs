use slab::Slab;
use std::cell::RefCell;
use submit_guard_core::{
    CollectingNotifier, GuardConfig, RecordedSubmit, SelectableInput, SubmitGuard,
};
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlFormElement};

mod dom;

use dom::{AlertNotifier, DomSource, DomSubmit};

struct InstalledGuard {
    form_id: String,
    // Dropping the closure would invalidate the form's onsubmit handler.
    _handler: Closure<dyn FnMut(Event)>,
}

thread_local! {
    static GUARDS: RefCell<Slab<InstalledGuard>> = const { RefCell::new(Slab::new()) };
}

fn error_json(msg: &str) -> String {
    serde_json::json!({ "error": msg }).to_string()
}

fn is_installed(form_id: &str) -> bool {
    GUARDS.with(|guards| {
        guards
            .borrow()
            .iter()
            .any(|(_, installed)| installed.form_id == form_id)
    })
}

/// Attach a submit guard to the form with id `form_id`.
///
/// The configuration is validated before the document is touched, so a
/// missing or malformed count is reported as `{"error": ...}` and no handler
/// is installed. Each form accepts one guard; there is no removal.
///
/// Returns `{"handle": n}` on success.
#[wasm_bindgen]
pub fn install_guard(form_id: &str, config_json: &str) -> String {
    let config = match GuardConfig::from_json_str(config_json) {
        Ok(c) => c,
        Err(e) => return error_json(&format!("invalid configuration: {}", e)),
    };

    if is_installed(form_id) {
        return error_json(&format!("guard already installed on form '{}'", form_id));
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return error_json("no window available"),
    };
    let document = match window.document() {
        Some(d) => d,
        None => return error_json("no document available"),
    };
    let form = match document.get_element_by_id(form_id) {
        Some(el) => match el.dyn_into::<HtmlFormElement>() {
            Ok(f) => f,
            Err(_) => return error_json(&format!("element '{}' is not a form", form_id)),
        },
        None => return error_json(&format!("form '{}' not found", form_id)),
    };

    let mut guard = SubmitGuard::new(config, DomSource { document }, AlertNotifier { window });
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let outcome = guard.handle_submit(&mut DomSubmit(&event));
        tracing::debug!(
            allowed = outcome.is_allowed(),
            distinct = outcome.distinct(),
            "form submit checked"
        );
    });
    form.set_onsubmit(Some(handler.as_ref().unchecked_ref()));

    let handle = GUARDS.with(|guards| {
        guards.borrow_mut().insert(InstalledGuard {
            form_id: form_id.to_string(),
            _handler: handler,
        })
    });

    serde_json::json!({ "handle": handle }).to_string()
}

/// Number of guards installed in this page.
#[wasm_bindgen]
pub fn guard_count() -> u32 {
    GUARDS.with(|guards| guards.borrow().len() as u32)
}

/// Run one submission attempt over a JSON list of inputs without a DOM.
///
/// `inputs_json` is an array of `{"value", "checked", "name"?, "classes"?}`.
/// The result is the outcome JSON plus `cancelled` and the `notifications`
/// the user would have seen.
#[wasm_bindgen]
pub fn check_selection(config_json: &str, inputs_json: &str) -> String {
    let config = match GuardConfig::from_json_str(config_json) {
        Ok(c) => c,
        Err(e) => return error_json(&format!("invalid configuration: {}", e)),
    };

    let inputs = match SelectableInput::list_from_json_str(inputs_json) {
        Ok(i) => i,
        Err(e) => return error_json(&e.to_string()),
    };

    let mut guard = SubmitGuard::new(config, inputs, CollectingNotifier::new());
    let mut event = RecordedSubmit::new();
    let outcome = guard.handle_submit(&mut event);

    let mut result = outcome.to_json();
    result["cancelled"] = serde_json::json!(event.is_cancelled());
    result["notifications"] = serde_json::json!(guard.notifier().messages());
    result.to_string()
}
