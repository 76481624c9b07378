use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_CATEGORY;
use crate::error::InputsError;

/// One radio-style choice as rendered on the page.
///
/// Exclusivity within a `name` group belongs to the markup; the guard only
/// reads `value` and `checked`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableInput {
    pub value: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "default_classes")]
    pub classes: Vec<String>,
}

fn default_classes() -> Vec<String> {
    vec![DEFAULT_CATEGORY.to_string()]
}

impl SelectableInput {
    /// A new input in the default category.
    pub fn new(value: impl Into<String>, checked: bool) -> Self {
        SelectableInput {
            value: value.into(),
            checked,
            name: None,
            classes: default_classes(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the class list with a single class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes = vec![class.into()];
        self
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.classes.iter().any(|c| c == category)
    }

    /// Decode a JSON array of recorded inputs.
    pub fn list_from_json_str(s: &str) -> Result<Vec<SelectableInput>, InputsError> {
        serde_json::from_str(s).map_err(|e| InputsError::Json(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_recorded_inputs_with_defaults() {
        let inputs = SelectableInput::list_from_json_str(
            r#"[
                {"value": "12", "checked": true, "name": "card0"},
                {"value": "7", "classes": ["radio", "big"]},
                {"value": "3", "checked": true, "classes": ["other"]}
            ]"#,
        )
        .unwrap();
        assert_eq!(inputs.len(), 3);
        assert_eq!(inputs[0].name.as_deref(), Some("card0"));
        assert!(inputs[0].in_category("radio"));
        assert!(!inputs[1].checked);
        assert!(inputs[1].in_category("big"));
        assert!(!inputs[2].in_category("radio"));
    }

    #[test]
    fn rejects_non_array() {
        let err = SelectableInput::list_from_json_str(r#"{"value": "1"}"#).unwrap_err();
        assert!(matches!(err, InputsError::Json(_)));
    }
}
