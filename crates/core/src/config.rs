//! Guard configuration: the required count, the participating category,
//! and the notification template.

use serde::Serialize;
use serde_json::Value;

use crate::error::{json_kind, ConfigError};

/// Class marker used by the card page when no category is configured.
pub const DEFAULT_CATEGORY: &str = "radio";

/// Notification shown when the selection does not match.
pub const DEFAULT_MESSAGE: &str = "Please select {count} (different) card(s).";

const COUNT_PLACEHOLDER: &str = "{count}";

/// Number of distinct values that must be selected before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RequiredCount(u32);

impl RequiredCount {
    pub fn new(count: u32) -> Self {
        RequiredCount(count)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for RequiredCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated guard configuration.
///
/// Built once at setup time and handed to the guard. A configuration
/// without a required count cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardConfig {
    required_count: RequiredCount,
    category: String,
    message: String,
}

impl GuardConfig {
    pub fn new(required_count: u32) -> Self {
        GuardConfig {
            required_count: RequiredCount::new(required_count),
            category: DEFAULT_CATEGORY.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Result<Self, ConfigError> {
        let category = category.into();
        if category.is_empty() {
            return Err(ConfigError::EmptyCategory);
        }
        self.category = category;
        Ok(self)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Result<Self, ConfigError> {
        let message = message.into();
        if !message.contains(COUNT_PLACEHOLDER) {
            return Err(ConfigError::MessageMissingCount);
        }
        self.message = message;
        Ok(self)
    }

    pub fn required_count(&self) -> RequiredCount {
        self.required_count
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn message_template(&self) -> &str {
        &self.message
    }

    /// Render the notification text with the required count filled in.
    pub fn notification(&self) -> String {
        self.message
            .replace(COUNT_PLACEHOLDER, &self.required_count.to_string())
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(s).map_err(|e| ConfigError::Json(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Build a configuration from a JSON value.
    ///
    /// Accepts `required_count` or the page's `blanks` key; if both are
    /// present they must agree. `category` and `message` are optional.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let obj = value.as_object().ok_or(ConfigError::NotAnObject {
            got: json_kind(value),
        })?;

        let explicit = obj
            .get("required_count")
            .map(|v| parse_count("required_count", v))
            .transpose()?;
        let blanks = obj
            .get("blanks")
            .map(|v| parse_count("blanks", v))
            .transpose()?;

        let count = match (explicit, blanks) {
            (Some(a), Some(b)) if a != b => {
                return Err(ConfigError::ConflictingCount {
                    required_count: a,
                    blanks: b,
                })
            }
            (Some(a), _) => a,
            (None, Some(b)) => b,
            (None, None) => return Err(ConfigError::MissingRequiredCount),
        };

        let mut config = GuardConfig::new(count);
        if let Some(category) = obj.get("category") {
            config = config.with_category(string_field("category", category)?)?;
        }
        if let Some(message) = obj.get("message") {
            config = config.with_message(string_field("message", message)?)?;
        }
        Ok(config)
    }
}

fn string_field(field: &'static str, value: &Value) -> Result<String, ConfigError> {
    match value.as_str() {
        Some(s) => Ok(s.to_string()),
        None => Err(ConfigError::NotAString {
            field,
            got: json_kind(value),
        }),
    }
}

// Page scripts hand numbers over as floats, so `2.0` is a valid count.
fn parse_count(field: &str, value: &Value) -> Result<u32, ConfigError> {
    let number = match value {
        Value::Number(n) => n,
        other => {
            return Err(ConfigError::NotANumber {
                field: field.to_string(),
                got: json_kind(other),
            })
        }
    };

    if let Some(n) = number.as_u64() {
        return u32::try_from(n).map_err(|_| ConfigError::OutOfRange {
            field: field.to_string(),
            value: n as f64,
        });
    }

    let f = number.as_f64().unwrap_or(f64::NAN);
    if f < 0.0 {
        return Err(ConfigError::Negative {
            field: field.to_string(),
            value: f,
        });
    }
    if f.fract() != 0.0 || !f.is_finite() {
        return Err(ConfigError::NotAnInteger {
            field: field.to_string(),
            value: f,
        });
    }
    if f > u32::MAX as f64 {
        return Err(ConfigError::OutOfRange {
            field: field.to_string(),
            value: f,
        });
    }
    Ok(f as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blanks_key_sets_required_count() {
        let config = GuardConfig::from_value(&json!({ "blanks": 2 })).unwrap();
        assert_eq!(config.required_count().get(), 2);
        assert_eq!(config.category(), "radio");
        assert_eq!(config.notification(), "Please select 2 (different) card(s).");
    }

    #[test]
    fn required_count_key_and_overrides() {
        let config = GuardConfig::from_value(&json!({
            "required_count": 3,
            "category": "answer",
            "message": "Pick {count} answers"
        }))
        .unwrap();
        assert_eq!(config.required_count(), RequiredCount::new(3));
        assert_eq!(config.category(), "answer");
        assert_eq!(config.notification(), "Pick 3 answers");
    }

    #[test]
    fn matching_keys_are_accepted() {
        let config = GuardConfig::from_value(&json!({ "required_count": 1, "blanks": 1 })).unwrap();
        assert_eq!(config.required_count().get(), 1);
    }

    #[test]
    fn conflicting_keys_are_rejected() {
        let err = GuardConfig::from_value(&json!({ "required_count": 1, "blanks": 2 })).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ConflictingCount {
                required_count: 1,
                blanks: 2
            }
        );
    }

    #[test]
    fn missing_count_is_a_setup_error() {
        let err = GuardConfig::from_value(&json!({ "category": "radio" })).unwrap_err();
        assert_eq!(err, ConfigError::MissingRequiredCount);
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        let err = GuardConfig::from_value(&json!({ "blanks": "2" })).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotANumber {
                field: "blanks".into(),
                got: "a string"
            }
        );
        let err = GuardConfig::from_value(&json!({ "blanks": null })).unwrap_err();
        assert!(matches!(err, ConfigError::NotANumber { got: "null", .. }));
    }

    #[test]
    fn negative_and_fractional_counts_are_rejected() {
        let err = GuardConfig::from_value(&json!({ "blanks": -1 })).unwrap_err();
        assert!(matches!(err, ConfigError::Negative { .. }));
        let err = GuardConfig::from_value(&json!({ "blanks": 1.5 })).unwrap_err();
        assert!(matches!(err, ConfigError::NotAnInteger { .. }));
    }

    #[test]
    fn integral_float_is_accepted() {
        let config = GuardConfig::from_value(&json!({ "blanks": 2.0 })).unwrap();
        assert_eq!(config.required_count().get(), 2);
    }

    #[test]
    fn huge_count_is_out_of_range() {
        let err = GuardConfig::from_value(&json!({ "blanks": 5_000_000_000u64 })).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { .. }));
    }

    #[test]
    fn template_must_mention_count() {
        let err = GuardConfig::from_value(&json!({ "blanks": 1, "message": "Pick more" })).unwrap_err();
        assert_eq!(err, ConfigError::MessageMissingCount);
    }

    #[test]
    fn empty_category_is_rejected() {
        let err = GuardConfig::from_value(&json!({ "blanks": 1, "category": "" })).unwrap_err();
        assert_eq!(err, ConfigError::EmptyCategory);
    }

    #[test]
    fn non_object_document_is_rejected() {
        let err = GuardConfig::from_json_str("[1]").unwrap_err();
        assert_eq!(err, ConfigError::NotAnObject { got: "an array" });
        let err = GuardConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
