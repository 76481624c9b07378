/// Errors produced while building a [`GuardConfig`](crate::GuardConfig).
///
/// These are setup-time failures. They are never confused with a blocked
/// submission, which is an ordinary [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The configuration document was not valid JSON.
    #[error("invalid configuration JSON: {0}")]
    Json(String),

    /// The configuration document was not an object.
    #[error("configuration must be an object, got {got}")]
    NotAnObject { got: &'static str },

    /// Neither `required_count` nor `blanks` was present.
    #[error("configuration is missing the required count (`required_count` or `blanks`)")]
    MissingRequiredCount,

    /// The required count was present but not a number.
    #[error("required count `{field}` must be a number, got {got}")]
    NotANumber { field: String, got: &'static str },

    /// The required count was negative.
    #[error("required count `{field}` must not be negative, got {value}")]
    Negative { field: String, value: f64 },

    /// The required count had a fractional part.
    #[error("required count `{field}` must be a whole number, got {value}")]
    NotAnInteger { field: String, value: f64 },

    /// The required count does not fit a `u32`.
    #[error("required count `{field}` is out of range: {value}")]
    OutOfRange { field: String, value: f64 },

    /// `required_count` and `blanks` were both given and disagree.
    #[error("`required_count` ({required_count}) conflicts with `blanks` ({blanks})")]
    ConflictingCount { required_count: u32, blanks: u32 },

    /// `category` must name at least one character.
    #[error("category must not be empty")]
    EmptyCategory,

    /// A string field held a non-string value.
    #[error("`{field}` must be a string, got {got}")]
    NotAString { field: &'static str, got: &'static str },

    /// The notification template cannot show the required count.
    #[error("message template must contain the `{{count}}` placeholder")]
    MessageMissingCount,
}

/// Errors produced while decoding recorded inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputsError {
    /// The document was not valid JSON or did not match the input shape.
    #[error("invalid inputs JSON: {0}")]
    Json(String),
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
