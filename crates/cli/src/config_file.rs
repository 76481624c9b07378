use std::path::Path;

use submit_guard_core::GuardConfig;

/// Load a guard configuration from a `.json` or `.toml` file.
///
/// TOML documents are converted to the JSON value model first so both
/// formats go through the same validation.
pub(crate) fn load_config(path: &Path) -> Result<GuardConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("error reading config '{}': {}", path.display(), e))?;

    let value = if is_toml(path) {
        let table: toml::Value = toml::from_str(&content)
            .map_err(|e| format!("error parsing TOML in '{}': {}", path.display(), e))?;
        serde_json::to_value(table)
            .map_err(|e| format!("error converting '{}': {}", path.display(), e))?
    } else {
        serde_json::from_str(&content)
            .map_err(|e| format!("error parsing JSON in '{}': {}", path.display(), e))?
    };

    tracing::debug!(path = %path.display(), "loaded guard configuration");

    GuardConfig::from_value(&value)
        .map_err(|e| format!("configuration error in '{}': {}", path.display(), e))
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_toml_and_json_alike() {
        let dir = TempDir::new().unwrap();
        let toml_path = dir.path().join("guard.toml");
        fs::write(&toml_path, "blanks = 2\ncategory = \"radio\"\n").unwrap();
        let json_path = dir.path().join("guard.json");
        fs::write(&json_path, r#"{"blanks": 2, "category": "radio"}"#).unwrap();

        assert_eq!(load_config(&toml_path).unwrap(), load_config(&json_path).unwrap());
    }

    #[test]
    fn reports_missing_count_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("guard.toml");
        fs::write(&path, "category = \"radio\"\n").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.starts_with("configuration error in"));
        assert!(err.contains("missing the required count"));
    }

    #[test]
    fn reports_unreadable_file() {
        let err = load_config(Path::new("/nonexistent/guard.json")).unwrap_err();
        assert!(err.starts_with("error reading config"));
    }
}
