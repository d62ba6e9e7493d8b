//! Common utilities for output formatters

use serde::Serialize;

/// Error raised while rendering structured output
pub type RenderError = Box<dyn std::error::Error>;

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// CSV header name for a table column title, e.g. `TF Version` -> `tf_version`
pub fn csv_header(title: &str) -> String {
    title.to_lowercase().replace(' ', "_")
}

pub fn to_json<T: Serialize + ?Sized>(data: &T) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(data)?)
}

pub fn to_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String, RenderError> {
    Ok(serde_yml::to_string(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_csv_simple() {
        assert_eq!(escape_csv("simple"), "simple");
    }

    #[test]
    fn test_escape_csv_with_comma() {
        assert_eq!(escape_csv("iam, s3"), "\"iam, s3\"");
    }

    #[test]
    fn test_escape_csv_with_quotes() {
        assert_eq!(escape_csv("has\"quote"), "\"has\"\"quote\"");
    }

    #[test]
    fn test_escape_csv_with_newline() {
        assert_eq!(escape_csv("has\nnewline"), "\"has\nnewline\"");
    }

    #[test]
    fn test_csv_header() {
        assert_eq!(csv_header("Name"), "name");
        assert_eq!(csv_header("Workspace Count"), "workspace_count");
    }

    #[test]
    fn test_to_json_array() {
        let json = to_json(&vec!["a", "b"]).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"a\""));
    }

    #[test]
    fn test_to_yaml_sequence() {
        let yaml = to_yaml(&vec!["a", "b"]).unwrap();
        assert!(yaml.contains("- a"));
    }
}
