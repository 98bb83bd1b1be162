//! Input kind detection.

use crate::error::Result;
use std::path::Path;

/// Field of a recommendation response that carries the analysis text.
const ANALYSIS_FIELD: &str = "ai_analysis";

/// What kind of input a text is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Raw analysis text
    Analysis,
    /// A recommendation response JSON document
    Response,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Analysis => write!(f, "analysis text"),
            InputKind::Response => write!(f, "recommendation response"),
        }
    }
}

/// Detect the input kind of a text.
///
/// A text is a response when it is a JSON object with a string
/// `ai_analysis` field. Everything else, including other JSON, is treated
/// as analysis text.
///
/// # Example
/// ```
/// use unprose::detect::{detect_input, InputKind};
///
/// assert_eq!(detect_input("1. **Summary:** ok"), InputKind::Analysis);
/// assert_eq!(detect_input(r#"{"ai_analysis": "ok"}"#), InputKind::Response);
/// ```
pub fn detect_input(text: &str) -> InputKind {
    if !text.trim_start().starts_with('{') {
        return InputKind::Analysis;
    }

    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) if value.get(ANALYSIS_FIELD).is_some_and(|v| v.is_string()) => {
            InputKind::Response
        }
        _ => InputKind::Analysis,
    }
}

/// Detect the input kind of a file.
pub fn detect_input_from_path<P: AsRef<Path>>(path: P) -> Result<InputKind> {
    let text = std::fs::read_to_string(path)?;
    Ok(detect_input(&text))
}

/// Check if a text is a recommendation response document.
pub fn is_response(text: &str) -> bool {
    detect_input(text) == InputKind::Response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_analysis_text() {
        assert_eq!(detect_input("Good pick."), InputKind::Analysis);
        assert_eq!(detect_input(""), InputKind::Analysis);
    }

    #[test]
    fn test_detect_response() {
        let json = r#"  {"products": [], "ai_analysis": "x", "recommended_products": []}"#;
        assert_eq!(detect_input(json), InputKind::Response);
        assert!(is_response(json));
    }

    #[test]
    fn test_detect_other_json_is_analysis() {
        assert_eq!(detect_input(r#"{"products": []}"#), InputKind::Analysis);
        assert_eq!(detect_input(r#"{"ai_analysis": 3}"#), InputKind::Analysis);
        assert_eq!(detect_input("[1, 2, 3]"), InputKind::Analysis);
    }

    #[test]
    fn test_detect_broken_json_is_analysis() {
        assert_eq!(detect_input("{ not json"), InputKind::Analysis);
    }

    #[test]
    fn test_detect_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("response.json");
        std::fs::write(&path, r#"{"ai_analysis": "hi"}"#).unwrap();
        assert_eq!(detect_input_from_path(&path).unwrap(), InputKind::Response);
    }

    #[test]
    fn test_display() {
        assert_eq!(InputKind::Response.to_string(), "recommendation response");
    }
}
