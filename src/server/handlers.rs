//! Request helpers for the command server

use serde_json::{json, Value};

/// Extract command arguments from commands/call params
pub fn extract_arguments(params: &Value) -> Value {
    params
        .get("arguments")
        .cloned()
        .filter(|v| !v.is_null())
        .unwrap_or_else(|| json!({}))
}

/// Extract command name from commands/call params
pub fn extract_command_name(params: &Value) -> Option<&str> {
    params.get("name").and_then(|v| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_arguments_default_to_object() {
        assert_eq!(extract_arguments(&json!({"name": "undo"})), json!({}));
        assert_eq!(extract_arguments(&json!({"arguments": null})), json!({}));
        assert_eq!(
            extract_arguments(&json!({"arguments": {"name": "x"}})),
            json!({"name": "x"})
        );
    }

    #[test]
    fn test_command_name() {
        assert_eq!(extract_command_name(&json!({"name": "undo"})), Some("undo"));
        assert_eq!(extract_command_name(&json!({"name": 3})), None);
    }
}
