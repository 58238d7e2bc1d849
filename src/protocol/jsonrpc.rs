//! JSON-RPC 2.0 protocol types

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::CalculatorError;

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

/// JSON-RPC 2.0 Request
#[derive(Deserialize, Debug, Clone)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Check if this is a valid JSON-RPC 2.0 request
    pub fn is_valid(&self) -> bool {
        self.jsonrpc == "2.0"
    }

    /// Check if this is a notification (no id)
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// JSON-RPC 2.0 Success Response
#[derive(Serialize, Debug)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    pub result: Value,
}

impl JsonRpcResponse {
    pub fn new(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result,
        }
    }
}

/// JSON-RPC 2.0 Error Response
#[derive(Serialize, Debug)]
pub struct JsonRpcError {
    pub jsonrpc: String,
    pub id: Value,
    pub error: ErrorObject,
}

impl JsonRpcError {
    pub fn new(id: Value, error: ErrorObject) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            error,
        }
    }
}

/// JSON-RPC 2.0 Error Object
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ErrorObject {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ErrorObject {
    pub fn new(code: i32, message: &str, data: Option<Value>) -> Self {
        Self {
            code,
            message: message.to_string(),
            data,
        }
    }

    pub fn parse_error(details: String) -> Self {
        Self::new(PARSE_ERROR, "Parse error", Some(json!({ "details": details })))
    }

    pub fn invalid_request(details: &str) -> Self {
        Self::new(INVALID_REQUEST, "Invalid Request", Some(json!({ "details": details })))
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(METHOD_NOT_FOUND, "Method not found", Some(json!({ "method": method })))
    }

    pub fn invalid_params(details: String) -> Self {
        Self::new(INVALID_PARAMS, "Invalid params", Some(json!({ "details": details })))
    }

    pub fn internal_error(details: String) -> Self {
        Self::new(INTERNAL_ERROR, "Internal error", Some(json!({ "details": details })))
    }
}

/// Failure of a command, before it becomes a JSON-RPC error
#[derive(Debug)]
pub enum CommandError {
    /// Arguments missing or of the wrong shape
    InvalidArguments(String),
    Calculator(CalculatorError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            CommandError::Calculator(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<CalculatorError> for CommandError {
    fn from(e: CalculatorError) -> Self {
        CommandError::Calculator(e)
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(e: serde_json::Error) -> Self {
        CommandError::InvalidArguments(e.to_string())
    }
}

impl From<&CommandError> for ErrorObject {
    fn from(e: &CommandError) -> Self {
        match e {
            CommandError::InvalidArguments(msg) => ErrorObject::invalid_params(msg.clone()),
            CommandError::Calculator(err) if err.is_caller_error() => ErrorObject::new(
                INVALID_PARAMS,
                "Command rejected",
                Some(json!({ "details": err.to_string() })),
            ),
            CommandError::Calculator(err) => ErrorObject::internal_error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_parsing() {
        let req: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"ping"}"#).unwrap();
        assert!(req.is_valid());
        assert!(req.is_notification());
    }

    #[test]
    fn test_error_object_omits_empty_data() {
        let value = serde_json::to_value(ErrorObject::new(1, "x", None)).unwrap();
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_caller_errors_map_to_invalid_params() {
        let err = CommandError::from(CalculatorError::NoActiveGame);
        assert_eq!(ErrorObject::from(&err).code, INVALID_PARAMS);

        let err = CommandError::from(CalculatorError::from(std::io::Error::other("disk")));
        assert_eq!(ErrorObject::from(&err).code, INTERNAL_ERROR);
    }
}
