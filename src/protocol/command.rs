//! Command definitions exposed to the presentation layer

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::CommandError;

/// Result type for command execution
pub type CommandResult<T> = Result<T, CommandError>;

/// Command definition for commands/list
#[derive(Serialize, Debug, Clone)]
pub struct CommandDef {
    pub name: String,
    pub description: String,
    /// Whether the command changes persisted state
    pub mutating: bool,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl CommandDef {
    pub fn new(name: &str, description: &str, mutating: bool, input_schema: Value) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            mutating,
            input_schema,
        }
    }
}

/// Server information returned from initialize
#[derive(Clone, Debug)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: crate::NAME.to_string(),
            version: crate::VERSION.to_string(),
        }
    }
}

/// One operation callable through commands/call
pub trait Command: Send + Sync {
    /// Get the command definition for commands/list
    fn definition(&self) -> CommandDef;

    /// Execute the command with the given arguments
    fn execute(&self, args: Value) -> CommandResult<Value>;

    fn name(&self) -> String {
        self.definition().name
    }
}

/// Deserialize command arguments into a typed struct
pub fn parse_args<T: DeserializeOwned>(args: Value) -> CommandResult<T> {
    serde_json::from_value(args).map_err(CommandError::from)
}

/// Serialize a command result
pub fn to_value<T: Serialize>(value: &T) -> CommandResult<Value> {
    serde_json::to_value(value).map_err(|e| CommandError::InvalidArguments(e.to_string()))
}
