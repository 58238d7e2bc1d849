//! Command server
//!
//! Reads one JSON-RPC request per line and writes one response per line.
//! Runs on stdio by default; any reader/writer pair works.

mod handlers;

use std::collections::HashMap;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use serde_json::{json, Value};

use crate::protocol::{
    Command, CommandDef, ErrorObject, JsonRpcError, JsonRpcRequest, JsonRpcResponse, ServerInfo,
};

pub use handlers::*;

/// Line-delimited JSON-RPC server dispatching to registered commands
pub struct CommandServer<R = BufReader<io::Stdin>, W = BufWriter<io::Stdout>> {
    server_info: ServerInfo,
    commands: HashMap<String, Box<dyn Command>>,
    reader: R,
    writer: W,
}

impl CommandServer {
    /// Server on stdin/stdout
    pub fn new() -> Self {
        Self::with_info(ServerInfo::default())
    }

    pub fn with_info(info: ServerInfo) -> Self {
        Self::with_io(info, BufReader::new(io::stdin()), BufWriter::new(io::stdout()))
    }
}

impl Default for CommandServer {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> CommandServer<R, W> {
    pub fn with_io(info: ServerInfo, reader: R, writer: W) -> Self {
        Self {
            server_info: info,
            commands: HashMap::new(),
            reader,
            writer,
        }
    }

    /// Register a command with the server
    pub fn register_command(&mut self, command: Box<dyn Command>) -> &mut Self {
        let name = command.name();
        self.commands.insert(name, command);
        self
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Definitions of all registered commands, sorted by name
    pub fn definitions(&self) -> Vec<CommandDef> {
        let mut defs: Vec<CommandDef> = self.commands.values().map(|c| c.definition()).collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Run until the reader is exhausted (blocking)
    pub fn run(&mut self) -> io::Result<()> {
        tracing::info!(
            server = %self.server_info.name,
            version = %self.server_info.version,
            commands = self.commands.len(),
            "command server ready"
        );
        let mut line = String::new();
        while self.reader.read_line(&mut line)? > 0 {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                if let Some(response) = self.handle_line(trimmed) {
                    writeln!(self.writer, "{}", response)?;
                    self.writer.flush()?;
                }
            }
            line.clear();
        }
        tracing::info!("input closed, shutting down");
        Ok(())
    }

    /// Consume the server and hand back the writer
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Handle one request line. Returns the serialized response, or `None`
    /// for notifications.
    pub fn handle_line(&self, request_str: &str) -> Option<String> {
        let request: JsonRpcRequest = match serde_json::from_str(request_str) {
            Ok(req) => req,
            Err(e) => {
                return Some(error_line(Value::Null, ErrorObject::parse_error(e.to_string())));
            }
        };

        if !request.is_valid() {
            return Some(error_line(
                request.id.unwrap_or(Value::Null),
                ErrorObject::invalid_request("jsonrpc must be '2.0'"),
            ));
        }

        let notification = request.is_notification();
        let id = request.id.clone().unwrap_or(Value::Null);
        let outcome = self.dispatch(&request.method, request.params);

        if notification {
            if let Err(e) = &outcome {
                tracing::debug!(method = %request.method, error = %e.message, "notification failed");
            }
            return None;
        }

        Some(match outcome {
            Ok(result) => success_line(id, result),
            Err(error) => error_line(id, error),
        })
    }

    fn dispatch(&self, method: &str, params: Option<Value>) -> Result<Value, ErrorObject> {
        match method {
            "initialize" => Ok(json!({
                "serverInfo": {
                    "name": self.server_info.name,
                    "version": self.server_info.version
                },
                "capabilities": { "commands": {} }
            })),
            "ping" => Ok(json!({})),
            "commands/list" => Ok(json!({ "commands": self.definitions() })),
            "commands/call" => self.call(params),
            other => Err(ErrorObject::method_not_found(other)),
        }
    }

    fn call(&self, params: Option<Value>) -> Result<Value, ErrorObject> {
        let params = params.ok_or_else(|| ErrorObject::invalid_params("Missing parameters".into()))?;
        let name = extract_command_name(&params)
            .ok_or_else(|| ErrorObject::invalid_params("Missing command name".into()))?;

        let command = self.commands.get(name).ok_or_else(|| {
            ErrorObject::new(
                crate::protocol::INVALID_PARAMS,
                "Unknown command",
                Some(json!({ "command": name })),
            )
        })?;

        command.execute(extract_arguments(&params)).map_err(|e| {
            tracing::warn!(command = %name, error = %e, "command failed");
            ErrorObject::from(&e)
        })
    }
}

fn success_line(id: Value, result: Value) -> String {
    serde_json::to_string(&JsonRpcResponse::new(id, result))
        .unwrap_or_else(|e| internal_error_line(e.to_string()))
}

fn error_line(id: Value, error: ErrorObject) -> String {
    serde_json::to_string(&JsonRpcError::new(id, error))
        .unwrap_or_else(|e| internal_error_line(e.to_string()))
}

fn internal_error_line(details: String) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": null,
        "error": { "code": crate::protocol::INTERNAL_ERROR, "message": details }
    })
    .to_string()
}
