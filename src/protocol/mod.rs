//! Protocol types for the command interface
//!
//! JSON-RPC message types and the `Command` trait every operation implements.

mod command;
mod jsonrpc;

pub use command::{parse_args, to_value, Command, CommandDef, CommandResult, ServerInfo};
pub use jsonrpc::{
    CommandError, ErrorObject, JsonRpcError, JsonRpcRequest, JsonRpcResponse, INTERNAL_ERROR,
    INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
};
