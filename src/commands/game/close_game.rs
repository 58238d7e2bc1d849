//! Close game command

use serde_json::{json, Value};

use crate::calculator::SharedCalculator;
use crate::protocol::{Command, CommandDef, CommandResult};

/// Leaves the active game; it stays in the catalog
pub struct CloseGameCommand {
    calc: SharedCalculator,
}

impl CloseGameCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for CloseGameCommand {
    fn definition(&self) -> CommandDef {
        CommandDef::new(
            "close_game",
            "End tracking of the active game without deleting it",
            false,
            json!({ "type": "object", "properties": {}, "required": [] }),
        )
    }

    fn execute(&self, _args: Value) -> CommandResult<Value> {
        self.calc.lock().close_game();
        Ok(Value::Null)
    }
}
