//! List seasons command

use serde_json::{json, Value};

use crate::calculator::SharedCalculator;
use crate::protocol::{Command, CommandDef, CommandResult};

pub struct ListSeasonsCommand {
    calc: SharedCalculator,
}

impl ListSeasonsCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for ListSeasonsCommand {
    fn definition(&self) -> CommandDef {
        CommandDef::new(
            "list_seasons",
            "Distinct non-empty season labels across stored games, sorted",
            false,
            json!({ "type": "object", "properties": {}, "required": [] }),
        )
    }

    fn execute(&self, _args: Value) -> CommandResult<Value> {
        let seasons = self.calc.lock().list_seasons();
        Ok(json!({ "seasons": seasons }))
    }
}
