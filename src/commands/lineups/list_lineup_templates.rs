//! List lineup templates command

use serde_json::{json, Value};

use crate::calculator::SharedCalculator;
use crate::protocol::{to_value, Command, CommandDef, CommandResult};

pub struct ListLineupTemplatesCommand {
    calc: SharedCalculator,
}

impl ListLineupTemplatesCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for ListLineupTemplatesCommand {
    fn definition(&self) -> CommandDef {
        CommandDef::new(
            "list_lineup_templates",
            "All saved lineups keyed by name",
            false,
            json!({ "type": "object", "properties": {}, "required": [] }),
        )
    }

    fn execute(&self, _args: Value) -> CommandResult<Value> {
        let calc = self.calc.lock();
        Ok(json!({ "lineups": to_value(calc.list_lineup_templates())? }))
    }
}
