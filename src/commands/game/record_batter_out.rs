//! Record batter out command

use serde_json::{json, Value};

use crate::calculator::SharedCalculator;
use crate::protocol::{to_value, Command, CommandDef, CommandResult};

/// Retires the batter and moves to the next one
pub struct RecordBatterOutCommand {
    calc: SharedCalculator,
}

impl RecordBatterOutCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for RecordBatterOutCommand {
    fn definition(&self) -> CommandDef {
        CommandDef::new(
            "record_batter_out",
            "Record the batter out on a play that was not logged as a pitch",
            true,
            json!({ "type": "object", "properties": {}, "required": [] }),
        )
    }

    fn execute(&self, _args: Value) -> CommandResult<Value> {
        let mut calc = self.calc.lock();
        calc.record_batter_out()?;
        to_value(&calc.snapshot())
    }
}
