//! Record batter safe command

use serde_json::{json, Value};

use crate::calculator::SharedCalculator;
use crate::protocol::{to_value, Command, CommandDef, CommandResult};

/// Sends the batter to base and moves to the next one
pub struct RecordBatterSafeCommand {
    calc: SharedCalculator,
}

impl RecordBatterSafeCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for RecordBatterSafeCommand {
    fn definition(&self) -> CommandDef {
        CommandDef::new(
            "record_batter_safe",
            "Record the batter reaching base on a play that was not logged as a pitch",
            true,
            json!({ "type": "object", "properties": {}, "required": [] }),
        )
    }

    fn execute(&self, _args: Value) -> CommandResult<Value> {
        let mut calc = self.calc.lock();
        calc.record_batter_safe()?;
        to_value(&calc.snapshot())
    }
}
