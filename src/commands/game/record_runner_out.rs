//! Record runner out command

use serde_json::{json, Value};

use crate::calculator::SharedCalculator;
use crate::protocol::{to_value, Command, CommandDef, CommandResult};

/// Adds an out without ending the plate appearance
pub struct RecordRunnerOutCommand {
    calc: SharedCalculator,
}

impl RecordRunnerOutCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for RecordRunnerOutCommand {
    fn definition(&self) -> CommandDef {
        CommandDef::new(
            "record_runner_out",
            "Record a baserunning out (caught stealing, pick-off). The batter and count stay unless it is the third out.",
            true,
            json!({ "type": "object", "properties": {}, "required": [] }),
        )
    }

    fn execute(&self, _args: Value) -> CommandResult<Value> {
        let mut calc = self.calc.lock();
        calc.record_runner_out()?;
        to_value(&calc.snapshot())
    }
}
