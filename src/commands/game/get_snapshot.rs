//! Get snapshot command

use serde_json::{json, Value};

use crate::calculator::SharedCalculator;
use crate::protocol::{to_value, Command, CommandDef, CommandResult};

/// Returns the live state of the active game, or null
pub struct GetSnapshotCommand {
    calc: SharedCalculator,
}

impl GetSnapshotCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for GetSnapshotCommand {
    fn definition(&self) -> CommandDef {
        CommandDef::new(
            "get_snapshot",
            "Count, outs, inning, batter and pitcher of the active game. Null when no game is active.",
            false,
            json!({ "type": "object", "properties": {}, "required": [] }),
        )
    }

    fn execute(&self, _args: Value) -> CommandResult<Value> {
        let snapshot = self.calc.lock().snapshot();
        to_value(&snapshot)
    }
}
