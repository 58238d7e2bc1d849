//! Undo command

use serde_json::{json, Value};

use crate::calculator::SharedCalculator;
use crate::protocol::{to_value, Command, CommandDef, CommandResult};

/// Reverts the last mutation of the active game
pub struct UndoCommand {
    calc: SharedCalculator,
}

impl UndoCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for UndoCommand {
    fn definition(&self) -> CommandDef {
        CommandDef::new(
            "undo",
            "Restore the active game to its state before the last pitch, substitution or out. `undone` is false when there is nothing to undo.",
            true,
            json!({ "type": "object", "properties": {}, "required": [] }),
        )
    }

    fn execute(&self, _args: Value) -> CommandResult<Value> {
        let mut calc = self.calc.lock();
        let undone = calc.undo()?;
        Ok(json!({
            "undone": undone,
            "snapshot": to_value(&calc.snapshot())?
        }))
    }
}
