//! List known players command

use serde_json::{json, Value};

use crate::calculator::SharedCalculator;
use crate::protocol::{Command, CommandDef, CommandResult};

/// Every player name ever entered, for autocomplete
pub struct ListKnownPlayersCommand {
    calc: SharedCalculator,
}

impl ListKnownPlayersCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for ListKnownPlayersCommand {
    fn definition(&self) -> CommandDef {
        CommandDef::new(
            "list_known_players",
            "All registered player names, sorted",
            false,
            json!({ "type": "object", "properties": {}, "required": [] }),
        )
    }

    fn execute(&self, _args: Value) -> CommandResult<Value> {
        let players = self.calc.lock().list_known_players();
        Ok(json!({ "players": players }))
    }
}
