//! List games command

use serde_json::{json, Value};

use crate::calculator::SharedCalculator;
use crate::protocol::{to_value, Command, CommandDef, CommandResult};

/// Lists every stored game with its date, season, teams and score
pub struct ListGamesCommand {
    calc: SharedCalculator,
}

impl ListGamesCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for ListGamesCommand {
    fn definition(&self) -> CommandDef {
        CommandDef::new(
            "list_games",
            "List all stored games",
            false,
            json!({ "type": "object", "properties": {}, "required": [] }),
        )
    }

    fn execute(&self, _args: Value) -> CommandResult<Value> {
        let games = self.calc.lock().list_games();
        Ok(json!({ "games": to_value(&games)? }))
    }
}
