//! Load game command

use serde::Deserialize;
use serde_json::{json, Value};

use crate::calculator::SharedCalculator;
use crate::protocol::{parse_args, to_value, Command, CommandDef, CommandResult};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoadGameArgs {
    game_id: String,
}

/// Resumes a stored game as the active one
pub struct LoadGameCommand {
    calc: SharedCalculator,
}

impl LoadGameCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for LoadGameCommand {
    fn definition(&self) -> CommandDef {
        CommandDef::new(
            "load_game",
            "Make a stored game the active one. Clears undo history.",
            false,
            json!({
                "type": "object",
                "properties": {
                    "gameId": { "type": "string" }
                },
                "required": ["gameId"]
            }),
        )
    }

    fn execute(&self, args: Value) -> CommandResult<Value> {
        let args: LoadGameArgs = parse_args(args)?;
        let snapshot = self.calc.lock().load_game(&args.game_id)?;
        to_value(&snapshot)
    }
}
