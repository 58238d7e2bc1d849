//! Delete game command

use serde::Deserialize;
use serde_json::{json, Value};

use crate::calculator::SharedCalculator;
use crate::protocol::{parse_args, Command, CommandDef, CommandResult};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteGameArgs {
    game_id: String,
}

/// Removes a game and its pitch log from the store
pub struct DeleteGameCommand {
    calc: SharedCalculator,
}

impl DeleteGameCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for DeleteGameCommand {
    fn definition(&self) -> CommandDef {
        CommandDef::new(
            "delete_game",
            "Delete a game by id. If it is the active game, no game is active afterwards.",
            true,
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
        let args: DeleteGameArgs = parse_args(args)?;
        let deleted = self.calc.lock().delete_game(&args.game_id)?;
        Ok(json!({ "deleted": deleted }))
    }
}
