//! Save lineup template command

use serde::Deserialize;
use serde_json::{json, Value};

use crate::calculator::SharedCalculator;
use crate::protocol::{parse_args, to_value, Command, CommandDef, CommandResult};

#[derive(Deserialize)]
struct SaveLineupArgs {
    name: String,
    players: Vec<String>,
    #[serde(default)]
    team: Option<String>,
    #[serde(default)]
    pitcher: Option<String>,
}

/// Stores a named batting order for reuse at game setup
pub struct SaveLineupTemplateCommand {
    calc: SharedCalculator,
}

impl SaveLineupTemplateCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for SaveLineupTemplateCommand {
    fn definition(&self) -> CommandDef {
        CommandDef::new(
            "save_lineup_template",
            "Save (or overwrite) a named lineup of 9 players with optional team and pitcher",
            true,
            json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "players": {
                        "type": "array",
                        "items": { "type": "string" },
                        "minItems": 9,
                        "maxItems": 9
                    },
                    "team": { "type": "string" },
                    "pitcher": { "type": "string" }
                },
                "required": ["name", "players"]
            }),
        )
    }

    fn execute(&self, args: Value) -> CommandResult<Value> {
        let args: SaveLineupArgs = parse_args(args)?;
        let saved = self.calc.lock().save_lineup_template(
            &args.name,
            args.players,
            args.team,
            args.pitcher,
        )?;
        to_value(&saved)
    }
}
