//! Start game command

use serde::Deserialize;
use serde_json::{json, Value};

use crate::calculator::{NewGame, SharedCalculator};
use crate::protocol::{parse_args, to_value, Command, CommandDef, CommandResult};
use crate::types::GameSnapshot;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StartGameArgs {
    home_team: String,
    away_team: String,
    home_lineup: Vec<String>,
    away_lineup: Vec<String>,
    home_pitcher: String,
    away_pitcher: String,
    #[serde(default)]
    season: String,
}

/// Creates a game from two lineups and makes it the active one
pub struct StartGameCommand {
    calc: SharedCalculator,
}

impl StartGameCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for StartGameCommand {
    fn definition(&self) -> CommandDef {
        let lineup = json!({
            "type": "array",
            "items": { "type": "string" },
            "minItems": 9,
            "maxItems": 9,
            "description": "Batting order, exactly 9 names"
        });
        CommandDef::new(
            "start_game",
            "Start a new game; the away team bats first. Clears undo history.",
            true,
            json!({
                "type": "object",
                "properties": {
                    "homeTeam": { "type": "string" },
                    "awayTeam": { "type": "string" },
                    "homeLineup": lineup,
                    "awayLineup": lineup,
                    "homePitcher": { "type": "string" },
                    "awayPitcher": { "type": "string" },
                    "season": { "type": "string", "description": "Season label used by stats filters" }
                },
                "required": ["homeTeam", "awayTeam", "homeLineup", "awayLineup", "homePitcher", "awayPitcher"]
            }),
        )
    }

    fn execute(&self, args: Value) -> CommandResult<Value> {
        let args: StartGameArgs = parse_args(args)?;
        let setup = NewGame {
            home_team: args.home_team,
            away_team: args.away_team,
            home_lineup: args.home_lineup,
            away_lineup: args.away_lineup,
            home_pitcher: args.home_pitcher,
            away_pitcher: args.away_pitcher,
            season: args.season,
        };

        let game = self.calc.lock().start_game(setup)?;
        Ok(json!({
            "id": game.id,
            "date": game.date,
            "snapshot": to_value(&GameSnapshot::from(&game))?
        }))
    }
}
