//! Change pitcher command

use serde::Deserialize;
use serde_json::{json, Value};

use crate::calculator::SharedCalculator;
use crate::protocol::{parse_args, to_value, Command, CommandDef, CommandResult};

#[derive(Deserialize)]
struct ChangePitcherArgs {
    name: String,
}

/// Brings in a new pitcher for the fielding team
pub struct ChangePitcherCommand {
    calc: SharedCalculator,
}

impl ChangePitcherCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for ChangePitcherCommand {
    fn definition(&self) -> CommandDef {
        CommandDef::new(
            "change_pitcher",
            "Replace the pitcher of the fielding team",
            true,
            json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "New pitcher name" }
                },
                "required": ["name"]
            }),
        )
    }

    fn execute(&self, args: Value) -> CommandResult<Value> {
        let args: ChangePitcherArgs = parse_args(args)?;
        let mut calc = self.calc.lock();
        calc.change_pitcher(&args.name)?;
        to_value(&calc.snapshot())
    }
}
