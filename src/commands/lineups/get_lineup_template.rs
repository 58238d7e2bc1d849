//! Get lineup template command

use serde::Deserialize;
use serde_json::{json, Value};

use crate::calculator::SharedCalculator;
use crate::protocol::{parse_args, to_value, Command, CommandDef, CommandResult};

#[derive(Deserialize)]
struct GetLineupArgs {
    name: String,
}

pub struct GetLineupTemplateCommand {
    calc: SharedCalculator,
}

impl GetLineupTemplateCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for GetLineupTemplateCommand {
    fn definition(&self) -> CommandDef {
        CommandDef::new(
            "get_lineup_template",
            "Fetch one saved lineup by name. Null if it does not exist.",
            false,
            json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string" }
                },
                "required": ["name"]
            }),
        )
    }

    fn execute(&self, args: Value) -> CommandResult<Value> {
        let args: GetLineupArgs = parse_args(args)?;
        let calc = self.calc.lock();
        to_value(&calc.get_lineup_template(&args.name))
    }
}
