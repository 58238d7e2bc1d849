//! Substitute batter command

use serde::Deserialize;
use serde_json::{json, Value};

use crate::calculator::SharedCalculator;
use crate::protocol::{parse_args, to_value, Command, CommandDef, CommandResult};

#[derive(Deserialize)]
struct SubstituteBatterArgs {
    name: String,
}

/// Puts a pinch hitter into the current batter's lineup slot
pub struct SubstituteBatterCommand {
    calc: SharedCalculator,
}

impl SubstituteBatterCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for SubstituteBatterCommand {
    fn definition(&self) -> CommandDef {
        CommandDef::new(
            "substitute_batter",
            "Replace the current batter's lineup slot with a pinch hitter",
            true,
            json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Pinch hitter name" }
                },
                "required": ["name"]
            }),
        )
    }

    fn execute(&self, args: Value) -> CommandResult<Value> {
        let args: SubstituteBatterArgs = parse_args(args)?;
        let mut calc = self.calc.lock();
        calc.substitute_batter(&args.name)?;
        to_value(&calc.snapshot())
    }
}
