//! Delete lineup template command

use serde::Deserialize;
use serde_json::{json, Value};

use crate::calculator::SharedCalculator;
use crate::protocol::{parse_args, Command, CommandDef, CommandResult};

#[derive(Deserialize)]
struct DeleteLineupArgs {
    name: String,
}

pub struct DeleteLineupTemplateCommand {
    calc: SharedCalculator,
}

impl DeleteLineupTemplateCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for DeleteLineupTemplateCommand {
    fn definition(&self) -> CommandDef {
        CommandDef::new(
            "delete_lineup_template",
            "Delete a saved lineup by name",
            true,
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
        let args: DeleteLineupArgs = parse_args(args)?;
        let deleted = self.calc.lock().delete_lineup_template(&args.name)?;
        Ok(json!({ "deleted": deleted }))
    }
}
