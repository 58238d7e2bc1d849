//! Log pitch command

use serde::Deserialize;
use serde_json::{json, Value};

use crate::calculator::SharedCalculator;
use crate::protocol::{parse_args, to_value, Command, CommandDef, CommandResult};
use crate::types::{PitchResult, Zone};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LogPitchArgs {
    zone: Zone,
    result: PitchResult,
    #[serde(default)]
    is_first_pitch: Option<bool>,
}

/// Records one pitch and advances the count
pub struct LogPitchCommand {
    calc: SharedCalculator,
}

impl LogPitchCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for LogPitchCommand {
    fn definition(&self) -> CommandDef {
        let results: Vec<&str> = PitchResult::ALL.iter().map(|r| r.label()).collect();
        CommandDef::new(
            "log_pitch",
            "Log a pitch for the current batter and pitcher, then apply it to the count",
            true,
            json!({
                "type": "object",
                "properties": {
                    "zone": { "type": "string", "enum": ["In", "Out"] },
                    "result": { "type": "string", "enum": results },
                    "isFirstPitch": {
                        "type": "boolean",
                        "description": "Defaults to true when the count is 0-0"
                    }
                },
                "required": ["zone", "result"]
            }),
        )
    }

    fn execute(&self, args: Value) -> CommandResult<Value> {
        let args: LogPitchArgs = parse_args(args)?;
        let mut calc = self.calc.lock();
        let pitch = calc.log_pitch(args.zone, args.result, args.is_first_pitch)?;
        Ok(json!({
            "pitch": to_value(&pitch)?,
            "snapshot": to_value(&calc.snapshot())?
        }))
    }
}
