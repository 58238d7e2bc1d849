//! Compute stats command

use serde::Deserialize;
use serde_json::{json, Value};

use crate::calculator::SharedCalculator;
use crate::protocol::{parse_args, to_value, Command, CommandDef, CommandResult};
use crate::types::RoleFilter;

#[derive(Deserialize)]
struct ComputeStatsArgs {
    #[serde(default)]
    role: RoleFilter,
    #[serde(default)]
    season: Option<String>,
}

/// Per-player plate discipline rates across stored games
pub struct ComputeStatsCommand {
    calc: SharedCalculator,
}

impl ComputeStatsCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for ComputeStatsCommand {
    fn definition(&self) -> CommandDef {
        CommandDef::new(
            "compute_stats",
            "Aggregate PA, pitch counts and rate stats (Swing%, O-Swing%, Z-Contact%, CSW%, ...) per player. Rates are percentages; 0.0 when there is nothing to divide by.",
            false,
            json!({
                "type": "object",
                "properties": {
                    "role": {
                        "type": "string",
                        "enum": ["batter", "pitcher", "both"],
                        "description": "Credit each pitch to its batter, its pitcher, or both (default)"
                    },
                    "season": {
                        "type": "string",
                        "description": "Only games with exactly this season label"
                    }
                },
                "required": []
            }),
        )
    }

    fn execute(&self, args: Value) -> CommandResult<Value> {
        let args: ComputeStatsArgs = parse_args(args)?;
        let stats = self
            .calc
            .lock()
            .compute_stats(args.role, args.season.as_deref());
        Ok(json!({ "stats": to_value(&stats)? }))
    }
}
