//! Export stats command

use serde::Deserialize;
use serde_json::{json, Value};

use crate::calculator::report::{sorted_rows, to_text, to_tsv};
use crate::calculator::SharedCalculator;
use crate::protocol::{parse_args, Command, CommandDef, CommandError, CommandResult};
use crate::types::{RoleFilter, StatColumn};

#[derive(Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum ExportFormat {
    #[default]
    Tsv,
    Text,
}

fn default_descending() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportStatsArgs {
    #[serde(default)]
    role: RoleFilter,
    #[serde(default)]
    season: Option<String>,
    #[serde(default)]
    format: ExportFormat,
    #[serde(default)]
    sort_by: Option<String>,
    #[serde(default = "default_descending")]
    descending: bool,
    /// Restrict to these players; all when absent
    #[serde(default)]
    players: Option<Vec<String>>,
}

/// Stats table as clipboard text
pub struct ExportStatsCommand {
    calc: SharedCalculator,
}

impl ExportStatsCommand {
    pub fn new(calc: SharedCalculator) -> Self {
        Self { calc }
    }
}

impl Command for ExportStatsCommand {
    fn definition(&self) -> CommandDef {
        let columns: Vec<&str> = StatColumn::ALL.iter().map(|c| c.header()).collect();
        CommandDef::new(
            "export_stats",
            "Render the stats table as tab-separated text (for spreadsheets) or as one labelled block per player",
            false,
            json!({
                "type": "object",
                "properties": {
                    "role": { "type": "string", "enum": ["batter", "pitcher", "both"] },
                    "season": { "type": "string" },
                    "format": { "type": "string", "enum": ["tsv", "text"] },
                    "sortBy": { "type": "string", "enum": columns },
                    "descending": { "type": "boolean", "description": "Default true" },
                    "players": { "type": "array", "items": { "type": "string" } }
                },
                "required": []
            }),
        )
    }

    fn execute(&self, args: Value) -> CommandResult<Value> {
        let args: ExportStatsArgs = parse_args(args)?;
        let column = match args.sort_by.as_deref() {
            Some(header) => header
                .parse::<StatColumn>()
                .map_err(CommandError::InvalidArguments)?,
            None => StatColumn::Player,
        };
        let descending = args.descending && column != StatColumn::Player;

        let stats = self
            .calc
            .lock()
            .compute_stats(args.role, args.season.as_deref());
        let mut rows = sorted_rows(&stats, column, descending);
        if let Some(players) = &args.players {
            rows.retain(|row| players.iter().any(|p| p.as_str() == row.0));
        }

        let text = match args.format {
            ExportFormat::Tsv => to_tsv(&rows),
            ExportFormat::Text => to_text(&rows),
        };
        Ok(json!({ "rows": rows.len(), "text": text }))
    }
}
