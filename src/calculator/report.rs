//! Tabular views of computed stats: sorting and clipboard-style export

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::types::{PlayerStats, StatColumn};

/// One table row
pub type StatsRow<'a> = (&'a str, &'a PlayerStats);

/// Rows ordered by a column. Ties fall back to player name.
pub fn sorted_rows(
    stats: &HashMap<String, PlayerStats>,
    column: StatColumn,
    descending: bool,
) -> Vec<StatsRow<'_>> {
    let mut rows: Vec<StatsRow<'_>> = stats.iter().map(|(n, s)| (n.as_str(), s)).collect();
    rows.sort_by(|a, b| {
        let primary = match (column.value(a.1), column.value(b.1)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => a.0.cmp(b.0),
        };
        let primary = if descending { primary.reverse() } else { primary };
        primary.then_with(|| a.0.cmp(b.0))
    });
    rows
}

fn cells<'a>(row: &StatsRow<'a>) -> impl Iterator<Item = String> + 'a {
    let (name, stats) = *row;
    StatColumn::ALL.into_iter().map(move |c| c.format(name, stats))
}

/// Tab-separated header plus one line per row, for pasting into spreadsheets
pub fn to_tsv(rows: &[StatsRow<'_>]) -> String {
    let header: Vec<&str> = StatColumn::ALL.iter().map(|c| c.header()).collect();
    let mut lines = vec![header.join("\t")];
    for row in rows {
        lines.push(cells(row).collect::<Vec<_>>().join("\t"));
    }
    lines.join("\n")
}

/// One "Column: value" block per player, blocks separated by `---`
pub fn to_text(rows: &[StatsRow<'_>]) -> String {
    rows.iter()
        .map(|row| {
            StatColumn::ALL
                .iter()
                .zip(cells(row))
                .map(|(c, v)| format!("{}: {}", c.header(), v))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}
