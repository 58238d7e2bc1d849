//! Statistics commands

mod compute_stats;
mod export_stats;

pub use compute_stats::ComputeStatsCommand;
pub use export_stats::ExportStatsCommand;
