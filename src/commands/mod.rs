//! Command implementations
//!
//! One command per externally callable operation, by category:
//! - Game commands (10): start, snapshot, pitches, substitutions, outs, undo
//! - Catalog commands (5): stored games, seasons, player registry
//! - Lineup commands (4): saved lineup templates
//! - Stats commands (2): aggregation and export

pub mod catalog;
pub mod game;
pub mod lineups;
pub mod stats;

use crate::calculator::SharedCalculator;
use crate::server::CommandServer;

pub use catalog::{
    DeleteGameCommand, ListGamesCommand, ListKnownPlayersCommand, ListSeasonsCommand,
    LoadGameCommand,
};
pub use game::{
    ChangePitcherCommand, CloseGameCommand, GetSnapshotCommand, LogPitchCommand,
    RecordBatterOutCommand, RecordBatterSafeCommand, RecordRunnerOutCommand, StartGameCommand,
    SubstituteBatterCommand, UndoCommand,
};
pub use lineups::{
    DeleteLineupTemplateCommand, GetLineupTemplateCommand, ListLineupTemplatesCommand,
    SaveLineupTemplateCommand,
};
pub use stats::{ComputeStatsCommand, ExportStatsCommand};

/// Register all commands with the server
pub fn register_all_commands<R, W>(server: &mut CommandServer<R, W>, calc: SharedCalculator)
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    // Game commands (10)
    server.register_command(Box::new(StartGameCommand::new(calc.clone())));
    server.register_command(Box::new(GetSnapshotCommand::new(calc.clone())));
    server.register_command(Box::new(LogPitchCommand::new(calc.clone())));
    server.register_command(Box::new(SubstituteBatterCommand::new(calc.clone())));
    server.register_command(Box::new(ChangePitcherCommand::new(calc.clone())));
    server.register_command(Box::new(RecordRunnerOutCommand::new(calc.clone())));
    server.register_command(Box::new(RecordBatterOutCommand::new(calc.clone())));
    server.register_command(Box::new(RecordBatterSafeCommand::new(calc.clone())));
    server.register_command(Box::new(UndoCommand::new(calc.clone())));
    server.register_command(Box::new(CloseGameCommand::new(calc.clone())));

    // Catalog commands (5)
    server.register_command(Box::new(ListGamesCommand::new(calc.clone())));
    server.register_command(Box::new(DeleteGameCommand::new(calc.clone())));
    server.register_command(Box::new(LoadGameCommand::new(calc.clone())));
    server.register_command(Box::new(ListSeasonsCommand::new(calc.clone())));
    server.register_command(Box::new(ListKnownPlayersCommand::new(calc.clone())));

    // Lineup commands (4)
    server.register_command(Box::new(SaveLineupTemplateCommand::new(calc.clone())));
    server.register_command(Box::new(DeleteLineupTemplateCommand::new(calc.clone())));
    server.register_command(Box::new(ListLineupTemplatesCommand::new(calc.clone())));
    server.register_command(Box::new(GetLineupTemplateCommand::new(calc.clone())));

    // Stats commands (2)
    server.register_command(Box::new(ComputeStatsCommand::new(calc.clone())));
    server.register_command(Box::new(ExportStatsCommand::new(calc)));
}
