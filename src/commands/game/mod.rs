//! Game commands: start, pitch logging, substitutions, outs and undo

mod change_pitcher;
mod close_game;
mod get_snapshot;
mod log_pitch;
mod record_batter_out;
mod record_batter_safe;
mod record_runner_out;
mod start_game;
mod substitute_batter;
mod undo;

pub use change_pitcher::ChangePitcherCommand;
pub use close_game::CloseGameCommand;
pub use get_snapshot::GetSnapshotCommand;
pub use log_pitch::LogPitchCommand;
pub use record_batter_out::RecordBatterOutCommand;
pub use record_batter_safe::RecordBatterSafeCommand;
pub use record_runner_out::RecordRunnerOutCommand;
pub use start_game::StartGameCommand;
pub use substitute_batter::SubstituteBatterCommand;
pub use undo::UndoCommand;
