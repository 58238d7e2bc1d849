//! Data types for the plate discipline tracker
//!
//! This module contains all the core data structures used throughout the application.

mod dataset;
mod game;
mod lineup;
mod pitch;
mod side;
mod snapshot;
mod stats;

pub use dataset::Dataset;
pub use game::{Game, GameState, Team, LINEUP_SIZE};
pub use lineup::SavedLineup;
pub use pitch::{Pitch, PitchResult, Zone};
pub use side::{Side, SidePair};
pub use snapshot::{GameSnapshot, GameSummary};
pub use stats::{pct, PlayerStats, RoleFilter, StatColumn, StatCounters};
