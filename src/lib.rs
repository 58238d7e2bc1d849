//! Plate Discipline Tracker
//!
//! Pitch-by-pitch plate discipline tracking for baseball games. It keeps a
//! live count/outs/inning state machine with snapshot undo, a single-document
//! JSON store, and per-player rate statistics (Swing%, O-Swing%, Whiff%,
//! Put Away%, CSW% and friends).
//!
//! # Modules
//!
//! - `types`: Core data structures (Game, Pitch, SavedLineup, PlayerStats)
//! - `store`: Whole-document persistence
//! - `calculator`: Game state machine, undo history, stats and catalog
//! - `protocol`: JSON-RPC types and the `Command` trait
//! - `commands`: One command per externally callable operation
//! - `server`: Line-delimited JSON-RPC command server
//! - `utils`: Atomic writes and timestamps
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```no_run
//! use plate_discipline::{Calculator, NewGame, PitchResult, StoreConfig, Zone};
//!
//! let mut calc = Calculator::open(StoreConfig::new("data.json"));
//! let lineup = |p: &str| (1..=9).map(|i| format!("{p}{i}")).collect::<Vec<_>>();
//! calc.start_game(NewGame {
//!     home_team: "Bears".into(),
//!     away_team: "Eagles".into(),
//!     home_lineup: lineup("B"),
//!     away_lineup: lineup("E"),
//!     home_pitcher: "Kim".into(),
//!     away_pitcher: "Lee".into(),
//!     season: "2024".into(),
//! })?;
//! calc.log_pitch(Zone::Out, PitchResult::Ball, None)?;
//! println!("{:?}", calc.snapshot());
//! # Ok::<(), plate_discipline::CalculatorError>(())
//! ```

pub mod calculator;
pub mod commands;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod server;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use calculator::{Calculator, NewGame, SharedCalculator};
pub use error::{CalcResult, CalculatorError};
pub use protocol::{Command, CommandDef, ServerInfo};
pub use server::CommandServer;
pub use store::{Store, StoreConfig};
pub use types::{
    Dataset, Game, GameSnapshot, GameState, GameSummary, Pitch, PitchResult, PlayerStats,
    RoleFilter, SavedLineup, Side, SidePair, StatColumn, Team, Zone,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
