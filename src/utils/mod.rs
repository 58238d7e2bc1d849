//! Utility functions and helpers
//!
//! Atomic document writes and timestamp helpers.

pub mod atomic;
pub mod time;

pub use atomic::{atomic_write, move_aside};
pub use time::{backup_timestamp, game_timestamp, BACKUP_STAMP_FORMAT, GAME_DATE_FORMAT};
