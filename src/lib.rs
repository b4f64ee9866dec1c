#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
#[cfg(feature = "std")]
mod logging;
mod player;
pub mod protocol;
#[cfg(feature = "std")]
pub mod scoreboard;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use player::*;
pub use protocol::*;
#[cfg(feature = "std")]
pub use scoreboard::{
    FileStore, GameResult, MemoryStore, PlayerScore, Scoreboard, ScoreboardEntry,
    ScoreboardError, ScoreboardReporter, ScoreboardStore, SCOREBOARD_KEY,
};
