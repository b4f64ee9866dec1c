//! Core battleship rules engine (no_std compatible)
//!
//! This module contains the pure game logic: geometry, boards, ships,
//! placement validation and the game state machine. It only needs `alloc`,
//! so it can be used in embedded systems or compiled to WebAssembly.

pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod geometry;
pub mod placement;
pub mod ship;

// Re-export commonly used types
pub use board::{Board, BoardCell, CellStatus};
pub use common::{GameError, Reference, ShotResult};
pub use config::*;
pub use game::{
    GameEngine, GameStatus, PlayerState, SetupStatus, ShipEdit, ShotOutcome, Turn, COMBO_STEP,
    NUM_PLAYERS,
};
pub use geometry::{
    apply_offsets, bounding_rectangle, is_out_of_bound, rotate_points, surrounding_cells,
    try_push_from_edges, DecodedPoint, Direction, Point, PointParseError, Rect,
};
pub use placement::{occupied_cells, place, random_placement, Placement};
pub use ship::{Ship, ShipStatus, ShipType};
