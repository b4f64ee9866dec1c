//! Common types for the rules engine: engine errors and shot results.

use crate::core::game::GameStatus;
use crate::core::geometry::Point;

/// Result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot hit a ship that is still afloat.
    Hit { ship_id: u32 },
    /// Shot missed all ships.
    Miss,
    /// Shot hit the last intact cell of a ship, carrying its id.
    Sink { ship_id: u32 },
}

impl ShotResult {
    /// Returns `true` for both `Hit` and `Sink`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Something a command referred to that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    /// Player index outside `0..=1`.
    Player(usize),
    /// Ship id not owned by the addressed player.
    Ship(u32),
    /// Ship-type id not present in the catalog.
    ShipType(usize),
    /// Point outside the board.
    Cell(Point),
}

/// Errors returned by engine commands.
///
/// All of them are contract violations by the caller. A command that fails
/// leaves the engine exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Operation invoked in the wrong phase.
    StateMismatch {
        operation: &'static str,
        status: GameStatus,
    },
    /// Referenced player, ship, ship type or cell does not exist.
    InvalidReference(Reference),
    /// Cell was already resolved as hit or no-ship.
    AlreadyResolvedCell(Point),
    /// Shape cannot be pushed fully on-board.
    UnfitGeometry,
    /// `start_game` before a player placed the whole fleet.
    IncompletePlacement {
        player: usize,
        placed: usize,
        required: usize,
    },
    /// Candidate cells overlap or touch an already placed ship.
    PlacementBlocked,
    /// All ships of this type are already placed.
    ShipTypeExhausted { ship_type_id: usize },
    /// Turn cannot end before the current player shoots.
    NoShotThisTurn,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::StateMismatch { operation, status } => {
                write!(f, "`{}` is not allowed while the game is {:?}", operation, status)
            }
            GameError::InvalidReference(Reference::Player(i)) => {
                write!(f, "Unknown player index {}", i)
            }
            GameError::InvalidReference(Reference::Ship(id)) => write!(f, "Unknown ship id {}", id),
            GameError::InvalidReference(Reference::ShipType(id)) => {
                write!(f, "Unknown ship type id {}", id)
            }
            GameError::InvalidReference(Reference::Cell(p)) => {
                write!(f, "Cell {} is outside the board", p)
            }
            GameError::AlreadyResolvedCell(p) => write!(f, "Cell {} was already shot", p),
            GameError::UnfitGeometry => write!(f, "Ship shape does not fit on the board"),
            GameError::IncompletePlacement {
                player,
                placed,
                required,
            } => write!(
                f,
                "Player {} placed {} of {} ships",
                player, placed, required
            ),
            GameError::PlacementBlocked => {
                write!(f, "Ship placement overlaps or touches another ship")
            }
            GameError::ShipTypeExhausted { ship_type_id } => {
                write!(f, "No ships of type {} left to place", ship_type_id)
            }
            GameError::NoShotThisTurn => write!(f, "Player has not shot during this turn"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
