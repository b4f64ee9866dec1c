//! Ship placement validation.
//!
//! Ships may not overlap and may not touch each other, not even diagonally,
//! so the occupied set of a fleet is every ship cell plus its neighbourhood.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::Rng;

use crate::core::common::{GameError, Reference};
use crate::core::config::{GameConfig, CANONICAL_DIRECTION};
use crate::core::geometry::{
    apply_offsets, is_out_of_bound, rotate_points, surrounding_cells, try_push_from_edges,
    Direction, Point,
};
use crate::core::ship::{Ship, ShipType};

/// Attempts made by `random_placement` before giving up.
const RANDOM_PLACEMENT_ATTEMPTS: usize = 100;

/// Outcome of validating a candidate placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Absolute cells after rotation and edge pushing, anchor first.
    pub cells: Vec<Point>,
    pub can_place: bool,
}

/// Compute where a shape lands for `anchor` and `direction`, and whether it
/// is free of `occupied` cells.
///
/// Fails with `InvalidReference` when `anchor` is off the board, and with
/// `UnfitGeometry` when the shape cannot fit on the board at all.
pub fn place(
    anchor: Point,
    offsets: &[Point],
    direction: Direction,
    occupied: &BTreeSet<Point>,
    board_size: Point,
) -> Result<Placement, GameError> {
    if is_out_of_bound(anchor, board_size) {
        return Err(GameError::InvalidReference(Reference::Cell(anchor)));
    }
    let rotated = rotate_points(offsets, CANONICAL_DIRECTION, direction);
    let cells = try_push_from_edges(&apply_offsets(anchor, &rotated, true), board_size)?;
    let can_place = !cells.iter().any(|c| occupied.contains(c));
    Ok(Placement { cells, can_place })
}

/// Cells blocked by `ships`, skipping the ship with id `excluding`.
pub fn occupied_cells<'a, I>(ships: I, excluding: Option<u32>, board_size: Point) -> BTreeSet<Point>
where
    I: IntoIterator<Item = &'a Ship>,
{
    let mut occupied = BTreeSet::new();
    for ship in ships {
        if Some(ship.id) == excluding || !ship.is_placed() {
            continue;
        }
        occupied.extend(ship.cells.iter().copied());
        occupied.extend(surrounding_cells(&ship.cells, board_size));
    }
    occupied
}

/// Returns a random legal `(anchor, direction)` for `ship_type`.
pub fn random_placement<R: Rng>(
    rng: &mut R,
    config: &GameConfig,
    ship_type: &ShipType,
    occupied: &BTreeSet<Point>,
) -> Result<(Point, Direction), GameError> {
    for _ in 0..RANDOM_PLACEMENT_ATTEMPTS {
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        let anchor = Point::new(
            rng.random_range(0..config.board_size.x),
            rng.random_range(0..config.board_size.y),
        );
        let placement = place(
            anchor,
            ship_type.cell_offsets(),
            direction,
            occupied,
            config.board_size,
        )?;
        if placement.can_place {
            return Ok((anchor, direction));
        }
    }
    Err(GameError::PlacementBlocked)
}
