//! Ship types (catalog entries) and ship instances placed by players.

use alloc::vec::Vec;

use crate::core::geometry::{Direction, Point};

/// Catalog entry: name, shape and how many ships of it each player places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    id: usize,
    name: &'static str,
    cell_offsets: &'static [Point],
    count: usize,
}

impl ShipType {
    /// Create a new ship type. `cell_offsets` excludes the anchor `(0, 0)`
    /// and is given for the canonical direction.
    pub const fn new(
        id: usize,
        name: &'static str,
        cell_offsets: &'static [Point],
        count: usize,
    ) -> Self {
        Self {
            id,
            name,
            cell_offsets,
            count,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Offsets of every cell but the anchor.
    pub fn cell_offsets(&self) -> &'static [Point] {
        self.cell_offsets
    }

    /// Ships of this type per player.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of cells a ship of this type occupies.
    pub fn size(&self) -> usize {
        self.cell_offsets.len() + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum ShipStatus {
    #[default]
    Afloat,
    Sunk,
}

/// A ship owned by one player.
///
/// `Clone` copies the cell list, so edits are always made on a clone and
/// swapped in only once validated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    pub id: u32,
    pub ship_type_id: usize,
    pub direction: Direction,
    pub status: ShipStatus,
    /// Absolute cells, anchor first. Empty until placed.
    pub cells: Vec<Point>,
}

impl Ship {
    /// New unplaced ship of `ship_type`.
    pub fn new(ship_type: &ShipType, direction: Direction, id: u32) -> Self {
        Ship {
            id,
            ship_type_id: ship_type.id(),
            direction,
            status: ShipStatus::Afloat,
            cells: Vec::new(),
        }
    }

    pub fn is_placed(&self) -> bool {
        !self.cells.is_empty()
    }

    pub fn is_sunk(&self) -> bool {
        self.status == ShipStatus::Sunk
    }

    /// Anchor cell, once placed.
    pub fn anchor(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.cells.contains(&point)
    }

    /// Copy of this ship moved to `cells` facing `direction`.
    pub fn relocated(&self, cells: Vec<Point>, direction: Direction) -> Ship {
        Ship {
            cells,
            direction,
            ..self.clone()
        }
    }
}
