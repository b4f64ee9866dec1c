//! Grid of shot results as seen by the shooting player.

use alloc::vec;
use alloc::vec::Vec;

use crate::core::geometry::{is_out_of_bound, Point};

/// Resolution state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "kebab-case"))]
pub enum CellStatus {
    #[default]
    Untouched,
    Hit,
    /// Missed shot, or a cell next to a sunk ship.
    NoShip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardCell {
    pub status: CellStatus,
    /// Id of the ship that was hit here, set only on `Hit`.
    pub ship_id: Option<u32>,
}

impl BoardCell {
    pub fn is_resolved(&self) -> bool {
        self.status != CellStatus::Untouched
    }
}

/// Fixed-size board indexed as `cells[x][y]`.
///
/// Only the game engine mutates cells, so the public surface is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: Vec<Vec<BoardCell>>,
}

impl Board {
    /// Create a board of `size` with every cell untouched.
    pub fn new(size: Point) -> Self {
        let width = size.x.max(0) as usize;
        let height = size.y.max(0) as usize;
        Board {
            cells: vec![vec![BoardCell::default(); height]; width],
        }
    }

    /// Board dimensions; `(0, 0)` for an empty board.
    pub fn size(&self) -> Point {
        match self.cells.first() {
            Some(column) => Point::new(self.cells.len() as i32, column.len() as i32),
            None => Point::ORIGIN,
        }
    }

    pub fn cell(&self, point: Point) -> Option<&BoardCell> {
        if is_out_of_bound(point, self.size()) {
            return None;
        }
        Some(&self.cells[point.x as usize][point.y as usize])
    }

    pub(crate) fn cell_mut(&mut self, point: Point) -> Option<&mut BoardCell> {
        if is_out_of_bound(point, self.size()) {
            return None;
        }
        Some(&mut self.cells[point.x as usize][point.y as usize])
    }

    /// Status at `point`, `None` when off the board.
    pub fn status(&self, point: Point) -> Option<CellStatus> {
        self.cell(point).map(|c| c.status)
    }

    /// Iterate over every cell with its coordinates, column by column.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &BoardCell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(y, cell)| (Point::new(x as i32, y as i32), cell))
        })
    }

    /// Number of cells with the given status.
    pub fn count(&self, status: CellStatus) -> usize {
        self.iter().filter(|(_, c)| c.status == status).count()
    }
}
