use super::common::GameError;
use super::geometry::{apply_offsets, rotate_points, try_push_from_edges, Direction, Point};
use super::ship::ShipType;

pub const BOARD_SIZE: Point = Point::new(10, 10);

/// Direction every catalog shape is described in.
pub const CANONICAL_DIRECTION: Direction = Direction::Right;

pub const NUM_SHIP_TYPES: usize = 4;
pub const SHIP_TYPES: [ShipType; NUM_SHIP_TYPES] = [
    ShipType::new(
        0,
        "Carrier",
        &[
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(3, 0),
            Point::new(4, 0),
        ],
        1,
    ),
    ShipType::new(
        1,
        "Battleship",
        &[Point::new(1, 0), Point::new(2, 0), Point::new(3, 0)],
        1,
    ),
    ShipType::new(2, "Cruiser", &[Point::new(1, 0), Point::new(2, 0)], 2),
    ShipType::new(3, "Destroyer", &[Point::new(1, 0)], 1),
];

/// Board size and ship catalog for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: Point,
    pub ship_types: &'static [ShipType],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            ship_types: &SHIP_TYPES,
        }
    }
}

impl GameConfig {
    pub fn ship_type(&self, id: usize) -> Option<&'static ShipType> {
        self.ship_types.iter().find(|t| t.id() == id)
    }

    /// Ships each player must place before the game can start.
    pub fn ship_count_for_player(&self) -> usize {
        self.ship_types.iter().map(|t| t.count()).sum()
    }

    /// Check that every shape fits on the board in every direction.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.board_size.x <= 0 || self.board_size.y <= 0 {
            return Err(GameError::UnfitGeometry);
        }
        for ship_type in self.ship_types {
            for direction in Direction::ALL {
                let offsets =
                    rotate_points(ship_type.cell_offsets(), CANONICAL_DIRECTION, direction);
                let cells = apply_offsets(Point::ORIGIN, &offsets, true);
                try_push_from_edges(&cells, self.board_size)?;
            }
        }
        Ok(())
    }
}
