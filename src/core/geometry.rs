//! Coordinate math for ship shapes: rotation, translation, bounding
//! rectangles, neighbourhoods and pushing shapes back inside the board.
//!
//! Boards are addressed as `(x, y)` with the X axis pointing right and the Y
//! axis pointing down. All functions are pure and allocate fresh vectors.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::core::common::GameError;

/// A board coordinate or an offset between two coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise sum.
    pub fn offset_by(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference.
    pub fn minus(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Decode the `"x,y"` key form. Each axis is `None` when it fails to
    /// parse, independently of the other.
    pub fn decode(value: &str) -> DecodedPoint {
        let mut parts = value.split(',');
        let x = parts.next().and_then(|s| s.trim().parse().ok());
        let y = parts.next().and_then(|s| s.trim().parse().ok());
        DecodedPoint { x, y }
    }
}

/// Encodes as `"x,y"`, the key form used for point sets.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Point decoded from its key form, with per-axis validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedPoint {
    pub x: Option<i32>,
    pub y: Option<i32>,
}

impl DecodedPoint {
    /// The point, if both axes decoded.
    pub fn point(self) -> Option<Point> {
        Some(Point::new(self.x?, self.y?))
    }
}

/// Error for parsing a `Point` from its key form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointParseError(pub DecodedPoint);

impl fmt::Display for PointParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed point key (x: {:?}, y: {:?})", self.0.x, self.0.y)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PointParseError {}

impl FromStr for Point {
    type Err = PointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = Point::decode(s);
        decoded.point().ok_or(PointParseError(decoded))
    }
}

/// One of the four placement directions.
///
/// Declaration order is the rotation order: each step to the next variant is
/// a quarter turn `(x, y) -> (-y, x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Direction {
    #[default]
    Right,
    Bottom,
    Left,
    Top,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
        Direction::Top,
    ];

    /// Position in the rotation order.
    pub fn index(self) -> i32 {
        match self {
            Direction::Right => 0,
            Direction::Bottom => 1,
            Direction::Left => 2,
            Direction::Top => 3,
        }
    }

    /// Direction reached after `steps` quarter turns (negative turns back).
    pub fn turned(self, steps: i32) -> Direction {
        Direction::ALL[(self.index() + steps).rem_euclid(4) as usize]
    }
}

/// Axis-aligned rectangle given by its inclusive corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Rect {
    /// Size of the rectangle in cells.
    pub fn dimensions(&self) -> Point {
        self.bottom_right
            .minus(self.top_left)
            .offset_by(Point::new(1, 1))
    }
}

/// Rotate offsets from one direction to another around the origin.
pub fn rotate_points(points: &[Point], from: Direction, to: Direction) -> Vec<Point> {
    let steps = to.index() - from.index();
    points
        .iter()
        .map(|&p| {
            let mut p = p;
            if steps > 0 {
                for _ in 0..steps {
                    p = Point::new(-p.y, p.x);
                }
            } else {
                for _ in steps..0 {
                    p = Point::new(p.y, -p.x);
                }
            }
            p
        })
        .collect()
}

/// Translate `offsets` by `anchor`, optionally preceded by the anchor itself.
pub fn apply_offsets(anchor: Point, offsets: &[Point], include_anchor: bool) -> Vec<Point> {
    let mut points = Vec::with_capacity(offsets.len() + 1);
    if include_anchor {
        points.push(anchor);
    }
    points.extend(offsets.iter().map(|&o| anchor.offset_by(o)));
    points
}

/// Smallest rectangle containing every point.
pub fn bounding_rectangle(points: &[Point]) -> Result<Rect, GameError> {
    let (first, rest) = points.split_first().ok_or(GameError::UnfitGeometry)?;
    let mut rect = Rect {
        top_left: *first,
        bottom_right: *first,
    };
    for p in rest {
        rect.top_left.x = rect.top_left.x.min(p.x);
        rect.top_left.y = rect.top_left.y.min(p.y);
        rect.bottom_right.x = rect.bottom_right.x.max(p.x);
        rect.bottom_right.y = rect.bottom_right.y.max(p.y);
    }
    Ok(rect)
}

pub fn is_out_of_bound(point: Point, size: Point) -> bool {
    point.x < 0 || point.x >= size.x || point.y < 0 || point.y >= size.y
}

/// Moore neighbourhood of a point set, clipped to the board and excluding
/// the input points. Returned in ascending `(x, y)` order.
pub fn surrounding_cells(points: &[Point], size: Point) -> Vec<Point> {
    let own: BTreeSet<Point> = points.iter().copied().collect();
    let mut around = BTreeSet::new();
    for p in points {
        for x in (p.x - 1).max(0)..(p.x + 2).min(size.x) {
            for y in (p.y - 1).max(0)..(p.y + 2).min(size.y) {
                let cell = Point::new(x, y);
                if !own.contains(&cell) {
                    around.insert(cell);
                }
            }
        }
    }
    around.into_iter().collect()
}

/// Move a point set by one combined offset so that it lies on the board.
///
/// Points already on the board are returned unchanged. Fails with
/// `UnfitGeometry` when the set is wider or taller than the board.
pub fn try_push_from_edges(points: &[Point], size: Point) -> Result<Vec<Point>, GameError> {
    let rect = bounding_rectangle(points)?;
    let dims = rect.dimensions();
    if dims.x > size.x || dims.y > size.y {
        return Err(GameError::UnfitGeometry);
    }
    let push_x = axis_push(rect.top_left.x, rect.bottom_right.x, size.x)?;
    let push_y = axis_push(rect.top_left.y, rect.bottom_right.y, size.y)?;
    let shift = Point::new(push_x, push_y);
    Ok(points.iter().map(|&p| p.offset_by(shift)).collect())
}

fn axis_push(min: i32, max: i32, size: i32) -> Result<i32, GameError> {
    let towards_end = (-min).max(0);
    let towards_start = (max - (size - 1)).max(0);
    if towards_end > 0 && towards_start > 0 {
        return Err(GameError::UnfitGeometry);
    }
    Ok(towards_end - towards_start)
}
