use battleship_engine::{
    apply_offsets, bounding_rectangle, is_out_of_bound, rotate_points, surrounding_cells,
    try_push_from_edges, Direction, GameError, Point, Rect,
};

fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

const BOARD: Point = Point::new(10, 10);

#[test]
fn test_rotate_quarter_turns() {
    let shape = pts(&[(0, 0), (1, -1), (1, 2)]);
    assert_eq!(
        rotate_points(&shape, Direction::Right, Direction::Bottom),
        pts(&[(0, 0), (1, 1), (-2, 1)])
    );
    assert_eq!(
        rotate_points(&pts(&[(0, 0), (1, 1), (-2, 1)]), Direction::Bottom, Direction::Right),
        shape
    );
    assert_eq!(
        rotate_points(&shape, Direction::Right, Direction::Left),
        pts(&[(0, 0), (-1, 1), (-1, -2)])
    );
    assert_eq!(
        rotate_points(&pts(&[(0, 0), (0, 1), (0, 2)]), Direction::Bottom, Direction::Left),
        pts(&[(0, 0), (-1, 0), (-2, 0)])
    );
    assert_eq!(
        rotate_points(&pts(&[(0, 0), (0, -1)]), Direction::Top, Direction::Right),
        pts(&[(0, 0), (1, 0)])
    );
}

#[test]
fn test_rotate_right_to_top() {
    let line = pts(&[(0, 0), (1, 0), (2, 0), (3, 0)]);
    assert_eq!(
        rotate_points(&line, Direction::Right, Direction::Top),
        pts(&[(0, 0), (0, -1), (0, -2), (0, -3)])
    );
    assert_eq!(rotate_points(&line, Direction::Left, Direction::Left), line);
}

#[test]
fn test_direction_turned_wraps() {
    assert_eq!(Direction::Right.turned(1), Direction::Bottom);
    assert_eq!(Direction::Top.turned(1), Direction::Right);
    assert_eq!(Direction::Right.turned(-1), Direction::Top);
    assert_eq!(Direction::Left.turned(-22), Direction::Right);
    assert_eq!(Direction::Bottom.turned(8), Direction::Bottom);
}

#[test]
fn test_surrounding_cells_corner() {
    assert_eq!(
        surrounding_cells(&pts(&[(0, 0)]), BOARD),
        pts(&[(0, 1), (1, 0), (1, 1)])
    );
}

#[test]
fn test_surrounding_cells_line_and_edge() {
    let mut around = surrounding_cells(&pts(&[(1, 2), (2, 2), (3, 2)]), BOARD);
    around.sort();
    let mut expected = pts(&[
        (0, 1),
        (0, 2),
        (0, 3),
        (1, 1),
        (1, 3),
        (2, 1),
        (2, 3),
        (3, 1),
        (3, 3),
        (4, 1),
        (4, 2),
        (4, 3),
    ]);
    expected.sort();
    assert_eq!(around, expected);

    let mut edge = surrounding_cells(&pts(&[(9, 9), (9, 8), (9, 7), (9, 6), (9, 5)]), BOARD);
    edge.sort();
    let mut expected = pts(&[(8, 4), (8, 5), (8, 6), (8, 7), (8, 8), (8, 9), (9, 4)]);
    expected.sort();
    assert_eq!(edge, expected);
}

#[test]
fn test_surrounding_cells_diagonal_pair_dedup() {
    let around = surrounding_cells(&pts(&[(4, 5), (5, 6)]), BOARD);
    assert_eq!(around.len(), 12);
    assert!(!around.contains(&Point::new(4, 5)));
    assert!(!around.contains(&Point::new(5, 6)));
    assert!(around.contains(&Point::new(5, 5)));
    assert!(around.contains(&Point::new(4, 6)));
}

#[test]
fn test_apply_offsets() {
    assert_eq!(
        apply_offsets(Point::new(3, 4), &pts(&[(0, 0), (0, -1)]), true),
        pts(&[(3, 4), (3, 4), (3, 3)])
    );
    assert_eq!(
        apply_offsets(Point::new(3, 7), &pts(&[(0, 0), (1, 0), (2, 0), (3, 0)]), false),
        pts(&[(3, 7), (4, 7), (5, 7), (6, 7)])
    );
    assert_eq!(apply_offsets(Point::new(1, 1), &[], true), pts(&[(1, 1)]));
}

#[test]
fn test_push_from_edges() {
    assert_eq!(
        try_push_from_edges(&pts(&[(-3, 0), (-2, 0), (-1, 0), (0, 0), (1, 0)]), BOARD).unwrap(),
        pts(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)])
    );
    assert_eq!(
        try_push_from_edges(&pts(&[(-6, 4), (-5, 4), (-4, 4)]), BOARD).unwrap(),
        pts(&[(0, 4), (1, 4), (2, 4)])
    );
    assert_eq!(
        try_push_from_edges(&pts(&[(16, 10), (15, 10), (14, 10)]), BOARD).unwrap(),
        pts(&[(9, 9), (8, 9), (7, 9)])
    );
    assert_eq!(
        try_push_from_edges(&pts(&[(13, -6), (13, -5), (13, -4), (13, -3)]), BOARD).unwrap(),
        pts(&[(9, 0), (9, 1), (9, 2), (9, 3)])
    );
    assert_eq!(
        try_push_from_edges(&pts(&[(-1, -1), (0, -1), (-1, 0), (0, 0)]), BOARD).unwrap(),
        pts(&[(0, 0), (1, 0), (0, 1), (1, 1)])
    );
}

#[test]
fn test_push_from_edges_too_wide() {
    let wide: Vec<Point> = (-1..11).map(|x| Point::new(x, 0)).collect();
    assert_eq!(try_push_from_edges(&wide, BOARD), Err(GameError::UnfitGeometry));
    let tall: Vec<Point> = (0..11).map(|y| Point::new(2, y)).collect();
    assert_eq!(try_push_from_edges(&tall, BOARD), Err(GameError::UnfitGeometry));
}

#[test]
fn test_bounding_rectangle() {
    assert_eq!(
        bounding_rectangle(&pts(&[(0, 0)])).unwrap(),
        Rect {
            top_left: Point::new(0, 0),
            bottom_right: Point::new(0, 0),
        }
    );
    let rect = bounding_rectangle(&pts(&[(0, 0), (0, 1), (0, 2), (0, 3)])).unwrap();
    assert_eq!(rect.bottom_right, Point::new(0, 3));
    assert_eq!(rect.dimensions(), Point::new(1, 4));

    let rect = bounding_rectangle(&pts(&[(2, -1), (-3, 4), (0, 0)])).unwrap();
    assert_eq!(rect.top_left, Point::new(-3, -1));
    assert_eq!(rect.bottom_right, Point::new(2, 4));
    assert_eq!(rect.dimensions(), Point::new(6, 6));

    assert_eq!(bounding_rectangle(&[]), Err(GameError::UnfitGeometry));
}

#[test]
fn test_is_out_of_bound() {
    assert!(!is_out_of_bound(Point::new(0, 0), BOARD));
    assert!(!is_out_of_bound(Point::new(9, 9), BOARD));
    assert!(is_out_of_bound(Point::new(10, 0), BOARD));
    assert!(is_out_of_bound(Point::new(0, -1), BOARD));
    assert!(is_out_of_bound(Point::new(-1, 10), BOARD));
}

#[test]
fn test_point_key_codec() {
    let p = Point::new(-3, 7);
    assert_eq!(p.to_string(), "-3,7");
    assert_eq!("-3,7".parse::<Point>().unwrap(), p);

    let decoded = Point::decode("x,4");
    assert_eq!(decoded.x, None);
    assert_eq!(decoded.y, Some(4));
    assert_eq!(decoded.point(), None);

    let decoded = Point::decode("12");
    assert_eq!(decoded.x, Some(12));
    assert_eq!(decoded.y, None);
    assert!("12".parse::<Point>().is_err());
}
