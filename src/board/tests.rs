use super::*;
use crate::error::MoveError;

fn neighbor_count(grid: &Grid, row: i32, col: i32) -> usize {
    grid.neighbors(grid.to_index(Pos::new(row, col))).count()
}

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Blue.opponent(), Stone::Red);
    assert_eq!(Stone::Red.opponent(), Stone::Blue);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_conversion() {
    let grid = Grid::new(10);
    let pos = Pos::new(5, 5);
    assert_eq!(grid.to_index(pos), 55);
    assert_eq!(grid.to_pos(55), pos);
    assert_eq!(grid.to_pos(9), Pos::new(0, 9));
    assert_eq!(grid.to_pos(10), Pos::new(1, 0));
}

#[test]
fn test_index_roundtrip_all_cells() {
    for size in 2..=12 {
        let grid = Grid::new(size);
        for idx in 0..grid.cell_count() {
            let pos = grid.to_pos(idx);
            assert_eq!(grid.to_index(pos), idx, "size {} pos {}", size, pos);
        }
    }
}

#[test]
fn test_pos_corner_indices() {
    let grid = Grid::new(10);
    assert_eq!(grid.to_index(Pos::new(0, 0)), 0);
    assert_eq!(grid.to_index(Pos::new(0, 9)), 9);
    assert_eq!(grid.to_index(Pos::new(9, 0)), 90);
    assert_eq!(grid.to_index(Pos::new(9, 9)), 99);
}

#[test]
#[should_panic(expected = "off the 10x10 board")]
fn test_to_index_off_board_panics() {
    Grid::new(10).to_index(Pos::new(0, 10));
}

#[test]
#[should_panic(expected = "off the 4x4 board")]
fn test_to_pos_off_board_panics() {
    Grid::new(4).to_pos(16);
}

#[test]
#[should_panic(expected = "board size must be positive")]
fn test_zero_size_panics() {
    Board::new(0);
}

#[test]
fn test_corners() {
    let grid = Grid::new(10);
    assert!(grid.is_corner(Pos::new(0, 0)));
    assert!(grid.is_corner(Pos::new(0, 9)));
    assert!(grid.is_corner(Pos::new(9, 0)));
    assert!(grid.is_corner(Pos::new(9, 9)));
    assert!(!grid.is_corner(Pos::new(1, 1)));
    assert!(!grid.is_corner(Pos::new(5, 0)));
    assert!(!grid.is_corner(Pos::new(0, 5)));

    let corners = (0..grid.cell_count())
        .filter(|&i| grid.is_corner(grid.to_pos(i)))
        .count();
    assert_eq!(corners, 4);
}

#[test]
fn test_classify() {
    let grid = Grid::new(5);
    assert_eq!(grid.classify(Pos::new(0, 0)), CellClass::Corner(Corner::TopLeft));
    assert_eq!(grid.classify(Pos::new(0, 4)), CellClass::Corner(Corner::TopRight));
    assert_eq!(grid.classify(Pos::new(4, 0)), CellClass::Corner(Corner::BottomLeft));
    assert_eq!(grid.classify(Pos::new(4, 4)), CellClass::Corner(Corner::BottomRight));
    assert_eq!(grid.classify(Pos::new(0, 2)), CellClass::TopEdge);
    assert_eq!(grid.classify(Pos::new(4, 2)), CellClass::BottomEdge);
    assert_eq!(grid.classify(Pos::new(2, 0)), CellClass::LeftEdge);
    assert_eq!(grid.classify(Pos::new(2, 4)), CellClass::RightEdge);
    assert_eq!(grid.classify(Pos::new(2, 2)), CellClass::Interior);
    assert!(grid.is_interior(Pos::new(2, 2)));
    assert!(!grid.is_interior(Pos::new(2, 4)));
}

#[test]
fn test_offset_tables() {
    assert_eq!(Grid::neighbor_offsets(0), &NEIGHBOR_OFFSETS[0]);
    assert_eq!(Grid::neighbor_offsets(3), &NEIGHBOR_OFFSETS[1]);
    assert_eq!(NEIGHBOR_OFFSETS[0][Direction::UpperLeft.index()], (-1, -1));
    assert_eq!(NEIGHBOR_OFFSETS[1][Direction::UpperRight.index()], (-1, 1));
    assert_eq!(NEIGHBOR_OFFSETS[0][Direction::LowerRight.index()], (1, 0));
    assert_eq!(NEIGHBOR_OFFSETS[1][Direction::LowerLeft.index()], (1, 0));
}

#[test]
fn test_interior_neighbors_in_order() {
    let grid = Grid::new(5);
    // even row (2, 2)
    let n: Vec<_> = grid.neighbors(12).collect();
    assert_eq!(n, vec![13, 7, 6, 11, 16, 17]);
    // odd row (1, 2)
    let n: Vec<_> = grid.neighbors(7).collect();
    assert_eq!(n, vec![8, 3, 2, 6, 12, 13]);
}

#[test]
fn test_corner_neighbor_counts() {
    for size in 2..=9 {
        let grid = Grid::new(size);
        let last = size as i32 - 1;
        assert_eq!(neighbor_count(&grid, 0, 0), 2, "top-left, size {}", size);
        assert_eq!(neighbor_count(&grid, 0, last), 3, "top-right, size {}", size);

        let mut counts = vec![
            neighbor_count(&grid, 0, 0),
            neighbor_count(&grid, 0, last),
            neighbor_count(&grid, last, 0),
            neighbor_count(&grid, last, last),
        ];
        counts.sort();
        assert_eq!(counts, vec![2, 2, 3, 3], "size {}", size);
    }

    // even size: the bottom-right corner sits on an odd row
    let grid = Grid::new(4);
    assert_eq!(neighbor_count(&grid, 3, 0), 3);
    assert_eq!(neighbor_count(&grid, 3, 3), 2);
}

#[test]
fn test_edge_and_interior_neighbor_counts() {
    let size = 7;
    let grid = Grid::new(size);
    let last = size as i32 - 1;
    for i in 1..last {
        assert_eq!(neighbor_count(&grid, 0, i), 4);
        assert_eq!(neighbor_count(&grid, last, i), 4);

        let (left, right) = if i % 2 == 0 { (3, 5) } else { (5, 3) };
        assert_eq!(neighbor_count(&grid, i, 0), left, "left column row {}", i);
        assert_eq!(neighbor_count(&grid, i, last), right, "right column row {}", i);

        for j in 1..last {
            assert_eq!(neighbor_count(&grid, i, j), 6);
        }
    }
}

#[test]
fn test_adjacency_is_symmetric() {
    for size in 1..=8 {
        let grid = Grid::new(size);
        for a in 0..grid.cell_count() {
            for b in grid.neighbors(a) {
                assert_ne!(a, b);
                assert!(
                    grid.neighbors(b).any(|x| x == a),
                    "size {}: {} -> {} not mirrored",
                    size,
                    a,
                    b
                );
            }
        }
    }
}

#[test]
fn test_single_cell_board() {
    let mut board = Board::new(1);
    let grid = *board.grid();
    assert_eq!(grid.classify(Pos::new(0, 0)), CellClass::Corner(Corner::TopLeft));
    assert_eq!(grid.neighbors(0).count(), 0);
    assert_eq!(board.north(), &[0]);
    assert_eq!(board.east(), &[0]);
    assert!(board.make_move(Pos::new(0, 0), Stone::Blue).is_ok());
    assert!(board.neighbors_of_color(0, Stone::Blue).is_empty());
    assert!(board.is_full());
}

#[test]
#[should_panic(expected = "off the 3x3 board")]
fn test_neighbors_off_board_panics() {
    let board = Board::new(3);
    board.neighbors_of_color(9, Stone::Blue);
}

#[test]
fn test_boundary_sets() {
    let board = Board::new(4);
    assert_eq!(board.north(), &[0, 1, 2, 3]);
    assert_eq!(board.south(), &[12, 13, 14, 15]);
    assert_eq!(board.west(), &[0, 4, 8, 12]);
    assert_eq!(board.east(), &[3, 7, 11, 15]);
}

#[test]
fn test_within_boundary() {
    let size = 10;
    let board = Board::new(size);
    let n = size as i32;
    assert!(board.is_within_boundary(Pos::new(0, 0)));
    assert!(board.is_within_boundary(Pos::new(n - 1, n - 1)));
    assert!(board.is_within_boundary(Pos::new(0, n - 1)));
    assert!(board.is_within_boundary(Pos::new(n - 1, 0)));
    assert!(board.is_within_boundary(Pos::new(5, 0)));

    assert!(!board.is_within_boundary(Pos::new(0, n)));
    assert!(!board.is_within_boundary(Pos::new(n, n)));
    assert!(!board.is_within_boundary(Pos::new(n, 0)));
    assert!(!board.is_within_boundary(Pos::new(-1, n + 1)));
}

#[test]
fn test_is_available() {
    let mut board = Board::new(10);
    assert!(board.is_available(Pos::new(0, 0)));
    assert!(board.is_available(Pos::new(5, 0)));
    assert!(!board.is_available(Pos::new(-1, 0)));
    assert!(!board.is_available(Pos::new(10, 3)));

    board.make_move(Pos::new(0, 0), Stone::Blue).unwrap();
    assert!(!board.is_available(Pos::new(0, 0)));
    board.make_move(Pos::new(5, 0), Stone::Red).unwrap();
    assert!(!board.is_available(Pos::new(5, 0)));
}

#[test]
fn test_make_move_errors_leave_board_unchanged() {
    let mut board = Board::new(5);
    board.make_move(Pos::new(1, 1), Stone::Blue).unwrap();
    let before = board.clone();

    assert_eq!(
        board.make_move(Pos::new(1, 1), Stone::Red),
        Err(MoveError::CellOccupied(Pos::new(1, 1)))
    );
    assert_eq!(
        board.make_move(Pos::new(5, 0), Stone::Red),
        Err(MoveError::OutOfBounds(Pos::new(5, 0)))
    );
    assert_eq!(
        board.make_move(Pos::new(0, -2), Stone::Red),
        Err(MoveError::OutOfBounds(Pos::new(0, -2)))
    );
    assert_eq!(board, before);
    assert_eq!(board.get(Pos::new(1, 1)), Stone::Blue);
}

#[test]
#[should_panic(expected = "cannot place an empty stone")]
fn test_make_move_empty_stone_panics() {
    let mut board = Board::new(3);
    let _ = board.make_move(Pos::new(0, 0), Stone::Empty);
}

#[test]
fn test_neighbors_of_color_filters() {
    let mut board = Board::new(5);
    // around (2, 2): right (2,3), upper-left (1,1), lower-right (3,2)
    board.make_move(Pos::new(2, 3), Stone::Blue).unwrap();
    board.make_move(Pos::new(1, 1), Stone::Blue).unwrap();
    board.make_move(Pos::new(3, 2), Stone::Red).unwrap();
    // (1, 3) is not adjacent to an even-row (2, 2)
    board.make_move(Pos::new(1, 3), Stone::Blue).unwrap();

    assert_eq!(board.neighbors_of_color(12, Stone::Blue), vec![13, 6]);
    assert_eq!(board.neighbors_of_color(12, Stone::Red), vec![17]);
    assert_eq!(
        board.neighbors_of_color(12, Stone::Empty),
        vec![7, 11, 16]
    );
}

#[test]
fn test_counts() {
    let mut board = Board::new(3);
    assert_eq!(board.stone_count(), 0);
    assert_eq!(board.empty_cells().count(), 9);
    board.make_move(Pos::new(0, 0), Stone::Blue).unwrap();
    board.make_move(Pos::new(2, 2), Stone::Red).unwrap();
    assert_eq!(board.stone_count(), 2);
    assert_eq!(board.empty_cells().next(), Some(Pos::new(0, 1)));
    assert!(!board.is_full());
}
