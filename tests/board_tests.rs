//! Grid tests through the facade crate

use quadris::core::Grid;
use quadris::types::{Color, BOARD_COLUMNS, BOARD_ROWS};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert_eq!(grid.rows(), BOARD_ROWS);
    assert_eq!(grid.columns(), BOARD_COLUMNS);

    for row in 0..BOARD_ROWS as i8 {
        for col in 0..BOARD_COLUMNS as i8 {
            assert_eq!(grid.get(row, col), Some(None));
        }
    }
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new();

    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(BOARD_ROWS as i8, 0), None);
    assert_eq!(grid.get(0, BOARD_COLUMNS as i8), None);
}

#[test]
fn test_grid_settle_and_fill() {
    let mut grid = Grid::new();

    grid.settle(10, 5, Color::Magenta);
    assert_eq!(grid.get(10, 5), Some(Some(Color::Magenta)));
    assert!(grid.filled(10, 5));
    assert!(!grid.filled(10, 6));

    // Out of bounds never reads as filled.
    assert!(!grid.filled(-1, 0));
    assert!(!grid.filled(0, 30));
}

#[test]
fn test_clear_compacts_downward() {
    let mut grid = Grid::new();

    grid.settle(20, 3, Color::Red);
    for col in 0..BOARD_COLUMNS as i8 {
        grid.settle(25, col, Color::Blue);
    }

    let cleared = grid.clear_filled_rows();
    assert_eq!(cleared.as_slice(), &[25]);

    // Everything above the cleared row dropped one row.
    assert_eq!(grid.get(21, 3), Some(Some(Color::Red)));
    assert_eq!(grid.get(20, 3), Some(None));
    assert!(!grid.is_row_filled(25));
}

#[test]
fn test_clear_handles_separated_rows() {
    let mut grid = Grid::new();

    for col in 0..BOARD_COLUMNS as i8 {
        grid.settle(22, col, Color::Green);
        grid.settle(25, col, Color::Green);
    }
    grid.settle(24, 0, Color::Red);

    let cleared = grid.clear_filled_rows();
    assert_eq!(cleared.len(), 2);

    // The lone survivor compacted to the bottom.
    assert_eq!(grid.get(25, 0), Some(Some(Color::Red)));
    assert_eq!(grid.cells().iter().filter(|c| c.is_some()).count(), 1);
}
