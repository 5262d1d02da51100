use super::*;

const E: Disc = Disc::Empty;
const R: Disc = Disc::Red;
const Y: Disc = Disc::Yellow;

fn empty_grid(cols: usize, rows: usize) -> Grid {
    Grid::build(&Snapshot::from_raw(&vec![vec![E; rows]; cols]).unwrap())
}

#[test]
fn test_direction_opposites() {
    for dir in Direction::ALL {
        assert_ne!(dir.opposite(), dir);
        assert_eq!(dir.opposite().opposite(), dir);
        let (dc, dr) = dir.delta();
        assert_eq!(dir.opposite().delta(), (-dc, -dr));
    }
}

#[test]
fn test_axes_cover_all_directions_once() {
    let mut seen: Vec<Direction> = Axis::ALL.iter().flat_map(|a| a.directions()).collect();
    seen.sort_by_key(|d| Direction::ALL.iter().position(|x| x == d));
    assert_eq!(seen, Direction::ALL.to_vec());
}

#[test]
fn test_scan_order_follows_axes() {
    let expected: Vec<Direction> = Axis::ALL.iter().flat_map(|a| a.directions()).collect();
    assert_eq!(Axis::SCAN_ORDER.to_vec(), expected);
    for dir in Direction::ALL {
        assert_eq!(dir.axis(), dir.opposite().axis());
        assert!(dir.axis().directions().contains(&dir));
    }
}

#[test]
fn test_disc_opponent() {
    assert_eq!(R.opponent(), Y);
    assert_eq!(Y.opponent(), R);
    assert_eq!(E.opponent(), E);
}

#[test]
fn test_neighbor_links_are_symmetric() {
    let grid = empty_grid(6, 7);
    for (id, cell) in grid.cells() {
        if let Some(right) = cell.right() {
            assert_eq!(grid.cell(right).left(), Some(id));
        }
        if let Some(left) = cell.left() {
            assert_eq!(grid.cell(left).right(), Some(id));
        }
        if let Some(up) = cell.up() {
            assert_eq!(grid.cell(up).down(), Some(id));
        }
        if let Some(down) = cell.down() {
            assert_eq!(grid.cell(down).up(), Some(id));
        }
    }
}

#[test]
fn test_neighbors_match_coordinates() {
    let grid = empty_grid(5, 4);
    for (id, cell) in grid.cells() {
        for dir in Direction::ALL {
            let (dc, dr) = dir.delta();
            let col = cell.col() as i32 + dc;
            let row = cell.row() as i32 + dr;
            let expected = if col >= 0 && row >= 0 {
                grid.cell_at(col as usize, row as usize)
            } else {
                None
            };
            assert_eq!(grid.neighbor(id, dir), expected, "{:?} of {:?}", dir, (cell.col(), cell.row()));
        }
    }
}

#[test]
fn test_edges_have_no_neighbors() {
    let grid = empty_grid(3, 3);
    let corner = grid.cell_at(0, 0).unwrap();
    assert_eq!(grid.cell(corner).left(), None);
    assert_eq!(grid.cell(corner).down(), None);
    assert_eq!(grid.down_left(corner), None);
    assert_eq!(grid.up_left(corner), None);
    assert_eq!(grid.down_right(corner), None);
    assert_eq!(grid.up_right(corner), grid.cell_at(1, 1));
}

#[test]
fn test_cell_at_bounds() {
    let grid = empty_grid(7, 6);
    assert!(grid.cell_at(6, 5).is_some());
    assert!(grid.cell_at(7, 0).is_none());
    assert!(grid.cell_at(0, 6).is_none());
}

#[test]
fn test_build_reads_bottom_up() {
    // Raw columns are listed top to bottom
    let raw = vec![vec![E, E, R], vec![E, Y, R]];
    let grid = Grid::build(&Snapshot::from_raw(&raw).unwrap());
    assert_eq!(grid.disc(grid.cell_at(0, 0).unwrap()), R);
    assert_eq!(grid.disc(grid.cell_at(1, 1).unwrap()), Y);
    assert!(!grid.is_empty());
}

#[test]
fn test_landing_cell() {
    let raw = vec![vec![E, E, E], vec![E, Y, R], vec![R, Y, R]];
    let grid = Grid::build(&Snapshot::from_raw(&raw).unwrap());
    assert_eq!(grid.landing_cell(0), grid.cell_at(0, 0));
    assert_eq!(grid.landing_cell(1), grid.cell_at(1, 2));
    assert_eq!(grid.landing_cell(2), None);
    assert_eq!(grid.landing_cell(3), None);
}

#[test]
fn test_refresh_keeps_links() {
    let mut grid = empty_grid(4, 4);
    let before: Vec<_> = grid
        .cells()
        .map(|(_, c)| (c.up(), c.down(), c.left(), c.right()))
        .collect();

    let mut raw = vec![vec![E; 4]; 4];
    raw[2][3] = R;
    grid.refresh(&Snapshot::from_raw(&raw).unwrap()).unwrap();

    let after: Vec<_> = grid
        .cells()
        .map(|(_, c)| (c.up(), c.down(), c.left(), c.right()))
        .collect();
    assert_eq!(before, after);
    assert_eq!(grid.disc(grid.cell_at(2, 0).unwrap()), R);
}

#[test]
fn test_refresh_rejects_other_dimensions() {
    let mut grid = empty_grid(4, 4);
    let snap = Snapshot::from_raw(&vec![vec![E; 5]; 4]).unwrap();
    assert!(matches!(
        grid.refresh(&snap),
        Err(crate::Error::DimensionMismatch { .. })
    ));
}

#[test]
fn test_board_state_lifecycle() {
    let mut state = BoardState::default();
    assert!(state.grid().is_none());

    let empty = Snapshot::from_raw(&vec![vec![E; 6]; 7]).unwrap();
    assert_eq!(state.prepare(&empty).unwrap(), Prepared::Opening);
    assert!(state.grid().is_some());

    let mut raw = vec![vec![E; 6]; 7];
    raw[3][5] = R;
    let played = Snapshot::from_raw(&raw).unwrap();
    assert_eq!(state.prepare(&played).unwrap(), Prepared::Ready);
    let grid = state.grid().unwrap();
    assert_eq!(grid.disc(grid.cell_at(3, 0).unwrap()), R);
}

#[test]
fn test_board_state_first_board_not_empty() {
    let mut state = BoardState::default();
    let mut raw = vec![vec![E; 6]; 7];
    raw[0][5] = Y;
    assert_eq!(state.prepare(&Snapshot::from_raw(&raw).unwrap()).unwrap(), Prepared::Ready);
}

#[test]
#[should_panic]
fn test_foreign_handle_is_rejected() {
    let large = empty_grid(7, 6);
    let small = empty_grid(2, 2);
    let id = large.cell_at(6, 5).unwrap();
    let _ = small.cell(id);
}
