use crate::common::Modules;

// Finder pattern corners
//------------------------------------------------------------------------------

/// True for cells covered by one of the three 7x7 finder corners. The corner at high col and
/// high row carries data and is never reserved.
pub fn is_reserved(col: usize, row: usize, size: usize) -> bool {
    // `x > size - 8` written without underflow for tiny grids
    let low_col = col < 7;
    let high_col = col + 8 > size;
    let low_row = row < 7;
    let high_row = row + 8 > size;
    (low_col || high_col) && (low_row || high_row) && !(high_col && high_row)
}

// Neighbour queries
//------------------------------------------------------------------------------

/// In bounds and outside every finder corner
pub fn can_access<G: Modules + ?Sized>(grid: &G, col: isize, row: isize) -> bool {
    let size = grid.size() as isize;
    (0..size).contains(&col)
        && (0..size).contains(&row)
        && !is_reserved(col as usize, row as usize, grid.size())
}

/// Accessible and dark
pub fn is_filled<G: Modules + ?Sized>(grid: &G, col: isize, row: isize) -> bool {
    can_access(grid, col, row) && grid.is_dark(col as usize, row as usize)
}

/// Number of filled cells among the four edge neighbours
pub fn count_neighbors<G: Modules + ?Sized>(grid: &G, col: usize, row: usize) -> u8 {
    let (c, r) = (col as isize, row as isize);
    [(c, r - 1), (c, r + 1), (c - 1, r), (c + 1, r)]
        .into_iter()
        .filter(|&(nc, nr)| is_filled(grid, nc, nr))
        .count() as u8
}

#[cfg(test)]
mod reserved_tests {
    use test_case::test_case;

    use super::{can_access, count_neighbors, is_reserved};
    use crate::common::{ModuleGrid, Modules};

    #[test_case(0, 0, true; "bottom left origin")]
    #[test_case(6, 6, true; "bottom left inner corner")]
    #[test_case(7, 6, false; "right of bottom left")]
    #[test_case(6, 7, false; "above bottom left")]
    #[test_case(0, 20, true; "top left")]
    #[test_case(6, 14, true; "top left inner corner")]
    #[test_case(6, 13, false; "below top left")]
    #[test_case(20, 0, true; "bottom right")]
    #[test_case(14, 6, true; "bottom right inner corner")]
    #[test_case(13, 0, false; "left of bottom right")]
    #[test_case(20, 20, false; "data corner")]
    #[test_case(14, 14, false; "data corner inner")]
    #[test_case(10, 10, false; "center")]
    fn test_is_reserved_21(col: usize, row: usize, exp: bool) {
        assert_eq!(is_reserved(col, row, 21), exp);
    }

    #[test]
    fn test_reserved_count() {
        for size in [21, 25, 57, 177] {
            let reserved = (0..size)
                .flat_map(|r| (0..size).map(move |c| (c, r)))
                .filter(|&(c, r)| is_reserved(c, r, size))
                .count();
            assert_eq!(reserved, 3 * 49, "size {size}");
        }
    }

    #[test]
    fn test_tiny_grid_does_not_underflow() {
        // Every cell of a tiny grid lies in the data corner
        assert!(!is_reserved(0, 0, 3));
        assert!(!is_reserved(2, 2, 3));
    }

    #[test]
    fn test_can_access() {
        let grid = ModuleGrid::empty(21);
        assert!(!can_access(&grid, -1, 10));
        assert!(!can_access(&grid, 10, 21));
        assert!(!can_access(&grid, 3, 3));
        assert!(can_access(&grid, 10, 10));
        assert!(can_access(&grid, 20, 20));
    }

    fn grid_with(cells: &[(usize, usize)]) -> ModuleGrid {
        let mut grid = ModuleGrid::empty(21);
        for &(c, r) in cells {
            grid.set(c, r, true);
        }
        grid
    }

    #[test]
    fn test_count_neighbors() {
        let grid = grid_with(&[(10, 10), (10, 11), (10, 9), (9, 10), (11, 10)]);
        assert_eq!(count_neighbors(&grid, 10, 10), 4);
        assert_eq!(count_neighbors(&grid, 10, 11), 1);
        assert_eq!(count_neighbors(&grid, 12, 12), 0);
    }

    #[test]
    fn test_reserved_neighbors_do_not_count() {
        let mut grid = grid_with(&[(7, 3)]);
        for r in 0..7 {
            for c in 0..7 {
                grid.set(c, r, true);
            }
        }
        assert!(grid.is_dark(6, 3));
        assert_eq!(count_neighbors(&grid, 7, 3), 0);
    }

    #[test]
    fn test_edge_neighbors() {
        let grid = grid_with(&[(20, 20), (19, 20)]);
        assert_eq!(count_neighbors(&grid, 20, 20), 1);
    }
}
