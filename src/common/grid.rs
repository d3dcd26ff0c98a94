use super::error::{QRError, QRResult};

// Read access to a square module grid. Coordinates are (col, row), both in [0, size).
//------------------------------------------------------------------------------

pub trait Modules {
    fn size(&self) -> usize;

    fn is_dark(&self, col: usize, row: usize) -> bool;
}

// Dense row-major grid as produced by an encoder
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    data: Vec<bool>,
}

impl ModuleGrid {
    pub fn new(size: usize, data: Vec<bool>) -> QRResult<Self> {
        if data.len() != size * size {
            return Err(QRError::InvalidGrid);
        }
        Ok(Self { size, data })
    }

    pub fn empty(size: usize) -> Self {
        Self { size, data: vec![false; size * size] }
    }

    /// Parses rows of `#` (dark) and any other char (light). Row 0 comes first.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> QRResult<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for r in rows {
            let r = r.as_ref();
            if r.chars().count() != size {
                return Err(QRError::InvalidGrid);
            }
            data.extend(r.chars().map(|c| c == '#'));
        }
        Self::new(size, data)
    }

    pub fn set(&mut self, col: usize, row: usize, dark: bool) {
        let index = self.coord_to_index(col, row);
        self.data[index] = dark;
    }

    pub fn count_dark_modules(&self) -> usize {
        self.data.iter().filter(|&&d| d).count()
    }

    fn coord_to_index(&self, col: usize, row: usize) -> usize {
        assert!(col < self.size, "column should be less than size");
        assert!(row < self.size, "row should be less than size");

        row * self.size + col
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let mut res = String::with_capacity(self.size * (self.size + 1) + 1);
        res.push('\n');
        for row in 0..self.size {
            for col in 0..self.size {
                res.push(if self.is_dark(col, row) { '#' } else { '.' });
            }
            res.push('\n');
        }
        res
    }
}

impl Modules for ModuleGrid {
    fn size(&self) -> usize {
        self.size
    }

    fn is_dark(&self, col: usize, row: usize) -> bool {
        self.data[self.coord_to_index(col, row)]
    }
}

#[cfg(test)]
mod grid_tests {
    use super::{ModuleGrid, Modules};
    use crate::common::error::QRError;

    #[test]
    fn test_row_major_layout() {
        let data = vec![true, false, false, false, false, true, false, false, false];
        let grid = ModuleGrid::new(3, data).unwrap();
        assert!(grid.is_dark(0, 0));
        assert!(grid.is_dark(2, 1));
        assert!(!grid.is_dark(1, 2));
        assert_eq!(grid.count_dark_modules(), 2);
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(ModuleGrid::new(3, vec![false; 8]), Err(QRError::InvalidGrid));
    }

    #[test]
    fn test_from_rows() {
        let grid = ModuleGrid::from_rows(&["#..", ".#.", "..#"]).unwrap();
        assert_eq!(grid.to_debug_str(), "\n#..\n.#.\n..#\n");
        assert!(ModuleGrid::from_rows(&["#.", "..."]).is_err());
    }

    #[test]
    fn test_set() {
        let mut grid = ModuleGrid::empty(4);
        grid.set(3, 1, true);
        assert!(grid.is_dark(3, 1));
        assert!(!grid.is_dark(1, 3));
    }

    #[test]
    #[should_panic(expected = "column should be less than size")]
    fn test_col_out_of_bound() {
        let grid = ModuleGrid::empty(4);
        grid.is_dark(4, 0);
    }

    #[test]
    #[should_panic(expected = "row should be less than size")]
    fn test_set_row_out_of_bound() {
        let mut grid = ModuleGrid::empty(4);
        grid.set(0, 4, true);
    }
}
