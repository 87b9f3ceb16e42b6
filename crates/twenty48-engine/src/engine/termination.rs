use crate::core::grid::Grid;

impl Grid {
    /// Returns `true` if no move can change the grid.
    ///
    /// That is the case when every cell holds a tile and no two orthogonally
    /// adjacent cells hold the same value. Each adjacent pair is compared once.
    ///
    /// ```
    /// use twenty48_engine::Grid;
    ///
    /// assert!(Grid::from_ascii("2 4\n4 2").is_stuck());
    /// assert!(!Grid::from_ascii("2 2\n4 8").is_stuck());
    /// ```
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        let n = self.size();
        for r in 0..n {
            for c in 0..n {
                let value = self.get(r, c);
                if value == 0 {
                    return false;
                }
                if c + 1 < n && self.get(r, c + 1) == value {
                    return false;
                }
                if r + 1 < n && self.get(r + 1, c) == value {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard_is_stuck() {
        let grid = Grid::from_ascii(
            r"
            2 4
            4 2
            ",
        );
        assert!(grid.is_stuck());
    }

    #[test]
    fn test_vertical_pair_is_not_stuck() {
        let grid = Grid::from_ascii(
            r"
            2 2
            4 8
            ",
        );
        assert!(!grid.is_stuck());

        let grid = Grid::from_ascii(
            r"
            2 4
            2 8
            ",
        );
        assert!(!grid.is_stuck());
    }

    #[test]
    fn test_empty_cell_is_not_stuck() {
        let grid = Grid::from_ascii(
            r"
            2 4 8
            4 8 2
            8 2 .
            ",
        );
        assert!(!grid.is_stuck());
        assert!(!Grid::new(4).unwrap().is_stuck());
    }

    #[test]
    fn test_full_grid_without_pairs_is_stuck() {
        let grid = Grid::from_ascii(
            r"
            2   4   8  16
            4   8  16  32
            8  16  32  64
            16 32  64 128
            ",
        );
        assert!(grid.is_stuck());
    }

    #[test]
    fn test_pair_on_last_row_or_column() {
        let bottom = Grid::from_ascii(
            r"
            2  4   8
            4  8   2
            16 32 32
            ",
        );
        assert!(!bottom.is_stuck());

        let right = Grid::from_ascii(
            r"
            2  4  8
            4  8 16
            8  2 16
            ",
        );
        assert!(!right.is_stuck());
    }
}
