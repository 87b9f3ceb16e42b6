//! In-place reorientations of a [`Grid`].
//!
//! These only relabel positions; no cell value is ever changed. Together with
//! [`collapse_line`](crate::collapse_line) they let every move be expressed as
//! "collapse each row towards column 0".

use crate::core::grid::Grid;

impl Grid {
    /// Mirrors the grid across its main diagonal.
    pub fn transpose(&mut self) {
        let n = self.size();
        let cells = self.cells_mut();
        for r in 0..n {
            for c in r + 1..n {
                cells.swap(r * n + c, c * n + r);
            }
        }
    }

    /// Mirrors the columns (each row is reversed).
    pub fn flip_horizontal(&mut self) {
        for row in self.rows_mut() {
            row.reverse();
        }
    }

    /// Mirrors the rows (the first row becomes the last).
    pub fn flip_vertical(&mut self) {
        let n = self.size();
        let cells = self.cells_mut();
        for r in 0..n / 2 {
            let (top, bottom) = cells.split_at_mut((n - 1 - r) * n);
            top[r * n..][..n].swap_with_slice(&mut bottom[..n]);
        }
    }

    /// Rotates the grid a quarter turn clockwise.
    pub fn rotate_cw(&mut self) {
        self.transpose();
        self.flip_horizontal();
    }

    /// Rotates the grid a quarter turn counter-clockwise.
    pub fn rotate_ccw(&mut self) {
        self.transpose();
        self.flip_vertical();
    }
}
