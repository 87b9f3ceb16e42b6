use std::fmt;

use serde::{Deserialize, Serialize};

use crate::GridShapeError;

/// Value of a single cell. `0` is an empty cell, anything else is a tile.
pub type Tile = u32;

/// Square grid of tiles stored in row-major order.
///
/// The dimensions are fixed once the grid is created. Every mutation the
/// engine performs (collapsing, reorienting, spawning) happens in place.
///
/// Serialized as a list of rows, e.g. `[[2,0],[0,4]]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")]
pub struct Grid {
    size: usize,
    cells: Vec<Tile>,
}

impl Grid {
    pub const MIN_SIZE: usize = 2;

    /// Creates an empty `size`×`size` grid.
    pub fn new(size: usize) -> Result<Self, GridShapeError> {
        if size < Self::MIN_SIZE {
            return Err(GridShapeError::TooSmall { size });
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Creates a grid from explicit rows. The number of rows determines the size.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, GridShapeError>
    where
        R: AsRef<[Tile]>,
    {
        let size = rows.len();
        let mut grid = Self::new(size)?;
        for (row, (src, dst)) in rows
            .iter()
            .zip(grid.cells.chunks_exact_mut(size))
            .enumerate()
        {
            let src = src.as_ref();
            if src.len() != size {
                return Err(GridShapeError::NotSquare {
                    row,
                    len: src.len(),
                    size,
                });
            }
            dst.copy_from_slice(src);
        }
        Ok(grid)
    }

    /// Creates a grid from a whitespace separated text representation.
    ///
    /// Each non-blank line is a row; `.` stands for an empty cell.
    ///
    /// ```
    /// use twenty48_engine::Grid;
    ///
    /// let grid = Grid::from_ascii(
    ///     r"
    ///     2 . 4
    ///     . . .
    ///     8 . 2
    ///     ",
    /// );
    /// assert_eq!(grid.row(2), &[8, 0, 2]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if a token is not a number or `.`, or if the rows do not form a square.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let rows: Vec<Vec<Tile>> = art
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|token| match token {
                        "." => 0,
                        _ => token
                            .parse()
                            .unwrap_or_else(|e| panic!("invalid cell {token:?}: {e}")),
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(&rows).unwrap_or_else(|e| panic!("invalid grid: {e}"))
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the value at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        assert!(row < self.size && col < self.size, "cell out of bounds");
        self.cells[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: Tile) {
        assert!(row < self.size && col < self.size, "cell out of bounds");
        self.cells[row * self.size + col] = value;
    }

    #[must_use]
    pub fn row(&self, row: usize) -> &[Tile] {
        &self.cells[row * self.size..][..self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Tile]> + '_ {
        self.cells.chunks_exact_mut(self.size)
    }

    /// Returns all cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Tile] {
        &mut self.cells
    }

    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Returns the highest tile on the grid, or `0` for an empty grid.
    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Returns the sum of all tile values.
    #[must_use]
    pub fn sum(&self) -> u64 {
        self.cells.iter().copied().map(u64::from).sum()
    }

    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Grid {
    type Error = GridShapeError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<Grid> for Vec<Vec<Tile>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                if value == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{value:>width$}")?;
                }
            }
        }
        Ok(())
    }
}
