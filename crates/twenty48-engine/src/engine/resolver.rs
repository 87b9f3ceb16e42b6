use crate::{
    core::{grid::Grid, line::collapse_line, moves::Move},
    engine::spawner::TileSpawner,
};

/// Geometric relabeling applied around a row collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reorientation {
    Identity,
    FlipHorizontal,
    Transpose,
    RotateCw,
    RotateCcw,
}

impl Reorientation {
    fn apply(self, grid: &mut Grid) {
        match self {
            Self::Identity => {}
            Self::FlipHorizontal => grid.flip_horizontal(),
            Self::Transpose => grid.transpose(),
            Self::RotateCw => grid.rotate_cw(),
            Self::RotateCcw => grid.rotate_ccw(),
        }
    }
}

/// Returns the reorientations that turn `mv` into a leftward collapse and back.
const fn reorientations(mv: Move) -> (Reorientation, Reorientation) {
    match mv {
        Move::Left => (Reorientation::Identity, Reorientation::Identity),
        Move::Right => (Reorientation::FlipHorizontal, Reorientation::FlipHorizontal),
        Move::Up => (Reorientation::Transpose, Reorientation::Transpose),
        Move::Down => (Reorientation::RotateCw, Reorientation::RotateCcw),
    }
}

/// Slides and merges every tile of `grid` in the direction of `mv`.
///
/// No tile is spawned. Returns the score gained by the merges.
pub fn collapse_grid(grid: &mut Grid, mv: Move) -> u64 {
    let (before, after) = reorientations(mv);
    before.apply(grid);
    let score = grid.rows_mut().map(collapse_line).sum();
    after.apply(grid);
    score
}

/// Applies a full move: collapses the grid and spawns one new tile.
///
/// The tile is spawned even when the collapse changed nothing, as long as an
/// empty cell is left.
pub fn resolve_move(grid: &mut Grid, mv: Move, spawner: &mut TileSpawner) -> u64 {
    let score = collapse_grid(grid, mv);
    spawner.spawn(grid, 1);
    score
}
