use std::{fmt, str::FromStr};

use log::debug;
use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::grid::{Grid, Tile};

/// Values a newly spawned tile can take, chosen with equal probability.
pub const SPAWN_VALUES: [Tile; 2] = [2, 4];

/// Places new tiles on uniformly chosen empty cells.
///
/// Wraps a seedable PCG generator, so two spawners created from the same
/// [`TileSeed`] place the same tiles in the same cells when driven with the
/// same grids.
///
/// # Example
///
/// ```
/// use twenty48_engine::{Grid, TileSpawner};
///
/// let mut grid = Grid::new(4).unwrap();
/// let mut spawner = TileSpawner::new();
///
/// assert_eq!(spawner.spawn(&mut grid, 4), 4);
/// assert_eq!(grid.count_empty(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct TileSpawner {
    rng: Pcg32,
}

impl Default for TileSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl TileSpawner {
    /// Creates a spawner with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but deterministic.
    #[must_use]
    pub fn with_seed(seed: TileSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// Places up to `count` tiles into distinct empty cells.
    ///
    /// Returns the number of tiles placed, which is less than `count` only when
    /// the grid runs out of empty cells.
    pub fn spawn(&mut self, grid: &mut Grid, count: usize) -> usize {
        spawn_with_rng(grid, count, &mut self.rng)
    }
}

/// Places up to `count` tiles using the given random source.
///
/// Each tile goes to an empty cell drawn uniformly at random and is
/// independently a 2 or a 4 with equal probability. A full grid is left
/// untouched.
pub fn spawn_with_rng<R>(grid: &mut Grid, count: usize, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    let mut placed = 0;
    for _ in 0..count {
        let empty = grid.count_empty();
        if empty == 0 {
            break;
        }
        let nth_empty = rng.random_range(0..empty);
        let value = SPAWN_VALUES[usize::from(rng.random_bool(0.5))];
        if let Some((row, col)) = place_tile(grid, nth_empty, value) {
            debug!("spawned {value} at ({row}, {col})");
            placed += 1;
        }
    }
    placed
}

/// Writes `value` into the `nth_empty`-th empty cell, counting in row-major order.
///
/// Returns the `(row, col)` of the written cell, or `None` if the grid has no
/// more than `nth_empty` empty cells.
pub fn place_tile(grid: &mut Grid, nth_empty: usize, value: Tile) -> Option<(usize, usize)> {
    let size = grid.size();
    let mut remaining = nth_empty;
    for (index, cell) in grid.cells_mut().iter_mut().enumerate() {
        if *cell != 0 {
            continue;
        }
        if remaining == 0 {
            *cell = value;
            return Some((index / size, index % size));
        }
        remaining -= 1;
    }
    None
}

/// Seed for deterministic tile spawning.
///
/// A 128-bit seed, written as 32 hexadecimal digits (big-endian) both in its
/// [`Display`](fmt::Display)/[`FromStr`] form and when serialized.
///
/// ```
/// use twenty48_engine::{GameConfig, GameEngine, Move, TileSeed};
/// use rand::Rng as _;
///
/// let seed: TileSeed = rand::rng().random();
/// let config = GameConfig { seed: Some(seed), ..GameConfig::default() };
///
/// let mut a = GameEngine::with_config(config.clone()).unwrap();
/// let mut b = GameEngine::with_config(config).unwrap();
/// a.apply_move(Move::Left);
/// b.apply_move(Move::Left);
/// assert_eq!(a.grid(), b.grid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSeed([u8; 16]);

impl TileSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

/// Error returned when parsing a [`TileSeed`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    #[display("invalid hex: expected 32 characters, got {len}")]
    InvalidLength { len: usize },
    #[display("invalid hex: {input}")]
    InvalidDigit { input: String },
}

impl fmt::Display for TileSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for TileSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        // `from_str_radix` accepts a leading sign, which is not a hex digit
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseSeedError::InvalidDigit {
                input: s.to_owned(),
            });
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseSeedError::InvalidDigit {
            input: s.to_owned(),
        })?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for TileSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TileSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows `rng.random()` to produce fresh seeds.
impl Distribution<TileSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TileSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        TileSeed(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: TileSeed = TileSeed([
        0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77,
        0x88,
    ]);

    mod placement {
        use rand::SeedableRng as _;

        use super::*;

        #[test]
        fn test_place_tile_counts_only_empty_cells() {
            let mut grid = Grid::from_ascii(
                r"
                2 . 4
                . 8 .
                . . 2
                ",
            );
            // empty cells in row-major order: (0,1) (1,0) (1,2) (2,0) (2,1)
            assert_eq!(place_tile(&mut grid, 2, 4), Some((1, 2)));
            assert_eq!(grid.get(1, 2), 4);
            assert_eq!(place_tile(&mut grid, 0, 2), Some((0, 1)));
            assert_eq!(grid.get(0, 1), 2);
            assert_eq!(grid.count_empty(), 3);
        }

        #[test]
        fn test_place_tile_past_last_empty_cell() {
            let mut grid = Grid::from_ascii(
                r"
                2 .
                4 8
                ",
            );
            assert_eq!(place_tile(&mut grid, 1, 2), None);
            assert_eq!(grid.count_empty(), 1);
        }

        #[test]
        fn test_spawn_on_full_grid_is_noop() {
            let mut grid = Grid::from_ascii(
                r"
                2 4
                4 2
                ",
            );
            let before = grid.clone();
            let mut spawner = TileSpawner::with_seed(SEED);
            assert_eq!(spawner.spawn(&mut grid, 3), 0);
            assert_eq!(grid, before);
        }

        #[test]
        fn test_spawn_stops_when_grid_fills() {
            let mut grid = Grid::from_ascii(
                r"
                2 .
                . 8
                ",
            );
            let mut spawner = TileSpawner::with_seed(SEED);
            assert_eq!(spawner.spawn(&mut grid, 4), 2);
            assert_eq!(grid.count_empty(), 0);
            assert_eq!(grid.get(0, 0), 2);
            assert_eq!(grid.get(1, 1), 8);
        }

        #[test]
        fn test_spawned_values_are_two_or_four() {
            let mut spawner = TileSpawner::with_seed(SEED);
            let mut seen = [false; 2];
            for _ in 0..100 {
                let mut grid = Grid::new(4).unwrap();
                assert_eq!(spawner.spawn(&mut grid, 16), 16);
                for &value in grid.cells() {
                    let index = SPAWN_VALUES.iter().position(|&v| v == value).unwrap();
                    seen[index] = true;
                }
            }
            assert_eq!(seen, [true, true]);
        }

        #[test]
        fn test_spawn_reaches_every_empty_cell() {
            let mut spawner = TileSpawner::with_seed(SEED);
            let mut hits = [0_usize; 9];
            for _ in 0..2000 {
                let mut grid = Grid::new(3).unwrap();
                spawner.spawn(&mut grid, 1);
                let index = grid.cells().iter().position(|&v| v != 0).unwrap();
                hits[index] += 1;
            }
            // roughly 222 per cell
            assert!(hits.iter().all(|&n| (120..330).contains(&n)), "{hits:?}");
        }

        #[test]
        fn test_spawn_with_any_rng() {
            let mut rng = Pcg32::seed_from_u64(42);
            let mut grid = Grid::new(5).unwrap();
            assert_eq!(spawn_with_rng(&mut grid, 7, &mut rng), 7);
            assert_eq!(grid.count_empty(), 18);
        }

        #[test]
        fn test_deterministic_spawning() {
            let mut spawner1 = TileSpawner::with_seed(SEED);
            let mut spawner2 = TileSpawner::with_seed(SEED);
            let mut grid1 = Grid::new(4).unwrap();
            let mut grid2 = Grid::new(4).unwrap();
            for _ in 0..16 {
                spawner1.spawn(&mut grid1, 1);
                spawner2.spawn(&mut grid2, 1);
                assert_eq!(grid1, grid2);
            }
        }
    }

    mod tile_seed {
        use super::*;

        #[test]
        fn test_display_is_32_char_hex() {
            assert_eq!(SEED.to_string(), "123456789abcdef01122334455667788");
            assert_eq!(
                TileSeed([0; 16]).to_string(),
                "00000000000000000000000000000000"
            );
        }

        #[test]
        fn test_parse_accepts_uppercase() {
            let seed: TileSeed = "123456789ABCDEF01122334455667788".parse().unwrap();
            assert_eq!(seed, SEED);
        }

        #[test]
        fn test_parse_errors() {
            assert_eq!(
                "0123".parse::<TileSeed>(),
                Err(ParseSeedError::InvalidLength { len: 4 })
            );
            assert!(matches!(
                "ghijklmnopqrstuvwxyzghijklmnopqr".parse::<TileSeed>(),
                Err(ParseSeedError::InvalidDigit { .. })
            ));
            assert!(matches!(
                "+123456789abcdef0123456789abcdef".parse::<TileSeed>(),
                Err(ParseSeedError::InvalidDigit { .. })
            ));
        }

        #[test]
        fn test_serde_uses_hex_string() {
            let serialized = serde_json::to_string(&SEED).unwrap();
            assert_eq!(serialized, "\"123456789abcdef01122334455667788\"");

            let deserialized: TileSeed = serde_json::from_str(&serialized).unwrap();
            assert_eq!(deserialized, SEED);
        }

        #[test]
        fn test_deserialize_error_message() {
            let result: Result<TileSeed, _> = serde_json::from_str("\"\"");
            let err_msg = result.unwrap_err().to_string();
            assert!(err_msg.contains("invalid hex"), "{err_msg}");
        }

        #[test]
        fn test_random_seed_round_trip() {
            let seed: TileSeed = rand::rng().random();
            assert_eq!(seed.to_string().parse::<TileSeed>(), Ok(seed));
            assert_eq!(TileSeed::from_bytes(seed.to_bytes()), seed);
        }
    }
}
