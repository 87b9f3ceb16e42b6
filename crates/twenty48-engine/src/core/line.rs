use crate::core::grid::Tile;

/// Collapses a single line towards its start (index 0).
///
/// Equal tiles are merged scanning from the start: each non-empty cell looks
/// for the next non-empty cell after it and merges with it only if the values
/// are equal. A merged cell is never merged again during the same collapse.
/// All tiles are then packed towards the start, keeping their relative order.
///
/// Returns the score gained. Each merge of two tiles valued `v` scores `v`
/// (the value of one of the merged tiles), not the resulting `2v`.
///
/// ```
/// use twenty48_engine::collapse_line;
///
/// let mut line = [2, 2, 4, 4];
/// assert_eq!(collapse_line(&mut line), 6);
/// assert_eq!(line, [4, 8, 0, 0]);
/// ```
pub fn collapse_line(line: &mut [Tile]) -> u64 {
    let mut score = 0;
    for i in 0..line.len() {
        let value = line[i];
        if value == 0 {
            continue;
        }
        if let Some(j) = next_occupied(line, i + 1)
            && line[j] == value
        {
            line[i] = value * 2;
            line[j] = 0;
            score += u64::from(value);
        }
    }
    compact_line(line);
    score
}

fn next_occupied(line: &[Tile], start: usize) -> Option<usize> {
    line[start..]
        .iter()
        .position(|&v| v != 0)
        .map(|offset| start + offset)
}

/// Moves every tile towards the start, filling the rest with empty cells.
fn compact_line(line: &mut [Tile]) {
    let mut write = 0;
    for read in 0..line.len() {
        if line[read] != 0 {
            line.swap(write, read);
            write += 1;
        }
    }
}
