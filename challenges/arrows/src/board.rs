// Text form of a board: one row per line, one symbol per non-whitespace char.
use crate::error::Result;
use crate::grid::Grid;

/// Reference board.
/// ↑ ↓ ↑ ↑
/// ↑ → ← ←
/// ↑ ↑ ← ↑
/// ← ↓ ↑ ←
pub const SAMPLE: &str = "\
u d u u
u r l l
u u l u
l d u l
";

/// Blank lines are skipped and do not take a row index. Rows may differ in length.
pub fn parse(text: &str) -> Result<Grid> {
    let rows: Vec<Vec<char>> = text
        .lines()
        .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect();
    Grid::build(rows)
}
