//! Sparse arrow board keyed by (row, column).
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{ArrowError, Result};

/// A (row, column) cell address. Ordering is row-major, which fixes the
/// iteration order of every `Grid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub row: i64,
    pub column: i64,
}

impl Coordinate {
    pub const fn new(row: i64, column: i64) -> Self {
        Self { row, column }
    }

    pub fn offset(self, delta: Displacement) -> Coordinate {
        Coordinate {
            row: self.row + delta.vertical,
            column: self.column + delta.horizontal,
        }
    }

    /// The step that leads from `self` to `other`.
    pub fn displacement_to(self, other: Coordinate) -> Displacement {
        Displacement {
            vertical: other.row - self.row,
            horizontal: other.column - self.column,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Displacement {
    pub vertical: i64,
    pub horizontal: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

const DIRECTIONS: [(char, Direction, Displacement); 4] = [
    ('u', Direction::Up, Displacement { vertical: -1, horizontal: 0 }),
    ('d', Direction::Down, Displacement { vertical: 1, horizontal: 0 }),
    ('l', Direction::Left, Displacement { vertical: 0, horizontal: -1 }),
    ('r', Direction::Right, Displacement { vertical: 0, horizontal: 1 }),
];

impl Direction {
    pub fn from_symbol(symbol: char) -> Option<Direction> {
        DIRECTIONS
            .iter()
            .find(|(s, _, _)| *s == symbol)
            .map(|(_, direction, _)| *direction)
    }

    fn entry(self) -> &'static (char, Direction, Displacement) {
        // the table covers every variant, in declaration order
        &DIRECTIONS[self as usize]
    }

    pub fn symbol(self) -> char {
        self.entry().0
    }

    pub fn displacement(self) -> Displacement {
        self.entry().2
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Every coordinate present in `cells` is in bounds, everything else is
/// out of bounds. Rows need not share a length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: BTreeMap<Coordinate, Direction>,
}

impl Grid {
    /// Build a grid from rows of direction symbols, indexed from (0, 0).
    /// Symbols are validated here, so lookups never see a bad cell.
    pub fn build<R, S>(rows: R) -> Result<Grid>
    where
        R: IntoIterator<Item = S>,
        S: AsRef<[char]>,
    {
        let mut cells = BTreeMap::new();
        for (row, symbols) in rows.into_iter().enumerate() {
            for (column, &symbol) in symbols.as_ref().iter().enumerate() {
                let direction = Direction::from_symbol(symbol).ok_or(ArrowError::InvalidSymbol {
                    row,
                    column,
                    symbol,
                })?;
                cells.insert(Coordinate::new(row as i64, column as i64), direction);
            }
        }
        Ok(Grid { cells })
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.cells.contains_key(&coordinate)
    }

    pub fn direction_of(&self, coordinate: Coordinate) -> Result<Direction> {
        self.cells
            .get(&coordinate)
            .copied()
            .ok_or(ArrowError::OutOfBounds(coordinate))
    }

    /// All coordinates in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(lines: &[&str]) -> Vec<Vec<char>> {
        lines.iter().map(|l| l.chars().collect()).collect()
    }

    #[test]
    fn test_direction_table() {
        for symbol in ['u', 'd', 'l', 'r'] {
            let direction = Direction::from_symbol(symbol).unwrap();
            assert_eq!(direction.symbol(), symbol);
        }
        assert_eq!(
            Direction::Up.displacement(),
            Displacement { vertical: -1, horizontal: 0 }
        );
        assert_eq!(
            Direction::Right.displacement(),
            Displacement { vertical: 0, horizontal: 1 }
        );
        assert_eq!(Direction::from_symbol('x'), None);
        assert_eq!(Direction::from_symbol('U'), None);
    }

    #[test]
    fn test_build_reads_back_every_symbol() {
        let lines = ["uduu", "rlld", "ulur"];
        let grid = Grid::build(rows(&lines)).unwrap();
        assert_eq!(grid.len(), 12);
        for (row, line) in lines.iter().enumerate() {
            for (column, symbol) in line.chars().enumerate() {
                let at = Coordinate::new(row as i64, column as i64);
                assert_eq!(grid.direction_of(at).unwrap().symbol(), symbol);
            }
        }
    }

    #[test]
    fn test_invalid_symbol() {
        let err = Grid::build(rows(&["ud", "uX"])).unwrap_err();
        match err {
            ArrowError::InvalidSymbol { row, column, symbol } => {
                assert_eq!((row, column, symbol), (1, 1, 'X'));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bounds_are_membership() {
        let grid = Grid::build(rows(&["rrd", "u"])).unwrap();
        assert!(grid.contains(Coordinate::new(0, 2)));
        assert!(grid.contains(Coordinate::new(1, 0)));
        // jagged: (1, 1) is inside the bounding box but not a cell
        assert!(!grid.contains(Coordinate::new(1, 1)));
        assert!(!grid.contains(Coordinate::new(-1, 0)));
        assert!(matches!(
            grid.direction_of(Coordinate::new(1, 2)),
            Err(ArrowError::OutOfBounds(c)) if c == Coordinate::new(1, 2)
        ));
    }

    #[test]
    fn test_coordinates_are_row_major() {
        let grid = Grid::build(rows(&["ud", "lr"])).unwrap();
        let order: Vec<_> = grid.coordinates().collect();
        assert_eq!(
            order,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_coordinate_arithmetic() {
        let from = Coordinate::new(1, 2);
        let to = Coordinate::new(1, 1);
        let delta = from.displacement_to(to);
        assert_eq!(delta, Direction::Left.displacement());
        assert_eq!(to.offset(delta), Coordinate::new(1, 0));
        assert_eq!(to.to_string(), "(1, 1)");
    }
}
