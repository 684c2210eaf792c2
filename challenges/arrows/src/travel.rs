use std::collections::{BTreeSet, HashSet};
use std::fmt;

use log::{debug, trace};

use crate::error::{ArrowError, Result};
use crate::grid::{Coordinate, Grid};

/// Cells in visitation order. A cell appears again each time it is revisited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<Coordinate>);

impl Path {
    pub fn start(&self) -> Coordinate {
        // a path always holds at least its start
        self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.0
    }

    /// Score of the path: revisits count once.
    pub fn weight(&self) -> usize {
        self.0.iter().collect::<HashSet<_>>().len()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coordinate) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", coordinate)?;
        }
        Ok(())
    }
}

/// Walks the board from a start cell until the next step leaves it.
///
/// Arriving on a cell that was already visited ignores its arrow and repeats
/// the step that led onto it. Every fresh step consumes a new cell and every
/// repeated step runs straight, so a walk on a finite grid always exits.
/// `max_steps` caps the number of moves anyway; exceeding it is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Traveler {
    pub max_steps: Option<usize>,
}

impl Traveler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_steps(max_steps: usize) -> Self {
        Self {
            max_steps: Some(max_steps),
        }
    }

    pub fn travel(&self, grid: &Grid, start: Coordinate) -> Result<Path> {
        if !grid.contains(start) {
            return Err(ArrowError::OutOfBounds(start));
        }

        let mut steps = Vec::new();
        let mut visited = BTreeSet::new();
        let mut current = start;

        loop {
            steps.push(current);

            let delta = if visited.insert(current) {
                grid.direction_of(current)?.displacement()
            } else {
                // cleared cell: a revisit always has a predecessor
                let previous = steps[steps.len() - 2];
                previous.displacement_to(current)
            };

            let next = current.offset(delta);
            trace!("{} -> {}", current, next);
            if !grid.contains(next) {
                break;
            }

            if let Some(limit) = self.max_steps {
                if steps.len() > limit {
                    return Err(ArrowError::StepLimitExceeded { start, limit });
                }
            }
            current = next;
        }

        let path = Path(steps);
        debug!(
            "travel from {}: {} steps, weight {}",
            start,
            path.len(),
            path.weight()
        );
        Ok(path)
    }
}

/// Unbounded traversal from `start`.
pub fn travel(grid: &Grid, start: Coordinate) -> Result<Path> {
    Traveler::new().travel(grid, start)
}
