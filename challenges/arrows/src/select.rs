use log::info;

use crate::error::{ArrowError, Result};
use crate::grid::Grid;
use crate::travel::{Path, Traveler};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredPath {
    pub path: Path,
    pub weight: usize,
}

/// Walk from every cell in row-major order and score each walk.
pub fn scored_paths(grid: &Grid, traveler: &Traveler) -> Result<Vec<ScoredPath>> {
    grid.coordinates()
        .map(|start| {
            let path = traveler.travel(grid, start)?;
            let weight = path.weight();
            Ok(ScoredPath { path, weight })
        })
        .collect()
}

impl Traveler {
    /// The walk covering the most distinct cells. Ties go to the start that
    /// comes last in row-major order.
    pub fn find_best_path(&self, grid: &Grid) -> Result<Path> {
        if grid.is_empty() {
            return Err(ArrowError::EmptyGrid);
        }

        let mut best: Option<ScoredPath> = None;
        for candidate in scored_paths(grid, self)? {
            // >= keeps the later of two equal scores
            if best.as_ref().is_none_or(|b| candidate.weight >= b.weight) {
                best = Some(candidate);
            }
        }

        let best = best.ok_or(ArrowError::EmptyGrid)?;
        info!(
            "best path starts at {} with weight {}",
            best.path.start(),
            best.weight
        );
        Ok(best.path)
    }
}

pub fn find_best_path(grid: &Grid) -> Result<Path> {
    Traveler::new().find_best_path(grid)
}
