use log::{debug, trace};

use crate::grid::{Grid, Pos, EMPTY, SIDE};

/// First empty cell at or after `start` in row-major order, or `None` if
/// nothing from that point onward is empty.
pub fn find_next_empty(grid: &Grid, start: Pos) -> Option<Pos> {
    for r in start.r..SIDE {
        let c0 = if r == start.r { start.c } else { 0 };
        for c in c0..SIDE {
            let p = Pos { r, c };
            if grid.get(p) == EMPTY {
                return Some(p);
            }
        }
    }
    None
}

/// Exhaustive depth-first search over grid completions. Tries candidate
/// digits 1..=9 ascending at the first empty cell, recurses, and undoes the
/// placement on every failed branch, so the first solution under this fixed
/// order is the one returned.
pub struct Solver {
    guesses: u64,
    backtracks: u64,
}

impl Solver {
    pub fn new() -> Self {
        Self { guesses: 0, backtracks: 0 }
    }

    /// Placements committed so far, including ones later undone.
    pub fn guesses(&self) -> u64 { self.guesses }

    /// Failed branches unwound so far.
    pub fn backtracks(&self) -> u64 { self.backtracks }

    /// Runs the search. Returns whether a solution was found; on `false` the
    /// grid is fully unwound to its pre-solve state.
    pub fn solve(&mut self, grid: &mut Grid) -> bool {
        let solved = self.search(grid);
        debug!(
            "search finished: solved={} guesses={} backtracks={}",
            solved, self.guesses, self.backtracks
        );
        solved
    }

    fn search(&mut self, grid: &mut Grid) -> bool {
        // Each level re-scans from the origin rather than resuming from the
        // caller's cursor, matching the naive sweep exactly.
        let Some(p) = find_next_empty(grid, Pos { r: 0, c: 0 }) else {
            return true; // no empty cell left, the grid is complete
        };
        for d in 1..=9 {
            if grid.is_legal(p, d) {
                trace!("try {} at r{}c{}", d, p.r + 1, p.c + 1);
                grid.set(p, d);
                self.guesses += 1;
                if self.search(grid) {
                    return true;
                }
                grid.clear(p);
                self.backtracks += 1;
            }
        }
        false
    }
}

impl Default for Solver {
    fn default() -> Self { Self::new() }
}
