pub mod grid;
pub mod parse;
pub mod solver;

pub use grid::{Digit, Grid, Pos};
pub use parse::{parse_grid, ParseError};
pub use solver::Solver;
