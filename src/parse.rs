use itertools::Itertools;
use thiserror::Error;

use crate::grid::{Digit, Grid, SIDE};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 9 puzzle lines, got {0}")]
    LineCount(usize),
    #[error("line {line}: expected 9 values, got {got}")]
    TokenCount { line: usize, got: usize },
    #[error("line {line}: invalid value {token:?}, expected a digit 0-9")]
    BadToken { line: usize, token: String },
}

/// Parses the nine-line puzzle format: nine whitespace-separated integers
/// per line, 0 for a blank cell. Blank lines are skipped.
pub fn parse_grid(text: &str) -> Result<Grid, ParseError> {
    let lines = text.lines().filter(|l| !l.trim().is_empty()).collect_vec();
    if lines.len() != SIDE {
        return Err(ParseError::LineCount(lines.len()));
    }
    let mut rows = [[0 as Digit; SIDE]; SIDE];
    for (r, line) in lines.iter().enumerate() {
        let tokens = line.split_whitespace().collect_vec();
        if tokens.len() != SIDE {
            return Err(ParseError::TokenCount { line: r + 1, got: tokens.len() });
        }
        for (c, token) in tokens.iter().enumerate() {
            let v: Digit = token.parse().map_err(|_| ParseError::BadToken {
                line: r + 1,
                token: token.to_string(),
            })?;
            if v > 9 {
                return Err(ParseError::BadToken { line: r + 1, token: token.to_string() });
            }
            rows[r][c] = v;
        }
    }
    Ok(Grid::from_rows(rows))
}
