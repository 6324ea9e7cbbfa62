use std::fmt::{self, Display, Formatter};

pub type Digit = u8; // 0 = empty; 1..=9 placed

pub const SIDE: usize = 9;
pub const BOX: usize = 3;
pub const EMPTY: Digit = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos { pub r: usize, pub c: usize }

impl Pos {
    /// Origin of the 3x3 box containing this cell; both coordinates
    /// come out as multiples of 3.
    pub fn box_origin(self) -> Pos {
        Pos { r: self.r - self.r % BOX, c: self.c - self.c % BOX }
    }
}

/// The 9x9 puzzle state. Cells hold 0 for empty or a placed digit 1..=9;
/// the solver mutates cells in place through `set`/`clear` and never leaves
/// two equal nonzero digits sharing a row, column, or box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [[Digit; SIDE]; SIDE],
}

impl Grid {
    pub fn empty() -> Self { Self { cells: [[EMPTY; SIDE]; SIDE] } }

    pub fn from_rows(rows: [[Digit; SIDE]; SIDE]) -> Self {
        debug_assert!(rows.iter().flatten().all(|&d| d <= 9));
        Self { cells: rows }
    }

    pub fn get(&self, p: Pos) -> Digit { self.cells[p.r][p.c] }

    pub fn rows(&self) -> &[[Digit; SIDE]; SIDE] { &self.cells }

    /// Tentatively places a digit. The caller is responsible for having
    /// checked `is_legal` and for the cell being empty.
    pub fn set(&mut self, p: Pos, d: Digit) {
        debug_assert!((1..=9).contains(&d));
        self.cells[p.r][p.c] = d;
    }

    /// Reverts a cell to empty (the backtracking undo).
    pub fn clear(&mut self, p: Pos) {
        self.cells[p.r][p.c] = EMPTY;
    }

    pub fn is_filled(&self) -> bool {
        self.cells.iter().flatten().all(|&d| d != EMPTY)
    }

    pub fn row_contains(&self, r: usize, d: Digit) -> bool {
        self.cells[r].iter().any(|&v| v == d)
    }

    pub fn col_contains(&self, c: usize, d: Digit) -> bool {
        self.cells.iter().any(|row| row[c] == d)
    }

    /// `origin` must be a box origin (see `Pos::box_origin`).
    pub fn box_contains(&self, origin: Pos, d: Digit) -> bool {
        debug_assert!(origin.r % BOX == 0 && origin.c % BOX == 0);
        self.cells[origin.r..origin.r + BOX]
            .iter()
            .any(|row| row[origin.c..origin.c + BOX].contains(&d))
    }

    /// True iff `d` is absent from the cell's row, column, and box. Does not
    /// check that the cell itself is empty; cell selection handles that.
    pub fn is_legal(&self, p: Pos, d: Digit) -> bool {
        !self.row_contains(p.r, d)
            && !self.col_contains(p.c, d)
            && !self.box_contains(p.box_origin(), d)
    }

    pub fn to_pretty_string(&self) -> String {
        let mut s = String::new();
        for r in 0..SIDE {
            if r % BOX == 0 { s.push_str("+-------+-------+-------+\n"); }
            for c in 0..SIDE {
                if c % BOX == 0 { s.push_str("| "); }
                let d = self.cells[r][c];
                s.push(if d == EMPTY { '.' } else { (b'0' + d) as char });
                s.push(' ');
            }
            s.push_str("|\n");
        }
        s.push_str("+-------+-------+-------+\n");
        s
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pretty_string())
    }
}
