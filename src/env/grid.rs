// src/env/grid.rs
use crate::query::{ParsedQuery, Triple};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// One grid cell: a 3-integer vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell(pub [i64; 3]);

impl Cell {
    /// The empty cell.
    pub const ZERO: Cell = Cell([0, 0, 0]);

    /// Marks a pending join candidate.
    pub const MARKER: Cell = Cell([-1, -1, -1]);

    /// A cell carries content when its first component is non-zero.
    pub fn has_value(&self) -> bool {
        self.0[0] != 0
    }

    pub fn is_zero(&self) -> bool {
        *self == Cell::ZERO
    }

    pub fn is_marker(&self) -> bool {
        *self == Cell::MARKER
    }
}

/// Row/triple identity used while filling the grid. Row to triple is the
/// sorted pattern list itself; triple to row is a map over the same
/// entries.
struct RowIndex {
    by_triple: HashMap<Triple, usize>,
}

impl RowIndex {
    fn build(query: &ParsedQuery) -> Self {
        let by_triple = query
            .triples()
            .enumerate()
            .map(|(row, triple)| (*triple, row))
            .collect();
        Self { by_triple }
    }

    fn row_of(&self, triple: &Triple) -> usize {
        *self
            .by_triple
            .get(triple)
            .expect("join candidate belongs to the same query")
    }
}

/// The square observation: triples on the diagonal, candidate markers
/// off-diagonal, zeroes everywhere else.
///
/// Row i is non-empty exactly while the triple it started with (plus
/// everything merged into it) has not been absorbed into another row;
/// a merged-away row is entirely zeroed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObservationGrid {
    n: usize,
    cells: Vec<Cell>,
}

impl ObservationGrid {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![Cell::ZERO; n * n],
        }
    }

    /// Fill a fresh grid from a parsed query.
    ///
    /// Each row's diagonal cell takes the row's triple with subject and
    /// object shifted down by one, so that a raw 0 or 1 cannot collide
    /// with the empty cell or the marker. Each candidate pair is marked
    /// off-diagonal exactly once.
    pub fn from_query(query: &ParsedQuery) -> Self {
        let mut grid = Self::new(query.len());
        let index = RowIndex::build(query);
        for (row, pattern) in query.patterns().iter().enumerate() {
            let t = &pattern.triple;
            grid.set(row, row, Cell([t.subject - 1, t.predicate, t.object - 1]));
            for candidate in &pattern.candidates {
                grid.mark_candidate(index.row_of(candidate), row);
            }
        }
        grid
    }

    /// Write the candidate marker at (candidate row, subject row), unless
    /// the pair is already marked at the mirrored position. Each pair
    /// occupies exactly one of its two symmetric cells.
    fn mark_candidate(&mut self, candidate: usize, subject: usize) {
        if self.cell(subject, candidate).is_marker() {
            return;
        }
        self.set(candidate, subject, Cell::MARKER);
    }

    /// Side length of the grid (the number of query patterns).
    pub fn side(&self) -> usize {
        self.n
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.n + col]
    }

    fn set(&mut self, row: usize, col: usize, value: Cell) {
        self.cells[row * self.n + col] = value;
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.n..(row + 1) * self.n]
    }

    /// A row is empty once every cell in it has first component zero.
    pub fn is_row_empty(&self, row: usize) -> bool {
        self.row(row).iter().all(|cell| !cell.has_value())
    }

    /// The episode is over when no candidate marker remains anywhere in
    /// the grid, including inside rows that already absorbed neighbours.
    pub fn is_terminal(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_marker())
    }

    /// Merge row max(i, j) into row min(i, j).
    ///
    /// Content always lands in the lower row. A source cell replaces the
    /// destination only where the destination holds a marker or nothing;
    /// anywhere else the existing content wins and the incoming value is
    /// dropped without diagnostic. The source row is cleared afterwards
    /// either way, so repeating the merge on an emptied row is a no-op.
    pub fn merge_rows(&mut self, i: usize, j: usize) {
        let a = i.min(j);
        let b = i.max(j);
        for col in 0..self.n {
            let incoming = self.cell(b, col);
            if incoming.has_value() {
                let dest = self.cell(a, col);
                if dest.is_marker() || dest.is_zero() {
                    self.set(a, col, incoming);
                }
            }
            self.set(b, col, Cell::ZERO);
        }
    }

    /// Count of cells currently carrying content or a marker.
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.has_value()).count()
    }
}

impl fmt::Display for ObservationGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.n {
            for col in 0..self.n {
                if col > 0 {
                    write!(f, " ")?;
                }
                let Cell([s, p, o]) = self.cell(row, col);
                write!(f, "({},{},{})", s, p, o)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
