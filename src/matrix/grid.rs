//! Bounds-checked square grid tracking gifter/recipient eligibility.
//!
//! ## Layout
//!
//! The grid is a flat `Vec<Cell>` of n*n entries in row-major order.
//! Index arithmetic stays inside this module; callers only see checked
//! `(row, col)` accessors.
//!
//! ## Invariants
//!
//! Once constraints are applied by the engine:
//! - diagonal cells (i, i) are Ineligible (no self-gifting)
//! - a consumed column is Ineligible in every unmatched row, enforcing
//!   at-most-one-gifter-per-recipient
//!
//! The grid itself does not know about participants; it answers the three
//! queries the greedy loop needs: row sums, minimum-sum row, and the
//! eligible columns of a row.

/// Eligibility of a single gifter-row / recipient-column pair.
///
/// Represented as a two-state enum rather than a bare bool so call sites
/// read as domain statements (`set(i, j, Cell::Ineligible)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// The assignment is currently permitted
    #[default]
    Eligible,
    /// The assignment is forbidden or the recipient is already taken
    Ineligible,
}

impl Cell {
    /// Numeric value used by row summation (Eligible=1, Ineligible=0)
    #[inline]
    pub fn to_u8(self) -> u8 {
        match self {
            Cell::Eligible => 1,
            Cell::Ineligible => 0,
        }
    }

    /// Whether this cell permits an assignment
    #[inline]
    pub fn is_eligible(self) -> bool {
        matches!(self, Cell::Eligible)
    }
}

/// An n x n eligibility grid for one matching attempt.
///
/// Created fresh per attempt, mutated in place during the assignment
/// loop, and discarded afterwards. Never shared between attempts.
///
/// ## Example
///
/// ```
/// use giftmatch::matrix::{Cell, EligibilityMatrix};
///
/// let mut matrix = EligibilityMatrix::new(3, Cell::Eligible);
/// matrix.set(0, 0, Cell::Ineligible);
///
/// assert_eq!(matrix.row_sum(0), 2);
/// assert_eq!(matrix.eligible_columns(0), vec![1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct EligibilityMatrix {
    /// Row-major cell storage, length n*n
    cells: Vec<Cell>,

    /// Side length (participant count)
    size: usize,
}

impl EligibilityMatrix {
    /// Create an n x n grid with every cell set to `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero. A zero-sized matrix is a caller bug; the
    /// roster already rejects empty participant lists.
    pub fn new(n: usize, fill: Cell) -> Self {
        assert!(n > 0, "matrix size must be positive");
        Self {
            cells: vec![fill; n * n],
            size: n,
        }
    }

    /// Side length of the grid
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Flat index for a checked (row, col) pair
    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(row < self.size, "row {} out of range (n={})", row, self.size);
        assert!(col < self.size, "col {} out of range (n={})", col, self.size);
        row * self.size + col
    }

    /// Read a cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.offset(row, col)]
    }

    /// Write a cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let offset = self.offset(row, col);
        self.cells[offset] = cell;
    }

    /// Count of Eligible cells in a row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn row_sum(&self, row: usize) -> usize {
        let start = self.offset(row, 0);
        self.cells[start..start + self.size]
            .iter()
            .map(|cell| cell.to_u8() as usize)
            .sum()
    }

    /// Index of the row with the smallest eligible count, skipping rows
    /// whose `skip` entry is true.
    ///
    /// Ties break to the first such row in index order. The strict `<`
    /// comparison makes that stable, and the stability matters: it decides
    /// which participant the engine matches first when constraint counts
    /// tie.
    ///
    /// Returns `None` when every row is skipped.
    ///
    /// # Panics
    ///
    /// Panics if `skip.len() != size`.
    pub fn row_with_min_sum(&self, skip: &[bool]) -> Option<usize> {
        assert_eq!(skip.len(), self.size, "skip mask length mismatch");

        let mut best: Option<(usize, usize)> = None; // (row, sum)
        for row in 0..self.size {
            if skip[row] {
                continue;
            }
            let sum = self.row_sum(row);
            match best {
                Some((_, best_sum)) if sum >= best_sum => {}
                _ => best = Some((row, sum)),
            }
        }
        best.map(|(row, _)| row)
    }

    /// Column indices of the Eligible cells in a row, ascending.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn eligible_columns(&self, row: usize) -> Vec<usize> {
        let start = self.offset(row, 0);
        self.cells[start..start + self.size]
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_eligible())
            .map(|(col, _)| col)
            .collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
