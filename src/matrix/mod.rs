//! Eligibility matrix module for giftmatch.
//!
//! ## Role
//!
//! The matrix is the engine's working state: an n x n grid recording, for
//! each (gifter row, recipient column) pair, whether the assignment is
//! currently permitted. It answers the queries the greedy assignment loop
//! needs:
//!
//! | Operation | Complexity |
//! |-----------------------|------------|
//! | get / set | O(1) |
//! | row_sum | O(n) |
//! | row_with_min_sum | O(n²) |
//! | eligible_columns | O(n) |
//!
//! ## Components
//!
//! - [`Cell`]: eligibility of a single pair (Eligible / Ineligible)
//! - [`EligibilityMatrix`]: the bounds-checked grid itself
//!
//! ## Example
//!
//! ```
//! use giftmatch::matrix::{Cell, EligibilityMatrix};
//!
//! let mut matrix = EligibilityMatrix::new(2, Cell::Eligible);
//!
//! // Forbid the diagonal (no self-gifting)
//! matrix.set(0, 0, Cell::Ineligible);
//! matrix.set(1, 1, Cell::Ineligible);
//!
//! assert_eq!(matrix.eligible_columns(0), vec![1]);
//! ```

pub mod grid;

pub use grid::{Cell, EligibilityMatrix};
