//! Greedy assignment loop with randomized tie-breaking.
//!
//! ## Algorithm
//!
//! 1. Build an all-Eligible n x n matrix over the roster's ordinals.
//! 2. Apply hard constraints: diagonal cells and excluded pairs become
//!    Ineligible.
//! 3. Repeat n times: take the unmatched row with the fewest eligible
//!    columns, pick one of its columns uniformly at random, commit the
//!    assignment, and clear that column for every still-unmatched row.
//! 4. A row with zero eligible columns ends the attempt immediately with
//!    a partial outcome.
//!
//! Processing the most constrained participant first (minimum-remaining-
//! values) reduces but does not eliminate dead ends. There is no
//! backtracking: the engine can report infeasibility for constraint sets
//! that a full search would satisfy. Callers may retry; the randomized
//! tie-break means a fresh attempt over identical input can succeed.

use std::collections::HashMap;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::matrix::{Cell, EligibilityMatrix};
use crate::types::{MatchOutcome, Roster};

/// The gift-exchange assignment engine.
///
/// Generic over the random source used for candidate selection so tests
/// can inject a seeded generator; defaults to the thread-local RNG.
///
/// The engine holds no state between calls: each [`assign`](Self::assign)
/// builds and exclusively owns a fresh matrix. Concurrent attempts need
/// independent engine instances only because they need independent RNGs.
#[derive(Debug)]
pub struct MatchingEngine<R: Rng = ThreadRng> {
    /// Random source for picking among equally eligible recipients
    rng: R,
}

impl MatchingEngine<ThreadRng> {
    /// Create an engine backed by the thread-local RNG
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for MatchingEngine<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MatchingEngine<R> {
    /// Create an engine with an injected random source.
    ///
    /// # Example
    ///
    /// ```
    /// use giftmatch::engine::MatchingEngine;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let engine = MatchingEngine::with_rng(ChaCha8Rng::seed_from_u64(42));
    /// # let _ = engine;
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Run one assignment attempt over a roster.
    ///
    /// Returns a complete outcome when every participant received a
    /// recipient, or a partial outcome with
    /// [`is_complete`](MatchOutcome::is_complete) false as soon as some
    /// unmatched participant has no eligible recipient left. The roster
    /// is never mutated.
    ///
    /// Infeasibility here is a domain outcome, not an error: the greedy
    /// loop takes no backtracking step, so a retry with the same input
    /// may still succeed via a different random tie-break.
    pub fn assign(&mut self, roster: &Roster) -> MatchOutcome {
        let n = roster.len();
        let mut matrix = self.build_matrix(roster);

        let mut matched = vec![false; n];
        let mut assignments: HashMap<u64, u64> = HashMap::with_capacity(n);

        for _ in 0..n {
            // One row is matched per iteration, so an unmatched row must
            // remain while the loop runs.
            let row = matrix
                .row_with_min_sum(&matched)
                .expect("unmatched row available while matches remain");

            let candidates = matrix.eligible_columns(row);
            if candidates.is_empty() {
                // Dead end: surface the partial result for diagnostics.
                return MatchOutcome::new(assignments, false);
            }

            let recipient_col = candidates[self.rng.gen_range(0..candidates.len())];
            assignments.insert(roster.id_at(row), roster.id_at(recipient_col));
            matched[row] = true;

            // The recipient is taken: clear its column for everyone still
            // unmatched. Matched rows keep their cells; their assignments
            // are fixed and the cells are never read again.
            for other in 0..n {
                if !matched[other] {
                    matrix.set(other, recipient_col, Cell::Ineligible);
                }
            }
        }

        MatchOutcome::new(assignments, true)
    }

    /// Build the constraint matrix for a roster: all cells Eligible except
    /// the diagonal and each gifter's excluded recipients.
    fn build_matrix(&self, roster: &Roster) -> EligibilityMatrix {
        let n = roster.len();
        let mut matrix = EligibilityMatrix::new(n, Cell::Eligible);

        for row in 0..n {
            let gifter = roster.participant(row);
            for col in 0..n {
                if row == col || gifter.excludes(roster.id_at(col)) {
                    matrix.set(row, col, Cell::Ineligible);
                }
            }
        }

        matrix
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
