//! # giftmatch
//!
//! Constraint-aware assignment engine for gift exchanges.
//!
//! ## Architecture
//!
//! The crate consists of:
//! - **Types**: Core data structures (Participant, Roster, MatchOutcome)
//! - **Matrix**: The n x n eligibility grid over gifter/recipient pairs
//! - **Engine**: Greedy assignment loop with randomized tie-breaking
//!
//! ## Design Principles
//!
//! 1. **Most-constrained-first**: participants with the fewest remaining
//!    eligible recipients are assigned before everyone else
//! 2. **Injectable randomness**: candidate selection draws from a caller-
//!    supplied `rand::Rng`, seedable for deterministic tests
//! 3. **Infeasibility is an outcome, not an error**: a dead end returns
//!    the partial assignment committed so far with a failure flag
//! 4. **No state between attempts**: each call builds and exclusively
//!    owns a fresh matrix; nothing is persisted
//!
//! ## Limitations
//!
//! The engine does no backtracking. It can report infeasibility for a
//! constraint set that a full search would satisfy; because tie-breaks
//! are random, retrying the same input may succeed.

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Participant, Roster, MatchOutcome
pub mod types;

/// Eligibility matrix: the per-attempt constraint grid
pub mod matrix;

/// Matching engine: greedy assignment with randomized tie-breaks
pub mod engine;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{Participant, Roster, RosterError, MatchOutcome};
pub use matrix::{Cell, EligibilityMatrix};
pub use engine::MatchingEngine;
