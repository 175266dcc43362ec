//! Match outcome: the result of one assignment attempt.
//!
//! A successful attempt carries a complete gifter -> recipient mapping.
//! A failed attempt carries whatever assignments had been committed before
//! infeasibility was detected, so callers can report how far the process
//! got instead of discarding the partial state silently.

use std::collections::HashMap;

/// Result of one call to [`MatchingEngine::assign`](crate::engine::MatchingEngine::assign).
///
/// ## Example
///
/// ```
/// use giftmatch::types::{Participant, Roster};
/// use giftmatch::engine::MatchingEngine;
///
/// let roster = Roster::new(vec![
///     Participant::new(1),
///     Participant::new(2),
/// ]).unwrap();
///
/// let outcome = MatchingEngine::new().assign(&roster);
///
/// // Two participants with no exclusions can only swap
/// assert!(outcome.is_complete());
/// assert_eq!(outcome.recipient_of(1), Some(2));
/// assert_eq!(outcome.recipient_of(2), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Gifter id -> recipient id; partial when `complete` is false
    assignments: HashMap<u64, u64>,

    /// Whether every participant received a recipient
    complete: bool,
}

impl MatchOutcome {
    /// Build an outcome. Used by the engine; callers only read outcomes.
    pub(crate) fn new(assignments: HashMap<u64, u64>, complete: bool) -> Self {
        Self {
            assignments,
            complete,
        }
    }

    /// Whether every participant was assigned a recipient
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Recipient assigned to a gifter, if one was committed
    #[inline]
    pub fn recipient_of(&self, gifter: u64) -> Option<u64> {
        self.assignments.get(&gifter).copied()
    }

    /// Number of committed assignments
    #[inline]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// True when no assignment was committed before failure
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// The full gifter -> recipient map
    #[inline]
    pub fn assignments(&self) -> &HashMap<u64, u64> {
        &self.assignments
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
