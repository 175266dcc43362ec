//! Participant types for the giftmatch assignment engine.
//!
//! ## Identity
//!
//! Participants are identified by an opaque `u64` id that must be unique
//! within a roster and stable for the duration of a matching attempt. The
//! engine never interprets ids; they are only compared and mapped.
//!
//! ## Exclusions
//!
//! Each participant carries the set of ids it must not give to. A
//! participant's own id is implicitly excluded (no self-gifting) whether
//! or not it appears in the set. Exclusions are one-directional: if A
//! excluding B should also mean B excludes A, the caller adds both edges
//! before building the roster.

use std::collections::HashSet;

/// A gift-exchange participant: an id plus the ids it may not give to.
///
/// ## Example
///
/// ```
/// use giftmatch::types::Participant;
///
/// // Participant 1 may not give to 2 or 3
/// let p = Participant::new(1).exclude(2).exclude(3);
///
/// assert!(p.excludes(2));
/// assert!(!p.excludes(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Unique participant identifier (assigned by the caller)
    pub id: u64,

    /// Ids this participant must not be assigned as recipients
    excluded: HashSet<u64>,
}

impl Participant {
    /// Create a participant with no exclusions
    pub fn new(id: u64) -> Self {
        Self {
            id,
            excluded: HashSet::new(),
        }
    }

    /// Create a participant with an initial exclusion set
    ///
    /// # Example
    ///
    /// ```
    /// use giftmatch::types::Participant;
    ///
    /// let p = Participant::with_exclusions(1, [2, 3]);
    /// assert!(p.excludes(3));
    /// ```
    pub fn with_exclusions<I>(id: u64, excluded: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        Self {
            id,
            excluded: excluded.into_iter().collect(),
        }
    }

    /// Add an exclusion, returning the modified participant.
    ///
    /// Chainable for building fixtures and small rosters.
    pub fn exclude(mut self, id: u64) -> Self {
        self.excluded.insert(id);
        self
    }

    /// Check whether `id` is on this participant's exclusion list.
    ///
    /// Does not account for the implicit self-exclusion; the engine
    /// applies that separately when building the eligibility matrix.
    #[inline]
    pub fn excludes(&self, id: u64) -> bool {
        self.excluded.contains(&id)
    }

    /// Number of explicit exclusions
    #[inline]
    pub fn exclusion_count(&self) -> usize {
        self.excluded.len()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
