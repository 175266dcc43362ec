//! Roster: the validated, ordered participant collection.
//!
//! ## Ordinal Ordering
//!
//! The matching engine addresses participants by ordinal position (row and
//! column indices into the eligibility matrix). The roster establishes that
//! ordering once, at construction, as the order participants were supplied,
//! and owns the index <-> id lookup in both directions.
//!
//! ## Contract Validation
//!
//! Construction fails fast on caller bugs: an empty participant list or a
//! duplicate id. These are contract violations, not domain outcomes, so
//! they surface as a [`RosterError`] before any matching work starts.

use std::collections::HashMap;

use thiserror::Error;

use crate::types::Participant;

/// Errors raised when a roster violates the caller contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    /// The participant list was empty
    #[error("roster requires at least one participant")]
    Empty,

    /// Two participants shared an id
    #[error("duplicate participant id {id}")]
    DuplicateId { id: u64 },
}

/// An ordered, validated set of participants for one matching attempt.
///
/// ## Example
///
/// ```
/// use giftmatch::types::{Participant, Roster};
///
/// let roster = Roster::new(vec![
///     Participant::new(10),
///     Participant::new(20).exclude(10),
/// ]).unwrap();
///
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster.id_at(1), 20);
/// assert_eq!(roster.index_of(10), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct Roster {
    /// Participants in supply order (ordinal = vector index)
    participants: Vec<Participant>,

    /// Id to ordinal mapping (for O(1) reverse lookup)
    index: HashMap<u64, usize>,
}

impl Roster {
    /// Build a roster, validating the caller contract.
    ///
    /// # Errors
    ///
    /// - [`RosterError::Empty`] if `participants` is empty
    /// - [`RosterError::DuplicateId`] if two participants share an id
    pub fn new(participants: Vec<Participant>) -> Result<Self, RosterError> {
        if participants.is_empty() {
            return Err(RosterError::Empty);
        }

        let mut index = HashMap::with_capacity(participants.len());
        for (ordinal, participant) in participants.iter().enumerate() {
            if index.insert(participant.id, ordinal).is_some() {
                return Err(RosterError::DuplicateId {
                    id: participant.id,
                });
            }
        }

        Ok(Self {
            participants,
            index,
        })
    }

    /// Number of participants
    #[inline]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// A roster is never empty; kept for API completeness
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Participant id at an ordinal position
    ///
    /// # Panics
    ///
    /// Panics if `ordinal` is out of range.
    #[inline]
    pub fn id_at(&self, ordinal: usize) -> u64 {
        self.participants[ordinal].id
    }

    /// Ordinal position of a participant id, if present
    #[inline]
    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Participant at an ordinal position
    ///
    /// # Panics
    ///
    /// Panics if `ordinal` is out of range.
    #[inline]
    pub fn participant(&self, ordinal: usize) -> &Participant {
        &self.participants[ordinal]
    }

    /// Iterate participants in ordinal order
    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
