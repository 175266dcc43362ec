//! Core data types for giftmatch
//!
//! ## Types
//!
//! - [`Participant`]: a gifter with an id and an exclusion set
//! - [`Roster`]: validated, ordered participant collection for one attempt
//! - [`RosterError`]: contract violations caught at roster construction
//! - [`MatchOutcome`]: complete or partial gifter -> recipient mapping
//!
//! ## Identity Model
//!
//! Ids are opaque `u64` values supplied by the caller. The roster maps them
//! to ordinal positions (matrix rows/columns) and back; everything inside
//! the engine works in ordinals, everything at the API boundary in ids.

mod participant;
mod roster;
mod outcome;

// Re-export all types at module level
pub use participant::Participant;
pub use roster::{Roster, RosterError};
pub use outcome::MatchOutcome;
