//! Matching engine module for giftmatch.
//!
//! ## Design Principles
//!
//! 1. **Greedy, most-constrained-first**: the unmatched participant with
//!    the fewest remaining eligible recipients is assigned next
//! 2. **Randomized tie-breaking**: among equally eligible recipients one
//!    is chosen uniformly at random, from an injectable RNG
//! 3. **Synchronous execution**: one attempt is O(n²) work with no I/O,
//!    no suspension, and guaranteed termination
//! 4. **Infeasibility is data**: a dead end returns a partial outcome,
//!    not an error
//!
//! ## Example
//!
//! ```
//! use giftmatch::engine::MatchingEngine;
//! use giftmatch::types::{Participant, Roster};
//!
//! let roster = Roster::new(vec![
//!     Participant::new(1),
//!     Participant::new(2),
//!     Participant::new(3).exclude(1),
//!     Participant::new(4),
//! ]).unwrap();
//!
//! let mut engine = MatchingEngine::new();
//! let outcome = engine.assign(&roster);
//!
//! if outcome.is_complete() {
//!     for p in roster.iter() {
//!         println!("{} gives to {}", p.id, outcome.recipient_of(p.id).unwrap());
//!     }
//! }
//! ```

pub mod matcher;

pub use matcher::MatchingEngine;
