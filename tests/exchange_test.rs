//! End-to-end tests for the giftmatch assignment engine.
//!
//! These tests verify:
//! 1. Successful outcomes satisfy the exchange invariants
//!    (no self-assignment, no excluded recipient, bijection)
//! 2. Infeasible inputs fail cleanly and terminate
//! 3. Fixed seeds make the whole attempt reproducible
//! 4. Feasible-but-constrained rosters succeed within bounded retries
//!
//! ## Running
//!
//! ```bash
//! cargo test --test exchange_test
//! ```

use std::collections::HashSet;

use giftmatch::{MatchOutcome, MatchingEngine, Participant, Roster};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Retry budget for feasible-but-randomized scenarios. The engine is
/// greedy with random tie-breaks, so a single attempt may dead-end.
const MAX_RETRIES: u64 = 32;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn roster_of(participants: Vec<Participant>) -> Roster {
    Roster::new(participants).expect("test roster must be valid")
}

/// Assert the three success invariants over a complete outcome:
/// no self-assignment, no excluded recipient, bijection.
fn assert_valid_exchange(roster: &Roster, outcome: &MatchOutcome) {
    assert!(outcome.is_complete(), "outcome must be complete");
    assert_eq!(outcome.len(), roster.len());

    let mut recipients_seen = HashSet::new();
    for participant in roster.iter() {
        let recipient = outcome
            .recipient_of(participant.id)
            .expect("every participant has a recipient");

        assert_ne!(
            recipient, participant.id,
            "participant {} assigned to themselves",
            participant.id
        );
        assert!(
            !participant.excludes(recipient),
            "participant {} assigned excluded recipient {}",
            participant.id,
            recipient
        );
        assert!(
            roster.index_of(recipient).is_some(),
            "recipient {} is not in the roster",
            recipient
        );
        assert!(
            recipients_seen.insert(recipient),
            "recipient {} assigned twice",
            recipient
        );
    }
}

/// Run attempts with successive seeds until one completes, panicking if
/// the retry budget is exhausted. Mirrors how a caller would retry a
/// feasible exchange that dead-ended on an unlucky tie-break.
fn assign_with_retries(build: impl Fn() -> Roster, base_seed: u64) -> (Roster, MatchOutcome) {
    for attempt in 0..MAX_RETRIES {
        let roster = build();
        let mut engine = MatchingEngine::with_rng(ChaCha8Rng::seed_from_u64(base_seed + attempt));
        let outcome = engine.assign(&roster);
        if outcome.is_complete() {
            return (roster, outcome);
        }
    }
    panic!("no complete assignment within {} attempts", MAX_RETRIES);
}

// ============================================================================
// SCENARIO TESTS
// ============================================================================

#[test]
fn single_participant_always_infeasible() {
    let roster = roster_of(vec![Participant::new(1)]);

    // Every seed must fail: self-assignment is forbidden and there is
    // no other candidate.
    for seed in 0..8 {
        let mut engine = MatchingEngine::with_rng(ChaCha8Rng::seed_from_u64(seed));
        let outcome = engine.assign(&roster);
        assert!(!outcome.is_complete());
        assert!(outcome.is_empty());
    }
}

#[test]
fn two_participants_swap_deterministically() {
    // Only one candidate per row, so the swap is found regardless of seed.
    for seed in 0..8 {
        let roster = roster_of(vec![Participant::new(1), Participant::new(2)]);
        let mut engine = MatchingEngine::with_rng(ChaCha8Rng::seed_from_u64(seed));
        let outcome = engine.assign(&roster);

        assert_valid_exchange(&roster, &outcome);
        assert_eq!(outcome.recipient_of(1), Some(2));
        assert_eq!(outcome.recipient_of(2), Some(1));
    }
}

#[test]
fn four_unconstrained_participants_succeed() {
    // A valid derangement of four always exists, and with no exclusions
    // the greedy loop cannot dead-end before the last row; a handful of
    // seeds all succeed on the first attempt.
    for seed in 0..8 {
        let roster = roster_of(vec![
            Participant::new(1),
            Participant::new(2),
            Participant::new(3),
            Participant::new(4),
        ]);
        let mut engine = MatchingEngine::with_rng(ChaCha8Rng::seed_from_u64(seed));
        let outcome = engine.assign(&roster);

        assert_valid_exchange(&roster, &outcome);
    }
}

#[test]
fn participant_excluding_everyone_fails_and_terminates() {
    // A excludes B and C: A has zero eligible recipients from the start.
    let roster = roster_of(vec![
        Participant::new(1).exclude(2).exclude(3),
        Participant::new(2),
        Participant::new(3),
    ]);

    let mut engine = MatchingEngine::with_rng(ChaCha8Rng::seed_from_u64(42));
    let outcome = engine.assign(&roster);

    assert!(!outcome.is_complete());
    // The most-constrained row is processed first, so nothing commits.
    assert!(outcome.is_empty());
}

#[test]
fn partial_assignments_survive_failure() {
    // 1 and 2 both only accept 4; whoever loses the race dead-ends, but
    // only after at least one assignment has been committed.
    let roster = roster_of(vec![
        Participant::new(1).exclude(2).exclude(3),
        Participant::new(2).exclude(1).exclude(3),
        Participant::new(3),
        Participant::new(4),
    ]);

    let mut engine = MatchingEngine::with_rng(ChaCha8Rng::seed_from_u64(0));
    let outcome = engine.assign(&roster);

    assert!(!outcome.is_complete());
    assert!(!outcome.is_empty(), "failure must keep committed assignments");
    assert!(outcome.len() < roster.len());
}

#[test]
fn mutual_couple_exclusions_succeed_with_retries() {
    let build = || {
        roster_of(vec![
            Participant::new(1).exclude(2),
            Participant::new(2).exclude(1),
            Participant::new(3).exclude(4),
            Participant::new(4).exclude(3),
            Participant::new(5).exclude(6),
            Participant::new(6).exclude(5),
        ])
    };

    let (roster, outcome) = assign_with_retries(build, 1000);
    assert_valid_exchange(&roster, &outcome);

    // The exclusions actually bind: 1 never gives to 2, etc.
    for (gifter, excluded) in [(1, 2), (2, 1), (3, 4), (4, 3), (5, 6), (6, 5)] {
        assert_ne!(outcome.recipient_of(gifter), Some(excluded));
    }
}

// ============================================================================
// DETERMINISM
// ============================================================================

#[test]
fn fixed_seed_reproduces_the_full_outcome() {
    const SEED: u64 = 12345;

    let build = || {
        roster_of(vec![
            Participant::new(10),
            Participant::new(20).exclude(30),
            Participant::new(30),
            Participant::new(40).exclude(10),
            Participant::new(50),
        ])
    };

    let mut first_engine = MatchingEngine::with_rng(ChaCha8Rng::seed_from_u64(SEED));
    let first = first_engine.assign(&build());

    let mut second_engine = MatchingEngine::with_rng(ChaCha8Rng::seed_from_u64(SEED));
    let second = second_engine.assign(&build());

    assert_eq!(first, second, "same seed and input must reproduce the outcome");
    assert_eq!(first.assignments(), second.assignments());
}

// ============================================================================
// LARGER ROSTERS
// ============================================================================

/// Build a roster of `n` participants where each excludes a few random
/// others. Deterministic for a given seed.
fn random_roster(n: u64, exclusions_per_participant: usize, seed: u64) -> Roster {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut participants = Vec::with_capacity(n as usize);

    for id in 1..=n {
        let mut participant = Participant::new(id);
        for _ in 0..exclusions_per_participant {
            let other = rng.gen_range(1..=n);
            if other != id {
                participant = participant.exclude(other);
            }
        }
        participants.push(participant);
    }

    roster_of(participants)
}

#[test]
fn hundred_participants_with_sparse_exclusions() {
    // Sparse constraints leave plenty of slack; the greedy heuristic
    // should complete within a few retries at worst.
    let (roster, outcome) = assign_with_retries(|| random_roster(100, 3, 7), 5000);
    assert_valid_exchange(&roster, &outcome);
}

#[test]
fn dense_exclusions_terminate_either_way() {
    // Heavily constrained roster: completion is not guaranteed, but the
    // loop is bounded and any complete outcome must still be valid.
    let roster = random_roster(30, 20, 11);
    let mut engine = MatchingEngine::with_rng(ChaCha8Rng::seed_from_u64(11));
    let outcome = engine.assign(&roster);

    if outcome.is_complete() {
        assert_valid_exchange(&roster, &outcome);
    } else {
        assert!(outcome.len() < roster.len());
    }
}
