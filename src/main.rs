//! giftmatch - Binary Entry Point
//!
//! Runs the assignment engine over a small demo roster and prints the
//! result. Serves as a quick end-to-end smoke check of the library.

use giftmatch::{MatchingEngine, Participant, Roster};

fn main() {
    println!("===========================================");
    println!("  giftmatch - gift exchange assignments");
    println!("===========================================");
    println!();

    // Six participants; a couple of mutual exclusions (couples who
    // already exchange gifts at home).
    let participants = vec![
        Participant::new(1).exclude(2),
        Participant::new(2).exclude(1),
        Participant::new(3),
        Participant::new(4).exclude(5),
        Participant::new(5).exclude(4),
        Participant::new(6),
    ];

    let roster = match Roster::new(participants) {
        Ok(roster) => roster,
        Err(e) => {
            eprintln!("invalid roster: {}", e);
            std::process::exit(1);
        }
    };

    println!("Matching {} participants...", roster.len());
    println!();

    let mut engine = MatchingEngine::new();
    let outcome = engine.assign(&roster);

    if outcome.is_complete() {
        println!("Assignment complete:");
        for participant in roster.iter() {
            let recipient = outcome
                .recipient_of(participant.id)
                .expect("complete outcome covers every participant");
            println!("  {} -> {}", participant.id, recipient);
        }
    } else {
        println!(
            "No complete assignment found ({} of {} committed).",
            outcome.len(),
            roster.len()
        );
        println!("Loosen restrictions or try again; tie-breaks are random.");
    }
}
