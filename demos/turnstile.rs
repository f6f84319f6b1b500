//! Turnstile
//!
//! This example drives a coin-operated turnstile and walks through the
//! one-step undo/redo history.
//!
//! Key concepts:
//! - Declaring a machine with the fsm_config! macro
//! - Rejected events leave the machine where it was
//! - Undo and redo each reach back exactly one step
//!
//! Run with: cargo run --example turnstile

use fsm_history::{fsm_config, StateMachine};
use stillwater::validation::Validation;

fn main() {
    println!("=== Turnstile Example ===\n");

    let config = fsm_config! {
        initial: Locked,
        Locked { coin => Unlocked, push => Locked },
        Unlocked { push => Locked, coin => Unlocked },
    };

    match config.validate() {
        Validation::Success(_) => println!("Configuration is consistent"),
        Validation::Failure(issues) => {
            for issue in issues.iter() {
                println!("Configuration issue: {}", issue);
            }
        }
    }

    let mut machine = StateMachine::new(config);
    println!("Initial state: {}", machine.state());

    for event in ["push", "coin", "coin", "push", "kick"] {
        match machine.trigger(event) {
            Ok(()) => println!("{:>5} -> {}", event, machine.state()),
            Err(e) => println!("{:>5} rejected: {}", event, e),
        }
    }

    println!();
    for (label, step) in [
        ("Undo", StateMachine::undo as fn(&mut StateMachine) -> bool),
        ("Undo again", StateMachine::undo),
        ("Redo", StateMachine::redo),
    ] {
        let moved = step(&mut machine);
        println!("{}: {} (now {})", label, moved, machine.state());
    }

    let with_coin: Vec<&str> = machine
        .states(Some("coin"))
        .into_iter()
        .map(|s| s.as_str())
        .collect();
    println!("\nStates accepting a coin: {:?}", with_coin);

    println!("\n=== Example Complete ===");
}
