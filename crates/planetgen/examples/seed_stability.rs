//! Check that the same seed produces identical planets
//!
//! Usage: cargo run -p planetgen --example seed_stability [seed]

use planetgen::{GenerationSession, ViewParams};

fn main() {
    let seed = std::env::args().nth(1).unwrap_or_else(|| "test-1".to_string());

    println!("Testing seed stability with seed: {:?}\n", seed);

    for run in 1..=5 {
        let session = GenerationSession::new(seed.as_str());
        let state = session.state();
        println!(
            "Run {}: {} | {} clouds, {} fractures, {} ring arcs",
            run,
            state,
            session.clouds().len(),
            session.geology().len(),
            session.rings().map_or(0, |r| r.elements.len())
        );
    }
    println!();

    let view = ViewParams::default();
    let first = GenerationSession::new(seed.as_str()).snapshot(&view);
    let second = GenerationSession::new(seed.as_str()).snapshot(&view);

    if first.state != second.state {
        eprintln!("❌ FAIL: planet state differs!");
        std::process::exit(1);
    }
    if first.clouds != second.clouds {
        eprintln!(
            "❌ FAIL: clouds differ! {} vs {} layers",
            first.clouds.len(),
            second.clouds.len()
        );
        std::process::exit(1);
    }
    if first.geology != second.geology || first.rings != second.rings {
        eprintln!("❌ FAIL: geometry differs!");
        std::process::exit(1);
    }
    if first != second {
        eprintln!("❌ FAIL: snapshot differs!");
        std::process::exit(1);
    }

    println!("✅ PASS: all runs identical");
}
