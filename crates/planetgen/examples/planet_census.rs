//! Generate a CSV census of random planets
//!
//! Usage: cargo run -p planetgen --example planet_census > planets.csv

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use planetgen::GenerationSession;

fn main() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let n_planets = 1000;

    println!("seed,base_c,solid,ocean,state,atmosphere,density,life,rings,roughness");

    for _ in 0..n_planets {
        let seed = format!("planet-{}", rng.random_range(0..1_000_000));
        let session = GenerationSession::new(seed.as_str());
        let p = session.state();
        println!(
            "{},{},{},{},{},{},{:.3},{},{},{:.3}",
            seed,
            p.base_temp,
            p.solid_name(),
            p.ocean_name(),
            p.liquid_state,
            p.atmosphere.name,
            p.atmosphere.density,
            p.biosphere.as_ref().map_or("none", |b| b.kind.name()),
            p.rings,
            p.roughness,
        );
    }

    eprintln!("Generated {} planets", n_planets);
}
