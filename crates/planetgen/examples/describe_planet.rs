//! Print a planet summary, or its full snapshot as JSON
//!
//! Usage: cargo run -p planetgen --example describe_planet [seed] [--json]
//!
//! Set RUST_LOG=debug to see generation traces.

use planetgen::{GenerationSession, ViewParams};

fn main() {
    env_logger::init();

    let mut seed = "test-1".to_string();
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => seed = arg,
        }
    }

    let session = GenerationSession::new(seed);
    let state = session.state();
    let view = ViewParams::for_planet(state);

    if json {
        match serde_json::to_string_pretty(&session.snapshot(&view)) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("failed to serialize snapshot: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("=== {} ===", session.seed());
    println!(
        "Temperature: {}°C (equator {}°C, poles {}°C)",
        state.base_temp, state.max_temp, state.min_temp
    );
    println!("Crust:       {} {}", state.solid_name(), state.solid.tag());
    println!(
        "Ocean:       {} {} ({})",
        state.ocean_name(),
        state.liquid.tag(),
        state.liquid_state
    );
    println!("Atmosphere:  {}", state.atmosphere);
    match &state.biosphere {
        Some(bio) => println!(
            "Life:        {} ({}°C to {}°C)",
            bio.kind, bio.min_temp, bio.max_temp
        ),
        None => println!("Life:        none"),
    }
    println!(
        "Tilt:        {:.1}°, roughness {:.2}, water {}%",
        state.tilt, state.roughness, state.suggested_water
    );

    let palette: Vec<String> = session.palette().iter().map(|c| c.to_hex()).collect();
    println!("Palette:     {}", palette.join(" "));

    let thresholds: Vec<String> = session
        .layer_thresholds()
        .iter()
        .map(|t| format!("{:.3}", t))
        .collect();
    println!("Layers:      {}", thresholds.join(" "));

    let geology = session.geology();
    println!(
        "Fractures:   {} ({} visible)",
        geology.len(),
        geology.iter().filter(|p| !p.is_empty()).count()
    );
    println!("Clouds:      {} layers", session.clouds().len());
    match session.rings() {
        Some(rings) => println!("Rings:       {:?}, {} arcs", rings.mode, rings.elements.len()),
        None => println!("Rings:       none"),
    }
}
