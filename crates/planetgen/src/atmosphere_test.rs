//! Tests for atmosphere formation and naming

use crate::atmosphere::{Atmosphere, AtmosphereTier, form_atmosphere};
use crate::catalog::{LIQUIDS, NO_LIQUID};
use crate::state::LiquidState;
use crate::stream::Stream;

// ========== Tier Classification ==========

#[test]
fn test_tier_boundaries() {
    assert_eq!(AtmosphereTier::classify(0.0), AtmosphereTier::Trace);
    assert_eq!(AtmosphereTier::classify(0.05), AtmosphereTier::Trace);
    assert_eq!(AtmosphereTier::classify(0.051), AtmosphereTier::Thin);
    assert_eq!(AtmosphereTier::classify(0.349), AtmosphereTier::Thin);
    assert_eq!(AtmosphereTier::classify(0.35), AtmosphereTier::Moderate);
    assert_eq!(AtmosphereTier::classify(0.69), AtmosphereTier::Moderate);
    assert_eq!(AtmosphereTier::classify(0.7), AtmosphereTier::Dense);
    assert_eq!(AtmosphereTier::classify(1.0), AtmosphereTier::Dense);
}

// ========== Naming ==========

#[test]
fn test_trace_gases_name() {
    let atm = Atmosphere::from_density(0.05, Some("Water Vapor"));
    assert_eq!(atm.name, "Trace Gases");
    assert_eq!(atm.tier, AtmosphereTier::Trace);
}

#[test]
fn test_named_after_gas() {
    assert_eq!(
        Atmosphere::from_density(0.2, Some("Water Vapor")).name,
        "Thin Water Vapor"
    );
    assert_eq!(
        Atmosphere::from_density(0.5352114657638595, Some("Chlorine Gas")).name,
        "Moderate Chlorine Gas"
    );
    assert_eq!(
        Atmosphere::from_density(0.8, Some("Methane")).name,
        "Dense Methane"
    );
}

#[test]
fn test_inert_mix_without_liquid() {
    assert_eq!(Atmosphere::from_density(0.16, None).name, "Thin Inert Mix");
}

#[test]
fn test_vacuum() {
    let atm = Atmosphere::vacuum();
    assert_eq!(atm.name, "Vacuum");
    assert_eq!(atm.density, 0.0);
    assert!(atm.is_vacuum());
}

#[test]
fn test_vaporized() {
    let atm = Atmosphere::vaporized(0.95, "Nitrogen");
    assert_eq!(atm.name, "Dense Vaporized Nitrogen");
    assert_eq!(atm.tier, AtmosphereTier::Dense);
}

// ========== Formation ==========

fn first_stream_with(first_draw: impl Fn(f64) -> bool) -> Stream {
    (0..10_000)
        .map(|i| Stream::from_text(&format!("atm-{}", i)))
        .find(|s| first_draw(s.clone().next_unit()))
        .unwrap()
}

#[test]
fn test_vacuum_uses_one_draw() {
    let mut stream = first_stream_with(|u| u <= 0.2);
    let mut reference = stream.clone();
    reference.next_unit();

    let atm = form_atmosphere(&mut stream, &LIQUIDS[0], LiquidState::Liquid);
    assert!(atm.is_vacuum());
    assert_eq!(stream, reference);
}

#[test]
fn test_sediment_density_forced_high() {
    for i in 0..200 {
        let mut stream = Stream::from_text(&format!("sediment-{}", i));
        let atm = form_atmosphere(&mut stream, &LIQUIDS[8], LiquidState::Sediment);
        if atm.is_vacuum() {
            continue;
        }
        assert!((0.9..1.0).contains(&atm.density), "density {}", atm.density);
        assert_eq!(atm.name, "Dense Vaporized Nitrogen");
    }
}

#[test]
fn test_density_in_unit_range() {
    let states = [
        LiquidState::None,
        LiquidState::Liquid,
        LiquidState::Boiling,
        LiquidState::Sediment,
    ];
    for i in 0..200 {
        for state in states {
            let mut stream = Stream::from_text(&format!("density-{}", i));
            let atm = form_atmosphere(&mut stream, &NO_LIQUID, state);
            assert!((0.0..=1.0).contains(&atm.density));
        }
    }
}

#[test]
fn test_boiling_atmosphere_at_least_contribution() {
    let mut stream = first_stream_with(|u| u > 0.2);
    let atm = form_atmosphere(&mut stream, &LIQUIDS[10], LiquidState::Boiling);
    assert!(atm.density >= 0.4);
    assert!(atm.name.ends_with("Chlorine Gas"));
}
