//! Tests for the material catalogs

use crate::catalog::{
    Catalog, ChemicalTag, LIQUIDS, LiquidKind, Material, NO_LIQUID, SCORCHED_CRUST, SOLIDS,
    SolidKind,
};
use crate::color::Rgb;

#[test]
fn test_standard_catalog_sizes() {
    let catalog = Catalog::standard();
    assert_eq!(catalog.liquids.len(), 18);
    assert_eq!(catalog.solids.len(), 19);
}

#[test]
fn test_liquids_have_sane_phase_points() {
    for liquid in &LIQUIDS {
        assert!(
            liquid.freeze < liquid.boil,
            "{} freezes above its boiling point",
            liquid.name
        );
    }
}

#[test]
fn test_names_are_unique() {
    let mut names: Vec<&str> = LIQUIDS.iter().map(|l| l.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), LIQUIDS.len());

    let mut names: Vec<&str> = SOLIDS.iter().map(|s| s.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), SOLIDS.len());
}

#[test]
fn test_catalog_colors() {
    let water = &LIQUIDS[0];
    assert_eq!(water.name, "Water");
    assert_eq!(water.color, Rgb::from_u32(0x3b82f6));
    assert_eq!(water.frozen_color.to_hex(), "#e0f2fe");

    let obsidian = SOLIDS.iter().find(|s| s.name == "Obsidian").unwrap();
    assert_eq!(obsidian.color.to_hex(), "#18181b");
    assert_eq!(obsidian.kind, SolidKind::Glass);
    assert_eq!(obsidian.tag, ChemicalTag::Silicon);
}

// ========== Filtering ==========

#[test]
fn test_liquids_above_freezing_is_strict() {
    let catalog = Catalog::standard();
    // Water freezes at exactly 0 and must be excluded at 0
    let at_zero = catalog.liquids_above_freezing(0.0);
    assert!(at_zero.iter().all(|l| l.name != "Water"));
    assert!(at_zero.iter().any(|l| l.name == "Salt Water"));

    let warm = catalog.liquids_above_freezing(1.0);
    assert!(warm.iter().any(|l| l.name == "Water"));
}

#[test]
fn test_no_liquids_on_frozen_world() {
    let catalog = Catalog::standard();
    assert!(catalog.liquids_above_freezing(-250.0).is_empty());
}

#[test]
fn test_ices_melt_out_of_stable_solids() {
    let catalog = Catalog::standard();
    let cold = catalog.stable_solids(-200.0);
    assert_eq!(cold.len(), 19);

    let warm = catalog.stable_solids(20.0);
    assert!(warm.iter().all(|s| s.kind != SolidKind::Ice));
    assert_eq!(warm.len(), 15);

    // Methane ice melts at -182; Dry Ice at -78 still holds at -100
    let mid = catalog.stable_solids(-100.0);
    assert!(mid.iter().any(|s| s.name == "Dry Ice"));
    assert!(mid.iter().all(|s| s.name != "Methane Ice"));
}

#[test]
fn test_custom_catalog() {
    let liquids = [LIQUIDS[0].clone()];
    let solids = [SOLIDS[1].clone()];
    let catalog = Catalog::new(&liquids, &solids);
    assert_eq!(catalog.liquids_above_freezing(50.0).len(), 1);
    assert_eq!(catalog.stable_solids(50.0)[0].name, "Basalt");
}

// ========== Sentinels ==========

#[test]
fn test_sentinels() {
    assert_eq!(SCORCHED_CRUST.name(), "Scorched Crust");
    assert_eq!(SCORCHED_CRUST.color().to_hex(), "#1a0500");
    assert_eq!(SCORCHED_CRUST.melt, 9999.0);

    assert_eq!(NO_LIQUID.name(), "None");
    assert_eq!(NO_LIQUID.kind, LiquidKind::None);
    assert_eq!(NO_LIQUID.tag(), ChemicalTag::Inert);
    assert_eq!(NO_LIQUID.cloud.to_hex(), "#a1a1aa");
}

#[test]
fn test_carbon_life_solvents() {
    let supports: Vec<&str> = LIQUIDS
        .iter()
        .filter(|l| l.supports_carbon_life())
        .map(|l| l.name)
        .collect();
    assert_eq!(supports, vec!["Water", "Salt Water"]);
}

#[test]
fn test_tag_display() {
    assert_eq!(ChemicalTag::Chlorine.to_string(), "[Cl]");
    assert_eq!(ChemicalTag::Inert.to_string(), "[-]");
}
