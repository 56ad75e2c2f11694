//! Tests for terrain palettes

use crate::catalog::Catalog;
use crate::color::{Hsl, Rgb};
use crate::palette::{PALETTE_LEN, generate_palette, planet_palette};
use crate::state::generate_planet_state;
use crate::stream::Stream;

#[test]
fn test_obsidian_palette() {
    let palette = generate_palette(Rgb::from_u32(0x18181b));
    let hex: Vec<String> = palette.iter().map(Rgb::to_hex).collect();
    assert_eq!(
        hex,
        vec![
            "#0d0e12", "#0e0e11", "#0e0f10", "#18181b", "#3d3c44", "#666666", "#999999"
        ]
    );
}

#[test]
fn test_middle_entry_is_base() {
    for hex in [0x3b82f6, 0xffffff, 0x000000, 0xa1a1aa] {
        let base = Rgb::from_u32(hex);
        assert_eq!(generate_palette(base)[PALETTE_LEN / 2], base);
    }
}

#[test]
fn test_lightness_increases_along_ramp() {
    let palette = generate_palette(Rgb::from_u32(0x78716c));
    let lightness: Vec<f64> = palette.iter().map(|c| Hsl::from(*c).l).collect();
    for pair in lightness.windows(2) {
        assert!(pair[0] <= pair[1], "ramp not monotone: {:?}", lightness);
    }
}

#[test]
fn test_planet_palette_uses_molten_color() {
    let state = generate_planet_state(&mut Stream::from_text("planet-31"), &Catalog::standard());
    let palette = planet_palette(&state);
    assert_eq!(palette[3].to_hex(), "#4a476c");
}
