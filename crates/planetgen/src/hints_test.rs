//! Tests for render hints

use approx::assert_relative_eq;

use crate::catalog::{Catalog, LIQUIDS, LiquidKind};
use crate::color::shift;
use crate::config::ViewParams;
use crate::hints::{DEFAULT_NOISE_SEED, RenderHints, noise_seed};
use crate::state::{PlanetState, generate_planet_state};
use crate::stream::Stream;
use crate::surface::Surface;

fn planet(seed: &str) -> PlanetState {
    generate_planet_state(&mut Stream::from_text(seed), &Catalog::standard())
}

// ========== Noise Seed ==========

#[test]
fn test_noise_seed_from_second_segment() {
    assert_eq!(noise_seed("test-1"), 1);
    assert_eq!(noise_seed("planet-42"), 42);
    assert_eq!(noise_seed("a-17-99"), 17);
    assert_eq!(noise_seed("a-+5"), 5);
    assert_eq!(noise_seed("a- 12"), 12);
}

#[test]
fn test_noise_seed_fallbacks() {
    assert_eq!(noise_seed(""), DEFAULT_NOISE_SEED);
    assert_eq!(noise_seed("alpha"), DEFAULT_NOISE_SEED);
    assert_eq!(noise_seed("alpha-"), DEFAULT_NOISE_SEED);
    assert_eq!(noise_seed("alpha-beta"), DEFAULT_NOISE_SEED);
    assert_eq!(noise_seed("alpha-0"), DEFAULT_NOISE_SEED);
    assert_eq!(noise_seed("a--5"), DEFAULT_NOISE_SEED);
}

// ========== Hints ==========

#[test]
fn test_mask_intercepts_at_half_water() {
    let state = planet("test-1");
    let view = ViewParams::default();
    let hints = RenderHints::new("test-1", &state, &[0.08, 0.5], &view);

    // Water offset is zero at 50%
    assert_relative_eq!(hints.layer_intercepts[0], -4.8, epsilon = 1e-12);
    assert_relative_eq!(hints.layer_intercepts[1], -30.0, epsilon = 1e-12);
    assert_relative_eq!(hints.water_intercept, 60.5, epsilon = 1e-12);
    assert_relative_eq!(hints.land_intercept, -24.5, epsilon = 1e-12);
    assert_relative_eq!(hints.shadow_opacity, 0.5);
}

#[test]
fn test_water_level_shifts_intercepts() {
    let state = planet("test-1");
    let view = ViewParams {
        water_level: 100.0,
        ..ViewParams::default()
    };
    let hints = RenderHints::new("test-1", &state, &[0.2], &view);
    // (0.2 + 0.75) * 60
    assert_relative_eq!(hints.layer_intercepts[0], -57.0, epsilon = 1e-12);
    assert_relative_eq!(hints.water_intercept, 120.5, epsilon = 1e-12);
    assert_relative_eq!(hints.land_intercept, -49.5, epsilon = 1e-12);
}

#[test]
fn test_glow_and_colors() {
    let state = planet("test-1");
    let hints = RenderHints::new("test-1", &state, &[], &ViewParams::default());
    let density = state.atmosphere.density;

    assert_eq!(hints.glow_stops[0].offset, 0.85);
    assert_eq!(hints.glow_stops[0].opacity, 0.0);
    assert_relative_eq!(hints.glow_stops[1].opacity, density * 0.4);
    assert_relative_eq!(hints.glow_stops[2].opacity, density);
    assert_eq!(hints.glow_color, state.cloud_color);
    assert_eq!(hints.rim_color, shift(state.cloud_color, 20.0, -10.0, 0.0));
    assert_eq!(hints.ocean_gradient[1].to_hex(), "#a3e635");
    assert_eq!(hints.noise_seed, 1);
    assert_eq!(hints.base_frequency, state.base_freq);
    assert!(hints.blur_liquid);
}

#[test]
fn test_cloud_visibility() {
    let state = planet("test-1");
    let on = RenderHints::new("test-1", &state, &[], &ViewParams::default());
    assert!(on.show_clouds);

    let view = ViewParams {
        clouds_enabled: false,
        ..ViewParams::default()
    };
    assert!(!RenderHints::new("test-1", &state, &[], &view).show_clouds);

    let vacuum = planet("planet-2");
    assert!(!RenderHints::new("planet-2", &vacuum, &[], &ViewParams::default()).show_clouds);
}

#[test]
fn test_magma_is_not_blurred() {
    let mut state = planet("test-1");
    let lava = LIQUIDS.iter().find(|l| l.kind == LiquidKind::Magma).unwrap();
    state.liquid = Surface::plain(lava.clone());
    let hints = RenderHints::new("test-1", &state, &[], &ViewParams::default());
    assert!(!hints.blur_liquid);
}

#[test]
fn test_view_params_for_planet() {
    let state = planet("test-1");
    let view = ViewParams::for_planet(&state);
    assert_eq!(view.water_level, 43.0);
    assert_eq!(view.lens_strength, 30.0);
    assert!(view.clouds_enabled);
}

#[test]
fn test_view_params_partial_json() {
    let view: ViewParams = serde_json::from_str(r#"{"waterLevel": 70}"#).unwrap();
    assert_eq!(view.water_level, 70.0);
    assert_eq!(view.shadow, 50.0);
    assert!(view.clouds_enabled);
}
