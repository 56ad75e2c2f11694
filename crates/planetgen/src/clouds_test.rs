//! Tests for cloud formations

use approx::assert_relative_eq;
use nalgebra::Point2;

use crate::atmosphere::Atmosphere;
use crate::catalog::Catalog;
use crate::clouds::{ShapeOptions, cloud_spine, generate_cloud_paths, shape_from_spine};
use crate::state::{PlanetState, generate_planet_state};
use crate::stream::Stream;

fn planet(seed: &str) -> PlanetState {
    generate_planet_state(&mut Stream::from_text(seed), &Catalog::standard())
}

// ========== Spines ==========

#[test]
fn test_spine_shape() {
    let mut stream = Stream::from_text("spine");
    let spine = cloud_spine(&mut stream, -200.0, 300.0, 20.0);
    assert_eq!(spine.len(), 61);
    assert_relative_eq!(spine[0].x, 500.0 - 150.0 + 20.0, epsilon = 1e-9);
    assert_relative_eq!(spine[60].x, 500.0 + 150.0 + 20.0, epsilon = 1e-9);
    for pair in spine.windows(2) {
        assert!(pair[0].x < pair[1].x);
    }
}

#[test]
fn test_spine_draws_once_per_point() {
    let mut stream = Stream::from_text("spine");
    let mut reference = stream.clone();
    cloud_spine(&mut stream, 100.0, 200.0, 0.0);
    for _ in 0..61 {
        reference.next_unit();
    }
    assert_eq!(stream, reference);
}

// ========== Shapes ==========

#[test]
fn test_short_spine_yields_nothing_without_drawing() {
    let mut stream = Stream::from_text("short");
    let before = stream.clone();
    let spine = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
    assert!(shape_from_spine(&mut stream, &spine, &ShapeOptions::default()).is_none());
    assert_eq!(stream, before);
}

#[test]
fn test_shape_outline_is_closed_loop() {
    let mut stream = Stream::from_text("shape");
    let spine: Vec<Point2<f64>> = (0..10).map(|i| Point2::new(i as f64 * 10.0, 0.0)).collect();
    let outline = shape_from_spine(&mut stream, &spine, &ShapeOptions::default()).unwrap();
    assert_eq!(outline.len(), 20);
    // Both tips taper to the spine itself
    assert_relative_eq!(outline[0].y, 0.0, epsilon = 1e-9);
    assert_relative_eq!(outline[9].y, 0.0, epsilon = 1e-5);
    // Top edge is mirrored by the bottom edge
    for i in 0..10 {
        assert_relative_eq!(outline[i].y, -outline[19 - i].y, epsilon = 1e-9);
    }
}

// ========== Full System ==========

#[test]
fn test_golden_test_1() {
    let state = planet("test-1");
    let clouds = generate_cloud_paths(&mut Stream::from_text("test-1"), &state);

    assert_eq!(clouds.len(), 48);
    assert_eq!(clouds[0].key, "cloud-0-0-0");
    assert_eq!(clouds[0].color.to_hex(), "#f5fce8");
    assert_eq!(clouds[0].opacity, 0.6);
    assert_eq!(clouds[0].points.len(), 122);
    assert_relative_eq!(clouds[0].points[0].x, 201.7, epsilon = 0.06);
    assert_relative_eq!(clouds[0].points[0].y, 92.4, epsilon = 0.06);

    assert_eq!(clouds[1].key, "cloud-0-1-1");
    assert_eq!(clouds[47].key, "cloud-3-4-47");
}

#[test]
fn test_thin_atmosphere_has_no_clouds() {
    let mut state = planet("test-1");
    state.atmosphere = Atmosphere::from_density(0.09, Some("Chlorine Gas"));

    let mut stream = Stream::from_text("test-1");
    let before = stream.clone();
    assert!(generate_cloud_paths(&mut stream, &state).is_empty());
    assert_eq!(stream, before);
}

#[test]
fn test_cloud_counts_for_other_seeds() {
    assert_eq!(
        generate_cloud_paths(&mut Stream::from_text("planet-7"), &planet("planet-7")).len(),
        29
    );
    assert_eq!(
        generate_cloud_paths(&mut Stream::from_text("planet-26"), &planet("planet-26")).len(),
        33
    );
    // Vacuum world
    assert!(
        generate_cloud_paths(&mut Stream::from_text("planet-2"), &planet("planet-2")).is_empty()
    );
}

#[test]
fn test_keys_are_unique_and_ordered() {
    let state = planet("planet-11");
    let clouds = generate_cloud_paths(&mut Stream::from_text("planet-11"), &state);
    assert_eq!(clouds.len(), 32);
    for (i, cloud) in clouds.iter().enumerate() {
        assert!(cloud.key.ends_with(&format!("-{}", i)));
        assert!(cloud.to_svg_path().ends_with(" Z"));
    }
}
