//! Tests for elevation layer thresholds

use approx::assert_relative_eq;

use crate::catalog::SolidKind;
use crate::layers::{base_thresholds, generate_layer_thresholds, jitter_thresholds};
use crate::stream::Stream;

// ========== Base Thresholds ==========

#[test]
fn test_obsidian_base_thresholds() {
    let t = base_thresholds(SolidKind::Glass, 1.1, 7);
    let expected = [
        0.08,
        0.18223653967175735,
        0.2926520025172553,
        0.41190070239039306,
        0.5406892982533819,
        0.6797809817854098,
        0.83,
    ];
    assert_eq!(t.len(), expected.len());
    for (a, b) in t.iter().zip(expected) {
        assert_relative_eq!(*a, b, epsilon = 1e-12);
    }
}

#[test]
fn test_strictly_increasing_and_bounded() {
    for kind in [SolidKind::Rock, SolidKind::Crystal, SolidKind::Ice] {
        for roughness in [0.3, 0.6, 1.0, 1.9] {
            let t = base_thresholds(kind, roughness, 7);
            assert_relative_eq!(t[0], 0.08);
            assert_relative_eq!(t[6], 0.83, epsilon = 1e-12);
            for pair in t.windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
    }
}

#[test]
fn test_starting_gap_cancels_in_normalization() {
    // Every stop is a multiple of the starting gap, so the normalized
    // thresholds are identical for rock and crystal
    let rock = base_thresholds(SolidKind::Rock, 1.0, 7);
    let crystal = base_thresholds(SolidKind::Crystal, 1.0, 7);
    for (a, b) in rock.iter().zip(&crystal) {
        assert_relative_eq!(*a, *b, epsilon = 1e-12);
    }
}

#[test]
fn test_degenerate_counts() {
    assert!(base_thresholds(SolidKind::Rock, 1.0, 0).is_empty());
    assert_eq!(base_thresholds(SolidKind::Rock, 1.0, 1), vec![0.08]);
    let two = base_thresholds(SolidKind::Rock, 1.0, 2);
    assert_relative_eq!(two[0], 0.08);
    assert_relative_eq!(two[1], 0.83, epsilon = 1e-12);
}

// ========== Jitter ==========

#[test]
fn test_golden_jitter_test_1() {
    let mut stream = Stream::from_text("test-1");
    let t = generate_layer_thresholds(&mut stream, SolidKind::Glass, 1.1, 7);
    let expected = [
        0.08113968645222484,
        0.1749384930605079,
        0.2829284864665291,
        0.40174082704963326,
        0.5584594455769902,
        0.6741363734591536,
        0.8356630948279052,
    ];
    for (a, b) in t.iter().zip(expected) {
        assert_relative_eq!(*a, b, epsilon = 1e-12);
    }
}

#[test]
fn test_jitter_within_bounds() {
    let base = base_thresholds(SolidKind::Rock, 1.0, 7);
    for i in 0..200 {
        let mut stream = Stream::from_text(&format!("jitter-{}", i));
        let jittered = jitter_thresholds(&mut stream, &base);
        for (b, j) in base.iter().zip(&jittered) {
            assert!((j - b).abs() <= 0.02 + 1e-12);
            assert!((0.0..=1.0).contains(j));
        }
    }
}

#[test]
fn test_jitter_clamps_to_unit_range() {
    let mut stream = Stream::from_text("clamp");
    let jittered = jitter_thresholds(&mut stream, &[0.0, 1.0, -0.5, 1.5]);
    assert!(jittered.iter().all(|v| (0.0..=1.0).contains(v)));
    assert_eq!(jittered[2], 0.0);
    assert_eq!(jittered[3], 1.0);
}

#[test]
fn test_jitter_one_draw_per_threshold() {
    let mut stream = Stream::from_text("count");
    let mut reference = stream.clone();
    jitter_thresholds(&mut stream, &[0.1, 0.2, 0.3]);
    for _ in 0..3 {
        reference.next_unit();
    }
    assert_eq!(stream, reference);
}
