#![cfg(feature = "dev")]
//! Tests for trajectory curvature.
//!
//! ## Test Organization
//!
//! 1. **Norm Helpers** - Velocity, norms and unit-tangent gaps
//! 2. **Curvature** - Floors, skipping and normalization

use approx::{assert_abs_diff_eq, assert_relative_eq};

use pathsig_rs::internals::algorithms::curvature::{VELOCITY_FLOOR, curvature};
use pathsig_rs::internals::algorithms::expected::rolling_signatures;
use pathsig_rs::internals::math::norm::{euclidean_norm, unit_tangent_gap, velocity};
use pathsig_rs::internals::math::tensor::identity;

fn with_level1(a: f64, b: f64) -> [f64; 15] {
    let mut sig = identity();
    sig[1] = a;
    sig[2] = b;
    sig
}

// ============================================================================
// Norm Helper Tests
// ============================================================================

/// Test that velocity skips the identity coefficient.
#[test]
fn test_velocity_skips_identity() {
    let mut from = identity::<f64>();
    let mut to = identity::<f64>();
    from[0] = 5.0;
    to[14] = 2.0;

    let v = velocity(&from, &to);
    assert_eq!(v.len(), 14);
    assert_eq!(v[13], 2.0);
    assert!(v[..13].iter().all(|&c| c == 0.0));
}

/// Test the Euclidean norm.
#[test]
fn test_euclidean_norm() {
    assert_relative_eq!(euclidean_norm(&[3.0f64, 4.0]), 5.0);
    assert_eq!(euclidean_norm::<f64>(&[]), 0.0);
}

/// Test the unit-tangent gap for parallel, opposite and orthogonal vectors.
#[test]
fn test_unit_tangent_gap() {
    let a = [1.0f64, 0.0];
    assert_abs_diff_eq!(unit_tangent_gap(&a, 1.0, &[5.0, 0.0], 5.0), 0.0);
    assert_relative_eq!(unit_tangent_gap(&a, 1.0, &[-2.0, 0.0], 2.0), 2.0);
    assert_relative_eq!(
        unit_tangent_gap(&a, 1.0, &[0.0, 3.0], 3.0),
        2.0f64.sqrt()
    );
}

// ============================================================================
// Curvature Tests
// ============================================================================

/// Test that short trajectories have zero curvature.
#[test]
fn test_short_trajectories() {
    assert_eq!(curvature::<f64>(&[]), 0.0);
    assert_eq!(curvature(&[with_level1(1.0, 0.0)]), 0.0);
    assert_eq!(curvature(&[with_level1(0.0, 0.0), with_level1(1.0, 0.0)]), 0.0);
}

/// Test that a reversal contributes two over the incoming speed.
#[test]
fn test_reversal() {
    let sigs = [
        with_level1(0.0, 0.0),
        with_level1(4.0, 0.0),
        with_level1(3.0, 0.0),
    ];
    assert_relative_eq!(curvature(&sigs), 0.5, epsilon = 1e-15);
}

/// Test that velocities below the floor are skipped but counted.
#[test]
fn test_floor_skips_but_counts() {
    let tiny = VELOCITY_FLOOR / 10.0;
    let sigs = [
        with_level1(0.0, 0.0),
        with_level1(tiny, 0.0),
        with_level1(1.0, 0.0),
        with_level1(1.0, 1.0),
    ];

    // Interior 1: ‖v1‖ below floor, skipped.
    // Interior 2: v1 = (1 - tiny, 0), v2 = (0, 1).
    let v1 = 1.0 - tiny;
    let expected = 2.0f64.sqrt() / v1 / 2.0;
    assert_relative_eq!(curvature(&sigs), expected, epsilon = 1e-15);
}

/// Test that the estimate averages over all interior snapshots.
#[test]
fn test_average_over_interior() {
    let sigs = [
        with_level1(0.0, 0.0),
        with_level1(1.0, 0.0),
        with_level1(1.0, 1.0),
        with_level1(0.0, 1.0),
        with_level1(0.0, 0.0),
    ];
    // Three right-angle turns at unit speed.
    assert_relative_eq!(curvature(&sigs), 2.0f64.sqrt(), epsilon = 1e-15);
}

/// Test that the curvature of a real trajectory is finite and positive.
#[test]
fn test_trajectory_curvature() {
    let path: Vec<[f64; 2]> = (0..80)
        .map(|i| {
            let t = i as f64 * 0.1;
            [t, (t * t * 0.3).sin()]
        })
        .collect();
    let kappa = curvature(&rolling_signatures(&path, 10));
    assert!(kappa.is_finite());
    assert!(kappa > 0.0);
}

/// Test the f32 estimator.
#[test]
fn test_f32_curvature() {
    let mut a = identity::<f32>();
    let mut b = identity::<f32>();
    let mut c = identity::<f32>();
    b[1] = 1.0;
    c[1] = 1.0;
    c[2] = 1.0;
    assert_relative_eq!(curvature(&[a, b, c]), 2.0f32.sqrt(), epsilon = 1e-6);
    a[1] = 0.0;
    assert_eq!(curvature(&[a, a, a]), 0.0f32);
}
