#![cfg(feature = "dev")]
//! Tests for the Online adapter.
//!
//! The Online adapter computes window signatures sample by sample, designed for:
//! - Real-time data streams
//! - Regime-change monitoring through trajectory curvature
//! - Bounded memory use
//!
//! ## Test Organization
//!
//! 1. **Basic Functionality** - Warm-up and per-sample output
//! 2. **Window Management** - Eviction of samples and trajectory entries
//! 3. **Lifecycle Management** - Reset and reuse
//! 4. **Builder Validation** - Parameter validation and error handling
//! 5. **Edge Cases** - Non-finite samples

use approx::assert_relative_eq;
use pathsig_rs::prelude::*;

use pathsig_rs::internals::adapters::online::{
    DEFAULT_TRAJECTORY_CAPACITY, MIN_TRAJECTORY_CAPACITY, OnlineSignatureBuilder,
};
use pathsig_rs::internals::algorithms::curvature::curvature;
use pathsig_rs::internals::algorithms::logsig::log_signature;
use pathsig_rs::internals::algorithms::signature::signature;

fn samples(n: usize) -> Vec<[f64; 2]> {
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.25;
            [t, (0.8 * t).sin() * (1.0 + 0.1 * t)]
        })
        .collect()
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

/// Test that nothing is produced until the window is full.
#[test]
fn test_online_warm_up() {
    let mut processor = PathSig::new()
        .window_size(4)
        .adapter(Online)
        .build()
        .expect("Builder should succeed");

    let data = samples(4);
    for p in &data[..3] {
        assert!(processor.push(p[0], p[1]).unwrap().is_none());
    }
    assert_eq!(processor.window_len(), 3);
    assert_eq!(processor.trajectory_len(), 0);

    let out = processor
        .push(data[3][0], data[3][1])
        .unwrap()
        .expect("Window is full");
    assert_eq!(out.signature, signature(&data));
    assert_eq!(out.log_signature, log_signature(&out.signature));
    assert_eq!(out.curvature, 0.0);
}

/// Test that each output covers exactly the last `window_size` samples.
#[test]
fn test_online_window_contents() {
    let ws = 5;
    let mut processor = PathSig::new()
        .window_size(ws)
        .adapter(Online)
        .build()
        .unwrap();

    let data = samples(20);
    for (i, p) in data.iter().enumerate() {
        if let Some(out) = processor.push(p[0], p[1]).unwrap() {
            assert_eq!(out.signature, signature(&data[i + 1 - ws..=i]));
        } else {
            assert!(i + 1 < ws);
        }
    }
}

/// Test that curvature starts once three window signatures exist.
#[test]
fn test_online_curvature_starts_at_three() {
    let mut processor = PathSig::new()
        .window_size(3)
        .adapter(Online)
        .build()
        .unwrap();

    let data = samples(8);
    let mut curvatures = Vec::new();
    for p in &data {
        if let Some(out) = processor.push(p[0], p[1]).unwrap() {
            curvatures.push(out.curvature);
        }
    }

    assert_eq!(curvatures.len(), 6);
    assert_eq!(curvatures[0], 0.0);
    assert_eq!(curvatures[1], 0.0);
    assert!(curvatures[2] > 0.0);
}

// ============================================================================
// Window Management Tests
// ============================================================================

/// Test that the trajectory is bounded and keeps the most recent windows.
#[test]
fn test_online_trajectory_eviction() {
    let ws = 4;
    let cap = 3;
    let mut processor = PathSig::new()
        .window_size(ws)
        .trajectory_capacity(cap)
        .adapter(Online)
        .build()
        .unwrap();

    let data = samples(15);
    let mut last = None;
    for p in &data {
        last = processor.push(p[0], p[1]).unwrap().or(last);
    }

    assert_eq!(processor.window_len(), ws);
    assert_eq!(processor.trajectory_len(), cap);

    // Windows ending at samples 12, 13 and 14.
    let recent: Vec<[f64; 15]> = (9..12).map(|s| signature(&data[s..s + ws])).collect();
    let out = last.expect("Output after warm-up");
    assert_relative_eq!(out.curvature, curvature(&recent), max_relative = 1e-12);
}

// ============================================================================
// Lifecycle Management Tests
// ============================================================================

/// Test that reset clears all state and the processor can be reused.
#[test]
fn test_online_reset() {
    let mut processor = PathSig::new()
        .window_size(3)
        .adapter(Online)
        .build()
        .unwrap();

    let data = samples(6);
    for p in &data {
        processor.push(p[0], p[1]).unwrap();
    }
    assert_eq!(processor.trajectory_len(), 4);

    processor.reset();
    assert_eq!(processor.window_len(), 0);
    assert_eq!(processor.trajectory_len(), 0);

    assert!(processor.push(0.0, 0.0).unwrap().is_none());
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test builder defaults.
#[test]
fn test_online_builder_defaults() {
    let builder = OnlineSignatureBuilder::<f64>::default();
    assert_eq!(builder.window_size, 16);
    assert_eq!(builder.trajectory_capacity, DEFAULT_TRAJECTORY_CAPACITY);
    assert!(builder.build().is_ok());
}

/// Test that undersized windows are rejected.
#[test]
fn test_online_rejects_small_window() {
    for ws in [0, 1] {
        let err = PathSig::<f64>::new()
            .window_size(ws)
            .adapter(Online)
            .build()
            .unwrap_err();
        assert_eq!(err, SignatureError::InvalidWindowSize { got: ws, min: 2 });
    }
}

/// Test that undersized trajectories are rejected.
#[test]
fn test_online_rejects_small_trajectory() {
    let err = PathSig::<f64>::new()
        .trajectory_capacity(MIN_TRAJECTORY_CAPACITY - 1)
        .adapter(Online)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        SignatureError::InvalidTrajectoryCapacity {
            got: MIN_TRAJECTORY_CAPACITY - 1,
            min: MIN_TRAJECTORY_CAPACITY
        }
    );
}

/// Test that duplicate parameters are rejected.
#[test]
fn test_online_duplicate_parameter() {
    let err = PathSig::<f64>::new()
        .trajectory_capacity(5)
        .trajectory_capacity(6)
        .adapter(Online)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        SignatureError::DuplicateParameter {
            parameter: "trajectory_capacity"
        }
    );
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test that non-finite samples are rejected without touching the window.
#[test]
fn test_online_rejects_non_finite() {
    let mut processor = PathSig::new()
        .window_size(2)
        .adapter(Online)
        .build()
        .unwrap();

    processor.push(0.0, 1.0).unwrap();

    assert!(matches!(
        processor.push(f64::NAN, 1.0),
        Err(SignatureError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        processor.push(1.0, f64::INFINITY),
        Err(SignatureError::InvalidNumericValue(_))
    ));
    assert_eq!(processor.window_len(), 1);

    let out = processor.push(1.0, 3.0).unwrap().expect("Window is full");
    assert_eq!(out.signature[1], 1.0);
    assert_eq!(out.signature[2], 2.0);
}

/// Test the online adapter in single precision.
#[test]
fn test_online_f32() {
    let mut processor = PathSig::<f32>::new()
        .window_size(2)
        .adapter(Online)
        .build()
        .unwrap();

    assert!(processor.push(0.0, 0.0).unwrap().is_none());
    let out = processor.push(1.0, 0.0).unwrap().unwrap();
    assert_eq!(out.log_signature[0], 1.0);
    assert_relative_eq!(out.signature[3], 0.5);
}
