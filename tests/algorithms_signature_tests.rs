#![cfg(feature = "dev")]
//! Tests for signature accumulation.
//!
//! ## Test Organization
//!
//! 1. **Chen Step** - Scalar vs SIMD kernels, agreement with the tensor product
//! 2. **Concatenation** - Splitting a path and recombining
//! 3. **Precision** - f32 against f64

use approx::assert_relative_eq;

use pathsig_rs::internals::algorithms::signature::{extend_signature, increment, signature};
use pathsig_rs::internals::algorithms::specialized::accumulators::{
    chen_step_scalar, chen_step_simd,
};
use pathsig_rs::internals::math::tensor::{identity, segment_signature, tensor_product};

fn assert_close(a: &[f64], b: &[f64], tol: f64) {
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_relative_eq!(*x, *y, epsilon = 1e-12, max_relative = tol);
    }
}

fn spiral(n: usize) -> Vec<[f64; 2]> {
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.07;
            [t.cos() * (1.0 + t), t.sin() * (1.0 + t)]
        })
        .collect()
}

// ============================================================================
// Chen Step Tests
// ============================================================================

/// Test that the SIMD kernel agrees with the scalar kernel.
#[test]
fn test_chen_step_simd_matches_scalar() {
    let path = spiral(50);
    let mut scalar = identity::<f64>();
    let mut simd = identity::<f64>();

    for pair in path.windows(2) {
        let dx = increment(&pair[0], &pair[1]);
        scalar = chen_step_scalar(&scalar, dx);
        simd = chen_step_simd(&simd, dx);
    }

    assert_close(&scalar, &simd, 1e-12);
}

/// Test that one Chen step equals the product with a segment signature.
#[test]
fn test_chen_step_is_tensor_product_with_segment() {
    let prefix = signature(&spiral(9));
    let dx = [0.3, -1.7];

    let stepped = chen_step_scalar(&prefix, dx);
    let product = tensor_product(&prefix, &segment_signature(dx));

    assert_close(&stepped, &product, 1e-12);
}

/// Test that one step from the identity is the segment signature.
#[test]
fn test_single_step_from_identity() {
    let dx = [1.25, -0.5];
    let sig = chen_step_simd(&identity(), dx);
    assert_close(&sig, &segment_signature(dx), 1e-15);
}

/// Test that the identity coefficient is carried unchanged.
#[test]
fn test_identity_coefficient_carried() {
    let sig = signature(&spiral(30));
    assert_eq!(sig[0], 1.0);
}

// ============================================================================
// Concatenation Tests
// ============================================================================

/// Test that splitting at any interior point and recombining reproduces the whole.
#[test]
fn test_split_and_tensor_product() {
    let path = spiral(40);
    let whole = signature(&path);

    for split in [1, 7, 20, 38] {
        let head = signature(&path[..=split]);
        let tail = signature(&path[split..]);
        let combined = tensor_product(&head, &tail);
        assert_close(&combined, &whole, 1e-9);
    }
}

/// Test that extending a prefix signature reproduces the whole.
#[test]
fn test_extend_signature_continues_prefix() {
    let path = spiral(40);
    let whole = signature(&path);

    let head = signature(&path[..=15]);
    let extended = extend_signature(&head, &path[15..]);
    assert_close(&extended, &whole, 1e-9);
}

/// Test that extending with fewer than two points leaves the prefix unchanged.
#[test]
fn test_extend_with_short_path() {
    let head = signature(&spiral(5));
    assert_eq!(extend_signature(&head, &[]), head);
    assert_eq!(extend_signature(&head, &[[4.0, 4.0]]), head);
}

// ============================================================================
// Precision Tests
// ============================================================================

/// Test that single precision tracks double precision.
#[test]
fn test_f32_tracks_f64() {
    let path = spiral(20);
    let path32: Vec<[f32; 2]> = path.iter().map(|p| [p[0] as f32, p[1] as f32]).collect();

    let sig64 = signature(&path);
    let sig32 = signature(&path32);

    for (a, b) in sig64.iter().zip(sig32.iter()) {
        assert_relative_eq!(*a, *b as f64, epsilon = 1e-3, max_relative = 1e-3);
    }
}

/// Test that NaN samples propagate.
#[test]
fn test_nan_propagates() {
    let path = [[0.0, 0.0], [f64::NAN, 1.0], [2.0, 2.0]];
    let sig = signature(&path);
    assert_eq!(sig[0], 1.0);
    assert!(sig[1].is_nan());
}
