#![cfg(feature = "dev")]
//! Tests for the truncated tensor algebra.
//!
//! ## Test Organization
//!
//! 1. **Identity** - Neutral element of the product
//! 2. **Product** - Associativity and segment composition
//! 3. **Inverse** - Group inverse and path reversal

use approx::assert_relative_eq;

use pathsig_rs::internals::algorithms::signature::signature;
use pathsig_rs::internals::math::tensor::{identity, inverse, segment_signature, tensor_product};

fn assert_close(a: &[f64], b: &[f64]) {
    for (x, y) in a.iter().zip(b.iter()) {
        assert_relative_eq!(*x, *y, epsilon = 1e-12, max_relative = 1e-9);
    }
}

fn zigzag(n: usize) -> Vec<[f64; 2]> {
    (0..n)
        .map(|i| [i as f64 * 0.5, if i % 2 == 0 { 0.0 } else { 1.0 }])
        .collect()
}

// ============================================================================
// Identity Tests
// ============================================================================

/// Test the identity layout.
#[test]
fn test_identity_layout() {
    let id = identity::<f64>();
    assert_eq!(id[0], 1.0);
    assert!(id[1..].iter().all(|&c| c == 0.0));
}

/// Test that the identity is neutral on both sides.
#[test]
fn test_identity_is_neutral() {
    let sig = signature(&zigzag(7));
    assert_eq!(tensor_product(&identity(), &sig), sig);
    assert_eq!(tensor_product(&sig, &identity()), sig);
}

// ============================================================================
// Product Tests
// ============================================================================

/// Test associativity of the truncated product.
#[test]
fn test_product_is_associative() {
    let a = segment_signature([1.0, 0.5]);
    let b = segment_signature([-0.25, 2.0]);
    let c = segment_signature([0.75, -1.0]);

    let left = tensor_product(&tensor_product(&a, &b), &c);
    let right = tensor_product(&a, &tensor_product(&b, &c));
    assert_close(&left, &right);
}

/// Test that a product of segments equals the signature of the polyline.
#[test]
fn test_segments_compose_to_polyline() {
    let path = zigzag(6);
    let mut acc = identity();
    for pair in path.windows(2) {
        let dx = [pair[1][0] - pair[0][0], pair[1][1] - pair[0][1]];
        acc = tensor_product(&acc, &segment_signature(dx));
    }
    assert_close(&acc, &signature(&path));
}

/// Test that collinear segments compose to one segment.
#[test]
fn test_collinear_segments_merge() {
    let a = segment_signature([1.0, 2.0]);
    let b = segment_signature([2.0, 4.0]);
    assert_close(&tensor_product(&a, &b), &segment_signature([3.0, 6.0]));
}

/// Test that the product is not commutative for non-parallel segments.
#[test]
fn test_product_is_not_commutative() {
    let a = segment_signature([1.0, 0.0]);
    let b = segment_signature([0.0, 1.0]);
    let ab = tensor_product(&a, &b);
    let ba = tensor_product(&b, &a);
    assert_ne!(ab[4], ba[4]);
}

// ============================================================================
// Inverse Tests
// ============================================================================

/// Test that the inverse cancels on both sides.
#[test]
fn test_inverse_cancels() {
    let sig = signature(&zigzag(9));
    let inv = inverse(&sig);

    assert_close(&tensor_product(&sig, &inv), &identity());
    assert_close(&tensor_product(&inv, &sig), &identity());
}

/// Test that the inverse is the signature of the reversed path.
#[test]
fn test_inverse_is_reversed_path() {
    let path = zigzag(8);
    let reversed: Vec<[f64; 2]> = path.iter().rev().copied().collect();
    assert_close(&inverse(&signature(&path)), &signature(&reversed));
}

/// Test that the inverse of a segment is the opposite segment.
#[test]
fn test_inverse_of_segment() {
    let dx = [0.8, -1.3];
    assert_close(&inverse(&segment_signature(dx)), &segment_signature([-dx[0], -dx[1]]));
}
