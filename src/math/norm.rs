//! Norms and differences over signature coefficients.
//!
//! ## Purpose
//!
//! This module provides the Euclidean machinery the curvature estimator needs:
//! first differences between consecutive signatures restricted to the
//! non-identity coefficients, and L2 norms of those differences.
//!
//! ## Design notes
//!
//! * **Identity excluded**: The identity coefficient is constant along any
//!   trajectory of genuine signatures, so it is dropped from the velocity.
//! * **Fixed size**: Velocities are `[T; 14]`, matching the log-signature width.
//!
//! ## Invariants
//!
//! * Norms are always non-negative (or NaN if an input is NaN).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::layout::{LOG_SIGNATURE_LEN, Signature};

/// Difference `to - from` over the 14 non-identity coefficients.
#[inline]
pub fn velocity<T: Float>(from: &Signature<T>, to: &Signature<T>) -> [T; LOG_SIGNATURE_LEN] {
    let mut v = [T::zero(); LOG_SIGNATURE_LEN];
    for (k, slot) in v.iter_mut().enumerate() {
        *slot = to[k + 1] - from[k + 1];
    }
    v
}

/// Euclidean norm √(Σ vᵢ²).
#[inline]
pub fn euclidean_norm<T: Float>(v: &[T]) -> T {
    v.iter()
        .map(|&vi| vi * vi)
        .fold(T::zero(), |acc, x| acc + x)
        .sqrt()
}

/// Norm of the difference between two unit directions, `‖b/‖b‖ − a/‖a‖‖`.
///
/// Callers pass the precomputed norms so they can reject near-zero vectors first.
#[inline]
pub fn unit_tangent_gap<T: Float>(a: &[T], norm_a: T, b: &[T], norm_b: T) -> T {
    debug_assert_eq!(a.len(), b.len(), "Vectors must have same dimension");
    a.iter()
        .zip(b.iter())
        .map(|(&ai, &bi)| {
            let d = bi / norm_b - ai / norm_a;
            d * d
        })
        .fold(T::zero(), |acc, x| acc + x)
        .sqrt()
}
