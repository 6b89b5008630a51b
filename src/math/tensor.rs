//! Truncated tensor algebra for level-3, 2-channel signatures.
//!
//! ## Purpose
//!
//! This module implements the group structure that signatures live in: the
//! identity element, the signature of a single straight-line increment, and the
//! truncated tensor product that combines two signatures (Chen's identity).
//!
//! ## Design notes
//!
//! * **Fixed size**: All operations work on `[T; 15]` arrays; nothing allocates.
//! * **Reference formulation**: These are the plain scalar formulas. The
//!   accumulator's fused update must agree with
//!   `tensor_product(prev, segment_signature(dx))` to rounding.
//!
//! ## Key concepts
//!
//! For `c = a ⊗ b` truncated at level 3:
//!
//! ```text
//! c        = a b
//! c_i      = a_i b + a b_i
//! c_ij     = a_ij b + a_i b_j + a b_ij
//! c_ijk    = a_ijk b + a_ij b_k + a_i b_jk + a b_ijk
//! ```
//!
//! where the bare `a`, `b` denote identity coefficients.
//!
//! ## Non-goals
//!
//! * This module does not support other truncation levels or channel counts.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::layout::{CHANNELS, SIGNATURE_LEN, Signature, level1, level2, level3};

/// The group identity `(1, 0, ..., 0)`.
#[inline]
pub fn identity<T: Float>() -> Signature<T> {
    let mut sig = [T::zero(); SIGNATURE_LEN];
    sig[0] = T::one();
    sig
}

/// Signature of a straight segment with increment `dx`: the truncated
/// exponential `(1, dx, dx⊗dx / 2, dx⊗dx⊗dx / 6)`.
pub fn segment_signature<T: Float>(dx: [T; CHANNELS]) -> Signature<T> {
    let half = T::from(0.5).unwrap();
    let sixth = T::one() / T::from(6.0).unwrap();

    let mut sig = identity();
    for i in 0..CHANNELS {
        sig[level1(i)] = dx[i];
        for j in 0..CHANNELS {
            sig[level2(i, j)] = half * dx[i] * dx[j];
            for k in 0..CHANNELS {
                sig[level3(i, j, k)] = sixth * dx[i] * dx[j] * dx[k];
            }
        }
    }
    sig
}

/// Truncated tensor product `a ⊗ b`.
pub fn tensor_product<T: Float>(a: &Signature<T>, b: &Signature<T>) -> Signature<T> {
    let (a0, b0) = (a[0], b[0]);
    let mut out = [T::zero(); SIGNATURE_LEN];
    out[0] = a0 * b0;

    for i in 0..CHANNELS {
        let (ai, bi) = (a[level1(i)], b[level1(i)]);
        out[level1(i)] = ai * b0 + a0 * bi;

        for j in 0..CHANNELS {
            let aij = a[level2(i, j)];
            out[level2(i, j)] = aij * b0 + ai * b[level1(j)] + a0 * b[level2(i, j)];

            for k in 0..CHANNELS {
                out[level3(i, j, k)] = a[level3(i, j, k)] * b0
                    + aij * b[level1(k)]
                    + ai * b[level2(j, k)]
                    + a0 * b[level3(i, j, k)];
            }
        }
    }
    out
}

/// Signature of the time-reversed path, i.e. the group inverse truncated at level 3.
///
/// For a group-like `a` with identity coefficient 1:
///
/// ```text
/// inv_i   = -a_i
/// inv_ij  = -a_ij + a_i a_j
/// inv_ijk = -a_ijk + a_ij a_k + a_i a_jk - a_i a_j a_k
/// ```
pub fn inverse<T: Float>(a: &Signature<T>) -> Signature<T> {
    let mut out = identity();
    for i in 0..CHANNELS {
        let ai = a[level1(i)];
        out[level1(i)] = -ai;

        for j in 0..CHANNELS {
            let aj = a[level1(j)];
            out[level2(i, j)] = ai * aj - a[level2(i, j)];

            for k in 0..CHANNELS {
                let ak = a[level1(k)];
                out[level3(i, j, k)] = a[level2(i, j)] * ak + ai * a[level2(j, k)]
                    - ai * aj * ak
                    - a[level3(i, j, k)];
            }
        }
    }
    out
}
