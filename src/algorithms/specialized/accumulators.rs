//! Specialized Accumulators
//!
//! ## Purpose
//!
//! This module provides scalar and SIMD versions of the signature inner loops:
//! the Chen update for one path increment, the closed-form log projection, and
//! the window accumulation helpers.
//!
//! ## Design notes
//!
//! * **Double buffering**: Every kernel reads the previous coefficient set and
//!   writes a separate output array, so higher levels never observe partially
//!   updated lower levels.
//! * **Lanes**: SIMD kernels pack the last index `k` of a word into the two
//!   lanes of an `f64x2`, so each row `(i, j, *)` is one vector operation.

// External dependencies
use num_traits::Float;
use wide::f64x2;

// Internal dependencies
use crate::primitives::layout::{
    CHANNELS, LEVEL1_OFFSET, LOG_SIGNATURE_LEN, LogSignature, SIGNATURE_LEN, Sample, Signature,
    level1, level2, level3, log_index,
};

const INV3: f64 = 1.0 / 3.0;
const INV6: f64 = 1.0 / 6.0;

#[inline(always)]
fn load(v: &[f64], k: usize) -> f64x2 {
    f64x2::new([v[k], v[k + 1]])
}

#[inline(always)]
fn store(out: &mut [f64], k: usize, v: f64x2) {
    let [a, b] = v.to_array();
    out[k] = a;
    out[k + 1] = b;
}

// ============================================================================
// Chen Update
// ============================================================================

/// Extend a signature by one straight increment (Scalar).
///
/// ```text
/// S_i   += dx_i
/// S_ij  += S_i dx_j + ½ dx_i dx_j
/// S_ijk += S_ij dx_k + S_i (½ dx_j dx_k) + ⅙ dx_i dx_j dx_k
/// ```
///
/// All right-hand sides use the coefficients of `prev`.
pub fn chen_step_scalar<T: Float>(prev: &Signature<T>, dx: Sample<T>) -> Signature<T> {
    let half = T::from(0.5).unwrap();
    let sixth = T::from(INV6).unwrap();

    let mut seg2 = [[T::zero(); CHANNELS]; CHANNELS];
    for i in 0..CHANNELS {
        for j in 0..CHANNELS {
            seg2[i][j] = half * dx[i] * dx[j];
        }
    }

    let mut next = *prev;
    for i in 0..CHANNELS {
        let p_i = prev[level1(i)];
        next[level1(i)] = p_i + dx[i];

        for j in 0..CHANNELS {
            let p_ij = prev[level2(i, j)];
            next[level2(i, j)] = p_ij + p_i * dx[j] + seg2[i][j];

            for k in 0..CHANNELS {
                let w = level3(i, j, k);
                next[w] = prev[w]
                    + p_ij * dx[k]
                    + p_i * seg2[j][k]
                    + dx[i] * dx[j] * dx[k] * sixth;
            }
        }
    }
    next
}

/// Extend a signature by one straight increment using SIMD.
pub fn chen_step_simd(prev: &Signature<f64>, dx: Sample<f64>) -> Signature<f64> {
    let mut next = [0.0; SIGNATURE_LEN];
    next[0] = prev[0];

    let v_dx = f64x2::new(dx);

    // Level 1
    store(&mut next, LEVEL1_OFFSET, load(prev, LEVEL1_OFFSET) + v_dx);

    // Segment level 2, row j: {½ dx_j dx_0, ½ dx_j dx_1}
    let seg2 = [
        f64x2::splat(0.5 * dx[0]) * v_dx,
        f64x2::splat(0.5 * dx[1]) * v_dx,
    ];

    // Level 2
    for i in 0..CHANNELS {
        let row = level2(i, 0);
        let upd = f64x2::splat(prev[level1(i)]) * v_dx + seg2[i];
        store(&mut next, row, load(prev, row) + upd);
    }

    // Level 3
    for i in 0..CHANNELS {
        let p_i = f64x2::splat(prev[level1(i)]);
        for j in 0..CHANNELS {
            let row = level3(i, j, 0);
            let seg3 = f64x2::splat(dx[i] * dx[j] * INV6) * v_dx;
            let upd = f64x2::splat(prev[level2(i, j)]) * v_dx + (p_i * seg2[j] + seg3);
            store(&mut next, row, load(prev, row) + upd);
        }
    }

    next
}

// ============================================================================
// Log Projection
// ============================================================================

/// Closed-form level-3 log projection (Scalar).
///
/// ```text
/// l_i   = S_i
/// l_ij  = S_ij − ½ S_i S_j
/// l_ijk = S_ijk − ½ (S_i S_jk + S_ij S_k) + ⅓ S_i S_j S_k
/// ```
pub fn project_log_scalar<T: Float>(sig: &Signature<T>) -> LogSignature<T> {
    let half = T::from(0.5).unwrap();
    let third = T::from(INV3).unwrap();
    let s1 = [sig[level1(0)], sig[level1(1)]];

    let mut out = [T::zero(); LOG_SIGNATURE_LEN];
    for i in 0..CHANNELS {
        out[log_index(level1(i))] = s1[i];

        for j in 0..CHANNELS {
            let w2 = level2(i, j);
            out[log_index(w2)] = sig[w2] - half * (s1[i] * s1[j]);

            for k in 0..CHANNELS {
                let w3 = level3(i, j, k);
                out[log_index(w3)] = sig[w3]
                    - half * (s1[i] * sig[level2(j, k)] + sig[w2] * s1[k])
                    + third * s1[i] * s1[j] * s1[k];
            }
        }
    }
    out
}

/// Closed-form level-3 log projection using SIMD.
pub fn project_log_simd(sig: &Signature<f64>) -> LogSignature<f64> {
    let s1 = [sig[level1(0)], sig[level1(1)]];
    let v_s1 = f64x2::new(s1);
    let v_half = f64x2::splat(0.5);

    let mut out = [0.0; LOG_SIGNATURE_LEN];
    out[log_index(level1(0))] = s1[0];
    out[log_index(level1(1))] = s1[1];

    // Level 2, row i: S_i* − ½ S_i S_*
    for i in 0..CHANNELS {
        let row = level2(i, 0);
        let s1s1 = f64x2::splat(s1[i]) * v_s1;
        store(&mut out, log_index(row), load(sig, row) - v_half * s1s1);
    }

    // Level 3, row (i, j): lanes over k
    for i in 0..CHANNELS {
        for j in 0..CHANNELS {
            let row = level3(i, j, 0);
            let inner = f64x2::splat(s1[i]) * load(sig, level2(j, 0))
                + f64x2::splat(sig[level2(i, j)]) * v_s1;
            let cubic = f64x2::splat(INV3 * s1[i] * s1[j]) * v_s1;
            store(
                &mut out,
                log_index(row),
                load(sig, row) - v_half * inner + cubic,
            );
        }
    }

    out
}

// ============================================================================
// Window Accumulation
// ============================================================================

/// Coefficient-wise `acc += sig` (Scalar).
#[inline]
pub fn accumulate_scalar<T: Float>(acc: &mut Signature<T>, sig: &Signature<T>) {
    for (a, &s) in acc.iter_mut().zip(sig.iter()) {
        *a = *a + s;
    }
}

/// Coefficient-wise `acc += sig` using SIMD.
#[inline]
pub fn accumulate_simd(acc: &mut Signature<f64>, sig: &Signature<f64>) {
    let mut k = 0;
    while k + 2 <= SIGNATURE_LEN {
        let v = load(acc, k) + load(sig, k);
        store(acc, k, v);
        k += 2;
    }

    // Tail
    for t in k..SIGNATURE_LEN {
        acc[t] += sig[t];
    }
}

/// Coefficient-wise `acc /= divisor` (Scalar).
#[inline]
pub fn scale_down_scalar<T: Float>(acc: &mut Signature<T>, divisor: T) {
    for a in acc.iter_mut() {
        *a = *a / divisor;
    }
}

/// Coefficient-wise `acc /= divisor` using SIMD.
#[inline]
pub fn scale_down_simd(acc: &mut Signature<f64>, divisor: f64) {
    let v_div = f64x2::splat(divisor);
    let mut k = 0;
    while k + 2 <= SIGNATURE_LEN {
        let v = load(acc, k) / v_div;
        store(acc, k, v);
        k += 2;
    }

    // Tail
    for t in k..SIGNATURE_LEN {
        acc[t] /= divisor;
    }
}
