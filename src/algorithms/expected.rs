//! Windowed expected signatures.
//!
//! ## Purpose
//!
//! This module averages level-3 signatures over every contiguous sub-path of a
//! fixed length, and exposes the per-window signatures themselves as a
//! trajectory that the curvature estimator can consume.
//!
//! ## Design notes
//!
//! * **Independent windows**: Each window's signature is recomputed from
//!   scratch, so cost is `O(num_windows · window_size)`. Overlapping windows
//!   share no work.
//! * **Fallback**: When `window_size < 2` or the path is shorter than one
//!   window, the result degrades to the signature of the whole path.
//! * **Ordered reduction**: Window signatures are always summed in window
//!   order, so a parallel producer that collects before reducing gives
//!   bit-identical results.
//!
//! ## Invariants
//!
//! * With exactly one window the expected signature equals that window's signature.
//! * `rolling_signatures` returns `num_windows` entries outside the fallback, one otherwise.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::signature::signature;
use crate::algorithms::specialized::SignatureLinalg;
use crate::primitives::layout::{SIGNATURE_LEN, Sample, Signature};

/// Smallest window that contains at least one increment.
pub const MIN_WINDOW_SIZE: usize = 2;

/// Number of full windows of `window_size` points in a path of `num_points`,
/// or `None` when the windowed computation falls back to the whole path.
#[inline]
pub fn num_windows(num_points: usize, window_size: usize) -> Option<usize> {
    if window_size < MIN_WINDOW_SIZE || num_points < window_size {
        None
    } else {
        Some(num_points - window_size + 1)
    }
}

/// Arithmetic mean of `signatures`, summed in slice order.
///
/// Returns all zeros for an empty slice.
pub fn mean_signature<T: SignatureLinalg>(signatures: &[Signature<T>]) -> Signature<T> {
    let mut acc = [T::zero(); SIGNATURE_LEN];
    if signatures.is_empty() {
        return acc;
    }

    for sig in signatures {
        T::accumulate(&mut acc, sig);
    }
    T::scale_down(&mut acc, T::from(signatures.len()).unwrap());
    acc
}

/// Mean signature over every window of `window_size` consecutive samples.
pub fn expected_signature<T: SignatureLinalg>(
    path: &[Sample<T>],
    window_size: usize,
) -> Signature<T> {
    let Some(count) = num_windows(path.len(), window_size) else {
        return signature(path);
    };

    let mut acc = [T::zero(); SIGNATURE_LEN];
    for window in path.windows(window_size) {
        T::accumulate(&mut acc, &signature(window));
    }
    T::scale_down(&mut acc, T::from(count).unwrap());
    acc
}

/// Signature of every window of `window_size` consecutive samples, in order.
///
/// Falls back to a single whole-path signature under the same conditions as
/// [`expected_signature`].
pub fn rolling_signatures<T: SignatureLinalg>(
    path: &[Sample<T>],
    window_size: usize,
) -> Vec<Signature<T>> {
    if num_windows(path.len(), window_size).is_none() {
        return vec![signature(path)];
    }

    path.windows(window_size).map(signature).collect()
}
