//! Signature accumulation for 2-channel paths.
//!
//! ## Purpose
//!
//! This module computes the level-3 truncated signature of a piecewise-linear
//! path by folding its increments, one at a time, into a running signature.
//!
//! ## Design notes
//!
//! * **Chen's identity**: Each step multiplies the running signature by the
//!   signature of one straight segment. The fused update lives in
//!   [`SignatureLinalg::chen_step`].
//! * **Always defined**: The identity element is written before anything
//!   else, so paths with fewer than two samples yield `(1, 0, ..., 0)`.
//! * **Stateless**: Each call starts from the identity; nothing is cached.
//!
//! ## Invariants
//!
//! * `signature(path)[0] == 1` for every path.
//! * Translating every sample by a constant leaves the signature unchanged.
//!
//! ## Non-goals
//!
//! * This module does not handle NaN/Inf specially (they propagate).

// Internal dependencies
use crate::algorithms::specialized::SignatureLinalg;
use crate::math::tensor::identity;
use crate::primitives::layout::{Sample, Signature};

/// Increment `b − a` between two consecutive samples.
#[inline]
pub fn increment<T: SignatureLinalg>(a: &Sample<T>, b: &Sample<T>) -> Sample<T> {
    [b[0] - a[0], b[1] - a[1]]
}

/// Level-3 signature of `path`.
///
/// Returns the identity element when `path` has fewer than two samples.
pub fn signature<T: SignatureLinalg>(path: &[Sample<T>]) -> Signature<T> {
    extend_signature(&identity(), path)
}

/// Continue `prefix` with the increments of `path`.
///
/// `prefix` is typically the signature of a path that ends at `path[0]`; the
/// result is then the signature of the concatenation.
pub fn extend_signature<T: SignatureLinalg>(
    prefix: &Signature<T>,
    path: &[Sample<T>],
) -> Signature<T> {
    let mut sig = *prefix;
    if path.len() < 2 {
        return sig;
    }

    for pair in path.windows(2) {
        let dx = increment(&pair[0], &pair[1]);
        sig = T::chen_step(&sig, dx);
    }
    sig
}
