//! Log-signature projection.
//!
//! ## Purpose
//!
//! This module maps a finished level-3 signature to its 14 coordinates in the
//! free Lie algebra using a fixed closed-form projection:
//!
//! ```text
//! l_i   = S_i
//! l_ij  = S_ij − ½ S_i S_j
//! l_ijk = S_ijk − ½ (S_i S_jk + S_ij S_k) + ⅓ S_i S_j S_k
//! ```
//!
//! The level-2 and level-3 terms read the *signature* coefficients, not
//! previously projected log coefficients.
//!
//! ## Non-goals
//!
//! * This is not a general tensor logarithm and does not extend to other
//!   truncation levels.
//! * The identity coefficient is ignored.

// Internal dependencies
use crate::algorithms::specialized::SignatureLinalg;
use crate::primitives::layout::{LogSignature, Signature};

/// Log-signature of a level-3 signature.
#[inline]
pub fn log_signature<T: SignatureLinalg>(sig: &Signature<T>) -> LogSignature<T> {
    T::project_log(sig)
}
