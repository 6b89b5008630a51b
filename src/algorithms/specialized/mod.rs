//! Specialized Kernels
//!
//! ## Purpose
//!
//! This module provides the per-precision kernels behind the signature
//! algorithms: the fused Chen update, the log-signature projection, and the
//! coefficient-wise accumulation used when averaging windows. `f64` runs on
//! 2-wide SIMD lanes; `f32` uses the scalar formulation.

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::primitives::layout::{LogSignature, Sample, Signature};

/// Scalar and SIMD kernels.
pub mod accumulators;

/// Implementations of `SignatureLinalg` for `f32` and `f64`.
pub mod impls;

// ============================================================================
// Signature Kernel Trait
// ============================================================================

/// Precision-specific kernels for level-3, 2-channel signatures.
///
/// Implementations must agree with the scalar formulas in
/// [`accumulators`] up to reordering of floating-point additions.
pub trait SignatureLinalg: Float + Debug + Send + Sync + 'static {
    /// Extend `prev` by one straight-line increment `dx` (Chen's identity).
    ///
    /// Returns a fresh coefficient set; `prev` is only read.
    fn chen_step(prev: &Signature<Self>, dx: Sample<Self>) -> Signature<Self>;

    /// Project a signature onto its 14 log-signature coordinates.
    fn project_log(sig: &Signature<Self>) -> LogSignature<Self>;

    /// Add `sig` into `acc` coefficient-wise.
    fn accumulate(acc: &mut Signature<Self>, sig: &Signature<Self>);

    /// Divide every coefficient of `acc` by `divisor`.
    fn scale_down(acc: &mut Signature<Self>, divisor: Self);
}
