//! Specialized Kernel Implementations
//!
//! ## Purpose
//!
//! This module provides the concrete implementations of the `SignatureLinalg` trait for `f32` (standard precision) and `f64` (double precision) types.

// Modular dependencies
use super::SignatureLinalg;
use super::accumulators::{
    accumulate_scalar, accumulate_simd, chen_step_scalar, chen_step_simd, project_log_scalar,
    project_log_simd, scale_down_scalar, scale_down_simd,
};

// Internal dependencies
use crate::primitives::layout::{LogSignature, Sample, Signature};

impl SignatureLinalg for f64 {
    #[inline]
    fn chen_step(prev: &Signature<f64>, dx: Sample<f64>) -> Signature<f64> {
        chen_step_simd(prev, dx)
    }

    #[inline]
    fn project_log(sig: &Signature<f64>) -> LogSignature<f64> {
        project_log_simd(sig)
    }

    #[inline]
    fn accumulate(acc: &mut Signature<f64>, sig: &Signature<f64>) {
        accumulate_simd(acc, sig)
    }

    #[inline]
    fn scale_down(acc: &mut Signature<f64>, divisor: f64) {
        scale_down_simd(acc, divisor)
    }
}

impl SignatureLinalg for f32 {
    #[inline]
    fn chen_step(prev: &Signature<f32>, dx: Sample<f32>) -> Signature<f32> {
        chen_step_scalar(prev, dx)
    }

    #[inline]
    fn project_log(sig: &Signature<f32>) -> LogSignature<f32> {
        project_log_scalar(sig)
    }

    #[inline]
    fn accumulate(acc: &mut Signature<f32>, sig: &Signature<f32>) {
        accumulate_scalar(acc, sig)
    }

    #[inline]
    fn scale_down(acc: &mut Signature<f32>, divisor: f32) {
        scale_down_scalar(acc, divisor)
    }
}
