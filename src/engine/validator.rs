//! Input validation for signature configuration and buffers.
//!
//! ## Purpose
//!
//! This module provides the validation functions that stand between callers
//! and the pure kernels. They check declared element counts against the
//! buffers actually provided, builder parameters, and online samples.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Bounds by construction**: A declared count larger than its buffer is
//!   rejected, so kernels only ever see correctly sized slices.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Declared counts**: `num_points` / `num_sigs` may be smaller than the
//!   buffer (a prefix is used) but never larger.
//! * **Degenerate sizes are valid**: Short paths, undersized windows and short
//!   trajectories have defined fallbacks and are not errors.
//!
//! ## Non-goals
//!
//! * This module does not reject NaN/Inf in batch inputs (they propagate).
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SignatureError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for signature configuration and input buffers.
///
/// Provides static methods returning `Result<(), SignatureError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Buffer Validation
    // ========================================================================

    /// Validate that `declared` elements fit in a buffer of `available`.
    pub fn validate_declared_len(declared: usize, available: usize) -> Result<(), SignatureError> {
        if declared > available {
            return Err(SignatureError::LengthMismatch {
                declared,
                available,
            });
        }
        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), SignatureError> {
        if !val.is_finite() {
            return Err(SignatureError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the window size of a sliding-window processor.
    pub fn validate_window_size(window_size: usize, min: usize) -> Result<(), SignatureError> {
        if window_size < min {
            return Err(SignatureError::InvalidWindowSize {
                got: window_size,
                min,
            });
        }
        Ok(())
    }

    /// Validate the number of signatures retained for curvature estimation.
    pub fn validate_trajectory_capacity(
        capacity: usize,
        min: usize,
    ) -> Result<(), SignatureError> {
        if capacity < min {
            return Err(SignatureError::InvalidTrajectoryCapacity { got: capacity, min });
        }
        Ok(())
    }

    /// Validate that parallel execution is compiled in when requested.
    pub fn validate_parallel(parallel: bool, adapter: &'static str) -> Result<(), SignatureError> {
        if parallel && !cfg!(feature = "parallel") {
            return Err(SignatureError::UnsupportedFeature {
                adapter,
                feature: "parallel",
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SignatureError> {
        if let Some(param) = duplicate_param {
            return Err(SignatureError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
