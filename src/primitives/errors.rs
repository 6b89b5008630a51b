//! Error types for signature operations.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by the fallible parts of
//! the crate. The numerical kernels themselves are total: degenerate sizes are
//! handled by explicit fallbacks, so every variant here describes caller
//! misuse (a declared count larger than the buffer behind it, a non-finite
//! online sample) or an invalid builder configuration.
//!
//! ## Design notes
//!
//! * **no_std**: `Display` is implemented by hand; `std::error::Error` is only
//!   implemented when the `std` feature is enabled.
//! * **Comparable**: Errors derive `Clone` and `PartialEq` so tests can match
//!   on exact values.
//!
//! ## Non-goals
//!
//! * Batch paths are not scanned for NaN/Inf; they propagate through the
//!   kernels untouched.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

// ============================================================================
// Signature Error
// ============================================================================

/// Errors returned by signature operations and builders.
#[derive(Debug, Clone, PartialEq)]
pub enum SignatureError {
    /// A declared element count exceeds the length of the buffer it describes.
    LengthMismatch {
        /// Count declared by the caller (`num_points` or `num_sigs`).
        declared: usize,
        /// Number of elements actually available in the buffer.
        available: usize,
    },

    /// Window size below the minimum required by the adapter.
    InvalidWindowSize {
        /// Provided window size.
        got: usize,
        /// Minimum accepted window size.
        min: usize,
    },

    /// Trajectory capacity below the minimum needed for a curvature estimate.
    InvalidTrajectoryCapacity {
        /// Provided capacity.
        got: usize,
        /// Minimum accepted capacity.
        min: usize,
    },

    /// A non-finite sample was supplied where finite values are required.
    InvalidNumericValue(String),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },

    /// The selected adapter or build does not support the requested feature.
    UnsupportedFeature {
        /// Adapter name.
        adapter: &'static str,
        /// Feature name.
        feature: &'static str,
    },
}

impl fmt::Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                declared,
                available,
            } => write!(
                f,
                "Length mismatch: declared {} elements, buffer holds {}",
                declared, available
            ),
            Self::InvalidWindowSize { got, min } => {
                write!(f, "Invalid window_size: {} (must be at least {})", got, min)
            }
            Self::InvalidTrajectoryCapacity { got, min } => write!(
                f,
                "Invalid trajectory_capacity: {} (must be at least {})",
                got, min
            ),
            Self::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
            Self::UnsupportedFeature { adapter, feature } => {
                write!(f, "Adapter '{}' does not support feature: {}", adapter, feature)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SignatureError {}
