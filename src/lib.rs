//! # pathsig — Level-3 Path Signatures for Rust
//!
//! Fast, allocation-light path signatures for two-channel `(time, value)`
//! series, with the derived features used to summarize and compare the shape
//! of a time series.
//!
//! ## What is a path signature?
//!
//! The signature of a path is the sequence of its iterated integrals. Truncated
//! at level 3 over two channels it is a fixed vector of 15 numbers:
//!
//! | Index   | Level | Meaning                                   |
//! |---------|-------|-------------------------------------------|
//! | `0`     | 0     | Identity coefficient, always `1`          |
//! | `1..3`  | 1     | Total increment per channel               |
//! | `3..7`  | 2     | Pairwise iterated integrals (row-major)   |
//! | `7..15` | 3     | Triple iterated integrals (row-major)     |
//!
//! Signatures depend only on increments (they are translation invariant) and
//! compose by Chen's identity: the signature of a concatenated path is the
//! truncated tensor product of the signatures of its pieces.
//!
//! **What this crate computes:**
//! - The signature of a path (step-by-step Chen update)
//! - The log-signature, a 14-coefficient closed-form projection onto the free Lie algebra
//! - The expected signature, the mean signature over all sliding windows
//! - The curvature of a trajectory of signatures, a proxy for regime-change speed
//!
//! ## Quick Start
//!
//! ### Flat functions
//!
//! ```rust
//! use pathsig_rs::prelude::*;
//!
//! // A straight step of one unit along the time channel.
//! let path: [[f64; 2]; 2] = [[0.0, 0.0], [1.0, 0.0]];
//!
//! let sig = compute_signature(&path, path.len())?;
//! assert_eq!(sig[0], 1.0);
//! assert_eq!(sig[1], 1.0);
//! assert_eq!(sig[3], 0.5);
//!
//! // A straight line carries no Lie-bracket content.
//! let log = compute_log_signature(&sig);
//! assert_eq!(log[0], 1.0);
//! assert!(log[2..].iter().all(|c| c.abs() < 1e-12));
//! # Result::<(), SignatureError>::Ok(())
//! ```
//!
//! ### Batch processing
//!
//! ```rust
//! use pathsig_rs::prelude::*;
//!
//! let path: Vec<[f64; 2]> = (0..64)
//!     .map(|i| {
//!         let t = i as f64 * 0.1;
//!         [t, t.sin()]
//!     })
//!     .collect();
//!
//! let model = PathSig::new()
//!     .window_size(16)
//!     .adapter(Batch)
//!     .build()?;
//!
//! let expected = model.expected_signature(&path, path.len())?;
//! let trajectory = model.trajectory(&path, path.len())?;
//! let kappa = model.curvature(&path, path.len())?;
//!
//! assert_eq!(expected[0], 1.0);
//! assert_eq!(trajectory.len(), 64 - 16 + 1);
//! assert!(kappa >= 0.0);
//! # Result::<(), SignatureError>::Ok(())
//! ```
//!
//! ### Online processing
//!
//! ```rust
//! use pathsig_rs::prelude::*;
//!
//! let mut online = PathSig::<f64>::new()
//!     .window_size(4)
//!     .trajectory_capacity(8)
//!     .adapter(Online)
//!     .build()?;
//!
//! for i in 0..10 {
//!     let t = i as f64;
//!     if let Some(out) = online.push(t, (0.5 * t).cos())? {
//!         assert_eq!(out.signature[0], 1.0);
//!     }
//! }
//! assert_eq!(online.window_len(), 4);
//! # Result::<(), SignatureError>::Ok(())
//! ```
//!
//! ## Degenerate inputs
//!
//! Every operation is total over its input shapes:
//!
//! - Paths with fewer than two points have the identity signature.
//! - A window larger than the path (or smaller than two) falls back to the
//!   whole-path signature.
//! - Fewer than three signatures have zero curvature.
//!
//! The only error from the flat functions is a declared element count larger
//! than the buffer provided ([`SignatureError::LengthMismatch`]).
//!
//! ## Observation
//!
//! Processors report every operation to a [`SignatureObserver`](prelude::SignatureObserver).
//! With the `trace` feature, `ChromeTraceRecorder` records the events in the
//! Chrome trace-event format.
//!
//! ## Features
//!
//! | Feature    | Default | Description                                        |
//! |------------|---------|----------------------------------------------------|
//! | `std`      | yes     | Standard library support (disable for `no_std`)    |
//! | `parallel` | no      | Compute window signatures on the rayon pool        |
//! | `trace`    | no      | Chrome-trace JSON recorder (serde / serde_json)    |
//! | `dev`      | no      | Expose internal modules for testing                |

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - coefficient layout and errors.
//
// Contains the fixed signature layout (`Signature`, `LogSignature`, index
// helpers) and the `SignatureError` type.
mod primitives;

// Layer 2: Math - truncated tensor algebra.
//
// Contains the identity element, straight-segment signatures, the truncated
// tensor product and inverse, and coefficient-space norms.
mod math;

// Layer 3: Algorithms - core signature algorithms.
//
// Contains signature accumulation, log-signature projection, windowed
// expectation and trajectory curvature, plus the precision-specific kernels.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
//
// Contains validation, the executor and operation observers.
mod engine;

// Layer 5: Adapters - execution mode adapters.
//
// Contains execution adapters for different use cases:
// batch (whole paths), online (sample by sample).
mod adapters;

// High-level API.
//
// Provides the flat `compute_*` functions and the `PathSig` builder.
mod api;

pub use api::{
    compute_curvature, compute_expected_signature, compute_log_signature, compute_signature,
};

// ============================================================================
// Prelude
// ============================================================================

/// Standard pathsig prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use pathsig_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Online},
        BatchSignature, LogSignature, NoopObserver, ObserverHandle, OnlineOutput,
        OnlineSignature, Operation, Sample, Signature, SignatureBuilder as PathSig,
        SignatureError, SignatureLinalg, SignatureObserver, compute_curvature,
        compute_expected_signature, compute_log_signature, compute_signature,
    };

    #[cfg(feature = "trace")]
    pub use crate::api::{ChromeTraceRecorder, TraceEvent};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
