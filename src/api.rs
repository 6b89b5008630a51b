//! High-level API for path signatures.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points. It offers four
//! flat-buffer functions mirroring the core operations, plus a fluent builder
//! for configuring window size, parallelism and observation before choosing an
//! execution adapter (Batch or Online).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `SignatureLinalg` types (`f64`, `f32`).
//!
//! ## Key concepts
//!
//! * **Flat functions**: [`compute_signature`], [`compute_log_signature`],
//!   [`compute_expected_signature`] and [`compute_curvature`] take plain
//!   slices and a declared element count.
//! * **Execution Adapters**: Batch and Online modes.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SignatureBuilder`] via `PathSig::new()`.
//! 2. Chain configuration methods (`.window_size()`, `.observer()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// External dependencies
use core::marker::PhantomData;

// Internal dependencies
use crate::adapters::batch::{BatchSignatureBuilder, declared_prefix};
use crate::adapters::online::OnlineSignatureBuilder;
use crate::algorithms::curvature::curvature;
use crate::algorithms::expected::expected_signature;
use crate::algorithms::logsig::log_signature;
use crate::algorithms::signature::signature;

// Publicly re-exported types
pub use crate::adapters::batch::BatchSignature;
pub use crate::adapters::online::{OnlineOutput, OnlineSignature};
pub use crate::algorithms::specialized::SignatureLinalg;
pub use crate::engine::observer::{
    NoopObserver, ObserverHandle, ObserverScope, Operation, SignatureObserver,
};
pub use crate::primitives::errors::SignatureError;
pub use crate::primitives::layout::{
    CHANNELS, DEPTH, LOG_SIGNATURE_LEN, LogSignature, SIGNATURE_LEN, Sample, Signature,
};

#[cfg(feature = "trace")]
pub use crate::engine::trace::{ChromeTraceRecorder, TraceEvent};

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Online};
}

// ============================================================================
// Flat Functions
// ============================================================================

/// Level-3 signature of the first `num_points` samples of `path`.
///
/// Paths with fewer than two points yield the identity `[1, 0, …, 0]`.
pub fn compute_signature<T: SignatureLinalg>(
    path: &[Sample<T>],
    num_points: usize,
) -> Result<Signature<T>, SignatureError> {
    let path = declared_prefix(path, num_points)?;
    Ok(signature(path))
}

/// Log-signature (14 coefficients) of a finished signature.
pub fn compute_log_signature<T: SignatureLinalg>(sig: &Signature<T>) -> LogSignature<T> {
    log_signature(sig)
}

/// Mean signature over every window of `window_size` consecutive samples.
///
/// Falls back to the whole-path signature when `window_size < 2` or the path
/// is shorter than one window.
pub fn compute_expected_signature<T: SignatureLinalg>(
    path: &[Sample<T>],
    num_points: usize,
    window_size: usize,
) -> Result<Signature<T>, SignatureError> {
    let path = declared_prefix(path, num_points)?;
    Ok(expected_signature(path, window_size))
}

/// Mean discrete curvature of the first `num_sigs` signatures.
///
/// Fewer than three signatures yield zero.
pub fn compute_curvature<T: SignatureLinalg>(
    signatures: &[Signature<T>],
    num_sigs: usize,
) -> Result<T, SignatureError> {
    let signatures = declared_prefix(signatures, num_sigs)?;
    Ok(curvature(signatures))
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring signature processors.
#[derive(Debug, Clone)]
pub struct SignatureBuilder<T: SignatureLinalg> {
    /// Samples per window.
    pub window_size: Option<usize>,

    /// Window signatures retained for curvature (Online only).
    pub trajectory_capacity: Option<usize>,

    /// Parallel window fan-out (Batch only).
    pub parallel: Option<bool>,

    /// Observer receiving operation events.
    pub observer: Option<ObserverHandle>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _precision: PhantomData<T>,
}

impl<T: SignatureLinalg> Default for SignatureBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SignatureLinalg> SignatureBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: SignatureAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            window_size: None,
            trajectory_capacity: None,
            parallel: None,
            observer: None,
            duplicate_param: None,
            _precision: PhantomData,
        }
    }

    /// Set the number of samples per window.
    pub fn window_size(mut self, window_size: usize) -> Self {
        if self.window_size.is_some() {
            self.duplicate_param = Some("window_size");
        }
        self.window_size = Some(window_size);
        self
    }

    /// Set the number of window signatures retained for curvature (Online only).
    pub fn trajectory_capacity(mut self, capacity: usize) -> Self {
        if self.trajectory_capacity.is_some() {
            self.duplicate_param = Some("trajectory_capacity");
        }
        self.trajectory_capacity = Some(capacity);
        self
    }

    /// Set whether to compute window signatures in parallel (Batch only).
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Set the observer receiving operation events.
    pub fn observer(mut self, observer: impl Into<ObserverHandle>) -> Self {
        if self.observer.is_some() {
            self.duplicate_param = Some("observer");
        }
        self.observer = Some(observer.into());
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait SignatureAdapter<T: SignatureLinalg> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`SignatureBuilder`] into a specialized execution builder.
    fn convert(builder: SignatureBuilder<T>) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: SignatureLinalg> SignatureAdapter<T> for Batch {
    type Output = BatchSignatureBuilder<T>;

    fn convert(builder: SignatureBuilder<T>) -> Self::Output {
        let mut result = BatchSignatureBuilder::default();

        // Override with user-provided values
        if let Some(window_size) = builder.window_size {
            result.window_size = window_size;
        }
        if let Some(parallel) = builder.parallel {
            result.parallel = parallel;
        }
        if let Some(observer) = builder.observer {
            result.observer = observer;
        }

        // Trajectory capacity has no meaning for batch processing and is ignored.
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for incremental online processing.
#[derive(Debug, Clone, Copy)]
pub struct Online;

impl<T: SignatureLinalg> SignatureAdapter<T> for Online {
    type Output = OnlineSignatureBuilder<T>;

    fn convert(builder: SignatureBuilder<T>) -> Self::Output {
        let mut result = OnlineSignatureBuilder::default();

        // Override with user-provided values
        if let Some(window_size) = builder.window_size {
            result.window_size = window_size;
        }
        if let Some(capacity) = builder.trajectory_capacity {
            result.trajectory_capacity = capacity;
        }
        if let Some(observer) = builder.observer {
            result.observer = observer;
        }

        if builder.parallel == Some(true) {
            result.deferred_error = Some(SignatureError::UnsupportedFeature {
                adapter: "Online",
                feature: "parallel",
            });
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}
