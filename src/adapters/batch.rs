//! Batch adapter for whole-path signature computation.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter. It takes a complete path
//! held in memory and computes its signature, log-signature, windowed expected
//! signature, window trajectory, or trajectory curvature in a single call.
//!
//! ## Design notes
//!
//! * **Processing**: Processes the entire path in a single pass.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Generics**: Generic over `SignatureLinalg` types.
//!
//! ## Key concepts
//!
//! * **Declared length**: Every path method takes `num_points`; only that
//!   prefix of the buffer is read.
//!
//! ## Invariants
//!
//! * `num_points` never exceeds the buffer length.
//! * Output is identical with and without `parallel`.
//!
//! ## Non-goals
//!
//! * This adapter does not handle incremental updates (use online adapter).
//! * This adapter does not reject NaN/Inf samples; they propagate.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::marker::PhantomData;

// Internal dependencies
use crate::algorithms::specialized::SignatureLinalg;
use crate::engine::executor::{DEFAULT_WINDOW_SIZE, ExecutorConfig, SignatureExecutor};
use crate::engine::observer::ObserverHandle;
use crate::engine::validator::Validator;
use crate::primitives::errors::SignatureError;
use crate::primitives::layout::{LogSignature, Sample, Signature};

// ============================================================================
// Batch Signature Builder
// ============================================================================

/// Builder for the batch signature processor.
#[derive(Debug, Clone)]
pub struct BatchSignatureBuilder<T: SignatureLinalg> {
    /// Samples per window for the expected signature and trajectory.
    pub window_size: usize,

    /// Whether to compute window signatures in parallel.
    pub parallel: bool,

    /// Observer receiving operation events.
    pub observer: ObserverHandle,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _precision: PhantomData<T>,
}

impl<T: SignatureLinalg> Default for BatchSignatureBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SignatureLinalg> BatchSignatureBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            parallel: false,
            observer: ObserverHandle::default(),
            duplicate_param: None,
            _precision: PhantomData,
        }
    }

    /// Set the number of samples per window.
    pub fn window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set whether to use parallel execution.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the observer.
    pub fn observer(mut self, observer: impl Into<ObserverHandle>) -> Self {
        self.observer = observer.into();
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchSignature<T>, SignatureError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Validator::validate_parallel(self.parallel, "Batch")?;

        let config = ExecutorConfig {
            window_size: Some(self.window_size),
            parallel: self.parallel,
            observer: self.observer,
        };

        Ok(BatchSignature {
            executor: SignatureExecutor::from_config(&config),
            _precision: PhantomData,
        })
    }
}

// ============================================================================
// Batch Signature Processor
// ============================================================================

/// Batch signature processor.
#[derive(Debug, Clone)]
pub struct BatchSignature<T: SignatureLinalg> {
    executor: SignatureExecutor,
    _precision: PhantomData<T>,
}

impl<T: SignatureLinalg> BatchSignature<T> {
    /// Configured window size.
    pub fn window_size(&self) -> usize {
        self.executor.window_size
    }

    /// Signature of the first `num_points` samples.
    pub fn signature(
        &self,
        path: &[Sample<T>],
        num_points: usize,
    ) -> Result<Signature<T>, SignatureError> {
        let path = declared_prefix(path, num_points)?;
        Ok(self.executor.signature(path))
    }

    /// Log-signature of a finished signature.
    pub fn log_signature(&self, sig: &Signature<T>) -> LogSignature<T> {
        self.executor.log_signature(sig)
    }

    /// Mean window signature of the first `num_points` samples.
    pub fn expected_signature(
        &self,
        path: &[Sample<T>],
        num_points: usize,
    ) -> Result<Signature<T>, SignatureError> {
        let path = declared_prefix(path, num_points)?;
        Ok(self.executor.expected_signature(path))
    }

    /// Signature of every window of the first `num_points` samples.
    pub fn trajectory(
        &self,
        path: &[Sample<T>],
        num_points: usize,
    ) -> Result<Vec<Signature<T>>, SignatureError> {
        let path = declared_prefix(path, num_points)?;
        Ok(self.executor.trajectory(path))
    }

    /// Curvature of the window trajectory of the first `num_points` samples.
    pub fn curvature(&self, path: &[Sample<T>], num_points: usize) -> Result<T, SignatureError> {
        let signatures = self.trajectory(path, num_points)?;
        Ok(self.executor.curvature(&signatures))
    }

    /// Curvature of an existing signature sequence.
    pub fn curvature_of(
        &self,
        signatures: &[Signature<T>],
        num_sigs: usize,
    ) -> Result<T, SignatureError> {
        let signatures = declared_prefix(signatures, num_sigs)?;
        Ok(self.executor.curvature(signatures))
    }
}

/// The first `declared` elements of `buffer`, or `LengthMismatch`.
pub(crate) fn declared_prefix<E>(buffer: &[E], declared: usize) -> Result<&[E], SignatureError> {
    Validator::validate_declared_len(declared, buffer.len())?;
    Ok(&buffer[..declared])
}
