//! Online adapter for sliding-window signatures.
//!
//! ## Purpose
//!
//! This module provides the online (incremental) execution adapter. It keeps a
//! sliding window of the most recent samples and, once the window is full,
//! produces the window's signature, its log-signature and the curvature of
//! the recent window-signature trajectory for every new sample.
//!
//! ## Design notes
//!
//! * **Storage**: Uses fixed-size circular buffers (VecDeque) for both the
//!   sample window and the signature trajectory.
//! * **Eviction**: Automatically evicts the oldest entries when full.
//! * **Processing**: Recomputes the window signature from scratch per sample.
//! * **Generics**: Generic over `SignatureLinalg` types.
//!
//! ## Key concepts
//!
//! * **Warm-up**: Returns `None` until `window_size` samples are held.
//! * **Trajectory**: The last `trajectory_capacity` window signatures, oldest
//!   first, feed the curvature estimate.
//!
//! ## Invariants
//!
//! * Window length never exceeds `window_size`.
//! * Trajectory length never exceeds `trajectory_capacity`.
//! * All samples in the window are finite.
//!
//! ## Non-goals
//!
//! * This adapter does not reuse work between consecutive windows.
//! * This adapter does not handle out-of-order samples.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(feature = "std")]
use std::collections::VecDeque;

// External dependencies
use core::marker::PhantomData;

// Internal dependencies
use crate::algorithms::expected::MIN_WINDOW_SIZE;
use crate::algorithms::specialized::SignatureLinalg;
use crate::engine::executor::{DEFAULT_WINDOW_SIZE, ExecutorConfig, SignatureExecutor};
use crate::engine::observer::{ObserverHandle, Operation};
use crate::engine::validator::Validator;
use crate::primitives::errors::SignatureError;
use crate::primitives::layout::{LogSignature, Sample, Signature};

/// Default number of window signatures kept for curvature.
pub const DEFAULT_TRAJECTORY_CAPACITY: usize = 32;

/// Smallest trajectory that yields a curvature estimate.
pub const MIN_TRAJECTORY_CAPACITY: usize = 3;

// ============================================================================
// Online Signature Builder
// ============================================================================

/// Builder for the online signature processor.
#[derive(Debug, Clone)]
pub struct OnlineSignatureBuilder<T: SignatureLinalg> {
    /// Samples per window.
    pub window_size: usize,

    /// Window signatures retained for curvature.
    pub trajectory_capacity: usize,

    /// Observer receiving operation events.
    pub observer: ObserverHandle,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<SignatureError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _precision: PhantomData<T>,
}

impl<T: SignatureLinalg> Default for OnlineSignatureBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SignatureLinalg> OnlineSignatureBuilder<T> {
    /// Create a new online builder with default parameters.
    fn new() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            trajectory_capacity: DEFAULT_TRAJECTORY_CAPACITY,
            observer: ObserverHandle::default(),
            deferred_error: None,
            duplicate_param: None,
            _precision: PhantomData,
        }
    }

    /// Set the number of samples per window.
    pub fn window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the number of window signatures retained for curvature.
    pub fn trajectory_capacity(mut self, capacity: usize) -> Self {
        self.trajectory_capacity = capacity;
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

    /// Build the online processor.
    pub fn build(self) -> Result<OnlineSignature<T>, SignatureError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Validator::validate_window_size(self.window_size, MIN_WINDOW_SIZE)?;
        Validator::validate_trajectory_capacity(
            self.trajectory_capacity,
            MIN_TRAJECTORY_CAPACITY,
        )?;

        let config = ExecutorConfig {
            window_size: Some(self.window_size),
            parallel: false,
            observer: self.observer,
        };

        Ok(OnlineSignature {
            executor: SignatureExecutor::from_config(&config),
            window_size: self.window_size,
            trajectory_capacity: self.trajectory_capacity,
            window: VecDeque::with_capacity(self.window_size),
            trajectory: VecDeque::with_capacity(self.trajectory_capacity),
        })
    }
}

// ============================================================================
// Online Signature Output
// ============================================================================

/// Result of a single online update.
#[derive(Debug, Clone, PartialEq)]
pub struct OnlineOutput<T> {
    /// Signature of the current window
    pub signature: Signature<T>,

    /// Log-signature of the current window
    pub log_signature: LogSignature<T>,

    /// Curvature of the retained trajectory (zero until three windows exist)
    pub curvature: T,
}

// ============================================================================
// Online Signature Processor
// ============================================================================

/// Online signature processor for streaming samples.
#[derive(Debug, Clone)]
pub struct OnlineSignature<T: SignatureLinalg> {
    executor: SignatureExecutor,
    window_size: usize,
    trajectory_capacity: usize,
    window: VecDeque<Sample<T>>,
    trajectory: VecDeque<Signature<T>>,
}

impl<T: SignatureLinalg> OnlineSignature<T> {
    /// Push the sample `(t, x)` and get the updated window features.
    pub fn push(&mut self, t: T, x: T) -> Result<Option<OnlineOutput<T>>, SignatureError> {
        Validator::validate_scalar(t, "t")?;
        Validator::validate_scalar(x, "x")?;

        let observer = self.executor.observer.clone();
        let _scope = observer.scope(Operation::OnlineUpdate);

        self.window.push_back([t, x]);
        if self.window.len() > self.window_size {
            self.window.pop_front();
        }

        if self.window.len() < self.window_size {
            return Ok(None);
        }

        let signature = self.executor.signature(self.window.make_contiguous());
        let log_signature = self.executor.log_signature(&signature);

        self.trajectory.push_back(signature);
        if self.trajectory.len() > self.trajectory_capacity {
            self.trajectory.pop_front();
        }
        let curvature = self.executor.curvature(self.trajectory.make_contiguous());

        Ok(Some(OnlineOutput {
            signature,
            log_signature,
            curvature,
        }))
    }

    /// Number of samples currently held.
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    /// Number of window signatures currently retained.
    pub fn trajectory_len(&self) -> usize {
        self.trajectory.len()
    }

    /// Clear the window and the trajectory.
    pub fn reset(&mut self) {
        self.window.clear();
        self.trajectory.clear();
    }
}
