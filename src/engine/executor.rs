//! Execution engine for signature operations.
//!
//! ## Purpose
//!
//! This module provides the executor that sits between the adapters and the
//! pure algorithms. It applies the configured window size, optionally fans
//! window signatures out over worker threads, and reports every operation to
//! the configured observer.
//!
//! ## Design notes
//!
//! * **Thin orchestration**: All numerics live in `algorithms`; the executor
//!   only decides which routine to call and how.
//! * **Deterministic parallelism**: With `parallel` enabled, window signatures
//!   are computed concurrently, collected in window order and then reduced
//!   sequentially, which matches the sequential result bit for bit.
//! * **Observed**: Each public method opens an [`ObserverScope`](crate::engine::observer::ObserverScope).
//!
//! ## Invariants
//!
//! * Results never depend on whether `parallel` is enabled.
//!
//! ## Non-goals
//!
//! * This module does not validate input buffers (handled by `validator`).
//! * This module does not keep state between calls.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::curvature::curvature;
use crate::algorithms::expected::{expected_signature, rolling_signatures};
use crate::algorithms::logsig::log_signature;
use crate::algorithms::signature::signature;
use crate::algorithms::specialized::SignatureLinalg;
use crate::engine::observer::{ObserverHandle, Operation};
use crate::primitives::layout::{LogSignature, Sample, Signature};

#[cfg(feature = "parallel")]
use crate::algorithms::expected::{mean_signature, num_windows};

/// Default number of samples per window.
pub const DEFAULT_WINDOW_SIZE: usize = 16;

// ============================================================================
// Executor Configuration
// ============================================================================

/// Configuration consumed by [`SignatureExecutor::from_config`].
#[derive(Debug, Clone, Default)]
pub struct ExecutorConfig {
    /// Samples per window.
    pub window_size: Option<usize>,

    /// Whether to compute window signatures in parallel.
    pub parallel: bool,

    /// Observer receiving operation events.
    pub observer: ObserverHandle,
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless executor for signature operations.
#[derive(Debug, Clone)]
pub struct SignatureExecutor {
    /// Samples per window.
    pub window_size: usize,

    /// Whether to compute window signatures in parallel.
    pub parallel: bool,

    /// Observer receiving operation events.
    pub observer: ObserverHandle,
}

impl Default for SignatureExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl SignatureExecutor {
    /// Create an executor with default settings.
    pub fn new() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            parallel: false,
            observer: ObserverHandle::default(),
        }
    }

    /// Create an executor from a configuration.
    pub fn from_config(config: &ExecutorConfig) -> Self {
        Self::new()
            .window_size(config.window_size.unwrap_or(DEFAULT_WINDOW_SIZE))
            .parallel(config.parallel)
            .observer(config.observer.clone())
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
    pub fn observer(mut self, observer: ObserverHandle) -> Self {
        self.observer = observer;
        self
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Signature of the whole path.
    pub fn signature<T: SignatureLinalg>(&self, path: &[Sample<T>]) -> Signature<T> {
        let _scope = self.observer.scope(Operation::Signature);
        signature(path)
    }

    /// Log-signature of a finished signature.
    pub fn log_signature<T: SignatureLinalg>(&self, sig: &Signature<T>) -> LogSignature<T> {
        let _scope = self.observer.scope(Operation::LogSignature);
        log_signature(sig)
    }

    /// Mean signature over all windows of the path.
    pub fn expected_signature<T: SignatureLinalg>(&self, path: &[Sample<T>]) -> Signature<T> {
        let _scope = self.observer.scope(Operation::ExpectedSignature);

        #[cfg(feature = "parallel")]
        if self.parallel && num_windows(path.len(), self.window_size).is_some() {
            return mean_signature(&rolling_signatures_parallel(path, self.window_size));
        }

        expected_signature(path, self.window_size)
    }

    /// Signature of every window of the path, in order.
    pub fn trajectory<T: SignatureLinalg>(&self, path: &[Sample<T>]) -> Vec<Signature<T>> {
        let _scope = self.observer.scope(Operation::Trajectory);

        #[cfg(feature = "parallel")]
        if self.parallel && num_windows(path.len(), self.window_size).is_some() {
            return rolling_signatures_parallel(path, self.window_size);
        }

        rolling_signatures(path, self.window_size)
    }

    /// Curvature of a signature trajectory.
    pub fn curvature<T: SignatureLinalg>(&self, signatures: &[Signature<T>]) -> T {
        let _scope = self.observer.scope(Operation::Curvature);
        curvature(signatures)
    }
}

// ============================================================================
// Parallel Window Pass
// ============================================================================

/// Window signatures computed on the rayon pool, returned in window order.
///
/// Callers must ensure at least one full window exists.
#[cfg(feature = "parallel")]
fn rolling_signatures_parallel<T: SignatureLinalg>(
    path: &[Sample<T>],
    window_size: usize,
) -> Vec<Signature<T>> {
    use rayon::prelude::*;

    path.par_windows(window_size)
        .map(|window| signature(window))
        .collect()
}
