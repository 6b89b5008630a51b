//! Injectable observers for signature operations.
//!
//! ## Purpose
//!
//! This module lets callers watch the engine without the engine owning any
//! global logging state. An observer is handed to a builder, and the executor
//! reports the start and end of every observable operation to it.
//!
//! ## Design notes
//!
//! * **Opt-in**: Without an observer the engine uses [`NoopObserver`].
//! * **Scoped**: [`ObserverScope`] emits the end event on drop, so early
//!   returns are still reported.
//! * **Outside the kernels**: Algorithms never see observers and stay pure.
//!
//! ## Non-goals
//!
//! * This module does not write anything anywhere; see `engine::trace` for a
//!   recorder that does.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

use core::fmt;

/// Observable operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Signature of a path.
    Signature,

    /// Log-signature projection.
    LogSignature,

    /// Windowed expected signature.
    ExpectedSignature,

    /// Rolling per-window signatures.
    Trajectory,

    /// Curvature of a signature trajectory.
    Curvature,

    /// One sample pushed into an online processor.
    OnlineUpdate,
}

impl Operation {
    /// Stable event name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Signature => "compute_signature",
            Self::LogSignature => "compute_log_signature",
            Self::ExpectedSignature => "compute_expected_signature",
            Self::Trajectory => "compute_trajectory",
            Self::Curvature => "compute_curvature",
            Self::OnlineUpdate => "online_update",
        }
    }
}

/// Receiver for operation begin/end events.
///
/// Both methods default to doing nothing. Implementations must tolerate being
/// called from several threads at once.
pub trait SignatureObserver: Send + Sync {
    /// Called before `op` starts.
    fn on_begin(&self, _op: Operation) {}

    /// Called after `op` finishes.
    fn on_end(&self, _op: Operation) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SignatureObserver for NoopObserver {}

/// RAII guard reporting `on_begin` at construction and `on_end` on drop.
pub struct ObserverScope<'a> {
    observer: &'a dyn SignatureObserver,
    op: Operation,
}

impl<'a> ObserverScope<'a> {
    /// Open a scope for `op`.
    pub fn new(observer: &'a dyn SignatureObserver, op: Operation) -> Self {
        observer.on_begin(op);
        Self { observer, op }
    }
}

impl Drop for ObserverScope<'_> {
    fn drop(&mut self) {
        self.observer.on_end(self.op);
    }
}

/// Shared, cloneable handle to an observer.
#[derive(Clone)]
pub struct ObserverHandle(Arc<dyn SignatureObserver>);

impl ObserverHandle {
    /// Wrap an observer value.
    pub fn new<O: SignatureObserver + 'static>(observer: O) -> Self {
        Self(Arc::new(observer))
    }

    /// Wrap an already shared observer.
    pub fn from_arc(observer: Arc<dyn SignatureObserver>) -> Self {
        Self(observer)
    }

    /// Open a scope for `op` on the wrapped observer.
    #[inline]
    pub fn scope(&self, op: Operation) -> ObserverScope<'_> {
        ObserverScope::new(&*self.0, op)
    }
}

impl Default for ObserverHandle {
    fn default() -> Self {
        Self::new(NoopObserver)
    }
}

impl fmt::Debug for ObserverHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ObserverHandle")
    }
}

impl<O: SignatureObserver + 'static> From<Arc<O>> for ObserverHandle {
    fn from(observer: Arc<O>) -> Self {
        Self(observer)
    }
}
