//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the four signature algorithms on top of the math
//! layer and the precision-specific kernels:
//! - Signature accumulation (Chen's identity, step by step)
//! - Log-signature projection (closed-form level-3 BCH projection)
//! - Windowed expected signature and rolling signature trajectories
//! - Discrete curvature of a signature trajectory
//!
//! Every function here is pure: no allocation beyond fixed-size scratch (except
//! where a trajectory is returned), no shared state, no observers.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Signature accumulator.
pub mod signature;

/// Log-signature projector.
pub mod logsig;

/// Windowed expectation aggregator.
pub mod expected;

/// Curvature estimator.
pub mod curvature;

/// Precision-specific kernels.
pub mod specialized;

/// Re-exports
pub use specialized::SignatureLinalg;
