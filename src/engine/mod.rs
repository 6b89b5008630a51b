//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the algorithms for the adapters:
//! - Input and configuration validation
//! - The executor (window size, parallel fan-out, observation)
//! - Observers and the Chrome-trace recorder
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine.
pub mod executor;

/// Operation observers.
pub mod observer;

/// Chrome-trace recorder.
#[cfg(feature = "trace")]
pub mod trace;

/// Input validation.
pub mod validator;
