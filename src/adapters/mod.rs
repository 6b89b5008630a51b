//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides the execution modes built from
//! [`SignatureBuilder`](crate::api::SignatureBuilder):
//! - Batch: whole paths held in memory
//! - Online: one sample at a time over a sliding window
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batch adapter.
pub mod batch;

/// Online adapter.
pub mod online;
