//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks used by the
//! signature algorithms:
//! - Truncated tensor-algebra operations (identity, segment exponential, product)
//! - Euclidean norms and differences over signature coefficients
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Truncated tensor algebra over two channels.
pub mod tensor;

/// Norms and differences of coefficient vectors.
pub mod norm;
