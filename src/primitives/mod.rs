//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fixed-size data layout shared by every other layer
//! and the crate-wide error type:
//! - Coefficient layout of level-3, 2-channel signatures and log-signatures
//! - `SignatureError` for caller misuse and configuration errors
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error type for signature operations.
pub mod errors;

/// Coefficient layout of signatures and log-signatures.
pub mod layout;
