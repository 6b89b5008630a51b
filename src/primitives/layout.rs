//! Coefficient layout for level-3 signatures over two channels.
//!
//! ## Purpose
//!
//! This module fixes the flat indexing of signature and log-signature
//! coefficients so that every kernel, test and adapter agrees on where a
//! given iterated integral lives.
//!
//! ## Key concepts
//!
//! Channel 0 is time-like, channel 1 is value-like. Words are laid out level
//! by level, row-major within a level:
//!
//! ```text
//! signature      [0]      identity (1.0)
//!                [1..3)   level 1: 0, 1
//!                [3..7)   level 2: 00, 01, 10, 11
//!                [7..15)  level 3: 000, 001, 010, 011, 100, 101, 110, 111
//!
//! log-signature  same words shifted down by one (no identity slot)
//! ```
//!
//! ## Invariants
//!
//! * `SIGNATURE_LEN == 1 + CHANNELS + CHANNELS^2 + CHANNELS^3`.
//! * `LOG_SIGNATURE_LEN == SIGNATURE_LEN - 1`.

/// Number of path channels (time, value).
pub const CHANNELS: usize = 2;

/// Truncation level of the tensor algebra.
pub const DEPTH: usize = 3;

/// Number of signature coefficients, identity included.
pub const SIGNATURE_LEN: usize = 15;

/// Number of log-signature coefficients.
pub const LOG_SIGNATURE_LEN: usize = 14;

/// Offset of the first level-1 coefficient in a signature.
pub const LEVEL1_OFFSET: usize = 1;

/// Offset of the first level-2 coefficient in a signature.
pub const LEVEL2_OFFSET: usize = 3;

/// Offset of the first level-3 coefficient in a signature.
pub const LEVEL3_OFFSET: usize = 7;

/// Level-3 truncated signature: identity followed by levels 1, 2 and 3.
pub type Signature<T> = [T; SIGNATURE_LEN];

/// Log-signature: levels 1, 2 and 3 without the identity slot.
pub type LogSignature<T> = [T; LOG_SIGNATURE_LEN];

/// A single path sample `[t, x]`.
pub type Sample<T> = [T; CHANNELS];

/// Signature index of the level-1 word `(i)`.
#[inline]
pub const fn level1(i: usize) -> usize {
    LEVEL1_OFFSET + i
}

/// Signature index of the level-2 word `(i, j)`.
#[inline]
pub const fn level2(i: usize, j: usize) -> usize {
    LEVEL2_OFFSET + i * CHANNELS + j
}

/// Signature index of the level-3 word `(i, j, k)`.
#[inline]
pub const fn level3(i: usize, j: usize, k: usize) -> usize {
    LEVEL3_OFFSET + (i * CHANNELS + j) * CHANNELS + k
}

/// Log-signature index of a word given its signature index.
#[inline]
pub const fn log_index(signature_index: usize) -> usize {
    signature_index - 1
}
