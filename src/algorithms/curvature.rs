//! Curvature of a signature trajectory.
//!
//! ## Purpose
//!
//! This module measures how quickly an ordered sequence of signatures turns
//! in the 14-dimensional space of non-identity coefficients. High values mark
//! fast changes of regime in the underlying series.
//!
//! ## Key concepts
//!
//! For each interior snapshot `i`:
//!
//! ```text
//! v1 = S[i] − S[i−1],  v2 = S[i+1] − S[i]
//! κ_i = ‖ v2/‖v2‖ − v1/‖v1‖ ‖ / ‖v1‖
//! ```
//!
//! The estimate is `Σ κ_i / (N − 2)`.
//!
//! ## Invariants
//!
//! * Fewer than three snapshots give `0`.
//! * Snapshots with a velocity norm under [`VELOCITY_FLOOR`] contribute
//!   nothing, but still count in the `N − 2` divisor.

// Internal dependencies
use crate::algorithms::specialized::SignatureLinalg;
use crate::math::norm::{euclidean_norm, unit_tangent_gap, velocity};
use crate::primitives::layout::Signature;

/// Velocity norm below which an interior snapshot is skipped.
pub const VELOCITY_FLOOR: f64 = 1e-15;

/// Mean discrete curvature of `signatures`.
pub fn curvature<T: SignatureLinalg>(signatures: &[Signature<T>]) -> T {
    let n = signatures.len();
    if n < 3 {
        return T::zero();
    }

    let floor = T::from(VELOCITY_FLOOR).unwrap();
    let mut total = T::zero();

    for triple in signatures.windows(3) {
        let v1 = velocity(&triple[0], &triple[1]);
        let v2 = velocity(&triple[1], &triple[2]);
        let norm_v1 = euclidean_norm(&v1);
        let norm_v2 = euclidean_norm(&v2);

        if norm_v1 < floor || norm_v2 < floor {
            continue;
        }

        total = total + unit_tangent_gap(&v1, norm_v1, &v2, norm_v2) / norm_v1;
    }

    total / T::from(n - 2).unwrap()
}
