//! Reproducible synthetic paths for the pathsig benchmarks.

use rand::prelude::*;
use rand_distr::{Normal, Uniform};

/// Noisy sine wave sampled on a uniform time grid.
pub fn sine_path(size: usize, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.2).unwrap();

    (0..size)
        .map(|i| {
            let t = i as f64 * 10.0 / size as f64;
            [t, t.sin() + noise.sample(&mut rng)]
        })
        .collect()
}

/// Geometric random walk resembling a daily price series.
pub fn price_path(size: usize, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let returns = Normal::new(0.0005, 0.02).unwrap();

    let mut price = 100.0;
    (0..size)
        .map(|i| {
            let sample = [i as f64, price];
            price *= 1.0 + returns.sample(&mut rng);
            sample
        })
        .collect()
}

/// Sine wave whose frequency jumps at random points.
pub fn regime_path(size: usize, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let freq = Uniform::new(0.5, 8.0).unwrap();

    let mut omega = freq.sample(&mut rng);
    let mut phase = 0.0;
    let dt = 0.01;
    (0..size)
        .map(|i| {
            if rng.random_range(0..500) == 0 {
                omega = freq.sample(&mut rng);
            }
            phase += omega * dt;
            [i as f64 * dt, phase.sin()]
        })
        .collect()
}
