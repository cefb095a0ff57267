//! Work counters for one solve per size.
//!
//! Prints distance evaluations against the n(n-1)/2 of brute force, the
//! recursion depth, and the largest strip scan, for uniform samples.

use closest::api::{
    closest_pair_with, uniform_points, CountingObserver, Rect, ReplayToken, SolverCfg,
};

fn main() {
    for (k, n) in [100usize, 1000, 10000, 100000].into_iter().enumerate() {
        let pts = uniform_points(n, Rect::default(), ReplayToken::new(42, k as u64));
        let mut obs = CountingObserver::new();
        let pair = closest_pair_with(&pts, SolverCfg::default(), &mut obs)
            .expect("uniform sample has at least two points");
        let brute = n * (n - 1) / 2;
        println!(
            "n={n:>6} distance={:.6} evals={} brute_evals={brute} depth={} max_strip_scan={} strip_wins={}",
            pair.distance,
            obs.distance_evaluations(),
            obs.max_depth,
            obs.max_anchor_comparisons,
            obs.strip_wins
        );
    }
}
