//! Algorithm constants.
//!
//! Policy
//! - These are part of the algorithm, not tuning knobs. `BASE_THRESHOLD` is
//!   only the default; `SolverCfg` may raise it for benchmarking.

/// Largest `by_x` range handed to the brute-force scan by default.
pub const BASE_THRESHOLD: usize = 3;

/// Smallest admissible base threshold. Below it a split could leave a
/// single-point half, which has no pair to return.
pub const MIN_BASE_THRESHOLD: usize = 3;

/// Successors compared per strip point (packing lemma: at most 8 points fit in
/// a δ × 2δ box without two of them being closer than δ).
pub const STRIP_NEIGHBORS: usize = 7;
