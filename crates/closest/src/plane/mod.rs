//! Closest pair of points (divide and conquer).
//!
//! Purpose
//! - Find the pair of input points with minimum Euclidean distance in
//!   O(n log n), with a brute-force oracle for small ranges and verification.
//!
//! Structure
//! - `order`: the two sorted views (`by_x`, `by_y`) built once per call.
//! - `brute`: exhaustive scan; recursion base case and public oracle.
//! - `strip`: merge step across the dividing line (δ-bounded, ≤ 7 successors).
//! - `solver`: split/conquer/combine over `by_x` index ranges.
//! - `observe`: pluggable observers; the solver never prints.
//! - `rand`: reproducible point sets for tests, benches, and the CLI.
//!
//! Tie-break
//! - Among equal distances the first-found pair wins, in the order left half,
//!   right half, strip. Within the brute-force scan and the strip scan, later
//!   pairs replace the incumbent only when strictly closer.

mod brute;
pub mod cfg;
mod error;
mod observe;
mod order;
pub mod rand;
mod solver;
mod strip;
mod types;

pub use brute::brute_force;
pub use error::ClosestPairError;
pub use observe::{CountingObserver, NoopObserver, PairSource, SolveObserver, TracingObserver};
pub use order::OrderedViews;
pub use solver::{closest_pair, closest_pair_with};
pub use strip::strip_closest;
pub use types::{euclidean, PointPair, Site, SolverCfg};
