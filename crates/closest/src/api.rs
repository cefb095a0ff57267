//! Curated API for callers of the closest-pair solver.
//!
//! Prefer these re-exports over reaching into `plane::*` submodules; the
//! module layout underneath is free to change.

// Solver entry points and the brute-force oracle
pub use crate::plane::{brute_force, closest_pair, closest_pair_with, strip_closest};
// Model and configuration
pub use crate::plane::{euclidean, ClosestPairError, OrderedViews, PointPair, Site, SolverCfg};
// Observers
pub use crate::plane::{CountingObserver, NoopObserver, PairSource, SolveObserver, TracingObserver};
// Point sets
pub use crate::plane::rand::{
    example_points, lattice_points, scale_points, uniform_points, Rect, ReplayToken,
};
