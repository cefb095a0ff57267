//! Closest pair of points in the plane.
//!
//! The divide-and-conquer solver lives in [`plane`]; it keeps two sort orders
//! of the input (by x and by y) in sync across the recursion and merges the
//! halves with a strip scan, for O(n log n) comparisons overall.
//!
//! API Policy
//! - `api` is the curated surface for callers (CLI, benches, examples).
//! - Internals may change freely; prefer clarity over compatibility.

pub mod api;
pub mod plane;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::plane::rand::{
        example_points, lattice_points, scale_points, uniform_points, Rect, ReplayToken,
    };
    pub use crate::plane::{
        brute_force, closest_pair, closest_pair_with, euclidean, ClosestPairError,
        CountingObserver, NoopObserver, PairSource, PointPair, SolveObserver, SolverCfg,
        TracingObserver,
    };
    pub use nalgebra::Vector2 as Vec2;
}
