//! Point model, metric, result pair, and solver configuration.
//!
//! - Points are `Vector2<f64>`; identity is the index into the caller's slice,
//!   so coincident points stay distinct.
//! - `Site`: a point tagged with that index, the unit both sorted views hold.
//! - `PointPair`: two distinct sites plus their precomputed distance.
//! - `SolverCfg`: base-case threshold (validated on use).

use std::fmt;

use nalgebra::Vector2;

use super::cfg::{BASE_THRESHOLD, MIN_BASE_THRESHOLD};
use super::error::ClosestPairError;

/// Euclidean distance `sqrt(dx² + dy²)`.
///
/// No squared shortcut anywhere: δ is compared against raw coordinate gaps in
/// the strip filter, so every candidate distance is the true metric value.
#[inline]
pub fn euclidean(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}

/// Input point tagged with its index in the caller's slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Site {
    pub id: usize,
    pub pos: Vector2<f64>,
}

impl Site {
    #[inline]
    pub fn new(id: usize, pos: Vector2<f64>) -> Self {
        Self { id, pos }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
}

/// Closest-pair result.
///
/// Invariants:
/// - `i != j` (indices into the input slice).
/// - `distance == euclidean(p, q)`.
///
/// The pair is unordered in meaning; `(i, p)` is whichever site the scan that
/// found the pair visited first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointPair {
    pub i: usize,
    pub j: usize,
    pub p: Vector2<f64>,
    pub q: Vector2<f64>,
    pub distance: f64,
}

impl PointPair {
    /// Pair two sites with an already computed distance.
    #[inline]
    pub(crate) fn from_sites(a: Site, b: Site, distance: f64) -> Self {
        debug_assert_ne!(a.id, b.id, "a pair needs two distinct sites");
        Self {
            i: a.id,
            j: b.id,
            p: a.pos,
            q: b.pos,
            distance,
        }
    }

    /// Pair two sites, computing their distance.
    #[inline]
    pub fn between(a: Site, b: Site) -> Self {
        Self::from_sites(a, b, euclidean(a.pos, b.pos))
    }

    /// Input indices in ascending order.
    #[inline]
    pub fn indices(&self) -> (usize, usize) {
        (self.i.min(self.j), self.i.max(self.j))
    }

    /// True if the pair joins points at `a` and `b`, in either order.
    pub fn joins(&self, a: Vector2<f64>, b: Vector2<f64>) -> bool {
        (self.p == a && self.q == b) || (self.p == b && self.q == a)
    }
}

impl fmt::Display for PointPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{}): {:.3}",
            self.p.x, self.p.y, self.q.x, self.q.y, self.distance
        )
    }
}

/// Solver configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverCfg {
    /// Ranges of at most this many points are solved by brute force.
    /// Must be at least `MIN_BASE_THRESHOLD`.
    pub base_threshold: usize,
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            base_threshold: BASE_THRESHOLD,
        }
    }
}

impl SolverCfg {
    pub fn validate(&self) -> Result<(), ClosestPairError> {
        if self.base_threshold < MIN_BASE_THRESHOLD {
            return Err(ClosestPairError::invalid_config(format!(
                "base_threshold must be >= {MIN_BASE_THRESHOLD}, got {}",
                self.base_threshold
            )));
        }
        Ok(())
    }
}
