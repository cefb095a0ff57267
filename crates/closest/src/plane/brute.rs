//! Brute-force solver: every pair of a small range.
//!
//! Used as the recursion base case (on `by_x` ranges) and, through
//! [`brute_force`], as the O(k²) oracle the divide-and-conquer result is
//! checked against.

use nalgebra::Vector2;

use super::error::ClosestPairError;
use super::order::check_finite;
use super::types::{euclidean, PointPair, Site};

/// Minimum-distance pair among `sites` (needs `sites.len() >= 2`).
///
/// Scan order is `(a, b)` with `a < b` lexicographically; a later pair wins
/// only if strictly closer.
pub(crate) fn brute_force_sites(sites: &[Site]) -> PointPair {
    debug_assert!(sites.len() >= 2, "brute force needs at least two sites");
    let mut best = PointPair::between(sites[0], sites[1]);
    for (a, s) in sites.iter().enumerate() {
        // (0, 1) is the seed above
        let from = if a == 0 { 2 } else { a + 1 };
        for t in sites.iter().skip(from) {
            let d = euclidean(s.pos, t.pos);
            if d < best.distance {
                best = PointPair::from_sites(*s, *t, d);
            }
        }
    }
    best
}

/// Number of distance evaluations `brute_force_sites` performs on `k` sites.
#[inline]
pub(crate) fn pair_count(k: usize) -> usize {
    k * k.saturating_sub(1) / 2
}

/// Closest pair among `points[left..=right]` by exhaustive comparison.
///
/// Indices in the returned pair refer to `points`. Errors if the range holds
/// fewer than two points, ends past the slice, or has a non-finite coordinate.
pub fn brute_force(
    points: &[Vector2<f64>],
    left: usize,
    right: usize,
) -> Result<PointPair, ClosestPairError> {
    if right >= points.len() {
        return Err(ClosestPairError::RangeOutOfBounds {
            right,
            len: points.len(),
        });
    }
    if left >= right {
        return Err(ClosestPairError::InsufficientPoints {
            found: if left == right { 1 } else { 0 },
        });
    }
    let range = &points[left..=right];
    check_finite(range, left)?;
    let sites: Vec<Site> = range
        .iter()
        .enumerate()
        .map(|(k, &pos)| Site::new(left + k, pos))
        .collect();
    Ok(brute_force_sites(&sites))
}
