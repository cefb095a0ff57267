//! Recursive divide-and-conquer solver over `by_x` index ranges.
//!
//! Each call on `[left, right]` carries `py`: exactly the sites of
//! `by_x[left..=right]`, in y order. The split hands each half its own
//! y-ordered subsequence in one linear pass, so every level costs O(n) and
//! the whole solve O(n log n).

use nalgebra::Vector2;

use super::brute::brute_force_sites;
use super::error::ClosestPairError;
use super::observe::{NoopObserver, PairSource, SolveObserver};
use super::order::OrderedViews;
use super::strip::strip_closest;
use super::types::{PointPair, Site, SolverCfg};

/// Closest pair of `points` (at least two, all finite).
///
/// Indices in the returned pair refer to `points`. Among tied pairs the one
/// found first wins (left half, then right half, then strip).
pub fn closest_pair(points: &[Vector2<f64>]) -> Result<PointPair, ClosestPairError> {
    closest_pair_with(points, SolverCfg::default(), &mut NoopObserver)
}

/// `closest_pair` with an explicit config and an observer.
pub fn closest_pair_with<O: SolveObserver + ?Sized>(
    points: &[Vector2<f64>],
    cfg: SolverCfg,
    observer: &mut O,
) -> Result<PointPair, ClosestPairError> {
    cfg.validate()?;
    let views = OrderedViews::build(points)?;
    observer.on_enter(views.len());
    let mut runner = Runner {
        views: &views,
        threshold: cfg.base_threshold,
        observer,
    };
    let pair = runner.solve(&views.by_y, 0, views.len() - 1, 0);
    runner.observer.on_exit(&pair);
    Ok(pair)
}

/// Recursion context: read-only views plus the observer.
struct Runner<'a, O: ?Sized> {
    views: &'a OrderedViews,
    threshold: usize,
    observer: &'a mut O,
}

impl<O: SolveObserver + ?Sized> Runner<'_, O> {
    fn solve(&mut self, py: &[Site], left: usize, right: usize, depth: usize) -> PointPair {
        debug_assert_eq!(py.len(), right - left + 1);
        let views = self.views;
        let by_x = &views.by_x;
        if right - left < self.threshold {
            let pair = brute_force_sites(&by_x[left..=right]);
            self.observer.on_base_case(depth, left, right, &pair);
            return pair;
        }

        let mid = (left + right) / 2;
        let mid_x = by_x[mid].x();
        self.observer.on_divide(depth, left, mid, right, mid_x);
        let (py_left, py_right) = self.split(py, left, mid);

        let left_pair = self.solve(&py_left, left, mid, depth + 1);
        let right_pair = self.solve(&py_right, mid + 1, right, depth + 1);
        let (min_pair, source) = if left_pair.distance <= right_pair.distance {
            (left_pair, PairSource::Left)
        } else {
            (right_pair, PairSource::Right)
        };

        let delta = min_pair.distance;
        let (pair, source) = match strip_closest(py, mid_x, delta, &mut *self.observer) {
            Some(s) if s.distance < delta => (s, PairSource::Strip),
            _ => (min_pair, source),
        };
        self.observer.on_combine(depth, &pair, source);
        pair
    }

    /// Stable split of `py` into the sites of `by_x[left..=mid]` and the rest.
    ///
    /// Keyed on `by_x` rank rather than `x <= mid_x`: with several points at
    /// `mid_x` a coordinate test cannot tell which of them belong left. The
    /// left part therefore always holds exactly `mid - left + 1` sites.
    fn split(&self, py: &[Site], left: usize, mid: usize) -> (Vec<Site>, Vec<Site>) {
        let cap = mid - left + 1;
        let mut py_left = Vec::with_capacity(cap);
        let mut py_right = Vec::with_capacity(py.len() - cap);
        for s in py {
            if self.views.rank_x(s.id) <= mid {
                py_left.push(*s);
            } else {
                py_right.push(*s);
            }
        }
        debug_assert_eq!(py_left.len(), cap);
        (py_left, py_right)
    }
}
