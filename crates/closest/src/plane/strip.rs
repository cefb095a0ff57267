//! Strip merge: closer pairs straddling the dividing line.

use super::cfg::STRIP_NEIGHBORS;
use super::observe::SolveObserver;
use super::types::{euclidean, PointPair, Site};

/// Closest pair among the points of `py` lying strictly within `delta` of the
/// vertical line `x = mid_x`, if that pair is strictly closer than `delta`.
///
/// Pre: `py` is sorted ascending by y. The filter keeps that order, so for
/// each strip point the scan over its successors stops as soon as the y-gap
/// reaches `delta` (later successors are farther still) and never looks past
/// `STRIP_NEIGHBORS` of them. Returns `None` when nothing beats `delta`.
pub fn strip_closest<O: SolveObserver + ?Sized>(
    py: &[Site],
    mid_x: f64,
    delta: f64,
    observer: &mut O,
) -> Option<PointPair> {
    let strip: Vec<Site> = py
        .iter()
        .copied()
        .filter(|s| (s.x() - mid_x).abs() < delta)
        .collect();
    observer.on_strip(strip.len(), delta);

    let mut best: Option<PointPair> = None;
    let mut best_d = delta;
    for (k, a) in strip.iter().enumerate() {
        let mut comparisons = 0usize;
        for b in strip[k + 1..].iter().take(STRIP_NEIGHBORS) {
            if b.y() - a.y() >= delta {
                break;
            }
            comparisons += 1;
            let d = euclidean(a.pos, b.pos);
            if d < best_d {
                best_d = d;
                best = Some(PointPair::from_sites(*a, *b, d));
            }
        }
        observer.on_strip_anchor(k, comparisons);
    }
    best
}
