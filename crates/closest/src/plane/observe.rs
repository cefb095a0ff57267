//! Pluggable solver observers.
//!
//! The solver is pure; anything diagnostic (counting, tracing) goes through a
//! `SolveObserver` passed to `closest_pair_with`. All hooks default to no-ops.

use super::types::PointPair;

/// Which candidate a combine step kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairSource {
    Left,
    Right,
    Strip,
}

/// Event hooks along one solve. `depth` is the recursion depth (top = 0);
/// `left..=right` are `by_x` positions.
pub trait SolveObserver {
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn on_enter(&mut self, _n: usize) {}

    fn on_base_case(&mut self, _depth: usize, _left: usize, _right: usize, _pair: &PointPair) {}

    fn on_divide(&mut self, _depth: usize, _left: usize, _mid: usize, _right: usize, _mid_x: f64) {
    }

    /// Strip filtered: `strip_len` points lie within `delta` of the midline.
    fn on_strip(&mut self, _strip_len: usize, _delta: f64) {}

    /// Strip point `anchor` was compared against `comparisons` successors.
    fn on_strip_anchor(&mut self, _anchor: usize, _comparisons: usize) {}

    fn on_combine(&mut self, _depth: usize, _pair: &PointPair, _source: PairSource) {}

    fn on_exit(&mut self, _pair: &PointPair) {}
}

impl<T: SolveObserver + ?Sized> SolveObserver for &mut T {
    fn name(&self) -> &str {
        (**self).name()
    }
    fn on_enter(&mut self, n: usize) {
        (**self).on_enter(n)
    }
    fn on_base_case(&mut self, depth: usize, left: usize, right: usize, pair: &PointPair) {
        (**self).on_base_case(depth, left, right, pair)
    }
    fn on_divide(&mut self, depth: usize, left: usize, mid: usize, right: usize, mid_x: f64) {
        (**self).on_divide(depth, left, mid, right, mid_x)
    }
    fn on_strip(&mut self, strip_len: usize, delta: f64) {
        (**self).on_strip(strip_len, delta)
    }
    fn on_strip_anchor(&mut self, anchor: usize, comparisons: usize) {
        (**self).on_strip_anchor(anchor, comparisons)
    }
    fn on_combine(&mut self, depth: usize, pair: &PointPair, source: PairSource) {
        (**self).on_combine(depth, pair, source)
    }
    fn on_exit(&mut self, pair: &PointPair) {
        (**self).on_exit(pair)
    }
}

/// Two observers fed the same events, first then second.
impl<A: SolveObserver, B: SolveObserver> SolveObserver for (A, B) {
    fn name(&self) -> &str {
        "Composite"
    }
    fn on_enter(&mut self, n: usize) {
        self.0.on_enter(n);
        self.1.on_enter(n);
    }
    fn on_base_case(&mut self, depth: usize, left: usize, right: usize, pair: &PointPair) {
        self.0.on_base_case(depth, left, right, pair);
        self.1.on_base_case(depth, left, right, pair);
    }
    fn on_divide(&mut self, depth: usize, left: usize, mid: usize, right: usize, mid_x: f64) {
        self.0.on_divide(depth, left, mid, right, mid_x);
        self.1.on_divide(depth, left, mid, right, mid_x);
    }
    fn on_strip(&mut self, strip_len: usize, delta: f64) {
        self.0.on_strip(strip_len, delta);
        self.1.on_strip(strip_len, delta);
    }
    fn on_strip_anchor(&mut self, anchor: usize, comparisons: usize) {
        self.0.on_strip_anchor(anchor, comparisons);
        self.1.on_strip_anchor(anchor, comparisons);
    }
    fn on_combine(&mut self, depth: usize, pair: &PointPair, source: PairSource) {
        self.0.on_combine(depth, pair, source);
        self.1.on_combine(depth, pair, source);
    }
    fn on_exit(&mut self, pair: &PointPair) {
        self.0.on_exit(pair);
        self.1.on_exit(pair);
    }
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SolveObserver for NoopObserver {
    #[inline(always)]
    fn name(&self) -> &str {
        "NoopObserver"
    }
}

/// Counts the work a solve performs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountingObserver {
    pub points: usize,
    pub base_cases: usize,
    /// Distance evaluations inside base cases.
    pub base_comparisons: usize,
    pub divides: usize,
    pub max_depth: usize,
    pub strips: usize,
    pub strip_points: usize,
    /// Distance evaluations inside strips.
    pub strip_comparisons: usize,
    /// Largest number of comparisons made for a single strip point.
    pub max_anchor_comparisons: usize,
    /// Combine steps where the strip beat both halves.
    pub strip_wins: usize,
}

impl CountingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total distance evaluations (base cases plus strips).
    pub fn distance_evaluations(&self) -> usize {
        self.base_comparisons + self.strip_comparisons
    }
}

impl SolveObserver for CountingObserver {
    fn name(&self) -> &str {
        "CountingObserver"
    }

    fn on_enter(&mut self, n: usize) {
        self.points = n;
    }

    fn on_base_case(&mut self, depth: usize, left: usize, right: usize, _pair: &PointPair) {
        self.base_cases += 1;
        self.base_comparisons += super::brute::pair_count(right - left + 1);
        self.max_depth = self.max_depth.max(depth);
    }

    fn on_divide(&mut self, depth: usize, _left: usize, _mid: usize, _right: usize, _mid_x: f64) {
        self.divides += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    fn on_strip(&mut self, strip_len: usize, _delta: f64) {
        self.strips += 1;
        self.strip_points += strip_len;
    }

    fn on_strip_anchor(&mut self, _anchor: usize, comparisons: usize) {
        self.strip_comparisons += comparisons;
        self.max_anchor_comparisons = self.max_anchor_comparisons.max(comparisons);
    }

    fn on_combine(&mut self, _depth: usize, _pair: &PointPair, source: PairSource) {
        if source == PairSource::Strip {
            self.strip_wins += 1;
        }
    }
}

/// Emits `tracing` events (`debug` for structure, `trace` per strip point).
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl SolveObserver for TracingObserver {
    fn name(&self) -> &str {
        "TracingObserver"
    }

    fn on_enter(&mut self, n: usize) {
        tracing::debug!(n, "closest_pair_enter");
    }

    fn on_base_case(&mut self, depth: usize, left: usize, right: usize, pair: &PointPair) {
        tracing::debug!(depth, left, right, distance = pair.distance, "base_case");
    }

    fn on_divide(&mut self, depth: usize, left: usize, mid: usize, right: usize, mid_x: f64) {
        tracing::debug!(depth, left, mid, right, mid_x, "divide");
    }

    fn on_strip(&mut self, strip_len: usize, delta: f64) {
        tracing::debug!(strip_len, delta, "strip");
    }

    fn on_strip_anchor(&mut self, anchor: usize, comparisons: usize) {
        tracing::trace!(anchor, comparisons, "strip_anchor");
    }

    fn on_combine(&mut self, depth: usize, pair: &PointPair, source: PairSource) {
        tracing::debug!(depth, source = ?source, distance = pair.distance, "combine");
    }

    fn on_exit(&mut self, pair: &PointPair) {
        tracing::debug!(i = pair.i, j = pair.j, distance = pair.distance, "closest_pair_exit");
    }
}
