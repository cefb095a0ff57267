//! Ordering preprocessor: the two sorted views threaded through the recursion.

use std::cmp::Ordering;

use nalgebra::Vector2;

use super::error::ClosestPairError;
use super::types::Site;

/// The input sorted ascending by x (`by_x`) and by y (`by_y`).
///
/// Invariants:
/// - Both views are permutations of the same sites; sorts are stable, so ties
///   keep input order.
/// - `rank_x[id]` is the position of site `id` in `by_x`.
#[derive(Clone, Debug)]
pub struct OrderedViews {
    pub by_x: Vec<Site>,
    pub by_y: Vec<Site>,
    rank_x: Vec<usize>,
}

impl OrderedViews {
    /// Build both views. Needs at least two finite points.
    pub fn build(points: &[Vector2<f64>]) -> Result<Self, ClosestPairError> {
        if points.len() < 2 {
            return Err(ClosestPairError::InsufficientPoints {
                found: points.len(),
            });
        }
        check_finite(points, 0)?;
        let sites: Vec<Site> = points
            .iter()
            .enumerate()
            .map(|(id, &pos)| Site::new(id, pos))
            .collect();

        let mut by_x = sites.clone();
        by_x.sort_by(|a, b| cmp_coord(a.x(), b.x()));
        let mut by_y = sites;
        by_y.sort_by(|a, b| cmp_coord(a.y(), b.y()));

        let mut rank_x = vec![0usize; by_x.len()];
        for (rank, s) in by_x.iter().enumerate() {
            rank_x[s.id] = rank;
        }
        Ok(Self { by_x, by_y, rank_x })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.by_x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_x.is_empty()
    }

    /// Position of site `id` in `by_x`.
    #[inline]
    pub fn rank_x(&self, id: usize) -> usize {
        self.rank_x[id]
    }
}

/// Reject NaN/inf; `offset` maps slice positions back to caller indices.
pub(crate) fn check_finite(points: &[Vector2<f64>], offset: usize) -> Result<(), ClosestPairError> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(k) => Err(ClosestPairError::NonFinitePoint { index: offset + k }),
        None => Ok(()),
    }
}

#[inline]
fn cmp_coord(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn views_are_stable_permutations() {
        let pts = vec![
            vector![2.0, 0.0],
            vector![1.0, 5.0],
            vector![2.0, -1.0],
            vector![0.0, 5.0],
        ];
        let v = OrderedViews::build(&pts).unwrap();
        let xs: Vec<usize> = v.by_x.iter().map(|s| s.id).collect();
        let ys: Vec<usize> = v.by_y.iter().map(|s| s.id).collect();
        // equal x (ids 0, 2) and equal y (ids 1, 3) keep input order
        assert_eq!(xs, vec![3, 1, 0, 2]);
        assert_eq!(ys, vec![2, 0, 1, 3]);
        for (rank, s) in v.by_x.iter().enumerate() {
            assert_eq!(v.rank_x(s.id), rank);
        }
    }

    #[test]
    fn rejects_short_and_non_finite_input() {
        assert_eq!(
            OrderedViews::build(&[vector![0.0, 0.0]]).unwrap_err(),
            ClosestPairError::InsufficientPoints { found: 1 }
        );
        assert_eq!(
            OrderedViews::build(&[]).unwrap_err(),
            ClosestPairError::InsufficientPoints { found: 0 }
        );
        let pts = [vector![0.0, 0.0], vector![1.0, f64::NAN], vector![f64::INFINITY, 0.0]];
        assert_eq!(
            OrderedViews::build(&pts).unwrap_err(),
            ClosestPairError::NonFinitePoint { index: 1 }
        );
    }
}
