use std::cmp::Ordering;

use crate::data::{Hull, Point};
use crate::Orientation;

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    No points are outside the resulting hull.
//    Deterministic for a fixed input order.
/// Convex hull of a set of points.
///
/// [Gift Wrapping][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. Starting from the leftmost point (lowest
/// on ties), each step picks the candidate with no point strictly to its
/// right. Of several colinear candidates the farthest one wins.
///
/// Inputs with fewer than three points are returned unchanged.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set.
/// * Vertices are ordered counterclockwise.
///
/// Coordinates must stay within [`MAX_COORDINATE`] for the orientation test
/// to be meaningful.
///
/// [`MAX_COORDINATE`]: crate::config::MAX_COORDINATE
///
/// # Time complexity
/// $O(nh)$ where h is the number of hull vertices. Since h can be as large
/// as n, this is only used for small inputs.
///
/// # Examples
///
/// ```rust
/// # use adaptive_hull::algorithms::convex_hull::gift_wrapping::convex_hull;
/// # use adaptive_hull::data::Point;
/// let hull = convex_hull(&[
///   Point::new(0., 0.),
///   Point::new(1., 1.),
///   Point::new(2., 2.),
/// ]);
/// assert_eq!(hull.points(), &[Point::new(0., 0.), Point::new(2., 2.)]);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull(pts: &[Point]) -> Hull {
  let n = pts.len();
  if n < 3 {
    return Hull::new_unchecked(pts.to_vec());
  }
  let leftmost = leftmost_point_index(pts);
  let start = pts[leftmost];

  let mut hull: Vec<Point> = Vec::new();
  let mut p = leftmost;

  loop {
    hull.push(pts[p]);
    let mut q = if p == 0 { 1 } else { 0 };

    for i in 0..n {
      if i == p {
        continue;
      }
      let orientation = Point::orient(&pts[p], &pts[q], &pts[i]);
      // check if 3 points are coliner, as we want to add the minimal number of points on convex hull
      if orientation == Orientation::ClockWise
        || (orientation == Orientation::CoLinear
          && pts[p].cmp_distance_to(&pts[i], &pts[q]) == Ordering::Greater)
      {
        q = i;
      }
    }

    p = q;
    // Duplicates of the start point end the walk as well. The length bound
    // only matters when rounding makes the predicates inconsistent.
    if pts[p] == start || hull.len() == n {
      break;
    }
  }

  Hull::new_unchecked(hull)
}

// Smallest x, then smallest y. First occurrence on ties.
// O(n)
fn leftmost_point_index(pts: &[Point]) -> usize {
  let mut best = 0;
  for (i, pt) in pts.iter().enumerate().skip(1) {
    if pt.cmp_xy(&pts[best]) == Ordering::Less {
      best = i;
    }
  }
  best
}
