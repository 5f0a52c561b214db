use std::cmp::Ordering;
use std::convert::Infallible;

use crate::data::{Hull, Point};
use crate::{perpendicular_distance, CancelToken, Error, Orientation};

// https://en.wikipedia.org/wiki/Quickhull

// Properties:
//    No panics.
//    No recursion: work is kept on an explicit stack.
//    No points are outside the resulting hull.
/// $O(n \log n)$ expected, $O(n^2)$ worst case. Convex hull of a set of points.
///
/// [QuickHull][wiki] splits the points along the line through the
/// lexicographically smallest point `A` and largest point `B`. Each side is
/// hulled by repeatedly taking the point farthest from the current edge and
/// discarding everything inside the triangle it spans.
///
/// Inputs with fewer than three points are returned unchanged. If every
/// point coincides the hull is that single point, and if every point is
/// colinear the hull is the segment between the two extremes.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set.
/// * Vertices are ordered counterclockwise, starting at `A`.
///
/// These hold for coordinates up to [`MAX_COORDINATE`] in magnitude. Beyond
/// that the orientation test can overflow and report real vertices as
/// colinear. [`HullEngine`] rejects such inputs.
///
/// [`MAX_COORDINATE`]: crate::config::MAX_COORDINATE
/// [`HullEngine`]: crate::HullEngine
///
/// # Examples
///
/// ```rust
/// # use adaptive_hull::algorithms::convex_hull::quickhull::convex_hull;
/// # use adaptive_hull::data::Point;
/// let hull = convex_hull(&[
///   Point::new(2., 2.),
///   Point::new(0., 0.),
///   Point::new(4., 0.),
///   Point::new(1., 1.),
///   Point::new(0., 4.),
/// ]);
/// assert_eq!(
///   hull.points(),
///   &[Point::new(0., 0.), Point::new(4., 0.), Point::new(0., 4.)]
/// );
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Quickhull
pub fn convex_hull(pts: &[Point]) -> Hull {
  match quickhull(pts, || Ok::<(), Infallible>(())) {
    Ok(hull) => hull,
    Err(never) => match never {},
  }
}

/// Like [`convex_hull`] but checks `cancel` before every edge expansion.
///
/// # Errors
/// Returns [`Error::Cancelled`] once the token has been cancelled.
pub fn convex_hull_cancellable(pts: &[Point], cancel: &CancelToken) -> Result<Hull, Error> {
  quickhull(pts, || cancel.check())
}

fn quickhull<E, F>(pts: &[Point], mut checkpoint: F) -> Result<Hull, E>
where
  F: FnMut() -> Result<(), E>,
{
  if pts.len() < 3 {
    return Ok(Hull::new_unchecked(pts.to_vec()));
  }
  let (min, max) = extreme_indices(pts);
  let a = pts[min];
  let b = pts[max];
  if a == b {
    return Ok(Hull::new_unchecked(vec![a]));
  }

  let mut below = Vec::new();
  let mut above = Vec::new();
  for (i, pt) in pts.iter().enumerate() {
    if i == min || i == max {
      continue;
    }
    match Orientation::new(&a, &b, pt) {
      Orientation::ClockWise => below.push(*pt),
      Orientation::CounterClockWise => above.push(*pt),
      // A and B are the extremes, so a point on their line lies between them.
      Orientation::CoLinear => {}
    }
  }

  let mut hull = vec![a];
  find_hull(below, a, b, &mut hull, &mut checkpoint)?;
  hull.push(b);
  find_hull(above, b, a, &mut hull, &mut checkpoint)?;
  Ok(Hull::new_unchecked(hull))
}

enum Step {
  // Every point in `outside` lies strictly right of `start -> end`.
  Expand {
    outside: Vec<Point>,
    start: Point,
    end: Point,
  },
  Emit(Point),
}

// Appends the hull vertices strictly between `start` and `end`, in
// counterclockwise order. Steps are popped LIFO, so the start-side expansion
// finishes before the apex is emitted and the end side is expanded.
fn find_hull<E, F>(
  outside: Vec<Point>,
  start: Point,
  end: Point,
  hull: &mut Vec<Point>,
  checkpoint: &mut F,
) -> Result<(), E>
where
  F: FnMut() -> Result<(), E>,
{
  let mut stack = vec![Step::Expand {
    outside,
    start,
    end,
  }];
  while let Some(step) = stack.pop() {
    let (outside, start, end) = match step {
      Step::Emit(pt) => {
        hull.push(pt);
        continue;
      }
      Step::Expand {
        outside,
        start,
        end,
      } => (outside, start, end),
    };
    if outside.is_empty() {
      continue;
    }
    checkpoint()?;

    let apex_index = farthest_from_line(&outside, &start, &end);
    let apex = outside[apex_index];
    let mut start_side = Vec::new();
    let mut end_side = Vec::new();
    for (i, pt) in outside.iter().enumerate() {
      if i == apex_index {
        continue;
      }
      if Orientation::new(&start, &apex, pt).is_cw() {
        start_side.push(*pt);
      } else if Orientation::new(&apex, &end, pt).is_cw() {
        end_side.push(*pt);
      }
      // Otherwise the point is inside the triangle start-apex-end.
    }

    stack.push(Step::Expand {
      outside: end_side,
      start: apex,
      end,
    });
    stack.push(Step::Emit(apex));
    stack.push(Step::Expand {
      outside: start_side,
      start,
      end: apex,
    });
  }
  Ok(())
}

// Lexicographically smallest and largest (x, y). First occurrence on ties.
// O(n)
fn extreme_indices(pts: &[Point]) -> (usize, usize) {
  let mut min = 0;
  let mut max = 0;
  for (i, pt) in pts.iter().enumerate().skip(1) {
    if pt.cmp_xy(&pts[min]) == Ordering::Less {
      min = i;
    }
    if pt.cmp_xy(&pts[max]) == Ordering::Greater {
      max = i;
    }
  }
  (min, max)
}

// First occurrence wins on ties.
fn farthest_from_line(pts: &[Point], start: &Point, end: &Point) -> usize {
  let mut best = 0;
  let mut best_distance = perpendicular_distance(&pts[0], start, end);
  for (i, pt) in pts.iter().enumerate().skip(1) {
    let distance = perpendicular_distance(pt, start, end);
    if distance > best_distance {
      best = i;
      best_distance = distance;
    }
  }
  best
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::algorithms::convex_hull::gift_wrapping;
  use crate::testing::*;

  use claims::assert_ok;
  use rand::SeedableRng;

  use proptest::collection::*;
  use proptest::prelude::*;
  use test_strategy::proptest;

  fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().copied().map(Point::from).collect()
  }

  #[test]
  fn triangle_ccw() {
    let hull = convex_hull(&pts(&[(0., 0.), (1., 0.), (0., 1.)]));
    assert_eq!(hull.points(), pts(&[(0., 0.), (1., 0.), (0., 1.)]).as_slice());
  }

  #[test]
  fn colinear_gives_segment() {
    let hull = convex_hull(&pts(&[(1., 1.), (2., 2.), (0., 0.), (1.5, 1.5)]));
    assert_eq!(hull.points(), pts(&[(0., 0.), (2., 2.)]).as_slice());
  }

  #[test]
  fn vertical_line_gives_segment() {
    let hull = convex_hull(&pts(&[(0., 3.), (0., 1.), (0., 2.), (0., 0.)]));
    assert_eq!(hull.points(), pts(&[(0., 0.), (0., 3.)]).as_slice());
  }

  #[test]
  fn identical_points_give_single_vertex() {
    let points = vec![Point::new(-2., 7.); 5];
    assert_eq!(convex_hull(&points).points(), &[Point::new(-2., 7.)]);
  }

  // Points exactly on the line through the extremes are dropped. That is only
  // sound because A and B are the global extremes; these inputs pin it down.
  #[test]
  fn points_on_extreme_line_are_dropped() {
    let points = pts(&[
      (2., 2.),
      (0., 4.),
      (1., 1.),
      (4., 4.),
      (0., 0.),
      (3., 3.),
      (4., 0.),
    ]);
    let hull = convex_hull(&points);
    assert_eq!(
      hull.points(),
      pts(&[(0., 0.), (4., 0.), (4., 4.), (0., 4.)]).as_slice()
    );
  }

  #[test]
  fn extreme_line_with_tied_x() {
    // Several points share the smallest and the largest x.
    let points = pts(&[(0., 5.), (10., 5.), (0., 0.), (10., 0.), (0., 2.), (10., 9.), (5., 4.)]);
    let hull = convex_hull(&points);
    assert_ok!(hull.validate());
    assert_eq!(
      hull.points(),
      pts(&[(0., 0.), (10., 0.), (10., 9.), (0., 5.)]).as_slice()
    );
  }

  #[test]
  fn apex_ties_keep_first() {
    // (1,2), (2,2) and (3,2) are equally far from the base line.
    let points = pts(&[(0., 0.), (4., 0.), (1., 2.), (2., 2.), (3., 2.)]);
    let hull = convex_hull(&points);
    assert_ok!(hull.validate());
    assert_eq!(
      hull.points(),
      pts(&[(0., 0.), (4., 0.), (3., 2.), (1., 2.)]).as_slice()
    );
  }

  #[test]
  fn duplicated_vertices_emitted_once() {
    let points = pts(&[(0., 0.), (2., 0.), (0., 0.), (2., 2.), (2., 0.), (2., 2.), (1., 1.)]);
    let hull = convex_hull(&points);
    assert_eq!(hull.points(), pts(&[(0., 0.), (2., 0.), (2., 2.)]).as_slice());
  }

  #[test]
  fn parabola_keeps_every_point() {
    // Every point is a vertex; deep splits must not overflow the stack.
    let points: Vec<Point> = (0..20_000)
      .map(|i| Point::new(f64::from(i), f64::from(i) * f64::from(i)))
      .collect();
    let hull = convex_hull(&points);
    assert_eq!(hull.len(), points.len());
    assert_ok!(hull.validate());
  }

  #[test]
  fn disc_with_outliers_scenario() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(42);
    let points = disc_with_outliers(1_000, 100, &mut rng);
    let hull = convex_hull(&points);
    assert!(hull.len() > 3);
    check_hull_approx(&points, &hull).unwrap();
    // The point farthest from the origin is always a vertex.
    let origin = Point::default();
    let far = points
      .iter()
      .max_by(|a, b| origin.cmp_distance_to(a, b))
      .unwrap();
    assert!(hull.points().contains(far));
    // Vertices beyond the disc can only be outliers.
    for pt in hull.iter() {
      if origin.squared_euclidean_distance(pt) > 101. * 101. {
        assert!(points[1_000..].contains(pt));
      }
    }
  }

  #[test]
  fn cancelled_token_aborts() {
    let cancel = CancelToken::new();
    cancel.cancel();
    let points = pts(&[(0., 0.), (1., 0.), (0., 1.), (1., 1.)]);
    assert_eq!(convex_hull_cancellable(&points, &cancel), Err(Error::Cancelled));
    // Nothing to expand, nothing to check.
    let segment = pts(&[(0., 0.), (1., 1.), (2., 2.)]);
    assert_eq!(
      convex_hull_cancellable(&segment, &cancel).map(Hull::into_vec),
      Ok(pts(&[(0., 0.), (2., 2.)]))
    );
  }

  #[proptest]
  fn convex_hull_prop(#[strategy(vec(any_exact(), 0..200))] pts: Vec<Point>) {
    let hull = convex_hull(&pts);
    check_hull(&pts, &hull)?;
  }

  #[proptest]
  fn convex_hull_finite_prop(#[strategy(vec(any_finite(), 0..200))] pts: Vec<Point>) {
    let hull = convex_hull(&pts);
    prop_assert!(check_hull_approx(&pts, &hull).is_ok());
  }

  #[proptest]
  fn agrees_with_gift_wrapping_prop(#[strategy(vec(any_exact(), 0..80))] pts: Vec<Point>) {
    prop_assert_eq!(convex_hull(&pts), gift_wrapping::convex_hull(&pts));
  }

  #[proptest]
  fn convex_hull_idempotent_prop(#[strategy(vec(any_exact(), 3..200))] pts: Vec<Point>) {
    let hull = convex_hull(&pts);
    prop_assert_eq!(convex_hull(hull.points()), hull);
  }
}
