// Strategies, generators and hull checks shared by the unit tests.
//
// Exact strategies only produce small integers stored as f64, so every
// orientation test on them is exact and engines can be compared vertex for
// vertex.
use crate::data::{Hull, Point, PointLocation};
use crate::orientation::{cross, distance_squared};

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

pub use crate::data::cloud::{disc_with_outliers, integer_cloud};

/// Points with integer coordinates in `-1000..=1000`.
pub fn any_exact() -> impl Strategy<Value = Point> {
  (-1000i32..=1000, -1000i32..=1000).prop_map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
}

/// Arbitrary finite points of moderate magnitude.
pub fn any_finite() -> impl Strategy<Value = Point> {
  (-1e6f64..1e6, -1e6f64..1e6).prop_map(|(x, y)| Point::new(x, y))
}

// The hull must:
//  * only use input points,
//  * start at the lexicographically smallest point,
//  * be strictly convex and counterclockwise,
//  * contain every input point.
// Inputs with fewer than three points come back unchanged.
pub fn check_hull(pts: &[Point], hull: &Hull) -> Result<(), TestCaseError> {
  if pts.len() < 3 {
    prop_assert_eq!(hull.points(), pts);
    return Ok(());
  }
  for vertex in hull.iter() {
    prop_assert!(pts.contains(vertex), "{} is not an input point", vertex);
  }
  let first = pts
    .iter()
    .min_by(|a, b| a.cmp_xy(b))
    .copied()
    .unwrap_or_default();
  prop_assert_eq!(hull.points().first(), Some(&first));
  for (i, a) in hull.iter().enumerate() {
    for b in &hull.points()[i + 1..] {
      prop_assert_ne!(a, b, "duplicate hull vertex");
    }
  }
  prop_assert!(hull.validate().is_ok(), "not strictly convex: {:?}", hull);
  for pt in pts {
    prop_assert_ne!(
      hull.locate(pt),
      PointLocation::Outside,
      "{} is outside the hull",
      pt
    );
  }
  Ok(())
}

// Containment with a relative tolerance, for real-valued inputs where the
// predicates round.
pub fn check_hull_approx(pts: &[Point], hull: &Hull) -> Result<(), String> {
  for vertex in hull.iter() {
    if !pts.contains(vertex) {
      return Err(format!("{} is not an input point", vertex));
    }
  }
  if hull.is_degenerate() {
    return Ok(());
  }
  for pt in pts {
    for (a, b) in hull.edges() {
      let scale = distance_squared(a, b).sqrt() * (distance_squared(a, pt).sqrt() + 1.);
      if cross(a, b, pt) < -1e-9 * scale {
        return Err(format!("{} is outside edge {} -> {}", pt, a, b));
      }
    }
  }
  Ok(())
}

#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::algorithms::convex_hull::quickhull;

  use test_strategy::proptest;

  #[test]
  fn check_hull_rejects_missing_points() {
    let pts = [
      Point::new(0., 0.),
      Point::new(4., 0.),
      Point::new(0., 4.),
      Point::new(4., 4.),
    ];
    let triangle = quickhull::convex_hull(&pts[..3]);
    assert!(check_hull(&pts, &triangle).is_err());
    assert!(check_hull_approx(&pts, &triangle).is_err());
    let square = quickhull::convex_hull(&pts);
    assert!(check_hull(&pts, &square).is_ok());
    assert!(check_hull_approx(&pts, &square).is_ok());
  }

  #[proptest]
  fn any_finite_is_finite(#[strategy(any_finite())] pt: Point) {
    prop_assert!(pt.is_finite());
  }
}
