use std::cmp::Ordering;

use crate::data::Point;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

/// Twice the signed area of the triangle `o`, `a`, `b`.
///
/// Positive when `b` lies to the left of the directed line `o -> a`
/// (a counterclockwise turn), negative when it lies to the right, and zero
/// when the three points are colinear.
///
/// The result is an ordinary `f64` product and is exact only as long as the
/// intermediate differences and products are representable. Integral
/// coordinates below 2^26 in magnitude are always exact.
///
/// # Examples
///
/// ```rust
/// # use adaptive_hull::cross;
/// # use adaptive_hull::data::Point;
/// let o = Point::new(0., 0.);
/// assert_eq!(cross(&o, &Point::new(1., 0.), &Point::new(0., 1.)), 1.);
/// assert_eq!(cross(&o, &Point::new(0., 1.), &Point::new(1., 0.)), -1.);
/// assert_eq!(cross(&o, &Point::new(1., 1.), &Point::new(2., 2.)), 0.);
/// ```
#[inline]
pub fn cross(o: &Point, a: &Point, b: &Point) -> f64 {
  (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Squared euclidean distance. Only used to break colinear ties, so no
/// square root is taken.
#[inline]
pub fn distance_squared(a: &Point, b: &Point) -> f64 {
  let dx = b.x - a.x;
  let dy = b.y - a.y;
  dx * dx + dy * dy
}

/// Distance from `p` to the line through `a` and `b`.
///
/// The line is undefined when `a == b`. Such a pair can only be reached when
/// every remaining point coincides with both extremes, and the distance is
/// reported as zero.
#[inline]
pub fn perpendicular_distance(p: &Point, a: &Point, b: &Point) -> f64 {
  if a == b {
    return 0.;
  }
  cross(a, b, p).abs() / distance_squared(a, b).sqrt()
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use adaptive_hull::data::Point;
  /// # use adaptive_hull::Orientation;
  /// let p1 = Point::new(0., 0.);
  /// let p2 = Point::new(0., 1.); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new(0., 2.)).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new(-1., 2.)).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new(1., 2.)).is_cw());
  /// ```
  pub fn new(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    match cross(p1, p2, p3).partial_cmp(&0.) {
      Some(Ordering::Greater) => CounterClockWise,
      Some(Ordering::Less) => ClockWise,
      // NaN. The engine only admits finite coordinates up to
      // MAX_COORDINATE, where the cross product cannot overflow.
      _ => CoLinear,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}
