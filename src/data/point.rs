use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

use crate::orientation::{distance_squared, Orientation};

/// A point in the plane.
///
/// Equality is exact coordinate equality. Two points produced by different
/// arithmetic that "should" coincide may compare unequal, and `0.0` equals
/// `-0.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

// Random sampling in the unit square.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point {
      x: rng.gen(),
      y: rng.gen(),
    }
  }
}

impl Point {
  pub const fn new(x: f64, y: f64) -> Point {
    Point { x, y }
  }

  pub fn is_finite(&self) -> bool {
    self.x.is_finite() && self.y.is_finite()
  }

  /// Both coordinates have magnitude at most `limit`.
  pub fn is_within(&self, limit: f64) -> bool {
    self.x.abs() <= limit && self.y.abs() <= limit
  }

  /// Orientation of the turn `p -> q -> r`.
  pub fn orient(p: &Point, q: &Point, r: &Point) -> Orientation {
    Orientation::new(p, q, r)
  }

  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(self, q, r)
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point) -> f64 {
    distance_squared(self, rhs)
  }

  pub fn cmp_distance_to(&self, p: &Point, q: &Point) -> Ordering {
    self
      .squared_euclidean_distance(p)
      .total_cmp(&self.squared_euclidean_distance(q))
  }

  /// Lexicographic order on `(x, y)`. Consistent with `==`, so `-0.0` and
  /// `0.0` tie.
  pub fn cmp_xy(&self, other: &Point) -> Ordering {
    self.key().cmp(&other.key())
  }

  /// Hashable key with the same equality as `Point`.
  pub(crate) fn key(&self) -> [OrderedFloat<f64>; 2] {
    [OrderedFloat(self.x), OrderedFloat(self.y)]
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point::new(point.0, point.1)
  }
}

impl From<[f64; 2]> for Point {
  fn from(array: [f64; 2]) -> Point {
    Point::new(array[0], array[1])
  }
}

impl From<Point> for [f64; 2] {
  fn from(point: Point) -> [f64; 2] {
    [point.x, point.y]
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({:.2}, {:.2})", self.x, self.y)
  }
}
