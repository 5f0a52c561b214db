use std::ops::Index;
use std::slice;

use super::{Point, PointLocation};
use crate::orientation::{cross, distance_squared, Orientation};
use crate::Error;

/// Counterclockwise sequence of hull vertices. The last vertex connects back
/// to the first.
///
/// Sizes:
/// * 0 vertices for an empty input,
/// * 1 vertex when every input point coincides,
/// * 2 vertices when the input is colinear (a degenerate segment),
/// * 3 or more vertices for a proper convex polygon.
///
/// Inputs with fewer than three points are returned as given, duplicates
/// included.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hull(Vec<Point>);

impl Hull {
  /// $O(1)$ Assume that the vertices form a counterclockwise convex polygon.
  pub(crate) fn new_unchecked(vertices: Vec<Point>) -> Hull {
    Hull(vertices)
  }

  pub fn empty() -> Hull {
    Hull(Vec::new())
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// True for hulls with fewer than three vertices.
  pub fn is_degenerate(&self) -> bool {
    self.0.len() < 3
  }

  pub fn points(&self) -> &[Point] {
    &self.0
  }

  pub fn iter(&self) -> slice::Iter<'_, Point> {
    self.0.iter()
  }

  pub fn into_vec(self) -> Vec<Point> {
    self.0
  }

  /// Closed edges `(v[i], v[i+1 mod n])`.
  pub fn edges(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
    let n = self.0.len();
    (0..n).map(move |i| (&self.0[i], &self.0[(i + 1) % n]))
  }

  /// $O(n)$ Length of the closed boundary. A two-vertex hull counts its
  /// segment twice.
  pub fn perimeter(&self) -> f64 {
    if self.0.len() < 2 {
      return 0.;
    }
    self
      .edges()
      .map(|(a, b)| distance_squared(a, b).sqrt())
      .sum()
  }

  /// $O(n)$ Enclosed area.
  pub fn area(&self) -> f64 {
    if self.0.len() < 3 {
      return 0.;
    }
    let twice: f64 = self.edges().map(|(a, b)| a.x * b.y - b.x * a.y).sum();
    twice.abs() / 2.
  }

  /// $O(n)$
  pub fn locate(&self, pt: &Point) -> PointLocation {
    match self.0.as_slice() {
      [] => PointLocation::Outside,
      [a] => {
        if a == pt {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      [a, b] => {
        if on_segment(a, b, pt) {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      _ => {
        let mut on_edge = false;
        for (a, b) in self.edges() {
          match Orientation::new(a, b, pt) {
            Orientation::ClockWise => return PointLocation::Outside,
            Orientation::CoLinear => on_edge = true,
            Orientation::CounterClockWise => {}
          }
        }
        if on_edge {
          PointLocation::OnBoundary
        } else {
          PointLocation::Inside
        }
      }
    }
  }

  /// $O(n)$ Check that every vertex is a strict counterclockwise turn.
  ///
  /// Degenerate hulls are always valid.
  pub fn validate(&self) -> Result<(), Error> {
    let n = self.0.len();
    if n < 3 {
      return Ok(());
    }
    for i in 0..n {
      let prev = &self.0[(i + n - 1) % n];
      let next = &self.0[(i + 1) % n];
      if !prev.orientation(&self.0[i], next).is_ccw() {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }
}

fn on_segment(a: &Point, b: &Point, pt: &Point) -> bool {
  cross(a, b, pt) == 0.
    && pt.x >= a.x.min(b.x)
    && pt.x <= a.x.max(b.x)
    && pt.y >= a.y.min(b.y)
    && pt.y <= a.y.max(b.y)
}

impl Index<usize> for Hull {
  type Output = Point;
  fn index(&self, index: usize) -> &Point {
    self.0.index(index)
  }
}

impl AsRef<[Point]> for Hull {
  fn as_ref(&self) -> &[Point] {
    &self.0
  }
}

impl From<Hull> for Vec<Point> {
  fn from(hull: Hull) -> Vec<Point> {
    hull.0
  }
}

impl IntoIterator for Hull {
  type Item = Point;
  type IntoIter = std::vec::IntoIter<Point>;
  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<'a> IntoIterator for &'a Hull {
  type Item = &'a Point;
  type IntoIter = slice::Iter<'a, Point>;
  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
