//! # Input analysis
//!
//! Advisory summary of a point set. Nothing in the hull engines reads it,
//! it only describes what a caller might expect.

use num_traits::ToPrimitive;

use crate::data::Point;

/// Coarse size bucket of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeClass {
  Empty,
  /// At most 100 points.
  Small,
  /// At most 50 000 points.
  Medium,
  Large,
}

impl SizeClass {
  pub fn of(n: usize) -> SizeClass {
    match n {
      0 => SizeClass::Empty,
      1..=100 => SizeClass::Small,
      101..=50_000 => SizeClass::Medium,
      _ => SizeClass::Large,
    }
  }
}

/// Storage and preconditioning pairing suggested for an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingStrategy {
  JarvisMarch,
  ListWithPreconditioning,
  ListWithAklToussaint,
  SpanWithPreconditioning,
  SpanWithAklToussaint,
  MemoryPoolWithPreconditioning,
  MemoryPoolWithAklToussaint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputAnalysis {
  /// Every coordinate is integral and fits in an `i32`.
  pub is_integer: bool,
  pub size_class: SizeClass,
  /// Larger side of the axis-aligned bounding box.
  pub bounding_box_size: f64,
  pub point_count: usize,
  pub recommended_strategy: ProcessingStrategy,
  /// Expected fraction of points a preconditioning pass would discard.
  pub estimated_reduction: f64,
}

/// $O(n)$ Summarise `pts`.
///
/// ```rust
/// # use adaptive_hull::analysis::{analyze, ProcessingStrategy, SizeClass};
/// # use adaptive_hull::data::Point;
/// let analysis = analyze(&[Point::new(1., 2.), Point::new(5., 10.), Point::new(-3., 7.)]);
/// assert!(analysis.is_integer);
/// assert_eq!(analysis.size_class, SizeClass::Small);
/// assert_eq!(analysis.bounding_box_size, 8.);
/// assert_eq!(analysis.recommended_strategy, ProcessingStrategy::JarvisMarch);
/// ```
pub fn analyze(pts: &[Point]) -> InputAnalysis {
  if pts.is_empty() {
    return InputAnalysis {
      is_integer: false,
      size_class: SizeClass::Empty,
      bounding_box_size: 0.,
      point_count: 0,
      recommended_strategy: ProcessingStrategy::JarvisMarch,
      estimated_reduction: 0.,
    };
  }

  let is_integer = pts
    .iter()
    .all(|pt| is_i32_integral(pt.x) && is_i32_integral(pt.y));

  let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
  let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
  for pt in pts {
    min_x = min_x.min(pt.x);
    max_x = max_x.max(pt.x);
    min_y = min_y.min(pt.y);
    max_y = max_y.max(pt.y);
  }

  let n = pts.len();
  InputAnalysis {
    is_integer,
    size_class: SizeClass::of(n),
    bounding_box_size: (max_x - min_x).max(max_y - min_y),
    point_count: n,
    recommended_strategy: recommend_strategy(n, is_integer),
    estimated_reduction: estimate_reduction(n, is_integer),
  }
}

pub fn recommend_strategy(n: usize, is_integer: bool) -> ProcessingStrategy {
  use ProcessingStrategy::*;
  match (n, is_integer) {
    (0..=50, _) => JarvisMarch,
    (51..=100, true) => ListWithPreconditioning,
    (51..=100, false) => ListWithAklToussaint,
    (101..=50_000, true) => SpanWithPreconditioning,
    (101..=50_000, false) => SpanWithAklToussaint,
    (_, true) => MemoryPoolWithPreconditioning,
    (_, false) => MemoryPoolWithAklToussaint,
  }
}

pub fn estimate_reduction(n: usize, is_integer: bool) -> f64 {
  if n <= 50 {
    return 0.;
  }
  match (is_integer, n) {
    (true, 1_001..) => 0.95,
    (true, _) => 0.90,
    (false, 10_001..) => 0.92,
    (false, _) => 0.85,
  }
}

fn is_i32_integral(v: f64) -> bool {
  v.fract() == 0. && v.to_i32().is_some()
}
