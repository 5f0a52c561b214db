//! Random point clouds for benchmarks and tests.
//!
//! Both generators are deterministic for a seeded `rng`, so a seed fully
//! describes a workload.

use rand::Rng;
use std::f64::consts::PI;

use super::Point;

/// `disc` points uniform in the radius-100 disc around the origin, followed
/// by `outliers` points uniform in `[-200, 200]²`.
///
/// # Examples
///
/// ```rust
/// # use adaptive_hull::data::cloud::disc_with_outliers;
/// # use rand::SeedableRng;
/// let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
/// let pts = disc_with_outliers(100, 10, &mut rng);
/// assert_eq!(pts.len(), 110);
/// ```
pub fn disc_with_outliers<R: Rng + ?Sized>(disc: usize, outliers: usize, rng: &mut R) -> Vec<Point> {
  let mut pts = Vec::with_capacity(disc + outliers);
  for _ in 0..disc {
    let r = 100. * rng.gen::<f64>().sqrt();
    let theta = rng.gen_range(0.0..2. * PI);
    pts.push(Point::new(r * theta.cos(), r * theta.sin()));
  }
  for _ in 0..outliers {
    pts.push(Point::new(
      rng.gen_range(-200.0..=200.0),
      rng.gen_range(-200.0..=200.0),
    ));
  }
  pts
}

/// `n` points with integer coordinates in `-range..=range`.
pub fn integer_cloud<R: Rng + ?Sized>(n: usize, range: i32, rng: &mut R) -> Vec<Point> {
  (0..n)
    .map(|_| {
      Point::new(
        f64::from(rng.gen_range(-range..=range)),
        f64::from(rng.gen_range(-range..=range)),
      )
    })
    .collect()
}
