// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Adaptive convex hulls of finite 2D point sets.
//!
//! The hull of a point sequence is computed by one of several engines,
//! chosen per call from the number of input points:
//!
//! | points        | [`Tier`]                          | engine                                   |
//! |---------------|-----------------------------------|------------------------------------------|
//! | < 50          | [`Tier::Wrapping`]                | gift wrapping                            |
//! | 50 – 99       | [`Tier::SequentialDivide`]        | QuickHull                                |
//! | 100 – 999     | [`Tier::SequentialDivideBuffered`]| QuickHull over a contiguous copy         |
//! | 1000 – 49999  | [`Tier::ParallelDivide`]          | per-block QuickHull, then re-merge       |
//! | ≥ 50000       | [`Tier::PooledParallelDivide`]    | parallel re-merge over a pooled buffer   |
//!
//! Every engine returns the same vertex set for the same input. Hulls are
//! emitted counterclockwise and implicitly closed.
//!
//! ```rust
//! # use adaptive_hull::{convex_hull, data::Point};
//! let hull = convex_hull(&[
//!   Point::new(0., 0.),
//!   Point::new(1., 0.),
//!   Point::new(0., 1.),
//!   Point::new(0.2, 0.2),
//! ])
//! .unwrap();
//! assert_eq!(hull.len(), 3);
//! ```
//!
//! Predicates use plain `f64` cross products. Points are compared by exact
//! coordinates, so two points that differ in the last bit are distinct.
//! Coordinates must be finite and at most [`config::MAX_COORDINATE`] in
//! magnitude, so those products never overflow.

pub mod algorithms;
pub mod analysis;
mod cancel;
pub mod config;
pub mod data;
mod engine;
mod orientation;
pub mod pool;
mod tier;

pub use cancel::CancelToken;
pub use config::HullConfig;
pub use engine::HullEngine;
pub use orientation::{cross, distance_squared, perpendicular_distance, Orientation};
pub use tier::{Thresholds, Tier};

use data::{Hull, Point};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
  /// An input point has a NaN or infinite coordinate.
  #[error("point #{index} has a non-finite coordinate")]
  NonFiniteCoordinate { index: usize },
  /// An input coordinate is so large that orientation tests would overflow.
  /// See [`config::MAX_COORDINATE`].
  #[error("point #{index} has a coordinate beyond ±{limit:e}")]
  CoordinateOutOfRange { index: usize, limit: f64 },
  /// A parallel block failed. Only the first failure is reported.
  #[error("hull block #{block} failed: {message}")]
  TaskFailure { block: usize, message: String },
  /// The scratch pool refused to hand out a buffer of the requested size.
  #[error("scratch pool cannot supply {requested} points (limit {limit})")]
  ResourceExhaustion { requested: usize, limit: usize },
  #[error("invalid configuration: {0}")]
  InvalidConfig(String),
  #[error("worker pool could not be started: {0}")]
  WorkerPool(String),
  #[error("hull computation was cancelled")]
  Cancelled,
  /// Two consecutive hull edges are either colinear or oriented clockwise.
  #[error("convex violation")]
  ConvexViolation,
}

/// Convex hull of a point sequence using a default [`HullEngine`].
///
/// Building an engine starts a worker pool. Callers computing many hulls
/// should keep a [`HullEngine`] around instead.
///
/// # Errors
/// Fails if a coordinate is not finite or exceeds
/// [`config::MAX_COORDINATE`] in magnitude, or if the parallel tiers fail.
pub fn convex_hull(points: &[Point]) -> Result<Hull, Error> {
  HullEngine::new(HullConfig::default())?.compute(points)
}

#[cfg(test)]
pub mod testing;
