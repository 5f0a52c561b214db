//! # Configuration
//!
//! Default tier boundaries and resource limits, plus the [`HullConfig`]
//! value an engine is built from.

use std::num::NonZeroUsize;

use crate::tier::Thresholds;
use crate::Error;

// =============================================================================
// TIER BOUNDARIES
// =============================================================================

/// Inputs below this size are wrapped (gift wrapping).
pub const ALGORITHM_SWITCH: usize = 50;

/// Inputs from this size on are copied into a contiguous buffer first.
pub const BUFFERED_THRESHOLD: usize = 100;

/// Inputs from this size on are split into blocks and hulled in parallel.
pub const PARALLEL_THRESHOLD: usize = 1_000;

/// Inputs from this size on are staged in a pooled scratch buffer.
pub const POOL_THRESHOLD: usize = 50_000;

// =============================================================================
// INPUT RANGE
// =============================================================================

/// Largest accepted coordinate magnitude, 2^500. Differences of such
/// coordinates stay below 2^501 and their products below 2^1002, so the
/// cross product never overflows to infinity or NaN.
pub const MAX_COORDINATE: f64 = 3.273_390_607_896_141_9e150;

// =============================================================================
// SCRATCH POOL LIMITS
// =============================================================================

/// Largest buffer, in points, the scratch pool will hand out (1 GiB of points).
pub const POOL_MAX_CAPACITY: usize = 1 << 26;

/// Idle buffers kept for reuse. Returned buffers beyond this are freed.
pub const POOL_MAX_RETAINED: usize = 4;

/// Settings for a [`HullEngine`](crate::HullEngine).
///
/// ```rust
/// # use adaptive_hull::HullConfig;
/// let config = HullConfig::default().with_workers(2).with_pool_max_capacity(1 << 20);
/// assert_eq!(config.workers, Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HullConfig {
  pub thresholds: Thresholds,
  /// Worker threads for the parallel tiers. `None` uses the available
  /// hardware concurrency.
  pub workers: Option<usize>,
  pub pool_max_capacity: usize,
  pub pool_max_retained: usize,
}

impl Default for HullConfig {
  fn default() -> Self {
    HullConfig {
      thresholds: Thresholds::default(),
      workers: None,
      pool_max_capacity: POOL_MAX_CAPACITY,
      pool_max_retained: POOL_MAX_RETAINED,
    }
  }
}

impl HullConfig {
  #[must_use]
  pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
    self.thresholds = thresholds;
    self
  }

  #[must_use]
  pub fn with_workers(mut self, workers: usize) -> Self {
    self.workers = Some(workers);
    self
  }

  #[must_use]
  pub fn with_pool_max_capacity(mut self, capacity: usize) -> Self {
    self.pool_max_capacity = capacity;
    self
  }

  #[must_use]
  pub fn with_pool_max_retained(mut self, retained: usize) -> Self {
    self.pool_max_retained = retained;
    self
  }

  /// Number of worker threads the parallel tiers will use.
  pub fn worker_count(&self) -> usize {
    self.workers.unwrap_or_else(|| {
      std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
    })
  }

  /// # Errors
  /// Thresholds must be non-decreasing and the worker count non-zero.
  pub fn validate(&self) -> Result<(), Error> {
    self.thresholds.validate()?;
    if self.workers == Some(0) {
      return Err(Error::InvalidConfig("worker count must be at least 1".into()));
    }
    Ok(())
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;

  use claims::{assert_err, assert_ok};

  #[test]
  fn defaults_are_valid() {
    let config = HullConfig::default();
    assert_ok!(config.validate());
    assert!(config.worker_count() >= 1);
    assert_eq!(config.thresholds.wrapping, ALGORITHM_SWITCH);
    assert_eq!(config.thresholds.pooled, POOL_THRESHOLD);
  }

  #[test]
  fn max_coordinate_is_two_to_the_500() {
    assert_eq!(MAX_COORDINATE, 2f64.powi(500));
    let d = 2. * MAX_COORDINATE;
    assert!((d * d - d * d).is_finite());
    assert!((d * d + d * d).is_finite());
  }

  #[test]
  fn zero_workers_rejected() {
    assert_err!(HullConfig::default().with_workers(0).validate());
    assert_eq!(HullConfig::default().with_workers(3).worker_count(), 3);
  }

  #[test]
  fn unordered_thresholds_rejected() {
    let thresholds = Thresholds {
      wrapping: 10,
      buffered: 5,
      parallel: 20,
      pooled: 30,
    };
    assert_err!(HullConfig::default().with_thresholds(thresholds).validate());
  }
}
