use crate::config::{ALGORITHM_SWITCH, BUFFERED_THRESHOLD, PARALLEL_THRESHOLD, POOL_THRESHOLD};
use crate::Error;

/// Algorithm and resource strategy for one hull computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
  /// Gift wrapping. $O(nh)$, only for tiny inputs.
  Wrapping,
  /// QuickHull directly over the caller's points.
  SequentialDivide,
  /// QuickHull over a contiguous copy of the points.
  SequentialDivideBuffered,
  /// Per-block QuickHull on the worker pool, then one QuickHull over the
  /// merged partial hulls.
  ParallelDivide,
  /// [`Tier::ParallelDivide`] over a buffer rented from the scratch pool.
  PooledParallelDivide,
}

impl Tier {
  /// Tier for `n` points under the default thresholds.
  ///
  /// ```rust
  /// # use adaptive_hull::Tier;
  /// assert_eq!(Tier::select(0), Tier::Wrapping);
  /// assert_eq!(Tier::select(75), Tier::SequentialDivide);
  /// assert_eq!(Tier::select(500), Tier::SequentialDivideBuffered);
  /// assert_eq!(Tier::select(5_000), Tier::ParallelDivide);
  /// assert_eq!(Tier::select(65_000), Tier::PooledParallelDivide);
  /// ```
  pub fn select(n: usize) -> Tier {
    Thresholds::default().select(n)
  }

  pub fn is_parallel(self) -> bool {
    matches!(self, Tier::ParallelDivide | Tier::PooledParallelDivide)
  }
}

/// Lower bounds (inclusive) of every tier after [`Tier::Wrapping`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
  pub wrapping: usize,
  pub buffered: usize,
  pub parallel: usize,
  pub pooled: usize,
}

impl Default for Thresholds {
  fn default() -> Self {
    Thresholds {
      wrapping: ALGORITHM_SWITCH,
      buffered: BUFFERED_THRESHOLD,
      parallel: PARALLEL_THRESHOLD,
      pooled: POOL_THRESHOLD,
    }
  }
}

impl Thresholds {
  /// Pure and total: every `n` maps to exactly one tier.
  pub fn select(&self, n: usize) -> Tier {
    if n < self.wrapping {
      Tier::Wrapping
    } else if n < self.buffered {
      Tier::SequentialDivide
    } else if n < self.parallel {
      Tier::SequentialDivideBuffered
    } else if n < self.pooled {
      Tier::ParallelDivide
    } else {
      Tier::PooledParallelDivide
    }
  }

  pub fn validate(&self) -> Result<(), Error> {
    let ordered = self.wrapping <= self.buffered
      && self.buffered <= self.parallel
      && self.parallel <= self.pooled;
    if ordered {
      Ok(())
    } else {
      Err(Error::InvalidConfig(format!(
        "tier thresholds must be non-decreasing: {:?}",
        self
      )))
    }
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn boundaries() {
    assert_eq!(Tier::select(0), Tier::Wrapping);
    assert_eq!(Tier::select(49), Tier::Wrapping);
    assert_eq!(Tier::select(50), Tier::SequentialDivide);
    assert_eq!(Tier::select(99), Tier::SequentialDivide);
    assert_eq!(Tier::select(100), Tier::SequentialDivideBuffered);
    assert_eq!(Tier::select(999), Tier::SequentialDivideBuffered);
    assert_eq!(Tier::select(1_000), Tier::ParallelDivide);
    assert_eq!(Tier::select(49_999), Tier::ParallelDivide);
    assert_eq!(Tier::select(50_000), Tier::PooledParallelDivide);
    assert_eq!(Tier::select(usize::MAX), Tier::PooledParallelDivide);
  }

  #[test]
  fn custom_thresholds() {
    let thresholds = Thresholds {
      wrapping: 3,
      buffered: 3,
      parallel: 10,
      pooled: 20,
    };
    assert_eq!(thresholds.select(2), Tier::Wrapping);
    // An empty range skips its tier.
    assert_eq!(thresholds.select(3), Tier::SequentialDivideBuffered);
    assert_eq!(thresholds.select(19), Tier::ParallelDivide);
    assert_eq!(thresholds.select(20), Tier::PooledParallelDivide);
  }

  #[test]
  fn parallel_tiers() {
    assert!(!Tier::SequentialDivideBuffered.is_parallel());
    assert!(Tier::ParallelDivide.is_parallel());
    assert!(Tier::PooledParallelDivide.is_parallel());
  }

  #[proptest]
  fn select_monotone_prop(a: usize, b: usize) {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    prop_assert!(Tier::select(lo) <= Tier::select(hi));
  }
}
