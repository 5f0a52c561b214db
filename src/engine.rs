use std::sync::Arc;

use tracing::debug;

use crate::algorithms::convex_hull::parallel::{self, ThreadPool};
use crate::algorithms::convex_hull::{gift_wrapping, pooled, quickhull};
use crate::config::{HullConfig, MAX_COORDINATE};
use crate::data::{Hull, Point};
use crate::pool::ScratchPool;
use crate::{CancelToken, Error, Tier};

/// Picks a [`Tier`] per call and runs the matching engine.
///
/// The engine owns a bounded worker pool for the parallel tiers and shares
/// a [`ScratchPool`] for the pooled tier. Several engines may share one
/// scratch pool through [`HullEngine::with_pool`].
///
/// ```rust
/// # use adaptive_hull::{data::Point, HullConfig, HullEngine, Tier};
/// let engine = HullEngine::new(HullConfig::default().with_workers(2)).unwrap();
/// let pts: Vec<Point> = (0..2_000)
///   .map(|i| Point::new(f64::from(i % 40), f64::from(i / 40)))
///   .collect();
/// assert_eq!(engine.tier_for(pts.len()), Tier::ParallelDivide);
/// let hull = engine.compute(&pts).unwrap();
/// assert_eq!(hull.len(), 4);
/// ```
#[derive(Debug)]
pub struct HullEngine {
  config: HullConfig,
  pool: Arc<ScratchPool>,
  workers: ThreadPool,
  cancel: CancelToken,
}

impl HullEngine {
  /// # Errors
  /// [`Error::InvalidConfig`] for a rejected configuration and
  /// [`Error::WorkerPool`] if the worker threads cannot be started.
  pub fn new(config: HullConfig) -> Result<HullEngine, Error> {
    let pool = Arc::new(ScratchPool::from_config(&config));
    HullEngine::with_pool(config, pool)
  }

  /// Like [`HullEngine::new`] but stages pooled inputs in `pool`. The pool
  /// keeps its own limits, and the engine's [`config`](HullEngine::config)
  /// reports those in place of the pool fields of `config`.
  ///
  /// # Errors
  /// Same as [`HullEngine::new`].
  pub fn with_pool(mut config: HullConfig, pool: Arc<ScratchPool>) -> Result<HullEngine, Error> {
    config.validate()?;
    config.pool_max_capacity = pool.max_capacity();
    config.pool_max_retained = pool.max_retained();
    let workers = parallel::worker_pool(config.worker_count())?;
    debug!(
      workers = workers.current_num_threads(),
      thresholds = ?config.thresholds,
      "hull engine ready"
    );
    Ok(HullEngine {
      config,
      pool,
      workers,
      cancel: CancelToken::new(),
    })
  }

  /// Replace the cancellation token. Clones of `cancel` abort this engine's
  /// computations.
  #[must_use]
  pub fn with_cancel_token(mut self, cancel: CancelToken) -> HullEngine {
    self.cancel = cancel;
    self
  }

  /// The pool limits in here are the ones the engine's pool enforces.
  pub fn config(&self) -> &HullConfig {
    &self.config
  }

  pub fn pool(&self) -> &Arc<ScratchPool> {
    &self.pool
  }

  pub fn cancel_token(&self) -> &CancelToken {
    &self.cancel
  }

  pub fn tier_for(&self, n: usize) -> Tier {
    self.config.thresholds.select(n)
  }

  /// Convex hull of `pts`, counterclockwise from the lexicographically
  /// smallest vertex. An empty input gives an empty hull.
  ///
  /// # Errors
  /// * [`Error::NonFiniteCoordinate`] if any point has a NaN or infinite
  ///   coordinate, and [`Error::CoordinateOutOfRange`] if one exceeds
  ///   [`MAX_COORDINATE`] in magnitude. Nothing is computed in either case.
  /// * [`Error::Cancelled`] if the engine's token fires.
  /// * [`Error::TaskFailure`] and [`Error::ResourceExhaustion`] from the
  ///   parallel and pooled tiers.
  pub fn compute(&self, pts: &[Point]) -> Result<Hull, Error> {
    self.compute_with(self.tier_for(pts.len()), pts)
  }

  /// Run a specific tier regardless of the input size.
  ///
  /// # Errors
  /// Same as [`HullEngine::compute`].
  pub fn compute_with(&self, tier: Tier, pts: &[Point]) -> Result<Hull, Error> {
    check_input(pts)?;
    self.cancel.check()?;
    debug!(
      points = pts.len(),
      ?tier,
      parallel = tier.is_parallel(),
      "computing convex hull"
    );
    match tier {
      Tier::Wrapping => Ok(gift_wrapping::convex_hull(pts)),
      Tier::SequentialDivide => quickhull::convex_hull_cancellable(pts, &self.cancel),
      Tier::SequentialDivideBuffered => {
        let buffered = pts.to_vec();
        quickhull::convex_hull_cancellable(&buffered, &self.cancel)
      }
      Tier::ParallelDivide => parallel::convex_hull(pts, &self.workers, &self.cancel),
      Tier::PooledParallelDivide => {
        pooled::convex_hull(pts, &self.pool, &self.workers, &self.cancel)
      }
    }
  }
}

// Reports the first offending point.
fn check_input(pts: &[Point]) -> Result<(), Error> {
  for (index, pt) in pts.iter().enumerate() {
    if !pt.is_finite() {
      return Err(Error::NonFiniteCoordinate { index });
    }
    if !pt.is_within(MAX_COORDINATE) {
      return Err(Error::CoordinateOutOfRange {
        index,
        limit: MAX_COORDINATE,
      });
    }
  }
  Ok(())
}
