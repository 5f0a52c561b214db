//! Block-parallel QuickHull.
//!
//! The input is cut into contiguous blocks, one per worker. Each block is
//! hulled independently on a bounded [`rayon`] pool, the partial hulls are
//! concatenated in block order with exact duplicates removed, and a final
//! sequential QuickHull over the survivors yields the hull.
//!
//! Every input vertex of the true hull is a vertex of its block's hull, so
//! the final pass sees all of them.

use std::any::Any;
use std::collections::HashSet;
use std::ops::Range;
use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use tracing::{debug, trace, warn};

use super::quickhull;
use crate::data::{Hull, Point};
use crate::{CancelToken, Error};

pub use rayon::ThreadPool;

/// Start a bounded worker pool with `threads` threads.
///
/// # Errors
/// [`Error::WorkerPool`] if the threads cannot be spawned.
pub fn worker_pool(threads: usize) -> Result<ThreadPool, Error> {
  rayon::ThreadPoolBuilder::new()
    .num_threads(threads)
    .thread_name(|i| format!("hull-worker-{}", i))
    .build()
    .map_err(|err| Error::WorkerPool(err.to_string()))
}

/// Convex hull of `pts`, computed in blocks on `workers`.
///
/// The result is identical to [`quickhull::convex_hull`] when the predicates
/// are exact.
///
/// # Errors
/// * [`Error::TaskFailure`] if hulling a block panics. The first failure
///   observed is reported and the other results are discarded.
/// * [`Error::Cancelled`] if `cancel` fires before the merge completes.
///
/// # Examples
///
/// ```rust
/// # use adaptive_hull::algorithms::convex_hull::parallel::{convex_hull, worker_pool};
/// # use adaptive_hull::{data::Point, CancelToken};
/// let workers = worker_pool(2).unwrap();
/// let pts: Vec<Point> = (0..10)
///   .flat_map(|x| (0..10).map(move |y| Point::new(f64::from(x), f64::from(y))))
///   .collect();
/// let hull = convex_hull(&pts, &workers, &CancelToken::new()).unwrap();
/// assert_eq!(
///   hull.points(),
///   &[
///     Point::new(0., 0.),
///     Point::new(9., 0.),
///     Point::new(9., 9.),
///     Point::new(0., 9.),
///   ]
/// );
/// ```
pub fn convex_hull(
  pts: &[Point],
  workers: &ThreadPool,
  cancel: &CancelToken,
) -> Result<Hull, Error> {
  run_blocks(pts, workers, cancel, |block| {
    quickhull::convex_hull_cancellable(block, cancel)
  })
}

fn run_blocks<F>(
  pts: &[Point],
  workers: &ThreadPool,
  cancel: &CancelToken,
  block_hull: F,
) -> Result<Hull, Error>
where
  F: Fn(&[Point]) -> Result<Hull, Error> + Sync,
{
  if pts.len() < 3 {
    return Ok(Hull::new_unchecked(pts.to_vec()));
  }
  let blocks = block_ranges(pts.len(), workers.current_num_threads());
  debug!(
    points = pts.len(),
    blocks = blocks.len(),
    "dispatching hull blocks"
  );

  let partials = workers.install(|| {
    blocks
      .par_iter()
      .enumerate()
      .map(|(block, range)| {
        cancel.check()?;
        hull_block(block, &pts[range.clone()], &block_hull)
      })
      .collect::<Result<Vec<Hull>, Error>>()
  })?;

  let mut candidates = merge_partials(partials);
  trace!(candidates = candidates.len(), "merging partial hulls");
  cancel.check()?;
  if candidates.len() < 3 {
    // A single point or a segment, ordered the way QuickHull orders them.
    candidates.sort_by(|a, b| a.cmp_xy(b));
    return Ok(Hull::new_unchecked(candidates));
  }
  quickhull::convex_hull_cancellable(&candidates, cancel)
}

fn hull_block<F>(block: usize, pts: &[Point], block_hull: &F) -> Result<Hull, Error>
where
  F: Fn(&[Point]) -> Result<Hull, Error>,
{
  match panic::catch_unwind(AssertUnwindSafe(|| block_hull(pts))) {
    Ok(result) => result,
    Err(payload) => {
      let message = panic_message(payload.as_ref());
      warn!(block, %message, "hull block panicked");
      Err(Error::TaskFailure { block, message })
    }
  }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
  if let Some(msg) = payload.downcast_ref::<&str>() {
    (*msg).to_string()
  } else if let Some(msg) = payload.downcast_ref::<String>() {
    msg.clone()
  } else {
    "unknown panic".to_string()
  }
}

// K = min(workers, n) contiguous blocks of n/K points. The last block takes
// the remainder. No blocks for an empty input.
fn block_ranges(n: usize, workers: usize) -> Vec<Range<usize>> {
  let k = workers.max(1).min(n);
  if k == 0 {
    return Vec::new();
  }
  let size = n / k;
  (0..k)
    .map(|i| {
      let start = i * size;
      let end = if i + 1 == k { n } else { start + size };
      start..end
    })
    .collect()
}

// Concatenate in block order. Exact duplicates keep their first occurrence.
fn merge_partials(partials: Vec<Hull>) -> Vec<Point> {
  let total = partials.iter().map(Hull::len).sum();
  let mut seen = HashSet::with_capacity(total);
  let mut merged = Vec::with_capacity(total);
  for pt in partials.into_iter().flatten() {
    if seen.insert(pt.key()) {
      merged.push(pt);
    }
  }
  merged
}
