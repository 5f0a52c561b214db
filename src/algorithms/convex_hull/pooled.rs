//! Block-parallel QuickHull over a buffer rented from a [`ScratchPool`].
//!
//! Huge inputs are staged in a reused buffer so repeated calls do not pay
//! for a fresh allocation each time. The buffer goes back to the pool on
//! every exit path, errors and panics included.

use super::parallel::{self, ThreadPool};
use crate::data::{Hull, Point};
use crate::pool::ScratchPool;
use crate::{CancelToken, Error};

/// Copy `pts` into a rented buffer and run `f` over the copy.
///
/// # Errors
/// [`Error::ResourceExhaustion`] if the pool cannot supply `pts.len()`
/// points, otherwise whatever `f` returns.
pub fn with_scratch<R, F>(pts: &[Point], pool: &ScratchPool, f: F) -> Result<R, Error>
where
  F: FnOnce(&[Point]) -> Result<R, Error>,
{
  let mut staged = pool.rent(pts.len())?;
  staged.extend_from_slice(pts);
  f(&staged)
}

/// [`parallel::convex_hull`] over a pooled copy of `pts`.
///
/// # Errors
/// See [`with_scratch`] and [`parallel::convex_hull`].
pub fn convex_hull(
  pts: &[Point],
  pool: &ScratchPool,
  workers: &ThreadPool,
  cancel: &CancelToken,
) -> Result<Hull, Error> {
  with_scratch(pts, pool, |staged| {
    parallel::convex_hull(staged, workers, cancel)
  })
}
