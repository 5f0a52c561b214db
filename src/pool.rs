//! Reusable scratch buffers for very large inputs.
//!
//! A [`ScratchPool`] is an ordinary value. Engines share one through an
//! `Arc`, and tests build their own, so nothing leaks between callers that
//! were not handed the same pool.

use std::mem;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::trace;

use crate::config::HullConfig;
use crate::data::Point;
use crate::Error;

#[derive(Debug)]
pub struct ScratchPool {
  idle: Mutex<Vec<Vec<Point>>>,
  max_capacity: usize,
  max_retained: usize,
  outstanding: AtomicUsize,
}

impl ScratchPool {
  pub fn new(max_capacity: usize, max_retained: usize) -> ScratchPool {
    ScratchPool {
      idle: Mutex::new(Vec::new()),
      max_capacity,
      max_retained,
      outstanding: AtomicUsize::new(0),
    }
  }

  pub fn from_config(config: &HullConfig) -> ScratchPool {
    ScratchPool::new(config.pool_max_capacity, config.pool_max_retained)
  }

  pub fn max_capacity(&self) -> usize {
    self.max_capacity
  }

  /// Idle buffers kept for reuse. Extra returns are dropped.
  pub fn max_retained(&self) -> usize {
    self.max_retained
  }

  /// Rent an empty buffer that can hold at least `capacity` points without
  /// reallocating. The buffer goes back to the pool, cleared, when the
  /// returned guard is dropped.
  ///
  /// # Errors
  /// [`Error::ResourceExhaustion`] if `capacity` exceeds the pool limit or the
  /// allocator cannot reserve it. There is no unbounded fallback.
  pub fn rent(&self, capacity: usize) -> Result<ScratchBuffer<'_>, Error> {
    let exhausted = || Error::ResourceExhaustion {
      requested: capacity,
      limit: self.max_capacity,
    };
    if capacity > self.max_capacity {
      return Err(exhausted());
    }
    let reused = {
      let mut idle = self.lock();
      idle
        .iter()
        .position(|buf| buf.capacity() >= capacity)
        .map(|i| idle.swap_remove(i))
    };
    let buf = match reused {
      Some(buf) => buf,
      None => {
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity).map_err(|_| exhausted())?;
        buf
      }
    };
    self.outstanding.fetch_add(1, Ordering::Relaxed);
    trace!(capacity, allocated = buf.capacity(), "rented scratch buffer");
    Ok(ScratchBuffer { pool: self, buf })
  }

  /// Buffers currently rented out.
  pub fn outstanding(&self) -> usize {
    self.outstanding.load(Ordering::Relaxed)
  }

  /// Buffers waiting to be reused.
  pub fn idle(&self) -> usize {
    self.lock().len()
  }

  fn give_back(&self, mut buf: Vec<Point>) {
    buf.clear();
    self.outstanding.fetch_sub(1, Ordering::Relaxed);
    let mut idle = self.lock();
    if idle.len() < self.max_retained {
      trace!(allocated = buf.capacity(), "returned scratch buffer");
      idle.push(buf);
    }
  }

  // The idle list holds plain empty vectors, so a panic while it was locked
  // cannot leave it inconsistent.
  fn lock(&self) -> MutexGuard<'_, Vec<Vec<Point>>> {
    self.idle.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

/// A buffer rented from a [`ScratchPool`]. Returned exactly once, on drop.
#[derive(Debug)]
pub struct ScratchBuffer<'a> {
  pool: &'a ScratchPool,
  buf: Vec<Point>,
}

impl Deref for ScratchBuffer<'_> {
  type Target = Vec<Point>;
  fn deref(&self) -> &Vec<Point> {
    &self.buf
  }
}

impl DerefMut for ScratchBuffer<'_> {
  fn deref_mut(&mut self) -> &mut Vec<Point> {
    &mut self.buf
  }
}

impl Drop for ScratchBuffer<'_> {
  fn drop(&mut self) {
    self.pool.give_back(mem::take(&mut self.buf));
  }
}
