use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::Error;

/// Shared flag that aborts in-flight hull computations.
///
/// Clones observe the same flag. Engines check it when dispatching blocks and
/// every time QuickHull expands an edge, so even adversarial inputs stop
/// promptly.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
  pub fn new() -> CancelToken {
    CancelToken::default()
  }

  pub fn cancel(&self) {
    self.0.store(true, Ordering::Relaxed);
  }

  /// Clear the flag so the token can guard another computation.
  pub fn reset(&self) {
    self.0.store(false, Ordering::Relaxed);
  }

  pub fn is_cancelled(&self) -> bool {
    self.0.load(Ordering::Relaxed)
  }

  pub(crate) fn check(&self) -> Result<(), Error> {
    if self.is_cancelled() {
      Err(Error::Cancelled)
    } else {
      Ok(())
    }
  }
}
