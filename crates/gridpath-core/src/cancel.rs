//! Stopping a search from outside it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Stop flag polled by the search loop between expansions.
///
/// Every clone points at one shared flag. Keep a clone in the input handler
/// (or on another thread) and raise it while the search holds the original.
/// Raising never interrupts an expansion in progress.
#[derive(Clone, Debug)]
pub struct CancelToken {
    requested: Arc<AtomicBool>,
}

impl CancelToken {
    /// A lowered token.
    pub fn new() -> Self {
        Self {
            requested: Arc::new(AtomicBool::new(false)),
        }
    }

    /// True once any clone has called [`cancel`](Self::cancel).
    #[inline]
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Relaxed)
    }

    /// Raise the flag for every clone.
    #[inline]
    pub fn cancel(&self) {
        self.requested.store(true, Ordering::Relaxed);
    }

    /// Lower the flag so the token can be reused for another run.
    #[inline]
    pub fn reset(&self) {
        self.requested.store(false, Ordering::Relaxed);
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
