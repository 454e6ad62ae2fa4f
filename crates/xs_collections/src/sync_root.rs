use core::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A lock object associated with one wrapped collection.
///
/// Callers that need to coordinate access to a collection across threads
/// lock its `SyncRoot`; the wrapper itself never does. Every root carries a
/// process-wide unique [`id`](Self::id).
#[derive(Debug)]
pub struct SyncRoot {
    id: u64,
    lock: Mutex<()>,
}

impl SyncRoot {
    pub(crate) fn new() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            lock: Mutex::new(()),
        }
    }

    #[inline]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Blocks until the root is acquired.
    pub fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
