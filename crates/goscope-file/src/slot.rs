//! Stamp-tagged memoization slot.
//!
//! A [`ViewSlot`] holds at most one value together with the
//! [`ModificationStamp`] it was computed under. Reads take a shared lock and
//! never block each other. The value itself is computed outside any lock, so
//! two threads that miss at the same time may both compute; whichever stores
//! first for a given stamp wins and the other adopts its result. A value
//! computed under an older stamp never replaces a newer one.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::snapshot::ModificationStamp;

struct Cached<T> {
    stamp: ModificationStamp,
    value: Arc<T>,
}

/// A lazily computed value, recomputed whenever the owner's stamp moves.
pub struct ViewSlot<T> {
    cell: RwLock<Option<Cached<T>>>,
}

impl<T> ViewSlot<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            cell: RwLock::new(None),
        }
    }

    /// The cached value, if it was computed under `stamp`.
    pub fn get(&self, stamp: ModificationStamp) -> Option<Arc<T>> {
        self.cell
            .read()
            .as_ref()
            .filter(|cached| cached.stamp == stamp)
            .map(|cached| Arc::clone(&cached.value))
    }

    /// Return the value for `stamp`, computing it with `compute` on a miss.
    pub fn get_or_compute(&self, stamp: ModificationStamp, compute: impl FnOnce() -> T) -> Arc<T> {
        if let Some(value) = self.get(stamp) {
            return value;
        }
        self.store(stamp, compute())
    }

    /// Store `value` as computed under `stamp` and return the value the slot
    /// now answers with for that stamp.
    pub fn store(&self, stamp: ModificationStamp, value: T) -> Arc<T> {
        let mut cell = self.cell.write();
        match cell.as_ref() {
            Some(cached) if cached.stamp == stamp => return Arc::clone(&cached.value),
            Some(cached) if cached.stamp > stamp => return Arc::new(value),
            _ => {}
        }
        let value = Arc::new(value);
        *cell = Some(Cached {
            stamp,
            value: Arc::clone(&value),
        });
        value
    }

    /// Stamp of the cached value, if any.
    pub fn cached_stamp(&self) -> Option<ModificationStamp> {
        self.cell.read().as_ref().map(|cached| cached.stamp)
    }
}

impl<T> Default for ViewSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ViewSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewSlot")
            .field("stamp", &self.cached_stamp())
            .finish()
    }
}
