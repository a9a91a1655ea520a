//! Registry handle for several concurrent clients

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{Registry, RegistryError, Reservation, Vacated};

/// Cloneable handle to one registry
///
/// Every operation holds a single lock for its whole check-then-write, so
/// two clients reserving the same space can never both succeed.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    // Registry mutations are single assignments, so a panicking holder
    // cannot leave a half-written space behind.
    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn reserve(
        &self,
        space: &str,
        date: &str,
        time_slot: &str,
        vehicle_type: &str,
    ) -> Result<Reservation, RegistryError> {
        self.lock().reserve(space, date, time_slot, vehicle_type)
    }

    pub fn vacate(&self, space: &str) -> Result<Vacated, RegistryError> {
        self.lock().vacate(space)
    }

    pub fn status_report(&self) -> Vec<String> {
        self.lock().status_report()
    }

    /// Run `f` with exclusive access to the registry
    pub fn with<R>(&self, f: impl FnOnce(&mut Registry) -> R) -> R {
        f(&mut *self.lock())
    }
}

impl From<Registry> for SharedRegistry {
    fn from(registry: Registry) -> Self {
        Self::new(registry)
    }
}
