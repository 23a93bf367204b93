//! Thread-safe handle that serializes access to one `Library`.

use std::sync::{Arc, Mutex};

use crate::error::{Result, ShelfError};
use crate::Library;

/// Cloneable handle for hosts that call in from several threads.
///
/// Each closure runs with exclusive access, so a command and the
/// recomputation it triggers are never interleaved with another command.
#[derive(Clone)]
pub struct SharedLibrary {
    inner: Arc<Mutex<Library>>,
}

impl SharedLibrary {
    pub fn new(library: Library) -> Self {
        Self {
            inner: Arc::new(Mutex::new(library)),
        }
    }

    /// Run `f` with exclusive access to the library.
    pub fn with<R>(&self, f: impl FnOnce(&mut Library) -> R) -> Result<R> {
        let mut guard = self.inner.lock().map_err(|_| ShelfError::LockPoisoned)?;
        Ok(f(&mut guard))
    }

    /// Like [`with`](Self::with) for closures that can fail themselves.
    pub fn try_with<R>(&self, f: impl FnOnce(&mut Library) -> Result<R>) -> Result<R> {
        self.with(f)?
    }
}

impl From<Library> for SharedLibrary {
    fn from(library: Library) -> Self {
        Self::new(library)
    }
}
