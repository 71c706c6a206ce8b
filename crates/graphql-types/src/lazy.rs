//! Lazy schema thunks (§9 "Lazy schema thunks"): `fields`/`interfaces`/`types`
//! on a type definition may be supplied as an already-computed value or as a
//! zero-argument producer, evaluated on first access and cached. Needed so
//! that mutually recursive types (e.g. `type Query { me: Query }`) can be
//! declared without a forward-declaration pass.

use std::fmt;
use std::sync::OnceLock;

enum Source<T> {
    Producer(Box<dyn Fn() -> T + Send + Sync>),
    Taken,
}

/// A value that is either already known or produced on first access and
/// cached forever after (single-writer-once via [`OnceLock`]).
pub struct Thunk<T> {
    cell: OnceLock<T>,
    source: std::sync::Mutex<Source<T>>,
}

impl<T> Thunk<T> {
    pub fn eager(value: T) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(value);
        Thunk { cell, source: std::sync::Mutex::new(Source::Taken) }
    }

    pub fn lazy<F>(producer: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Thunk {
            cell: OnceLock::new(),
            source: std::sync::Mutex::new(Source::Producer(Box::new(producer))),
        }
    }

    /// Evaluates the producer on first call; subsequent calls return the
    /// cached value without re-invoking it.
    pub fn get(&self) -> &T {
        self.cell.get_or_init(|| {
            let mut guard = self.source.lock().unwrap_or_else(|e| e.into_inner());
            match std::mem::replace(&mut *guard, Source::Taken) {
                Source::Producer(f) => f(),
                Source::Taken => unreachable!("Thunk producer invoked twice"),
            }
        })
    }
}

impl<T: Clone> Clone for Thunk<T> {
    fn clone(&self) -> Self {
        Thunk::eager(self.get().clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for Thunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.get().fmt(f)
    }
}

impl<T: PartialEq> PartialEq for Thunk<T> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T> From<T> for Thunk<T> {
    fn from(value: T) -> Self {
        Thunk::eager(value)
    }
}
