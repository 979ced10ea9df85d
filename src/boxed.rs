//! Minimal generic value wrapper.

use std::ops::Deref;

/// Wraps a single value in an immutable container.
///
/// Useful where an API wants one nameable handle around a value without
/// committing to any further structure. The wrapped value is reachable by
/// reference via [`Boxed::get`] or `Deref`, and recoverable by move via
/// [`Boxed::into_inner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boxed<T> {
    value: T,
}

impl<T> Boxed<T> {
    pub fn new(value: T) -> Self {
        Boxed { value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Boxed<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> From<T> for Boxed<T> {
    fn from(value: T) -> Self {
        Boxed::new(value)
    }
}
