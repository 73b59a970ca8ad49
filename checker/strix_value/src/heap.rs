//! Heap wrapper for shared, immutable collection payloads.
//!
//! `Heap<T>` wraps `Arc<T>` and is the only way to allocate heap payloads
//! in the value system. The constructor is `pub(crate)`, so external code
//! must go through the factory methods on `Value`, which keeps the
//! construction invariants (key and element uniqueness) in one place.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A heap-allocated, immutable value payload.
///
/// Cloning is a reference-count bump. There is no mutable access: once a
/// payload is behind a `Heap`, it never changes.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    /// Crate-private constructor; external code uses `Value` factories.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> AsRef<T> for Heap<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        // Same allocation compares equal without walking the payload.
        Arc::ptr_eq(&self.0, &other.0) || *self.0 == *other.0
    }
}

impl<T: ?Sized + Eq> Eq for Heap<T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_shares_allocation() {
        let a = Heap::new(vec![1, 2, 3]);
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.0, &b.0));
        assert_eq!(a, b);
    }

    #[test]
    fn equality_is_structural() {
        let a = Heap::new(String::from("strix"));
        let b = Heap::new(String::from("strix"));
        assert_eq!(a, b);
    }
}
