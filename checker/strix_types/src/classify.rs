//! Descriptor classification and the process-lifetime memo cache.
//!
//! Classification decomposes a descriptor into its [`Shape`] tag and its
//! immediate children. The decomposition is pure and constant per
//! descriptor, so the [`Classifier`] memoizes it: first classification
//! computes and inserts, every later classification of a structurally
//! equal descriptor is a cache hit.
//!
//! # Concurrency
//!
//! The cache is an `RwLock` around an `FxHashMap`. The guard is scoped
//! strictly to the read or insert itself and is never held across the
//! recursive validation that triggered the lookup, so concurrent
//! validations of unrelated values do not serialize on each other.
//! Racing first classifications resolve first-writer-wins.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::descriptor::TypeDescriptor;
use crate::shape::Shape;

/// Classification failed: the descriptor shape is not recognized.
///
/// This is a configuration error on the caller's side, never a property
/// of the checked value, and is always surfaced: an unrecognized
/// descriptor must not silently accept everything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported descriptor `{descriptor}`")]
pub struct UnsupportedDescriptor {
    /// The descriptor that could not be classified.
    pub descriptor: TypeDescriptor,
}

/// A descriptor's decomposed form: shape tag plus immediate children.
///
/// Children are behind an `Arc` slice, so cloning a classification out of
/// the cache is cheap. Child order is meaningful: union options and tuple
/// positions keep their declared order, and a mapping's children are the
/// key descriptor followed by the value descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    shape: Shape,
    children: Arc<[TypeDescriptor]>,
}

impl Classification {
    /// The structural rule this descriptor is checked by.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// The descriptor's immediate sub-descriptors.
    pub fn children(&self) -> &[TypeDescriptor] {
        &self.children
    }
}

fn decompose(descriptor: &TypeDescriptor) -> Result<Classification, UnsupportedDescriptor> {
    let (shape, children): (Shape, Vec<TypeDescriptor>) = match descriptor {
        TypeDescriptor::Any => (Shape::Any, Vec::new()),
        TypeDescriptor::Primitive(tag) => (Shape::Primitive(*tag), Vec::new()),
        TypeDescriptor::Union(options) => (Shape::Union, options.to_vec()),
        TypeDescriptor::Sequence(element) => (Shape::Sequence, vec![(**element).clone()]),
        TypeDescriptor::Mapping { key, value } => {
            (Shape::Mapping, vec![(**key).clone(), (**value).clone()])
        }
        TypeDescriptor::Tuple(items) => (Shape::Tuple, items.to_vec()),
        TypeDescriptor::TupleVariadic(element) => {
            (Shape::TupleVariadic, vec![(**element).clone()])
        }
        TypeDescriptor::Set(element) => (Shape::Set, vec![(**element).clone()]),
        TypeDescriptor::Opaque(_) => {
            return Err(UnsupportedDescriptor {
                descriptor: descriptor.clone(),
            })
        }
    };
    Ok(Classification {
        shape,
        children: children.into(),
    })
}

/// Cache counters, for observing memoization from tests and diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that computed a fresh classification.
    pub misses: u64,
    /// Distinct descriptors currently cached.
    pub entries: usize,
}

/// Memoizing descriptor classifier.
///
/// Lives for the process lifetime (or the lifetime of whichever `Checker`
/// owns it); entries are never invalidated, since classification of an
/// immutable descriptor cannot change. Failed classifications are not
/// cached; they are cheap to recompute and must surface every time.
pub struct Classifier {
    cache: RwLock<FxHashMap<TypeDescriptor, Classification>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Classifier {
    /// Create an empty classifier.
    pub fn new() -> Self {
        Classifier {
            cache: RwLock::new(FxHashMap::default()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Classify a descriptor, memoizing the result.
    pub fn classify(
        &self,
        descriptor: &TypeDescriptor,
    ) -> Result<Classification, UnsupportedDescriptor> {
        if let Some(found) = self.cache.read().get(descriptor) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(found.clone());
        }

        // Decompose outside the lock; hold the write guard only for the
        // insert. If another thread classified the same descriptor in the
        // meantime, its entry wins and ours is dropped.
        let computed = decompose(descriptor)?;
        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(shape = %computed.shape(), "descriptor classified");

        let mut cache = self.cache.write();
        let entry = cache
            .entry(descriptor.clone())
            .or_insert(computed);
        Ok(entry.clone())
    }

    /// Current cache counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.read().len(),
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::new()
    }
}
