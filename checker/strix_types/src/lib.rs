//! Descriptor grammar and classification for the Strix checker.
//!
//! A [`TypeDescriptor`] is an immutable, recursively-defined description of
//! an expected runtime shape: a primitive tag, a union of alternatives, a
//! homogeneous sequence, a key/value mapping, a fixed or variadic tuple, a
//! set, or the wildcard that matches anything. Descriptors are built once
//! (by hand, with the constructors, or with the [`desc!`] macro) and never
//! mutated.
//!
//! # Classification
//!
//! The matcher never pattern-matches descriptors directly. It asks the
//! [`Classifier`] for a [`Classification`]: the descriptor's [`Shape`] tag
//! plus its immediate children. Classification of a given descriptor is
//! pure and constant, so the classifier memoizes it in a process-lifetime
//! cache keyed by structural equality (descriptors are `Eq + Hash`).
//!
//! Classification is total over the grammar with one exception:
//! [`TypeDescriptor::Opaque`], the form reserved for annotations the
//! descriptor-building layer could not decompose. Classifying an opaque
//! descriptor is a configuration error and fails closed with
//! [`UnsupportedDescriptor`]; it is never treated as "matches anything".

mod classify;
mod descriptor;
mod macros;
mod shape;

pub use classify::{CacheStats, Classification, Classifier, UnsupportedDescriptor};
pub use descriptor::TypeDescriptor;
pub use shape::Shape;

// Re-exported so `desc!` expansions resolve the tag type via `$crate`.
pub use strix_value::RuntimeType;
