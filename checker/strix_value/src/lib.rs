//! Dynamic runtime values for the Strix checker.
//!
//! Checked data enters Strix as a [`Value`]: a small tagged enum with inline
//! scalars and heap-backed collections. Every value knows its
//! [`RuntimeType`], which is what primitive descriptors are checked against
//! and what mismatch reports carry.
//!
//! # Heap Discipline
//!
//! Collection payloads live behind [`Heap<T>`], a shared immutable handle
//! with a crate-private constructor. External code builds heap values
//! through factory methods on `Value` (`Value::str`, `Value::list`,
//! `Value::map`, ...), which also enforce the construction invariants:
//! map keys are unique (last binding wins) and set elements are unique
//! (first occurrence wins).
//!
//! # Thread Safety
//!
//! `Heap<T>` is `Arc`-backed, so values are `Send + Sync` and cloning a
//! value (for example into a mismatch report) is a reference-count bump,
//! not a deep copy.

mod heap;
mod runtime_type;
mod value;

pub use heap::Heap;
pub use runtime_type::RuntimeType;
pub use value::Value;
