//! Runtime type tags.

use std::fmt;

/// The runtime type of a [`Value`](crate::Value).
///
/// Primitive descriptors check against this tag, and mismatch reports carry
/// it alongside the received value. There is no subtype relation between
/// tags: a value satisfies a primitive check iff the tags are equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RuntimeType {
    /// The none (null) value.
    None,
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit IEEE 754 float.
    Float,
    /// UTF-8 string.
    Str,
    /// Ordered, indexable collection.
    List,
    /// Fixed-arity ordered collection.
    Tuple,
    /// Key-unique associative collection.
    Map,
    /// Element-unique unordered collection.
    Set,
}

impl RuntimeType {
    /// Stable lowercase name, as rendered in descriptors and reports.
    pub fn name(self) -> &'static str {
        match self {
            RuntimeType::None => "none",
            RuntimeType::Bool => "bool",
            RuntimeType::Int => "int",
            RuntimeType::Float => "float",
            RuntimeType::Str => "str",
            RuntimeType::List => "list",
            RuntimeType::Tuple => "tuple",
            RuntimeType::Map => "map",
            RuntimeType::Set => "set",
        }
    }
}

impl fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
