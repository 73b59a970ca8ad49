//! Shape tags produced by classification.

use std::fmt;

use strix_value::RuntimeType;

/// The classifier's tag identifying which structural rule applies to a
/// descriptor.
///
/// `Primitive` carries its runtime type tag so a classification is
/// self-contained: shape plus children is everything the matcher needs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Matches anything; zero children.
    Any,
    /// Runtime type tag check; zero children.
    Primitive(RuntimeType),
    /// Ordered alternatives; N children.
    Union,
    /// Homogeneous list; one child.
    Sequence,
    /// Key/value map; two children (key descriptor, then value).
    Mapping,
    /// Fixed-arity tuple; N children, one per position.
    Tuple,
    /// Any-arity tuple; one child.
    TupleVariadic,
    /// Unique-element set; one child.
    Set,
}

impl Shape {
    /// Stable name for logs and messages.
    pub fn name(self) -> &'static str {
        match self {
            Shape::Any => "any",
            Shape::Primitive(_) => "primitive",
            Shape::Union => "union",
            Shape::Sequence => "sequence",
            Shape::Mapping => "mapping",
            Shape::Tuple => "tuple",
            Shape::TupleVariadic => "variadic tuple",
            Shape::Set => "set",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
