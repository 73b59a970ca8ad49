//! The descriptor grammar.

use std::fmt;

use strix_value::RuntimeType;

/// An immutable description of an expected runtime shape.
///
/// Compound variants own their children (`Box` / boxed slices), so a
/// descriptor is a self-contained tree. Structural equality and hashing
/// are derived; they are what make descriptors usable as cache keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// Matches any value, including none.
    Any,
    /// Matches values whose runtime type tag equals the given tag.
    Primitive(RuntimeType),
    /// Matches if any option matches, tried in declared order.
    Union(Box<[TypeDescriptor]>),
    /// A list whose every element matches the element descriptor.
    Sequence(Box<TypeDescriptor>),
    /// A map whose every key and value match the respective descriptors.
    Mapping {
        /// Descriptor every key must satisfy.
        key: Box<TypeDescriptor>,
        /// Descriptor every value must satisfy.
        value: Box<TypeDescriptor>,
    },
    /// A tuple of exactly this arity, checked position by position.
    Tuple(Box<[TypeDescriptor]>),
    /// A tuple of any arity whose every element matches one descriptor.
    TupleVariadic(Box<TypeDescriptor>),
    /// A set whose every element matches the element descriptor.
    Set(Box<TypeDescriptor>),
    /// An annotation form the descriptor-building layer could not
    /// decompose. Always fails classification; carries the original
    /// spelling for the error message.
    Opaque(Box<str>),
}

impl TypeDescriptor {
    /// Primitive descriptor for a runtime type tag.
    pub fn primitive(tag: RuntimeType) -> Self {
        TypeDescriptor::Primitive(tag)
    }

    /// Union over the given options, in order.
    pub fn union(options: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        TypeDescriptor::Union(options.into_iter().collect())
    }

    /// Shorthand for `inner | none`.
    pub fn optional(inner: TypeDescriptor) -> Self {
        TypeDescriptor::union([inner, TypeDescriptor::Primitive(RuntimeType::None)])
    }

    /// Homogeneous sequence descriptor.
    pub fn sequence(element: TypeDescriptor) -> Self {
        TypeDescriptor::Sequence(Box::new(element))
    }

    /// Mapping descriptor.
    pub fn mapping(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        TypeDescriptor::Mapping {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Fixed-arity tuple descriptor.
    pub fn tuple(items: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        TypeDescriptor::Tuple(items.into_iter().collect())
    }

    /// Variadic tuple descriptor.
    pub fn variadic(element: TypeDescriptor) -> Self {
        TypeDescriptor::TupleVariadic(Box::new(element))
    }

    /// Set descriptor.
    pub fn set(element: TypeDescriptor) -> Self {
        TypeDescriptor::Set(Box::new(element))
    }

    /// Opaque descriptor carrying the unrecognized annotation spelling.
    pub fn opaque(spelling: impl Into<Box<str>>) -> Self {
        TypeDescriptor::Opaque(spelling.into())
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Any => f.write_str("any"),
            TypeDescriptor::Primitive(tag) => write!(f, "{tag}"),
            TypeDescriptor::Union(options) => {
                if options.is_empty() {
                    // A union of zero options matches nothing.
                    return f.write_str("never");
                }
                for (i, option) in options.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{option}")?;
                }
                Ok(())
            }
            TypeDescriptor::Sequence(element) => write!(f, "[{element}]"),
            TypeDescriptor::Mapping { key, value } => write!(f, "{{{key}: {value}}}"),
            TypeDescriptor::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            TypeDescriptor::TupleVariadic(element) => write!(f, "({element}, ..)"),
            TypeDescriptor::Set(element) => write!(f, "{{{element}}}"),
            TypeDescriptor::Opaque(spelling) => f.write_str(spelling),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_rendering() {
        assert_eq!(TypeDescriptor::Any.to_string(), "any");
        assert_eq!(
            TypeDescriptor::primitive(RuntimeType::Int).to_string(),
            "int"
        );
        assert_eq!(
            TypeDescriptor::optional(TypeDescriptor::primitive(RuntimeType::Int)).to_string(),
            "int | none"
        );
        assert_eq!(
            TypeDescriptor::sequence(TypeDescriptor::primitive(RuntimeType::Str)).to_string(),
            "[str]"
        );
        assert_eq!(
            TypeDescriptor::mapping(
                TypeDescriptor::primitive(RuntimeType::Str),
                TypeDescriptor::primitive(RuntimeType::Int),
            )
            .to_string(),
            "{str: int}"
        );
        assert_eq!(
            TypeDescriptor::tuple([
                TypeDescriptor::primitive(RuntimeType::Int),
                TypeDescriptor::primitive(RuntimeType::Str),
            ])
            .to_string(),
            "(int, str)"
        );
        assert_eq!(
            TypeDescriptor::tuple([TypeDescriptor::primitive(RuntimeType::Int)]).to_string(),
            "(int,)"
        );
        assert_eq!(
            TypeDescriptor::variadic(TypeDescriptor::primitive(RuntimeType::Int)).to_string(),
            "(int, ..)"
        );
        assert_eq!(
            TypeDescriptor::set(TypeDescriptor::primitive(RuntimeType::Int)).to_string(),
            "{int}"
        );
        assert_eq!(TypeDescriptor::union([]).to_string(), "never");
        assert_eq!(
            TypeDescriptor::opaque("Callable[int, str]").to_string(),
            "Callable[int, str]"
        );
    }

    #[test]
    fn structural_equality() {
        let a = TypeDescriptor::sequence(TypeDescriptor::optional(TypeDescriptor::primitive(
            RuntimeType::Int,
        )));
        let b = TypeDescriptor::sequence(TypeDescriptor::optional(TypeDescriptor::primitive(
            RuntimeType::Int,
        )));
        assert_eq!(a, b);
        assert_ne!(
            a,
            TypeDescriptor::sequence(TypeDescriptor::primitive(RuntimeType::Int))
        );
    }
}
