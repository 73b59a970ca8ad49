//! The dynamic value enum and its factory methods.

use std::fmt;

use crate::heap::Heap;
use crate::runtime_type::RuntimeType;

/// A dynamically-typed runtime value.
///
/// Scalars are stored inline; collections live behind [`Heap`] handles so
/// cloning a value is cheap regardless of its size. Values are immutable
/// once constructed.
///
/// Floats keep `Value` out of `Eq`/`Hash`, which is why maps and sets are
/// stored as ordered vectors with uniqueness enforced at construction
/// rather than as hashed collections. The stored order doubles as the
/// deterministic iteration order used when checking entries.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The none (null) value.
    None,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    Str(Heap<String>),
    /// Ordered list of values.
    List(Heap<Vec<Value>>),
    /// Fixed-arity tuple of values.
    Tuple(Heap<Vec<Value>>),
    /// Association list of key/value entries. Keys are unique.
    Map(Heap<Vec<(Value, Value)>>),
    /// Collection of unique elements, kept in insertion order.
    Set(Heap<Vec<Value>>),
}

impl Value {
    /// Integer value.
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Floating-point value.
    pub fn float(n: f64) -> Self {
        Value::Float(n)
    }

    /// String value.
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// List value.
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Tuple value.
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Heap::new(items))
    }

    /// Map value. Duplicate keys collapse to the last binding, matching
    /// literal-construction semantics.
    pub fn map(entries: Vec<(Value, Value)>) -> Self {
        let mut unique: Vec<(Value, Value)> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            if let Some(entry) = unique.iter_mut().find(|(existing, _)| *existing == key) {
                entry.1 = value;
            } else {
                unique.push((key, value));
            }
        }
        Value::Map(Heap::new(unique))
    }

    /// Set value. Duplicate elements collapse to the first occurrence.
    pub fn set(items: Vec<Value>) -> Self {
        let mut unique: Vec<Value> = Vec::with_capacity(items.len());
        for item in items {
            if !unique.contains(&item) {
                unique.push(item);
            }
        }
        Value::Set(Heap::new(unique))
    }

    /// The runtime type tag of this value.
    pub fn runtime_type(&self) -> RuntimeType {
        match self {
            Value::None => RuntimeType::None,
            Value::Bool(_) => RuntimeType::Bool,
            Value::Int(_) => RuntimeType::Int,
            Value::Float(_) => RuntimeType::Float,
            Value::Str(_) => RuntimeType::Str,
            Value::List(_) => RuntimeType::List,
            Value::Tuple(_) => RuntimeType::Tuple,
            Value::Map(_) => RuntimeType::Map,
            Value::Set(_) => RuntimeType::Set,
        }
    }

    /// String payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// List elements, if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Tuple elements, if this is a tuple.
    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Map entries, if this is a map.
    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Set elements, if this is a set.
    pub fn as_set(&self) -> Option<&[Value]> {
        match self {
            Value::Set(items) => Some(items),
            _ => None,
        }
    }

    /// Render without string quoting. Used for map-key path segments,
    /// where `value[b]` reads better than `value["b"]`.
    pub fn display_bare(&self) -> String {
        match self {
            Value::Str(s) => (**s).clone(),
            other => other.to_string(),
        }
    }
}

fn fmt_join(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("none"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{:?}", &**s),
            Value::List(items) => {
                f.write_str("[")?;
                fmt_join(f, items)?;
                f.write_str("]")
            }
            Value::Tuple(items) => {
                f.write_str("(")?;
                fmt_join(f, items)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Set(items) => {
                f.write_str("{")?;
                fmt_join(f, items)?;
                f.write_str("}")
            }
        }
    }
}
