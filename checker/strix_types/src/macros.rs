//! The `desc!` construction macro.

/// Build a [`TypeDescriptor`](crate::TypeDescriptor) tree from a compact
/// type spelling.
///
/// Descriptor trees are meant to be compiled once, at definition time, and
/// reused for every check. This macro is the definition-time spelling:
///
/// ```
/// use strix_types::desc;
///
/// let ids = desc!([int]);                  // sequence of ints
/// let env = desc!({str => (int | none)});  // mapping
/// let pair = desc!((int, str));            // fixed tuple
/// let rest = desc!((float, ..));           // variadic tuple
/// let tags = desc!({str});                 // set
/// let opt = desc!(int | none);             // union
/// ```
///
/// Grammar notes:
/// - bare names `any`, `none`, `bool`, `int`, `float`, `str`, `list`,
///   `tuple`, `map`, `set` are leaves (`list` et al. are bare primitive
///   tag checks that ignore element types);
/// - union alternatives at nesting positions that expect a single token
///   must be parenthesized: `{str => (int | none)}`;
/// - a one-element tuple needs its trailing comma, `(int,)`, since plain
///   parentheses group: `desc!((int))` is just `int`.
#[macro_export]
macro_rules! desc {
    (any) => { $crate::TypeDescriptor::Any };
    (none) => { $crate::TypeDescriptor::Primitive($crate::RuntimeType::None) };
    (bool) => { $crate::TypeDescriptor::Primitive($crate::RuntimeType::Bool) };
    (int) => { $crate::TypeDescriptor::Primitive($crate::RuntimeType::Int) };
    (float) => { $crate::TypeDescriptor::Primitive($crate::RuntimeType::Float) };
    (str) => { $crate::TypeDescriptor::Primitive($crate::RuntimeType::Str) };
    (list) => { $crate::TypeDescriptor::Primitive($crate::RuntimeType::List) };
    (tuple) => { $crate::TypeDescriptor::Primitive($crate::RuntimeType::Tuple) };
    (map) => { $crate::TypeDescriptor::Primitive($crate::RuntimeType::Map) };
    (set) => { $crate::TypeDescriptor::Primitive($crate::RuntimeType::Set) };

    // Sequence: [element]
    ([ $($element:tt)+ ]) => {
        $crate::TypeDescriptor::sequence($crate::desc!($($element)+))
    };

    // Mapping: {key => value} (before the set rule; `=>` disambiguates)
    ({ $key:tt => $value:tt }) => {
        $crate::TypeDescriptor::mapping($crate::desc!($key), $crate::desc!($value))
    };

    // Set: {element}
    ({ $($element:tt)+ }) => {
        $crate::TypeDescriptor::set($crate::desc!($($element)+))
    };

    // Empty tuple: ()
    (()) => {
        $crate::TypeDescriptor::tuple(::std::vec::Vec::new())
    };

    // Variadic tuple: (element, ..)
    (( $element:tt , .. )) => {
        $crate::TypeDescriptor::variadic($crate::desc!($element))
    };

    // One-element tuple: (element,)
    (( $element:tt , )) => {
        $crate::TypeDescriptor::tuple([$crate::desc!($element)])
    };

    // Fixed tuple, two or more elements: (a, b, ...)
    (( $first:tt $(, $rest:tt)+ $(,)? )) => {
        $crate::TypeDescriptor::tuple([
            $crate::desc!($first)
            $(, $crate::desc!($rest))+
        ])
    };

    // Plain parentheses group, so inline unions can nest: ((int | none))
    (( $($inner:tt)+ )) => {
        $crate::desc!($($inner)+)
    };

    // Union: a | b | ...
    ($first:tt $(| $rest:tt)+) => {
        $crate::TypeDescriptor::union([
            $crate::desc!($first)
            $(, $crate::desc!($rest))+
        ])
    };
}
