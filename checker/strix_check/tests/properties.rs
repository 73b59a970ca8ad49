//! Property-based tests for the matcher.
//!
//! Random values and descriptors exercise the properties the matcher
//! promises: the wildcard is total, primitive satisfaction is exactly tag
//! equality, union outcome is order-independent, collection checks are
//! structurally recursive, and repeat validation is idempotent.

#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use strix_check::Checker;
use strix_types::TypeDescriptor;
use strix_value::{RuntimeType, Value};

const ALL_TAGS: [RuntimeType; 9] = [
    RuntimeType::None,
    RuntimeType::Bool,
    RuntimeType::Int,
    RuntimeType::Float,
    RuntimeType::Str,
    RuntimeType::List,
    RuntimeType::Tuple,
    RuntimeType::Map,
    RuntimeType::Set,
];

fn scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::None),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::int),
        // NaN never compares equal, which would break outcome-equality
        // assertions on reports that capture the received value.
        any::<f64>().prop_filter("not NaN", |f| !f.is_nan()).prop_map(Value::float),
        "[a-z]{0,8}".prop_map(Value::str),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    scalar_value().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::list),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::tuple),
            prop::collection::vec((inner.clone(), inner.clone()), 0..4).prop_map(Value::map),
            prop::collection::vec(inner, 0..4).prop_map(Value::set),
        ]
    })
}

fn scalar_descriptor() -> impl Strategy<Value = TypeDescriptor> {
    prop_oneof![
        Just(TypeDescriptor::Any),
        proptest::sample::select(&ALL_TAGS[..]).prop_map(TypeDescriptor::primitive),
    ]
}

fn descriptor_strategy() -> impl Strategy<Value = TypeDescriptor> {
    scalar_descriptor().prop_recursive(3, 16, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4).prop_map(TypeDescriptor::union),
            inner.clone().prop_map(TypeDescriptor::sequence),
            (inner.clone(), inner.clone()).prop_map(|(k, v)| TypeDescriptor::mapping(k, v)),
            prop::collection::vec(inner.clone(), 0..3).prop_map(TypeDescriptor::tuple),
            inner.clone().prop_map(TypeDescriptor::variadic),
            inner.prop_map(TypeDescriptor::set),
        ]
    })
}

proptest! {
    #[test]
    fn wildcard_accepts_everything(value in value_strategy()) {
        let checker = Checker::new();
        prop_assert!(checker.validate(&value, &TypeDescriptor::Any).is_ok());
    }

    #[test]
    fn primitive_satisfaction_is_tag_equality(value in value_strategy()) {
        let checker = Checker::new();
        for tag in ALL_TAGS {
            let outcome = checker.validate(&value, &TypeDescriptor::primitive(tag));
            prop_assert_eq!(outcome.is_ok(), value.runtime_type() == tag);
        }
    }

    #[test]
    fn union_reordering_never_changes_the_outcome(
        value in value_strategy(),
        options in prop::collection::vec(descriptor_strategy(), 1..4),
    ) {
        let checker = Checker::new();
        let forward = checker.validate(&value, &TypeDescriptor::union(options.clone()));
        let mut reversed = options;
        reversed.reverse();
        let backward = checker.validate(&value, &TypeDescriptor::union(reversed));
        prop_assert_eq!(forward.is_ok(), backward.is_ok());
    }

    #[test]
    fn sequence_checks_are_structurally_recursive(
        value in value_strategy(),
        descriptor in descriptor_strategy(),
    ) {
        let checker = Checker::new();
        let direct = checker.validate(&value, &descriptor);
        let wrapped = checker.validate(
            &Value::list(vec![value]),
            &TypeDescriptor::sequence(descriptor),
        );
        prop_assert_eq!(direct.is_ok(), wrapped.is_ok());
    }

    #[test]
    fn repeat_validation_is_idempotent(
        value in value_strategy(),
        descriptor in descriptor_strategy(),
    ) {
        let checker = Checker::new();
        let first = checker.validate(&value, &descriptor);
        let second = checker.validate(&value, &descriptor);
        prop_assert_eq!(first, second);
    }
}
