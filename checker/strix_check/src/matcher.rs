//! The recursive matcher.
//!
//! `Checker` walks a value and a descriptor in lockstep, dispatching on
//! the descriptor's classified [`Shape`] and extending the path as it
//! descends. The walk stops at the first mismatch and returns it
//! (first-failure semantics); `validate_all` is the collect-all variant,
//! which records leaf failures and keeps going across siblings.
//!
//! The matcher borrows the value and descriptor trees read-only. Its only
//! side effects are classification-cache population and the returned
//! error(s).

use std::sync::Arc;

use strix_types::{Classifier, Shape, TypeDescriptor};
use strix_value::Value;

use crate::config::StrictnessConfig;
use crate::error::{CheckError, CheckResult, MismatchReport};
use crate::path::PathCursor;

/// Root label used when the caller does not supply one.
pub const ROOT_LABEL: &str = "value";

/// A configured validator.
///
/// Owns (or shares) a [`Classifier`] and a [`StrictnessConfig`]. The
/// checker is deterministic: it consults only its own config, never the
/// process-wide switch. Cheap to share behind an `Arc`; safe to call from
/// multiple threads at once.
pub struct Checker {
    classifier: Arc<Classifier>,
    config: StrictnessConfig,
}

impl Checker {
    /// Fresh checker with a private classifier and default config.
    pub fn new() -> Self {
        Checker::with_config(StrictnessConfig::default())
    }

    /// Fresh checker with a private classifier.
    pub fn with_config(config: StrictnessConfig) -> Self {
        Checker {
            classifier: Arc::new(Classifier::new()),
            config,
        }
    }

    /// Checker sharing an existing classification cache.
    pub fn with_classifier(classifier: Arc<Classifier>, config: StrictnessConfig) -> Self {
        Checker { classifier, config }
    }

    /// The classification cache backing this checker.
    pub fn classifier(&self) -> &Arc<Classifier> {
        &self.classifier
    }

    /// This checker's configuration.
    pub fn config(&self) -> StrictnessConfig {
        self.config
    }

    /// Check `value` against `descriptor`, rooted at `value`.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn validate(&self, value: &Value, descriptor: &TypeDescriptor) -> CheckResult {
        self.validate_at(value, descriptor, ROOT_LABEL)
    }

    /// Check `value` against `descriptor` with an explicit root label,
    /// e.g. an argument or field name.
    pub fn validate_at(&self, value: &Value, descriptor: &TypeDescriptor, root: &str) -> CheckResult {
        if !self.config.enabled {
            return Ok(());
        }
        let mut path = PathCursor::new(root);
        self.walk(value, descriptor, &mut path, 0, None)
    }

    /// Collect-all variant of [`validate`](Self::validate): records every
    /// leaf failure instead of stopping at the first. Unions still either
    /// match or contribute their single aggregate mismatch, and a tuple
    /// that fails on arity contributes the arity error alone.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn validate_all(&self, value: &Value, descriptor: &TypeDescriptor) -> Vec<CheckError> {
        self.validate_all_at(value, descriptor, ROOT_LABEL)
    }

    /// Collect-all with an explicit root label.
    pub fn validate_all_at(
        &self,
        value: &Value,
        descriptor: &TypeDescriptor,
        root: &str,
    ) -> Vec<CheckError> {
        let mut failures = Vec::new();
        if !self.config.enabled {
            return failures;
        }
        let mut path = PathCursor::new(root);
        // With a sink attached the walk never returns Err.
        let _ = self.walk(value, descriptor, &mut path, 0, Some(&mut failures));
        failures
    }

    /// Route a failure: push into the sink (collect mode) or return it
    /// (first-failure mode).
    fn emit(sink: &mut Option<&mut Vec<CheckError>>, error: CheckError) -> CheckResult {
        match sink {
            Some(failures) => {
                failures.push(error);
                Ok(())
            }
            None => Err(error),
        }
    }

    fn mismatch(path: &PathCursor, descriptor: &TypeDescriptor, value: &Value) -> CheckError {
        CheckError::Mismatch(MismatchReport {
            path: path.render(),
            expected: descriptor.clone(),
            received: value.clone(),
        })
    }

    fn walk(
        &self,
        value: &Value,
        descriptor: &TypeDescriptor,
        path: &mut PathCursor,
        depth: usize,
        mut sink: Option<&mut Vec<CheckError>>,
    ) -> CheckResult {
        if depth > self.config.max_depth {
            return Self::emit(
                &mut sink,
                CheckError::DepthExceeded {
                    path: path.render(),
                    limit: self.config.max_depth,
                },
            );
        }

        let classification = match self.classifier.classify(descriptor) {
            Ok(classification) => classification,
            Err(unsupported) => {
                return Self::emit(
                    &mut sink,
                    CheckError::Unsupported {
                        path: path.render(),
                        descriptor: unsupported.descriptor,
                    },
                )
            }
        };

        match classification.shape() {
            Shape::Any => Ok(()),

            Shape::Primitive(tag) => {
                if value.runtime_type() == tag {
                    Ok(())
                } else {
                    Self::emit(&mut sink, Self::mismatch(path, descriptor, value))
                }
            }

            Shape::Union => {
                // Options are probed in declared order at the current
                // path. Probes run first-failure with no sink: a
                // discarded attempt must not surface anywhere.
                for option in classification.children() {
                    if self.walk(value, option, path, depth + 1, None).is_ok() {
                        return Ok(());
                    }
                }
                // All options failed: report against the whole union,
                // not the last option tried.
                Self::emit(&mut sink, Self::mismatch(path, descriptor, value))
            }

            Shape::Sequence => {
                let Value::List(items) = value else {
                    return Self::emit(&mut sink, Self::mismatch(path, descriptor, value));
                };
                let element = &classification.children()[0];
                for (index, item) in items.iter().enumerate() {
                    let mark = path.mark();
                    path.push_index(index);
                    let checked = self.walk(item, element, path, depth + 1, sink.as_deref_mut());
                    path.reset(mark);
                    checked?;
                }
                Ok(())
            }

            Shape::Mapping => {
                let Value::Map(entries) = value else {
                    return Self::emit(&mut sink, Self::mismatch(path, descriptor, value));
                };
                let children = classification.children();
                let (key_descriptor, value_descriptor) = (&children[0], &children[1]);
                for (key, entry_value) in entries.iter() {
                    let mark = path.mark();

                    path.push_entry_key();
                    let checked =
                        self.walk(key, key_descriptor, path, depth + 1, sink.as_deref_mut());
                    path.reset(mark);
                    checked?;

                    path.push_map_key(key);
                    let checked = self.walk(
                        entry_value,
                        value_descriptor,
                        path,
                        depth + 1,
                        sink.as_deref_mut(),
                    );
                    path.reset(mark);
                    checked?;
                }
                Ok(())
            }

            Shape::Tuple => {
                let Value::Tuple(items) = value else {
                    return Self::emit(&mut sink, Self::mismatch(path, descriptor, value));
                };
                let positions = classification.children();
                if items.len() != positions.len() {
                    // Positions cannot be aligned; the arity error stands
                    // alone even in collect mode.
                    return Self::emit(
                        &mut sink,
                        CheckError::Arity {
                            path: path.render(),
                            expected: descriptor.clone(),
                            expected_len: positions.len(),
                            found_len: items.len(),
                        },
                    );
                }
                for (index, (item, position)) in items.iter().zip(positions).enumerate() {
                    let mark = path.mark();
                    path.push_index(index);
                    let checked = self.walk(item, position, path, depth + 1, sink.as_deref_mut());
                    path.reset(mark);
                    checked?;
                }
                Ok(())
            }

            Shape::TupleVariadic => {
                let Value::Tuple(items) = value else {
                    return Self::emit(&mut sink, Self::mismatch(path, descriptor, value));
                };
                let element = &classification.children()[0];
                for (index, item) in items.iter().enumerate() {
                    let mark = path.mark();
                    path.push_index(index);
                    let checked = self.walk(item, element, path, depth + 1, sink.as_deref_mut());
                    path.reset(mark);
                    checked?;
                }
                Ok(())
            }

            Shape::Set => {
                let Value::Set(items) = value else {
                    return Self::emit(&mut sink, Self::mismatch(path, descriptor, value));
                };
                let element = &classification.children()[0];
                for item in items.iter() {
                    let mark = path.mark();
                    path.push_item();
                    let checked = self.walk(item, element, path, depth + 1, sink.as_deref_mut());
                    path.reset(mark);
                    checked?;
                }
                Ok(())
            }
        }
    }
}

impl Default for Checker {
    fn default() -> Self {
        Checker::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strix_types::desc;
    use strix_value::RuntimeType;

    use super::*;

    #[test]
    fn wildcard_accepts_none() {
        let checker = Checker::new();
        assert_eq!(checker.validate(&Value::None, &desc!(any)), Ok(()));
    }

    #[test]
    fn primitive_tag_equality() {
        let checker = Checker::new();
        assert_eq!(checker.validate(&Value::int(5), &desc!(int)), Ok(()));
        // No numeric coercion between tags.
        assert!(checker.validate(&Value::int(5), &desc!(float)).is_err());
        assert!(checker.validate(&Value::Bool(true), &desc!(int)).is_err());
    }

    #[test]
    fn bare_collection_tags_ignore_elements() {
        let checker = Checker::new();
        let mixed = Value::list(vec![Value::int(1), Value::str("x")]);
        assert_eq!(checker.validate(&mixed, &desc!(list)), Ok(()));
    }

    #[test]
    fn union_failure_reports_whole_union() {
        let checker = Checker::new();
        let descriptor = desc!(int | none);
        let outcome = checker.validate(&Value::str("x"), &descriptor);
        let Err(CheckError::Mismatch(report)) = outcome else {
            panic!("expected a mismatch");
        };
        assert_eq!(report.expected, descriptor);
        assert_eq!(report.path, "value");
    }

    #[test]
    fn union_probe_leaves_no_trace_in_winning_path() {
        let checker = Checker::new();
        // First option fails deep inside a list; second option matches.
        let descriptor = desc!([(int | str)]);
        let value = Value::list(vec![Value::int(1), Value::str("x")]);
        assert_eq!(checker.validate(&value, &descriptor), Ok(()));
    }

    #[test]
    fn sequence_requires_a_list() {
        let checker = Checker::new();
        let outcome = checker.validate(&Value::tuple(vec![Value::int(1)]), &desc!([int]));
        let Err(CheckError::Mismatch(report)) = outcome else {
            panic!("expected a mismatch");
        };
        assert_eq!(report.received_type(), RuntimeType::Tuple);
        assert_eq!(report.path, "value");
    }

    #[test]
    fn variadic_tuple_checks_every_position() {
        let checker = Checker::new();
        let ok = Value::tuple(vec![Value::int(1), Value::int(2), Value::int(3)]);
        assert_eq!(checker.validate(&ok, &desc!((int, ..))), Ok(()));

        let bad = Value::tuple(vec![Value::int(1), Value::str("x")]);
        let outcome = checker.validate(&bad, &desc!((int, ..)));
        assert_eq!(outcome.map_err(|e| e.path().to_owned()), Err(String::from("value[1]")));
    }

    #[test]
    fn set_paths_carry_no_index() {
        let checker = Checker::new();
        let value = Value::set(vec![Value::int(1), Value::str("x")]);
        let outcome = checker.validate(&value, &desc!({int}));
        assert_eq!(
            outcome.map_err(|e| e.path().to_owned()),
            Err(String::from("value.item"))
        );
    }

    #[test]
    fn disabled_config_skips_inspection() {
        let checker = Checker::with_config(StrictnessConfig::new().disabled());
        assert_eq!(checker.validate(&Value::str("x"), &desc!(int)), Ok(()));
        // Even unsupported descriptors pass when the checker is off.
        assert_eq!(
            checker.validate(&Value::None, &TypeDescriptor::opaque("Callable")),
            Ok(())
        );
    }

    #[test]
    fn custom_root_label() {
        let checker = Checker::new();
        let outcome = checker.validate_at(&Value::str("x"), &desc!(int), "timeout");
        assert_eq!(
            outcome.map_err(|e| e.path().to_owned()),
            Err(String::from("timeout"))
        );
    }
}
