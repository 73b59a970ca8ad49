//! Recursive value-against-descriptor matching for the Strix checker.
//!
//! Given a [`Value`](strix_value::Value) and a
//! [`TypeDescriptor`](strix_types::TypeDescriptor), the matcher decides
//! structurally whether the value conforms, and if not, reports the exact
//! sub-path that failed (`value[2].key`). Recursion stops at the first
//! detected mismatch; first-failure is the contract, and [`Checker::validate_all`]
//! is the opt-in collect-all variant.
//!
//! # Entry points
//!
//! The free functions [`validate`], [`validate_at`], and [`validate_all`]
//! run against a process-wide default [`Checker`] and consult the
//! process-wide switch first: after [`disable`], they succeed without
//! inspecting the value until [`enable`] is called. For deterministic,
//! toggle-independent behavior, hold a [`Checker`] with an explicit
//! [`StrictnessConfig`].
//!
//! ```
//! use strix_check::validate;
//! use strix_types::desc;
//! use strix_value::Value;
//!
//! let numbers = Value::list(vec![Value::int(1), Value::int(2)]);
//! assert!(validate(&numbers, &desc!([int])).is_ok());
//!
//! let mixed = Value::list(vec![Value::int(1), Value::str("x")]);
//! let outcome = validate(&mixed, &desc!([int]));
//! assert!(outcome.is_err());
//! ```

mod config;
mod error;
mod matcher;
mod path;

use std::sync::OnceLock;

use strix_types::TypeDescriptor;
use strix_value::Value;

pub use config::{disable, enable, is_enabled, StrictnessConfig, DEFAULT_MAX_DEPTH};
pub use error::{CheckError, CheckResult, MismatchReport};
pub use matcher::{Checker, ROOT_LABEL};

/// The checker behind the free-function entry points. Its classifier is
/// the process-lifetime classification cache.
fn default_checker() -> &'static Checker {
    static DEFAULT_CHECKER: OnceLock<Checker> = OnceLock::new();
    DEFAULT_CHECKER.get_or_init(Checker::new)
}

/// Check `value` against `descriptor`, rooted at `value`.
///
/// Consults the process-wide switch first; when disabled, succeeds
/// without inspecting the value.
pub fn validate(value: &Value, descriptor: &TypeDescriptor) -> CheckResult {
    if !config::is_enabled() {
        return Ok(());
    }
    default_checker().validate(value, descriptor)
}

/// Check `value` against `descriptor` with an explicit root label, e.g.
/// the argument or field name the collaborator is guarding.
pub fn validate_at(value: &Value, descriptor: &TypeDescriptor, root: &str) -> CheckResult {
    if !config::is_enabled() {
        return Ok(());
    }
    default_checker().validate_at(value, descriptor, root)
}

/// Collect every leaf failure instead of stopping at the first. Empty
/// when the value conforms or the process-wide switch is off.
pub fn validate_all(value: &Value, descriptor: &TypeDescriptor) -> Vec<CheckError> {
    if !config::is_enabled() {
        return Vec::new();
    }
    default_checker().validate_all(value, descriptor)
}
