//! The process-wide switch gets its own test binary: it is global state,
//! and toggling it here must not race validation tests in other binaries.

use pretty_assertions::assert_eq;
use strix_check::{disable, enable, is_enabled, validate, validate_all, CheckError};
use strix_types::desc;
use strix_value::Value;

#[test]
fn disable_suppresses_all_checking_and_enable_restores_it() {
    let bad = Value::str("x");
    let descriptor = desc!(int);

    assert!(is_enabled());
    assert!(validate(&bad, &descriptor).is_err());

    disable();
    assert!(!is_enabled());
    assert_eq!(validate(&bad, &descriptor), Ok(()));
    assert_eq!(validate_all(&bad, &descriptor), Vec::<CheckError>::new());

    enable();
    assert!(is_enabled());
    assert!(validate(&bad, &descriptor).is_err());
}
