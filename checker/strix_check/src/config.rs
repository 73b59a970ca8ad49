//! Strictness configuration and the process-wide kill switch.

use std::sync::atomic::{AtomicBool, Ordering};

/// Default recursion ceiling. Descriptor nesting is caller-controlled, so
/// the matcher refuses to follow pathological trees past this depth
/// instead of risking stack exhaustion.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Explicit, per-checker strictness configuration.
///
/// This is the deterministic alternative to the process-wide switch: a
/// [`Checker`](crate::Checker) holds its own config and is unaffected by
/// [`enable`]/[`disable`]. Call sites that need reproducible behavior
/// under concurrent toggling should hold a checker instead of relying on
/// the global switch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StrictnessConfig {
    /// When false, every validation succeeds without inspecting the value.
    pub enabled: bool,
    /// Recursion ceiling; exceeding it fails closed with `DepthExceeded`.
    pub max_depth: usize,
}

impl StrictnessConfig {
    /// Checking enabled, default depth ceiling.
    pub fn new() -> Self {
        StrictnessConfig {
            enabled: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Same config with checking turned off.
    pub fn disabled(self) -> Self {
        StrictnessConfig {
            enabled: false,
            ..self
        }
    }

    /// Same config with a different depth ceiling.
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        StrictnessConfig { max_depth, ..self }
    }
}

impl Default for StrictnessConfig {
    fn default() -> Self {
        StrictnessConfig::new()
    }
}

/// Process-wide switch consulted by the free-function entry points.
///
/// Reads and writes are `Relaxed`: toggling is eventually consistent, and
/// a toggle may race in-flight validations (a validation that has already
/// started is not interrupted). This is the documented contract; callers
/// that need stronger guarantees hold their own [`Checker`](crate::Checker)
/// with an explicit [`StrictnessConfig`].
static STRICT_ENABLED: AtomicBool = AtomicBool::new(true);

/// Turn process-wide checking on.
pub fn enable() {
    STRICT_ENABLED.store(true, Ordering::Relaxed);
}

/// Turn process-wide checking off. While off, the free-function entry
/// points succeed without inspecting values.
pub fn disable() {
    STRICT_ENABLED.store(false, Ordering::Relaxed);
}

/// Current state of the process-wide switch.
pub fn is_enabled() -> bool {
    STRICT_ENABLED.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn config_builders() {
        let config = StrictnessConfig::new();
        assert!(config.enabled);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);

        let off = config.disabled();
        assert!(!off.enabled);
        assert_eq!(off.max_depth, DEFAULT_MAX_DEPTH);

        let shallow = config.with_max_depth(4);
        assert_eq!(shallow.max_depth, 4);
        assert!(shallow.enabled);
    }
}
