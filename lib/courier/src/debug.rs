//! Process-wide debug toggle.
//!
//! When enabled, every subsequent call installs the dump middleware and
//! prints raw request/response dumps to standard output, until disabled.
//!
//! The toggle is a relaxed atomic read at call time: flipping it while
//! other calls are in flight affects only calls that start afterwards, and
//! no ordering is guaranteed relative to other memory operations.

use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG: AtomicBool = AtomicBool::new(false);

/// Activate request/response dumping for all subsequent calls.
pub fn debug_on() {
    DEBUG.store(true, Ordering::Relaxed);
}

/// Deactivate request/response dumping.
pub fn debug_off() {
    DEBUG.store(false, Ordering::Relaxed);
}

/// Returns `true` while the process-wide debug toggle is on.
#[must_use]
pub fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trip() {
        debug_off();
        assert!(!debug_enabled());

        debug_on();
        assert!(debug_enabled());

        debug_off();
        assert!(!debug_enabled());
    }
}
