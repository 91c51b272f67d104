//! Diagnostic warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! The tokenizer reports every parse error here in addition to recording it
//! on its own diagnostics channel, so a malformed document produces one line
//! per distinct problem rather than one per occurrence.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// When set, warnings are still deduplicated but never printed.
static QUIET: AtomicBool = AtomicBool::new(false);

/// Warn about a recoverable problem (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("HTML Tokenizer", "duplicate-attribute at 1:14");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print && !QUIET.load(Ordering::Relaxed) {
        eprintln!("{}", format!("[Wren {component}] ⚠ {message}").yellow());
    }
}

/// Silence (or re-enable) warning output for the whole process.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Returns true if warning output is currently silenced.
#[must_use]
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Clear all recorded warnings (call when starting a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Quiet mode is process-wide, so both checks live in one test.
    #[test]
    fn test_quiet_and_clear() {
        set_quiet(true);
        assert!(is_quiet());

        warn_once("Test", "repeatable");
        clear_warnings();
        let reinserted = WARNED
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert_with(HashSet::new)
            .insert("[Test] repeatable".to_string());
        assert!(reinserted);

        set_quiet(false);
        assert!(!is_quiet());
    }
}
