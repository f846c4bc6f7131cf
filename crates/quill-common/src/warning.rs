//! Deduplicated warnings.
//!
//! Used by the DOM and HTML crates to report situations they recover from
//! but that usually point at a caller bug or an unsupported feature. Each
//! unique message is logged once per process at `warn` level.

use std::collections::HashSet;
use std::sync::Mutex;

/// Global set of warnings we've already logged (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a recoverable situation (logs once per unique message).
///
/// Returns `true` if this call produced the log line, `false` if the same
/// message had already been reported.
///
/// # Example
/// ```ignore
/// warn_once("ParseState", "template insertion mode stack is empty");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    // A poisoned lock only means another thread panicked mid-insert; the set
    // itself is still usable.
    let mut guard = WARNED
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    let should_log = guard.get_or_insert_with(HashSet::new).insert(key);
    drop(guard);

    if should_log {
        log::warn!(target: "quill", "[{component}] {message}");
    }
    should_log
}

/// Forget every recorded warning so they are reported again.
pub fn clear_warnings() {
    let mut guard = WARNED
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_deduplicates() {
        assert!(warn_once("test", "dedup-probe"));
        assert!(!warn_once("test", "dedup-probe"));
        assert!(warn_once("other", "dedup-probe"));
    }
}
