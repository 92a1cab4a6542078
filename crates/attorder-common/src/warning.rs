//! Diagnostics with colored terminal output.
//!
//! Warnings are deduplicated so that a pattern of input that repeats across a
//! large document (for example the same duplicated attribute on every row of a
//! table) is reported once. Errors are never deduplicated or silenced.

use std::collections::HashSet;
use std::io::{self, IsTerminal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether warnings are printed at all (`--quiet` turns this off)
static ENABLED: AtomicBool = AtomicBool::new(true);

fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about suspicious input (prints once per unique message)
///
/// The warning is recorded even when printing is disabled, so
/// [`was_warned`] reports it either way.
///
/// # Example
/// ```ignore
/// warn_once("Reorder", "duplicate attribute 'class' keeps its last value");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = warning_key(component, message);
    let first_time = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if first_time && warnings_enabled() {
        let line = format!("[attorder {component}] warning: {message}");
        if io::stderr().is_terminal() {
            eprintln!("{}", line.yellow());
        } else {
            eprintln!("{line}");
        }
    }
}

/// Report an error. Always printed, even when warnings are disabled.
pub fn error(component: &str, message: &str) {
    let line = format!("[attorder {component}] error: {message}");
    if io::stderr().is_terminal() {
        eprintln!("{}", line.red().bold());
    } else {
        eprintln!("{line}");
    }
}

/// Whether [`warn_once`] has already recorded this exact warning.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&warning_key(component, message)))
}

/// Clear all recorded warnings (call between independent runs)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

/// Turn printing of warnings on or off.
pub fn set_warnings_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether warnings are currently printed.
#[must_use]
pub fn warnings_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}
