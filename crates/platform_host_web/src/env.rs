//! Ambient environment values the terminal injects into command dispatch.

use crate::interop;

/// Human-readable local date/time string, as the browser formats it.
///
/// Returns an empty string off-browser; the engine treats the value as opaque.
pub fn local_datetime_string() -> String {
    interop::local_datetime_string()
}

/// Uniformly random index below `len`. Returns zero when `len` is zero.
pub fn random_index(len: usize) -> usize {
    interop::random_index(len)
}
