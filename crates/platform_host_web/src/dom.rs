//! DOM helpers used by the command palette and the site navbar.

use crate::interop;

/// Smooth-scrolls the element with the given anchor id into view.
///
/// Returns an error when the element does not exist so callers can log the
/// missing anchor instead of failing silently.
pub fn scroll_to_anchor(anchor_id: &str) -> Result<(), String> {
    interop::scroll_to_anchor(anchor_id)
}
