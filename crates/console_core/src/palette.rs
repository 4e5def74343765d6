//! Command-palette state machine: query, filtering, and wrap-around selection.

use crate::registry::{Registry, RegistryEntry};

/// Action payload for palette navigation entries: jump to a page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionJump {
    /// Anchor id of the target section element.
    pub anchor: &'static str,
}

/// Builds the fixed navigation registry shown by the palette.
pub fn navigation_registry() -> Registry<SectionJump> {
    Registry::new(vec![
        jump("home", "Navigate to Home", "hero"),
        jump("projects", "View Projects", "projects"),
        jump("about", "About Me", "about"),
        jump("publications", "Research Papers", "publications"),
        jump("certifications", "Certifications", "certifications"),
        jump("contact", "Contact Me", "contact"),
    ])
}

fn jump(id: &'static str, title: &'static str, anchor: &'static str) -> RegistryEntry<SectionJump> {
    RegistryEntry {
        id,
        title,
        category: "Navigation",
        action: SectionJump { anchor },
    }
}

/// Transient palette state. Reset on every open so the palette always starts
/// from an empty query with the first row selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteState {
    query: String,
    selected: usize,
}

impl PaletteState {
    /// Current filter query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Index of the selected row within the filtered list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Clears the query and selection, as on open or close.
    pub fn reset(&mut self) {
        self.query.clear();
        self.selected = 0;
    }

    /// Replaces the query. Any edit snaps the selection back to the first
    /// filtered row.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.selected = 0;
    }

    /// Selects a row directly, as on pointer hover.
    pub fn select(&mut self, index: usize) {
        self.selected = index;
    }

    /// Moves the selection down one row, wrapping past the last filtered row.
    pub fn move_down(&mut self, filtered_len: usize) {
        if filtered_len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % filtered_len;
    }

    /// Moves the selection up one row, wrapping past the first filtered row.
    pub fn move_up(&mut self, filtered_len: usize) {
        if filtered_len == 0 {
            return;
        }
        self.selected = (self.selected + filtered_len - 1) % filtered_len;
    }

    /// Rows matching the current query, in registration order.
    pub fn filtered<'a, TAction>(
        &self,
        registry: &'a Registry<TAction>,
    ) -> Vec<&'a RegistryEntry<TAction>> {
        registry.filter(&self.query)
    }

    /// The action of the selected filtered row, if any row is selected.
    pub fn activate<'a, TAction>(&self, registry: &'a Registry<TAction>) -> Option<&'a TAction> {
        self.filtered(registry)
            .get(self.selected)
            .map(|entry| &entry.action)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn filtering_p_keeps_projects_and_publications_rows() {
        let registry = navigation_registry();
        let mut state = PaletteState::default();
        state.set_query("p");
        let titles: Vec<&str> = state
            .filtered(&registry)
            .into_iter()
            .map(|entry| entry.title)
            .collect();
        assert_eq!(titles, vec!["View Projects", "Research Papers"]);
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let registry = navigation_registry();
        let mut state = PaletteState::default();
        let len = state.filtered(&registry).len();

        state.move_up(len);
        assert_eq!(state.selected(), len - 1);
        state.move_down(len);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn editing_the_query_resets_the_selection() {
        let registry = navigation_registry();
        let mut state = PaletteState::default();
        state.move_down(state.filtered(&registry).len());
        assert_eq!(state.selected(), 1);
        state.set_query("c");
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn movement_on_an_empty_filtered_list_is_a_no_op() {
        let mut state = PaletteState::default();
        state.set_query("zzz");
        state.move_down(0);
        state.move_up(0);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn activate_returns_the_selected_anchor() {
        let registry = navigation_registry();
        let mut state = PaletteState::default();
        state.set_query("research");
        assert_eq!(
            state.activate(&registry),
            Some(&SectionJump { anchor: "publications" })
        );
    }

    #[test]
    fn activate_with_no_matches_returns_none() {
        let registry = navigation_registry();
        let mut state = PaletteState::default();
        state.set_query("zzz");
        assert_eq!(state.activate(&registry), None);
    }
}
