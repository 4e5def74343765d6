//! Generic ordered command registry shared by the terminal and the palette.
//!
//! Both shells use the same structure with different action payloads: the
//! terminal dispatches a handler by leading token, the palette filters by
//! searchable title/category text. Registries are built once at construction
//! and never mutated at runtime.

/// One registered command with display metadata and an action payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry<TAction> {
    /// Stable identifier; also the dispatch token for terminal registries.
    pub id: &'static str,
    /// Human-readable title used for palette display and filtering.
    pub title: &'static str,
    /// Category label used for palette grouping and filtering.
    pub category: &'static str,
    /// Consumer-defined action payload.
    pub action: TAction,
}

/// Ordered, immutable registry parameterized over the action type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry<TAction> {
    entries: Vec<RegistryEntry<TAction>>,
}

impl<TAction> Registry<TAction> {
    /// Builds a registry from an ordered entry list. Insertion order is
    /// display order; entry ids must be unique.
    pub fn new(entries: Vec<RegistryEntry<TAction>>) -> Self {
        debug_assert!(
            entries
                .iter()
                .enumerate()
                .all(|(index, entry)| entries[..index]
                    .iter()
                    .all(|earlier| !earlier.id.eq_ignore_ascii_case(entry.id))),
            "registry ids must be unique"
        );
        Self { entries }
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[RegistryEntry<TAction>] {
        &self.entries
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive lookup by id, used for command-token dispatch.
    pub fn find(&self, token: &str) -> Option<&RegistryEntry<TAction>> {
        self.entries
            .iter()
            .find(|entry| entry.id.eq_ignore_ascii_case(token))
    }

    /// Case-insensitive substring filter over title and category, preserving
    /// registration order among matches. An empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<&RegistryEntry<TAction>> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| {
                entry.title.to_lowercase().contains(&needle)
                    || entry.category.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Registry<u8> {
        Registry::new(vec![
            RegistryEntry {
                id: "home",
                title: "Navigate to Home",
                category: "Navigation",
                action: 0,
            },
            RegistryEntry {
                id: "projects",
                title: "View Projects",
                category: "Navigation",
                action: 1,
            },
            RegistryEntry {
                id: "publications",
                title: "Research Papers",
                category: "Navigation",
                action: 2,
            },
        ])
    }

    #[test]
    fn find_is_case_insensitive() {
        let registry = sample();
        assert_eq!(registry.find("PROJECTS").map(|entry| entry.action), Some(1));
        assert!(registry.find("missing").is_none());
    }

    #[test]
    fn filter_is_case_insensitive_and_order_preserving() {
        let registry = sample();
        let titles: Vec<&str> = registry
            .filter("p")
            .into_iter()
            .map(|entry| entry.title)
            .collect();
        assert_eq!(titles, vec!["View Projects", "Research Papers"]);
    }

    #[test]
    fn filter_matches_category_text() {
        let registry = sample();
        assert_eq!(registry.filter("NAV").len(), registry.len());
    }

    #[test]
    fn empty_query_matches_everything() {
        let registry = sample();
        assert_eq!(registry.filter("").len(), registry.len());
    }
}
