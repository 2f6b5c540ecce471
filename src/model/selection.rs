//! Selection Store
//!
//! Set of selected document ids for one collection view, plus the implicit
//! anchor (last selected id) used for range selection. The store never
//! touches the document list itself.

use std::collections::HashSet;

use crate::logic;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selected: HashSet<String>,
    anchor: Option<String>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove `id`. No visibility check; no-op if already in that state.
    pub fn select(&mut self, id: &str, is_selected: bool) {
        if is_selected {
            self.selected.insert(id.to_string());
            self.anchor = Some(id.to_string());
        } else {
            self.selected.remove(id);
        }
    }

    /// Flip the selection state of `id`
    pub fn toggle(&mut self, id: &str) {
        let now_selected = !self.is_selected(id);
        self.select(id, now_selected);
    }

    /// Replace the set with exactly the visible ids
    pub fn select_all<S: AsRef<str>>(&mut self, visible: &[S]) {
        self.selected = visible.iter().map(|s| s.as_ref().to_string()).collect();
        self.anchor = None;
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
        self.anchor = None;
    }

    /// Add the span between `anchor` (default: last selected id) and `target`
    ///
    /// An anchor outside `visible` selects only `target`; a target outside
    /// `visible` is ignored.
    pub fn range_select<S: AsRef<str>>(
        &mut self,
        anchor: Option<&str>,
        target: &str,
        visible: &[S],
    ) {
        let implicit = self.anchor.clone();
        let anchor = anchor.or(implicit.as_deref());
        let span = logic::selection::range_span(anchor, target, visible);
        if span.is_empty() {
            return;
        }

        let anchor_visible = anchor
            .map(|a| logic::selection::position_of(a, visible).is_some())
            .unwrap_or(false);
        for id in &span {
            self.selected.insert(id.to_string());
        }
        if !anchor_visible {
            self.anchor = Some(target.to_string());
        }
    }

    /// Keep only ids present in `visible`; returns how many were dropped
    pub fn prune<S: AsRef<str>>(&mut self, visible: &[S]) -> usize {
        let visible: HashSet<&str> = visible.iter().map(|s| s.as_ref()).collect();
        let before = self.selected.len();
        self.selected.retain(|id| visible.contains(id.as_str()));
        if let Some(anchor) = &self.anchor {
            if !visible.contains(anchor.as_str()) {
                self.anchor = None;
            }
        }
        before - self.selected.len()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    pub fn ids(&self) -> &HashSet<String> {
        &self.selected
    }

    /// Selected ids, visible ones first in visible order, then any others sorted
    pub fn ordered_ids<S: AsRef<str>>(&self, visible: &[S]) -> Vec<String> {
        let mut out: Vec<String> = visible
            .iter()
            .map(|s| s.as_ref())
            .filter(|id| self.selected.contains(*id))
            .map(str::to_string)
            .collect();

        let mut hidden: Vec<String> = self
            .selected
            .iter()
            .filter(|id| !out.contains(id))
            .cloned()
            .collect();
        hidden.sort();
        out.extend(hidden);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(store: &SelectionStore) -> Vec<String> {
        let mut ids: Vec<String> = store.ids().iter().cloned().collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_select_and_deselect() {
        let mut store = SelectionStore::new();
        store.select("a", true);
        store.select("a", true);
        assert_eq!(store.len(), 1);

        store.select("a", false);
        store.select("a", false);
        assert!(store.is_empty());
    }

    #[test]
    fn test_select_has_no_visibility_check() {
        let mut store = SelectionStore::new();
        store.select("x", true);
        store.select("y", true);
        store.select("z", true);
        assert_eq!(set(&store), vec!["x", "y", "z"]);

        store.select_all(&["x", "y"]);
        assert_eq!(set(&store), vec!["x", "y"]);
    }

    #[test]
    fn test_toggle() {
        let mut store = SelectionStore::new();
        store.toggle("a");
        assert!(store.is_selected("a"));
        store.toggle("a");
        assert!(!store.is_selected("a"));
    }

    #[test]
    fn test_select_sets_anchor() {
        let mut store = SelectionStore::new();
        store.select("b", true);
        assert_eq!(store.anchor(), Some("b"));
        store.deselect_all();
        assert_eq!(store.anchor(), None);
    }

    #[test]
    fn test_range_uses_last_selected_as_anchor() {
        let visible = ["a", "b", "c", "d", "e"];
        let mut store = SelectionStore::new();
        store.select("b", true);
        store.range_select(None, "d", &visible);
        assert_eq!(set(&store), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_range_with_hidden_anchor_selects_target_only() {
        let visible = ["a", "b", "c"];
        let mut store = SelectionStore::new();
        store.range_select(Some("elsewhere"), "c", &visible);
        assert_eq!(set(&store), vec!["c"]);
        assert_eq!(store.anchor(), Some("c"));
    }

    #[test]
    fn test_range_with_hidden_target_is_noop() {
        let visible = ["a", "b"];
        let mut store = SelectionStore::new();
        store.range_select(Some("a"), "zz", &visible);
        assert!(store.is_empty());
    }

    #[test]
    fn test_prune_drops_hidden_ids() {
        let mut store = SelectionStore::new();
        store.select("a", true);
        store.select("b", true);
        store.select("c", true);

        let dropped = store.prune(&["a", "c", "d"]);
        assert_eq!(dropped, 1);
        assert_eq!(set(&store), vec!["a", "c"]);
        // Anchor "c" is still visible
        assert_eq!(store.anchor(), Some("c"));

        store.prune(&["a"]);
        assert_eq!(store.anchor(), None);
    }

    #[test]
    fn test_ordered_ids_follow_visible_order() {
        let mut store = SelectionStore::new();
        store.select("zeta-hidden", true);
        store.select("c", true);
        store.select("a", true);

        assert_eq!(store.ordered_ids(&["a", "b", "c"]), vec!["a", "c", "zeta-hidden"]);
    }
}
