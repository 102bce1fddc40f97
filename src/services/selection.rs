//! Multi-select state shared by the read views
//!
//! Selection is scoped to the rows currently visible under the view's
//! filters: select-all covers only the filtered subset, and reconciling
//! after a filter change drops selections for rows that are no longer
//! visible.

use std::collections::HashSet;
use std::hash::Hash;

#[derive(Debug, Clone, Default)]
pub struct Selection<K: Eq + Hash + Clone> {
    selected: HashSet<K>,
}

impl<K: Eq + Hash + Clone> Selection<K> {
    pub fn set(&mut self, key: K, selected: bool) {
        if selected {
            self.selected.insert(key);
        } else {
            self.selected.remove(&key);
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Select every currently visible row
    pub fn select_all(&mut self, visible: impl IntoIterator<Item = K>) {
        self.selected = visible.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drop selections for rows not in the visible set and return the
    /// surviving selection in visible order
    pub fn reconcile(&mut self, visible: &[K]) -> Vec<K> {
        let visible_set: HashSet<&K> = visible.iter().collect();
        self.selected.retain(|k| visible_set.contains(k));
        visible
            .iter()
            .filter(|k| self.selected.contains(k))
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all_covers_only_the_visible_subset() {
        let mut selection: Selection<&str> = Selection::default();
        selection.select_all(["a", "b"]);
        assert!(selection.contains(&"a"));
        assert!(!selection.contains(&"c"));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn reconcile_drops_rows_hidden_by_a_filter_change() {
        let mut selection: Selection<&str> = Selection::default();
        selection.select_all(["a", "b", "c"]);

        // Filter narrows the view to b and d
        let survivors = selection.reconcile(&["b", "d"]);
        assert_eq!(survivors, vec!["b"]);
        assert_eq!(selection.len(), 1);

        // Widening the filter again does not resurrect a or c
        let survivors = selection.reconcile(&["a", "b", "c"]);
        assert_eq!(survivors, vec!["b"]);
    }

    #[test]
    fn toggle_and_clear() {
        let mut selection: Selection<String> = Selection::default();
        selection.set("x".to_string(), true);
        selection.set("x".to_string(), false);
        assert!(selection.is_empty());

        selection.set("y".to_string(), true);
        selection.clear();
        assert!(selection.is_empty());
    }
}
