//! Multi-select semantics shared by every table in the app.
//!
//! Select-all always operates on the rows currently displayed under the
//! active filter, never on the full fetched list: toggling it off removes
//! exactly the displayed ids and leaves any off-screen selection intact.

use std::collections::HashSet;
use std::hash::Hash;

/// Toggles a single id in and out of the selection.
pub fn toggle<T: Eq + Hash>(selected: &mut HashSet<T>, id: T) {
    if !selected.remove(&id) {
        selected.insert(id);
    }
}

/// True when every displayed row is selected (and there is at least one).
pub fn all_displayed_selected<T: Eq + Hash>(selected: &HashSet<T>, displayed: &[T]) -> bool {
    !displayed.is_empty() && displayed.iter().all(|id| selected.contains(id))
}

/// Select-all over the displayed subset. If all displayed rows are already
/// selected, deselects exactly those; otherwise selects them all.
pub fn toggle_all_displayed<T: Eq + Hash + Clone>(selected: &mut HashSet<T>, displayed: &[T]) {
    if all_displayed_selected(selected, displayed) {
        for id in displayed {
            selected.remove(id);
        }
    } else {
        for id in displayed {
            selected.insert(id.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut selected = HashSet::new();
        toggle(&mut selected, 7);
        assert!(selected.contains(&7));
        toggle(&mut selected, 7);
        assert!(selected.is_empty());
    }

    #[test]
    fn select_all_only_touches_displayed_rows() {
        // 3 of 10 candidates visible under the active filter.
        let displayed = vec![1, 2, 3];
        let mut selected: HashSet<i64> = [9].into_iter().collect();

        toggle_all_displayed(&mut selected, &displayed);
        assert_eq!(selected.len(), 4);
        assert!(all_displayed_selected(&selected, &displayed));

        // Off-screen selection (id 9) survives the deselect.
        toggle_all_displayed(&mut selected, &displayed);
        assert_eq!(selected, [9].into_iter().collect());
    }

    #[test]
    fn partial_displayed_selection_selects_the_rest() {
        let displayed = vec![1, 2, 3];
        let mut selected: HashSet<i64> = [2].into_iter().collect();
        toggle_all_displayed(&mut selected, &displayed);
        assert_eq!(selected, [1, 2, 3].into_iter().collect());
    }

    #[test]
    fn empty_display_is_never_all_selected() {
        let selected: HashSet<i64> = [1].into_iter().collect();
        assert!(!all_displayed_selected(&selected, &[]));
    }
}
