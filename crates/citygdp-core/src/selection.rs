// crates/citygdp-core/src/selection.rs
use crate::chart::color_for;
use crate::model::{City, CityId};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Maximum number of cities in a comparison.
pub const MAX_SELECTIONS: usize = 4;

/// Minimum number of cities for the comparison view to render.
pub const MIN_COMPARISON: usize = 2;

/// Result of [`Selection::toggle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The selection was full; nothing changed.
    LimitReached,
}

/// Coarse state of a selection, as the comparison view sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "count", rename_all = "kebab-case")]
pub enum SelectionState {
    Empty,
    Partial,
    Ready(usize),
    Full,
}

impl SelectionState {
    /// Comparison output is shown for `Ready` and `Full`.
    pub fn can_compare(self) -> bool {
        matches!(self, SelectionState::Ready(_) | SelectionState::Full)
    }
}

/// Ordered selection of city ids, bounded at [`MAX_SELECTIONS`].
///
/// Order is selection order: it drives comparison column order and colour.
///
/// Deserializing goes through [`Selection::from_ids`], so a stored list is
/// deduplicated and capped like any other input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CityId>", into = "Vec<CityId>")]
pub struct Selection {
    ids: Vec<CityId>,
}

impl From<Vec<CityId>> for Selection {
    fn from(ids: Vec<CityId>) -> Self {
        Selection::from_ids(ids)
    }
}

impl From<Selection> for Vec<CityId> {
    fn from(selection: Selection) -> Self {
        selection.ids
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection by adding `ids` in order. Duplicates are ignored
    /// and ids past the limit are dropped.
    pub fn from_ids<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CityId>,
    {
        let mut selection = Self::new();
        for id in ids {
            let id = id.into();
            if selection.contains(&id) {
                continue;
            }
            if selection.toggle(id) == ToggleOutcome::LimitReached {
                break;
            }
        }
        selection
    }

    /// Removes `id` if selected, otherwise appends it. Appending to a full
    /// selection is rejected with [`ToggleOutcome::LimitReached`].
    pub fn toggle(&mut self, id: impl Into<CityId>) -> ToggleOutcome {
        let id = id.into();
        if let Some(pos) = self.ids.iter().position(|x| *x == id) {
            self.ids.remove(pos);
            return ToggleOutcome::Removed;
        }
        if self.ids.len() >= MAX_SELECTIONS {
            warn!(%id, max = MAX_SELECTIONS, "selection limit reached");
            return ToggleOutcome::LimitReached;
        }
        self.ids.push(id);
        ToggleOutcome::Added
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &CityId) -> bool {
        self.ids.contains(id)
    }

    /// Whether a selector button for `id` is enabled: selected ids can
    /// always be toggled off, others only while there is room.
    pub fn can_toggle(&self, id: &CityId) -> bool {
        self.contains(id) || !self.is_full()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_SELECTIONS
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[CityId] {
        &self.ids
    }

    pub fn state(&self) -> SelectionState {
        match self.ids.len() {
            0 => SelectionState::Empty,
            1 => SelectionState::Partial,
            n if n >= MAX_SELECTIONS => SelectionState::Full,
            n => SelectionState::Ready(n),
        }
    }

    /// Palette colour of a selected id, by selection index.
    pub fn color_of(&self, id: &CityId) -> Option<&'static str> {
        self.ids.iter().position(|x| x == id).map(color_for)
    }

    /// Looks the selected ids up in `cities`, in selection order. Ids that
    /// are not in the collection are skipped.
    pub fn resolve<'a>(&self, cities: &'a [City]) -> Vec<&'a City> {
        self.ids
            .iter()
            .filter_map(|id| cities.iter().find(|c| c.id == *id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::COMPARISON_PALETTE;

    #[test]
    fn toggle_adds_and_removes_in_order() {
        let mut s = Selection::new();
        assert_eq!(s.toggle("b"), ToggleOutcome::Added);
        assert_eq!(s.toggle("a"), ToggleOutcome::Added);
        assert_eq!(s.ids(), &[CityId::from("b"), CityId::from("a")]);
        assert_eq!(s.toggle("b"), ToggleOutcome::Removed);
        assert_eq!(s.ids(), &[CityId::from("a")]);
    }

    #[test]
    fn fifth_add_is_rejected_without_change() {
        let mut s = Selection::from_ids(["1", "2", "3", "4"]);
        let before = s.clone();
        assert_eq!(s.state(), SelectionState::Full);
        assert_eq!(s.toggle("5"), ToggleOutcome::LimitReached);
        assert_eq!(s, before);
        // removing still works when full
        assert_eq!(s.toggle("2"), ToggleOutcome::Removed);
        assert_eq!(s.state(), SelectionState::Ready(3));
    }

    #[test]
    fn state_machine() {
        let mut s = Selection::new();
        assert_eq!(s.state(), SelectionState::Empty);
        assert!(!s.state().can_compare());
        s.toggle("a");
        assert_eq!(s.state(), SelectionState::Partial);
        assert!(!s.state().can_compare());
        s.toggle("b");
        assert_eq!(s.state(), SelectionState::Ready(2));
        assert!(s.state().can_compare());
        s.toggle("c");
        s.toggle("d");
        assert_eq!(s.state(), SelectionState::Full);
        assert!(s.state().can_compare());
        s.clear();
        assert_eq!(s.state(), SelectionState::Empty);
    }

    #[test]
    fn from_ids_skips_duplicates_and_overflow() {
        let s = Selection::from_ids(["a", "a", "b", "c", "d", "e"]);
        assert_eq!(s.len(), MAX_SELECTIONS);
        assert!(!s.contains(&CityId::from("e")));
    }

    #[test]
    fn buttons_disable_when_full() {
        let s = Selection::from_ids(["1", "2", "3", "4"]);
        assert!(s.can_toggle(&CityId::from("1")));
        assert!(!s.can_toggle(&CityId::from("9")));
    }

    #[test]
    fn colors_follow_selection_index() {
        let s = Selection::from_ids(["x", "y"]);
        assert_eq!(s.color_of(&CityId::from("x")), Some(COMPARISON_PALETTE[0]));
        assert_eq!(s.color_of(&CityId::from("y")), Some(COMPARISON_PALETTE[1]));
        assert_eq!(s.color_of(&CityId::from("z")), None);
    }

    #[test]
    fn deserialized_selection_is_deduplicated_and_capped() {
        let mut s: Selection = serde_json::from_str(r#"["a","a","b","c","d","e"]"#).unwrap();
        assert_eq!(s.len(), 4);
        assert_eq!(s.state(), SelectionState::Full);
        let ids: Vec<&str> = s.ids().iter().map(CityId::as_str).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);

        assert_eq!(s.toggle("a"), ToggleOutcome::Removed);
        assert!(!s.contains(&CityId::from("a")));
        assert_eq!(serde_json::to_string(&s).unwrap(), r#"["b","c","d"]"#);
    }
}
