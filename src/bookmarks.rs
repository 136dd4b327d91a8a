//! The persisted bookmark list.
//!
//! Bookmarks are full `Problem` snapshots, not ids, so the saved screen and
//! its detail views work without the network. The whole list is serialized as
//! one JSON array under a single storage key; every mutation rewrites the
//! whole value.

use serde::{Deserialize, Serialize};

use crate::model::{Problem, ProblemId};

/// Ordered bookmark collection with set semantics over problem ids.
///
/// Insertion order is append-only: adding keeps the problem at the end,
/// removing preserves the relative order of the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkList {
    problems: Vec<Problem>,
}

impl BookmarkList {
    #[must_use]
    pub fn new(problems: Vec<Problem>) -> Self {
        let mut list = Self::default();
        for p in problems {
            if !list.contains(&p.id) {
                list.problems.push(p);
            }
        }
        list
    }

    #[must_use]
    pub fn contains(&self, id: &ProblemId) -> bool {
        self.problems.iter().any(|p| &p.id == id)
    }

    #[must_use]
    pub fn get(&self, id: &ProblemId) -> Option<&Problem> {
        self.problems.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.problems.iter()
    }

    /// Appends a snapshot unless one with the same id is already present.
    #[must_use]
    pub fn with_added(mut self, problem: Problem) -> Self {
        if !self.contains(&problem.id) {
            self.problems.push(problem);
        }
        self
    }

    /// Removes the snapshot with the given id; absent ids are a no-op.
    #[must_use]
    pub fn with_removed(mut self, id: &ProblemId) -> Self {
        self.problems.retain(|p| &p.id != id);
        self
    }

    /// Toggles membership, returning the new list and whether the problem is
    /// now saved.
    #[must_use]
    pub fn toggled(self, problem: &Problem) -> (Self, bool) {
        if self.contains(&problem.id) {
            (self.with_removed(&problem.id), false)
        } else {
            (self.with_added(problem.clone()), true)
        }
    }

    /// Serializes the list as a bare JSON array for the storage key.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        // A Vec<Problem> of serializable records cannot fail to serialize.
        serde_json::to_vec(&self.problems).unwrap_or_default()
    }

    /// Fail-soft decode of a stored value. A missing value or one that does
    /// not parse as a problem array degrades to the empty list; corruption is
    /// logged, never surfaced.
    #[must_use]
    pub fn from_stored(bytes: Option<&[u8]>) -> Self {
        let Some(bytes) = bytes else {
            return Self::default();
        };
        match serde_json::from_slice::<Vec<Problem>>(bytes) {
            Ok(problems) => Self::new(problems),
            Err(error) => {
                tracing::warn!(%error, "stored bookmarks unreadable, starting empty");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProblemId;
    use proptest::prelude::*;

    fn problem(id: &str, title: &str) -> Problem {
        Problem {
            id: ProblemId::new(id),
            title: title.into(),
            domain: "Environment".into(),
            description: "desc".into(),
            category: Some("environment".into()),
            background: Some("bg".into()),
            existing_solutions: vec!["one".into()],
            limitations: vec!["two".into()],
        }
    }

    #[test]
    fn add_then_contains() {
        let list = BookmarkList::default().with_added(problem("a", "A"));
        assert!(list.contains(&ProblemId::new("a")));
        assert!(!list.contains(&ProblemId::new("b")));
    }

    #[test]
    fn add_is_idempotent_on_id() {
        let list = BookmarkList::default()
            .with_added(problem("a", "A"))
            .with_added(problem("a", "A but edited"));
        assert_eq!(list.len(), 1);
        // First snapshot wins; a duplicate add never overwrites.
        assert_eq!(list.get(&ProblemId::new("a")).unwrap().title, "A");
    }

    #[test]
    fn remove_preserves_order_of_rest() {
        let list = BookmarkList::default()
            .with_added(problem("a", "A"))
            .with_added(problem("b", "B"))
            .with_added(problem("c", "C"))
            .with_removed(&ProblemId::new("b"));
        let ids: Vec<&str> = list.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn remove_absent_is_noop() {
        let list = BookmarkList::default().with_added(problem("a", "A"));
        let same = list.clone().with_removed(&ProblemId::new("zzz"));
        assert_eq!(list, same);
    }

    #[test]
    fn toggle_reports_membership() {
        let (list, saved) = BookmarkList::default().toggled(&problem("a", "A"));
        assert!(saved);
        let (list, saved) = list.toggled(&problem("a", "A"));
        assert!(!saved);
        assert!(list.is_empty());
    }

    #[test]
    fn stored_round_trip() {
        let list = BookmarkList::default()
            .with_added(problem("a", "A"))
            .with_added(problem("b", "B"));
        let restored = BookmarkList::from_stored(Some(&list.to_bytes()));
        assert_eq!(restored, list);
    }

    #[test]
    fn stored_value_is_a_bare_json_array() {
        let bytes = BookmarkList::default().with_added(problem("a", "A")).to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["_id"], "a");
    }

    #[test]
    fn missing_or_corrupt_storage_degrades_to_empty() {
        assert!(BookmarkList::from_stored(None).is_empty());
        assert!(BookmarkList::from_stored(Some(b"not json")).is_empty());
        assert!(BookmarkList::from_stored(Some(b"{\"object\":true}")).is_empty());
    }

    #[test]
    fn stored_duplicates_are_collapsed() {
        let bytes = serde_json::to_vec(&vec![problem("a", "A"), problem("a", "A2")]).unwrap();
        let list = BookmarkList::from_stored(Some(&bytes));
        assert_eq!(list.len(), 1);
    }

    proptest! {
        #[test]
        fn toggle_twice_restores_original(ids in proptest::collection::vec("[a-z0-9]{1,8}", 0..6), extra in "[a-z0-9]{1,8}") {
            let mut list = BookmarkList::default();
            for id in &ids {
                list = list.with_added(problem(id, id));
            }
            let candidate = problem(&extra, &extra);
            let before = list.clone();
            let (toggled, _) = list.toggled(&candidate);
            let (restored, _) = toggled.toggled(&candidate);
            prop_assert_eq!(restored, before);
        }

        #[test]
        fn add_never_duplicates(ids in proptest::collection::vec("[a-z0-9]{1,4}", 0..12)) {
            let mut list = BookmarkList::default();
            for id in &ids {
                list = list.with_added(problem(id, id));
            }
            let mut seen: Vec<&str> = list.iter().map(|p| p.id.as_str()).collect();
            let total = seen.len();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), total);
        }
    }
}
