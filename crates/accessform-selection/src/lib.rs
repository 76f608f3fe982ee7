//! Dual-list selection for form editors
//!
//! [`FormListSelection`] partitions a fixed set of options into an "available" list and a
//! "selected" list. Both lists stay sorted by a caller-supplied key, and every change to the
//! selected list is replayed at the same index into a caller-owned [`MirrorList`] (typically
//! the rows that get submitted with the form).
//!
//! Unknown identifiers never produce errors: selecting something that is not available, or
//! deselecting something that is not selected, leaves all state untouched. Mutating calls
//! return `bool` so owners can tell the difference and decide how strict to be.
//!
//! Sort keys are read when an option is inserted. If a key field changes while the option
//! is tracked, the lists are not re-sorted.
//!
//! Insertion uses the lower bound of the key, so an option goes in front of others with an
//! equal key. Selecting and then deselecting an option therefore restores the previous
//! order exactly only when keys are unique: with `[y, x]` sharing a key, a round trip of
//! `x` leaves `[x, y]`.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use tracing::debug;

/// An option that can be tracked by a [`FormListSelection`].
pub trait Identified {
    /// Unique identifier of the option within one selection.
    fn id(&self) -> &str;
}

/// Externally-owned collection kept index-aligned with the selected options.
///
/// The selection never owns the mirror; it is handed in by `&mut` on every mutating call.
pub trait MirrorList<T> {
    /// Insert `item` at `index`, shifting later items right.
    ///
    /// An index past the end appends. This happens when pre-selected options were never
    /// replayed into the mirror with [`FormListSelection::seed_mirror`].
    fn insert_at(&mut self, index: usize, item: T);

    /// Remove and return the item at `index`.
    fn remove_at(&mut self, index: usize) -> Option<T>;

    /// Number of items currently in the mirror.
    fn len(&self) -> usize;

    /// Whether the mirror holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every item.
    fn clear(&mut self) {
        while !self.is_empty() {
            let last = self.len() - 1;
            self.remove_at(last);
        }
    }
}

impl<T> MirrorList<T> for Vec<T> {
    fn insert_at(&mut self, index: usize, item: T) {
        let index = index.min(Vec::len(self));
        self.insert(index, item);
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < Vec::len(self)).then(|| self.remove(index))
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

impl<T> MirrorList<T> for VecDeque<T> {
    fn insert_at(&mut self, index: usize, item: T) {
        let index = index.min(VecDeque::len(self));
        self.insert(index, item);
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        self.remove(index)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}

/// Projection from an option to the value it is sorted by.
pub type SortKeyFn<O, K> = Box<dyn Fn(&O) -> K>;

/// Transformation from a selected option to the mirror's element type.
pub type MapperFn<O, T> = Box<dyn Fn(&O) -> T>;

/// Sorted, disjoint "available" / "selected" partitions of a fixed option set.
///
/// `O` is the option type, `T` the element type stored in the mirror, and `K` the sort key.
pub struct FormListSelection<O, T, K = String> {
    all_options: Vec<O>,
    selected_options: Vec<O>,
    available_options: Vec<O>,
    mapper: MapperFn<O, T>,
    sort_key: SortKeyFn<O, K>,
}

impl<O, T> FormListSelection<O, T, String>
where
    O: Identified + Clone + 'static,
    T: 'static,
{
    /// Create an empty selection sorted by option id.
    #[must_use]
    pub fn new(mapper: impl Fn(&O) -> T + 'static) -> Self {
        Self::with_sort_key(mapper, |option: &O| option.id().to_string())
    }
}

impl<O, T, K> FormListSelection<O, T, K>
where
    O: Identified + Clone,
    K: Ord,
{
    /// Create an empty selection sorted by `sort_key`.
    #[must_use]
    pub fn with_sort_key(
        mapper: impl Fn(&O) -> T + 'static,
        sort_key: impl Fn(&O) -> K + 'static,
    ) -> Self {
        Self {
            all_options: Vec::new(),
            selected_options: Vec::new(),
            available_options: Vec::new(),
            mapper: Box::new(mapper),
            sort_key: Box::new(sort_key),
        }
    }

    /// Load the option universe and the ids that start out selected.
    ///
    /// Options are stably sorted by the key. Ids in `selected_ids` that match no option are
    /// ignored. Any previously populated state is replaced. The mirror is not touched; use
    /// [`seed_mirror`](Self::seed_mirror) when the pre-selection is non-empty.
    pub fn populate_options<I, S>(&mut self, options: impl IntoIterator<Item = O>, selected_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selected_ids: HashSet<String> = selected_ids
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect();

        let mut all: Vec<O> = options.into_iter().collect();
        let sort_key = &self.sort_key;
        all.sort_by_cached_key(|option| sort_key(option));

        self.selected_options.clear();
        self.available_options.clear();
        for option in &all {
            if selected_ids.contains(option.id()) {
                self.selected_options.push(option.clone());
            } else {
                self.available_options.push(option.clone());
            }
        }
        self.all_options = all;

        debug!(
            total = self.all_options.len(),
            selected = self.selected_options.len(),
            available = self.available_options.len(),
            "populated selection options"
        );
    }

    /// Reset `mirror` so it holds the mapped selected options, in order.
    pub fn seed_mirror(&self, mirror: &mut impl MirrorList<T>) {
        mirror.clear();
        for (index, option) in self.selected_options.iter().enumerate() {
            mirror.insert_at(index, (self.mapper)(option));
        }
    }

    /// Move an option from the available list into the selected list.
    ///
    /// The mapped option is inserted into `mirror` at the same index it takes in the selected
    /// list. Returns `false` (and changes nothing) if `id` is not currently available.
    pub fn select_option(&mut self, id: &str, mirror: &mut impl MirrorList<T>) -> bool {
        let Some(index) = position_of(&self.available_options, id) else {
            debug!(id, "select ignored, option not available");
            return false;
        };

        let option = self.available_options.remove(index);
        let insert_at = self.insertion_index(&self.selected_options, &option);
        mirror.insert_at(insert_at, (self.mapper)(&option));
        self.selected_options.insert(insert_at, option);

        debug!(id, index = insert_at, "option selected");
        true
    }

    /// Select each id in turn. Returns how many options actually moved.
    pub fn select_options<I, S>(&mut self, ids: I, mirror: &mut impl MirrorList<T>) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut moved = 0;
        for id in ids {
            if self.select_option(id.as_ref(), mirror) {
                moved += 1;
            }
        }
        moved
    }

    /// Move an option from the selected list back into the available list.
    ///
    /// The mirror entry at the option's index is removed. Returns `false` (and changes
    /// nothing) if `id` is not currently selected.
    pub fn deselect_option(&mut self, id: &str, mirror: &mut impl MirrorList<T>) -> bool {
        let Some(index) = position_of(&self.selected_options, id) else {
            debug!(id, "deselect ignored, option not selected");
            return false;
        };

        let option = self.selected_options.remove(index);
        mirror.remove_at(index);
        let insert_at = self.insertion_index(&self.available_options, &option);
        self.available_options.insert(insert_at, option);

        debug!(id, index = insert_at, "option deselected");
        true
    }

    /// Deselect each id in turn. Returns how many options actually moved.
    pub fn deselect_options<I, S>(&mut self, ids: I, mirror: &mut impl MirrorList<T>) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut moved = 0;
        for id in ids {
            if self.deselect_option(id.as_ref(), mirror) {
                moved += 1;
            }
        }
        moved
    }

    /// Every option, sorted by key.
    #[must_use]
    pub fn all_options(&self) -> &[O] {
        &self.all_options
    }

    /// Selected options, sorted by key. Index-aligned with the mirror.
    #[must_use]
    pub fn selected_options(&self) -> &[O] {
        &self.selected_options
    }

    /// Options not currently selected, sorted by key.
    #[must_use]
    pub fn available_options(&self) -> &[O] {
        &self.available_options
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        position_of(&self.selected_options, id).is_some()
    }

    #[must_use]
    pub fn is_available(&self, id: &str) -> bool {
        position_of(&self.available_options, id).is_some()
    }

    /// Index of `id` in the selected list, which is also its index in the mirror.
    #[must_use]
    pub fn selected_index(&self, id: &str) -> Option<usize> {
        position_of(&self.selected_options, id)
    }

    /// Sort key of `option` under this selection's projection.
    #[must_use]
    pub fn sort_key_of(&self, option: &O) -> K {
        (self.sort_key)(option)
    }

    /// Map `option` the way it would be written into the mirror.
    #[must_use]
    pub fn map_option(&self, option: &O) -> T {
        (self.mapper)(option)
    }

    /// Lower-bound insertion index of `option` within `list`.
    fn insertion_index(&self, list: &[O], option: &O) -> usize {
        let key = (self.sort_key)(option);
        list.partition_point(|existing| (self.sort_key)(existing) < key)
    }
}

fn position_of<O: Identified>(list: &[O], id: &str) -> Option<usize> {
    list.iter().position(|option| option.id() == id)
}

impl<O: Identified, T, K> fmt::Debug for FormListSelection<O, T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids = |list: &[O]| list.iter().map(|o| o.id().to_string()).collect::<Vec<_>>();
        f.debug_struct("FormListSelection")
            .field("selected", &ids(&self.selected_options))
            .field("available", &ids(&self.available_options))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Person {
        id: String,
        name: String,
    }

    impl Identified for Person {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn person(id: &str, name: &str) -> Person {
        Person {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn by_name() -> FormListSelection<Person, String> {
        FormListSelection::with_sort_key(|p: &Person| format!("row:{}", p.id), |p: &Person| {
            p.name.clone()
        })
    }

    fn names(list: &[Person]) -> Vec<&str> {
        list.iter().map(|p| p.name.as_str()).collect()
    }

    fn people() -> Vec<Person> {
        vec![person("c", "Carl"), person("a", "Alice"), person("b", "Bob")]
    }

    #[test]
    fn test_populate_sorts_and_partitions() {
        let mut selection = by_name();
        selection.populate_options(people(), ["c"]);

        assert_eq!(names(selection.all_options()), vec!["Alice", "Bob", "Carl"]);
        assert_eq!(names(selection.selected_options()), vec!["Carl"]);
        assert_eq!(names(selection.available_options()), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_populate_ignores_unknown_selected_ids() {
        let mut selection = by_name();
        selection.populate_options(people(), ["zzz", "a"]);

        assert_eq!(names(selection.selected_options()), vec!["Alice"]);
        assert_eq!(selection.available_options().len(), 2);
    }

    #[test]
    fn test_populate_replaces_previous_state() {
        let mut selection = by_name();
        selection.populate_options(people(), ["a", "b"]);
        selection.populate_options(vec![person("x", "Xena")], Vec::<String>::new());

        assert_eq!(names(selection.all_options()), vec!["Xena"]);
        assert!(selection.selected_options().is_empty());
        assert_eq!(names(selection.available_options()), vec!["Xena"]);
    }

    #[test]
    fn test_select_keeps_selected_sorted_and_mirror_aligned() {
        let mut selection = by_name();
        let mut mirror: Vec<String> = Vec::new();
        selection.populate_options(people(), Vec::<&str>::new());

        assert!(selection.select_option("b", &mut mirror));
        assert_eq!(names(selection.selected_options()), vec!["Bob"]);
        assert_eq!(names(selection.available_options()), vec!["Alice", "Carl"]);
        assert_eq!(mirror, vec!["row:b"]);

        assert!(selection.select_option("a", &mut mirror));
        assert_eq!(names(selection.selected_options()), vec!["Alice", "Bob"]);
        assert_eq!(mirror, vec!["row:a", "row:b"]);
    }

    #[test]
    fn test_select_unknown_or_selected_is_noop() {
        let mut selection = by_name();
        let mut mirror: Vec<String> = Vec::new();
        selection.populate_options(people(), Vec::<&str>::new());
        selection.select_option("a", &mut mirror);

        assert!(!selection.select_option("a", &mut mirror));
        assert!(!selection.select_option("nope", &mut mirror));
        assert_eq!(names(selection.selected_options()), vec!["Alice"]);
        assert_eq!(mirror, vec!["row:a"]);
    }

    #[test]
    fn test_deselect_removes_mirror_row_at_same_index() {
        let mut selection = by_name();
        let mut mirror: Vec<String> = Vec::new();
        selection.populate_options(people(), Vec::<&str>::new());
        selection.select_options(["a", "b", "c"], &mut mirror);

        assert!(selection.deselect_option("b", &mut mirror));
        assert_eq!(names(selection.selected_options()), vec!["Alice", "Carl"]);
        assert_eq!(mirror, vec!["row:a", "row:c"]);
        assert_eq!(names(selection.available_options()), vec!["Bob"]);

        assert!(!selection.deselect_option("b", &mut mirror));
        assert_eq!(mirror.len(), 2);
    }

    #[test]
    fn test_batch_operations_report_moved_count() {
        let mut selection = by_name();
        let mut mirror: Vec<String> = Vec::new();
        selection.populate_options(people(), Vec::<&str>::new());

        assert_eq!(selection.select_options(["c", "x", "a", "c"], &mut mirror), 2);
        assert_eq!(mirror, vec!["row:a", "row:c"]);
        assert_eq!(selection.deselect_options(["a", "b"], &mut mirror), 1);
        assert_eq!(mirror, vec!["row:c"]);
    }

    #[test]
    fn test_equal_keys_keep_stable_order() {
        let mut selection = by_name();
        let mut mirror: Vec<String> = Vec::new();
        selection.populate_options(
            vec![person("2", "Sam"), person("1", "Sam"), person("3", "Ann")],
            Vec::<&str>::new(),
        );

        let ids: Vec<&str> = selection.all_options().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);

        selection.select_option("1", &mut mirror);
        selection.select_option("2", &mut mirror);
        // lower bound: later arrivals with an equal key go in front
        assert_eq!(mirror, vec!["row:2", "row:1"]);
    }

    #[test]
    fn test_seed_mirror_matches_preselection() {
        let mut selection = by_name();
        let mut mirror = VecDeque::from(vec!["stale".to_string()]);
        selection.populate_options(people(), ["c", "a"]);
        selection.seed_mirror(&mut mirror);

        assert_eq!(mirror, VecDeque::from(vec!["row:a".to_string(), "row:c".to_string()]));

        selection.select_option("b", &mut mirror);
        assert_eq!(mirror.get(1).map(String::as_str), Some("row:b"));
    }

    #[test]
    fn test_select_without_seeded_mirror_appends() {
        let mut selection = by_name();
        let mut mirror: Vec<String> = Vec::new();
        selection.populate_options(people(), ["a", "b"]);

        assert!(selection.select_option("c", &mut mirror));
        assert_eq!(names(selection.selected_options()), vec!["Alice", "Bob", "Carl"]);
        assert_eq!(mirror, vec!["row:c"]);

        let mut queue: VecDeque<String> = VecDeque::new();
        selection.deselect_option("c", &mut mirror);
        assert!(selection.select_option("c", &mut queue));
        assert_eq!(queue, VecDeque::from(vec!["row:c".to_string()]));
    }

    #[test]
    fn test_equal_keys_do_not_round_trip_to_prior_order() {
        let mut selection = by_name();
        let mut mirror: Vec<String> = Vec::new();
        selection.populate_options(
            vec![person("y", "Sam"), person("x", "Sam")],
            Vec::<&str>::new(),
        );

        let ids = |list: &[Person]| list.iter().map(|p| p.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(selection.available_options()), vec!["y", "x"]);

        selection.select_option("x", &mut mirror);
        selection.deselect_option("x", &mut mirror);
        assert_eq!(ids(selection.available_options()), vec!["x", "y"]);
    }

    #[test]
    fn test_default_key_sorts_by_id() {
        let mut selection: FormListSelection<Person, String> =
            FormListSelection::new(|p: &Person| p.name.clone());
        selection.populate_options(people(), Vec::<&str>::new());

        let ids: Vec<&str> = selection.available_options().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(selection.is_available("a"));
        assert!(!selection.is_selected("a"));
    }

    #[test]
    fn test_debug_lists_ids() {
        let mut selection = by_name();
        selection.populate_options(people(), ["b"]);
        let rendered = format!("{selection:?}");
        assert!(rendered.contains("selected: [\"b\"]"));
        assert!(rendered.contains("available: [\"a\", \"c\"]"));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn select_all_then_deselect_all_restores_order(
                labels in prop::collection::btree_set("[a-z]{1,6}", 0..16),
            ) {
                let options: Vec<Person> = labels
                    .iter()
                    .rev()
                    .enumerate()
                    .map(|(i, name)| person(&i.to_string(), name))
                    .collect();
                let ids: Vec<String> = options.iter().map(|p| p.id.clone()).collect();

                let mut selection = by_name();
                let mut mirror: Vec<String> = Vec::new();
                selection.populate_options(options, Vec::<&str>::new());
                let sorted = names(selection.all_options()).join(",");

                prop_assert_eq!(selection.select_options(&ids, &mut mirror), ids.len());
                prop_assert!(selection.available_options().is_empty());
                prop_assert_eq!(names(selection.selected_options()).join(","), sorted.clone());

                prop_assert_eq!(selection.deselect_options(&ids, &mut mirror), ids.len());
                prop_assert!(mirror.is_empty());
                prop_assert_eq!(names(selection.available_options()).join(","), sorted);
            }
        }
    }
}
