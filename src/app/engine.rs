//! The filter engine: a pure projection from store and state to visible rows.
//!
//! This module implements the one piece of the table with real matching
//! semantics. [`apply`] maps an immutable [`RecordStore`] and the current
//! [`FilterState`] to a [`FilteredView`]: which rows are visible and what the
//! match counts are. The function is deterministic, mutates neither input,
//! and runs in O(n·m) for n records and a term of length m.
//!
//! # Matching Rules
//!
//! - An empty term short-circuits: every row is visible regardless of the
//!   selected column or the match-case flag.
//! - Otherwise the term is tested as a literal substring of the single field
//!   selected by the state's column. No wildcard or regex interpretation.
//! - With match-case off, both sides are folded with simple ASCII case
//!   folding before comparison. Non-ASCII characters compare byte-exact;
//!   locale-sensitive folding is deliberately not used.
//! - A term matching zero rows yields an empty view, never an error.

use crate::app::state::FilterState;
use crate::domain::{Record, RecordStore};

/// The rows currently visible plus counts, derived from filter state.
///
/// A view is a pure projection: it is recomputed after every state transition
/// and never persisted. `match_count` is always the length of `visible_rows`
/// and `total_count` the size of the backing store; both are carried
/// explicitly because the footer needs them side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView {
    /// Records satisfying the filter, in original store order.
    pub visible_rows: Vec<Record>,

    /// Number of records satisfying the filter.
    pub match_count: usize,

    /// Total number of records in the store.
    pub total_count: usize,
}

/// Computes the filtered view for the given store and state.
///
/// # Examples
///
/// ```
/// use gridsift::app::{apply, FilterState};
/// use gridsift::domain::{Record, RecordStore};
///
/// let store = RecordStore::load(vec![
///     Record::new("1", "Alabaster", "office@alabaster.com", "Melbourne"),
///     Record::new("2", "Postimex", "conatact@postimex.pl", "Carthage"),
/// ]);
///
/// let mut state = FilterState::default();
/// state.set_term("ala");
/// let view = apply(&store, &state);
/// assert_eq!(view.match_count, 1);
/// assert_eq!(view.total_count, 2);
/// assert_eq!(view.visible_rows[0].name, "Alabaster");
/// ```
#[must_use]
pub fn apply(store: &RecordStore, state: &FilterState) -> FilteredView {
    let _span = tracing::debug_span!(
        "apply_filter",
        total = store.len(),
        term_len = state.term.len(),
        column = %state.column,
        match_case = state.match_case,
    )
    .entered();

    let total_count = store.len();

    // Empty term: no filter active. Column and match-case must not influence
    // the outcome here, so skip the containment logic entirely.
    if state.term.is_empty() {
        return FilteredView {
            visible_rows: store.all().to_vec(),
            match_count: total_count,
            total_count,
        };
    }

    let visible_rows: Vec<Record> = store
        .all()
        .iter()
        .filter(|record| contains(record.field(state.column), &state.term, state.match_case))
        .cloned()
        .collect();

    let match_count = visible_rows.len();
    tracing::debug!(matches = match_count, "filter applied");

    FilteredView {
        visible_rows,
        match_count,
        total_count,
    }
}

/// Literal substring containment with optional ASCII case folding.
///
/// Case-insensitive mode folds both sides with `to_ascii_lowercase`, making
/// the case-insensitive match a strict superset of the case-sensitive one for
/// any term.
fn contains(haystack: &str, needle: &str, match_case: bool) -> bool {
    if match_case {
        haystack.contains(needle)
    } else {
        haystack
            .to_ascii_lowercase()
            .contains(&needle.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Column;
    use proptest::prelude::*;

    fn customers() -> RecordStore {
        RecordStore::load(vec![
            Record::new("1", "Alabaster", "office@alabaster.com", "Melbourne"),
            Record::new("2", "Postimex", "conatact@postimex.pl", "Carthage"),
            Record::new("3", "Bondir", "info@bond.ir", "Belfast"),
        ])
    }

    fn state(term: &str, column: Column, match_case: bool) -> FilterState {
        let mut state = FilterState::with_preferences(column, match_case);
        state.set_term(term);
        state
    }

    #[test]
    fn empty_term_shows_everything() {
        let store = customers();
        // Column and match-case must be irrelevant with an empty term.
        for column in Column::ALL {
            for match_case in [false, true] {
                let view = apply(&store, &state("", column, match_case));
                assert_eq!(view.visible_rows, store.all());
                assert_eq!(view.match_count, 3);
                assert_eq!(view.total_count, 3);
            }
        }
    }

    #[test]
    fn matches_are_scoped_to_the_selected_column() {
        let store = customers();

        let view = apply(&store, &state("ala", Column::Name, false));
        assert_eq!(view.match_count, 1);
        assert_eq!(view.visible_rows[0].id, "1");

        // The same text never matches through a different column.
        assert_eq!(apply(&store, &state("Melbourne", Column::Name, false)).match_count, 0);
        assert_eq!(apply(&store, &state("office@alabaster.com", Column::Name, false)).match_count, 0);
        assert_eq!(apply(&store, &state("Postimex", Column::Id, false)).match_count, 0);
        assert_eq!(apply(&store, &state("Carthage", Column::Email, false)).match_count, 0);
    }

    #[test]
    fn match_case_distinguishes_exact_case_only() {
        let store = customers();
        assert_eq!(apply(&store, &state("ala", Column::Name, true)).match_count, 0);
        assert_eq!(apply(&store, &state("Ala", Column::Name, true)).match_count, 1);
        assert_eq!(apply(&store, &state("ala", Column::Name, false)).match_count, 1);
    }

    #[test]
    fn id_and_email_columns_match_substrings() {
        let store = customers();

        let view = apply(&store, &state("2", Column::Id, false));
        assert_eq!(view.match_count, 1);
        assert_eq!(view.visible_rows[0].name, "Postimex");

        let view = apply(&store, &state("bond.ir", Column::Email, false));
        assert_eq!(view.match_count, 1);
        assert_eq!(view.visible_rows[0].name, "Bondir");

        // "bondir" has no dot; the email field does.
        assert_eq!(apply(&store, &state("bondir", Column::Email, false)).match_count, 0);
    }

    #[test]
    fn zero_matches_is_an_empty_view_not_an_error() {
        let store = customers();
        let view = apply(&store, &state("6", Column::Id, false));
        assert!(view.visible_rows.is_empty());
        assert_eq!(view.match_count, 0);
        assert_eq!(view.total_count, 3);
    }

    #[test]
    fn term_is_literal_not_a_pattern() {
        let store = RecordStore::load(vec![
            Record::new("1", "a.c", "x@y.z", "Dot"),
            Record::new("2", "abc", "x@y.z", "Plain"),
        ]);
        let view = apply(&store, &state("a.c", Column::Name, false));
        assert_eq!(view.match_count, 1);
        assert_eq!(view.visible_rows[0].city, "Dot");
    }

    #[test]
    fn order_is_preserved() {
        let store = RecordStore::load(vec![
            Record::new("1", "Bravo", "b@x.example", "Bern"),
            Record::new("2", "Alpha", "a@x.example", "Bonn"),
            Record::new("3", "Brim", "c@x.example", "Bari"),
        ]);
        let view = apply(&store, &state("br", Column::Name, false));
        let ids: Vec<&str> = view.visible_rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    proptest! {
        /// Case-insensitive containment is a superset of case-sensitive
        /// containment: any row matching with match-case on also matches
        /// with it off, for the same term and column.
        #[test]
        fn insensitive_is_superset_of_sensitive(
            term in "[A-Za-z0-9@. ]{0,12}",
            column_index in 0usize..4,
        ) {
            let store = customers();
            let column = Column::ALL[column_index];
            let sensitive = apply(&store, &state(&term, column, true));
            let insensitive = apply(&store, &state(&term, column, false));
            for row in &sensitive.visible_rows {
                prop_assert!(insensitive.visible_rows.contains(row));
            }
        }

        /// An empty term is the identity projection for any store contents.
        #[test]
        fn empty_term_is_identity(
            names in proptest::collection::vec("[A-Za-z]{0,8}", 0..8),
        ) {
            let records: Vec<Record> = names
                .iter()
                .enumerate()
                .map(|(i, name)| Record::new(format!("{i}"), name.clone(), "x@y.z", "Town"))
                .collect();
            let store = RecordStore::load(records);
            let view = apply(&store, &FilterState::default());
            prop_assert_eq!(view.visible_rows.as_slice(), store.all());
            prop_assert_eq!(view.match_count, view.total_count);
        }
    }
}
