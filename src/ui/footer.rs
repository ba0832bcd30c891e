//! Footer status-line formatting.
//!
//! This module renders the table's footer text from the current view and
//! filter state. The wording is an exact contract with the rendered page, so
//! every character here matters, including the embedded newline before the
//! clear-filters slogan.

use crate::app::engine::FilteredView;
use crate::app::state::FilterState;

/// Renders the footer status text for a view and state.
///
/// # Wording Contract
///
/// - No filter active (empty term):
///
///   ```text
///   Showing {total} of {total} customers
///   ```
///
/// - Filter active:
///
///   ```text
///   Showing {matches} of {total} customers filtered by term "{term}" in {column} column {with|without} match case.
///   click to clear filters
///   ```
///
///   where the line break is a literal `\n`. The slogan line is present
///   exactly when a filter is active.
///
/// The output is a pure function of its two inputs, with no locale variation.
///
/// # Examples
///
/// ```
/// use gridsift::app::{apply, FilterState};
/// use gridsift::domain::{Record, RecordStore};
/// use gridsift::ui::footer_text;
///
/// let store = RecordStore::load(vec![
///     Record::new("1", "Alabaster", "office@alabaster.com", "Melbourne"),
/// ]);
/// let state = FilterState::default();
/// let view = apply(&store, &state);
/// assert_eq!(footer_text(&view, &state), "Showing 1 of 1 customers");
/// ```
#[must_use]
pub fn footer_text(view: &FilteredView, state: &FilterState) -> String {
    if !state.is_filter_active() {
        return format!(
            "Showing {total} of {total} customers",
            total = view.total_count
        );
    }

    let case_clause = if state.match_case {
        "with match case"
    } else {
        "without match case"
    };

    format!(
        "Showing {matches} of {total} customers filtered by term \"{term}\" in {column} column {case_clause}.\nclick to clear filters",
        matches = view.match_count,
        total = view.total_count,
        term = state.term,
        column = state.column.label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::engine::apply;
    use crate::domain::{Column, Record, RecordStore};

    fn customers() -> RecordStore {
        RecordStore::load(vec![
            Record::new("1", "Alabaster", "office@alabaster.com", "Melbourne"),
            Record::new("2", "Postimex", "conatact@postimex.pl", "Carthage"),
            Record::new("3", "Bondir", "info@bond.ir", "Belfast"),
        ])
    }

    #[test]
    fn unfiltered_footer_has_no_slogan() {
        let state = FilterState::default();
        let view = apply(&customers(), &state);
        let text = footer_text(&view, &state);
        assert_eq!(text, "Showing 3 of 3 customers");
        assert!(!text.contains('\n'));
    }

    #[test]
    fn filtered_footer_without_match_case() {
        let mut state = FilterState::default();
        state.set_term("ala");
        let view = apply(&customers(), &state);
        assert_eq!(
            footer_text(&view, &state),
            "Showing 1 of 3 customers filtered by term \"ala\" in Name column without match case.\nclick to clear filters"
        );
    }

    #[test]
    fn filtered_footer_with_match_case() {
        let mut state = FilterState::default();
        state.set_term("ala");
        state.toggle_match_case();
        let view = apply(&customers(), &state);
        assert_eq!(
            footer_text(&view, &state),
            "Showing 0 of 3 customers filtered by term \"ala\" in Name column with match case.\nclick to clear filters"
        );
    }

    #[test]
    fn footer_names_the_scoped_column() {
        let mut state = FilterState::default();
        state.set_column(Column::Email);
        state.set_term("bond.ir");
        let view = apply(&customers(), &state);
        assert_eq!(
            footer_text(&view, &state),
            "Showing 1 of 3 customers filtered by term \"bond.ir\" in Email column without match case.\nclick to clear filters"
        );
    }
}
