//! Mutable filter state for a table session.
//!
//! This module defines [`FilterState`], the single piece of mutable state in a
//! session: the current search term, the column the term is scoped to, and the
//! match-case flag. Everything else a renderer observes (visible rows, counts,
//! footer text) is derived from this state plus the immutable record store.
//!
//! # State Machine
//!
//! The state is only mutated through four transitions, driven by the
//! controller:
//!
//! - `set_term`: replace the search term
//! - `set_column`: change the scoped column, term and match-case untouched
//! - `toggle_match_case`: flip case sensitivity, term and column untouched
//! - `clear`: reset the term only, preserving column and match-case
//!
//! The asymmetry of `clear` is deliberate and load-bearing: clearing removes
//! the active filter but never resets the user's column or case preference.

use crate::domain::Column;

/// Current term, column, and match-case settings of a session.
///
/// Defaults to an empty term scoped to the [`Column::Name`] column with
/// case-insensitive matching, mirroring the table's initial UI state. The
/// column is a plain enum value and therefore always one of the four valid
/// selectors; there is no unset or null column.
///
/// # Examples
///
/// ```
/// use gridsift::app::FilterState;
/// use gridsift::domain::Column;
///
/// let state = FilterState::default();
/// assert_eq!(state.term, "");
/// assert_eq!(state.column, Column::Name);
/// assert!(!state.match_case);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// The current search term. Empty means no filter is active.
    pub term: String,

    /// The column the term is matched against.
    pub column: Column,

    /// Whether substring comparison is case-sensitive.
    pub match_case: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            term: String::new(),
            column: Column::Name,
            match_case: false,
        }
    }
}

impl FilterState {
    /// Creates a state with the given initial preferences and an empty term.
    ///
    /// Used when a session starts from a [`Config`](crate::config::Config)
    /// carrying non-default preferences.
    #[must_use]
    pub fn with_preferences(column: Column, match_case: bool) -> Self {
        Self {
            term: String::new(),
            column,
            match_case,
        }
    }

    /// Replaces the search term.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        tracing::trace!(term = %self.term, "search term updated");
    }

    /// Changes the scoped column. Term and match-case are unchanged.
    pub fn set_column(&mut self, column: Column) {
        self.column = column;
        tracing::trace!(column = %column, "search column updated");
    }

    /// Flips case sensitivity. Term and column are unchanged.
    pub fn toggle_match_case(&mut self) {
        self.match_case = !self.match_case;
        tracing::trace!(match_case = self.match_case, "match case toggled");
    }

    /// Resets the term only. Column and match-case are explicitly preserved.
    pub fn clear(&mut self) {
        self.term.clear();
        tracing::trace!("filter term cleared");
    }

    /// Returns `true` when a filter term is present.
    ///
    /// This is the derived visibility of the clear control: it is hidden
    /// exactly when no filter term is present, independent of column or
    /// match-case settings.
    #[must_use]
    pub fn is_filter_active(&self) -> bool {
        !self.term.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_preserves_column_and_match_case() {
        let mut state = FilterState::with_preferences(Column::City, true);
        state.set_term("bel");
        state.clear();
        assert_eq!(state.term, "");
        assert_eq!(state.column, Column::City);
        assert!(state.match_case);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut state = FilterState::default();
        state.set_term("ala");
        state.clear();
        let once = state.clone();
        state.clear();
        assert_eq!(state, once);
    }

    #[test]
    fn filter_active_tracks_term_only() {
        let mut state = FilterState::default();
        assert!(!state.is_filter_active());
        state.toggle_match_case();
        state.set_column(Column::Email);
        assert!(!state.is_filter_active());
        state.set_term("x");
        assert!(state.is_filter_active());
    }
}
