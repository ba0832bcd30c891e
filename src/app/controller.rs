//! The table controller: event handling and state transition logic.
//!
//! This module implements [`TableController`], the coordinator that owns the
//! session's [`RecordStore`] and [`FilterState`], processes external UI
//! events, and exposes the current filtered view and footer text to a
//! rendering layer.
//!
//! # Architecture
//!
//! The controller follows a unidirectional data flow pattern:
//!
//! 1. Events arrive from the external renderer or harness
//! 2. [`TableController::handle_event`] pattern-matches the event type
//! 3. State mutations occur via [`FilterState`] methods
//! 4. The view is recomputed synchronously by the filter engine
//!
//! Every transition is immediately followed by a full recomputation, in the
//! same logical step. There is no intermediate state visible between a
//! transition and its recomputed view: callers observing the controller after
//! a transition always see a view consistent with the fully-applied state.
//! The controller is `Send`; an embedding with concurrent event sources must
//! serialize transitions through a single owner (a mutex or a channel), since
//! the controller itself is the single writer of the filter state.

use crate::app::engine::{self, FilteredView};
use crate::app::events::TableEvent;
use crate::app::state::FilterState;
use crate::domain::{Column, RecordStore, Result};
use crate::ui::footer;
use crate::ui::viewmodel::TableViewModel;

/// Orchestrates filter state, recomputation, and the externally visible view.
///
/// A controller is created once per session from an already-loaded store.
/// Making the loaded store a constructor argument is what rules out
/// query-before-load bugs: there is no way to ask an uninitialized table
/// anything.
///
/// # Examples
///
/// ```
/// use gridsift::app::TableController;
/// use gridsift::domain::{Record, RecordStore};
///
/// let store = RecordStore::load(vec![
///     Record::new("1", "Alabaster", "office@alabaster.com", "Melbourne"),
///     Record::new("2", "Postimex", "conatact@postimex.pl", "Carthage"),
///     Record::new("3", "Bondir", "info@bond.ir", "Belfast"),
/// ]);
/// let mut table = TableController::new(store);
///
/// assert_eq!(table.footer_text(), "Showing 3 of 3 customers");
/// table.set_term("ala");
/// assert_eq!(table.visible_rows().len(), 1);
/// assert!(table.is_clear_visible());
/// ```
#[derive(Debug, Clone)]
pub struct TableController {
    store: RecordStore,
    state: FilterState,
    view: FilteredView,
}

impl TableController {
    /// Creates a controller with default filter preferences.
    ///
    /// The initial state is an empty term scoped to the Name column with
    /// case-insensitive matching, and the initial view shows every record.
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self::with_state(store, FilterState::default())
    }

    /// Creates a controller with explicit initial preferences.
    ///
    /// Used when session preferences come from a
    /// [`Config`](crate::config::Config). The term always starts empty; only
    /// the column and match-case preferences are configurable.
    #[must_use]
    pub fn with_preferences(store: RecordStore, column: Column, match_case: bool) -> Self {
        Self::with_state(store, FilterState::with_preferences(column, match_case))
    }

    fn with_state(store: RecordStore, state: FilterState) -> Self {
        let view = engine::apply(&store, &state);
        Self { store, state, view }
    }

    /// Processes an external UI event and returns whether the observable
    /// view changed.
    ///
    /// The returned flag tells an embedding renderer whether it needs to
    /// redraw. Events that leave the state untouched (re-selecting the
    /// current column, clearing an already-empty filter, setting the term to
    /// its current text) report `false`.
    ///
    /// # Errors
    ///
    /// Returns [`GridsiftError::InvalidColumn`](crate::domain::GridsiftError::InvalidColumn)
    /// for a [`TableEvent::ColumnSelect`] whose label is not one of the four
    /// columns. The transition is rejected and the state is left unchanged.
    pub fn handle_event(&mut self, event: &TableEvent) -> Result<bool> {
        let _span = tracing::debug_span!("handle_event", event = ?event).entered();

        match event {
            TableEvent::TermInput(text) => Ok(self.set_term(text.clone())),
            TableEvent::ColumnSelect(label) => self.select_column_label(label),
            TableEvent::MatchCaseToggle => Ok(self.toggle_match_case()),
            TableEvent::ClearClick => Ok(self.clear()),
        }
    }

    /// Sets the search term and recomputes the view.
    ///
    /// Returns whether the observable view changed.
    pub fn set_term(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if self.state.term == term {
            return false;
        }
        self.state.set_term(term);
        self.recompute();
        true
    }

    /// Scopes the search to `column`, leaving term and match-case unchanged.
    ///
    /// Returns whether the observable view changed.
    pub fn select_column(&mut self, column: Column) -> bool {
        if self.state.column == column {
            return false;
        }
        self.state.set_column(column);
        self.recompute();
        true
    }

    /// Scopes the search to the column with the given visible label.
    ///
    /// This is the fallible path used by [`TableEvent::ColumnSelect`]: the
    /// label arrives as raw text from the external select element.
    ///
    /// # Errors
    ///
    /// Returns [`GridsiftError::InvalidColumn`](crate::domain::GridsiftError::InvalidColumn)
    /// if the label is unknown; the state is left unchanged.
    pub fn select_column_label(&mut self, label: &str) -> Result<bool> {
        let column: Column = label.parse()?;
        Ok(self.select_column(column))
    }

    /// Flips case sensitivity, leaving term and column unchanged.
    ///
    /// Always changes the state; the view changes whenever a term is active.
    pub fn toggle_match_case(&mut self) -> bool {
        self.state.toggle_match_case();
        self.recompute();
        true
    }

    /// Clears the filter term, preserving the column and match-case
    /// preferences.
    ///
    /// Idempotent: clearing an already-empty filter is a no-op and reports
    /// `false`.
    pub fn clear(&mut self) -> bool {
        if !self.state.is_filter_active() {
            return false;
        }
        self.state.clear();
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        self.view = engine::apply(&self.store, &self.state);
    }

    /// Returns the rows currently visible, in display order.
    #[must_use]
    pub fn visible_rows(&self) -> &[crate::domain::Record] {
        &self.view.visible_rows
    }

    /// Returns the fixed table headers, in display order.
    #[must_use]
    pub fn headers(&self) -> [&'static str; 4] {
        let [a, b, c, d] = Column::ALL;
        [a.label(), b.label(), c.label(), d.label()]
    }

    /// Returns the footer status text for the current view and state.
    #[must_use]
    pub fn footer_text(&self) -> String {
        footer::footer_text(&self.view, &self.state)
    }

    /// Returns whether the clear-filters control should be visible.
    ///
    /// True exactly when a filter term is present, independent of column and
    /// match-case settings.
    #[must_use]
    pub fn is_clear_visible(&self) -> bool {
        self.state.is_filter_active()
    }

    /// Returns the current filter state.
    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Returns the current filtered view.
    #[must_use]
    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    /// Computes a renderable view model snapshot from the current state.
    #[must_use]
    pub fn view_model(&self) -> TableViewModel {
        TableViewModel::compute(&self.view, &self.state)
    }
}
