//! View model types representing renderable table state.
//!
//! This module defines the immutable view model computed from application
//! state, following the MVVM pattern. View models are optimized for rendering
//! and contain pre-computed display information: header labels, row cells as
//! owned strings, the footer text, and the clear-control visibility. They
//! contain no business logic.

use crate::app::engine::FilteredView;
use crate::app::state::FilterState;
use crate::domain::{Column, Record};
use crate::ui::footer;

/// Complete table view model for rendering.
///
/// Computed by [`TableController::view_model`](crate::app::TableController::view_model)
/// and consumed by an external renderer. A snapshot: later controller
/// transitions do not affect an already-computed model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewModel {
    /// Fixed column header labels, in display order.
    pub headers: [&'static str; 4],

    /// Visible rows, in display order.
    pub rows: Vec<DisplayRow>,

    /// Footer status text, including the clear-filters slogan line when a
    /// filter is active.
    pub footer: String,

    /// Whether the clear-filters control should be shown.
    pub clear_visible: bool,
}

/// Display cells for a single visible row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub city: String,
}

impl DisplayRow {
    /// Returns the cells in display order, matching the header order.
    #[must_use]
    pub fn cells(&self) -> [&str; 4] {
        [&self.id, &self.name, &self.email, &self.city]
    }
}

impl From<&Record> for DisplayRow {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            city: record.city.clone(),
        }
    }
}

impl TableViewModel {
    /// Computes a view model from a filtered view and the state it was
    /// derived from.
    #[must_use]
    pub fn compute(view: &FilteredView, state: &FilterState) -> Self {
        let [a, b, c, d] = Column::ALL;
        Self {
            headers: [a.label(), b.label(), c.label(), d.label()],
            rows: view.visible_rows.iter().map(DisplayRow::from).collect(),
            footer: footer::footer_text(view, state),
            clear_visible: state.is_filter_active(),
        }
    }
}
