//! Events representing external UI input driving the table.
//!
//! This module defines the [`TableEvent`] type, the intake surface for the
//! external renderer or harness. Each event corresponds to one user-visible
//! control of the table: the search input, the column select, the match-case
//! checkbox, and the clear button. Events are processed sequentially by
//! [`TableController::handle_event`](crate::app::TableController::handle_event),
//! ensuring deterministic state transitions.

/// External UI events accepted by the table controller.
///
/// Payloads carry raw values as they arrive from the outside: `ColumnSelect`
/// in particular carries the label text of the selected option, which is the
/// one fallible input (an unknown label rejects the transition and leaves the
/// state unchanged).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// The search input's text changed to the given value.
    TermInput(String),

    /// A column was selected by its visible label (`"Id"`, `"Name"`,
    /// `"Email"`, or `"City"`).
    ColumnSelect(String),

    /// The match-case checkbox was toggled.
    MatchCaseToggle,

    /// The clear-filters control was activated.
    ClearClick,
}
