//! Gridsift: a filterable record-table core.
//!
//! Gridsift is the decision logic of a browser-style record table with live
//! text filtering, isolated behind a pure interface:
//! - Literal substring search scoped to a single column
//! - Match-case toggling with ASCII case folding
//! - Stateful clearing that preserves the user's column and case preferences
//! - Exact footer status-line wording, down to the embedded newline
//!
//! Rendering is deliberately not here. The crate computes what is visible and
//! what the status line says; an external renderer (DOM, TUI, test harness)
//! consumes the view model and draws it.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  External renderer / harness (out of scope)         │
//! └─────────────────────────────────────────────────────┘
//!            │ events                        ▲ view model
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling (TableController)                 │
//! │  - Filter recomputation (engine)                    │
//! │  - Filter state transitions                         │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Source Layer  │   │ Config Layer  │
//! │ (ui/)         │   │ (source/)     │   │ (config/)     │
//! │ - View models │   │ - JSON load   │   │ - TOML prefs  │
//! │ - Footer text │   │ - One-shot    │   │ - Trace level │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Record, Column, RecordStore                      │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Controller, filter engine, events, and filter state
//! - [`domain`]: Core domain types (Record, Column, RecordStore, errors)
//! - [`ui`]: View models and footer formatting
//! - [`source`]: One-shot JSON dataset loading
//! - [`config`]: Initial preferences parsed from TOML
//! - [`observability`]: Optional tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use gridsift::{initialize, Config, TableEvent};
//! use gridsift::domain::Record;
//!
//! let records = vec![
//!     Record::new("1", "Alabaster", "office@alabaster.com", "Melbourne"),
//!     Record::new("2", "Postimex", "conatact@postimex.pl", "Carthage"),
//!     Record::new("3", "Bondir", "info@bond.ir", "Belfast"),
//! ];
//! let mut table = initialize(records, &Config::default());
//!
//! assert_eq!(table.footer_text(), "Showing 3 of 3 customers");
//!
//! table.handle_event(&TableEvent::TermInput("ala".into()))?;
//! assert_eq!(table.visible_rows().len(), 1);
//! assert_eq!(
//!     table.footer_text(),
//!     "Showing 1 of 3 customers filtered by term \"ala\" in Name column without match case.\nclick to clear filters"
//! );
//!
//! table.handle_event(&TableEvent::ClearClick)?;
//! assert_eq!(table.visible_rows().len(), 3);
//! # Ok::<(), gridsift::domain::GridsiftError>(())
//! ```

pub mod app;
pub mod config;
pub mod domain;
pub mod observability;
pub mod source;
pub mod ui;

pub use app::{FilterState, FilteredView, TableController, TableEvent};
pub use config::Config;
pub use domain::{Column, GridsiftError, Record, RecordStore, Result};
pub use ui::{DisplayRow, TableViewModel};

/// Creates a table session from a loaded dataset and configuration.
///
/// Convenience facade wiring the layers together: loads the records into a
/// [`RecordStore`] and seeds a [`TableController`] with the configured
/// initial preferences. The session starts unfiltered.
#[must_use]
pub fn initialize(records: Vec<Record>, config: &Config) -> TableController {
    let store = RecordStore::load(records);
    TableController::with_preferences(store, config.column, config.match_case)
}
