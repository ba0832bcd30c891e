//! Application layer coordinating state, events, and recomputation.
//!
//! This module defines the core application logic layer, sitting between the
//! external renderer (out of scope for this crate) and the domain layer. It
//! implements the event-driven flow that powers the live-filtered table.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! UI Events → Event Handler → FilterState Mutation → Engine Recompute → View
//! ```
//!
//! # Modules
//!
//! - [`controller`]: Event processing and state transition coordinator
//! - [`engine`]: Pure filter computation over the record store
//! - [`events`]: External UI event types
//! - [`state`]: The mutable filter state and its four transitions
//!
//! # Example
//!
//! ```
//! use gridsift::app::{TableController, TableEvent};
//! use gridsift::domain::{Record, RecordStore};
//!
//! let store = RecordStore::load(vec![
//!     Record::new("1", "Alabaster", "office@alabaster.com", "Melbourne"),
//! ]);
//! let mut table = TableController::new(store);
//! let changed = table.handle_event(&TableEvent::TermInput("ala".into()))?;
//! assert!(changed);
//! # Ok::<(), gridsift::domain::GridsiftError>(())
//! ```

pub mod controller;
pub mod engine;
pub mod events;
pub mod state;

pub use controller::TableController;
pub use engine::{apply, FilteredView};
pub use events::TableEvent;
pub use state::FilterState;
