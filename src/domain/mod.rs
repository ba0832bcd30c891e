//! Domain layer for the gridsift core.
//!
//! This module contains the core domain types for the record table,
//! independent of any rendering or data-source concerns. It follows
//! domain-driven design principles by keeping the data model isolated from
//! external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: The [`Record`] row model and [`Column`] selector
//! - [`store`]: The immutable [`RecordStore`] dataset
//!
//! # Examples
//!
//! ```
//! use gridsift::domain::{Column, Record, RecordStore};
//!
//! let store = RecordStore::load(vec![
//!     Record::new("1", "Alabaster", "office@alabaster.com", "Melbourne"),
//! ]);
//! assert_eq!(store.all()[0].field(Column::City), "Melbourne");
//! ```

pub mod error;
pub mod record;
pub mod store;

pub use error::{GridsiftError, Result};
pub use record::{Column, Record};
pub use store::RecordStore;
