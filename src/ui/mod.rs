//! Presentation layer: view models and status-line formatting.
//!
//! This module turns the application state into display-ready data for an
//! external renderer. The renderer itself (DOM, terminal, anything else) is
//! out of scope; everything here is pure data and pure string formatting.
//!
//! ```text
//! FilteredView + FilterState → TableViewModel → external renderer
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Renderable table snapshot types
//! - [`footer`]: Exact footer status-line wording

pub mod footer;
pub mod viewmodel;

pub use footer::footer_text;
pub use viewmodel::{DisplayRow, TableViewModel};
