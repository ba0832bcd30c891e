//! The immutable baseline dataset for a table session.

use std::sync::Arc;

use crate::domain::record::Record;

/// Ordered, immutable sequence of records backing one table session.
///
/// A store is created once at session start from the external data source and
/// never mutated afterwards. Insertion order is preserved and never re-sorted
/// by the filter engine: the engine only ever projects a sub-sequence out of
/// it.
///
/// The records live behind an `Arc`, so cloning a store is cheap and clones
/// can be shared freely across threads for concurrent reads. The filter
/// state, not the store, is the only mutable piece of a session.
///
/// # Examples
///
/// ```
/// use gridsift::domain::{Record, RecordStore};
///
/// let store = RecordStore::load(vec![
///     Record::new("1", "Alabaster", "office@alabaster.com", "Melbourne"),
///     Record::new("2", "Postimex", "conatact@postimex.pl", "Carthage"),
/// ]);
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.all()[0].name, "Alabaster");
/// ```
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Arc<[Record]>,
}

impl RecordStore {
    /// Loads a store from an ordered sequence of records.
    ///
    /// Loading cannot fail: validating and producing the records is the
    /// responsibility of the external data source (see [`crate::source`]).
    #[must_use]
    pub fn load(records: Vec<Record>) -> Self {
        tracing::debug!(record_count = records.len(), "record store loaded");
        Self {
            records: records.into(),
        }
    }

    /// Returns all records in original insertion order.
    #[must_use]
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Returns the total number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
