//! One-shot dataset loading from the external data source.
//!
//! A table session consumes an ordered sequence of records exactly once, at
//! initialization. This module provides that boundary as simple JSON
//! deserialization: a dataset file is a JSON array of record objects, loaded
//! whole into memory.
//!
//! # File Format
//!
//! ```json
//! [
//!   { "id": "1", "name": "Alabaster", "email": "office@alabaster.com", "city": "Melbourne" },
//!   { "id": "2", "name": "Postimex", "email": "conatact@postimex.pl", "city": "Carthage" }
//! ]
//! ```
//!
//! Array order is preserved and becomes the store's insertion order. There is
//! no write path: records are never persisted back.

use std::io::Read;
use std::path::Path;

use crate::domain::{Record, Result};

/// Parses a dataset from a JSON reader.
///
/// # Errors
///
/// Returns [`GridsiftError::Source`](crate::domain::GridsiftError::Source) if
/// the input is not a JSON array of records.
pub fn records_from_json<R: Read>(reader: R) -> Result<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_reader(reader)?;
    tracing::debug!(record_count = records.len(), "dataset parsed");
    Ok(records)
}

/// Loads a dataset from a JSON file on disk.
///
/// # Errors
///
/// Returns [`GridsiftError::Io`](crate::domain::GridsiftError::Io) if the
/// file cannot be read, or
/// [`GridsiftError::Source`](crate::domain::GridsiftError::Source) if its
/// contents are not a JSON array of records.
pub fn records_from_path(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    tracing::debug!(path = ?path, "loading dataset");
    let file = std::fs::File::open(path)?;
    records_from_json(std::io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GridsiftError;
    use std::io::Write;

    const DATASET: &str = r#"[
        { "id": "1", "name": "Alabaster", "email": "office@alabaster.com", "city": "Melbourne" },
        { "id": "2", "name": "Postimex", "email": "conatact@postimex.pl", "city": "Carthage" },
        { "id": "3", "name": "Bondir", "email": "info@bond.ir", "city": "Belfast" }
    ]"#;

    #[test]
    fn parses_records_in_array_order() {
        let records = records_from_json(DATASET.as_bytes()).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Alabaster", "Postimex", "Bondir"]);
    }

    #[test]
    fn empty_array_is_a_valid_dataset() {
        let records = records_from_json("[]".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn malformed_json_is_a_source_error() {
        let err = records_from_json("{not json".as_bytes()).unwrap_err();
        assert!(matches!(err, GridsiftError::Source(_)));
    }

    #[test]
    fn missing_field_is_a_source_error() {
        let err = records_from_json(r#"[{ "id": "1", "name": "X" }]"#.as_bytes()).unwrap_err();
        assert!(matches!(err, GridsiftError::Source(_)));
    }

    #[test]
    fn loads_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DATASET.as_bytes()).unwrap();
        let records = records_from_path(file.path()).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = records_from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, GridsiftError::Io(_)));
    }
}
