//! Record domain model and column selectors.
//!
//! This module defines the core [`Record`] type, one row of the customers
//! table, and the [`Column`] enum used both as a display header and as a
//! selector restricting which field a search term is matched against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::GridsiftError;

/// One data row of the table.
///
/// A record carries four named text fields. Records are immutable once loaded
/// and their identity is the `id` field. All fields are plain text, including
/// `id`: the table matches substrings against the display representation, so
/// there is nothing numeric about an identifier here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub email: String,
    pub city: String,
}

impl Record {
    /// Creates a record from its four field values.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridsift::domain::Record;
    ///
    /// let record = Record::new("1", "Alabaster", "office@alabaster.com", "Melbourne");
    /// assert_eq!(record.id, "1");
    /// assert_eq!(record.city, "Melbourne");
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            city: city.into(),
        }
    }

    /// Returns the text value of the field selected by `column`.
    #[must_use]
    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::Id => &self.id,
            Column::Name => &self.name,
            Column::Email => &self.email,
            Column::City => &self.city,
        }
    }
}

/// Enumerated field selector used for scoping a search.
///
/// Doubles as the display header: [`Column::label`] yields the exact header
/// text the table shows, and parsing accepts exactly those labels. The
/// variant order is the fixed display order of the table columns.
///
/// # Examples
///
/// ```
/// use gridsift::domain::Column;
///
/// let column: Column = "Email".parse()?;
/// assert_eq!(column, Column::Email);
/// assert_eq!(column.label(), "Email");
/// assert!("email".parse::<Column>().is_err());
/// # Ok::<(), gridsift::domain::GridsiftError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    /// The record identifier field.
    Id,
    /// The customer name field. Default search column.
    Name,
    /// The email address field.
    Email,
    /// The city field.
    City,
}

impl Column {
    /// All columns in fixed display order.
    ///
    /// This is the order of the table headers and never changes.
    pub const ALL: [Column; 4] = [Column::Id, Column::Name, Column::Email, Column::City];

    /// Returns the human label of this column, as shown in the table header
    /// and in the footer status text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Column::Id => "Id",
            Column::Name => "Name",
            Column::Email => "Email",
            Column::City => "City",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Column {
    type Err = GridsiftError;

    /// Parses a column from its exact human label.
    ///
    /// Labels are matched case-sensitively because they come from a fixed
    /// select element, not free-form user input. Anything other than the four
    /// labels is rejected with [`GridsiftError::InvalidColumn`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Id" => Ok(Column::Id),
            "Name" => Ok(Column::Name),
            "Email" => Ok(Column::Email),
            "City" => Ok(Column::City),
            other => Err(GridsiftError::InvalidColumn {
                value: other.to_string(),
            }),
        }
    }
}
