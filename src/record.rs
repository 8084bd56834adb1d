//! MARC bibliographic record structures.
//!
//! This module provides the record types that extraction runs against:
//! - [`Record`]: Bibliographic record with control fields and data fields
//! - [`Field`]: Variable data fields (010+)
//! - [`Subfield`]: Named data elements within fields
//!
//! Data fields are kept in a single vector in the order they were added, so
//! the physical layout of the source record survives across tags. Extraction
//! output is ordered by that layout.
//!
//! # Examples
//!
//! ```
//! use mrrc_extract::{Field, Record};
//!
//! let record = Record::builder()
//!     .control_field_str("001", "12345")
//!     .field(
//!         Field::builder("245".to_string(), '1', '0')
//!             .subfield_str('a', "Title")
//!             .build(),
//!     )
//!     .build();
//!
//! assert_eq!(record.get_control_field("001"), Some("12345"));
//! assert_eq!(record.fields_by_tag("245").count(), 1);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

/// Leader used when none is supplied (24 characters).
pub const DEFAULT_LEADER: &str = "00000nam a2200000 a 4500";

/// A MARC bibliographic record
///
/// Control fields are non-repeatable: adding a control field whose tag is
/// already present replaces the earlier value in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Record leader (24 characters)
    pub leader: String,
    /// Control fields (000-009) - tag -> value, preserves insertion order
    pub control_fields: IndexMap<String, String>,
    /// Data fields (010+) in physical record order
    pub fields: Vec<Field>,
}

/// A data field in a MARC record (fields 010 and higher)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field tag (3 characters)
    pub tag: String,
    /// First indicator
    pub indicator1: char,
    /// Second indicator
    pub indicator2: char,
    /// Subfields (stored in `SmallVec` to avoid allocation for typical fields with 4 or fewer subfields)
    pub subfields: SmallVec<[Subfield; 4]>,
}

/// A subfield within a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subfield {
    /// Subfield code (single character)
    pub code: char,
    /// Subfield value
    pub value: String,
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl Record {
    /// Create an empty record with the default leader
    #[must_use]
    pub fn new() -> Self {
        Self::with_leader(DEFAULT_LEADER)
    }

    /// Create an empty record with the given leader
    #[must_use]
    pub fn with_leader(leader: impl Into<String>) -> Self {
        Record {
            leader: leader.into(),
            control_fields: IndexMap::new(),
            fields: Vec::new(),
        }
    }

    /// Create a builder for fluently constructing records
    #[must_use]
    pub fn builder() -> RecordBuilder {
        RecordBuilder {
            record: Record::new(),
        }
    }

    /// Add or replace a control field (000-009)
    pub fn add_control_field(&mut self, tag: String, value: String) {
        self.control_fields.insert(tag, value);
    }

    /// Add a control field using string slices
    ///
    /// Convenience method that converts &str arguments to String automatically.
    pub fn add_control_field_str(&mut self, tag: &str, value: &str) {
        self.add_control_field(tag.to_string(), value.to_string());
    }

    /// Get a control field value
    #[must_use]
    pub fn get_control_field(&self, tag: &str) -> Option<&str> {
        self.control_fields
            .get(tag)
            .map(std::string::String::as_str)
    }

    /// Append a data field after every field already in the record
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Get first field with a given tag
    #[must_use]
    pub fn get_field(&self, tag: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.tag == tag)
    }

    /// Iterate over all data fields in physical order
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Iterate over fields matching a specific tag
    ///
    /// # Examples
    ///
    /// ```ignore
    /// for field in record.fields_by_tag("650") {
    ///     if let Some(subject) = field.get_subfield('a') {
    ///         println!("Subject: {}", subject);
    ///     }
    /// }
    /// ```
    pub fn fields_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Field> + 'a {
        self.fields.iter().filter(move |f| f.tag == tag)
    }

    /// Iterate over all control fields
    ///
    /// Returns an iterator of (tag, value) tuples.
    pub fn control_fields_iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.control_fields
            .iter()
            .map(|(tag, value)| (tag.as_str(), value.as_str()))
    }

    /// Set subfield `code` on the first field tagged `tag`, adding the field
    /// (blank indicators) when the record has none.
    ///
    /// An existing subfield keeps its position and gets the new value.
    pub fn set_subfield(&mut self, tag: &str, code: char, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.tag == tag) {
            match field.subfields.iter_mut().find(|sf| sf.code == code) {
                Some(subfield) => subfield.value = value.to_string(),
                None => field.add_subfield_str(code, value),
            }
            return;
        }
        let mut field = Field::new(tag.to_string(), ' ', ' ');
        field.add_subfield_str(code, value);
        self.add_field(field);
    }
}

/// Index into a record by tag to get the first matching field
///
/// # Panics
///
/// Panics if no field with the given tag exists.
impl Index<&str> for Record {
    type Output = Field;

    fn index(&self, tag: &str) -> &Self::Output {
        self.get_field(tag).expect("field not found")
    }
}

/// Builder for fluently constructing MARC records
///
/// # Examples
///
/// ```
/// use mrrc_extract::{Field, Record};
///
/// let record = Record::builder()
///     .leader("01234cam a2200289 a 4500")
///     .control_field_str("008", "871002s1986    ja a         f00000 jpn  ")
///     .field(Field::builder("245".to_string(), '1', '0')
///         .subfield_str('a', "Yasukuni Jinja :")
///         .subfield_str('b', "saiten to gyōji no subete.")
///         .build())
///     .build();
/// assert_eq!(record.fields.len(), 1);
/// ```
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Set the leader of the record being built
    #[must_use]
    pub fn leader(mut self, leader: impl Into<String>) -> Self {
        self.record.leader = leader.into();
        self
    }

    /// Add a control field to the record being built
    #[must_use]
    pub fn control_field(mut self, tag: String, value: String) -> Self {
        self.record.add_control_field(tag, value);
        self
    }

    /// Add a control field using string slices
    #[must_use]
    pub fn control_field_str(mut self, tag: &str, value: &str) -> Self {
        self.record.add_control_field_str(tag, value);
        self
    }

    /// Add a data field to the record being built
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.record.add_field(field);
        self
    }

    /// Build the record
    #[must_use]
    pub fn build(self) -> Record {
        self.record
    }
}

impl Field {
    /// Create a new data field
    #[must_use]
    pub fn new(tag: String, indicator1: char, indicator2: char) -> Self {
        Field {
            tag,
            indicator1,
            indicator2,
            subfields: SmallVec::new(),
        }
    }

    /// Create a builder for constructing fields fluently
    ///
    /// # Examples
    ///
    /// ```
    /// use mrrc_extract::Field;
    ///
    /// let field = Field::builder("245".to_string(), '1', '0')
    ///     .subfield('a', "The Great Gatsby".to_string())
    ///     .subfield('c', "F. Scott Fitzgerald".to_string())
    ///     .build();
    /// assert_eq!(field.get_subfield('c'), Some("F. Scott Fitzgerald"));
    /// ```
    #[must_use]
    pub fn builder(tag: String, indicator1: char, indicator2: char) -> FieldBuilder {
        FieldBuilder {
            field: Field::new(tag, indicator1, indicator2),
        }
    }

    /// Add a subfield
    pub fn add_subfield(&mut self, code: char, value: String) {
        self.subfields.push(Subfield { code, value });
    }

    /// Add a subfield using a string slice
    ///
    /// Convenience method that converts &str to String automatically.
    pub fn add_subfield_str(&mut self, code: char, value: &str) {
        self.add_subfield(code, value.to_string());
    }

    /// Get first value for a subfield code
    #[must_use]
    pub fn get_subfield(&self, code: char) -> Option<&str> {
        self.subfields
            .iter()
            .find(|sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }

    /// Iterate over all subfields in storage order
    pub fn subfields(&self) -> impl Iterator<Item = &Subfield> {
        self.subfields.iter()
    }

    /// Iterate over subfields with a specific code
    ///
    /// # Examples
    ///
    /// ```ignore
    /// for value in field.subfields_by_code('a') {
    ///     println!("Author: {}", value);
    /// }
    /// ```
    pub fn subfields_by_code(&self, code: char) -> impl Iterator<Item = &str> {
        self.subfields
            .iter()
            .filter(move |sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }

    /// Values of every subfield with an alphabetic code, in storage order
    pub fn alphabetic_values(&self) -> impl Iterator<Item = &str> {
        self.subfields
            .iter()
            .filter(|sf| sf.code.is_alphabetic())
            .map(|sf| sf.value.as_str())
    }

    /// Concatenated values of all subfields whose code is in `codes`,
    /// space-separated, or `None` when nothing matches.
    #[must_use]
    pub fn subfields_as_string(&self, codes: &str) -> Option<String> {
        let values: Vec<&str> = self
            .subfields
            .iter()
            .filter(|sf| codes.contains(sf.code))
            .map(|sf| sf.value.as_str())
            .collect();
        if values.is_empty() {
            None
        } else {
            Some(values.join(" "))
        }
    }
}

/// Index into a field by subfield code to get the first matching value
///
/// # Panics
///
/// Panics if no subfield with the given code exists.
impl Index<char> for Field {
    type Output = str;

    fn index(&self, code: char) -> &Self::Output {
        self.get_subfield(code).expect("subfield not found")
    }
}

/// Builder for fluently constructing MARC fields
#[derive(Debug)]
pub struct FieldBuilder {
    field: Field,
}

impl FieldBuilder {
    /// Add a subfield to the field being built
    #[must_use]
    pub fn subfield(mut self, code: char, value: String) -> Self {
        self.field.add_subfield(code, value);
        self
    }

    /// Add a subfield using a string slice
    #[must_use]
    pub fn subfield_str(mut self, code: char, value: &str) -> Self {
        self.field.add_subfield_str(code, value);
        self
    }

    /// Build the field
    #[must_use]
    pub fn build(self) -> Field {
        self.field
    }
}
