//! Read-only view trait over MARC records.
//!
//! This module defines the [`MarcRecord`] trait, the narrow interface the
//! extraction engine consumes. It exposes nothing but ordered iteration over
//! control fields (tag and payload) and data fields (tag, indicators and
//! subfields), so any record model can be extracted from once it implements
//! these two methods.

use crate::record::{Field, Record};

/// Read-only access to the fields of a MARC record.
///
/// Both iterators must yield fields in physical record order; extraction
/// output mirrors that order.
///
/// # Examples
///
/// ```
/// use mrrc_extract::{MarcRecord, Record};
///
/// fn count_fields<T: MarcRecord + ?Sized>(record: &T) -> usize {
///     record.control_fields_iter().count() + record.data_fields_iter().count()
/// }
///
/// let mut record = Record::new();
/// record.add_control_field_str("001", "12345");
/// assert_eq!(count_fields(&record), 1);
/// ```
pub trait MarcRecord {
    /// Iterate over all control fields (000-009) as (tag, payload) tuples.
    fn control_fields_iter(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_>;

    /// Iterate over all data fields (010+) in physical order.
    fn data_fields_iter(&self) -> Box<dyn Iterator<Item = &Field> + '_>;
}

impl MarcRecord for Record {
    fn control_fields_iter(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(Record::control_fields_iter(self))
    }

    fn data_fields_iter(&self) -> Box<dyn Iterator<Item = &Field> + '_> {
        Box::new(self.fields.iter())
    }
}
