//! Per-record field index.
//!
//! [`FieldIndex::build`] makes one forward pass over a record's data fields
//! and files every occurrence whose tag is in the [`TagInterest`] set, tagged
//! with an [`Origin`] that records its physical position. 880 occurrences are
//! filed under the tag their `$6` links to, and only when that tag is itself
//! of interest. When a consumer needs control fields, a second pass collects
//! them with origins that sort before every data-field origin.
//!
//! The index borrows from the record and is rebuilt for every record; it
//! never writes anything back into the record.

use crate::field_linkage::{is_alternate_script, linked_tag, ALTERNATE_SCRIPT_TAG};
use crate::marc_record::MarcRecord;
use crate::record::Field;
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Physical position of a field occurrence within its record.
///
/// Ordering puts every control field before every data field, then follows
/// record order within each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Origin {
    /// The n-th control field of the record
    Control(usize),
    /// The n-th indexed data field of the record
    Data(usize),
}

/// The set of tags a batch of extractors reads.
///
/// The alternate-script tag is always a member so linkage can be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInterest {
    tags: HashSet<String>,
    control_fields: bool,
}

impl Default for TagInterest {
    fn default() -> Self {
        Self::new()
    }
}

impl TagInterest {
    /// An interest set holding only the alternate-script tag.
    #[must_use]
    pub fn new() -> Self {
        let mut tags = HashSet::new();
        tags.insert(ALTERNATE_SCRIPT_TAG.to_string());
        TagInterest {
            tags,
            control_fields: false,
        }
    }

    /// Add a data field tag.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.insert(tag.into());
    }

    /// Ask the index builder to collect control fields.
    pub fn require_control_fields(&mut self) {
        self.control_fields = true;
    }

    /// Whether `tag` is of interest.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Whether control fields will be collected.
    #[must_use]
    pub fn needs_control_fields(&self) -> bool {
        self.control_fields
    }
}

/// A data field occurrence together with its origin.
#[derive(Debug, Clone, Copy)]
pub struct IndexedField<'r> {
    /// Position of the occurrence in the record
    pub origin: Origin,
    /// The occurrence itself
    pub field: &'r Field,
}

/// A control field payload together with its origin.
#[derive(Debug, Clone, Copy)]
pub struct IndexedControlField<'r> {
    /// Position of the control field in the record
    pub origin: Origin,
    /// Field payload
    pub value: &'r str,
}

/// Lookup of the fields one record holds for a batch of extractors.
#[derive(Debug, Default)]
pub struct FieldIndex<'r> {
    control_fields: HashMap<&'r str, IndexedControlField<'r>>,
    data_fields: HashMap<&'r str, Vec<IndexedField<'r>>>,
    linked_fields: HashMap<&'r str, Vec<IndexedField<'r>>>,
}

impl<'r> FieldIndex<'r> {
    /// Index the fields of `record` that `interest` names.
    pub fn build<R: MarcRecord + ?Sized>(record: &'r R, interest: &TagInterest) -> Self {
        let mut index = FieldIndex::default();
        let mut next = 0;
        let mut discarded = 0;

        for field in record.data_fields_iter() {
            if !interest.contains(&field.tag) {
                continue;
            }
            let entry = IndexedField {
                origin: Origin::Data(next),
                field,
            };
            next += 1;
            if is_alternate_script(field) {
                match linked_tag(field) {
                    Some(tag) if interest.contains(tag) => {
                        index.linked_fields.entry(tag).or_default().push(entry);
                    }
                    _ => discarded += 1,
                }
            } else {
                index
                    .data_fields
                    .entry(field.tag.as_str())
                    .or_default()
                    .push(entry);
            }
        }

        if interest.needs_control_fields() {
            for (n, (tag, value)) in record.control_fields_iter().enumerate() {
                index.control_fields.insert(
                    tag,
                    IndexedControlField {
                        origin: Origin::Control(n),
                        value,
                    },
                );
            }
        }

        trace!(
            indexed = next,
            discarded,
            control_fields = index.control_fields.len(),
            "built field index"
        );
        index
    }

    /// The control field with this tag, if collected.
    #[must_use]
    pub fn control_field(&self, tag: &str) -> Option<IndexedControlField<'r>> {
        self.control_fields.get(tag).copied()
    }

    /// Occurrences of `tag` in record order (880s excluded).
    #[must_use]
    pub fn data_fields(&self, tag: &str) -> &[IndexedField<'r>] {
        self.data_fields.get(tag).map_or(&[], Vec::as_slice)
    }

    /// 880 occurrences linked to `tag`, in record order.
    #[must_use]
    pub fn linked_fields(&self, tag: &str) -> &[IndexedField<'r>] {
        self.linked_fields.get(tag).map_or(&[], Vec::as_slice)
    }

    /// Occurrences of every indexed tag accepted by `predicate`, merged back
    /// into record order.
    pub fn data_fields_where<P>(&self, predicate: P) -> Vec<IndexedField<'r>>
    where
        P: Fn(&str) -> bool,
    {
        let mut fields: Vec<IndexedField<'r>> = self
            .data_fields
            .iter()
            .filter(|(tag, _)| predicate(tag))
            .flat_map(|(_, fields)| fields.iter().copied())
            .collect();
        fields.sort_by_key(|f| f.origin);
        fields
    }
}
