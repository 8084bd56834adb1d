//! Field linkage support for MARC 880 (Alternate Graphical Representation) fields.
//!
//! The 880 field carries an alternate-script rendering of data that appears
//! in another field, e.g. the original Japanese title paired with the
//! romanized 245. Linkage is established through **subfield 6**, whose value
//! begins with the tag of the field being rendered:
//!
//! - `245: $6 880-01 $a Yasukuni Jinja :`
//! - `880: $6 245-01/$1 $a 靖國神社 :`
//!
//! The index builder files each 880 occurrence under the tag named by the
//! leading three characters of its first `$6`.

use crate::record::Field;

/// Tag reserved for alternate graphical representations.
pub const ALTERNATE_SCRIPT_TAG: &str = "880";

/// Subfield code carrying the linkage value.
pub const LINKAGE_SUBFIELD: char = '6';

/// Returns true when the field is an alternate-script (880) occurrence.
#[must_use]
pub fn is_alternate_script(field: &Field) -> bool {
    field.tag == ALTERNATE_SCRIPT_TAG
}

/// The tag an 880 field renders, read from the first three characters of
/// its first `$6`.
///
/// Returns `None` when the field has no `$6` or the value is shorter than
/// three characters. The prefix is not validated further, so `$6 245-01/$1`
/// and `$6 245-00` both link to `245`.
///
/// # Examples
///
/// ```
/// use mrrc_extract::field_linkage::linked_tag;
/// use mrrc_extract::Field;
///
/// let field = Field::builder("880".to_string(), '1', '0')
///     .subfield_str('6', "245-01/$1")
///     .subfield_str('a', "靖國神社 :")
///     .build();
/// assert_eq!(linked_tag(&field), Some("245"));
/// ```
#[must_use]
pub fn linked_tag(field: &Field) -> Option<&str> {
    let linkage = field.get_subfield(LINKAGE_SUBFIELD)?;
    let end = linkage.char_indices().nth(3).map_or(linkage.len(), |(i, _)| i);
    if linkage[..end].chars().count() < 3 {
        return None;
    }
    Some(&linkage[..end])
}
