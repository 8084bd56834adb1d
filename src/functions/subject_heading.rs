//! Subject heading assembly from 6xx fields.
//!
//! Each subject occurrence becomes one heading: the main heading group (a
//! tag-specific set of codes joined into one component) and every form,
//! general, chronological and geographic subdivision, ordered by where they
//! sit in the field and joined with `" > "`.

use crate::field_index::FieldIndex;
use crate::punctuation::trim_punctuation;
use crate::record::Field;

const HEADING_SEPARATOR: &str = " > ";

/// `$v`, `$x`, `$y`, `$z`: each subfield is its own component.
const SUBDIVISION_CODES: [char; 4] = ['v', 'x', 'y', 'z'];

/// Codes joined into the main heading component for a subject tag.
fn main_heading_codes(tag: &str) -> Option<&'static str> {
    match tag {
        "600" | "692" => Some("abcdgjq"),
        "610" => Some("abcdfgt"),
        "611" => Some("acdegnqu"),
        "630" | "695" => Some("adfhklmnoprst"),
        "650" | "690" | "693" => Some("abcdg"),
        "651" | "691" => Some("abcdfgh"),
        "694" => Some("acdgnqu"),
        _ => None,
    }
}

/// Whether `tag` belongs to the 6xx subject family.
pub(crate) fn is_subject_tag(tag: &str) -> bool {
    let bytes = tag.as_bytes();
    bytes.len() == 3 && bytes[0] == b'6' && bytes[1..].iter().all(u8::is_ascii_digit)
}

/// Every tag from 600 to 699.
pub(crate) fn subject_tags() -> impl Iterator<Item = String> {
    (600..700).map(|tag: u16| tag.to_string())
}

fn heading(field: &Field) -> Option<String> {
    let mut components: Vec<(usize, String)> = Vec::new();

    if let Some(codes) = main_heading_codes(&field.tag) {
        let mut position = None;
        let mut parts = Vec::new();
        for (i, subfield) in field.subfields().enumerate() {
            if codes.contains(subfield.code) {
                position.get_or_insert(i);
                parts.push(subfield.value.as_str());
            }
        }
        if let Some(position) = position {
            let value = trim_punctuation(&parts.join(" "));
            if !value.is_empty() {
                components.push((position, value));
            }
        }
    }

    for code in SUBDIVISION_CODES {
        for (i, subfield) in field.subfields().enumerate() {
            if subfield.code == code {
                let value = trim_punctuation(&subfield.value);
                if !value.is_empty() {
                    components.push((i, value));
                }
            }
        }
    }

    if components.is_empty() {
        return None;
    }
    components.sort_by_key(|(position, _)| *position);
    Some(
        components
            .into_iter()
            .map(|(_, value)| value)
            .collect::<Vec<_>>()
            .join(HEADING_SEPARATOR),
    )
}

/// `subjectHeadingExtractor`: one heading per subject occurrence, in record
/// order, skipping headings already present.
pub(crate) fn subject_headings(index: &FieldIndex<'_>, values: &mut Vec<String>) {
    for entry in index.data_fields_where(is_subject_tag) {
        if let Some(heading) = heading(entry.field) {
            if !values.contains(&heading) {
                values.push(heading);
            }
        }
    }
}
