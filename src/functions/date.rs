//! Publication date heuristic (`dateExtractor`).
//!
//! The coded dates of the 008 fixed field are tried first:
//!
//! | offset | content          |
//! |--------|------------------|
//! | 6      | type of date     |
//! | 7-10   | date 1           |
//! | 11-14  | date 2           |
//!
//! `u` stands for an unknown digit, and a fill character `|` is read the same
//! way. Unknown digits round down in the start year and up in the end year.
//! When the coded dates resolve to nothing, the first year-like runs of the
//! 264 `$c` and then the 260 `$c` texts are used instead.
//!
//! At most one value is produced: a single year (`"1986"`) or a range
//! (`"1950/2029"`). A continuing resource with no end date gets `9999`.

use crate::field_index::FieldIndex;
use crate::punctuation::trim_blank;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::trace;

pub(crate) const CODED_DATE_TAG: &str = "008";
pub(crate) const PUBLICATION_TAGS: [&str; 2] = ["264", "260"];
const DATE_SUBFIELD: char = 'c';

const TYPE_OFFSET: usize = 6;
const DATE1_SLOT: std::ops::Range<usize> = 7..11;
const DATE2_SLOT: std::ops::Range<usize> = 11..15;

const UNKNOWN_DIGIT: char = 'u';
const FILL: char = '|';
const BLANK_MARKER: char = '#';

/// Largest span accepted for a questionable date range.
const QUESTIONABLE_SPAN: i32 = 200;
const OPEN_END_YEAR: i32 = 9999;

lazy_static! {
    // "195u", "195-", "195?" and "195|" all mean some year in the 1950s.
    static ref QUESTIONABLE_YEAR: Regex = Regex::new(r"\b[0-9]{3}[-?u|]").unwrap();
    static ref YEAR_RUN: Regex = Regex::new(r"\b[0-9x]{3,4}\b").unwrap();
}

/// Type codes whose date 1 alone describes the publication.
fn is_single_date_type(date_type: Option<char>) -> bool {
    matches!(
        date_type.map(|c| c.to_ascii_lowercase()),
        Some('t' | 'p' | 'r' | 's' | 'e')
    )
}

fn parse_year(digits: &str) -> i32 {
    trim_blank(digits).parse().unwrap_or(0)
}

/// Year with every `placeholder` replaced by `digit`; unparsable gives 0.
fn normalize_year(year: &str, placeholder: char, digit: char) -> i32 {
    parse_year(&year.replace(placeholder, &digit.to_string()))
}

/// A four-character date slot, or `None` when it is blank or all fill.
fn date_slot(slot: &[char]) -> Option<String> {
    let slot: String = slot.iter().collect();
    if slot.contains(BLANK_MARKER) || slot.chars().all(|c| c == FILL) {
        None
    } else {
        Some(slot.replace(FILL, "u"))
    }
}

fn floor_year(slot: Option<&str>) -> i32 {
    slot.map_or(0, |s| normalize_year(s, UNKNOWN_DIGIT, '0'))
}

fn ceiling_year(slot: Option<&str>) -> i32 {
    slot.map_or(0, |s| normalize_year(s, UNKNOWN_DIGIT, '9'))
}

/// Formats a resolved start and end year, or `None` when they don't
/// describe a usable date.
pub(crate) fn compare_dates(date1: i32, date2: i32, date_type: Option<char>) -> Option<String> {
    if date1 == 0 {
        return None;
    }
    match date_type.map(|c| c.to_ascii_lowercase()) {
        Some('q') => {
            if date2 == 0 || date2 == date1 {
                Some(date1.to_string())
            } else if date2 > date1 && date2 - date1 <= QUESTIONABLE_SPAN {
                Some(format!("{date1}/{date2}"))
            } else {
                None
            }
        }
        date_type => {
            if date2 > date1 {
                Some(format!("{date1}/{date2}"))
            } else if date2 == 0 && date_type == Some('c') {
                Some(format!("{date1}/{OPEN_END_YEAR}"))
            } else {
                Some(date1.to_string())
            }
        }
    }
}

/// Dates from the coded 008 slots.
fn coded_date(coded: &str, date_type: char) -> Option<String> {
    let chars: Vec<char> = coded.chars().collect();
    if chars.len() < DATE1_SLOT.end {
        return None;
    }
    let slot1 = date_slot(&chars[DATE1_SLOT]);
    let slot2 = if chars.len() > DATE2_SLOT.end {
        date_slot(&chars[DATE2_SLOT])
    } else {
        None
    };

    let (date1, date2) = match date_type {
        'q' | 'c' | 'd' | 'u' | 'm' | 'k' | 'i' => {
            (floor_year(slot1.as_deref()), ceiling_year(slot2.as_deref()))
        }
        'p' | 'r' | 's' | 'e' | 't' => {
            (floor_year(slot1.as_deref()), ceiling_year(slot1.as_deref()))
        }
        _ => (0, 0),
    };
    trace!(%date_type, date1, date2, "coded dates");
    compare_dates(date1, date2, Some(date_type))
}

/// Dates from the year runs of a descriptive date such as `"[1986?]"` or
/// `"1950-1955"`.
fn text_date(text: &str, date_type: Option<char>) -> Option<String> {
    let text = QUESTIONABLE_YEAR.replace_all(text, |caps: &Captures<'_>| {
        caps[0].replace(&['|', '?', '-', 'u'][..], "x")
    });
    let mut runs = YEAR_RUN.find_iter(&text).map(|m| m.as_str());
    let first = runs.next()?;
    let start = normalize_year(first, 'x', '0');
    let end = if is_single_date_type(date_type) {
        normalize_year(first, 'x', '9')
    } else {
        runs.last().map_or(0, |run| normalize_year(run, 'x', '9'))
    };
    compare_dates(start, end, date_type)
}

fn descriptive_date(index: &FieldIndex<'_>, date_type: Option<char>) -> Option<String> {
    PUBLICATION_TAGS.iter().find_map(|tag| {
        index
            .data_fields(tag)
            .iter()
            .filter_map(|entry| entry.field.get_subfield(DATE_SUBFIELD))
            .filter(|text| !text.is_empty())
            .find_map(|text| text_date(text, date_type))
    })
}

/// `dateExtractor`: appends the resolved publication date, if any.
pub(crate) fn publication_date(index: &FieldIndex<'_>, values: &mut Vec<String>) {
    let coded = index
        .control_field(CODED_DATE_TAG)
        .map_or("", |control| control.value);
    let date_type = coded.chars().nth(TYPE_OFFSET);
    let date = date_type
        .and_then(|date_type| coded_date(coded, date_type))
        .or_else(|| {
            trace!(?date_type, "falling back to descriptive dates");
            descriptive_date(index, date_type)
        });
    if let Some(date) = date {
        values.push(date);
    }
}
