//! Trailing punctuation normalization for extracted values.
//!
//! Catalogers end most subfields with ISBD punctuation (`Title /`,
//! `Publisher,`, `Smith, John.`). [`trim_punctuation`] removes it with a
//! fixed sequence of rules; several derived functions depend on the exact
//! order.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TRAILING_PUNCTUATION: Regex = Regex::new(r" *[,/;:] *$").unwrap();

    // A period is only dropped after three or more letters, which keeps
    // abbreviations such as "Jr." intact.
    static ref TRAILING_PERIOD: Regex =
        Regex::new(r"( *[\p{Alphabetic},A-Za-z0-9_]{3,})\.$").unwrap();

    static ref ENCLOSING_BRACKETS: Regex = Regex::new(r"^\[?([^\[\]]+)\]?$").unwrap();
}

/// Trims trailing punctuation from a value.
///
/// Rules, applied in order:
/// 1. strip one trailing `,` `/` `;` or `:` together with surrounding spaces
/// 2. strip a trailing period preceded by at least three word characters
/// 3. strip a leading `[` and trailing `]` when the string holds no other brackets
/// 4. trim outer whitespace
/// 5. a lone `.` becomes empty
///
/// # Examples
///
/// ```
/// use mrrc_extract::punctuation::trim_punctuation;
///
/// assert_eq!(trim_punctuation("Author Esq."), "Author Esq");
/// assert_eq!(trim_punctuation("Author Jr."), "Author Jr.");
/// assert_eq!(trim_punctuation("  Jan /"), "Jan");
/// ```
#[must_use]
pub fn trim_punctuation(value: &str) -> String {
    let value = TRAILING_PUNCTUATION.replace(value, "");
    let value = TRAILING_PERIOD.replace(&value, "${1}");
    let value = ENCLOSING_BRACKETS.replace(&value, "${1}");
    let value = trim_blank(&value);
    if value == "." {
        String::new()
    } else {
        value.to_string()
    }
}

/// Trims leading and trailing spaces and ASCII control characters.
pub(crate) fn trim_blank(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}
