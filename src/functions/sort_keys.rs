//! Sortable title and author keys.

use crate::field_index::{FieldIndex, IndexedField};
use crate::punctuation::{trim_blank, trim_punctuation};
use crate::record::Field;

pub(crate) const TITLE_TAG: &str = "245";
pub(crate) const AUTHOR_TAGS: [&str; 3] = ["100", "110", "111"];
pub(crate) const AUTHOR_TITLE_TAGS: [&str; 2] = ["240", "245"];

const AUTHOR_TITLE_SEPARATOR: &str = "     ";

/// Non-filing character count carried in an indicator, if it is a digit.
fn non_filing_count(indicator: char) -> Option<usize> {
    indicator.to_digit(10).map(|d| d as usize)
}

/// Drops the first `count` characters. A count past the end keeps the text.
fn skip_non_filing(value: &str, count: usize) -> &str {
    match value.char_indices().nth(count) {
        Some((start, _)) => &value[start..],
        None if value.chars().count() == count => "",
        None => value,
    }
}

fn first_title<F>(fields: &[IndexedField<'_>], text: F) -> Option<(String, char)>
where
    F: Fn(&Field) -> String,
{
    fields.iter().find_map(|entry| {
        let title = text(entry.field);
        (!title.is_empty()).then_some((title, entry.field.indicator2))
    })
}

/// `sortTitleExtractor`: lowercased title proper of the first 245 that has one.
pub(crate) fn sort_title(index: &FieldIndex<'_>, values: &mut Vec<String>) {
    let titles = index.data_fields(TITLE_TAG);
    let found = first_title(titles, |field| {
        ["a", "b"]
            .iter()
            .filter_map(|code| field.subfields_as_string(code))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    })
    .or_else(|| first_title(titles, |field| field.subfields_as_string("k").unwrap_or_default()));

    let Some((title, indicator2)) = found else {
        return;
    };
    let title = match non_filing_count(indicator2) {
        Some(count) => skip_non_filing(&title, count),
        None => &title,
    };
    let key = trim_punctuation(title);
    if !key.is_empty() {
        values.push(key.to_lowercase());
    }
}

/// `sortAuthorExtractor`: main entry name followed by every uniform and
/// title-proper statement, each prefixed with five spaces.
pub(crate) fn sort_author(index: &FieldIndex<'_>, values: &mut Vec<String>) {
    let mut key = AUTHOR_TAGS
        .iter()
        .find_map(|tag| {
            index
                .data_fields(tag)
                .iter()
                .flat_map(|entry| entry.field.alphabetic_values())
                .find(|value| !value.is_empty())
        })
        .unwrap_or_default()
        .to_string();

    for tag in AUTHOR_TITLE_TAGS {
        for entry in index.data_fields(tag) {
            let joined = entry
                .field
                .subfields()
                .map(|sf| sf.value.as_str())
                .filter(|value| !value.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            if joined.is_empty() {
                continue;
            }
            let title = match non_filing_count(entry.field.indicator2) {
                Some(count) if count > 0 => skip_non_filing(&joined, count),
                _ => &joined,
            };
            if !title.is_empty() {
                key.push_str(AUTHOR_TITLE_SEPARATOR);
                key.push_str(title);
            }
        }
    }

    let key = trim_punctuation(trim_blank(&key));
    if !key.is_empty() {
        values.push(key.to_lowercase());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_index::TagInterest;
    use crate::record::Record;

    fn interest() -> TagInterest {
        let mut interest = TagInterest::new();
        for tag in AUTHOR_TAGS.iter().chain(AUTHOR_TITLE_TAGS.iter()) {
            interest.add_tag(*tag);
        }
        interest
    }

    fn run(record: &Record, f: fn(&FieldIndex<'_>, &mut Vec<String>)) -> Vec<String> {
        let index = FieldIndex::build(record, &interest());
        let mut values = Vec::new();
        f(&index, &mut values);
        values
    }

    #[test]
    fn test_skip_non_filing() {
        assert_eq!(skip_non_filing("The Test", 4), "Test");
        assert_eq!(skip_non_filing("The", 3), "");
        assert_eq!(skip_non_filing("An", 4), "An");
        assert_eq!(skip_non_filing("Les œuvres", 4), "œuvres");
    }

    #[test]
    fn test_sort_title_skips_article() {
        let record = Record::builder()
            .field(
                Field::builder("245".to_string(), '1', '4')
                    .subfield_str('a', "The Test Record /")
                    .subfield_str('c', "by nobody.")
                    .build(),
            )
            .build();
        assert_eq!(run(&record, sort_title), vec!["test record"]);
    }

    #[test]
    fn test_sort_title_joins_subtitle() {
        let record = Record::builder()
            .field(
                Field::builder("245".to_string(), '1', '0')
                    .subfield_str('a', "Yasukuni Jinja :")
                    .subfield_str('b', "saiten to gyōji no subete.")
                    .build(),
            )
            .build();
        assert_eq!(
            run(&record, sort_title),
            vec!["yasukuni jinja : saiten to gyōji no subete"]
        );
    }

    #[test]
    fn test_sort_title_form_fallback() {
        let record = Record::builder()
            .field(
                Field::builder("245".to_string(), '0', '0')
                    .subfield_str('k', "Papers,")
                    .subfield_str('f', "1900-1950.")
                    .build(),
            )
            .build();
        assert_eq!(run(&record, sort_title), vec!["papers"]);
    }

    #[test]
    fn test_sort_title_without_245() {
        assert!(run(&Record::new(), sort_title).is_empty());
    }

    #[test]
    fn test_sort_author_appends_titles() {
        let record = Record::builder()
            .field(
                Field::builder("100".to_string(), '1', ' ')
                    .subfield_str('a', "Test, Author,")
                    .subfield_str('e', "author.")
                    .build(),
            )
            .field(
                Field::builder("245".to_string(), '1', '4')
                    .subfield_str('a', "The Test Record /")
                    .build(),
            )
            .build();
        assert_eq!(
            run(&record, sort_author),
            vec!["test, author,     test record"]
        );
    }

    #[test]
    fn test_sort_author_falls_through_to_corporate_name() {
        let record = Record::builder()
            .field(
                Field::builder("110".to_string(), '2', ' ')
                    .subfield_str('a', "Yasukuni Jinja (Tokyo, Japan).")
                    .build(),
            )
            .build();
        // no period strip after a closing parenthesis
        assert_eq!(run(&record, sort_author), vec!["yasukuni jinja (tokyo, japan)."]);
    }

    #[test]
    fn test_sort_author_title_only() {
        let record = Record::builder()
            .field(
                Field::builder("245".to_string(), '0', '0')
                    .subfield_str('a', "Anonymous work.")
                    .build(),
            )
            .build();
        assert_eq!(run(&record, sort_author), vec!["anonymous work"]);
    }
}
