//! Integration tests for the sort key, subject heading and language
//! derived functions.

mod common;

use common::{field, manufacturing_consent_record, title_the_record, yasukuni_record};
use mrrc_extract::{extract, DerivedFunction, ExtractorConfig, Record, ScriptInclusion};

fn apply(record: &Record, function: DerivedFunction) -> Vec<String> {
    extract(record, ExtractorConfig::new("f").with_function(function)).unwrap()
}

fn languages(record: &Record) -> Vec<String> {
    extract(
        record,
        ExtractorConfig::new("Language")
            .with_field_spec("008[35-37]:041a")
            .with_script_inclusion(ScriptInclusion::None)
            .with_trim_punctuation(false)
            .with_function(DerivedFunction::LanguageMap),
    )
    .unwrap()
}

// =============================================================================
// SORT KEYS
// =============================================================================

#[test]
fn test_sort_title_skips_leading_article() {
    let record = title_the_record();
    assert_eq!(apply(&record, DerivedFunction::SortTitle), vec!["test record"]);

    let regular = extract(
        &record,
        ExtractorConfig::new("Title")
            .with_field_spec("245abfghknp")
            .with_script_inclusion(ScriptInclusion::None),
    )
    .unwrap();
    assert_eq!(regular, vec!["The Test Record"]);
}

#[test]
fn test_sort_title_ignores_linked_title() {
    assert_eq!(
        apply(&yasukuni_record(), DerivedFunction::SortTitle),
        vec!["yasukuni jinja : saiten to gyōji no subete"]
    );
}

#[test]
fn test_sort_title_falls_back_to_form_subheading() {
    let record = Record::builder()
        .field(field("245", '0', '0', &[('k', "Papers,"), ('f', "1900-1950.")]))
        .build();
    assert_eq!(apply(&record, DerivedFunction::SortTitle), vec!["papers"]);
}

#[test]
fn test_sort_author_main_entry_then_titles() {
    let record = title_the_record();
    let regular = extract(
        &record,
        ExtractorConfig::new("Author").with_field_spec("100:110:111"),
    )
    .unwrap();
    assert_eq!(regular, vec!["Test, Author, author"]);

    assert_eq!(
        apply(&record, DerivedFunction::SortAuthor),
        vec!["test, author,     test record / author test"]
    );
}

#[test]
fn test_sort_author_uses_first_main_entry_tag_present() {
    let record = Record::builder()
        .field(field("111", '2', ' ', &[('a', "Conference on Things")]))
        .field(field("110", '2', ' ', &[('a', "Yasukuni Jinja (Tokyo, Japan).")]))
        .field(field("240", '1', '0', &[('a', "Works.")]))
        .build();
    assert_eq!(
        apply(&record, DerivedFunction::SortAuthor),
        vec!["yasukuni jinja (tokyo, japan).     works"]
    );
}

#[test]
fn test_sort_keys_absent_without_fields() {
    let record = Record::builder()
        .field(field("500", ' ', ' ', &[('a', "Note.")]))
        .build();
    assert!(apply(&record, DerivedFunction::SortTitle).is_empty());
    assert!(apply(&record, DerivedFunction::SortAuthor).is_empty());
}

// =============================================================================
// SUBJECT HEADINGS
// =============================================================================

#[test]
fn test_subject_headings_in_record_order() {
    assert_eq!(
        apply(&yasukuni_record(), DerivedFunction::SubjectHeading),
        vec![
            "Yasukuni Jinja (Tokyo, Japan) > Rites and ceremonies",
            "Shinto shrines > Japan > Tokyo",
        ]
    );
}

#[test]
fn test_repeated_subject_headings_collapse() {
    assert_eq!(
        apply(&manufacturing_consent_record(), DerivedFunction::SubjectHeading),
        vec!["Mass media > Political aspects > United States"]
    );
}

#[test]
fn test_local_subject_tags() {
    let record = Record::builder()
        .field(field("690", ' ', '4', &[('a', "Yale authors"), ('y', "20th century.")]))
        .field(field("651", ' ', '0', &[('a', "Japan"), ('x', "Religion.")]))
        .build();
    assert_eq!(
        apply(&record, DerivedFunction::SubjectHeading),
        vec!["Yale authors > 20th century", "Japan > Religion"]
    );
}

// =============================================================================
// LANGUAGES
// =============================================================================

#[test]
fn test_language_from_fixed_field_and_041() {
    assert_eq!(languages(&yasukuni_record()), vec!["Japanese"]);
    assert_eq!(languages(&manufacturing_consent_record()), vec!["English"]);
}

#[test]
fn test_language_codes_run_together() {
    let record = Record::builder()
        .control_field_str("008", "010831s2002    nyu      b    001 0 eng  ")
        .field(field("041", '1', ' ', &[('a', "engfre"), ('a', "ger,zzz")]))
        .build();
    assert_eq!(
        languages(&record),
        vec!["English", "French", "German", "zzz"]
    );
}
