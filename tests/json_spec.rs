//! Integration tests for JSON extraction spec documents.

mod common;

use common::{manufacturing_consent_record, yasukuni_record};
use mrrc_extract::{marcjson, DerivedFunction, ExtractError, ExtractionSpec, ScriptInclusion};
use std::io::Cursor;

const TEST_SPEC: &str = r#"[
  {
    "name": "TitleStatement",
    "fieldSpec": "245",
    "delimiter": " ----- "
  },
  {
    "name": "TitleStatement2",
    "fieldSpec": "245cab",
    "delimiter": " ----- ",
    "keepSubfieldOrder": true
  },
  {
    "name": "Title",
    "fieldSpec": "245abnps",
    "scriptInclusion": "NONE"
  },
  {
    "name": "Creator",
    "fieldSpec": "100abcdq:110:111"
  },
  {
    "name": "UniformTitle",
    "fieldSpec": "130a:240a"
  }
]"#;

#[test]
fn test_extract_values() {
    let spec = ExtractionSpec::from_json(TEST_SPEC).unwrap();
    let values = spec.extract(&manufacturing_consent_record());

    let statement = "Manufacturing consent : ----- the political economy of the mass media / ----- \
                     Edward S. Herman and Noam Chomsky ; with a new introduction by the authors";
    assert_eq!(values.len(), 4);
    assert_eq!(values["TitleStatement"], vec![statement]);
    assert_eq!(values["TitleStatement2"], vec![statement]);
    assert_eq!(
        values["Title"],
        vec!["Manufacturing consent : the political economy of the mass media"]
    );
    assert_eq!(values["Creator"], vec!["Herman, Edward S."]);
    assert!(!values.contains_key("UniformTitle"));
}

#[test]
fn test_extract_values_with_unknown_property() {
    let spec = ExtractionSpec::from_json(
        r#"[{
            "name": "Title",
            "fieldSpec": "245abnps",
            "trimPunctuation": true,
            "scriptInclusion": "NONE",
            "unknownProperty": "Value"
        }]"#,
    )
    .unwrap();
    let values = spec.extract(&manufacturing_consent_record());
    assert_eq!(values.len(), 1);
    assert_eq!(
        values["Title"],
        vec!["Manufacturing consent : the political economy of the mass media"]
    );
}

#[test]
fn test_value_sorting() {
    let spec = ExtractionSpec::from_json(
        r#"[
            {"name": "Test2", "fieldSpec": "010:008", "trimPunctuation": false,
             "scriptInclusion": "NONE"},
            {"name": "Test", "fieldSpec": "245ab:100a:260a", "trimPunctuation": false,
             "scriptInclusion": "NONE"}
        ]"#,
    )
    .unwrap();
    let values = spec.extract(&manufacturing_consent_record());
    assert_eq!(values.len(), 2);
    assert_eq!(
        values["Test"],
        vec![
            "Herman, Edward S.",
            "Manufacturing consent : the political economy of the mass media /",
            "New York :",
        ]
    );
    assert_eq!(
        values["Test2"],
        vec!["010831s2002    nyu      b    001 0 eng  ", "  2001050014"]
    );
}

#[test]
fn test_derived_functions_from_json() {
    let spec = ExtractionSpec::from_json(
        r#"[
            {"name": "Language", "fieldSpec": "008[35-37]:041a", "trimPunctuation": false,
             "scriptInclusion": "NONE", "extractFunction": "languageMap"},
            {"name": "Date", "extractFunction": "dateExtractor"},
            {"name": "SortTitle", "extractFunction": "sortTitleExtractor"},
            {"name": "SortAuthor", "extractFunction": "sortAuthorExtractor"},
            {"name": "Subjects", "extractFunction": "subjectHeadingExtractor"}
        ]"#,
    )
    .unwrap();
    let functions: Vec<Option<DerivedFunction>> =
        spec.extractors().iter().map(|e| e.function()).collect();
    assert!(functions.iter().all(Option::is_some));

    let values = spec.extract(&manufacturing_consent_record());
    assert_eq!(values["Language"], vec!["English"]);
    assert_eq!(values["Date"], vec!["2002"]);
    assert_eq!(
        values["SortTitle"],
        vec!["manufacturing consent : the political economy of the mass media"]
    );
    assert_eq!(
        values["SortAuthor"],
        vec![
            "herman, edward s.     manufacturing consent : the political economy of the mass \
             media / edward s. herman and noam chomsky ; with a new introduction by the authors"
        ]
    );
    assert_eq!(
        values["Subjects"],
        vec!["Mass media > Political aspects > United States"]
    );
}

#[test]
fn test_defaults_and_empty_options() {
    let spec = ExtractionSpec::from_json(
        r#"[{"name": "Title", "fieldSpec": "245a", "scriptInclusion": null,
             "filter": "", "extractFunction": ""}]"#,
    )
    .unwrap();
    let extractor = &spec.extractors()[0];
    assert_eq!(extractor.script_inclusion(), ScriptInclusion::Both);
    assert_eq!(extractor.function(), None);

    let values = spec.extract(&yasukuni_record());
    assert_eq!(values["Title"], vec!["Yasukuni Jinja", "靖國神社"]);
}

#[test]
fn test_load_from_reader() {
    let spec = ExtractionSpec::from_reader(Cursor::new(TEST_SPEC.as_bytes())).unwrap();
    assert_eq!(spec.extractors().len(), 5);
    let names: Vec<&str> = spec.extractors().iter().map(|e| e.name()).collect();
    assert_eq!(
        names,
        vec!["TitleStatement", "TitleStatement2", "Title", "Creator", "UniformTitle"]
    );
}

#[test]
fn test_load_invalid_extractors() {
    for json in [
        r#"[{"name": "Bad", "extractFunction": "noSuchFunction"}]"#,
        r#"[{"name": "Bad", "fieldSpec": "245|1"}]"#,
        r#"[{"name": "Bad", "fieldSpec": "008[a]"}]"#,
        r#"[{"name": "Bad", "fieldSpec": "245a", "filter": "[unclosed"}]"#,
        r#"[{"name": "Bad", "fieldSpec": "245a", "trimPunctuation": "yes"}]"#,
        r#"[{"name": "Bad", "scriptInclusion": "BOTH_WAYS"}]"#,
        r#"[{"fieldSpec": "245a"}]"#,
        r#"{"name": "Bad"}"#,
        "",
    ] {
        let result = ExtractionSpec::from_json(json);
        assert!(
            matches!(result, Err(ExtractError::InvalidSpec(_))),
            "accepted {json:?}"
        );
    }
}

#[test]
fn test_one_bad_extractor_fails_whole_document() {
    let result = ExtractionSpec::from_json(
        r#"[{"name": "Good", "fieldSpec": "245a"},
            {"name": "Bad", "extractFunction": "noSuchFunction"}]"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_spec_against_marcjson_record() {
    let record = marcjson::marcjson_str_to_record(
        r#"{
            "leader": "01234cam a2200289 a 4500",
            "fields": [
                {"008": "871002s1986    ja a         f00000 jpn  "},
                {"245": {"ind1": "1", "ind2": "0", "subfields": [
                    {"6": "880-01"}, {"a": "Yasukuni Jinja :"},
                    {"b": "saiten to gyōji no subete /"}]}},
                {"880": {"ind1": "1", "ind2": "0", "subfields": [
                    {"6": "245-01/$1"}, {"a": "靖國神社 :"},
                    {"b": "祭典と行事のすべて /"}]}}
            ]
        }"#,
    )
    .unwrap();
    let spec = ExtractionSpec::from_json(
        r#"[{"name": "Title", "fieldSpec": "245ab"},
            {"name": "Date", "extractFunction": "dateExtractor"},
            {"name": "Language", "fieldSpec": "008[35-37]", "extractFunction": "languageMap"}]"#,
    )
    .unwrap();
    let values = spec.extract(&record);
    assert_eq!(
        values["Title"],
        vec![
            "Yasukuni Jinja : saiten to gyōji no subete",
            "靖國神社 : 祭典と行事のすべて",
        ]
    );
    assert_eq!(values["Date"], vec!["1986"]);
    assert_eq!(values["Language"], vec!["Japanese"]);
}
