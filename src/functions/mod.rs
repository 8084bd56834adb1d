//! Derived functions.
//!
//! A derived function post-processes the values an extractor produced, or
//! builds values of its own from the field index. Each one declares the
//! tags it reads so the index builder keeps them.
//!
//! | identifier                | function                            |
//! |---------------------------|-------------------------------------|
//! | `sortTitleExtractor`      | [`DerivedFunction::SortTitle`]      |
//! | `sortAuthorExtractor`     | [`DerivedFunction::SortAuthor`]     |
//! | `dateExtractor`           | [`DerivedFunction::Date`]           |
//! | `languageMap`             | [`DerivedFunction::LanguageMap`]    |
//! | `subjectHeadingExtractor` | [`DerivedFunction::SubjectHeading`] |

mod date;
mod language;
mod sort_keys;
mod subject_heading;

pub use language::LanguageTable;

use crate::error::ExtractError;
use crate::field_index::FieldIndex;
use std::fmt;
use std::str::FromStr;

/// The closed set of derived functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivedFunction {
    /// Lowercased title without leading articles
    SortTitle,
    /// Lowercased main entry followed by the titles
    SortAuthor,
    /// Publication year or year range
    Date,
    /// Language codes replaced by language names
    LanguageMap,
    /// 6xx subject headings joined with `" > "`
    SubjectHeading,
}

impl DerivedFunction {
    /// All derived functions.
    pub const ALL: [DerivedFunction; 5] = [
        DerivedFunction::SortTitle,
        DerivedFunction::SortAuthor,
        DerivedFunction::Date,
        DerivedFunction::LanguageMap,
        DerivedFunction::SubjectHeading,
    ];

    /// Identifier used in extractor configurations.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::SortTitle => "sortTitleExtractor",
            Self::SortAuthor => "sortAuthorExtractor",
            Self::Date => "dateExtractor",
            Self::LanguageMap => "languageMap",
            Self::SubjectHeading => "subjectHeadingExtractor",
        }
    }

    /// Data field tags the function reads.
    #[must_use]
    pub fn dependent_tags(self) -> Vec<String> {
        let tags: Vec<&str> = match self {
            Self::SortTitle => vec![sort_keys::TITLE_TAG],
            Self::SortAuthor => sort_keys::AUTHOR_TAGS
                .iter()
                .chain(sort_keys::AUTHOR_TITLE_TAGS.iter())
                .copied()
                .collect(),
            Self::Date => date::PUBLICATION_TAGS.to_vec(),
            Self::LanguageMap => Vec::new(),
            Self::SubjectHeading => return subject_heading::subject_tags().collect(),
        };
        tags.into_iter().map(str::to_string).collect()
    }

    /// Whether the function reads control fields.
    #[must_use]
    pub const fn needs_control_fields(self) -> bool {
        matches!(self, Self::Date)
    }

    /// Runs the function over `values`, appending to or replacing them.
    pub fn apply(self, index: &FieldIndex<'_>, values: &mut Vec<String>, languages: &LanguageTable) {
        match self {
            Self::SortTitle => sort_keys::sort_title(index, values),
            Self::SortAuthor => sort_keys::sort_author(index, values),
            Self::Date => date::publication_date(index, values),
            Self::LanguageMap => languages.map_codes(values),
            Self::SubjectHeading => subject_heading::subject_headings(index, values),
        }
    }
}

impl fmt::Display for DerivedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for DerivedFunction {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|function| function.identifier() == s)
            .ok_or_else(|| ExtractError::InvalidSpec(format!("unknown extract function {s:?}")))
    }
}
