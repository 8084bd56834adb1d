//! Batches of extractors loaded from JSON.
//!
//! An extraction spec document is a JSON array of extractor objects:
//!
//! ```json
//! [
//!   { "name": "Title", "fieldSpec": "245abnps", "scriptInclusion": "NONE" },
//!   { "name": "Language", "fieldSpec": "008[35-37]:041a",
//!     "trimPunctuation": false, "extractFunction": "languageMap" },
//!   { "name": "Date", "extractFunction": "dateExtractor" }
//! ]
//! ```
//!
//! Every extractor is compiled when the document loads, so a bad entry fails
//! the whole load before any record is seen.

use crate::error::{ExtractError, Result};
use crate::extractor::{Extractor, ExtractorConfig};
use crate::field_index::{FieldIndex, TagInterest};
use crate::functions::LanguageTable;
use crate::marc_record::MarcRecord;
use indexmap::IndexMap;
use std::io::Read;
use tracing::debug;

/// A compiled batch of extractors sharing one field index per record.
///
/// # Examples
///
/// ```
/// use mrrc_extract::{ExtractionSpec, Field, Record};
///
/// let spec = ExtractionSpec::from_json(r#"[
///     {"name": "Title", "fieldSpec": "245ab"},
///     {"name": "Subjects", "fieldSpec": "650a"}
/// ]"#)?;
///
/// let record = Record::builder()
///     .field(Field::builder("245".to_string(), '1', '0')
///         .subfield_str('a', "Yasukuni Jinja :")
///         .subfield_str('b', "saiten to gyōji no subete.")
///         .build())
///     .build();
///
/// let values = spec.extract(&record);
/// assert_eq!(values["Title"], vec!["Yasukuni Jinja : saiten to gyōji no subete"]);
/// assert!(!values.contains_key("Subjects"));
/// # Ok::<(), mrrc_extract::ExtractError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExtractionSpec {
    extractors: Vec<Extractor>,
    interest: TagInterest,
    languages: LanguageTable,
}

impl ExtractionSpec {
    /// Compiles a batch of extractor configurations.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidSpec`] for the first configuration
    /// that does not compile.
    pub fn from_configs(configs: Vec<ExtractorConfig>) -> Result<Self> {
        let extractors = configs
            .into_iter()
            .map(ExtractorConfig::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_extractors(extractors))
    }

    /// Wraps already compiled extractors.
    #[must_use]
    pub fn from_extractors(extractors: Vec<Extractor>) -> Self {
        let interest = extractors.iter().collect();
        ExtractionSpec {
            extractors,
            interest,
            languages: LanguageTable::default(),
        }
    }

    /// Loads and compiles a JSON extraction spec document.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidSpec`] if the document is not an array
    /// of extractor objects or any extractor fails to compile.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_loaded(serde_json::from_str(json))
    }

    /// Loads a JSON extraction spec document from bytes.
    ///
    /// # Errors
    ///
    /// See [`ExtractionSpec::from_json`].
    pub fn from_slice(json: &[u8]) -> Result<Self> {
        Self::from_loaded(serde_json::from_slice(json))
    }

    /// Loads a JSON extraction spec document from a reader.
    ///
    /// # Errors
    ///
    /// See [`ExtractionSpec::from_json`]; read failures are reported the
    /// same way.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_loaded(serde_json::from_reader(reader))
    }

    fn from_loaded(loaded: serde_json::Result<Vec<ExtractorConfig>>) -> Result<Self> {
        let configs = loaded.map_err(|e| {
            ExtractError::InvalidSpec(format!("unable to read extraction spec: {e}"))
        })?;
        debug!(extractors = configs.len(), "loaded extraction spec");
        Self::from_configs(configs)
    }

    /// Replaces the language table used by `languageMap`.
    #[must_use]
    pub fn with_language_table(mut self, languages: LanguageTable) -> Self {
        self.languages = languages;
        self
    }

    /// The compiled extractors, in declaration order.
    #[must_use]
    pub fn extractors(&self) -> &[Extractor] {
        &self.extractors
    }

    /// Tags read by the batch.
    #[must_use]
    pub fn interest(&self) -> &TagInterest {
        &self.interest
    }

    /// Runs every extractor against `record`.
    ///
    /// Keys follow declaration order. Extractors that produce no values are
    /// left out.
    pub fn extract<R: MarcRecord + ?Sized>(&self, record: &R) -> IndexMap<String, Vec<String>> {
        let index = FieldIndex::build(record, &self.interest);
        let mut output = IndexMap::with_capacity(self.extractors.len());
        for extractor in &self.extractors {
            let values = extractor.extract_values(&index, &self.languages);
            if !values.is_empty() {
                output.insert(extractor.name().to_string(), values);
            }
        }
        output
    }
}
