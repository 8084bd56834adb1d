#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # mrrc-extract: field-spec extraction for MARC records
//!
//! Turns MARC bibliographic records into named lists of strings for search
//! indexing, driven by a compact field-spec language.
//!
//! ## Quick Start
//!
//! ```
//! use mrrc_extract::{ExtractionSpec, Field, Record};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spec = ExtractionSpec::from_json(r#"[
//!     {"name": "Title", "fieldSpec": "245ab", "scriptInclusion": "NONE"},
//!     {"name": "SortTitle", "extractFunction": "sortTitleExtractor"},
//!     {"name": "Date", "extractFunction": "dateExtractor"},
//!     {"name": "Language", "fieldSpec": "008[35-37]:041a",
//!      "trimPunctuation": false, "extractFunction": "languageMap"}
//! ]"#)?;
//!
//! let record = Record::builder()
//!     .control_field_str("008", "010831s2002    nyu      b    001 0 eng  ")
//!     .field(Field::builder("245".to_string(), '1', '0')
//!         .subfield_str('a', "Manufacturing consent :")
//!         .subfield_str('b', "the political economy of the mass media /")
//!         .build())
//!     .build();
//!
//! let values = spec.extract(&record);
//! assert_eq!(values["Title"], vec!["Manufacturing consent : the political economy of the mass media"]);
//! assert_eq!(values["SortTitle"], vec!["manufacturing consent : the political economy of the mass media"]);
//! assert_eq!(values["Date"], vec!["2002"]);
//! assert_eq!(values["Language"], vec!["English"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`field_spec`]: Field-spec compiler (`245ab:100a:008[35-37]`)
//! - [`field_index`]: Per-record index of the fields a batch reads
//! - [`extractor`]: Extraction engine and extractor configuration
//! - [`extraction_spec`]: JSON-configured batches of extractors
//! - [`functions`]: Derived functions (sort keys, dates, subjects, languages)
//! - [`punctuation`]: Trailing punctuation normalizer
//! - [`record`]: In-memory record model (`Record`, `Field`, `Subfield`)
//! - [`marc_record`]: Read-only record view consumed by extraction
//! - [`marcjson`]: MARC-in-JSON conversion
//! - [`field_linkage`]: 880 alternate-script linkage
//! - [`error`]: Error types and result type

pub mod error;
pub mod extraction_spec;
pub mod extractor;
pub mod field_index;
pub mod field_linkage;
pub mod field_spec;
pub mod functions;
pub mod marc_record;
pub mod marcjson;
pub mod punctuation;
pub mod record;

pub use error::{ExtractError, Result};
pub use extraction_spec::ExtractionSpec;
pub use extractor::{extract, Extractor, ExtractorConfig, ScriptInclusion};
pub use field_index::{FieldIndex, Origin, TagInterest};
pub use field_spec::{compile_field_spec, FieldComponent};
pub use functions::{DerivedFunction, LanguageTable};
pub use marc_record::MarcRecord;
pub use record::{Field, FieldBuilder, Record, RecordBuilder, Subfield};
