//! Extraction engine.
//!
//! An [`ExtractorConfig`] is the declarative form of one named extraction:
//! a field spec plus post-processing options. [`ExtractorConfig::compile`]
//! turns it into an immutable [`Extractor`], which can then be run against
//! any number of records through a [`FieldIndex`].
//!
//! Values come out in physical record order, whatever order the spec lists
//! its components in. Control field values always precede data field values.
//!
//! # Examples
//!
//! ```
//! use mrrc_extract::{extract, ExtractorConfig, Field, Record};
//!
//! let record = Record::builder()
//!     .field(Field::builder("100".to_string(), '1', ' ')
//!         .subfield_str('a', "Herman, Edward S.")
//!         .build())
//!     .field(Field::builder("245".to_string(), '1', '0')
//!         .subfield_str('a', "Manufacturing consent :")
//!         .subfield_str('b', "the political economy of the mass media /")
//!         .build())
//!     .build();
//!
//! let values = extract(&record, ExtractorConfig::new("test").with_field_spec("245ab:100a"))?;
//! assert_eq!(
//!     values,
//!     vec![
//!         "Herman, Edward S.",
//!         "Manufacturing consent : the political economy of the mass media",
//!     ]
//! );
//! # Ok::<(), mrrc_extract::ExtractError>(())
//! ```

use crate::error::{ExtractError, Result};
use crate::field_index::{FieldIndex, IndexedControlField, IndexedField, Origin, TagInterest};
use crate::field_spec::{compile_field_spec, FieldComponent, Offset, SubfieldSelection};
use crate::functions::{DerivedFunction, LanguageTable};
use crate::marc_record::MarcRecord;
use crate::punctuation::trim_punctuation;
use crate::record::{Field, Subfield};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which occurrences of a data field tag are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScriptInclusion {
    /// Only the field itself, never its linked 880s
    None,
    /// The field and its linked 880s
    #[default]
    Both,
    /// Only the linked 880s
    Only,
}

impl ScriptInclusion {
    const fn includes_direct(self) -> bool {
        !matches!(self, Self::Only)
    }

    const fn includes_linked(self) -> bool {
        !matches!(self, Self::None)
    }
}

fn default_trim_punctuation() -> bool {
    true
}

fn default_delimiter() -> String {
    " ".to_string()
}

/// Declarative definition of one named extractor.
///
/// Deserializes from the camelCase JSON objects of an extraction spec
/// document; unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractorConfig {
    /// Key of the extractor's values in the output
    pub name: String,

    /// Field spec (`245ab:100a`). Function-only extractors leave it out.
    #[serde(default)]
    pub field_spec: Option<String>,

    /// Linked 880 handling. Absent means [`ScriptInclusion::Both`].
    #[serde(default)]
    pub script_inclusion: Option<ScriptInclusion>,

    /// Strip trailing ISBD punctuation from data field values.
    #[serde(default = "default_trim_punctuation")]
    pub trim_punctuation: bool,

    /// Regex whose first match in a value is replaced by its first group.
    #[serde(default)]
    pub filter: Option<String>,

    /// Joins subfield values combined into one value.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Derived function identifier, e.g. `dateExtractor`.
    #[serde(default)]
    pub extract_function: Option<String>,

    /// Join multi-code selections in stored order rather than spec order.
    #[serde(default)]
    pub keep_subfield_order: bool,
}

impl ExtractorConfig {
    /// A configuration with default options and no field spec.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        ExtractorConfig {
            name: name.into(),
            field_spec: None,
            script_inclusion: None,
            trim_punctuation: default_trim_punctuation(),
            filter: None,
            delimiter: default_delimiter(),
            extract_function: None,
            keep_subfield_order: false,
        }
    }

    /// Sets the field spec.
    #[must_use]
    pub fn with_field_spec(mut self, spec: impl Into<String>) -> Self {
        self.field_spec = Some(spec.into());
        self
    }

    /// Sets the linked 880 handling.
    #[must_use]
    pub fn with_script_inclusion(mut self, mode: ScriptInclusion) -> Self {
        self.script_inclusion = Some(mode);
        self
    }

    /// Enables or disables punctuation trimming.
    #[must_use]
    pub fn with_trim_punctuation(mut self, enabled: bool) -> Self {
        self.trim_punctuation = enabled;
        self
    }

    /// Sets the filter regex.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets the delimiter for combined values.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Sets the derived function.
    #[must_use]
    pub fn with_function(mut self, function: DerivedFunction) -> Self {
        self.extract_function = Some(function.identifier().to_string());
        self
    }

    /// Keeps stored subfield order for multi-code selections.
    #[must_use]
    pub fn with_keep_subfield_order(mut self, enabled: bool) -> Self {
        self.keep_subfield_order = enabled;
        self
    }

    /// Compiles the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidSpec`] if the field spec is malformed,
    /// the filter is not a valid regex, or the function identifier is unknown.
    pub fn compile(self) -> Result<Extractor> {
        let components = match self.field_spec.as_deref() {
            Some(spec) => compile_field_spec(spec)?,
            None => Vec::new(),
        };
        let filter = match self.filter.as_deref().filter(|f| !f.is_empty()) {
            Some(pattern) => Some(Regex::new(pattern).map_err(|e| {
                ExtractError::InvalidSpec(format!(
                    "unable to parse filter of extractor {:?}: {e}",
                    self.name
                ))
            })?),
            None => None,
        };
        let function = self
            .extract_function
            .as_deref()
            .filter(|f| !f.is_empty())
            .map(str::parse::<DerivedFunction>)
            .transpose()?;

        debug!(
            name = %self.name,
            components = components.len(),
            function = ?function,
            "compiled extractor"
        );

        Ok(Extractor {
            name: self.name,
            components,
            script_inclusion: self.script_inclusion.unwrap_or_default(),
            trim_punctuation: self.trim_punctuation,
            filter,
            delimiter: self.delimiter,
            function,
            keep_subfield_order: self.keep_subfield_order,
        })
    }
}

/// A compiled, immutable extractor.
#[derive(Debug, Clone)]
pub struct Extractor {
    name: String,
    components: Vec<FieldComponent>,
    script_inclusion: ScriptInclusion,
    trim_punctuation: bool,
    filter: Option<Regex>,
    delimiter: String,
    function: Option<DerivedFunction>,
    keep_subfield_order: bool,
}

impl Extractor {
    /// Output key of this extractor.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compiled components, wildcards expanded.
    #[must_use]
    pub fn components(&self) -> &[FieldComponent] {
        &self.components
    }

    /// Linked 880 handling.
    #[must_use]
    pub fn script_inclusion(&self) -> ScriptInclusion {
        self.script_inclusion
    }

    /// Derived function, if any.
    #[must_use]
    pub fn function(&self) -> Option<DerivedFunction> {
        self.function
    }

    /// Adds the tags this extractor reads to `interest`.
    pub fn register_interest(&self, interest: &mut TagInterest) {
        for component in &self.components {
            if component.is_control() {
                interest.require_control_fields();
            } else {
                interest.add_tag(component.tag.as_str());
            }
        }
        if let Some(function) = self.function {
            for tag in function.dependent_tags() {
                interest.add_tag(tag);
            }
            if function.needs_control_fields() {
                interest.require_control_fields();
            }
        }
    }

    /// Runs the extractor against an index built with at least this
    /// extractor's interest.
    #[must_use]
    pub fn extract_values(&self, index: &FieldIndex<'_>, languages: &LanguageTable) -> Vec<String> {
        let mut found: Vec<(Origin, String)> = Vec::new();
        for component in &self.components {
            if component.is_control() {
                if let Some(control) = index.control_field(&component.tag) {
                    found.extend(control_value(control, component.offset));
                }
            } else {
                self.extract_data(component, index, &mut found);
            }
        }
        found.sort_by_key(|(origin, _)| *origin);

        let mut values: Vec<String> = found.into_iter().map(|(_, value)| value).collect();
        if let Some(function) = self.function {
            function.apply(index, &mut values, languages);
        }
        values
    }

    fn extract_data(
        &self,
        component: &FieldComponent,
        index: &FieldIndex<'_>,
        found: &mut Vec<(Origin, String)>,
    ) {
        let direct: &[IndexedField<'_>] = if self.script_inclusion.includes_direct() {
            index.data_fields(&component.tag)
        } else {
            &[]
        };
        let linked: &[IndexedField<'_>] = if self.script_inclusion.includes_linked() {
            index.linked_fields(&component.tag)
        } else {
            &[]
        };
        for entry in direct.iter().chain(linked) {
            if !component.matches_indicators(entry.field) {
                continue;
            }
            for value in self.select_subfields(&component.subfields, entry.field) {
                found.push((entry.origin, self.post_process(value)));
            }
        }
    }

    fn select_subfields(&self, selection: &SubfieldSelection, field: &Field) -> Vec<String> {
        match selection {
            SubfieldSelection::All => {
                join_non_empty(field.alphabetic_values(), &self.delimiter).into_iter().collect()
            }
            SubfieldSelection::Single(code) => field
                .subfields_by_code(*code)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .collect(),
            SubfieldSelection::Multi(codes) => {
                let mut selected: Vec<&Subfield> = field
                    .subfields()
                    .filter(|sf| codes.contains(sf.code))
                    .collect();
                if !self.keep_subfield_order {
                    selected.sort_by_key(|sf| codes.find(sf.code));
                }
                join_non_empty(selected.iter().map(|sf| sf.value.as_str()), &self.delimiter)
                    .into_iter()
                    .collect()
            }
        }
    }

    fn post_process(&self, value: String) -> String {
        let value = if self.trim_punctuation {
            trim_punctuation(&value)
        } else {
            value
        };
        match &self.filter {
            Some(filter) => filter.replace(&value, "${1}").into_owned(),
            None => value,
        }
    }
}

impl<'a> FromIterator<&'a Extractor> for TagInterest {
    fn from_iter<I: IntoIterator<Item = &'a Extractor>>(extractors: I) -> Self {
        let mut interest = TagInterest::new();
        for extractor in extractors {
            extractor.register_interest(&mut interest);
        }
        interest
    }
}

/// The selected characters of a control field payload.
fn control_value(control: IndexedControlField<'_>, offset: Option<Offset>) -> Option<(Origin, String)> {
    let value = match offset {
        None => control.value.to_string(),
        Some(offset) => {
            let chars: Vec<char> = control.value.chars().collect();
            match offset {
                Offset::Position(n) => chars.get(n)?.to_string(),
                Offset::Range(start, end) if start < end && start < chars.len() => {
                    let end = chars.len().min(end.saturating_add(1));
                    chars[start..end].iter().collect()
                }
                Offset::Range(..) => return None,
            }
        }
    };
    Some((control.origin, value))
}

fn join_non_empty<'a>(values: impl Iterator<Item = &'a str>, delimiter: &str) -> Option<String> {
    let values: Vec<&str> = values.filter(|value| !value.is_empty()).collect();
    (!values.is_empty()).then(|| values.join(delimiter))
}

/// Compiles `config` and runs it against one record.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidSpec`] if the configuration does not
/// compile.
pub fn extract<R: MarcRecord + ?Sized>(record: &R, config: ExtractorConfig) -> Result<Vec<String>> {
    let extractor = config.compile()?;
    let interest: TagInterest = std::iter::once(&extractor).collect();
    let index = FieldIndex::build(record, &interest);
    Ok(extractor.extract_values(&index, &LanguageTable::default()))
}
