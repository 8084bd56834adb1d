//! MARC-in-JSON conversion.
//!
//! Records are read from and written to the MARC-in-JSON layout:
//!
//! ```json
//! {
//!   "leader": "01234cam a2200289 a 4500",
//!   "fields": [
//!     { "001": "558505" },
//!     { "245": { "ind1": "1", "ind2": "0",
//!                "subfields": [ { "a": "Yasukuni Jinja :" } ] } }
//!   ]
//! }
//! ```
//!
//! `fields` keeps document order, which becomes the physical order used by
//! extraction. Control fields are the tags below `010`.

use crate::error::{ExtractError, Result};
use crate::record::{Field, Record, DEFAULT_LEADER};
use serde_json::{json, Map, Value};

/// Converts a record to a MARC-in-JSON value.
///
/// # Examples
///
/// ```
/// use mrrc_extract::{marcjson, Field, Record};
///
/// let record = Record::builder()
///     .control_field_str("001", "12345")
///     .field(Field::builder("245".to_string(), '1', '0').subfield_str('a', "Title").build())
///     .build();
///
/// let json = marcjson::record_to_marcjson(&record);
/// assert_eq!(json["fields"][1]["245"]["subfields"][0]["a"], "Title");
/// ```
#[must_use]
pub fn record_to_marcjson(record: &Record) -> Value {
    let mut fields = Vec::with_capacity(record.control_fields.len() + record.fields.len());

    for (tag, value) in &record.control_fields {
        let mut field = Map::new();
        field.insert(tag.clone(), Value::String(value.clone()));
        fields.push(Value::Object(field));
    }

    for field in &record.fields {
        let subfields: Vec<Value> = field
            .subfields()
            .map(|sf| {
                let mut subfield = Map::new();
                subfield.insert(sf.code.to_string(), Value::String(sf.value.clone()));
                Value::Object(subfield)
            })
            .collect();
        let mut entry = Map::new();
        entry.insert(
            field.tag.clone(),
            json!({
                "ind1": field.indicator1.to_string(),
                "ind2": field.indicator2.to_string(),
                "subfields": subfields,
            }),
        );
        fields.push(Value::Object(entry));
    }

    json!({
        "leader": record.leader,
        "fields": fields,
    })
}

fn is_control_tag(tag: &str) -> bool {
    tag < "010"
}

fn indicator(field: &Map<String, Value>, key: &str) -> char {
    field
        .get(key)
        .and_then(Value::as_str)
        .and_then(|s| s.chars().next())
        .unwrap_or(' ')
}

fn data_field(tag: &str, value: &Value) -> Result<Field> {
    let object = value
        .as_object()
        .ok_or_else(|| ExtractError::InvalidRecord(format!("field {tag} must be an object")))?;
    let mut field = Field::new(tag.to_string(), indicator(object, "ind1"), indicator(object, "ind2"));

    let subfields = object
        .get("subfields")
        .and_then(Value::as_array)
        .ok_or_else(|| ExtractError::InvalidRecord(format!("field {tag} has no subfields array")))?;
    for subfield in subfields {
        let subfield = subfield.as_object().ok_or_else(|| {
            ExtractError::InvalidRecord(format!("subfield of {tag} must be an object"))
        })?;
        for (code, value) in subfield {
            let (Some(code), Some(value)) = (code.chars().next(), value.as_str()) else {
                return Err(ExtractError::InvalidRecord(format!(
                    "subfield {code:?} of {tag} must map a code to a string"
                )));
            };
            field.add_subfield_str(code, value);
        }
    }
    Ok(field)
}

/// Converts a MARC-in-JSON value to a record.
///
/// A missing leader falls back to the default leader.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidRecord`] when the value is not an object
/// with a `fields` array, a tag is not three characters, or a field entry
/// has the wrong shape.
pub fn marcjson_to_record(json: &Value) -> Result<Record> {
    let object = json
        .as_object()
        .ok_or_else(|| ExtractError::InvalidRecord("expected a JSON object".to_string()))?;
    let leader = object
        .get("leader")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_LEADER);
    let fields = object
        .get("fields")
        .and_then(Value::as_array)
        .ok_or_else(|| ExtractError::InvalidRecord("missing fields array".to_string()))?;

    let mut record = Record::with_leader(leader);
    for entry in fields {
        let entry = entry
            .as_object()
            .ok_or_else(|| ExtractError::InvalidRecord("field entry must be an object".to_string()))?;
        for (tag, value) in entry {
            if tag.chars().count() != 3 {
                return Err(ExtractError::InvalidRecord(format!("invalid tag {tag:?}")));
            }
            if is_control_tag(tag) {
                let value = value.as_str().ok_or_else(|| {
                    ExtractError::InvalidRecord(format!("control field {tag} must be a string"))
                })?;
                record.add_control_field_str(tag, value);
            } else {
                record.add_field(data_field(tag, value)?);
            }
        }
    }
    Ok(record)
}

/// Parses MARC-in-JSON text into a record.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidRecord`] if the text is not JSON or
/// [`marcjson_to_record`] rejects it.
pub fn marcjson_str_to_record(json: &str) -> Result<Record> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| ExtractError::InvalidRecord(format!("invalid JSON: {e}")))?;
    marcjson_to_record(&value)
}
