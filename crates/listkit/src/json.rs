//! Bridging between `serde_json` values and [`Record`]s.
//!
//! Data that arrives as JSON can be run through the same combinators as
//! native values. This module converts between JSON objects and records, and
//! offers the two operations whose behavior depends on the dynamic shape of
//! a value: one-level flattening of mixed arrays, and keyed lookup tables
//! over JSON objects.
//!
//! ```
//! use listkit::json::{from_record, to_record};
//! use listkit::records::merge_all;
//! use serde_json::json;
//!
//! let defaults = to_record(&json!({"theme": "dark", "tabs": 4})).unwrap();
//! let user = to_record(&json!({"tabs": 2})).unwrap();
//!
//! let settings = from_record(&merge_all(&[defaults, user]));
//! assert_eq!(settings, json!({"theme": "dark", "tabs": 2}));
//! ```

use listkit_common::record::sorted_keys;
use listkit_common::{ListError, Record, Result, ToKey};
use serde_json::{Map, Value};
use tracing::trace;

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Converts a JSON object into a record of its fields.
///
/// # Errors
///
/// Returns [`ListError::NotAnObject`] for any non-object value.
pub fn to_record(value: &Value) -> Result<Record<Value>> {
    match value {
        Value::Object(fields) => Ok(fields
            .iter()
            .map(|(key, field)| (key.clone(), field.clone()))
            .collect()),
        other => Err(ListError::NotAnObject { found: kind(other) }),
    }
}

/// Converts a record into a JSON object. Fields are emitted in key order.
pub fn from_record<V>(record: &Record<V>) -> Value
where
    V: Clone + Into<Value>,
{
    let mut fields = Map::with_capacity(record.len());
    for key in sorted_keys(record) {
        if let Some(value) = record.get(key) {
            fields.insert(key.to_string(), value.clone().into());
        }
    }
    Value::Object(fields)
}

/// Flattens one level of a mixed JSON list.
///
/// Arrays have their elements spliced in place; every other value passes
/// through. Nested arrays inside those arrays are kept as arrays.
///
/// # Examples
/// ```
/// use listkit::json::flatten;
/// use serde_json::json;
///
/// let mixed = [json!([1, 2]), json!([[3, 4]]), json!("five")];
/// assert_eq!(flatten(&mixed), vec![json!(1), json!(2), json!([3, 4]), json!("five")]);
/// ```
pub fn flatten(list: &[Value]) -> Vec<Value> {
    let mut result = Vec::with_capacity(list.len());
    for value in list {
        match value {
            Value::Array(items) => result.extend_from_slice(items),
            other => result.push(other.clone()),
        }
    }
    result
}

/// Builds a lookup table from each object's `key` field to the object.
///
/// The field is coerced with [`ToKey`], so `{"id": 7}` is filed under `"7"`.
///
/// # Errors
///
/// Returns [`ListError::NotAnObject`] for a non-object item and
/// [`ListError::MissingKey`] for an object without `key`.
///
/// # Examples
/// ```
/// use listkit::json::array_into_object;
/// use serde_json::json;
///
/// let users = [json!({"id": 7, "name": "ann"}), json!({"id": 9, "name": "bob"})];
/// let by_id = array_into_object("id", &users).unwrap();
/// assert_eq!(by_id.get("9"), Some(&users[1]));
/// ```
pub fn array_into_object(key: &str, list: &[Value]) -> Result<Record<Value>> {
    list.iter()
        .enumerate()
        .try_fold(Record::new(), |table, (index, item)| {
            let Value::Object(fields) = item else {
                trace!(index, "lookup table item is not an object");
                return Err(ListError::NotAnObject { found: kind(item) });
            };
            let field = fields.get(key).ok_or_else(|| ListError::MissingKey {
                key: key.to_string(),
                index,
            })?;
            Ok(table.update(field.to_key(), item.clone()))
        })
}
