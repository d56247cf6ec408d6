use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{OnePasswordError, Result};

/// A JSON object as returned by `op`.
pub type Object = Map<String, Value>;

/// Decoded `op` reply: one object, or an ordered list of objects.
///
/// `op item get` yields a single object (or a list when several fields are
/// selected), while the list commands yield arrays. The shape is settled once
/// here so callers can match on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    Single(Object),
    List(Vec<Object>),
}

impl Record {
    /// Decode `op` stdout. Anything other than an object or an array of
    /// objects is a [`OnePasswordError::Json`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| {
            OnePasswordError::Json(format!(
                "Cannot JSON load response from 1Password. Got {}",
                e
            ))
        })
    }

    /// Look up a top-level key. Lists have no top-level keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Record::Single(obj) => obj.get(key),
            Record::List(_) => None,
        }
    }

    /// Extract `key` as text. Strings come back verbatim, other JSON values in
    /// their compact JSON form.
    pub fn require_str(&self, key: &str) -> Result<String> {
        match self.get(key) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Ok(other.to_string()),
            None => Err(OnePasswordError::ValueNotFound(format!(
                "Value not found. Missing key '{}'",
                key
            ))),
        }
    }

    pub fn as_single(&self) -> Option<&Object> {
        match self {
            Record::Single(obj) => Some(obj),
            Record::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Object]> {
        match self {
            Record::Single(_) => None,
            Record::List(items) => Some(items),
        }
    }

    /// Number of objects carried.
    pub fn len(&self) -> usize {
        match self {
            Record::Single(_) => 1,
            Record::List(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_value(self) -> Value {
        match self {
            Record::Single(obj) => Value::Object(obj),
            Record::List(items) => Value::Array(items.into_iter().map(Value::Object).collect()),
        }
    }
}
