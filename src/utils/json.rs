use serde_json::{Map, Value};
use thiserror::Error;

pub type JsonObject = Map<String, Value>;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Expected a JSON object for {kind}, found {found}")]
    NotAnObject {
        kind: &'static str,
        found: &'static str,
    },
    #[error("Field `{key}` of {kind} must be {expected}, found {found}")]
    InvalidField {
        kind: &'static str,
        key: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Reads recognized keys out of a JSON object with per-type defaults.
///
/// Every lookup takes a list of accepted key names, primary name first and
/// aliases after; the first one present with a non-null value is used, so a
/// `null` primary key falls through to its alias.
pub struct FieldReader<'a> {
    kind: &'static str,
    object: &'a JsonObject,
}

impl<'a> FieldReader<'a> {
    pub fn new(kind: &'static str, value: &'a Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(object) => Ok(Self { kind, object }),
            other => Err(DecodeError::NotAnObject {
                kind,
                found: json_type_name(other),
            }),
        }
    }

    pub fn optional_int(&self, keys: &[&str]) -> Result<Option<i32>, DecodeError> {
        let Some((key, value)) = self.lookup(keys) else {
            return Ok(None);
        };

        match value {
            Value::Number(number) => number
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .map(Some)
                .ok_or_else(|| self.invalid(key, "a 32-bit integer", value)),
            other => Err(self.invalid(key, "a 32-bit integer", other)),
        }
    }

    pub fn int_or_zero(&self, keys: &[&str]) -> Result<i32, DecodeError> {
        Ok(self.optional_int(keys)?.unwrap_or(0))
    }

    pub fn string_or_empty(&self, keys: &[&str]) -> Result<String, DecodeError> {
        let Some((key, value)) = self.lookup(keys) else {
            return Ok(String::new());
        };

        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(self.invalid(key, "a string", other)),
        }
    }

    /// Keys present in the object that no decoder recognizes.
    pub fn ignored_keys(&self, known: &[&str]) -> Vec<&'a str> {
        self.object
            .keys()
            .map(String::as_str)
            .filter(|key| !known.contains(key))
            .collect()
    }

    fn lookup<'k>(&self, keys: &[&'k str]) -> Option<(&'k str, &'a Value)> {
        keys.iter()
            .find_map(|key| {
                self.object
                    .get(*key)
                    .filter(|value| !value.is_null())
                    .map(|value| (*key, value))
            })
    }

    fn invalid(&self, key: &str, expected: &'static str, found: &Value) -> DecodeError {
        DecodeError::InvalidField {
            kind: self.kind,
            key: key.to_string(),
            expected,
            found: json_type_name(found),
        }
    }
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "an integer",
        Value::Number(_) => "a floating-point number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
