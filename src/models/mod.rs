use crate::utils::json::DecodeError;
use serde::Serialize;
use serde_json::Value;

pub mod country;
pub mod org_type;
pub mod state_prov;

/// A record that can be decoded from, and encoded to, a JSON fixture document.
///
/// Decoding reads each recognized key with its default and discards every
/// other key. Encoding always emits the primary (camel-case) key names.
pub trait FixtureRecord: Sized + Serialize {
    const KIND: &'static str;

    /// Every wire key the decoder recognizes, aliases included.
    const KNOWN_KEYS: &'static [&'static str];

    fn from_value(value: &Value) -> Result<Self, DecodeError>;

    fn id(&self) -> Option<i32>;

    fn from_json_str(json: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    fn from_json_slice(json: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(json)?;
        Self::from_value(&value)
    }

    fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
