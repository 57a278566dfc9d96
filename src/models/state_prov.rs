use crate::models::FixtureRecord;
use crate::utils::json::{DecodeError, FieldReader};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

const COUNTRY_KEYS: &[&str] = &["countryId", "country_id"];

/// A state or province, linked to its `Country` by `country_id` (`0` when unset).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value", rename_all = "camelCase")]
pub struct StateProv {
    pub id: Option<i32>,
    pub code: String,
    pub country_id: i32,
    pub name: String,
}

impl StateProv {
    pub fn new(id: Option<i32>, code: String, country_id: i32, name: String) -> Self {
        Self {
            id,
            code,
            country_id,
            name,
        }
    }
}

impl FixtureRecord for StateProv {
    const KIND: &'static str = "StateProv";
    const KNOWN_KEYS: &'static [&'static str] = &["id", "code", "countryId", "country_id", "name"];

    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let reader = FieldReader::new(Self::KIND, value)?;

        let state_prov = Self {
            id: reader.optional_int(&["id"])?,
            code: reader.string_or_empty(&["code"])?,
            country_id: reader.int_or_zero(COUNTRY_KEYS)?,
            name: reader.string_or_empty(&["name"])?,
        };

        let ignored = reader.ignored_keys(Self::KNOWN_KEYS);
        if !ignored.is_empty() {
            debug!("Ignoring unknown {} keys: {:?}", Self::KIND, ignored);
        }

        Ok(state_prov)
    }

    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl TryFrom<Value> for StateProv {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}
