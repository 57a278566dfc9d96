use crate::models::FixtureRecord;
use crate::utils::json::{DecodeError, FieldReader};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Country {
    pub id: Option<i32>,
    pub code: String,
    pub name: String,
}

impl Country {
    pub fn new(id: Option<i32>, code: String, name: String) -> Self {
        Self { id, code, name }
    }
}

impl FixtureRecord for Country {
    const KIND: &'static str = "Country";
    const KNOWN_KEYS: &'static [&'static str] = &["id", "code", "name"];

    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let reader = FieldReader::new(Self::KIND, value)?;

        let country = Self {
            id: reader.optional_int(&["id"])?,
            code: reader.string_or_empty(&["code"])?,
            name: reader.string_or_empty(&["name"])?,
        };

        let ignored = reader.ignored_keys(Self::KNOWN_KEYS);
        if !ignored.is_empty() {
            debug!("Ignoring unknown {} keys: {:?}", Self::KIND, ignored);
        }

        Ok(country)
    }

    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl TryFrom<Value> for Country {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}
