use crate::models::FixtureRecord;
use crate::utils::json::{DecodeError, FieldReader};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

const PARENT_KEYS: &[&str] = &["parentOrgTypeId", "parent_org_type_id"];

/// An organization type. `parent_org_type_id` names another `OrgType` by id;
/// `0` means the type has no parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value", rename_all = "camelCase")]
pub struct OrgType {
    pub id: Option<i32>,
    pub name: String,
    pub parent_org_type_id: i32,
}

impl OrgType {
    pub fn new(id: Option<i32>, name: String, parent_org_type_id: i32) -> Self {
        Self {
            id,
            name,
            parent_org_type_id,
        }
    }

    pub fn has_parent(&self) -> bool {
        self.parent_org_type_id != 0
    }
}

impl FixtureRecord for OrgType {
    const KIND: &'static str = "OrgType";
    const KNOWN_KEYS: &'static [&'static str] =
        &["id", "name", "parentOrgTypeId", "parent_org_type_id"];

    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let reader = FieldReader::new(Self::KIND, value)?;

        let org_type = Self {
            id: reader.optional_int(&["id"])?,
            name: reader.string_or_empty(&["name"])?,
            parent_org_type_id: reader.int_or_zero(PARENT_KEYS)?,
        };

        let ignored = reader.ignored_keys(Self::KNOWN_KEYS);
        if !ignored.is_empty() {
            debug!("Ignoring unknown {} keys: {:?}", Self::KIND, ignored);
        }

        Ok(org_type)
    }

    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl TryFrom<Value> for OrgType {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}
