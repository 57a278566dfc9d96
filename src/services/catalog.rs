use crate::config::Config;
use crate::models::{country::Country, org_type::OrgType, state_prov::StateProv, FixtureRecord};
use crate::utils::json::DecodeError;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid record #{index} in {}: {source}", .path.display())]
    DecodeError {
        path: PathBuf,
        index: usize,
        #[source]
        source: DecodeError,
    },
    #[error("Invalid JSON in {}: {source}", .path.display())]
    JsonError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Expected a JSON object or array of objects in {}", .path.display())]
    UnexpectedShape { path: PathBuf },
}

/// A non-zero reference that names no record in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub kind: &'static str,
    pub id: Option<i32>,
    pub field: &'static str,
    pub target: i32,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{} {}", self.kind, id)?,
            None => write!(f, "{} (no id)", self.kind)?,
        }
        write!(f, ": {} = {} does not resolve", self.field, self.target)
    }
}

/// Reads a fixture file holding one record or an array of records.
pub fn load_records<T: FixtureRecord>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value =
        serde_json::from_str(&content).map_err(|source| CatalogError::JsonError {
            path: path.to_path_buf(),
            source,
        })?;

    let decode = |index: usize, value: &Value| {
        T::from_value(value).map_err(|source| CatalogError::DecodeError {
            path: path.to_path_buf(),
            index,
            source,
        })
    };

    match &document {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, value)| decode(index, value))
            .collect(),
        Value::Object(_) => Ok(vec![decode(0, &document)?]),
        _ => Err(CatalogError::UnexpectedShape {
            path: path.to_path_buf(),
        }),
    }
}

fn load_optional_records<T: FixtureRecord>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let exists = path.try_exists().map_err(|source| CatalogError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    // A dangling symlink is not "missing"; reading it reports the failure
    if !exists && path.symlink_metadata().is_err() {
        info!("No {} fixtures at {}", T::KIND, path.display());
        return Ok(Vec::new());
    }

    let records = load_records(path)?;
    info!(
        "Loaded {} {} fixtures from {}",
        records.len(),
        T::KIND,
        path.display()
    );
    Ok(records)
}

/// A read-only set of fixtures with lookups by id and reference resolution.
///
/// The records only carry identifiers; resolving them is done here.
/// A reference value of `0` is the default on omission and means "none".
#[derive(Debug, Clone, Default)]
pub struct FixtureCatalog {
    countries: Vec<Country>,
    org_types: Vec<OrgType>,
    state_provs: Vec<StateProv>,
}

impl FixtureCatalog {
    pub fn load(config: &Config) -> Result<Self, CatalogError> {
        Ok(Self::from_records(
            load_optional_records(&config.countries_path())?,
            load_optional_records(&config.org_types_path())?,
            load_optional_records(&config.state_provs_path())?,
        ))
    }

    pub fn from_records(
        mut countries: Vec<Country>,
        org_types: Vec<OrgType>,
        state_provs: Vec<StateProv>,
    ) -> Self {
        countries.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

        Self {
            countries,
            org_types,
            state_provs,
        }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn org_types(&self) -> &[OrgType] {
        &self.org_types
    }

    pub fn state_provs(&self) -> &[StateProv] {
        &self.state_provs
    }

    pub fn country(&self, id: i32) -> Option<&Country> {
        self.countries.iter().find(|c| c.id == Some(id))
    }

    pub fn country_by_code(&self, code: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    pub fn org_type(&self, id: i32) -> Option<&OrgType> {
        self.org_types.iter().find(|o| o.id == Some(id))
    }

    pub fn state_prov(&self, id: i32) -> Option<&StateProv> {
        self.state_provs.iter().find(|s| s.id == Some(id))
    }

    pub fn parent_org_type(&self, org_type: &OrgType) -> Option<&OrgType> {
        if !org_type.has_parent() {
            return None;
        }
        self.org_type(org_type.parent_org_type_id)
    }

    pub fn children_of(&self, org_type_id: i32) -> Vec<&OrgType> {
        self.org_types
            .iter()
            .filter(|o| o.has_parent() && o.parent_org_type_id == org_type_id)
            .collect()
    }

    pub fn country_of(&self, state_prov: &StateProv) -> Option<&Country> {
        if state_prov.country_id == 0 {
            return None;
        }
        self.country(state_prov.country_id)
    }

    pub fn state_provs_in(&self, country_id: i32) -> Vec<&StateProv> {
        self.state_provs
            .iter()
            .filter(|s| s.country_id != 0 && s.country_id == country_id)
            .collect()
    }

    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();

        for org_type in &self.org_types {
            if org_type.has_parent() && self.parent_org_type(org_type).is_none() {
                dangling.push(DanglingReference {
                    kind: OrgType::KIND,
                    id: org_type.id,
                    field: "parentOrgTypeId",
                    target: org_type.parent_org_type_id,
                });
            }
        }

        for state_prov in &self.state_provs {
            if state_prov.country_id != 0 && self.country_of(state_prov).is_none() {
                dangling.push(DanglingReference {
                    kind: StateProv::KIND,
                    id: state_prov.id,
                    field: "countryId",
                    target: state_prov.country_id,
                });
            }
        }

        for reference in &dangling {
            warn!("Dangling reference: {}", reference);
        }

        dangling
    }
}
