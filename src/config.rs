use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub fixtures_dir: String,
    pub countries_file: String,
    pub org_types_file: String,
    pub state_provs_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv().ok();

        Ok(Self {
            fixtures_dir: env::var("FIXTURES_DIR").unwrap_or_else(|_| "./fixtures".to_string()),
            countries_file: env::var("COUNTRIES_FILE")
                .unwrap_or_else(|_| "countries.json".to_string()),
            org_types_file: env::var("ORG_TYPES_FILE")
                .unwrap_or_else(|_| "org-types.json".to_string()),
            state_provs_file: env::var("STATE_PROVS_FILE")
                .unwrap_or_else(|_| "state-provs.json".to_string()),
        })
    }

    pub fn with_fixtures_dir(fixtures_dir: impl Into<String>) -> Self {
        Self {
            fixtures_dir: fixtures_dir.into(),
            countries_file: "countries.json".to_string(),
            org_types_file: "org-types.json".to_string(),
            state_provs_file: "state-provs.json".to_string(),
        }
    }

    pub fn countries_path(&self) -> PathBuf {
        PathBuf::from(&self.fixtures_dir).join(&self.countries_file)
    }

    pub fn org_types_path(&self) -> PathBuf {
        PathBuf::from(&self.fixtures_dir).join(&self.org_types_file)
    }

    pub fn state_provs_path(&self) -> PathBuf {
        PathBuf::from(&self.fixtures_dir).join(&self.state_provs_file)
    }
}
